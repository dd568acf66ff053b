pub static PROP_HTML: &'static str = "innerHTML";
pub static PROP_EDITABLE: &'static str = "contenteditable";
pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_TITLE: &'static str = "title";
pub static PROP_NAME: &'static str = "name";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_SELECTED: &'static str = "selected";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_SELECT: &'static str = "select";
pub static TAG_OPTION: &'static str = "option";

pub static BODY_EDITOR_ID: &'static str = "body-editor";
pub static BODY_EDITOR_SELECTOR: &'static str = "#body-editor";
pub static SIGNATURE_EDITOR_ID: &'static str = "signature-editor";
pub static SIGNATURE_EDITOR_SELECTOR: &'static str = "#signature-editor";

pub static KEY_ENTER: &'static str = "Enter";
pub static KEY_COMMA: &'static str = ",";

pub const NOTICE_TIMEOUT_MS: u32 = 4000;

pub static FONT_NAMES: [&'static str; 5] = ["Arial", "Georgia", "Tahoma", "Times New Roman", "Verdana"];
pub static FONT_SIZES: [(&'static str, &'static str); 4] = [("2", "small"), ("3", "normal"), ("5", "large"), ("7", "huge")];
