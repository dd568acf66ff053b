use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, File, HtmlDocument, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Selection, Window};

use composer::types::SelectedFile;

fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

fn get_html_document() -> Option<HtmlDocument> {
    get_document().and_then(|d|d.dyn_into::<HtmlDocument>().ok())
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlSelectElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

pub fn get_local_storage() -> Option<web_sys::Storage> {
    get_window().and_then(|w| w.local_storage().ok()).and_then(|s| s)
}

pub fn get_value_by_query(selectors: &str) -> String {
    query_selector(selectors)
        .map(|element|get_value_from_input(JsValue::from(element)))
        .unwrap_or_default()
}

pub fn get_input_value(name: &str) -> String {
    get_value_by_query(&format!("[name={name}]"))
}

pub fn get_target_value(target: Option<EventTarget>) -> String {
    target.map(|target| get_value_from_input(JsValue::from(target))).unwrap_or_default()
}

pub fn clear_target_value(target: Option<EventTarget>) {
    if let Some(input) = target.and_then(|target| target.dyn_into::<HtmlInputElement>().ok()) {
        input.set_value("");
    }
}

pub fn query_selector(selectors: &str) -> Option<Element> {
    get_document().and_then(|d| d.query_selector(selectors).ok()).and_then(|e|e)
}

pub fn get_html_element(el: Option<Element>) -> Option<HtmlElement> {
    el.map(|el| el.dyn_into::<HtmlElement>().ok()).and_then(|el| el)
}

pub fn editor_element(selector: &str) -> Option<HtmlElement> {
    get_html_element(query_selector(selector))
}

pub fn return_focus(selector: &str) {
    if let Some(element) = editor_element(selector) { if element.focus().is_ok() {} };
}

pub fn exec_command_full(command_id: &str, show_ui: bool, value: &str) -> bool {
    get_html_document().and_then(|d|d.exec_command_with_show_ui_and_value(command_id, show_ui, value).ok()).unwrap_or_default()
}

pub fn attr_data(key: &str) -> String {
    format!("data-{key}")
}

pub fn from_dataset(target: Option<EventTarget>, key: &str) -> String {
    get_element_from_target(target)
        .and_then(|element|element.dataset().get(key))
        .unwrap_or_default()
}

pub fn get_element_from_target(target: Option<EventTarget>) -> Option<HtmlElement> {
    target
        .map(|target| JsValue::from(target).dyn_ref::<HtmlElement>().cloned())
        .and_then(|t| t)
}

pub fn get_selection() -> Option<Selection> {
    get_window().and_then(|w| w.get_selection().ok()).and_then(|s|s)
}

/// Files chosen in an `<input type=file>`; the input is reset afterwards so
/// picking the same file again fires another change.
pub fn take_selected_files(target: Option<EventTarget>) -> Vec<SelectedFile<File>> {
    let mut list = vec![];
    if let Some(input) = target.and_then(|target| target.dyn_into::<HtmlInputElement>().ok()) {
        if let Some(files) = input.files() {
            for ind in 0..files.length() {
                if let Some(file) = files.item(ind) {
                    list.push(SelectedFile {
                        name: file.name(),
                        size: file.size() as u64,
                        mime_type: file.type_(),
                        payload: file,
                    });
                }
            }
        }
        input.set_value("");
    }
    list
}
