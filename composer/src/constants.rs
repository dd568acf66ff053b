pub static KEY_DRAFT: &'static str = "emailDraft";
pub static KEY_TEMPLATES: &'static str = "emailTemplates";
pub static KEY_SIGNATURES: &'static str = "emailSignatures";

pub static CATEGORY_ALL: &'static str = "All";
pub static CATEGORY_USER: &'static str = "Personal";

pub static CATEGORIES: [&'static str; 9] = [
    "All",
    "Business",
    "Personal",
    "Academic",
    "Customer Service",
    "Job Application",
    "Networking",
    "Event Planning",
    "Real Estate",
];

pub static SIGNATURE_DEFAULT: &'static str = "default";
pub static SIGNATURE_PROFESSIONAL: &'static str = "professional";

// markup glued between an existing body and an appended signature
pub static MARKUP_BREAK: &'static str = "<div><br></div>";
pub static MARKUP_BLANK: &'static str = "<p><br></p>";

pub const SEED_BLANK_LINES: usize = 2;

pub const KB: u64 = 1024;
pub const MB: u64 = 1024 * 1024;
