pub mod app_footer;
pub mod app_header;
pub mod app_root;
pub mod attachment;
pub mod signatures;
pub mod templates;
