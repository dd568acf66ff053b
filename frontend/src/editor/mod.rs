pub mod app_editor;
pub mod editor_tools;
pub mod surface;
