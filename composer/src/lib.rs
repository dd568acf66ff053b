pub mod attachments;
pub mod composer;
pub mod config;
pub mod constants;
pub mod draft;
pub mod editor;
pub mod error;
pub mod library;
pub mod notify;
pub mod recipients;
pub mod storage;
pub mod types;
pub mod utils;

pub use crate::composer::Composer;
pub use crate::config::Settings;
pub use crate::editor::{ContentBridge, EditCommand, EditorSurface, MemorySurface};
pub use crate::error::ComposeError;
pub use crate::notify::{NoticeLog, Notifier};
pub use crate::storage::{MemoryStorage, Storage};
