pub mod dialogs;
pub mod notices;
