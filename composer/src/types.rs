use std::fmt;

use serde::{Deserialize, Serialize};

pub type RecipientId = String;
pub type AttachmentId = String;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientClass {
    To,
    Cc,
    Bcc,
}

impl RecipientClass {
    pub const ALL: [RecipientClass; 3] = [RecipientClass::To, RecipientClass::Cc, RecipientClass::Bcc];

    pub fn label(&self) -> &'static str {
        match *self {
            RecipientClass::To => "To",
            RecipientClass::Cc => "Cc",
            RecipientClass::Bcc => "Bcc",
        }
    }
}

impl fmt::Display for RecipientClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One address in the To/Cc/Bcc rows. Serialized with the field names
/// older drafts were written with (`email`, `type`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Recipient {
    pub id: RecipientId,
    #[serde(rename = "email")]
    pub address: String,
    #[serde(rename = "type")]
    pub class: RecipientClass,
}

/// A file as handed over by the file picker.
#[derive(Debug, Clone)]
pub struct SelectedFile<F> {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub payload: F,
}

#[derive(Debug, Clone)]
pub struct Attachment<F> {
    pub id: AttachmentId,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub payload: F,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Normal,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn normal(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            severity: Severity::Normal,
        }
    }

    pub fn destructive(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DraftState {
    #[default]
    Empty,
    Dirty,
    Saved,
    Restored,
    Cleared,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SendRejection {
    NoRecipients,
    NoSubject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Rejected(SendRejection),
    Accepted { to: Vec<String> },
}

impl SendOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SendOutcome::Accepted { .. })
    }
}
