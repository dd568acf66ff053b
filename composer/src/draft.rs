use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::storage::{read_json, write_json, Storage};
use crate::types::Recipient;

/// Fields that are missing or `null` read as empty, and a timestamp that
/// does not parse reads as `None`, so a readable record is never dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Draft {
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipients: Vec<Recipient>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
    where D: Deserializer<'de>
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|value| value.as_str()).and_then(parse_timestamp))
}

/// RFC 3339, or a bare local date-time taken as UTC.
fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(stamp.with_timezone(&Utc));
    }
    match NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(stamp) => Some(stamp.and_utc()),
        Err(err) => {
            log::warn!("draft timestamp {text:?} ignored: {err}");
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftLoad {
    Restored(Draft),
    Missing,
    Malformed,
}

/// The single draft slot. Saving overwrites whatever was there.
#[derive(Debug, Clone)]
pub struct DraftStore {
    key: String,
}

impl DraftStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }

    pub fn save<S>(&self, storage: &S, recipients: &[Recipient], subject: &str, body: &str) -> Result<Draft>
        where S: Storage + ?Sized
    {
        let draft = Draft {
            recipients: recipients.to_vec(),
            subject: subject.to_string(),
            body: body.to_string(),
            timestamp: Some(Utc::now().trunc_subsecs(3)),
        };
        write_json(storage, &self.key, &draft)?;
        log::info!("draft saved: {} recipients", draft.recipients.len());
        Ok(draft)
    }

    pub fn load<S: Storage + ?Sized>(&self, storage: &S) -> DraftLoad {
        match read_json::<Draft, _>(storage, &self.key) {
            Ok(Some(draft)) => {
                log::info!("draft restored from {:?}", draft.timestamp);
                DraftLoad::Restored(draft)
            }
            Ok(None) => DraftLoad::Missing,
            Err(err) => {
                log::error!("Error loading draft: {err}");
                DraftLoad::Malformed
            }
        }
    }

    pub fn clear<S: Storage + ?Sized>(&self, storage: &S) -> Result<()> {
        storage.remove(&self.key)?;
        log::info!("draft cleared");
        Ok(())
    }
}
