//! Templates and signatures: a fixed built-in set plus entries the user
//! saved, kept in local storage without the built-ins.

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::{CATEGORY_ALL, MARKUP_BREAK};
use crate::error::Result;
use crate::storage::{read_json, write_json, Storage};

static BUILTIN_TEMPLATES: Lazy<Vec<Template>> = Lazy::new(|| {
    parse_builtin("templates", include_str!("../data/templates.json"))
});

static BUILTIN_SIGNATURES: Lazy<Vec<Signature>> = Lazy::new(|| {
    parse_builtin("signatures", include_str!("../data/signatures.json"))
});

fn parse_builtin<T: DeserializeOwned>(label: &str, text: &str) -> Vec<T> {
    serde_json::from_str(text).unwrap_or_else(|err| {
        log::error!("builtin {label}: {:?}", err);
        vec![]
    })
}

pub fn builtin_templates() -> Vec<Template> {
    BUILTIN_TEMPLATES.clone()
}

pub fn builtin_signatures() -> Vec<Signature> {
    BUILTIN_SIGNATURES.clone()
}

pub trait CatalogEntry: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn content(&self) -> &str;

    fn category(&self) -> Option<&str> {
        None
    }

    /// `needle` is already lowercased.
    fn matches(&self, needle: &str) -> bool {
        self.name().to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CatalogEntry for Template {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.subject.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Signature {
    pub id: String,
    pub name: String,
    pub content: String,
}

impl CatalogEntry for Signature {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone)]
pub struct Catalog<T> {
    key: String,
    builtin: Vec<T>,
    user: Vec<T>,
}

impl<T: CatalogEntry> Catalog<T> {
    pub fn new(key: &str, builtin: Vec<T>) -> Self {
        Self {
            key: key.to_string(),
            builtin,
            user: vec![],
        }
    }

    /// Built-ins followed by whatever the user saved earlier. A record that
    /// does not parse is logged and skipped.
    pub fn load<S: Storage + ?Sized>(key: &str, builtin: Vec<T>, storage: &S) -> Self {
        let mut catalog = Self::new(key, builtin);
        match read_json::<Vec<T>, _>(storage, key) {
            Ok(Some(user)) => {
                catalog.user = user.into_iter()
                    .filter(|entry| !catalog.is_builtin(entry.id()))
                    .collect();
            }
            Ok(None) => {}
            Err(err) => {
                log::error!("catalog {key}: {err}");
            }
        }
        catalog
    }

    pub fn entries(&self) -> impl Iterator<Item=&T> {
        self.builtin.iter().chain(self.user.iter())
    }

    pub fn user_entries(&self) -> &[T] {
        &self.user
    }

    pub fn len(&self) -> usize {
        self.builtin.len() + self.user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries().find(|entry| entry.id() == id)
    }

    pub fn is_builtin(&self, id: &str) -> bool {
        self.builtin.iter().any(|entry| entry.id() == id)
    }

    /// Case-insensitive substring search. `None` or `"All"` as category
    /// means every category.
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&T> {
        let needle = query.trim().to_lowercase();
        let category = category.filter(|value| !value.is_empty() && *value != CATEGORY_ALL);
        self.entries()
            .filter(|entry| match category {
                Some(category) => entry.category() == Some(category),
                None => true,
            })
            .filter(|entry| needle.is_empty() || entry.matches(&needle))
            .collect()
    }

    pub fn add<S: Storage + ?Sized>(&mut self, entry: T, storage: &S) -> Result<()> {
        self.user.push(entry);
        self.persist(storage)
    }

    /// Replaces the user entry carrying the same id, or appends. Built-in
    /// entries are never replaced; `Ok(false)` is returned for them.
    pub fn upsert<S: Storage + ?Sized>(&mut self, entry: T, storage: &S) -> Result<bool> {
        if self.is_builtin(entry.id()) {
            return Ok(false);
        }
        match self.user.iter_mut().find(|item| item.id() == entry.id()) {
            Some(item) => *item = entry,
            None => self.user.push(entry),
        }
        self.persist(storage)?;
        Ok(true)
    }

    fn persist<S: Storage + ?Sized>(&self, storage: &S) -> Result<()> {
        write_json(storage, &self.key, &self.user)
    }
}

/// Body after applying `signature`, or `None` when the body already carries it.
pub fn append_signature(body: &str, signature: &str) -> Option<String> {
    if body.is_empty() {
        Some(signature.to_string())
    } else if body.contains(signature) {
        None
    } else {
        Some(format!("{body}{MARKUP_BREAK}{signature}"))
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::{CATEGORIES, KEY_SIGNATURES, KEY_TEMPLATES, SIGNATURE_DEFAULT, SIGNATURE_PROFESSIONAL};
    use crate::storage::MemoryStorage;

    use super::*;

    fn user_template(id: &str, name: &str) -> Template {
        Template {
            id: id.to_string(),
            name: name.to_string(),
            subject: "Quarterly numbers".to_string(),
            content: "<p>see attached</p>".to_string(),
            category: Some("Personal".to_string()),
        }
    }

    #[test]
    fn test_builtins_parse() {
        let templates = builtin_templates();
        assert_eq!(templates.len(), 30);
        for template in &templates {
            let category = template.category.as_deref().unwrap();
            assert!(CATEGORIES.iter().any(|item| *item == category));
        }
        let signatures = builtin_signatures();
        let ids = signatures.iter().map(|sig| sig.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, [SIGNATURE_DEFAULT, SIGNATURE_PROFESSIONAL]);
    }

    #[test]
    fn test_search_name_and_subject_case_insensitive() {
        let catalog = Catalog::new(KEY_TEMPLATES, builtin_templates());
        let found = catalog.search("MEETING", None);
        assert!(found.iter().any(|t| t.name == "Meeting Request"));

        // matches the subject "Happy Birthday!" and the name "Birthday Wishes"
        let found = catalog.search("birthday", Some("All"));
        assert_eq!(found.len(), 1);

        let found = catalog.search("", Some("Real Estate"));
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|t| t.category.as_deref() == Some("Real Estate")));

        assert!(catalog.search("no such template", None).is_empty());
    }

    #[test]
    fn test_add_persists_only_user_entries() {
        let storage = MemoryStorage::new();
        let mut catalog = Catalog::load(KEY_TEMPLATES, builtin_templates(), &storage);
        catalog.add(user_template("u1", "Report"), &storage).unwrap();
        assert_eq!(catalog.len(), 31);

        let saved: Vec<Template> = read_json(&storage, KEY_TEMPLATES).unwrap().unwrap();
        assert_eq!(saved, vec![user_template("u1", "Report")]);

        let reloaded = Catalog::load(KEY_TEMPLATES, builtin_templates(), &storage);
        assert_eq!(reloaded.len(), 31);
        assert_eq!(reloaded.user_entries().len(), 1);
        assert_eq!(reloaded.get("u1").unwrap().name, "Report");
    }

    #[test]
    fn test_malformed_catalog_falls_back_to_builtins() {
        let storage = MemoryStorage::new();
        storage.set(KEY_SIGNATURES, "[{\"id\":").unwrap();
        let catalog = Catalog::load(KEY_SIGNATURES, builtin_signatures(), &storage);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.user_entries().is_empty());
    }

    #[test]
    fn test_upsert_edits_user_but_not_builtin() {
        let storage = MemoryStorage::new();
        let mut catalog = Catalog::load(KEY_SIGNATURES, builtin_signatures(), &storage);
        let work = Signature { id: "w".to_string(), name: "Work".to_string(), content: "<p>W</p>".to_string() };
        assert!(catalog.upsert(work.clone(), &storage).unwrap());
        let edited = Signature { content: "<p>W2</p>".to_string(), ..work };
        assert!(catalog.upsert(edited, &storage).unwrap());
        assert_eq!(catalog.user_entries().len(), 1);
        assert_eq!(catalog.get("w").unwrap().content, "<p>W2</p>");

        let hijack = Signature { id: SIGNATURE_DEFAULT.to_string(), name: "x".to_string(), content: "x".to_string() };
        assert!(!catalog.upsert(hijack, &storage).unwrap());
        assert_ne!(catalog.get(SIGNATURE_DEFAULT).unwrap().content, "x");
    }

    #[test]
    fn test_append_signature() {
        assert_eq!(append_signature("", "<p>S</p>").as_deref(), Some("<p>S</p>"));
        assert_eq!(append_signature("<p>B</p>", "<p>S</p>").as_deref(), Some("<p>B</p><div><br></div><p>S</p>"));
        assert_eq!(append_signature("<p>B</p><div><br></div><p>S</p>", "<p>S</p>"), None);
    }
}
