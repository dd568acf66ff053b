use std::cell::RefCell;

use futures_signals::signal::Mutable;
use once_cell::sync::Lazy;
use web_sys::File;

use composer::library::{Signature, Template};
use composer::types::Recipient;
use composer::{Composer, ContentBridge};

use crate::constants::{BODY_EDITOR_SELECTOR, SIGNATURE_EDITOR_SELECTOR};
use crate::dialog::notices::DialogNotifier;
use crate::editor::surface::DomSurface;
use crate::storage::LocalStorage;

pub type AppComposer = Composer<LocalStorage, DomSurface, DialogNotifier, File>;

thread_local! {
    static COMPOSER: RefCell<Option<AppComposer>> = RefCell::new(None);
    static SIGNATURE_EDITOR: RefCell<ContentBridge<DomSurface>> = RefCell::new(ContentBridge::new(DomSurface::new(SIGNATURE_EDITOR_SELECTOR)));
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentView {
    pub id: String,
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureView {
    pub signature: Signature,
    pub editable: bool,
}

pub static RECIPIENTS: Lazy<Mutable<Vec<Recipient>>> = Lazy::new(|| Mutable::new(vec![]));

pub static ATTACHMENTS: Lazy<Mutable<Vec<AttachmentView>>> = Lazy::new(|| Mutable::new(vec![]));

pub static SUBJECT: Lazy<Mutable<String>> = Lazy::new(|| Mutable::new("".to_string()));

pub static SHOW_CC: Lazy<Mutable<bool>> = Lazy::new(|| Mutable::new(false));

pub static SHOW_BCC: Lazy<Mutable<bool>> = Lazy::new(|| Mutable::new(false));

pub static TEMPLATES: Lazy<Mutable<Vec<Template>>> = Lazy::new(|| Mutable::new(vec![]));

pub static USER_TEMPLATES: Lazy<Mutable<Vec<Template>>> = Lazy::new(|| Mutable::new(vec![]));

pub static SIGNATURES: Lazy<Mutable<Vec<SignatureView>>> = Lazy::new(|| Mutable::new(vec![]));

pub static SELECTED_SIGNATURE: Lazy<Mutable<Option<String>>> = Lazy::new(|| Mutable::new(None));

pub static TEMPLATE_QUERY: Lazy<Mutable<String>> = Lazy::new(|| Mutable::new("".to_string()));

pub static TEMPLATE_CATEGORY: Lazy<Mutable<String>> = Lazy::new(|| Mutable::new("All".to_string()));

pub fn composer_init() {
    let composer = AppComposer::start(LocalStorage, DomSurface::new(BODY_EDITOR_SELECTOR), DialogNotifier);
    COMPOSER.with(|cell| *cell.borrow_mut() = Some(composer));
    refresh();
}

/// Runs `f` against the composer and republishes its state. Returns `None`
/// when the composer is busy, which happens when `execCommand` fires an
/// input event from inside a command that is still running.
pub fn with_composer<R>(f: impl FnOnce(&mut AppComposer) -> R) -> Option<R> {
    let result = COMPOSER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut composer) => composer.as_mut().map(f),
        Err(_) => {
            log::debug!("composer busy");
            None
        }
    });
    if result.is_some() {
        refresh();
    }
    result
}

/// The editor inside the signature dialog, separate from the body.
pub fn with_signature_editor<R>(f: impl FnOnce(&mut ContentBridge<DomSurface>) -> R) -> Option<R> {
    SIGNATURE_EDITOR.with(|cell| match cell.try_borrow_mut() {
        Ok(mut bridge) => Some(f(&mut bridge)),
        Err(_) => {
            log::debug!("signature editor busy");
            None
        }
    })
}

pub fn body() -> String {
    COMPOSER.with(|cell| match cell.try_borrow() {
        Ok(composer) => composer.as_ref().map(|c| c.body().to_string()).unwrap_or_default(),
        Err(_) => "".to_string(),
    })
}

pub fn refresh() {
    COMPOSER.with(|cell| {
        if let Ok(composer) = cell.try_borrow() {
            if let Some(composer) = composer.as_ref() {
                RECIPIENTS.set_neq(composer.recipients().to_vec());
                ATTACHMENTS.set_neq(composer.attachments().iter().map(|item| AttachmentView {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    size: item.size,
                }).collect());
                SUBJECT.set_neq(composer.subject().to_string());
                SHOW_CC.set_neq(composer.show_cc());
                SHOW_BCC.set_neq(composer.show_bcc());
                TEMPLATES.set_neq(composer.templates()
                    .search(&TEMPLATE_QUERY.get_cloned(), Some(&TEMPLATE_CATEGORY.get_cloned()))
                    .into_iter()
                    .cloned()
                    .collect());
                USER_TEMPLATES.set_neq(composer.templates().user_entries().to_vec());
                SIGNATURES.set_neq(composer.signatures().entries().map(|signature| SignatureView {
                    editable: !composer.signatures().is_builtin(&signature.id),
                    signature: signature.clone(),
                }).collect());
                SELECTED_SIGNATURE.set_neq(composer.selected_signature().map(|signature| signature.id.clone()));
            }
        }
    });
}
