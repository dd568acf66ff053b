use crate::attachments::AttachmentStore;
use crate::config::Settings;
use crate::constants::{CATEGORY_USER, MARKUP_BLANK, SEED_BLANK_LINES};
use crate::draft::{DraftLoad, DraftStore};
use crate::editor::{ContentBridge, EditCommand, EditorSurface};
use crate::error::ComposeError;
use crate::library::{append_signature, builtin_signatures, builtin_templates, Catalog, Signature, Template};
use crate::notify::Notifier;
use crate::recipients::RecipientStore;
use crate::storage::Storage;
use crate::types::{Attachment, DraftState, Notice, Recipient, RecipientClass, SelectedFile, SendOutcome, SendRejection};
use crate::utils::new_id;

/// Everything one compose window holds, plus the workflow around it.
///
/// `S` persists drafts and user catalogs, `E` is the rich-text surface the
/// body lives in, `N` receives user facing notices and `F` is whatever the
/// host uses as a file handle.
pub struct Composer<S, E, N, F> {
    settings: Settings,
    storage: S,
    notifier: N,
    bridge: ContentBridge<E>,
    recipients: RecipientStore,
    attachments: AttachmentStore<F>,
    subject: String,
    templates: Catalog<Template>,
    signatures: Catalog<Signature>,
    drafts: DraftStore,
    state: DraftState,
    show_cc: bool,
    show_bcc: bool,
    selected_signature: Option<String>,
}

impl<S, E, N, F> Composer<S, E, N, F>
    where
        S: Storage,
        E: EditorSurface,
        N: Notifier
{
    pub fn start(storage: S, surface: E, notifier: N) -> Self {
        Self::with_settings(Settings::default(), storage, surface, notifier)
    }

    /// Loads the catalogs and the saved draft. With no usable draft the body
    /// is seeded with the configured signature.
    pub fn with_settings(settings: Settings, storage: S, surface: E, notifier: N) -> Self {
        let templates = Catalog::load(&settings.templates_key, builtin_templates(), &storage);
        let signatures = Catalog::load(&settings.signatures_key, builtin_signatures(), &storage);
        let drafts = DraftStore::new(&settings.draft_key);
        let mut composer = Self {
            settings,
            storage,
            notifier,
            bridge: ContentBridge::new(surface),
            recipients: RecipientStore::new(),
            attachments: AttachmentStore::new(),
            subject: String::new(),
            templates,
            signatures,
            drafts,
            state: DraftState::Empty,
            show_cc: false,
            show_bcc: false,
            selected_signature: None,
        };
        composer.restore();
        composer
    }

    fn restore(&mut self) {
        match self.drafts.load(&self.storage) {
            DraftLoad::Restored(draft) => {
                self.recipients.replace(draft.recipients);
                self.subject = draft.subject;
                self.bridge.sync_external(&draft.body);
                self.show_cc = self.recipients.has(RecipientClass::Cc);
                self.show_bcc = self.recipients.has(RecipientClass::Bcc);
                self.state = DraftState::Restored;
            }
            DraftLoad::Missing | DraftLoad::Malformed => self.seed(),
        }
    }

    fn seed(&mut self) {
        let signature = self.settings.seed_signature.as_deref()
            .and_then(|id| self.signatures.get(id))
            .map(|sig| sig.content.clone());
        if let Some(signature) = signature {
            let body = format!("{}{signature}", MARKUP_BLANK.repeat(SEED_BLANK_LINES));
            self.bridge.sync_external(&body);
        }
        self.state = DraftState::Empty;
    }

    // ===

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        self.bridge.markup()
    }

    pub fn recipients(&self) -> &[Recipient] {
        self.recipients.as_slice()
    }

    pub fn recipients_of(&self, class: RecipientClass) -> Vec<Recipient> {
        self.recipients.filter(class)
    }

    pub fn attachments(&self) -> &[Attachment<F>] {
        self.attachments.as_slice()
    }

    pub fn templates(&self) -> &Catalog<Template> {
        &self.templates
    }

    pub fn signatures(&self) -> &Catalog<Signature> {
        &self.signatures
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    pub fn show_cc(&self) -> bool {
        self.show_cc
    }

    pub fn show_bcc(&self) -> bool {
        self.show_bcc
    }

    pub fn selected_signature(&self) -> Option<&Signature> {
        self.selected_signature.as_deref().and_then(|id| self.signatures.get(id))
    }

    pub fn surface(&self) -> &E {
        self.bridge.surface()
    }

    pub fn surface_mut(&mut self) -> &mut E {
        self.bridge.surface_mut()
    }

    fn touch(&mut self) {
        self.state = DraftState::Dirty;
    }

    // === recipients

    pub fn add_recipient(&mut self, address: &str, class: RecipientClass) -> bool {
        match self.recipients.add(address, class) {
            Ok(Some(_)) => {
                self.touch();
                true
            }
            Ok(None) => false,
            Err(err) => {
                self.notifier.notify(Notice::destructive("Invalid Email", err.to_string()));
                false
            }
        }
    }

    pub fn remove_recipient(&mut self, id: &str) -> bool {
        let removed = self.recipients.remove(id).is_some();
        if removed {
            self.touch();
        }
        removed
    }

    pub fn toggle_cc(&mut self) {
        self.show_cc = !self.show_cc;
    }

    pub fn toggle_bcc(&mut self) {
        self.show_bcc = !self.show_bcc;
    }

    // === attachments

    pub fn add_attachments<I>(&mut self, files: I) -> usize
        where I: IntoIterator<Item=SelectedFile<F>>
    {
        let count = self.attachments.add_batch(files).len();
        if count > 0 {
            self.touch();
        }
        count
    }

    pub fn remove_attachment(&mut self, id: &str) -> bool {
        let removed = self.attachments.remove(id).is_some();
        if removed {
            self.touch();
        }
        removed
    }

    // === subject and body

    pub fn set_subject(&mut self, subject: &str) {
        if self.subject != subject {
            self.subject = subject.to_string();
            self.touch();
        }
    }

    /// Body handed in from outside, e.g. by a host re-rendering with a new value.
    pub fn set_body(&mut self, markup: &str) {
        if self.bridge.sync_external(markup) {
            self.touch();
        }
    }

    pub fn execute(&mut self, command: EditCommand) -> bool {
        let applied = self.bridge.execute(command);
        if applied {
            self.touch();
        }
        applied
    }

    pub fn insert_link(&mut self, url: &str) -> bool {
        self.execute(EditCommand::CreateLink(url.trim().to_string()))
    }

    pub fn on_input(&mut self) {
        if self.bridge.on_input() {
            self.touch();
        }
    }

    // === templates and signatures

    pub fn apply_template(&mut self, id: &str) -> bool {
        let Some(template) = self.templates.get(id).cloned() else {
            log::warn!("unknown template {id}");
            return false;
        };
        self.subject = template.subject;
        self.bridge.set_content(&template.content);
        self.touch();
        self.notifier.notify(Notice::normal(
            "Template Applied",
            format!("The \"{}\" template has been applied.", template.name),
        ));
        true
    }

    /// Appends the signature unless the body already carries it.
    pub fn apply_signature(&mut self, id: &str) -> bool {
        let Some(signature) = self.signatures.get(id).cloned() else {
            log::warn!("unknown signature {id}");
            return false;
        };
        let changed = match append_signature(self.bridge.markup(), &signature.content) {
            Some(body) => {
                self.bridge.set_content(&body);
                self.touch();
                true
            }
            None => false,
        };
        let description = if changed {
            format!("The \"{}\" signature has been applied.", signature.name)
        } else {
            format!("The \"{}\" signature is already present.", signature.name)
        };
        self.selected_signature = Some(signature.id);
        self.notifier.notify(Notice::normal("Signature Applied", description));
        changed
    }

    pub fn save_as_template(&mut self, name: &str) -> Option<Template> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let template = Template {
            id: new_id(),
            name: name.to_string(),
            subject: self.subject.clone(),
            content: self.bridge.markup().to_string(),
            category: Some(CATEGORY_USER.to_string()),
        };
        if let Err(err) = self.templates.add(template.clone(), &self.storage) {
            self.storage_failed(err);
            return None;
        }
        self.notifier.notify(Notice::normal(
            "Template Saved",
            format!("\"{}\" has been saved as a template.", template.name),
        ));
        Some(template)
    }

    /// Creates a signature, or edits the user signature `id`. Built-in
    /// signatures are read-only.
    pub fn save_signature(&mut self, id: Option<&str>, name: &str, content: &str) -> Option<Signature> {
        let name = name.trim();
        if name.is_empty() || content.trim().is_empty() {
            return None;
        }
        let signature = Signature {
            id: id.map(str::to_string).unwrap_or_else(new_id),
            name: name.to_string(),
            content: content.to_string(),
        };
        match self.signatures.upsert(signature.clone(), &self.storage) {
            Ok(true) => {
                self.notifier.notify(Notice::normal(
                    "Signature Saved",
                    format!("\"{}\" has been saved.", signature.name),
                ));
                Some(signature)
            }
            Ok(false) => None,
            Err(err) => {
                self.storage_failed(err);
                None
            }
        }
    }

    // === draft and send

    pub fn save_draft(&mut self) -> bool {
        let saved = self.drafts.save(&self.storage, self.recipients.as_slice(), &self.subject, self.bridge.markup());
        match saved {
            Ok(_) => {
                self.state = DraftState::Saved;
                self.notifier.notify(Notice::normal("Draft Saved", "Your email draft has been saved."));
                true
            }
            Err(err) => {
                self.storage_failed(err);
                false
            }
        }
    }

    /// Validates and "sends". A rejection leaves every field as it was; an
    /// accepted send resets the composer and drops the saved draft.
    pub fn send(&mut self) -> SendOutcome {
        let to = self.recipients.addresses(RecipientClass::To);
        if to.is_empty() {
            log::info!("send rejected: no recipients");
            self.notifier.notify(Notice::destructive(
                "No Recipients",
                "Please add at least one recipient in the To field.",
            ));
            return SendOutcome::Rejected(SendRejection::NoRecipients);
        }
        if self.subject.trim().is_empty() {
            log::info!("send rejected: no subject");
            self.notifier.notify(Notice::destructive("No Subject", "Please add a subject to your email."));
            return SendOutcome::Rejected(SendRejection::NoSubject);
        }

        self.notifier.notify(Notice::normal(
            "Email Sent",
            format!("Your email was sent to {}", to.join(", ")),
        ));

        self.recipients.clear();
        self.subject.clear();
        self.bridge.clear();
        self.attachments.clear();
        if let Err(err) = self.drafts.clear(&self.storage) {
            log::error!("{err}");
        }
        self.state = DraftState::Cleared;
        SendOutcome::Accepted { to }
    }

    fn storage_failed(&self, err: ComposeError) {
        log::error!("{err}");
        self.notifier.notify(Notice::destructive("Storage Error", err.to_string()));
    }
}
