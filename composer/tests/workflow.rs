use std::rc::Rc;

use composer::constants::{KEY_DRAFT, MARKUP_BLANK};
use composer::types::{DraftState, RecipientClass, SelectedFile, SendOutcome, SendRejection, Severity};
use composer::{Composer, ContentBridge, EditCommand, EditorSurface, MemoryStorage, MemorySurface, NoticeLog, Settings, Storage};

type App = Composer<Rc<MemoryStorage>, MemorySurface, Rc<NoticeLog>, Vec<u8>>;

fn open(storage: &Rc<MemoryStorage>, notices: &Rc<NoticeLog>) -> App {
    Composer::start(Rc::clone(storage), MemorySurface::new(), Rc::clone(notices))
}

fn file(name: &str) -> SelectedFile<Vec<u8>> {
    SelectedFile {
        name: name.to_string(),
        size: 4,
        mime_type: "application/pdf".to_string(),
        payload: b"%PDF".to_vec(),
    }
}

#[test]
fn first_run_seeds_default_signature() {
    let storage = Rc::new(MemoryStorage::new());
    let notices = Rc::new(NoticeLog::new());
    let app = open(&storage, &notices);

    let signature = app.signatures().get("default").unwrap().content.clone();
    assert_eq!(app.body(), format!("{MARKUP_BLANK}{MARKUP_BLANK}{signature}"));
    assert_eq!(app.surface().read_content(), app.body());
    assert_eq!(app.state(), DraftState::Empty);
    assert!(notices.is_empty());
}

#[test]
fn draft_survives_a_fresh_session() {
    let storage = Rc::new(MemoryStorage::new());
    let notices = Rc::new(NoticeLog::new());

    let mut app = open(&storage, &notices);
    assert!(app.add_recipient("to@example.com", RecipientClass::To));
    assert!(app.add_recipient("cc@example.com", RecipientClass::Cc));
    app.set_subject("Status");
    app.set_body("<p>All green</p>");
    app.execute(EditCommand::Bold);
    assert!(app.save_draft());
    assert_eq!(notices.last().unwrap().title, "Draft Saved");
    let recipients = app.recipients().to_vec();
    let body = app.body().to_string();
    drop(app);

    let restored = open(&storage, &notices);
    assert_eq!(restored.state(), DraftState::Restored);
    assert_eq!(restored.recipients(), recipients.as_slice());
    assert_eq!(restored.subject(), "Status");
    assert_eq!(restored.body(), body);
    assert_eq!(restored.surface().read_content(), body);
    assert!(restored.show_cc());
    assert!(!restored.show_bcc());
}

#[test]
fn send_without_to_recipient_is_rejected() {
    let storage = Rc::new(MemoryStorage::new());
    let notices = Rc::new(NoticeLog::new());
    let mut app = open(&storage, &notices);
    app.add_recipient("a@b.com", RecipientClass::Cc);
    app.set_subject("Hi");
    let body = app.body().to_string();

    assert_eq!(app.send(), SendOutcome::Rejected(SendRejection::NoRecipients));
    let notice = notices.last().unwrap();
    assert_eq!(notice.title, "No Recipients");
    assert_eq!(notice.severity, Severity::Destructive);
    assert_eq!(app.recipients().len(), 1);
    assert_eq!(app.subject(), "Hi");
    assert_eq!(app.body(), body);
}

#[test]
fn send_without_subject_is_rejected() {
    let storage = Rc::new(MemoryStorage::new());
    let notices = Rc::new(NoticeLog::new());
    let mut app = open(&storage, &notices);
    app.add_recipient("a@b.com", RecipientClass::To);

    assert_eq!(app.send(), SendOutcome::Rejected(SendRejection::NoSubject));
    app.set_subject("   \t");
    assert_eq!(app.send(), SendOutcome::Rejected(SendRejection::NoSubject));
    assert_eq!(notices.last().unwrap().title, "No Subject");
    assert_eq!(app.recipients().len(), 1);
}

#[test]
fn accepted_send_resets_everything() {
    let storage = Rc::new(MemoryStorage::new());
    let notices = Rc::new(NoticeLog::new());
    let mut app = open(&storage, &notices);
    app.add_recipient("x@y.com", RecipientClass::To);
    app.add_recipient("z@y.com", RecipientClass::To);
    app.add_recipient("hidden@y.com", RecipientClass::Bcc);
    app.set_subject("Hello");
    app.add_attachments(vec![file("a.pdf"), file("b.pdf")]);
    app.save_draft();
    assert!(storage.contains(KEY_DRAFT));

    let outcome = app.send();
    assert_eq!(outcome, SendOutcome::Accepted { to: vec!["x@y.com".to_string(), "z@y.com".to_string()] });
    let notice = notices.last().unwrap();
    assert_eq!(notice.title, "Email Sent");
    assert_eq!(notice.description, "Your email was sent to x@y.com, z@y.com");

    assert!(app.recipients().is_empty());
    assert_eq!(app.subject(), "");
    assert_eq!(app.body(), "");
    assert!(app.attachments().is_empty());
    assert!(!storage.contains(KEY_DRAFT));
    assert_eq!(app.state(), DraftState::Cleared);
}

#[test]
fn malformed_draft_falls_back_to_seeded_body() {
    let storage = Rc::new(MemoryStorage::new());
    storage.set(KEY_DRAFT, "{\"recipients\": [").unwrap();
    let notices = Rc::new(NoticeLog::new());
    let app = open(&storage, &notices);

    assert!(app.recipients().is_empty());
    assert_eq!(app.subject(), "");
    assert!(app.body().starts_with(MARKUP_BLANK));
    assert_eq!(app.state(), DraftState::Empty);
}

#[test]
fn loosely_written_draft_is_restored() {
    let storage = Rc::new(MemoryStorage::new());
    storage.set(KEY_DRAFT, r#"{"recipients":null,"subject":"Kept subject","body":"<p>kept</p>","timestamp":"2024-03-01T10:20:30"}"#).unwrap();
    let notices = Rc::new(NoticeLog::new());
    let app = open(&storage, &notices);

    assert_eq!(app.state(), DraftState::Restored);
    assert!(app.recipients().is_empty());
    assert_eq!(app.subject(), "Kept subject");
    assert_eq!(app.body(), "<p>kept</p>");
}

#[test]
fn attachments_stage_and_remove() {
    let storage = Rc::new(MemoryStorage::new());
    let notices = Rc::new(NoticeLog::new());
    let mut app = open(&storage, &notices);
    assert_eq!(app.add_attachments(vec![file("a.pdf"), file("b.pdf")]), 2);
    let id = app.attachments()[0].id.clone();
    assert!(!app.remove_attachment("unknown"));
    assert!(app.remove_attachment(&id));
    assert_eq!(app.attachments().len(), 1);
    assert_eq!(app.attachments()[0].name, "b.pdf");
}

#[test]
fn user_catalog_entries_reload() {
    let storage = Rc::new(MemoryStorage::new());
    let notices = Rc::new(NoticeLog::new());
    let mut app = open(&storage, &notices);
    app.set_subject("Standup");
    let template = app.save_as_template("Standup notes").unwrap();
    let signature = app.save_signature(None, "Short", "<p>-- me</p>").unwrap();
    drop(app);

    let app = open(&storage, &notices);
    assert_eq!(app.templates().get(&template.id), Some(&template));
    assert_eq!(app.signatures().get(&signature.id), Some(&signature));
    assert_eq!(app.templates().search("standup", Some("Personal")).len(), 1);
}

#[test]
fn signature_formatted_in_its_own_editor() {
    let storage = Rc::new(MemoryStorage::new());
    let notices = Rc::new(NoticeLog::new());
    let mut app = open(&storage, &notices);
    let body = app.body().to_string();

    let mut editor = ContentBridge::new(MemorySurface::with_content("Jane Doe"));
    assert!(editor.execute(EditCommand::Bold));
    assert!(editor.execute(EditCommand::CreateLink("https://jane.example".to_string())));
    let signature = app.save_signature(None, "Linked", editor.markup()).unwrap();

    assert_eq!(signature.content, "<a href=\"https://jane.example\"><b>Jane Doe</b></a>");
    assert_eq!(app.body(), body);
    assert!(app.surface().commands().is_empty());

    let edited = app.save_signature(Some(&signature.id), "Linked", "<i>Jane</i>").unwrap();
    assert_eq!(edited.id, signature.id);
    assert_eq!(app.signatures().get(&signature.id).unwrap().content, "<i>Jane</i>");

    app.set_body("");
    assert!(app.apply_signature(&signature.id));
    assert_eq!(app.body(), "<i>Jane</i>");
}

#[test]
fn custom_storage_keys() {
    let storage = Rc::new(MemoryStorage::new());
    let notices = Rc::new(NoticeLog::new());
    let settings = Settings { draft_key: "draft:work".to_string(), ..Settings::default() };
    let mut app: App = Composer::with_settings(settings, Rc::clone(&storage), MemorySurface::new(), Rc::clone(&notices));
    app.set_subject("x");
    app.save_draft();
    assert!(storage.contains("draft:work"));
    assert!(!storage.contains(KEY_DRAFT));
}
