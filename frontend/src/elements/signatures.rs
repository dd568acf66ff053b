use dominator::{Dom, events, html};
use futures_signals::signal::{Mutable, SignalExt};
use futures_signals::signal_vec::SignalVecExt;
use once_cell::sync::Lazy;

use composer::library::Signature;

use crate::constants::{PROP_EDITABLE, PROP_HTML, PROP_NAME, PROP_PLACEHOLDER, PROP_VALUE, SIGNATURE_EDITOR_ID, TAG_BUTTON, TAG_DIV, TAG_INPUT, TAG_SPAN};
use crate::dialog::dialogs::Dialog;
use crate::editor::editor_tools::{editor_tools, ToolTarget};
use crate::state::{with_composer, with_signature_editor, SignatureView, SELECTED_SIGNATURE, SIGNATURES};
use crate::utils::get_input_value;

const INPUT_NAME_SIGNATURE: &'static str = "signature-name";

/// Signature the open dialog edits; `None` while creating a new one.
static EDITING: Lazy<Mutable<Option<Signature>>> = Lazy::new(|| {
    Mutable::new(None)
});

fn css_class(label: &str) -> String {
    format!("signatures__{label}")
}

pub fn signatures() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("header"))
                .children([
                    html!(TAG_SPAN, {.text("Signatures")}),
                    html!(TAG_BUTTON, {
                        .attr("type", "button")
                        .text("New Signature")
                        .event(|_: events::Click| open_editor(None))
                    }),
                ])
            }),
            html!(TAG_DIV, {
                .class(css_class("list"))
                .children_signal_vec(SIGNATURES.signal_cloned().to_signal_vec().map(item))
            }),
        ])
    })
}

fn item(view: SignatureView) -> Dom {
    let id = view.signature.id.clone();
    let selected = id.clone();
    html!(TAG_DIV, {
        .class(css_class("item"))
        .class_signal("active", SELECTED_SIGNATURE.signal_ref(move |current| current.as_deref() == Some(selected.as_str())))
        .child(html!(TAG_SPAN, {
            .class(css_class("name"))
            .text(&view.signature.name)
            .event(move |_: events::Click| {
                with_composer(|composer| composer.apply_signature(&id));
            })
        }))
        .apply(|dom| {
            if view.editable {
                let signature = view.signature.clone();
                dom.child(html!(TAG_BUTTON, {
                    .class(css_class("edit"))
                    .attr("type", "button")
                    .text("Edit")
                    .event(move |_: events::Click| open_editor(Some(signature.clone())))
                }))
            } else {
                dom
            }
        })
    })
}

fn open_editor(signature: Option<Signature>) {
    let title = if signature.is_some() { "Edit Signature" } else { "New Signature" };
    let content = signature.as_ref().map(|signature| signature.content.clone()).unwrap_or_default();
    with_signature_editor(|bridge| bridge.set_content(&content));
    EDITING.set(signature);
    Dialog::form(title, dlg_signature_init, dlg_signature_result, dlg_signature_cancel);
}

fn dlg_signature_init() -> Dom {
    let name = EDITING.lock_ref().as_ref()
        .map(|signature| signature.name.clone())
        .unwrap_or_default();
    let content = with_signature_editor(|bridge| bridge.markup().to_string()).unwrap_or_default();

    html!(TAG_DIV, {
        .class(css_class("form"))
        .children([
            html!(TAG_INPUT, {
                .attr(PROP_NAME, INPUT_NAME_SIGNATURE)
                .attr(PROP_PLACEHOLDER, "Signature name")
                .prop(PROP_VALUE, name)
            }),
            editor_tools(ToolTarget::Signature),
            html!(TAG_DIV, {
                .class(css_class("content"))
                .attr("id", SIGNATURE_EDITOR_ID)
                .attr(PROP_EDITABLE, "true")
                .prop(PROP_HTML, content)
                .event(|_: events::Input| {
                    with_signature_editor(|bridge| bridge.on_input());
                })
            }),
        ])
    })
}

fn dlg_signature_result() {
    let name = get_input_value(INPUT_NAME_SIGNATURE);
    let content = with_signature_editor(|bridge| {
        bridge.on_input();
        bridge.markup().to_string()
    }).unwrap_or_default();
    let id = EDITING.lock_ref().as_ref().map(|signature| signature.id.clone());
    with_composer(|composer| composer.save_signature(id.as_deref(), &name, &content));
    dlg_signature_cancel();
}

fn dlg_signature_cancel() {
    EDITING.set(None);
    with_signature_editor(|bridge| bridge.clear());
}
