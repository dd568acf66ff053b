use std::cell::RefCell;

use dominator::{Dom, events, html};
use futures_signals::signal_vec::{MutableVec, SignalVec, SignalVecExt};
use once_cell::sync::Lazy;
use web_sys::Range;

use crate::constants::{TAG_BUTTON, TAG_DIV};
use crate::utils::get_selection;

pub static DIALOGS: Lazy<MutableVec<Dialog>> = Lazy::new(|| {
    MutableVec::new()
});

thread_local! {
    // one entry per open dialog: the selection it took away
    static RANGES_SAVED: RefCell<Vec<Option<Range>>> = RefCell::new(vec![]);
}

#[derive(Clone, Debug)]
pub struct Dialog {
    pub title: String,
    pub confirm_label: String,
    pub form: fn() -> Dom,
    pub confirm: fn(),
    pub cancel: fn(),
}

impl Default for Dialog {
    fn default() -> Self {
        Self {
            title: "".to_string(),
            confirm_label: "Save".to_string(),
            form: || html!(TAG_DIV),
            confirm: || {},
            cancel: || {},
        }
    }
}

impl Dialog {
    pub fn form(title: &str, form: fn() -> Dom, confirm: fn(), cancel: fn()) {
        Self::custom(Self {
            title: title.to_string(),
            form,
            confirm,
            cancel,
            ..Dialog::default()
        });
    }
    pub fn custom(dialog: Dialog) {
        common_open();
        DIALOGS.lock_mut().push_cloned(dialog);
    }
}

// ===

fn css_class(label: &str) -> String {
    format!("dialogs__{label}")
}

/// Every open dialog, later ones layered on top; the forms underneath stay
/// mounted so a nested dialog can act on them.
pub fn dialogs() -> impl SignalVec<Item=Dom> {
    DIALOGS.signal_vec_cloned().map(|data| dialog_form(&data))
}

fn dialog_form(data: &Dialog) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("back"))
        .child(html!(TAG_DIV, {
            .class(css_class("container"))
            .children([
                html!(TAG_DIV,{
                    .class(css_class("header"))
                    .text(&data.title)
                }),
                html!(TAG_DIV,{
                    .class(css_class("body"))
                    .child((data.form)())
                }),
                dialog_footer(data),
            ])
        }))
    })
}

fn dialog_footer(data: &Dialog) -> Dom {
    let confirm = data.confirm;
    let cancel = data.cancel;

    html!(TAG_DIV,{
        .class(css_class("footer"))
        .children([
            html!(TAG_BUTTON, {
                .text("Cancel")
                .attr("aria-label", "cancel")
                .event(move|_: events::Click|{
                    dialog_close();
                    cancel();
                })
            }),
            html!(TAG_BUTTON, {
                .text(&data.confirm_label)
                .attr("aria-label", "confirm")
                .event(move|_: events::Click|{
                    // the form is still mounted while `confirm` reads its inputs
                    confirm();
                    dialog_close();
                })
            }),
        ])
    })
}

fn dialog_close() {
    let count = DIALOGS.lock_mut().len();
    if count > 0 {
        DIALOGS.lock_mut().remove(count - 1);
    }
    common_close();
}

/// Remembers the selection the dialog inputs are about to take away.
fn common_open() {
    let current = get_selection()
        .filter(|selection| selection.range_count() > 0)
        .and_then(|selection| selection.get_range_at(0).ok());
    RANGES_SAVED.with(|ranges| ranges.borrow_mut().push(current));
}

/// Puts back the selection saved when the top dialog opened.
pub fn restore_selection() {
    RANGES_SAVED.with(|ranges| {
        if let Some(Some(saved)) = ranges.borrow().last() {
            if let Some(selection) = get_selection() {
                if selection.remove_all_ranges().is_ok() && selection.add_range(saved).is_ok() {}
            }
        }
    });
}

fn common_close() {
    restore_selection();
    RANGES_SAVED.with(|ranges| ranges.borrow_mut().pop());
}
