use std::sync::atomic::{AtomicUsize, Ordering};

use dominator::{Dom, events, html};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use gloo_timers::callback::Timeout;
use once_cell::sync::Lazy;

use composer::types::{Notice, Severity};
use composer::Notifier;

use crate::constants::{NOTICE_TIMEOUT_MS, TAG_DIV};

static NOTICES: Lazy<MutableVec<NoticeItem>> = Lazy::new(|| {
    MutableVec::new()
});

static NOTICE_ID: AtomicUsize = AtomicUsize::new(1);

#[derive(Debug, Clone)]
struct NoticeItem {
    id: usize,
    notice: Notice,
}

/// Toast stack in the corner; every notice goes away on its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn notify(&self, notice: Notice) {
        let id = NOTICE_ID.fetch_add(1, Ordering::Relaxed);
        log::info!("{}: {}", notice.title, notice.description);
        NOTICES.lock_mut().push_cloned(NoticeItem { id, notice });
        Timeout::new(NOTICE_TIMEOUT_MS, move || notice_close(id)).forget();
    }
}

fn notice_close(id: usize) {
    NOTICES.lock_mut().retain(|item| item.id != id);
}

fn css_class(label: &str) -> String {
    format!("notices__{label}")
}

pub fn notices() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children_signal_vec(NOTICES.signal_vec_cloned().map(notice_view))
    })
}

fn notice_view(item: NoticeItem) -> Dom {
    let id = item.id;
    html!(TAG_DIV, {
        .class(css_class("item"))
        .apply(|dom| match item.notice.severity {
            Severity::Destructive => dom.class(css_class("destructive")),
            Severity::Normal => dom,
        })
        .event(move |_: events::Click| notice_close(id))
        .children([
            html!("b", {.text(&item.notice.title)}),
            html!(TAG_DIV, {.text(&item.notice.description)}),
        ])
    })
}
