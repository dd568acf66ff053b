use std::cell::RefCell;
use std::rc::Rc;

use crate::types::Notice;

/// Fire-and-forget, user visible message channel.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}

/// Keeps every notice, for headless use.
#[derive(Debug, Default)]
pub struct NoticeLog {
    list: RefCell<Vec<Notice>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.list.borrow().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.list.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.list.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.borrow().is_empty()
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notice: Notice) {
        log::debug!("notice: {} - {}", notice.title, notice.description);
        self.list.borrow_mut().push(notice);
    }
}
