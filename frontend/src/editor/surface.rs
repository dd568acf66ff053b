use composer::EditorSurface;

use crate::utils::{editor_element, exec_command_full, return_focus};

/// A contenteditable block found by `selector`. Until it is mounted the
/// markup is kept in `pending`, which the block renders as its initial content.
#[derive(Debug)]
pub struct DomSurface {
    selector: &'static str,
    pending: String,
}

impl DomSurface {
    pub fn new(selector: &'static str) -> Self {
        Self {
            selector,
            pending: String::new(),
        }
    }
}

impl EditorSurface for DomSurface {
    fn apply_command(&mut self, command: &str, argument: &str) {
        return_focus(self.selector);
        if !exec_command_full(command, false, argument) {
            log::warn!("execCommand {command} was not applied to {}", self.selector);
        }
    }

    fn read_content(&self) -> String {
        match editor_element(self.selector) {
            Some(element) => element.inner_html(),
            None => self.pending.clone(),
        }
    }

    fn replace_content(&mut self, markup: &str) {
        self.pending = markup.to_string();
        if let Some(element) = editor_element(self.selector) {
            element.set_inner_html(markup);
        }
    }

    fn focus(&mut self) {
        return_focus(self.selector);
    }
}
