use dominator::{Dom, html};

use crate::constants::TAG_DIV;
use crate::dialog::dialogs::dialogs;
use crate::dialog::notices::notices;
use crate::editor::app_editor::app_editor;
use crate::elements::app_footer::app_footer;
use crate::elements::app_header::app_header;
use crate::elements::attachment::attachments;
use crate::elements::signatures::signatures;
use crate::elements::templates::templates;

fn css_class(label: &str) -> String {
    format!("app-root__{label}")
}

pub fn app_root() -> Dom {
    html!(TAG_DIV, {
        .class("app-root")
        .children([
            html!(TAG_DIV, {
                .class(css_class("compose"))
                .children([app_header(), app_editor(), attachments(), app_footer()])
            }),
            html!(TAG_DIV, {
                .class(css_class("sidebar"))
                .children([templates(), signatures()])
            }),
            notices(),
        ])
        .children_signal_vec(dialogs())
    })
}
