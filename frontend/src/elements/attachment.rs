use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;
use futures_signals::signal_vec::SignalVecExt;

use composer::utils::format_size;

use crate::constants::{PROP_TITLE, PROP_TYPE, TAG_DIV, TAG_INPUT, TAG_SPAN};
use crate::state::{with_composer, AttachmentView, ATTACHMENTS};
use crate::utils::{attr_data, from_dataset, take_selected_files};

const ATTR_ID: &'static str = "id";

fn css_class(label: &str) -> String {
    format!("attachments__{label}")
}

pub fn attachments() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children_signal_vec(ATTACHMENTS.signal_cloned().to_signal_vec().map(item))
    })
}

fn item(row: AttachmentView) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("item"))
        .attr(PROP_TITLE, &row.name)
        .children([
            html!(TAG_SPAN, {
                .class(css_class("filename"))
                .text(&row.name)
            }),
            html!(TAG_SPAN, {
                .class(css_class("size"))
                .text(&format_size(row.size))
            }),
            html!(TAG_SPAN, {
                .class(css_class("item-icon"))
                .attr(PROP_TITLE, "remove")
                .attr(attr_data(ATTR_ID), &row.id)
                .text("×")
                .event(handle_remove)
            }),
        ])
    })
}

fn handle_remove(e: events::Click) {
    let id = from_dataset(e.target(), ATTR_ID);
    with_composer(|composer| composer.remove_attachment(&id));
}

/// Hidden multi-file picker; the footer's Attach label opens it.
pub fn attach_input(id: &str) -> Dom {
    html!(TAG_INPUT, {
        .class(css_class("input"))
        .attr("id", id)
        .attr(PROP_TYPE, "file")
        .attr("multiple", "")
        .style("display", "none")
        .event(|e: events::Change| {
            let files = take_selected_files(e.target());
            if !files.is_empty() {
                with_composer(|composer| composer.add_attachments(files));
            }
        })
    })
}
