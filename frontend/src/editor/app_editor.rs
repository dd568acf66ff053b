use dominator::{Dom, events, html};

use crate::constants::{BODY_EDITOR_ID, PROP_EDITABLE, PROP_HTML, TAG_DIV};
use crate::editor::editor_tools::{editor_tools, ToolTarget};
use crate::state::{body, with_composer};

fn css_class(label: &str) -> String {
    format!("app-editor__{label}")
}

pub fn app_editor() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            editor_tools(ToolTarget::Body),
            html!(TAG_DIV, {
                .class(css_class("content"))
                .attr("id", BODY_EDITOR_ID)
                .attr(PROP_EDITABLE, "true")
                .prop(PROP_HTML, body())
                .event(handle_input)
            })
        ])
    })
}

fn handle_input(_: events::Input) {
    with_composer(|composer| composer.on_input());
}
