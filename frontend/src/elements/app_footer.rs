use dominator::{Dom, events, html};

use crate::constants::{TAG_BUTTON, TAG_DIV};
use crate::elements::attachment::attach_input;
use crate::state::with_composer;

const ATTACH_INPUT_ID: &'static str = "attach-files";

fn css_class(label: &str) -> String {
    format!("app-footer__{label}")
}

pub fn app_footer() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("group"))
                .children([
                    button("Send", handle_send),
                    html!("label", {
                        .class(css_class("button"))
                        .attr("for", ATTACH_INPUT_ID)
                        .text("Attach")
                    }),
                    attach_input(ATTACH_INPUT_ID),
                ])
            }),
            html!(TAG_DIV, {
                .class(css_class("group"))
                .child(button("Save Draft", handle_save_draft))
            }),
        ])
    })
}

fn handle_send() {
    if let Some(outcome) = with_composer(|composer| composer.send()) {
        log::debug!("send: {outcome:?}");
    }
}

fn handle_save_draft() {
    with_composer(|composer| composer.save_draft());
}

fn button(label: &str, click: fn()) -> Dom {
    html!(TAG_BUTTON, {
        .class(css_class("button"))
        .attr("type", "button")
        .text(label)
        .event(move |_: events::Click| click())
    })
}
