use dominator::{Dom, events, html};
use futures_signals::signal::{Signal, SignalExt};
use futures_signals::signal_vec::SignalVecExt;

use composer::types::{Recipient, RecipientClass};

use crate::constants::{KEY_COMMA, KEY_ENTER, PROP_PLACEHOLDER, PROP_TITLE, PROP_TYPE, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_INPUT, TAG_SPAN};
use crate::state::{with_composer, RECIPIENTS, SHOW_BCC, SHOW_CC, SUBJECT};
use crate::utils::{attr_data, clear_target_value, from_dataset, get_target_value};

const ATTR_ID: &'static str = "id";

fn css_class(label: &str) -> String {
    format!("app-header__{label}")
}

pub fn app_header() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            recipient_row(RecipientClass::To),
        ])
        .child_signal(row_signal(RecipientClass::Cc, SHOW_CC.signal()))
        .child_signal(row_signal(RecipientClass::Bcc, SHOW_BCC.signal()))
        .children([
            toggles(),
            subject(),
        ])
    })
}

fn row_signal(class: RecipientClass, visible: impl Signal<Item=bool> + 'static) -> impl Signal<Item=Option<Dom>> {
    visible.map(move |visible| if visible { Some(recipient_row(class)) } else { None })
}

fn recipient_row(class: RecipientClass) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("row"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("label"))
                .text(&format!("{}:", class.label()))
            }),
            html!(TAG_DIV, {
                .class(css_class("field"))
                .children_signal_vec(RECIPIENTS.signal_cloned()
                    .map(move |list| list.into_iter().filter(|item| item.class == class).collect::<Vec<_>>())
                    .to_signal_vec()
                    .map(chip))
                .child(html!(TAG_INPUT, {
                    .class(css_class("input"))
                    .attr(PROP_TYPE, "email")
                    .attr(PROP_PLACEHOLDER, "Enter email address")
                    .event_with_options(&dominator::EventOptions::preventable(), move |e: events::KeyDown| {
                        let key = e.key();
                        if key == KEY_ENTER || key == KEY_COMMA {
                            e.prevent_default();
                            let address = get_target_value(e.target()).trim().to_string();
                            clear_target_value(e.target());
                            if !address.is_empty() {
                                with_composer(|composer| composer.add_recipient(&address, class));
                            }
                        }
                    })
                }))
            }),
        ])
    })
}

fn chip(recipient: Recipient) -> Dom {
    html!(TAG_SPAN, {
        .class(css_class("chip"))
        .children([
            html!(TAG_SPAN, {.text(&recipient.address)}),
            html!(TAG_SPAN, {
                .class(css_class("chip-remove"))
                .attr(PROP_TITLE, "remove")
                .attr(attr_data(ATTR_ID), &recipient.id)
                .text("×")
                .event(handle_remove)
            }),
        ])
    })
}

fn handle_remove(e: events::Click) {
    let id = from_dataset(e.target(), ATTR_ID);
    with_composer(|composer| composer.remove_recipient(&id));
}

fn toggles() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("toggles"))
        .children([
            toggle("Cc", SHOW_CC.signal(), handle_cc),
            toggle("Bcc", SHOW_BCC.signal(), handle_bcc),
        ])
    })
}

fn toggle(label: &str, active: impl Signal<Item=bool> + 'static, click: fn()) -> Dom {
    html!(TAG_BUTTON, {
        .class(css_class("toggle"))
        .class_signal("active", active)
        .attr("type", "button")
        .text(label)
        .event(move |_: events::Click| click())
    })
}

fn handle_cc() {
    with_composer(|composer| composer.toggle_cc());
}

fn handle_bcc() {
    with_composer(|composer| composer.toggle_bcc());
}

fn subject() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("row"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("label"))
                .text("Subject:")
            }),
            html!(TAG_INPUT, {
                .class(css_class("input"))
                .attr(PROP_PLACEHOLDER, "Subject")
                .prop_signal(PROP_VALUE, SUBJECT.signal_cloned())
                .event(|e: events::Input| {
                    let value = get_target_value(e.target());
                    with_composer(|composer| composer.set_subject(&value));
                })
            }),
        ])
    })
}
