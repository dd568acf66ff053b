use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;
use futures_signals::signal_vec::SignalVecExt;

use composer::constants::{CATEGORIES, CATEGORY_ALL};
use composer::library::Template;

use crate::constants::{PROP_NAME, PROP_PLACEHOLDER, PROP_SELECTED, PROP_TITLE, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_INPUT, TAG_OPTION, TAG_SELECT, TAG_SPAN};
use crate::dialog::dialogs::Dialog;
use crate::state::{refresh, with_composer, TEMPLATES, TEMPLATE_CATEGORY, TEMPLATE_QUERY, USER_TEMPLATES};
use crate::utils::{get_input_value, get_target_value};

const INPUT_NAME_TEMPLATE: &'static str = "template-name";

fn css_class(label: &str) -> String {
    format!("templates__{label}")
}

pub fn templates() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("header"))
                .children([
                    html!(TAG_SPAN, {.text("Templates")}),
                    html!(TAG_BUTTON, {
                        .attr("type", "button")
                        .text("Save as Template")
                        .event(|_: events::Click| handle_save())
                    }),
                ])
            }),
            html!(TAG_INPUT, {
                .class(css_class("search"))
                .attr(PROP_PLACEHOLDER, "Search templates...")
                .prop_signal(PROP_VALUE, TEMPLATE_QUERY.signal_cloned())
                .event(|e: events::Input| {
                    TEMPLATE_QUERY.set_neq(get_target_value(e.target()));
                    refresh();
                })
            }),
            category_select(),
            html!(TAG_DIV, {
                .class(css_class("list"))
                .children_signal_vec(TEMPLATES.signal_cloned().to_signal_vec().map(item))
            }),
            html!(TAG_DIV, {
                .class(css_class("subheader"))
                .text("My Templates")
            }),
            html!(TAG_DIV, {
                .class(css_class("list"))
                .child_signal(USER_TEMPLATES.signal_ref(|list| list.is_empty()).map(|empty| {
                    if empty {
                        Some(html!(TAG_DIV, {
                            .class(css_class("empty"))
                            .text("No saved templates yet")
                        }))
                    } else {
                        None
                    }
                }))
                .children_signal_vec(USER_TEMPLATES.signal_cloned().to_signal_vec().map(item))
            }),
        ])
    })
}

fn category_select() -> Dom {
    html!(TAG_SELECT, {
        .class(css_class("category"))
        .attr(PROP_TITLE, "Category")
        .children(CATEGORIES.iter().map(|category| html!(TAG_OPTION, {
            .attr(PROP_VALUE, category)
            .prop(PROP_SELECTED, *category == CATEGORY_ALL)
            .text(category)
        })))
        .event(|e: events::Change| {
            TEMPLATE_CATEGORY.set_neq(get_target_value(e.target()));
            refresh();
        })
    })
}

fn item(template: Template) -> Dom {
    let id = template.id.clone();
    html!(TAG_DIV, {
        .class(css_class("item"))
        .attr(PROP_TITLE, &template.subject)
        .children([
            html!(TAG_DIV, {
                .class(css_class("name"))
                .text(&template.name)
            }),
            html!(TAG_DIV, {
                .class(css_class("category"))
                .text(template.category.as_deref().unwrap_or_default())
            }),
        ])
        .event(move |_: events::Click| {
            with_composer(|composer| composer.apply_template(&id));
        })
    })
}

fn handle_save() {
    Dialog::form("Save as Template", dlg_save_init, dlg_save_result, || {});
}

fn dlg_save_init() -> Dom {
    html!(TAG_INPUT, {
        .attr(PROP_NAME, INPUT_NAME_TEMPLATE)
        .attr(PROP_PLACEHOLDER, "Template name")
    })
}

fn dlg_save_result() {
    let name = get_input_value(INPUT_NAME_TEMPLATE);
    with_composer(|composer| composer.save_as_template(&name));
}
