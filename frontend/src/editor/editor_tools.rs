use dominator::{Dom, events, html};
use futures_signals::signal::Mutable;
use once_cell::sync::Lazy;

use composer::EditCommand;

use crate::constants::{FONT_NAMES, FONT_SIZES, PROP_NAME, PROP_PLACEHOLDER, PROP_TITLE, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_OPTION, TAG_SELECT, TAG_SPAN};
use crate::dialog::dialogs::{restore_selection, Dialog};
use crate::state::{with_composer, with_signature_editor};
use crate::utils::{get_input_value, get_target_value};

const INPUT_NAME_LINK: &'static str = "link";

/// Which editor a toolbar drives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ToolTarget {
    Body,
    Signature,
}

// target of the link dialog while it is open
static LINK_TARGET: Lazy<Mutable<ToolTarget>> = Lazy::new(|| {
    Mutable::new(ToolTarget::Body)
});

fn css_class(label: &str) -> String {
    format!("editor-tools__{label}")
}

pub fn editor_tools(target: ToolTarget) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            button("Bold", "B", target, EditCommand::Bold),
            button("Italic", "I", target, EditCommand::Italic),
            button("Underline", "U", target, EditCommand::Underline),
            html!(TAG_SPAN, {.class(css_class("space"))}),
            button("Align Left", "⇤", target, EditCommand::JustifyLeft),
            button("Align Center", "↔", target, EditCommand::JustifyCenter),
            button("Align Right", "⇥", target, EditCommand::JustifyRight),
            html!(TAG_SPAN, {.class(css_class("space"))}),
            button("Bullet List", "•", target, EditCommand::InsertUnorderedList),
            button("Numbered List", "1.", target, EditCommand::InsertOrderedList),
            button("Quote", "❝", target, EditCommand::quote()),
            html!(TAG_SPAN, {.class(css_class("space"))}),
            html!(TAG_BUTTON, {
                .attr(PROP_TITLE, "Insert Link")
                .attr("type", "button")
                .text("🔗")
                .event(move |_: events::Click| handle_link(target))
            }),
            font_select(target),
            size_select(target),
        ])
    })
}

fn execute(target: ToolTarget, command: EditCommand) {
    match target {
        ToolTarget::Body => {
            with_composer(|composer| composer.execute(command));
        }
        ToolTarget::Signature => {
            with_signature_editor(|bridge| bridge.execute(command));
        }
    }
}

fn handle_link(target: ToolTarget) {
    LINK_TARGET.set(target);
    Dialog::custom(Dialog {
        title: "Insert Link".to_string(),
        confirm_label: "Insert".to_string(),
        form: dlg_link_init,
        confirm: dlg_link_result,
        ..Dialog::default()
    });
}

fn dlg_link_init() -> Dom {
    html!("textarea", {
        .class(css_class("link"))
        .attr(PROP_TITLE, "link address")
        .attr(PROP_PLACEHOLDER, "https://example.com")
        .attr("rows", "2")
        .attr(PROP_NAME, INPUT_NAME_LINK)
    })
}

fn dlg_link_result() {
    let link = get_input_value(INPUT_NAME_LINK).trim().to_string();
    if !link.is_empty() {
        restore_selection();
        execute(LINK_TARGET.get(), EditCommand::CreateLink(link));
    }
}

fn font_select(target: ToolTarget) -> Dom {
    html!(TAG_SELECT, {
        .attr(PROP_TITLE, "Font")
        .child(html!(TAG_OPTION, {.attr(PROP_VALUE, "").text("Font")}))
        .children(FONT_NAMES.iter().map(|name| html!(TAG_OPTION, {
            .attr(PROP_VALUE, name)
            .text(name)
        })))
        .event(move |e: events::Change| {
            let name = get_target_value(e.target());
            if !name.is_empty() {
                execute(target, EditCommand::FontName(name));
            }
        })
    })
}

fn size_select(target: ToolTarget) -> Dom {
    html!(TAG_SELECT, {
        .attr(PROP_TITLE, "Size")
        .child(html!(TAG_OPTION, {.attr(PROP_VALUE, "").text("Size")}))
        .children(FONT_SIZES.iter().map(|(value, label)| html!(TAG_OPTION, {
            .attr(PROP_VALUE, value)
            .text(label)
        })))
        .event(move |e: events::Change| {
            let size = get_target_value(e.target());
            if !size.is_empty() {
                execute(target, EditCommand::FontSize(size));
            }
        })
    })
}

fn button(title: &str, label: &str, target: ToolTarget, command: EditCommand) -> Dom {
    html!(TAG_BUTTON, {
        .attr(PROP_TITLE, title)
        .attr("type", "button")
        .event(move |_: events::Click| execute(target, command.clone()))
        .text(label)
    })
}
