//! Bridge between the composer's body markup and a live rich-text surface.
//!
//! The surface is mutated in place by the commands it executes, so after
//! every command (and every input event) the bridge reads the markup back.
//! The string held here is never allowed to drift from what the surface shows.

use std::cell::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Bold,
    Italic,
    Underline,
    InsertUnorderedList,
    InsertOrderedList,
    JustifyLeft,
    JustifyCenter,
    JustifyRight,
    CreateLink(String),
    FontName(String),
    FontSize(String),
    FormatBlock(String),
}

impl EditCommand {
    pub fn quote() -> Self {
        EditCommand::FormatBlock("<blockquote>".to_string())
    }

    /// Command id understood by `document.execCommand`.
    pub fn name(&self) -> &'static str {
        match self {
            EditCommand::Bold => "bold",
            EditCommand::Italic => "italic",
            EditCommand::Underline => "underline",
            EditCommand::InsertUnorderedList => "insertUnorderedList",
            EditCommand::InsertOrderedList => "insertOrderedList",
            EditCommand::JustifyLeft => "justifyLeft",
            EditCommand::JustifyCenter => "justifyCenter",
            EditCommand::JustifyRight => "justifyRight",
            EditCommand::CreateLink(_) => "createLink",
            EditCommand::FontName(_) => "fontName",
            EditCommand::FontSize(_) => "fontSize",
            EditCommand::FormatBlock(_) => "formatBlock",
        }
    }

    pub fn argument(&self) -> &str {
        match self {
            EditCommand::CreateLink(value)
            | EditCommand::FontName(value)
            | EditCommand::FontSize(value)
            | EditCommand::FormatBlock(value) => value,
            _ => "",
        }
    }
}

/// The editable widget, owned outside of the composer.
pub trait EditorSurface {
    fn apply_command(&mut self, command: &str, argument: &str);
    fn read_content(&self) -> String;
    fn replace_content(&mut self, markup: &str);
    fn focus(&mut self);
}

#[derive(Debug)]
pub struct ContentBridge<E> {
    surface: E,
    markup: String,
}

impl<E: EditorSurface> ContentBridge<E> {
    pub fn new(surface: E) -> Self {
        let markup = surface.read_content();
        Self { surface, markup }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn surface(&self) -> &E {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut E {
        &mut self.surface
    }

    /// Pushes an externally supplied value into the surface. Returns `false`
    /// and leaves the surface alone when it already shows that markup.
    pub fn sync_external(&mut self, markup: &str) -> bool {
        if self.surface.read_content() == markup {
            self.markup = markup.to_string();
            return false;
        }
        self.surface.replace_content(markup);
        self.read_back();
        true
    }

    /// Runs one toolbar command. A link without a url does nothing.
    pub fn execute(&mut self, command: EditCommand) -> bool {
        if let EditCommand::CreateLink(url) = &command {
            if url.trim().is_empty() {
                return false;
            }
        }
        self.surface.apply_command(command.name(), command.argument());
        self.read_back();
        self.surface.focus();
        true
    }

    /// Called after the user typed into the surface.
    pub fn on_input(&mut self) -> bool {
        let previous = std::mem::take(&mut self.markup);
        self.read_back();
        previous != self.markup
    }

    pub fn set_content(&mut self, markup: &str) {
        self.surface.replace_content(markup);
        self.read_back();
    }

    pub fn clear(&mut self) {
        self.set_content("");
    }

    fn read_back(&mut self) {
        self.markup = self.surface.read_content();
    }
}

/// Headless surface: applies each command to the whole content.
#[derive(Debug, Default)]
pub struct MemorySurface {
    content: String,
    commands: Vec<(String, String)>,
    reads: Cell<usize>,
    focused: bool,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            ..Self::default()
        }
    }

    /// Simulates the user typing over the whole surface.
    pub fn type_text(&mut self, content: &str) {
        self.content = content.to_string();
    }

    pub fn commands(&self) -> &[(String, String)] {
        &self.commands
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl EditorSurface for MemorySurface {
    fn apply_command(&mut self, command: &str, argument: &str) {
        self.commands.push((command.to_string(), argument.to_string()));
        let content = &self.content;
        self.content = match command {
            "bold" => format!("<b>{content}</b>"),
            "italic" => format!("<i>{content}</i>"),
            "underline" => format!("<u>{content}</u>"),
            "insertUnorderedList" => format!("<ul><li>{content}</li></ul>"),
            "insertOrderedList" => format!("<ol><li>{content}</li></ol>"),
            "justifyLeft" => format!("<div style=\"text-align: left;\">{content}</div>"),
            "justifyCenter" => format!("<div style=\"text-align: center;\">{content}</div>"),
            "justifyRight" => format!("<div style=\"text-align: right;\">{content}</div>"),
            "createLink" => format!("<a href=\"{argument}\">{content}</a>"),
            "fontName" => format!("<font face=\"{argument}\">{content}</font>"),
            "fontSize" => format!("<font size=\"{argument}\">{content}</font>"),
            "formatBlock" => {
                let tag = argument.trim_matches(|c| c == '<' || c == '>');
                format!("<{tag}>{content}</{tag}>")
            }
            _ => content.clone(),
        };
    }

    fn read_content(&self) -> String {
        self.reads.set(self.reads.get() + 1);
        self.content.clone()
    }

    fn replace_content(&mut self, markup: &str) {
        self.content = markup.to_string();
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_reach_the_surface_by_name() {
        let mut bridge = ContentBridge::new(MemorySurface::new());
        bridge.execute(EditCommand::Underline);
        bridge.execute(EditCommand::InsertOrderedList);
        bridge.execute(EditCommand::FontName("Arial".to_string()));
        bridge.execute(EditCommand::FontSize("5".to_string()));
        bridge.execute(EditCommand::quote());
        let expected = [
            ("underline", ""),
            ("insertOrderedList", ""),
            ("fontName", "Arial"),
            ("fontSize", "5"),
            ("formatBlock", "<blockquote>"),
        ].map(|(name, argument)| (name.to_string(), argument.to_string()));
        assert_eq!(bridge.surface().commands(), expected);
    }

    #[test]
    fn test_every_command_reads_back() {
        let mut bridge = ContentBridge::new(MemorySurface::with_content("hi"));
        let reads = bridge.surface().reads();
        assert!(bridge.execute(EditCommand::Bold));
        assert_eq!(bridge.surface().reads(), reads + 1);
        assert_eq!(bridge.markup(), "<b>hi</b>");
        assert!(bridge.surface().is_focused());

        assert!(bridge.execute(EditCommand::JustifyCenter));
        assert_eq!(bridge.surface().reads(), reads + 2);
        assert_eq!(bridge.markup(), "<div style=\"text-align: center;\"><b>hi</b></div>");
    }

    #[test]
    fn test_link_requires_url() {
        let mut bridge = ContentBridge::new(MemorySurface::with_content("x"));
        assert!(!bridge.execute(EditCommand::CreateLink("  ".to_string())));
        assert!(bridge.surface().commands().is_empty());
        assert_eq!(bridge.markup(), "x");

        assert!(bridge.execute(EditCommand::CreateLink("https://example.com".to_string())));
        assert_eq!(bridge.surface().commands(), [("createLink".to_string(), "https://example.com".to_string())]);
        assert_eq!(bridge.markup(), "<a href=\"https://example.com\">x</a>");
    }

    #[test]
    fn test_sync_external_keeps_equal_content() {
        let mut bridge = ContentBridge::new(MemorySurface::with_content("<p>typed</p>"));
        assert!(!bridge.sync_external("<p>typed</p>"));
        assert_eq!(bridge.markup(), "<p>typed</p>");

        assert!(bridge.sync_external("<p>draft</p>"));
        assert_eq!(bridge.markup(), "<p>draft</p>");
        assert_eq!(bridge.surface().read_content(), "<p>draft</p>");
    }

    #[test]
    fn test_on_input_picks_up_typing() {
        let mut bridge = ContentBridge::new(MemorySurface::new());
        bridge.surface_mut().type_text("<p>hello</p>");
        assert_ne!(bridge.markup(), "<p>hello</p>");
        assert!(bridge.on_input());
        assert_eq!(bridge.markup(), "<p>hello</p>");
        assert!(!bridge.on_input());
    }

    #[test]
    fn test_format_block_quote() {
        let mut bridge = ContentBridge::new(MemorySurface::with_content("q"));
        bridge.execute(EditCommand::quote());
        assert_eq!(bridge.markup(), "<blockquote>q</blockquote>");
    }
}
