//! Markdown rendering for the detail panel.
//!
//! Task descriptions are markdown, and this module turns them into
//! styled ratatui [`Line`]s. Coverage follows what people actually put
//! in card descriptions rather than the full CommonMark surface:
//!
//! | Element | Markdown Syntax | Style |
//! |---------|-----------------|-------|
//! | H1 Header | `# text` | Bold + Cyan |
//! | H2+ Header | `## text` | Bold + White |
//! | Bold | `**text**` | Bold modifier |
//! | Italic | `*text*` | Italic modifier |
//! | Strikethrough | `~~text~~` | Crossed-out modifier |
//! | Inline Code | `` `code` `` | Yellow |
//! | Code Block | ``` ```code``` ``` | Yellow, indented |
//! | Lists | `- item` or `1. item` | Preserved with indent |
//! | Links | `[text](url)` | Cyan + underline |
//!
//! Anything else (tables included) degrades to plain text instead of
//! disappearing.
//!
//! # Example
//!
//! ```
//! use tack_tui::widgets::markdown::render_markdown;
//!
//! let lines = render_markdown("# Hello\n\nSome **bold** text.", 80);
//! assert!(!lines.is_empty());
//! ```

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Renders markdown to styled lines, wrapping text at `width`.
///
/// # Arguments
///
/// * `markdown` - The markdown source to render
/// * `width` - The maximum line width for wrapping
#[must_use]
pub fn render_markdown(markdown: &str, width: usize) -> Vec<Line<'static>> {
    if markdown.is_empty() {
        return Vec::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut renderer = Renderer::new(width);
    for event in Parser::new_ext(markdown, options) {
        renderer.handle(event);
    }
    renderer.finish()
}

/// Walks parser events and accumulates finished lines.
///
/// Inline state (emphasis flags, the current link target, list markers)
/// lives here between events; spans collect in `pending` until
/// something closes the line.
struct Renderer {
    width: usize,
    lines: Vec<Line<'static>>,
    pending: Vec<Span<'static>>,
    bold: bool,
    italic: bool,
    strike: bool,
    heading: Option<HeadingLevel>,
    link: Option<String>,
    in_code_block: bool,
    list_depth: usize,
    next_marker: Option<u64>,
}

impl Renderer {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
            pending: Vec::new(),
            bold: false,
            italic: false,
            strike: false,
            heading: None,
            link: None,
            in_code_block: false,
            list_depth: 0,
            next_marker: None,
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.pending.push(Span::styled(
                code.to_string(),
                Style::default().fg(Color::Yellow),
            )),
            Event::SoftBreak => self.pending.push(Span::raw(" ")),
            Event::HardBreak => self.flush(),
            Event::Rule => self.rule(),
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush();
                // Headings get breathing room above, unless they open
                // the document or follow an existing blank.
                if self.lines.last().is_some_and(|line| !line.spans.is_empty()) {
                    self.blank();
                }
                let marks = "#".repeat(heading_depth(level));
                self.pending.push(Span::styled(
                    format!("{marks} "),
                    Style::default().fg(Color::DarkGray),
                ));
                self.heading = Some(level);
            }
            Tag::Strong => self.bold = true,
            Tag::Emphasis => self.italic = true,
            Tag::Strikethrough => self.strike = true,
            Tag::CodeBlock(_) => self.in_code_block = true,
            Tag::Link { dest_url, .. } => self.link = Some(dest_url.to_string()),
            Tag::List(first) => {
                self.list_depth += 2;
                self.next_marker = first;
            }
            _ => {}
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.flush();
                self.blank();
                self.heading = None;
            }
            TagEnd::Strong => self.bold = false,
            TagEnd::Emphasis => self.italic = false,
            TagEnd::Strikethrough => self.strike = false,
            TagEnd::CodeBlock => {
                self.flush();
                self.blank();
                self.in_code_block = false;
            }
            TagEnd::Link => {
                if let Some(url) = self.link.take() {
                    self.pending.push(Span::styled(
                        format!(" ({url})"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            TagEnd::List(_) => {
                self.list_depth = self.list_depth.saturating_sub(2);
                self.next_marker = None;
                self.flush();
            }
            TagEnd::Item => {
                self.flush();
                if let Some(marker) = &mut self.next_marker {
                    *marker += 1;
                }
            }
            TagEnd::Paragraph => {
                self.flush();
                // Narrow panels drown in separator blanks
                if self.width > 20 {
                    self.blank();
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        let style = self.style();

        if self.in_code_block {
            for line in text.lines() {
                self.lines
                    .push(Line::from(Span::styled(format!("  {line}"), style)));
            }
            return;
        }

        // A fresh line inside a list starts with its marker.
        if self.list_depth > 0 && self.pending.is_empty() {
            let marker = self.item_marker();
            self.pending.push(marker);
        }

        let wrapped = wrap_plain(text, self.width.saturating_sub(self.list_depth));
        for (i, piece) in wrapped.into_iter().enumerate() {
            if i > 0 {
                self.flush();
                if self.list_depth > 0 {
                    self.pending.push(Span::raw(" ".repeat(self.list_depth)));
                }
            }
            self.pending.push(Span::styled(piece, style));
        }
    }

    /// The bullet or number prefix for the current list item.
    fn item_marker(&self) -> Span<'static> {
        let indent = " ".repeat(self.list_depth.saturating_sub(2));
        let marker = match self.next_marker {
            Some(number) => format!("{indent}{number}. "),
            None => format!("{indent}- "),
        };
        Span::styled(marker, Style::default().fg(Color::DarkGray))
    }

    fn rule(&mut self) {
        self.flush();
        let bar = "\u{2500}".repeat(self.width.min(40));
        self.lines.push(Line::from(Span::styled(
            bar,
            Style::default().fg(Color::DarkGray),
        )));
        self.blank();
    }

    /// Closes the line under construction, if it has any content.
    fn flush(&mut self) {
        if !self.pending.is_empty() {
            self.lines
                .push(Line::from(std::mem::take(&mut self.pending)));
        }
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    /// Style for the next text span, from most to least specific state.
    fn style(&self) -> Style {
        if let Some(level) = self.heading {
            let color = if level == HeadingLevel::H1 {
                Color::Cyan
            } else {
                Color::White
            };
            return Style::default().fg(color).add_modifier(Modifier::BOLD);
        }
        if self.in_code_block {
            return Style::default().fg(Color::Yellow);
        }
        if self.link.is_some() {
            return Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED);
        }

        let mut style = Style::default();
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.strike {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        if !(self.bold || self.italic || self.strike) {
            style = style.fg(Color::White);
        }
        style
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        self.lines
    }
}

/// Number of `#` marks for a heading level.
fn heading_depth(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Greedy word wrap. Whitespace runs collapse to single spaces, but a
/// leading or trailing space on the input survives so consecutive
/// inline spans do not fuse words together.
fn wrap_plain(text: &str, max_width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if max_width == 0 {
        return vec![text.to_owned()];
    }

    let keep_leading = text.starts_with(char::is_whitespace);
    let keep_trailing = text.ends_with(char::is_whitespace);

    let mut out: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut used = 0usize;
    let mut seen_first = false;

    for word in text.split_whitespace() {
        let len = word.chars().count();

        if used == 0 {
            if !seen_first && keep_leading {
                line.push(' ');
                used = 1;
            }
            seen_first = true;

            if used + len > max_width && len > max_width {
                if !line.is_empty() {
                    out.push(std::mem::take(&mut line));
                }
                push_chunks(word, max_width, &mut out);
                used = 0;
            } else {
                line.push_str(word);
                used += len;
            }
        } else if used + 1 + len <= max_width {
            line.push(' ');
            line.push_str(word);
            used += 1 + len;
        } else {
            out.push(std::mem::take(&mut line));
            if len > max_width {
                push_chunks(word, max_width, &mut out);
                used = 0;
            } else {
                line.push_str(word);
                used = len;
            }
        }
    }

    if !line.is_empty() {
        if keep_trailing {
            line.push(' ');
        }
        out.push(line);
    } else if keep_trailing && let Some(last) = out.last_mut() {
        last.push(' ');
    }

    if out.is_empty() {
        out.push(text.to_owned());
    }
    out
}

/// Splits a word longer than `max_width` into full-width chunks, each
/// pushed as its own closed line.
fn push_chunks(word: &str, max_width: usize, out: &mut Vec<String>) {
    let mut chars = word.chars().peekable();
    while chars.peek().is_some() {
        out.push(chars.by_ref().take(max_width).collect());
    }
}
