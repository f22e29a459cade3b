use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use super::super::theme;

/// Editable scenario text. `cursor` is a byte offset on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new(initial: &str) -> Self {
        Self {
            value: initial.to_string(),
            cursor: initial.len(),
        }
    }

    /// Replace the whole value and park the cursor at the end.
    pub fn replace(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.len();
    }

    pub fn insert(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.value.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        let next = self.next_boundary();
        self.value.replace_range(self.cursor..next, "");
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .char_indices()
            .nth(1)
            .map_or(self.value.len(), |(i, _)| self.cursor + i)
    }
}

/// Wrapped rendering of the scenario text, with a block cursor when focused.
pub struct TextInputWidget<'a> {
    pub input: &'a TextInput,
    pub placeholder: &'a str,
    pub focused: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput, placeholder: &'a str, focused: bool) -> Self {
        Self {
            input,
            placeholder,
            focused,
        }
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 4 {
            return;
        }

        let line = if self.focused {
            let (before, at, after) = split_at_cursor(&self.input.value, self.input.cursor);
            Line::from(vec![
                Span::styled(before, theme::text_style()),
                Span::styled(at, theme::cursor_style()),
                Span::styled(after, theme::text_style()),
            ])
        } else if self.input.value.is_empty() {
            Line::from(Span::styled(self.placeholder, theme::dim_style()))
        } else {
            Line::from(Span::styled(
                format!("\"{}\"", self.input.value),
                theme::text_style(),
            ))
        };

        Paragraph::new(line)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

fn split_at_cursor(value: &str, cursor: usize) -> (String, String, String) {
    let cursor = cursor.min(value.len());
    let (before, rest) = value.split_at(cursor);
    let mut chars = rest.chars();
    let at = chars.next().map_or_else(|| " ".to_string(), String::from);
    (before.to_string(), at, chars.as_str().to_string())
}
