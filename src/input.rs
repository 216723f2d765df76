use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::Style;

/// Single-line text field. The cursor is a char index into `value`.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns true when the key edited or moved within the field.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char(ch) => {
                let at = self.byte_index(self.cursor);
                self.value.insert(at, ch);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let at = self.byte_index(self.cursor - 1);
                self.value.remove(at);
                self.cursor -= 1;
                true
            }
            KeyCode::Delete => {
                if self.cursor >= self.value.chars().count() {
                    return false;
                }
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            KeyCode::Left => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                true
            }
            KeyCode::Right => {
                if self.cursor >= self.value.chars().count() {
                    return false;
                }
                self.cursor += 1;
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        }
    }

    /// Renders the field with the cursor shown as an inverted cell when focused.
    pub fn render(&self, label: &str, focused: bool, style: Style, cursor_style: Style) -> Vec<Span> {
        let mut spans = vec![Span::styled(format!("{label}: "), style)];
        if !focused {
            spans.push(Span::new(self.value.clone()));
            return spans;
        }
        let chars: Vec<char> = self.value.chars().collect();
        let before: String = chars[..self.cursor].iter().collect();
        let at: String = chars
            .get(self.cursor)
            .map(|ch| ch.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = chars
            .get(self.cursor + 1..)
            .map(|rest| rest.iter().collect())
            .unwrap_or_default();
        spans.push(Span::new(before));
        spans.push(Span::styled(at, cursor_style));
        spans.push(Span::new(after));
        spans
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::plain(code)
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = TextInput::new();
        for ch in "cairo".chars() {
            input.handle_key(press(KeyCode::Char(ch)));
        }
        assert_eq!(input.value(), "cairo");

        input.handle_key(press(KeyCode::Home));
        input.handle_key(press(KeyCode::Char('!')));
        assert_eq!(input.value(), "!cairo");
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = TextInput::with_value("abc");
        input.handle_key(press(KeyCode::Backspace));
        assert_eq!(input.value(), "ab");

        input.handle_key(press(KeyCode::Home));
        assert!(!input.handle_key(press(KeyCode::Backspace)));
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn multibyte_editing_stays_on_char_boundaries() {
        let mut input = TextInput::with_value("مكة");
        input.handle_key(press(KeyCode::Left));
        input.handle_key(press(KeyCode::Backspace));
        assert_eq!(input.value(), "مة");
        input.handle_key(press(KeyCode::Char('ك')));
        assert_eq!(input.value(), "مكة");
    }

    #[test]
    fn control_chords_are_ignored() {
        let mut input = TextInput::with_value("x");
        let key = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert!(!input.handle_key(key));
        assert_eq!(input.value(), "x");
    }
}
