use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub accent: Style,
    pub hint: Style,
    pub error: Style,
    pub highlight: Style,
    pub completed: Style,
    pub arabic: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().with_bold(),
            accent: Style::new().with_color(Color::Green),
            hint: Style::new().with_color(Color::DarkGrey),
            error: Style::new().with_color(Color::Red).with_bold(),
            highlight: Style::new()
                .with_color(Color::Black)
                .with_background(Color::Green),
            completed: Style::new().with_color(Color::DarkGrey).with_dim(),
            arabic: Style::new().with_color(Color::Cyan),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
