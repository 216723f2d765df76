//! Adhkar screen: remembrance cards with per-card tap counters that wrap
//! back to zero once the target is passed.

use crate::data::{ADHKAR, ADHKAR_CATEGORIES, Dhikr, TapCounter};
use crate::runtime::Effect;
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::frame::Frame;
use crate::ui::span::Span;
use crate::views::ViewContext;

const PROGRESS_CELLS: u32 = 20;

pub struct AdhkarView {
    category_index: usize,
    selected: usize,
    /// One counter per entry in [`ADHKAR`], by position.
    counters: Vec<TapCounter>,
}

impl AdhkarView {
    pub fn new() -> Self {
        Self {
            category_index: 0,
            selected: 0,
            counters: ADHKAR.iter().map(|d| TapCounter::new(d.count)).collect(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, _ctx: &ViewContext<'_>) -> Vec<Effect> {
        match key.code {
            KeyCode::Left => {
                self.category_index =
                    (self.category_index + ADHKAR_CATEGORIES.len() - 1) % ADHKAR_CATEGORIES.len();
                self.selected = 0;
                vec![Effect::RequestRender]
            }
            KeyCode::Right => {
                self.category_index = (self.category_index + 1) % ADHKAR_CATEGORIES.len();
                self.selected = 0;
                vec![Effect::RequestRender]
            }
            KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                    return vec![Effect::RequestRender];
                }
                Vec::new()
            }
            KeyCode::Down => {
                let count = self.filtered_indices().len();
                if count > 0 && self.selected + 1 < count {
                    self.selected += 1;
                    return vec![Effect::RequestRender];
                }
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let Some(index) = self.filtered_indices().get(self.selected).copied() else {
                    return Vec::new();
                };
                self.counters[index].tap();
                vec![Effect::RequestRender]
            }
            _ => Vec::new(),
        }
    }

    pub fn render(&self, ctx: &ViewContext<'_>) -> Frame {
        let mut frame = Frame::new();
        frame.push_text(ctx.t("adhkar.title"), ctx.theme.title);
        frame.push_blank();
        self.render_category_row(&mut frame, ctx);
        frame.push_blank();

        for (i, index) in self.filtered_indices().iter().copied().enumerate() {
            self.render_card(&mut frame, &ADHKAR[index], &self.counters[index], i == self.selected, ctx);
            frame.push_blank();
        }
        frame
    }

    fn render_category_row(&self, frame: &mut Frame, ctx: &ViewContext<'_>) {
        let mut spans = Vec::new();
        for (i, category) in ADHKAR_CATEGORIES.iter().enumerate() {
            let key = category.map(|c| c.key()).unwrap_or("category.all");
            let style = if i == self.category_index {
                ctx.theme.highlight
            } else {
                ctx.theme.hint
            };
            spans.push(Span::styled(format!(" {} ", ctx.t(key)), style));
            spans.push(Span::new(" "));
        }
        frame.push_spans(spans);
    }

    fn render_card(
        &self,
        frame: &mut Frame,
        dhikr: &Dhikr,
        counter: &TapCounter,
        selected: bool,
        ctx: &ViewContext<'_>,
    ) {
        let marker = if selected { "> " } else { "  " };
        let text_style = if counter.is_completed() {
            ctx.theme.completed
        } else {
            ctx.theme.arabic
        };
        frame.push_spans(vec![
            Span::styled(marker, ctx.theme.accent),
            Span::styled(dhikr.arabic, text_style),
        ]);

        let filled = (counter.progress() * PROGRESS_CELLS as f32).round() as u32;
        let bar: String = (0..PROGRESS_CELLS)
            .map(|i| if i < filled { '█' } else { '░' })
            .collect();
        let count_style = if counter.is_completed() {
            ctx.theme.completed
        } else {
            ctx.theme.accent
        };
        frame.push_spans(vec![
            Span::new("    "),
            Span::styled(bar, count_style),
            Span::styled(
                format!(
                    "  {} {}/{}",
                    ctx.t("adhkar.count"),
                    counter.count(),
                    counter.target()
                ),
                count_style,
            ),
        ]);

        if let Some(reference) = dhikr.reference {
            frame.push_text(format!("    {reference}"), ctx.theme.hint);
        }
        if let Some(reward) = dhikr.reward {
            frame.push_text(format!("    {reward}"), ctx.theme.hint);
        }
        let hint = if counter.is_completed() {
            ctx.t("adhkar.reset")
        } else {
            ctx.t("adhkar.tap")
        };
        if selected {
            frame.push_text(format!("    [Space] {hint}"), ctx.theme.hint);
        }
    }

    fn filtered_indices(&self) -> Vec<usize> {
        match ADHKAR_CATEGORIES[self.category_index] {
            None => (0..ADHKAR.len()).collect(),
            Some(category) => ADHKAR
                .iter()
                .enumerate()
                .filter(|(_, d)| d.category == category)
                .map(|(i, _)| i)
                .collect(),
        }
    }
}

impl Default for AdhkarView {
    fn default() -> Self {
        Self::new()
    }
}
