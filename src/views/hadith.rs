//! Hadith screen: a deterministic daily pick plus the curated collection
//! filtered by category.

use crate::data::{daily_index, Hadith, HADITHS, HADITH_CATEGORIES};
use crate::hijri::CivilDate;
use crate::runtime::Effect;
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::frame::Frame;
use crate::ui::span::Span;
use crate::views::ViewContext;

pub struct HadithView {
    category_index: usize,
    selected: usize,
}

impl HadithView {
    pub fn new() -> Self {
        Self {
            category_index: 0,
            selected: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, _ctx: &ViewContext<'_>) -> Vec<Effect> {
        match key.code {
            KeyCode::Left => {
                self.category_index =
                    (self.category_index + HADITH_CATEGORIES.len() - 1) % HADITH_CATEGORIES.len();
                self.selected = 0;
                vec![Effect::RequestRender]
            }
            KeyCode::Right => {
                self.category_index = (self.category_index + 1) % HADITH_CATEGORIES.len();
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
                let count = self.filtered().len();
                if count > 0 && self.selected + 1 < count {
                    self.selected += 1;
                    return vec![Effect::RequestRender];
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    pub fn render(&self, ctx: &ViewContext<'_>) -> Frame {
        let mut frame = Frame::new();
        frame.push_text(ctx.t("hadith.title"), ctx.theme.title);
        frame.push_blank();

        let daily = daily_hadith(CivilDate::today());
        frame.push_text(ctx.t("hadith.daily"), ctx.theme.accent);
        push_hadith(&mut frame, daily, ctx, false);
        frame.push_blank();

        self.render_category_row(&mut frame, ctx);
        frame.push_blank();

        for (i, hadith) in self.filtered().into_iter().enumerate() {
            push_hadith(&mut frame, hadith, ctx, i == self.selected);
            frame.push_blank();
        }
        frame
    }

    fn render_category_row(&self, frame: &mut Frame, ctx: &ViewContext<'_>) {
        let mut spans = Vec::new();
        for (i, category) in HADITH_CATEGORIES.iter().enumerate() {
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

    fn filtered(&self) -> Vec<&'static Hadith> {
        match HADITH_CATEGORIES[self.category_index] {
            None => HADITHS.iter().collect(),
            Some(category) => HADITHS.iter().filter(|h| h.category == category).collect(),
        }
    }
}

impl Default for HadithView {
    fn default() -> Self {
        Self::new()
    }
}

/// Day-of-year keyed pick so everyone sees the same hadith on a given day.
fn daily_hadith(today: CivilDate) -> &'static Hadith {
    let year_start = CivilDate::new(today.year, 1, 1).to_unix_days();
    let day_of_year = (today.to_unix_days() - year_start) as u32;
    &HADITHS[daily_index(day_of_year)]
}

fn push_hadith(frame: &mut Frame, hadith: &Hadith, ctx: &ViewContext<'_>, selected: bool) {
    let marker = if selected { "> " } else { "  " };
    let style = if selected {
        ctx.theme.highlight
    } else {
        ctx.theme.arabic
    };
    frame.push_spans(vec![
        Span::styled(marker, ctx.theme.accent),
        Span::styled(hadith.arabic, style),
    ]);
    frame.push_text(
        format!(
            "    {}: {} · {}: {} · {}",
            ctx.t("hadith.source"),
            hadith.source,
            ctx.t("hadith.grade"),
            hadith.grade,
            ctx.t(hadith.category.key()),
        ),
        ctx.theme.hint,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_cycling_wraps_both_ways() {
        let mut view = HadithView::new();
        let ctx_catalog = crate::i18n::Catalog::new();
        let theme = crate::ui::theme::Theme::default();
        let ctx = ViewContext {
            catalog: &ctx_catalog,
            theme: &theme,
            language: crate::i18n::Language::En,
        };
        view.handle_key(KeyEvent::plain(KeyCode::Left), &ctx);
        assert_eq!(view.category_index, HADITH_CATEGORIES.len() - 1);
        view.handle_key(KeyEvent::plain(KeyCode::Right), &ctx);
        assert_eq!(view.category_index, 0);
    }

    #[test]
    fn all_category_shows_everything() {
        let view = HadithView::new();
        assert_eq!(view.filtered().len(), HADITHS.len());
    }

    #[test]
    fn filters_restrict_to_one_category() {
        let mut view = HadithView::new();
        view.category_index = 1;
        let category = HADITH_CATEGORIES[1].unwrap();
        let filtered = view.filtered();
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|h| h.category == category));
    }

    #[test]
    fn daily_pick_is_stable_within_a_day() {
        let today = CivilDate::new(2026, 8, 26);
        assert_eq!(daily_hadith(today).id, daily_hadith(today).id);
        // Consecutive days walk the collection.
        let tomorrow = CivilDate::new(2026, 8, 27);
        assert_ne!(daily_hadith(today).id, daily_hadith(tomorrow).id);
    }
}
