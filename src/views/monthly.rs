//! Monthly planner: a Hijri month grid with a moon-sighting day offset,
//! monthly goals and user-entered important dates.

use crate::config::Settings;
use crate::hijri::{self, CivilDate, HijriDate, MonthGrid};
use crate::input::TextInput;
use crate::runtime::Effect;
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::frame::Frame;
use crate::ui::span::Span;
use crate::ui::style::Style;
use crate::views::ViewContext;

const WEEKDAY_KEYS: [&str; 7] = [
    "calendar.sun",
    "calendar.mon",
    "calendar.tue",
    "calendar.wed",
    "calendar.thu",
    "calendar.fri",
    "calendar.sat",
];

#[derive(Debug, Clone)]
pub struct Goal {
    pub id: u32,
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone)]
pub struct ImportantDate {
    pub day: u8,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateFocus {
    Day,
    Label,
}

enum Form {
    None,
    Goal(TextInput),
    Date {
        day: TextInput,
        label: TextInput,
        focus: DateFocus,
    },
}

pub struct MonthlyView {
    offset: i32,
    goals: Vec<Goal>,
    dates: Vec<ImportantDate>,
    selected_goal: usize,
    next_goal_id: u32,
    form: Form,
}

impl MonthlyView {
    pub fn new(settings: &Settings) -> Self {
        let goals = vec![
            Goal {
                id: 1,
                text: "Read Surah Al-Kahf every Friday".into(),
                done: false,
            },
            Goal {
                id: 2,
                text: "Fast the White Days (13, 14, 15)".into(),
                done: false,
            },
            Goal {
                id: 3,
                text: "Donate to charity".into(),
                done: true,
            },
            Goal {
                id: 4,
                text: "Complete one Juz of Quran".into(),
                done: false,
            },
        ];
        let dates = vec![
            ImportantDate {
                day: 1,
                label: "Start of Month".into(),
            },
            ImportantDate {
                day: 13,
                label: "White Day Fasting".into(),
            },
            ImportantDate {
                day: 14,
                label: "White Day Fasting".into(),
            },
            ImportantDate {
                day: 15,
                label: "White Day Fasting".into(),
            },
        ];
        Self {
            offset: settings.hijri_offset,
            goals,
            dates,
            selected_goal: 0,
            next_goal_id: 5,
            form: Form::None,
        }
    }

    pub fn wants_text_input(&self) -> bool {
        !matches!(self.form, Form::None)
    }

    pub fn handle_key(&mut self, key: KeyEvent, _ctx: &ViewContext<'_>) -> Vec<Effect> {
        match self.form {
            Form::None => self.handle_idle_key(key),
            Form::Goal(_) => self.handle_goal_form_key(key),
            Form::Date { .. } => self.handle_date_form_key(key),
        }
    }

    pub fn render(&self, ctx: &ViewContext<'_>) -> Frame {
        let mut frame = Frame::new();
        frame.push_text(ctx.t("monthly.title"), ctx.theme.title);
        frame.push_blank();

        let today_civil = CivilDate::today();
        let today = HijriDate::project(today_civil, self.offset);
        let month_line = format!(
            "{}: {} {} AH{}",
            ctx.t("monthly.current"),
            today.month_name(ctx.language),
            today.year,
            offset_suffix(self.offset),
        );
        frame.push_text(month_line, ctx.theme.accent);
        frame.push_blank();

        self.render_grid(&mut frame, today_civil, today, ctx);
        frame.push_blank();

        self.render_goals(&mut frame, ctx);
        frame.push_blank();
        self.render_dates(&mut frame, ctx);

        match &self.form {
            Form::None => {}
            Form::Goal(input) => {
                frame.push_blank();
                frame.push_text(ctx.t("monthly.addGoal"), ctx.theme.accent);
                frame.push_spans(input.render(
                    ctx.t("monthly.goals"),
                    true,
                    ctx.theme.accent,
                    ctx.theme.highlight,
                ));
                frame.push_text(
                    format!("[Enter] {}  [Esc] {}", ctx.t("monthly.add"), ctx.t("monthly.cancel")),
                    ctx.theme.hint,
                );
            }
            Form::Date { day, label, focus } => {
                frame.push_blank();
                frame.push_text(ctx.t("monthly.addDate"), ctx.theme.accent);
                frame.push_spans(day.render(
                    ctx.t("monthly.calendar"),
                    *focus == DateFocus::Day,
                    ctx.theme.accent,
                    ctx.theme.highlight,
                ));
                frame.push_spans(label.render(
                    ctx.t("monthly.important"),
                    *focus == DateFocus::Label,
                    ctx.theme.accent,
                    ctx.theme.highlight,
                ));
                frame.push_text(
                    format!("[Enter] {}  [Esc] {}", ctx.t("monthly.add"), ctx.t("monthly.cancel")),
                    ctx.theme.hint,
                );
            }
        }
        frame
    }

    fn handle_idle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.offset += 1;
                vec![Effect::RequestRender]
            }
            KeyCode::Char('-') => {
                self.offset -= 1;
                vec![Effect::RequestRender]
            }
            KeyCode::Char('g') => {
                self.form = Form::Goal(TextInput::new());
                vec![Effect::RequestRender]
            }
            KeyCode::Char('d') => {
                self.form = Form::Date {
                    day: TextInput::new(),
                    label: TextInput::new(),
                    focus: DateFocus::Day,
                };
                vec![Effect::RequestRender]
            }
            KeyCode::Up => {
                if self.selected_goal > 0 {
                    self.selected_goal -= 1;
                    return vec![Effect::RequestRender];
                }
                Vec::new()
            }
            KeyCode::Down => {
                if !self.goals.is_empty() && self.selected_goal + 1 < self.goals.len() {
                    self.selected_goal += 1;
                    return vec![Effect::RequestRender];
                }
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(goal) = self.goals.get_mut(self.selected_goal) {
                    goal.done = !goal.done;
                    return vec![Effect::RequestRender];
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn handle_goal_form_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        let Form::Goal(input) = &mut self.form else {
            return Vec::new();
        };
        match key.code {
            KeyCode::Esc => {
                self.form = Form::None;
                vec![Effect::RequestRender]
            }
            KeyCode::Enter => {
                let text = input.value().trim().to_string();
                if text.is_empty() {
                    return Vec::new();
                }
                let id = self.next_goal_id;
                self.next_goal_id += 1;
                self.goals.push(Goal {
                    id,
                    text,
                    done: false,
                });
                self.form = Form::None;
                vec![Effect::RequestRender]
            }
            _ => {
                if input.handle_key(key) {
                    vec![Effect::RequestRender]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn handle_date_form_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        let Form::Date { day, label, focus } = &mut self.form else {
            return Vec::new();
        };
        match key.code {
            KeyCode::Esc => {
                self.form = Form::None;
                vec![Effect::RequestRender]
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                *focus = match focus {
                    DateFocus::Day => DateFocus::Label,
                    DateFocus::Label => DateFocus::Day,
                };
                vec![Effect::RequestRender]
            }
            KeyCode::Enter => {
                // Days outside 1..=30 are silently rejected; the form stays up.
                let Ok(parsed) = day.value().trim().parse::<u8>() else {
                    return Vec::new();
                };
                if !(1..=30).contains(&parsed) {
                    return Vec::new();
                }
                let text = label.value().trim().to_string();
                if text.is_empty() {
                    return Vec::new();
                }
                self.dates.push(ImportantDate {
                    day: parsed,
                    label: text,
                });
                self.dates.sort_by_key(|d| d.day);
                self.form = Form::None;
                vec![Effect::RequestRender]
            }
            _ => {
                let input = match focus {
                    DateFocus::Day => day,
                    DateFocus::Label => label,
                };
                if input.handle_key(key) {
                    vec![Effect::RequestRender]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn render_grid(
        &self,
        frame: &mut Frame,
        today_civil: CivilDate,
        today: HijriDate,
        ctx: &ViewContext<'_>,
    ) {
        let mut header = Vec::new();
        for key in WEEKDAY_KEYS {
            header.push(Span::styled(format!("{:>4}", ctx.t(key)), ctx.theme.hint));
        }
        frame.push_spans(header);

        let days_in_month = HijriDate::month_length(today.year, today.month);
        let first_weekday = hijri::first_weekday_of_month(today_civil, self.offset, today.day);
        let event_days: Vec<u8> = self.dates.iter().map(|d| d.day).collect();
        let grid = MonthGrid::build(days_in_month, first_weekday, today.day, &event_days);

        for week in grid.weeks() {
            let mut spans = Vec::new();
            for cell in week {
                match cell.day {
                    None => spans.push(Span::new("    ")),
                    Some(day) => {
                        let marker = if cell.has_events { "•" } else { " " };
                        let style = if cell.is_today {
                            ctx.theme.highlight
                        } else if cell.has_events {
                            ctx.theme.accent
                        } else {
                            Style::new()
                        };
                        spans.push(Span::styled(format!("{:>3}{marker}", day), style));
                    }
                }
            }
            frame.push_spans(spans);
        }
    }

    fn render_goals(&self, frame: &mut Frame, ctx: &ViewContext<'_>) {
        frame.push_text(ctx.t("monthly.goals"), ctx.theme.title);
        if self.goals.is_empty() {
            frame.push_text(format!("  [g] {}", ctx.t("monthly.addGoal")), ctx.theme.hint);
            return;
        }
        for (i, goal) in self.goals.iter().enumerate() {
            let mark = if goal.done { "[x]" } else { "[ ]" };
            let style = if i == self.selected_goal {
                ctx.theme.highlight
            } else if goal.done {
                ctx.theme.completed
            } else {
                Style::new()
            };
            frame.push_text(format!("  {mark} {}", goal.text), style);
        }
    }

    fn render_dates(&self, frame: &mut Frame, ctx: &ViewContext<'_>) {
        frame.push_text(ctx.t("monthly.important"), ctx.theme.title);
        if self.dates.is_empty() {
            frame.push_text(format!("  [d] {}", ctx.t("monthly.addDate")), ctx.theme.hint);
            return;
        }
        for date in &self.dates {
            frame.push_text(format!("  {:>2} · {}", date.day, date.label), Style::new());
        }
    }
}

fn offset_suffix(offset: i32) -> String {
    if offset == 0 {
        String::new()
    } else {
        format!(" ({offset:+})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Language};
    use crate::ui::theme::Theme;

    fn with_ctx<R>(f: impl FnOnce(&ViewContext<'_>) -> R) -> R {
        let catalog = Catalog::new();
        let theme = Theme::default();
        f(&ViewContext {
            catalog: &catalog,
            theme: &theme,
            language: Language::En,
        })
    }

    fn press(view: &mut MonthlyView, code: KeyCode) {
        with_ctx(|ctx| {
            view.handle_key(KeyEvent::plain(code), ctx);
        });
    }

    fn type_text(view: &mut MonthlyView, text: &str) {
        for ch in text.chars() {
            press(view, KeyCode::Char(ch));
        }
    }

    #[test]
    fn offset_keys_adjust_the_projection() {
        let mut view = MonthlyView::new(&Settings::default());
        press(&mut view, KeyCode::Char('+'));
        press(&mut view, KeyCode::Char('+'));
        press(&mut view, KeyCode::Char('-'));
        assert_eq!(view.offset, 1);
    }

    #[test]
    fn starts_with_the_default_goals_and_dates() {
        let view = MonthlyView::new(&Settings::default());
        assert_eq!(view.goals.len(), 4);
        assert!(view.goals[2].done);
        let days: Vec<u8> = view.dates.iter().map(|d| d.day).collect();
        assert_eq!(days, vec![1, 13, 14, 15]);
    }

    #[test]
    fn goal_form_adds_and_toggles() {
        let mut view = MonthlyView::new(&Settings::default());
        press(&mut view, KeyCode::Char('g'));
        assert!(view.wants_text_input());
        type_text(&mut view, "Memorize Surah Al-Mulk");
        press(&mut view, KeyCode::Enter);
        assert_eq!(view.goals.len(), 5);
        assert_eq!(view.goals[4].id, 5);
        assert!(!view.wants_text_input());

        press(&mut view, KeyCode::Char(' '));
        assert!(view.goals[0].done);
        press(&mut view, KeyCode::Enter);
        assert!(!view.goals[0].done);
    }

    #[test]
    fn empty_goal_is_not_added() {
        let mut view = MonthlyView::new(&Settings::default());
        press(&mut view, KeyCode::Char('g'));
        press(&mut view, KeyCode::Enter);
        assert_eq!(view.goals.len(), 4);
        assert!(view.wants_text_input());
        press(&mut view, KeyCode::Esc);
        assert!(!view.wants_text_input());
    }

    #[test]
    fn date_form_validates_the_day() {
        let mut view = MonthlyView::new(&Settings::default());
        press(&mut view, KeyCode::Char('d'));
        type_text(&mut view, "31");
        press(&mut view, KeyCode::Tab);
        type_text(&mut view, "Laylat al-Qadr");
        press(&mut view, KeyCode::Enter);
        assert_eq!(view.dates.len(), 4);

        press(&mut view, KeyCode::Tab);
        press(&mut view, KeyCode::Backspace);
        press(&mut view, KeyCode::Backspace);
        type_text(&mut view, "27");
        press(&mut view, KeyCode::Tab);
        press(&mut view, KeyCode::Enter);
        assert_eq!(view.dates.len(), 5);
        assert_eq!(view.dates[4].day, 27);
    }

    #[test]
    fn dates_are_kept_sorted_by_day() {
        let mut view = MonthlyView::new(&Settings::default());
        press(&mut view, KeyCode::Char('d'));
        type_text(&mut view, "9");
        press(&mut view, KeyCode::Tab);
        type_text(&mut view, "Day of Arafah");
        press(&mut view, KeyCode::Enter);
        let days: Vec<u8> = view.dates.iter().map(|d| d.day).collect();
        assert_eq!(days, vec![1, 9, 13, 14, 15]);
    }

    #[test]
    fn grid_marks_important_days() {
        let mut view = MonthlyView::new(&Settings::default());
        view.dates.push(ImportantDate {
            day: 10,
            label: "Ashura".into(),
        });
        let frame = with_ctx(|ctx| view.render(ctx));
        let text: String = frame
            .lines()
            .iter()
            .flat_map(|l| l.spans())
            .map(|s| s.text().to_string())
            .collect();
        assert!(text.contains("10•"));
    }
}
