//! Top-level application state: the active screen, the language toggle and
//! routing of keys, ticks and fetch completions to the five screens.

use crate::config::Settings;
use crate::i18n::{Catalog, Language};
use crate::runtime::{Command, Effect, FetchResult, ViewId};
use crate::terminal::{KeyCode, KeyEvent, Size};
use crate::ui::frame::Frame;
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use crate::views::adhkar::AdhkarView;
use crate::views::hadith::HadithView;
use crate::views::monthly::MonthlyView;
use crate::views::prayer::PrayerView;
use crate::views::quran::QuranView;
use crate::views::ViewContext;

pub struct App {
    language: Language,
    catalog: Catalog,
    theme: Theme,
    active: ViewId,
    prayer: PrayerView,
    quran: QuranView,
    hadith: HadithView,
    adhkar: AdhkarView,
    monthly: MonthlyView,
    should_exit: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            language: settings.language,
            catalog: Catalog::new(),
            theme: Theme::default(),
            active: ViewId::Prayer,
            prayer: PrayerView::new(&settings),
            quran: QuranView::new(),
            hadith: HadithView::new(),
            adhkar: AdhkarView::new(),
            monthly: MonthlyView::new(&settings),
            should_exit: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn init_effects(&mut self) -> Vec<Effect> {
        self.enter_active()
    }

    pub fn reduce(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Exit => {
                self.should_exit = true;
                Vec::new()
            }
            Command::SwitchView(id) => self.switch_view(id),
            Command::ToggleLanguage => {
                self.language = self.language.toggled();
                vec![Effect::SaveLanguage(self.language), Effect::RequestRender]
            }
            Command::Tick => {
                if self.active == ViewId::Prayer {
                    self.prayer.on_tick()
                } else {
                    Vec::new()
                }
            }
            Command::Refresh => {
                let mut effects = match self.active {
                    ViewId::Prayer => self.prayer.refresh_effects(),
                    ViewId::Quran => self.quran.refresh_effects(),
                    _ => Vec::new(),
                };
                effects.push(Effect::RequestRender);
                effects
            }
            Command::InputKey(key) => self.handle_key(key),
        }
    }

    pub fn handle_fetch(&mut self, result: FetchResult) -> Vec<Effect> {
        match result {
            FetchResult::PrayerTimes(r) => self.prayer.handle_prayer_times(r),
            FetchResult::Qibla(r) => self.prayer.handle_qibla(r),
            FetchResult::ReverseGeocode(r) => self.prayer.handle_geocode(r),
            FetchResult::Chapters(r) => self.quran.handle_chapters(r),
            FetchResult::ChapterOpen { chapter_id, result } => {
                self.quran.handle_chapter_open(chapter_id, result)
            }
            FetchResult::Verses { chapter_id, result } => {
                self.quran.handle_verses(chapter_id, result)
            }
        }
    }

    pub fn render(&self, _size: Size) -> Frame {
        let ctx = ViewContext {
            catalog: &self.catalog,
            theme: &self.theme,
            language: self.language,
        };

        let mut frame = Frame::new();
        frame.push_spans(self.tab_bar(&ctx));
        frame.push_blank();

        let body = match self.active {
            ViewId::Prayer => self.prayer.render(&ctx),
            ViewId::Quran => self.quran.render(&ctx),
            ViewId::Hadith => self.hadith.render(&ctx),
            ViewId::Adhkar => self.adhkar.render(&ctx),
            ViewId::Monthly => self.monthly.render(&ctx),
        };
        frame.extend(body.lines().to_vec());

        frame.push_blank();
        frame.push_text(self.footer_hint(&ctx), self.theme.hint);
        frame
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if !self.active_wants_text_input() {
            if let KeyCode::Char(ch) = key.code {
                if let Some(id) = ViewId::from_digit(ch) {
                    return self.reduce(Command::SwitchView(id));
                }
                if key.is_char('q') {
                    self.should_exit = true;
                    return Vec::new();
                }
                if key.is_char('l') {
                    return self.reduce(Command::ToggleLanguage);
                }
            }
        }

        let ctx = ViewContext {
            catalog: &self.catalog,
            theme: &self.theme,
            language: self.language,
        };
        match self.active {
            ViewId::Prayer => self.prayer.handle_key(key, &ctx),
            ViewId::Quran => self.quran.handle_key(key, &ctx),
            ViewId::Hadith => self.hadith.handle_key(key, &ctx),
            ViewId::Adhkar => self.adhkar.handle_key(key, &ctx),
            ViewId::Monthly => self.monthly.handle_key(key, &ctx),
        }
    }

    fn switch_view(&mut self, id: ViewId) -> Vec<Effect> {
        if id == self.active {
            return Vec::new();
        }
        let mut effects = self.leave_active();
        self.active = id;
        effects.extend(self.enter_active());
        effects.push(Effect::RequestRender);
        effects
    }

    fn enter_active(&mut self) -> Vec<Effect> {
        match self.active {
            ViewId::Prayer => self.prayer.enter_effects(),
            ViewId::Quran => self.quran.enter_effects(),
            _ => Vec::new(),
        }
    }

    fn leave_active(&self) -> Vec<Effect> {
        match self.active {
            ViewId::Prayer => self.prayer.leave_effects(),
            _ => Vec::new(),
        }
    }

    fn active_wants_text_input(&self) -> bool {
        match self.active {
            ViewId::Prayer => self.prayer.wants_text_input(),
            ViewId::Quran => self.quran.wants_text_input(),
            ViewId::Monthly => self.monthly.wants_text_input(),
            ViewId::Hadith | ViewId::Adhkar => false,
        }
    }

    fn tab_bar(&self, ctx: &ViewContext<'_>) -> Vec<Span> {
        let mut spans = Vec::new();
        for (i, id) in ViewId::ALL.iter().enumerate() {
            let style = if *id == self.active {
                self.theme.highlight
            } else {
                self.theme.hint
            };
            spans.push(Span::styled(
                format!(" {} {} ", i + 1, ctx.t(id.title_key())),
                style,
            ));
            spans.push(Span::new(" "));
        }
        spans
    }

    fn footer_hint(&self, ctx: &ViewContext<'_>) -> String {
        let view_hint = match self.active {
            ViewId::Prayer => {
                if self.prayer.wants_text_input() {
                    "Tab switch · Enter submit"
                } else {
                    "m method · r retry"
                }
            }
            ViewId::Quran => {
                if self.quran.wants_text_input() {
                    "Enter confirm · Esc close"
                } else {
                    "/ search · Enter open · t translation · n more · a reciter"
                }
            }
            ViewId::Hadith => "←/→ category · ↑/↓ select",
            ViewId::Adhkar => "←/→ category · ↑/↓ select · Space tap",
            ViewId::Monthly => {
                if self.monthly.wants_text_input() {
                    "Enter add · Esc cancel"
                } else {
                    "+/- offset · g goal · d date · Space toggle"
                }
            }
        };
        format!(
            "{view_hint}   |   1-5 screens · l {} · q quit",
            ctx.t("nav.language")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::runtime::{FetchRequest, SchedulerCommand};

    fn app_with_coords() -> App {
        App::new(Settings {
            latitude: Some(30.0),
            longitude: Some(31.2),
            ..Settings::default()
        })
    }

    fn key(ch: char) -> Command {
        Command::InputKey(KeyEvent::plain(KeyCode::Char(ch)))
    }

    #[test]
    fn init_starts_the_prayer_fetch() {
        let mut app = app_with_coords();
        let effects = app.init_effects();
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::Fetch(FetchRequest::PrayerTimes { .. }))));
    }

    #[test]
    fn digits_switch_screens_and_leave_cancels_the_tick() {
        let mut app = app_with_coords();
        app.init_effects();
        let effects = app.reduce(key('2'));
        assert_eq!(app.active, ViewId::Quran);
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::Schedule(SchedulerCommand::Cancel { .. }))));
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::Fetch(FetchRequest::Chapters))));
    }

    #[test]
    fn switch_view_command_matches_the_digit_path() {
        let mut app = app_with_coords();
        app.init_effects();
        let effects = app.reduce(Command::SwitchView(ViewId::Hadith));
        assert_eq!(app.active, ViewId::Hadith);
        assert!(effects.iter().any(|e| matches!(e, Effect::RequestRender)));
        // Switching to the already-active screen is a no-op.
        assert!(app.reduce(Command::SwitchView(ViewId::Hadith)).is_empty());
    }

    #[test]
    fn language_toggle_persists() {
        let mut app = app_with_coords();
        let effects = app.reduce(key('l'));
        assert_eq!(app.language, Language::Ar);
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::SaveLanguage(Language::Ar))));
    }

    #[test]
    fn q_exits_unless_a_text_field_is_focused() {
        let mut app = app_with_coords();
        app.reduce(key('5'));
        app.reduce(key('g'));
        assert!(app.monthly.wants_text_input());
        app.reduce(key('q'));
        assert!(!app.should_exit());

        app.reduce(Command::InputKey(KeyEvent::plain(KeyCode::Esc)));
        app.reduce(key('q'));
        assert!(app.should_exit());
    }

    #[test]
    fn digits_reach_text_fields_instead_of_switching() {
        let mut app = app_with_coords();
        app.reduce(key('5'));
        app.reduce(key('d'));
        app.reduce(key('2'));
        assert_eq!(app.active, ViewId::Monthly);
    }

    #[test]
    fn tick_is_ignored_off_the_prayer_screen() {
        let mut app = app_with_coords();
        app.reduce(key('3'));
        assert!(app.reduce(Command::Tick).is_empty());
    }

    #[test]
    fn exit_command_stops_the_loop() {
        let mut app = app_with_coords();
        assert!(app.reduce(Command::Exit).is_empty());
        assert!(app.should_exit());
    }
}
