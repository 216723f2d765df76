//! Prayer-times screen: today's six timings, a live countdown to the next
//! prayer, the qibla bearing and a manual location form when coordinates
//! are not available.

use std::time::Duration;

use crate::api::aladhan::{self, HijriInfo, QiblaData, TimingsData};
use crate::api::geocode::Place;
use crate::api::ApiError;
use crate::config::Settings;
use crate::hijri::CivilDate;
use crate::i18n::Language;
use crate::input::TextInput;
use crate::location::{self, LocationState};
use crate::prayer::{self, Prayer, PrayerSchedule, PrayerStatus};
use crate::runtime::{AppEvent, Command, Effect, FetchRequest, LocationQuery, SchedulerCommand};
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::frame::Frame;
use crate::ui::span::Span;
use crate::ui::style::Style;
use crate::views::ViewContext;

const TICK_KEY: &str = "prayer.tick";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManualFocus {
    City,
    Country,
}

pub struct PrayerView {
    location: LocationState,
    method: u32,
    loading: bool,
    failed: bool,
    schedule: Option<PrayerSchedule>,
    status: Option<PrayerStatus>,
    hijri: Option<HijriInfo>,
    qibla: Option<QiblaData>,
    city_input: TextInput,
    country_input: TextInput,
    focus: ManualFocus,
}

impl PrayerView {
    pub fn new(settings: &Settings) -> Self {
        let location = location::resolve(settings);
        let city_input = match &location.city {
            Some(city) => TextInput::with_value(city.clone()),
            None => TextInput::new(),
        };
        let country_input = match &location.country {
            Some(country) => TextInput::with_value(country.clone()),
            None => TextInput::new(),
        };
        Self {
            location,
            method: settings.method,
            loading: false,
            failed: false,
            schedule: None,
            status: None,
            hijri: None,
            qibla: None,
            city_input,
            country_input,
            focus: ManualFocus::City,
        }
    }

    /// The manual form owns the keyboard while it is on screen.
    pub fn wants_text_input(&self) -> bool {
        self.manual_form_visible()
    }

    pub fn enter_effects(&mut self) -> Vec<Effect> {
        let mut effects = self.initial_fetch_effects();
        if self.schedule.is_some() {
            effects.push(tick_effect());
        }
        effects
    }

    pub fn leave_effects(&self) -> Vec<Effect> {
        vec![Effect::Schedule(SchedulerCommand::Cancel {
            key: TICK_KEY.to_string(),
        })]
    }

    pub fn refresh_effects(&mut self) -> Vec<Effect> {
        self.schedule = None;
        self.status = None;
        self.failed = false;
        self.initial_fetch_effects()
    }

    pub fn on_tick(&mut self) -> Vec<Effect> {
        let Some(schedule) = self.schedule else {
            return Vec::new();
        };
        self.status = Some(schedule.status(prayer::now_seconds()));
        vec![tick_effect(), Effect::RequestRender]
    }

    pub fn handle_key(&mut self, key: KeyEvent, _ctx: &ViewContext<'_>) -> Vec<Effect> {
        if self.manual_form_visible() {
            return self.handle_form_key(key);
        }

        match key.code {
            KeyCode::Char('m') => {
                self.method = aladhan::next_method(self.method);
                let mut effects = self.refresh_effects();
                effects.push(Effect::RequestRender);
                effects
            }
            KeyCode::Char('r') => {
                let mut effects = self.refresh_effects();
                effects.push(Effect::RequestRender);
                effects
            }
            _ => Vec::new(),
        }
    }

    pub fn handle_prayer_times(&mut self, result: Result<TimingsData, ApiError>) -> Vec<Effect> {
        self.loading = false;
        match result {
            Ok(data) => {
                let timings = &data.timings;
                let schedule = PrayerSchedule::from_strings(&[
                    &timings.fajr,
                    &timings.sunrise,
                    &timings.dhuhr,
                    &timings.asr,
                    &timings.maghrib,
                    &timings.isha,
                ]);
                match schedule {
                    Some(schedule) => {
                        self.failed = false;
                        self.schedule = Some(schedule);
                        self.status = Some(schedule.status(prayer::now_seconds()));
                        self.hijri = Some(data.date.hijri);
                        vec![tick_effect(), Effect::RequestRender]
                    }
                    None => {
                        self.failed = true;
                        vec![Effect::RequestRender]
                    }
                }
            }
            Err(_) => {
                self.failed = true;
                vec![Effect::RequestRender]
            }
        }
    }

    pub fn handle_qibla(&mut self, result: Result<QiblaData, ApiError>) -> Vec<Effect> {
        // Qibla is a garnish; failures leave the line out quietly.
        if let Ok(data) = result {
            self.qibla = Some(data);
            return vec![Effect::RequestRender];
        }
        Vec::new()
    }

    pub fn handle_geocode(&mut self, result: Result<Place, ApiError>) -> Vec<Effect> {
        if let Ok(place) = result {
            if place.city.is_some() {
                self.location.city = place.city;
            }
            if place.country.is_some() {
                self.location.country = place.country;
            }
            return vec![Effect::RequestRender];
        }
        Vec::new()
    }

    pub fn render(&self, ctx: &ViewContext<'_>) -> Frame {
        let mut frame = Frame::new();
        frame.push_text(ctx.t("prayer.title"), ctx.theme.title);
        frame.push_blank();

        if let Some(hijri) = &self.hijri {
            frame.push_text(hijri_line(hijri, ctx.language), ctx.theme.accent);
        }
        if let Some(line) = self.location_line() {
            frame.push_text(line, ctx.theme.hint);
        }
        frame.push_text(
            format!(
                "{}: {}",
                ctx.t("prayer.calculationMethod"),
                aladhan::method_name(self.method)
            ),
            ctx.theme.hint,
        );
        frame.push_blank();

        if self.loading {
            frame.push_text(ctx.t("prayer.loading"), ctx.theme.hint);
            return frame;
        }
        if self.failed {
            frame.push_text(ctx.t("prayer.fetchError"), ctx.theme.error);
            return frame;
        }
        if self.manual_form_visible() {
            self.render_manual_form(&mut frame, ctx);
            return frame;
        }

        let (Some(schedule), Some(status)) = (self.schedule, self.status) else {
            frame.push_text(ctx.t("prayer.loading"), ctx.theme.hint);
            return frame;
        };

        frame.push_spans(vec![
            Span::styled(format!("{}: ", ctx.t("prayer.nextPrayer")), ctx.theme.title),
            Span::styled(status.next.name(ctx.language), ctx.theme.accent),
            Span::new(format!(
                "  {} {}",
                status.remaining(),
                ctx.t("prayer.until")
            )),
        ]);
        frame.push_spans(vec![
            Span::styled(format!("{}: ", ctx.t("prayer.current")), ctx.theme.hint),
            Span::new(status.current.name(ctx.language)),
        ]);
        frame.push_blank();

        for prayer in Prayer::ORDER {
            let time = schedule.time_of(prayer);
            let style = if prayer == status.next {
                ctx.theme.highlight
            } else if prayer == status.current {
                ctx.theme.accent
            } else {
                Style::new()
            };
            frame.push_text(
                format!("  {:<10} {}", prayer.name(ctx.language), time.to_hhmm()),
                style,
            );
        }

        if let Some(qibla) = self.qibla {
            frame.push_blank();
            frame.push_text(
                format!(
                    "{}: {:.1}° {}",
                    ctx.t("prayer.qiblaDirection"),
                    qibla.direction,
                    ctx.t("prayer.fromNorth")
                ),
                ctx.theme.hint,
            );
        }
        frame
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    ManualFocus::City => ManualFocus::Country,
                    ManualFocus::Country => ManualFocus::City,
                };
                vec![Effect::RequestRender]
            }
            KeyCode::Enter => self.submit_manual_form(),
            _ => {
                let input = match self.focus {
                    ManualFocus::City => &mut self.city_input,
                    ManualFocus::Country => &mut self.country_input,
                };
                if input.handle_key(key) {
                    vec![Effect::RequestRender]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn submit_manual_form(&mut self) -> Vec<Effect> {
        let city = self.city_input.value().trim().to_string();
        let country = self.country_input.value().trim().to_string();
        if city.is_empty() || country.is_empty() {
            return Vec::new();
        }
        self.location.city = Some(city.clone());
        self.location.country = Some(country.clone());
        self.loading = true;
        self.failed = false;
        vec![
            Effect::Fetch(FetchRequest::PrayerTimes {
                date: CivilDate::today(),
                query: LocationQuery::City { city, country },
                method: self.method,
            }),
            Effect::RequestRender,
        ]
    }

    fn initial_fetch_effects(&mut self) -> Vec<Effect> {
        if self.loading || self.schedule.is_some() {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if let Some((latitude, longitude)) = self.location.coordinates() {
            self.loading = true;
            effects.push(Effect::Fetch(FetchRequest::PrayerTimes {
                date: CivilDate::today(),
                query: LocationQuery::Coords {
                    latitude,
                    longitude,
                },
                method: self.method,
            }));
            effects.push(Effect::Fetch(FetchRequest::Qibla {
                latitude,
                longitude,
            }));
            if self.location.city.is_none() {
                effects.push(Effect::Fetch(FetchRequest::ReverseGeocode {
                    latitude,
                    longitude,
                }));
            }
        } else if let (Some(city), Some(country)) = (&self.location.city, &self.location.country) {
            self.loading = true;
            effects.push(Effect::Fetch(FetchRequest::PrayerTimes {
                date: CivilDate::today(),
                query: LocationQuery::City {
                    city: city.clone(),
                    country: country.clone(),
                },
                method: self.method,
            }));
        }
        effects
    }

    fn manual_form_visible(&self) -> bool {
        self.location.needs_manual_entry()
            && self.schedule.is_none()
            && !self.loading
            && !self.failed
            && (self.location.city.is_none() || self.location.country.is_none())
    }

    fn render_manual_form(&self, frame: &mut Frame, ctx: &ViewContext<'_>) {
        frame.push_text(ctx.t("prayer.locationError"), ctx.theme.error);
        frame.push_blank();
        frame.push_text(ctx.t("prayer.enterLocation"), Style::new());
        frame.push_spans(self.city_input.render(
            ctx.t("prayer.city"),
            self.focus == ManualFocus::City,
            ctx.theme.accent,
            ctx.theme.highlight,
        ));
        frame.push_spans(self.country_input.render(
            ctx.t("prayer.country"),
            self.focus == ManualFocus::Country,
            ctx.theme.accent,
            ctx.theme.highlight,
        ));
        frame.push_blank();
        frame.push_text(
            format!("[Enter] {}", ctx.t("prayer.getPrayerTimes")),
            ctx.theme.hint,
        );
    }

    fn location_line(&self) -> Option<String> {
        match (&self.location.city, &self.location.country) {
            (Some(city), Some(country)) => Some(format!("{city}, {country}")),
            (Some(city), None) => Some(city.clone()),
            (None, Some(country)) => Some(country.clone()),
            (None, None) => None,
        }
    }
}

fn tick_effect() -> Effect {
    Effect::Schedule(SchedulerCommand::EmitAfter {
        key: TICK_KEY.to_string(),
        delay: Duration::from_secs(1),
        event: AppEvent::Command(Command::Tick),
    })
}

fn hijri_line(hijri: &HijriInfo, language: Language) -> String {
    let month = match language {
        Language::En => &hijri.month.en,
        Language::Ar => &hijri.month.ar,
    };
    format!("{} {} {} AH", hijri.day, month, hijri.year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::aladhan::{DateInfo, HijriMonth, Timings};
    use crate::i18n::Catalog;
    use crate::ui::theme::Theme;

    fn ctx<'a>(catalog: &'a Catalog, theme: &'a Theme) -> ViewContext<'a> {
        ViewContext {
            catalog,
            theme,
            language: Language::En,
        }
    }

    fn timings_data() -> TimingsData {
        TimingsData {
            timings: Timings {
                fajr: "05:00".into(),
                sunrise: "06:20".into(),
                dhuhr: "12:10".into(),
                asr: "15:30".into(),
                maghrib: "18:05".into(),
                isha: "19:30".into(),
            },
            date: DateInfo {
                hijri: HijriInfo {
                    day: "13".into(),
                    month: HijriMonth {
                        number: 3,
                        en: "Rabi' al-Awwal".into(),
                        ar: "ربيع الأول".into(),
                    },
                    year: "1448".into(),
                },
            },
        }
    }

    fn coord_settings() -> Settings {
        Settings {
            latitude: Some(30.0),
            longitude: Some(31.2),
            ..Settings::default()
        }
    }

    #[test]
    fn coordinates_start_a_fetch_on_enter() {
        let mut view = PrayerView::new(&coord_settings());
        let effects = view.enter_effects();
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::Fetch(FetchRequest::PrayerTimes { .. }))));
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::Fetch(FetchRequest::Qibla { .. }))));
        assert!(view.loading);
    }

    #[test]
    fn missing_location_shows_the_manual_form() {
        let mut view = PrayerView::new(&Settings::default());
        assert!(view.enter_effects().is_empty());
        assert!(view.manual_form_visible());
        assert!(view.wants_text_input());
    }

    #[test]
    fn manual_submit_requires_both_fields() {
        let mut view = PrayerView::new(&Settings::default());
        for ch in "Cairo".chars() {
            view.city_input.handle_key(KeyEvent::plain(KeyCode::Char(ch)));
        }
        assert!(view.submit_manual_form().is_empty());

        view.focus = ManualFocus::Country;
        for ch in "Egypt".chars() {
            view.country_input.handle_key(KeyEvent::plain(KeyCode::Char(ch)));
        }
        let effects = view.submit_manual_form();
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Fetch(FetchRequest::PrayerTimes {
                query: LocationQuery::City { .. },
                ..
            })
        )));
        assert!(view.loading);
    }

    #[test]
    fn successful_fetch_arms_the_countdown() {
        let mut view = PrayerView::new(&coord_settings());
        view.enter_effects();
        let effects = view.handle_prayer_times(Ok(timings_data()));
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::Schedule(SchedulerCommand::EmitAfter { .. }))));
        assert!(view.schedule.is_some());
        assert!(view.status.is_some());
        assert!(!view.failed);
    }

    #[test]
    fn failed_fetch_sets_the_error_flag() {
        let mut view = PrayerView::new(&coord_settings());
        view.enter_effects();
        view.handle_prayer_times(Err(ApiError::Timeout));
        assert!(view.failed);
        assert!(!view.loading);
    }

    #[test]
    fn leave_cancels_the_countdown_key() {
        let view = PrayerView::new(&coord_settings());
        let effects = view.leave_effects();
        assert!(matches!(
            &effects[..],
            [Effect::Schedule(SchedulerCommand::Cancel { key })] if key == TICK_KEY
        ));
    }

    #[test]
    fn method_cycles_and_refetches() {
        let mut view = PrayerView::new(&coord_settings());
        view.enter_effects();
        view.handle_prayer_times(Ok(timings_data()));
        let (catalog, theme) = (Catalog::new(), Theme::default());
        let effects = view.handle_key(
            KeyEvent::plain(KeyCode::Char('m')),
            &ctx(&catalog, &theme),
        );
        assert_eq!(view.method, 4);
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::Fetch(FetchRequest::PrayerTimes { .. }))));
    }
}
