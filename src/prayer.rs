//! Daily prayer schedule and the next-prayer countdown.

use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ORDER: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(self, language: Language) -> &'static str {
        match (self, language) {
            (Prayer::Fajr, Language::En) => "Fajr",
            (Prayer::Sunrise, Language::En) => "Sunrise",
            (Prayer::Dhuhr, Language::En) => "Dhuhr",
            (Prayer::Asr, Language::En) => "Asr",
            (Prayer::Maghrib, Language::En) => "Maghrib",
            (Prayer::Isha, Language::En) => "Isha",
            (Prayer::Fajr, Language::Ar) => "الفجر",
            (Prayer::Sunrise, Language::Ar) => "الشروق",
            (Prayer::Dhuhr, Language::Ar) => "الظهر",
            (Prayer::Asr, Language::Ar) => "العصر",
            (Prayer::Maghrib, Language::Ar) => "المغرب",
            (Prayer::Isha, Language::Ar) => "العشاء",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    pub fn seconds(self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60
    }

    pub fn to_hhmm(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parses an `HH:MM` timing string. The service occasionally appends a
/// timezone suffix ("05:01 (EET)"), which is ignored.
pub fn parse_time(value: &str) -> Option<TimeOfDay> {
    let core = value.split_whitespace().next()?;
    let (h, m) = core.split_once(':')?;
    let hour: u8 = h.parse().ok()?;
    let minute: u8 = m.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(TimeOfDay { hour, minute })
}

/// Seconds since UTC midnight. Timing requests are pinned to UTC, so the
/// schedule and this clock agree regardless of the process timezone.
pub fn now_seconds() -> u32 {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    seconds_of_utc_day(secs)
}

/// Seconds since UTC midnight for an absolute Unix timestamp.
pub fn seconds_of_utc_day(unix_secs: u64) -> u32 {
    (unix_secs % 86_400) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerStatus {
    pub current: Prayer,
    pub next: Prayer,
    pub remaining_secs: u32,
}

impl PrayerStatus {
    /// Zero-padded `HH:MM:SS` countdown string.
    pub fn remaining(&self) -> String {
        let h = self.remaining_secs / 3600;
        let m = (self.remaining_secs % 3600) / 60;
        let s = self.remaining_secs % 60;
        format!("{h:02}:{m:02}:{s:02}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerSchedule {
    times: [TimeOfDay; 6],
}

impl PrayerSchedule {
    /// Builds a schedule from the six timing strings in daily order.
    /// Returns `None` if any of them fails to parse.
    pub fn from_strings(times: &[&str; 6]) -> Option<Self> {
        let mut parsed = [TimeOfDay { hour: 0, minute: 0 }; 6];
        for (slot, raw) in parsed.iter_mut().zip(times) {
            *slot = parse_time(raw)?;
        }
        Some(Self { times: parsed })
    }

    pub fn time_of(&self, prayer: Prayer) -> TimeOfDay {
        self.times[Prayer::ORDER.iter().position(|p| *p == prayer).unwrap_or(0)]
    }

    /// Current and next prayer relative to `now` (seconds since midnight).
    ///
    /// The first prayer strictly in the future is next and its predecessor
    /// is current; once Isha has passed, next wraps to tomorrow's Fajr.
    pub fn status(&self, now: u32) -> PrayerStatus {
        for (i, prayer) in Prayer::ORDER.iter().enumerate() {
            let at = self.times[i].seconds();
            if at > now {
                let current = if i > 0 {
                    Prayer::ORDER[i - 1]
                } else {
                    Prayer::Isha
                };
                return PrayerStatus {
                    current,
                    next: *prayer,
                    remaining_secs: at - now,
                };
            }
        }
        PrayerStatus {
            current: Prayer::Isha,
            next: Prayer::Fajr,
            remaining_secs: self.times[0].seconds() + 86_400 - now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> PrayerSchedule {
        PrayerSchedule::from_strings(&["05:00", "06:20", "12:10", "15:30", "18:05", "19:30"])
            .expect("valid schedule")
    }

    #[test]
    fn afternoon_status() {
        let status = schedule().status(14 * 3600);
        assert_eq!(status.current, Prayer::Dhuhr);
        assert_eq!(status.next, Prayer::Asr);
        assert_eq!(status.remaining(), "01:30:00");
    }

    #[test]
    fn wraps_after_isha() {
        let status = schedule().status(23 * 3600);
        assert_eq!(status.current, Prayer::Isha);
        assert_eq!(status.next, Prayer::Fajr);
        assert_eq!(status.remaining(), "06:00:00");
    }

    #[test]
    fn before_fajr_current_is_isha() {
        let status = schedule().status(3 * 3600);
        assert_eq!(status.current, Prayer::Isha);
        assert_eq!(status.next, Prayer::Fajr);
        assert_eq!(status.remaining(), "02:00:00");
    }

    #[test]
    fn exact_time_is_not_future() {
        // At exactly 12:10 Dhuhr has started; Asr is next.
        let status = schedule().status(12 * 3600 + 10 * 60);
        assert_eq!(status.current, Prayer::Dhuhr);
        assert_eq!(status.next, Prayer::Asr);
    }

    #[test]
    fn clock_reads_utc_wall_time_not_local() {
        // 2001-09-09 01:46:40Z is 04:46:40 on a Riyadh wall clock; the
        // countdown compares against the UTC reading.
        assert_eq!(seconds_of_utc_day(1_000_000_000), 3600 + 46 * 60 + 40);
        assert_eq!(seconds_of_utc_day(86_400 * 20_000), 0);
    }

    #[test]
    fn countdown_and_timings_share_one_clock() {
        // 2024-07-08 12:00:00Z against a UTC-pinned schedule: ten minutes
        // to Dhuhr, whatever timezone the process runs in.
        let now = seconds_of_utc_day(1_720_440_000);
        assert_eq!(now, 12 * 3600);
        let status = schedule().status(now);
        assert_eq!(status.current, Prayer::Sunrise);
        assert_eq!(status.next, Prayer::Dhuhr);
        assert_eq!(status.remaining(), "00:10:00");
    }

    #[test]
    fn parses_plain_and_suffixed_times() {
        assert_eq!(parse_time("05:01"), Some(TimeOfDay { hour: 5, minute: 1 }));
        assert_eq!(
            parse_time("18:45 (EET)"),
            Some(TimeOfDay {
                hour: 18,
                minute: 45
            })
        );
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("oops"), None);
    }
}
