//! Civil (tabular) Islamic calendar arithmetic.
//!
//! The projection works on days since the Unix epoch. Month lengths come
//! from the tabular rule (odd months 30 days, even months 29, Dhu al-Hijjah
//! 30 in leap years) instead of probing a locale formatter near month
//! boundaries, so month and year rollovers are exact.

use crate::i18n::Language;

/// Days between 1970-01-01 and 1 Muharram 1 AH (622-07-19 Gregorian).
const HIJRI_EPOCH_UNIX_DAYS: i64 = -492_148;

const MONTH_NAMES_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

const MONTH_NAMES_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CivilDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CivilDate {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// The current calendar day on the UTC clock. Timing requests, the
    /// today cell and the daily selection all read this same day, so they
    /// roll over together.
    pub fn today() -> Self {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;
        Self::from_unix_days(secs.div_euclid(86_400))
    }

    pub fn from_unix_days(days: i64) -> Self {
        let z = days + 719_468;
        let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
        let doe = (z - era * 146_097) as u32;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let y = yoe as i64 + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let d = doy - (153 * mp + 2) / 5 + 1;
        let m = if mp < 10 { mp + 3 } else { mp - 9 };
        let y = if m <= 2 { y + 1 } else { y };
        Self {
            year: y as i32,
            month: m as u8,
            day: d as u8,
        }
    }

    pub fn to_unix_days(self) -> i64 {
        let y = self.year as i64 - if self.month <= 2 { 1 } else { 0 };
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let m = self.month as i64;
        let mp = if m > 2 { m - 3 } else { m + 9 };
        let doy = (153 * mp + 2) / 5 + self.day as i64 - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Weekday index, 0 = Sunday .. 6 = Saturday.
    pub fn weekday(self) -> u8 {
        weekday_of_unix_days(self.to_unix_days())
    }
}

pub fn weekday_of_unix_days(days: i64) -> u8 {
    // 1970-01-01 was a Thursday.
    (days + 4).rem_euclid(7) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HijriDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl HijriDate {
    /// Projects an offset-adjusted civil date onto the Hijri calendar.
    ///
    /// Total over all offsets: an out-of-range offset simply lands on
    /// whatever date the arithmetic yields.
    pub fn project(civil: CivilDate, day_offset: i32) -> Self {
        Self::from_unix_days(civil.to_unix_days() + day_offset as i64)
    }

    pub fn from_unix_days(days: i64) -> Self {
        let since_epoch = days - HIJRI_EPOCH_UNIX_DAYS;
        let year = (30 * since_epoch + 10_646).div_euclid(10_631);
        let prior = since_epoch - year_start(year);
        let month = ((2 * prior) / 59 + 1).min(12) as u8;
        let day = (prior - days_before_month(month) + 1) as u8;
        Self {
            year: year as i32,
            month,
            day,
        }
    }

    pub fn to_unix_days(self) -> i64 {
        HIJRI_EPOCH_UNIX_DAYS
            + year_start(self.year as i64)
            + days_before_month(self.month)
            + self.day as i64
            - 1
    }

    pub fn is_leap_year(year: i32) -> bool {
        (11 * year as i64 + 14).rem_euclid(30) < 11
    }

    /// Number of days in the given Hijri month, always 29 or 30.
    pub fn month_length(year: i32, month: u8) -> u8 {
        if month % 2 == 1 || (month == 12 && Self::is_leap_year(year)) {
            30
        } else {
            29
        }
    }

    pub fn month_name(&self, language: Language) -> &'static str {
        month_name(self.month, language)
    }
}

/// Localized month name; out-of-range indices fall back to a placeholder so
/// the calendar header always renders.
pub fn month_name(month: u8, language: Language) -> &'static str {
    let names = match language {
        Language::En => &MONTH_NAMES_EN,
        Language::Ar => &MONTH_NAMES_AR,
    };
    match month {
        1..=12 => names[month as usize - 1],
        _ => "—",
    }
}

/// Weekday (0 = Sunday) of day 1 of the Hijri month containing the
/// offset-adjusted civil date, where `current_day` is that date's projected
/// Hijri day-of-month.
pub fn first_weekday_of_month(civil: CivilDate, day_offset: i32, current_day: u8) -> u8 {
    let first = civil.to_unix_days() + day_offset as i64 - (current_day as i64 - 1);
    weekday_of_unix_days(first)
}

fn year_start(year: i64) -> i64 {
    354 * (year - 1) + (3 + 11 * year).div_euclid(30)
}

fn days_before_month(month: u8) -> i64 {
    let m = month as i64;
    29 * (m - 1) + m / 2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub day: Option<u8>,
    pub has_events: bool,
    pub is_today: bool,
}

/// Weekday-aligned month grid: `first_weekday` leading empty cells followed
/// by one cell per day.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn build(days_in_month: u8, first_weekday: u8, today: u8, event_days: &[u8]) -> Self {
        let mut cells = Vec::with_capacity(first_weekday as usize + days_in_month as usize);
        for _ in 0..first_weekday {
            cells.push(GridCell {
                day: None,
                has_events: false,
                is_today: false,
            });
        }
        for day in 1..=days_in_month {
            cells.push(GridCell {
                day: Some(day),
                has_events: event_days.contains(&day),
                is_today: day == today,
            });
        }
        Self { cells }
    }

    /// Cells grouped into calendar weeks of seven.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_muharram_first() {
        let h = HijriDate::from_unix_days(HIJRI_EPOCH_UNIX_DAYS);
        assert_eq!(
            h,
            HijriDate {
                year: 1,
                month: 1,
                day: 1
            }
        );
        let civil = CivilDate::from_unix_days(HIJRI_EPOCH_UNIX_DAYS);
        assert_eq!(civil, CivilDate::new(622, 7, 19));
    }

    #[test]
    fn civil_days_round_trip() {
        for days in [-492_148, -1, 0, 19_723, 19_912, 20_148, 400_000] {
            assert_eq!(CivilDate::from_unix_days(days).to_unix_days(), days);
        }
    }

    #[test]
    fn projects_known_dates() {
        // Tabular 1 Muharram 1446 fell on 2024-07-08.
        let h = HijriDate::project(CivilDate::new(2024, 7, 8), 0);
        assert_eq!(
            h,
            HijriDate {
                year: 1446,
                month: 1,
                day: 1
            }
        );

        // Ramadan 1446 began 2025-03-01.
        let h = HijriDate::project(CivilDate::new(2025, 3, 1), 0);
        assert_eq!(
            h,
            HijriDate {
                year: 1446,
                month: 9,
                day: 1
            }
        );
        assert_eq!(h.month_name(Language::En), "Ramadan");
        assert_eq!(h.month_name(Language::Ar), "رمضان");
    }

    #[test]
    fn offset_shifts_by_whole_days() {
        let civil = CivilDate::new(2025, 3, 3);
        let base = HijriDate::project(civil, 0);
        assert_eq!(base.day, 3);
        assert_eq!(HijriDate::project(civil, -2).day, 1);
        assert_eq!(HijriDate::project(civil, 2).day, 5);
    }

    #[test]
    fn projection_is_total_over_offsets() {
        let civil = CivilDate::new(2026, 8, 26);
        for offset in -40..=40 {
            let h = HijriDate::project(civil, offset);
            assert!((1..=30).contains(&h.day), "day {} at offset {offset}", h.day);
            assert!((1..=12).contains(&h.month));
            assert!(!h.month_name(Language::En).is_empty());
        }
    }

    #[test]
    fn month_lengths_follow_tabular_rule() {
        // 1446 is a common year: (11 * 1446 + 14) % 30 == 20.
        assert!(!HijriDate::is_leap_year(1446));
        assert_eq!(HijriDate::month_length(1446, 1), 30);
        assert_eq!(HijriDate::month_length(1446, 2), 29);
        assert_eq!(HijriDate::month_length(1446, 12), 29);

        // 1447 is leap: (11 * 1447 + 14) % 30 == 1.
        assert!(HijriDate::is_leap_year(1447));
        assert_eq!(HijriDate::month_length(1447, 12), 30);
    }

    #[test]
    fn month_length_matches_day_count() {
        // Walk two full years day by day and confirm the declared month
        // length is exactly the number of days projected into that month.
        let start = HijriDate {
            year: 1446,
            month: 1,
            day: 1,
        }
        .to_unix_days();
        let mut current = HijriDate::from_unix_days(start);
        let mut run = 0u8;
        for d in start.. {
            let h = HijriDate::from_unix_days(d);
            if (h.year, h.month) != (current.year, current.month) {
                assert_eq!(run, HijriDate::month_length(current.year, current.month));
                if current.year >= 1448 {
                    break;
                }
                current = h;
                run = 0;
            }
            run += 1;
        }
    }

    #[test]
    fn year_rollover_is_contiguous() {
        // Last day of 1446 is 29 Dhu al-Hijjah; the next day is 1 Muharram 1447.
        let last = HijriDate {
            year: 1446,
            month: 12,
            day: 29,
        };
        let next = HijriDate::from_unix_days(last.to_unix_days() + 1);
        assert_eq!(
            next,
            HijriDate {
                year: 1447,
                month: 1,
                day: 1
            }
        );
    }

    #[test]
    fn first_weekday_agrees_with_projection() {
        let civil = CivilDate::new(2025, 3, 10);
        let h = HijriDate::project(civil, 0);
        let wd = first_weekday_of_month(civil, 0, h.day);
        // Recompute directly from day 1 of the month.
        let first = HijriDate {
            year: h.year,
            month: h.month,
            day: 1,
        };
        assert_eq!(wd, weekday_of_unix_days(first.to_unix_days()));
        // Day 1 plus (length - 1) days is still inside the month.
        let len = HijriDate::month_length(h.year, h.month);
        let end = HijriDate::from_unix_days(first.to_unix_days() + len as i64 - 1);
        assert_eq!((end.year, end.month), (h.year, h.month));
    }

    #[test]
    fn grid_shape_and_flags() {
        let grid = MonthGrid::build(30, 3, 9, &[1, 13, 14, 15]);
        assert_eq!(grid.cells.len(), 33);
        assert!(grid.cells[..3].iter().all(|c| c.day.is_none()));
        assert_eq!(grid.cells[3].day, Some(1));
        assert!(grid.cells[3].has_events);
        let today: Vec<_> = grid.cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].day, Some(9));
        assert_eq!(grid.weeks().count(), 5);
    }

    #[test]
    fn weekday_anchor() {
        // 1970-01-01 was a Thursday, 2024-07-08 a Monday.
        assert_eq!(weekday_of_unix_days(0), 4);
        assert_eq!(CivilDate::new(2024, 7, 8).weekday(), 1);
    }
}
