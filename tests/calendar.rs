//! Calendar contracts exercised through the public API: projection totality,
//! grid consistency across day offsets, and exact year rollovers.

use mihrab::hijri::{first_weekday_of_month, CivilDate, HijriDate, MonthGrid};
use mihrab::i18n::Language;

#[test]
fn projection_and_grid_agree_for_every_offset() {
    let civil = CivilDate::new(2025, 3, 10);
    for offset in -5..=5 {
        let projected = HijriDate::project(civil, offset);
        assert!((1..=12).contains(&projected.month));
        assert!((1..=30).contains(&projected.day));

        let days_in_month = HijriDate::month_length(projected.year, projected.month);
        assert!(projected.day <= days_in_month);

        let first_weekday = first_weekday_of_month(civil, offset, projected.day);
        assert!(first_weekday <= 6);

        let grid = MonthGrid::build(days_in_month, first_weekday, projected.day, &[]);
        assert_eq!(
            grid.cells.len(),
            first_weekday as usize + days_in_month as usize
        );
        assert_eq!(grid.cells.iter().filter(|c| c.is_today).count(), 1);
        assert!(grid.weeks().count() <= 6);
    }
}

#[test]
fn day_one_weekday_matches_the_projection_chain() {
    // Walking back (current_day - 1) days from the projected date must land
    // on the same weekday as day 1 computed directly.
    for unix_days in (19_000i64..21_000).step_by(37) {
        let civil = CivilDate::from_unix_days(unix_days);
        let projected = HijriDate::project(civil, 0);
        let day_one = HijriDate {
            year: projected.year,
            month: projected.month,
            day: 1,
        };
        let expected = CivilDate::from_unix_days(day_one.to_unix_days()).weekday();
        assert_eq!(first_weekday_of_month(civil, 0, projected.day), expected);
    }
}

#[test]
fn common_year_rollover() {
    let last = HijriDate {
        year: 1446,
        month: 12,
        day: HijriDate::month_length(1446, 12),
    };
    assert_eq!(last.day, 29);
    let next = HijriDate::from_unix_days(last.to_unix_days() + 1);
    assert_eq!((next.year, next.month, next.day), (1447, 1, 1));
}

#[test]
fn leap_year_rollover() {
    assert!(HijriDate::is_leap_year(1447));
    let last = HijriDate {
        year: 1447,
        month: 12,
        day: HijriDate::month_length(1447, 12),
    };
    assert_eq!(last.day, 30);
    let next = HijriDate::from_unix_days(last.to_unix_days() + 1);
    assert_eq!((next.year, next.month, next.day), (1448, 1, 1));
}

#[test]
fn offset_crossing_a_month_boundary_changes_the_whole_header() {
    // 2025-03-01 projects to 1 Ramadan 1446; one day back is 29 Sha'ban.
    let civil = CivilDate::new(2025, 3, 1);
    let base = HijriDate::project(civil, 0);
    assert_eq!((base.month, base.day), (9, 1));
    assert_eq!(base.month_name(Language::En), "Ramadan");

    let shifted = HijriDate::project(civil, -1);
    assert_eq!((shifted.month, shifted.day), (8, 29));
    assert_eq!(shifted.month_name(Language::En), "Sha'ban");
}

#[test]
fn projection_round_trips_through_unix_days() {
    for unix_days in (-500i64..40_000).step_by(271) {
        let projected = HijriDate::from_unix_days(unix_days);
        assert_eq!(projected.to_unix_days(), unix_days);
    }
}
