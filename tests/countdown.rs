//! Countdown contracts exercised through the public API.

use mihrab::prayer::{parse_time, Prayer, PrayerSchedule};

fn schedule() -> PrayerSchedule {
    PrayerSchedule::from_strings(&["04:45", "06:10", "12:05", "15:25", "18:10", "19:40"])
        .expect("valid schedule")
}

#[test]
fn every_second_of_the_day_has_a_consistent_status() {
    let schedule = schedule();
    for now in (0u32..86_400).step_by(61) {
        let status = schedule.status(now);
        assert!(status.remaining_secs > 0, "zero remaining at {now}");

        let next_at = schedule.time_of(status.next).seconds();
        if next_at > now {
            assert_eq!(status.remaining_secs, next_at - now);
        } else {
            // Wrapped past Isha to tomorrow's Fajr.
            assert_eq!(status.next, Prayer::Fajr);
            assert_eq!(status.current, Prayer::Isha);
            assert_eq!(status.remaining_secs, next_at + 86_400 - now);
        }
    }
}

#[test]
fn current_is_always_the_predecessor_of_next() {
    let schedule = schedule();
    let order = Prayer::ORDER;
    for now in (0u32..86_400).step_by(601) {
        let status = schedule.status(now);
        let next_pos = order.iter().position(|p| *p == status.next).unwrap();
        let expected_current = if next_pos == 0 {
            Prayer::Isha
        } else {
            order[next_pos - 1]
        };
        assert_eq!(status.current, expected_current);
    }
}

#[test]
fn remaining_is_zero_padded_hhmmss() {
    let schedule = schedule();
    // 12:05 is 65 seconds away at 12:03:55.
    let status = schedule.status(12 * 3600 + 3 * 60 + 55);
    assert_eq!(status.remaining(), "00:01:05");
}

#[test]
fn schedule_rejects_any_unparseable_timing() {
    assert!(PrayerSchedule::from_strings(&[
        "04:45", "06:10", "noon", "15:25", "18:10", "19:40"
    ])
    .is_none());
}

#[test]
fn timezone_suffixes_are_tolerated() {
    let schedule = PrayerSchedule::from_strings(&[
        "04:45 (EET)",
        "06:10 (EET)",
        "12:05 (EET)",
        "15:25 (EET)",
        "18:10 (EET)",
        "19:40 (EET)",
    ])
    .expect("suffixed times parse");
    assert_eq!(
        schedule.time_of(Prayer::Fajr),
        parse_time("04:45").unwrap()
    );
}
