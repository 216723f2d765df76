//! Aladhan prayer-time and qibla service.

use serde::Deserialize;

use crate::api::{ApiError, Client, decode};
use crate::hijri::CivilDate;

const BASE: &str = "https://api.aladhan.com/v1";

/// Every timing request is pinned to UTC so the returned `HH:MM` strings
/// read on the same clock as [`crate::prayer::now_seconds`].
const TIMEZONE: &str = "UTC";

#[derive(Debug, Clone, Deserialize)]
struct TimingsResponse {
    data: TimingsData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimingsData {
    pub timings: Timings,
    pub date: DateInfo,
}

/// The six daily prayer events, as `HH:MM` strings in service order.
#[derive(Debug, Clone, Deserialize)]
pub struct Timings {
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Sunrise")]
    pub sunrise: String,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: String,
    #[serde(rename = "Asr")]
    pub asr: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
    #[serde(rename = "Isha")]
    pub isha: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateInfo {
    pub hijri: HijriInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HijriInfo {
    pub day: String,
    pub month: HijriMonth,
    pub year: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HijriMonth {
    pub number: u8,
    pub en: String,
    pub ar: String,
}

#[derive(Debug, Clone, Deserialize)]
struct QiblaResponse {
    data: QiblaData,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct QiblaData {
    pub latitude: f64,
    pub longitude: f64,
    /// Bearing from true north, in degrees.
    pub direction: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Method {
    pub id: u32,
    pub name: &'static str,
}

/// Named astronomical conventions accepted by the service.
pub const CALCULATION_METHODS: &[Method] = &[
    Method { id: 1, name: "University of Islamic Sciences, Karachi" },
    Method { id: 2, name: "Islamic Society of North America (ISNA)" },
    Method { id: 3, name: "Muslim World League" },
    Method { id: 4, name: "Umm al-Qura, Makkah" },
    Method { id: 5, name: "Egyptian General Authority" },
    Method { id: 7, name: "Institute of Geophysics, Tehran" },
    Method { id: 8, name: "Gulf Region" },
    Method { id: 9, name: "Kuwait" },
    Method { id: 10, name: "Qatar" },
    Method { id: 11, name: "Majlis Ugama Islam Singapura" },
    Method { id: 12, name: "Union Organization Islamic de France" },
    Method { id: 13, name: "Diyanet İşleri Başkanlığı, Turkey" },
    Method { id: 14, name: "Spiritual Administration of Muslims of Russia" },
];

pub fn method_name(id: u32) -> &'static str {
    CALCULATION_METHODS
        .iter()
        .find(|m| m.id == id)
        .map(|m| m.name)
        .unwrap_or("Unknown")
}

/// Index into [`CALCULATION_METHODS`] of the entry after `id`, wrapping.
pub fn next_method(id: u32) -> u32 {
    let pos = CALCULATION_METHODS.iter().position(|m| m.id == id);
    match pos {
        Some(i) => CALCULATION_METHODS[(i + 1) % CALCULATION_METHODS.len()].id,
        None => CALCULATION_METHODS[0].id,
    }
}

/// Date path segment in the `D-M-YYYY` form the service expects.
fn date_segment(date: CivilDate) -> String {
    format!("{}-{}-{}", date.day, date.month, date.year)
}

fn coords_query(latitude: f64, longitude: f64, method: u32) -> [(&'static str, String); 4] {
    [
        ("latitude", latitude.to_string()),
        ("longitude", longitude.to_string()),
        ("method", method.to_string()),
        ("timezonestring", TIMEZONE.to_string()),
    ]
}

fn city_query(city: &str, country: &str, method: u32) -> [(&'static str, String); 4] {
    [
        ("city", city.to_string()),
        ("country", country.to_string()),
        ("method", method.to_string()),
        ("timezonestring", TIMEZONE.to_string()),
    ]
}

fn fetch_timings(
    client: &Client,
    url: &str,
    query: [(&'static str, String); 4],
) -> Result<TimingsData, ApiError> {
    let mut request = client.agent().get(url);
    for (name, value) in &query {
        request = request.query(name, value);
    }
    let response = request.call()?;
    decode::<TimingsResponse>(response).map(|r| r.data)
}

pub fn timings_by_coords(
    client: &Client,
    date: CivilDate,
    latitude: f64,
    longitude: f64,
    method: u32,
) -> Result<TimingsData, ApiError> {
    let url = format!("{BASE}/timings/{}", date_segment(date));
    fetch_timings(client, &url, coords_query(latitude, longitude, method))
}

pub fn timings_by_city(
    client: &Client,
    date: CivilDate,
    city: &str,
    country: &str,
    method: u32,
) -> Result<TimingsData, ApiError> {
    let url = format!("{BASE}/timingsByCity/{}", date_segment(date));
    fetch_timings(client, &url, city_query(city, country, method))
}

pub fn qibla(client: &Client, latitude: f64, longitude: f64) -> Result<QiblaData, ApiError> {
    let url = format!("{BASE}/qibla/{latitude}/{longitude}");
    let response = client.agent().get(&url).call()?;
    decode::<QiblaResponse>(response).map(|r| r.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_segment_is_unpadded() {
        assert_eq!(date_segment(CivilDate::new(2026, 8, 6)), "6-8-2026");
    }

    #[test]
    fn every_timing_request_asks_for_utc() {
        // The countdown clock reads UTC; a location-local response would
        // shift current/next by the whole UTC offset.
        let coords = coords_query(24.7, 46.7, 4);
        assert!(coords.contains(&("timezonestring", "UTC".to_string())));
        let city = city_query("Riyadh", "Saudi Arabia", 4);
        assert!(city.contains(&("timezonestring", "UTC".to_string())));
    }

    #[test]
    fn method_cycling_wraps() {
        assert_eq!(next_method(3), 4);
        assert_eq!(next_method(14), 1);
        // Id 6 is unassigned upstream; cycling from it restarts the list.
        assert_eq!(next_method(6), 1);
    }

    #[test]
    fn decodes_timings_payload() {
        let body = r#"{
            "code": 200,
            "data": {
                "timings": {
                    "Fajr": "05:00", "Sunrise": "06:20", "Dhuhr": "12:10",
                    "Asr": "15:30", "Maghrib": "18:05", "Isha": "19:30",
                    "Imsak": "04:50"
                },
                "date": {
                    "readable": "26 Aug 2026",
                    "hijri": {
                        "date": "13-03-1448",
                        "day": "13",
                        "month": {"number": 3, "en": "Rabi' al-Awwal", "ar": "ربيع الأول"},
                        "year": "1448"
                    }
                }
            }
        }"#;
        let parsed: TimingsResponse = serde_json::from_str(body).expect("decodes");
        assert_eq!(parsed.data.timings.asr, "15:30");
        assert_eq!(parsed.data.date.hijri.month.number, 3);
    }
}
