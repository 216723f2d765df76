//! Nominatim reverse geocoding, used only to show a friendly place name.

use serde::Deserialize;

use crate::api::{ApiError, Client, decode};

const BASE: &str = "https://nominatim.openstreetmap.org/reverse";

#[derive(Debug, Clone, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Address,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Place {
    pub city: Option<String>,
    pub country: Option<String>,
}

pub fn reverse(client: &Client, latitude: f64, longitude: f64) -> Result<Place, ApiError> {
    let response = client
        .agent()
        .get(BASE)
        .query("lat", &latitude.to_string())
        .query("lon", &longitude.to_string())
        .query("format", "json")
        .call()?;
    let decoded: ReverseResponse = decode(response)?;
    let address = decoded.address;
    Ok(Place {
        city: address.city.or(address.town).or(address.village),
        country: address.country,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_city_over_town_and_village() {
        let body = r#"{"address": {"town": "Giza", "country": "Egypt"}}"#;
        let parsed: ReverseResponse = serde_json::from_str(body).expect("decodes");
        let address = parsed.address;
        let place = Place {
            city: address.city.or(address.town).or(address.village),
            country: address.country,
        };
        assert_eq!(place.city.as_deref(), Some("Giza"));
        assert_eq!(place.country.as_deref(), Some("Egypt"));
    }

    #[test]
    fn missing_address_yields_empty_place() {
        let parsed: ReverseResponse = serde_json::from_str("{}").expect("decodes");
        assert!(parsed.address.city.is_none());
        assert!(parsed.address.country.is_none());
    }
}
