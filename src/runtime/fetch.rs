//! Background network requests on worker threads, reported back over a
//! channel the event loop drains between terminal polls.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::api::aladhan::{self, QiblaData, TimingsData};
use crate::api::geocode::{self, Place};
use crate::api::quran::{self, Chapter, VersesResponse};
use crate::api::{ApiError, Client};
use crate::hijri::CivilDate;

#[derive(Debug, Clone)]
pub enum LocationQuery {
    Coords { latitude: f64, longitude: f64 },
    City { city: String, country: String },
}

#[derive(Debug, Clone)]
pub enum FetchRequest {
    PrayerTimes {
        date: CivilDate,
        query: LocationQuery,
        method: u32,
    },
    Qibla {
        latitude: f64,
        longitude: f64,
    },
    ReverseGeocode {
        latitude: f64,
        longitude: f64,
    },
    Chapters,
    /// Chapter metadata plus its first page of verses in one round trip.
    ChapterOpen {
        chapter_id: u32,
        translation: Option<u32>,
    },
    Verses {
        chapter_id: u32,
        translation: Option<u32>,
        page: u32,
    },
}

#[derive(Debug, Clone)]
pub enum FetchResult {
    PrayerTimes(Result<TimingsData, ApiError>),
    Qibla(Result<QiblaData, ApiError>),
    ReverseGeocode(Result<Place, ApiError>),
    Chapters(Result<Vec<Chapter>, ApiError>),
    ChapterOpen {
        chapter_id: u32,
        result: Result<(Chapter, VersesResponse), ApiError>,
    },
    Verses {
        chapter_id: u32,
        result: Result<VersesResponse, ApiError>,
    },
}

pub fn execute(client: &Client, request: FetchRequest) -> FetchResult {
    match request {
        FetchRequest::PrayerTimes {
            date,
            query,
            method,
        } => {
            let result = match query {
                LocationQuery::Coords {
                    latitude,
                    longitude,
                } => aladhan::timings_by_coords(client, date, latitude, longitude, method),
                LocationQuery::City { city, country } => {
                    aladhan::timings_by_city(client, date, &city, &country, method)
                }
            };
            FetchResult::PrayerTimes(result)
        }
        FetchRequest::Qibla {
            latitude,
            longitude,
        } => FetchResult::Qibla(aladhan::qibla(client, latitude, longitude)),
        FetchRequest::ReverseGeocode {
            latitude,
            longitude,
        } => FetchResult::ReverseGeocode(geocode::reverse(client, latitude, longitude)),
        FetchRequest::Chapters => FetchResult::Chapters(quran::chapters(client)),
        FetchRequest::ChapterOpen {
            chapter_id,
            translation,
        } => {
            let result = quran::chapter_info(client, chapter_id).and_then(|chapter| {
                let verses = quran::verses(client, chapter_id, translation, 1)?;
                Ok((chapter, verses))
            });
            FetchResult::ChapterOpen { chapter_id, result }
        }
        FetchRequest::Verses {
            chapter_id,
            translation,
            page,
        } => FetchResult::Verses {
            chapter_id,
            result: quran::verses(client, chapter_id, translation, page),
        },
    }
}

pub struct FetchExecutor {
    client: Client,
    completion_tx: Sender<FetchResult>,
    completion_rx: Receiver<FetchResult>,
}

impl FetchExecutor {
    pub fn new(client: Client) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<FetchResult>();
        Self {
            client,
            completion_tx,
            completion_rx,
        }
    }

    pub fn spawn(&self, request: FetchRequest) {
        let client = self.client.clone();
        let completion_tx = self.completion_tx.clone();
        std::thread::spawn(move || {
            let result = execute(&client, request);
            let _ = completion_tx.send(result);
        });
    }

    pub fn drain_ready(&self) -> Vec<FetchResult> {
        let mut out = Vec::<FetchResult>::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(result) => out.push(result),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}

impl Default for FetchExecutor {
    fn default() -> Self {
        Self::new(Client::new())
    }
}
