//! Quran.com v4 content service.

use serde::Deserialize;

use crate::api::{ApiError, Client, decode};

const BASE: &str = "https://api.quran.com/api/v4";
const AUDIO_BASE: &str = "https://download.quranicaudio.com/quran";

/// Sahih International.
pub const DEFAULT_TRANSLATION: u32 = 20;
pub const VERSES_PER_PAGE: u32 = 50;

#[derive(Debug, Clone, Deserialize)]
pub struct Chapter {
    pub id: u32,
    pub name_simple: String,
    pub name_arabic: String,
    pub verses_count: u32,
    #[serde(default)]
    pub revelation_place: String,
    pub translated_name: TranslatedName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslatedName {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ChaptersResponse {
    chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChapterResponse {
    chapter: Chapter,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Verse {
    pub id: u64,
    pub verse_key: String,
    /// Absent on the Arabic-only verse endpoint.
    #[serde(default)]
    pub verse_number: u32,
    #[serde(default)]
    pub text_uthmani: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    pub text: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    pub per_page: u32,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_records: u32,
}

impl Pagination {
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersesResponse {
    pub verses: Vec<Verse>,
    pub pagination: Pagination,
}

pub fn chapters(client: &Client) -> Result<Vec<Chapter>, ApiError> {
    let url = format!("{BASE}/chapters");
    let response = client.agent().get(&url).query("language", "en").call()?;
    decode::<ChaptersResponse>(response).map(|r| r.chapters)
}

pub fn chapter_info(client: &Client, chapter_id: u32) -> Result<Chapter, ApiError> {
    let url = format!("{BASE}/chapters/{chapter_id}");
    let response = client.agent().get(&url).query("language", "en").call()?;
    decode::<ChapterResponse>(response).map(|r| r.chapter)
}

/// One page of a chapter's verses, optionally with a translation track.
pub fn verses(
    client: &Client,
    chapter_id: u32,
    translation: Option<u32>,
    page: u32,
) -> Result<VersesResponse, ApiError> {
    let response = match translation {
        Some(translation_id) => {
            let url = format!("{BASE}/verses/by_chapter/{chapter_id}");
            client
                .agent()
                .get(&url)
                .query("language", "en")
                .query("words", "false")
                .query("translations", &translation_id.to_string())
                .query("fields", "text_uthmani")
                .query("page", &page.to_string())
                .query("per_page", &VERSES_PER_PAGE.to_string())
                .call()?
        }
        None => {
            let url = format!("{BASE}/quran/verses/uthmani");
            client
                .agent()
                .get(&url)
                .query("chapter_number", &chapter_id.to_string())
                .query("page", &page.to_string())
                .query("per_page", &VERSES_PER_PAGE.to_string())
                .call()?
        }
    };
    decode(response)
}

#[derive(Debug, Clone, Copy)]
pub struct Reciter {
    pub id: &'static str,
    pub name: &'static str,
}

pub const RECITERS: &[Reciter] = &[
    Reciter {
        id: "mishaari_raashid_al_3afaasee",
        name: "Mishary Rashid Alafasy",
    },
    Reciter {
        id: "abdul_basit_murattal",
        name: "Abdul Basit (Murattal)",
    },
    Reciter {
        id: "yasser_ad-dussary",
        name: "Yasser Al-Dosari",
    },
];

/// Deterministic recitation URL; no network call involved.
pub fn audio_url(chapter_id: u32, reciter_id: &str) -> String {
    format!("{AUDIO_BASE}/{reciter_id}/{chapter_id:03}.mp3")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_url_pads_chapter_number() {
        assert_eq!(
            audio_url(2, "abdul_basit_murattal"),
            "https://download.quranicaudio.com/quran/abdul_basit_murattal/002.mp3"
        );
        assert_eq!(
            audio_url(114, RECITERS[0].id),
            "https://download.quranicaudio.com/quran/mishaari_raashid_al_3afaasee/114.mp3"
        );
    }

    #[test]
    fn decodes_verses_payload() {
        let body = r#"{
            "verses": [
                {
                    "id": 1,
                    "verse_number": 1,
                    "verse_key": "1:1",
                    "text_uthmani": "بِسْمِ ٱللَّهِ",
                    "translations": [{"resource_id": 20, "text": "In the Name of Allah"}]
                }
            ],
            "pagination": {"per_page": 50, "current_page": 1, "total_pages": 1, "total_records": 7}
        }"#;
        let parsed: VersesResponse = serde_json::from_str(body).expect("decodes");
        assert_eq!(parsed.verses[0].verse_key, "1:1");
        assert_eq!(parsed.verses[0].translations[0].text, "In the Name of Allah");
        assert!(!parsed.pagination.has_more());
    }

    #[test]
    fn decodes_the_arabic_only_payload() {
        // The uthmani endpoint carries neither verse_number nor translations.
        let body = r#"{
            "verses": [{"id": 1, "verse_key": "1:1", "text_uthmani": "بِسْمِ ٱللَّهِ"}],
            "pagination": {"per_page": 50, "current_page": 1, "total_pages": 1, "total_records": 7}
        }"#;
        let parsed: VersesResponse = serde_json::from_str(body).expect("decodes");
        assert_eq!(parsed.verses[0].text_uthmani, "بِسْمِ ٱللَّهِ");
        assert!(parsed.verses[0].translations.is_empty());
    }
}
