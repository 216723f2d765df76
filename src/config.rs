//! Session settings and the single persisted preference.
//!
//! Only the UI language survives across sessions; everything else lives for
//! one run and is seeded from the command line.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Per-session settings passed to the app at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub language: Language,
    /// Aladhan calculation-method id.
    pub method: u32,
    /// Moon-sighting correction applied before Hijri projection.
    pub hijri_offset: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub country: Option<String>,
    /// The user explicitly declined location use.
    pub no_location: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::En,
            method: 3,
            hijri_offset: 0,
            latitude: None,
            longitude: None,
            city: None,
            country: None,
            no_location: false,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Persisted {
    language: String,
}

fn config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("mihrab").join("config.json"))
}

/// Reads the persisted language choice, if any. Unreadable or malformed
/// files are treated as absent.
pub fn load_language() -> Option<Language> {
    let path = config_path()?;
    let raw = fs::read_to_string(path).ok()?;
    let persisted: Persisted = serde_json::from_str(&raw).ok()?;
    Language::from_str(&persisted.language)
}

/// Writes the language choice, creating the config directory if needed.
pub fn save_language(language: Language) -> io::Result<()> {
    let Some(path) = config_path() else {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "no config directory available",
        ));
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let persisted = Persisted {
        language: language.as_str().to_string(),
    };
    let body = serde_json::to_string_pretty(&persisted)?;
    fs::write(path, body)
}
