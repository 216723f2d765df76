use clap::Parser;

use mihrab::api::aladhan::CALCULATION_METHODS;
use mihrab::app::App;
use mihrab::config::{self, Settings};
use mihrab::i18n::Language;
use mihrab::runtime::{FetchExecutor, Runtime};
use mihrab::terminal::Terminal;

#[derive(Parser)]
#[command(
    name = "mihrab",
    version,
    about = "Prayer times, Quran, hadith, adhkar and a Hijri planner in the terminal"
)]
struct Cli {
    /// UI language, "en" or "ar"; defaults to the saved choice
    #[arg(long)]
    lang: Option<String>,

    /// Latitude used for prayer times and the qibla bearing
    #[arg(long, requires = "lon")]
    lat: Option<f64>,

    /// Longitude used for prayer times and the qibla bearing
    #[arg(long, requires = "lat")]
    lon: Option<f64>,

    /// City used for prayer times when no coordinates are given
    #[arg(long)]
    city: Option<String>,

    /// Country accompanying --city
    #[arg(long)]
    country: Option<String>,

    /// Prayer-time calculation method id
    #[arg(long, default_value_t = 3)]
    method: u32,

    /// Hijri day offset for local moon sighting
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    offset: i32,

    /// Never use location; go straight to manual city entry
    #[arg(long)]
    no_location: bool,
}

fn main() {
    let cli = Cli::parse();

    let language = match &cli.lang {
        Some(raw) => match Language::from_str(raw) {
            Some(language) => language,
            None => {
                eprintln!("Error: unsupported language '{raw}' (expected \"en\" or \"ar\")");
                std::process::exit(2);
            }
        },
        None => config::load_language().unwrap_or_default(),
    };

    if !CALCULATION_METHODS.iter().any(|m| m.id == cli.method) {
        eprintln!("Error: unknown calculation method {}", cli.method);
        std::process::exit(2);
    }

    let settings = Settings {
        language,
        method: cli.method,
        hijri_offset: cli.offset,
        latitude: cli.lat,
        longitude: cli.lon,
        city: cli.city,
        country: cli.country,
        no_location: cli.no_location,
    };

    let terminal = match Terminal::new() {
        Ok(terminal) => terminal,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut runtime = Runtime::new(App::new(settings), terminal, FetchExecutor::default());
    if let Err(e) = runtime.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
