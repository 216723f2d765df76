pub mod adhkar;
pub mod hadith;

pub use adhkar::{ADHKAR, ADHKAR_CATEGORIES, Dhikr, DhikrCategory, TapCounter};
pub use hadith::{HADITH_CATEGORIES, HADITHS, Hadith, HadithCategory, daily_index};
