pub mod adhkar;
pub mod hadith;
pub mod monthly;
pub mod prayer;
pub mod quran;

use crate::i18n::{Catalog, Language};
use crate::ui::theme::Theme;

/// Read-only context shared by every screen while handling keys or rendering.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub theme: &'a Theme,
    pub language: Language,
}

impl ViewContext<'_> {
    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        self.catalog.t(self.language, key)
    }
}
