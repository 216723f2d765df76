use crate::terminal::KeyEvent;

/// The five top-level screens, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Prayer,
    Quran,
    Hadith,
    Adhkar,
    Monthly,
}

impl ViewId {
    pub const ALL: [ViewId; 5] = [
        ViewId::Prayer,
        ViewId::Quran,
        ViewId::Hadith,
        ViewId::Adhkar,
        ViewId::Monthly,
    ];

    pub fn title_key(self) -> &'static str {
        match self {
            ViewId::Prayer => "nav.prayerTimes",
            ViewId::Quran => "nav.quran",
            ViewId::Hadith => "nav.hadith",
            ViewId::Adhkar => "nav.adhkar",
            ViewId::Monthly => "nav.monthly",
        }
    }

    pub fn from_digit(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(ViewId::Prayer),
            '2' => Some(ViewId::Quran),
            '3' => Some(ViewId::Hadith),
            '4' => Some(ViewId::Adhkar),
            '5' => Some(ViewId::Monthly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Exit,
    SwitchView(ViewId),
    ToggleLanguage,
    /// One-second countdown pulse for the prayer screen.
    Tick,
    /// Re-run the active screen's pending fetches.
    Refresh,
    InputKey(KeyEvent),
}
