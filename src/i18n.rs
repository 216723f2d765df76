//! Two-language string catalog.

use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

/// Translation catalog keyed by dotted message ids. Lookups fall back to the
/// key itself so a missing entry renders as its id instead of failing.
pub struct Catalog {
    entries: IndexMap<&'static str, [&'static str; 2]>,
}

impl Catalog {
    pub fn new() -> Self {
        let mut entries = IndexMap::with_capacity(MESSAGES.len());
        for (key, en, ar) in MESSAGES {
            entries.insert(*key, [*en, *ar]);
        }
        Self { entries }
    }

    pub fn t<'a>(&self, language: Language, key: &'a str) -> &'a str {
        match self.entries.get(key) {
            Some(pair) => pair[language as usize],
            None => key,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

const MESSAGES: &[(&str, &str, &str)] = &[
    ("nav.prayerTimes", "Prayer Times", "مواقيت الصلاة"),
    ("nav.quran", "Quran", "القرآن"),
    ("nav.hadith", "Hadith", "الحديث"),
    ("nav.adhkar", "Adhkar", "الأذكار"),
    ("nav.monthly", "Monthly", "الشهري"),
    ("nav.language", "Language", "اللغة"),
    ("prayer.title", "Prayer Times", "مواقيت الصلاة"),
    (
        "prayer.loading",
        "Loading prayer times...",
        "جاري تحميل مواقيت الصلاة...",
    ),
    ("prayer.nextPrayer", "Next Prayer", "الصلاة القادمة"),
    ("prayer.current", "Current", "الحالية"),
    ("prayer.until", "until", "حتى"),
    (
        "prayer.locationError",
        "Unable to determine location. Please enter your city manually.",
        "تعذر تحديد الموقع. يرجى إدخال مدينتك يدوياً.",
    ),
    (
        "prayer.enterLocation",
        "Enter your location manually:",
        "أدخل موقعك يدوياً:",
    ),
    ("prayer.city", "City", "المدينة"),
    ("prayer.country", "Country", "الدولة"),
    (
        "prayer.getPrayerTimes",
        "Get Prayer Times",
        "الحصول على مواقيت الصلاة",
    ),
    ("prayer.calculationMethod", "Calculation Method", "طريقة الحساب"),
    ("prayer.qiblaDirection", "Qibla", "القبلة"),
    ("prayer.fromNorth", "from North", "من الشمال"),
    (
        "prayer.fetchError",
        "Failed to fetch prayer times. Please try again.",
        "تعذر جلب مواقيت الصلاة. حاول مرة أخرى.",
    ),
    ("quran.title", "Holy Quran", "القرآن الكريم"),
    ("quran.search", "Search Surah...", "ابحث عن سورة..."),
    ("quran.verses", "verses", "آية"),
    ("quran.loading", "Loading Surahs...", "جاري تحميل السور..."),
    ("quran.loadingSurah", "Loading Surah...", "جاري تحميل السورة..."),
    ("quran.backToSurahs", "Back to Surahs", "العودة إلى السور"),
    ("quran.showTranslation", "Show Translation", "إظهار الترجمة"),
    ("quran.loadMore", "Load More Verses", "تحميل المزيد من الآيات"),
    (
        "quran.noResults",
        "No Surahs found matching your search.",
        "لم يتم العثور على سور مطابقة لبحثك.",
    ),
    (
        "quran.fetchError",
        "Failed to load Surahs. Please try again.",
        "تعذر تحميل السور. حاول مرة أخرى.",
    ),
    (
        "quran.bismillah",
        "In the name of Allah, the Most Gracious, the Most Merciful",
        "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
    ),
    ("category.all", "All", "الكل"),
    ("category.iman", "Iman", "الإيمان"),
    ("category.salah", "Salah", "الصلاة"),
    ("category.akhlaq", "Character", "الأخلاق"),
    ("category.dua", "Dua", "الدعاء"),
    ("category.quran", "Quran", "القرآن"),
    ("category.general", "General", "عام"),
    ("category.charity", "Charity", "الصدقة"),
    ("category.knowledge", "Knowledge", "العلم"),
    ("category.patience", "Patience", "الصبر"),
    ("category.morning", "Morning", "الصباح"),
    ("category.evening", "Evening", "المساء"),
    ("category.after salah", "After Salah", "بعد الصلاة"),
    ("category.sleep", "Sleep", "النوم"),
    ("category.waking up", "Waking Up", "الاستيقاظ"),
    ("category.travel", "Travel", "السفر"),
    ("hadith.title", "Prophetic Hadiths", "أحاديث نبوية"),
    ("hadith.daily", "Hadith of the Day", "حديث اليوم"),
    ("hadith.source", "Source", "المصدر"),
    ("hadith.grade", "Grade", "الدرجة"),
    ("adhkar.title", "Daily Adhkar", "أذكار المسلم"),
    ("adhkar.count", "Count", "العدد"),
    ("adhkar.reset", "Tap to reset", "اضغط للإعادة"),
    ("adhkar.tap", "Tap to count", "اضغط للعد"),
    ("monthly.title", "Monthly Planner", "التقويم الشهري"),
    ("monthly.current", "Current Month", "الشهر الحالي"),
    ("monthly.calendar", "Calendar", "التقويم"),
    ("monthly.important", "Important Dates", "تواريخ هامة"),
    ("monthly.goals", "Monthly Goals", "أهداف الشهر"),
    ("monthly.addGoal", "Add New Goal", "إضافة هدف"),
    ("monthly.addDate", "Add Date", "إضافة تاريخ"),
    ("monthly.cancel", "Cancel", "إلغاء"),
    ("monthly.add", "Add", "إضافة"),
    ("calendar.sun", "Sun", "أحد"),
    ("calendar.mon", "Mon", "اثنين"),
    ("calendar.tue", "Tue", "ثلاثاء"),
    ("calendar.wed", "Wed", "أربعاء"),
    ("calendar.thu", "Thu", "خميس"),
    ("calendar.fri", "Fri", "جمعة"),
    ("calendar.sat", "Sat", "سبت"),
];
