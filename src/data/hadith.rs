//! Curated hadith collection.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HadithCategory {
    Iman,
    Salah,
    Akhlaq,
    Dua,
    Quran,
    Charity,
    Knowledge,
    Patience,
}

impl HadithCategory {
    pub fn key(self) -> &'static str {
        match self {
            HadithCategory::Iman => "category.iman",
            HadithCategory::Salah => "category.salah",
            HadithCategory::Akhlaq => "category.akhlaq",
            HadithCategory::Dua => "category.dua",
            HadithCategory::Quran => "category.quran",
            HadithCategory::Charity => "category.charity",
            HadithCategory::Knowledge => "category.knowledge",
            HadithCategory::Patience => "category.patience",
        }
    }
}

pub const HADITH_CATEGORIES: [Option<HadithCategory>; 9] = [
    None,
    Some(HadithCategory::Iman),
    Some(HadithCategory::Salah),
    Some(HadithCategory::Akhlaq),
    Some(HadithCategory::Dua),
    Some(HadithCategory::Quran),
    Some(HadithCategory::Charity),
    Some(HadithCategory::Knowledge),
    Some(HadithCategory::Patience),
];

#[derive(Debug, Clone, Copy)]
pub struct Hadith {
    pub id: u32,
    pub arabic: &'static str,
    pub source: &'static str,
    pub category: HadithCategory,
    pub grade: &'static str,
}

pub const HADITHS: &[Hadith] = &[
    Hadith {
        id: 1,
        arabic: "إِنَّمَا الأَعْمَالُ بِالنِّيَّاتِ، وَإِنَّمَا لِكُلِّ امْرِئٍ مَا نَوَى",
        source: "Sahih al-Bukhari 1",
        category: HadithCategory::Iman,
        grade: "Sahih",
    },
    Hadith {
        id: 3,
        arabic: "لاَ يُؤْمِنُ أَحَدُكُمْ حَتَّى يُحِبَّ لأَخِيهِ مَا يُحِبُّ لِنَفْسِهِ",
        source: "Sahih al-Bukhari 13",
        category: HadithCategory::Iman,
        grade: "Sahih",
    },
    Hadith {
        id: 8,
        arabic: "الطُّهُورُ شَطْرُ الإِيمَانِ",
        source: "Sahih Muslim 223",
        category: HadithCategory::Iman,
        grade: "Sahih",
    },
    Hadith {
        id: 11,
        arabic: "ثَلاثٌ مَنْ كُنَّ فِيهِ وَجَدَ حَلاوَةَ الإِيمَانِ: أَنْ يَكُونَ اللَّهُ وَرَسُولُهُ أَحَبَّ إِلَيْهِ مِمَّا سِوَاهُمَا",
        source: "Sahih al-Bukhari 16",
        category: HadithCategory::Iman,
        grade: "Sahih",
    },
    Hadith {
        id: 2,
        arabic: "مَنْ كَانَ يُؤْمِنُ بِاللَّهِ وَالْيَوْمِ الآخِرِ فَلْيَقُلْ خَيْرًا أَوْ لِيَصْمُتْ",
        source: "Sahih al-Bukhari 6018",
        category: HadithCategory::Akhlaq,
        grade: "Sahih",
    },
    Hadith {
        id: 7,
        arabic: "تَبَسُّمُكَ فِي وَجْهِ أَخِيكَ لَكَ صَدَقَةٌ",
        source: "Jami` at-Tirmidhi 1956",
        category: HadithCategory::Akhlaq,
        grade: "Sahih",
    },
    Hadith {
        id: 12,
        arabic: "إِنَّمَا بُعِثْتُ لأُتَمِّمَ مَكَارِمَ الأَخْلاقِ",
        source: "Al-Bayhaqi 21301",
        category: HadithCategory::Akhlaq,
        grade: "Sahih",
    },
    Hadith {
        id: 13,
        arabic: "لَيْسَ الْمُؤْمِنُ بِالطَّعَّانِ وَلاَ اللَّعَّانِ وَلاَ الْفَاحِشِ وَلاَ الْبَذِيءِ",
        source: "Jami` at-Tirmidhi 1977",
        category: HadithCategory::Akhlaq,
        grade: "Sahih",
    },
    Hadith {
        id: 4,
        arabic: "صَلاَةُ الْجَمَاعَةِ تَفْضُلُ صَلاَةَ الْفَذِّ بِسَبْعٍ وَعِشْرِينَ دَرَجَةً",
        source: "Sahih Muslim 650",
        category: HadithCategory::Salah,
        grade: "Sahih",
    },
    Hadith {
        id: 9,
        arabic: "مَنْ صَلَّى الْبَرْدَيْنِ دَخَلَ الْجَنَّةَ",
        source: "Sahih al-Bukhari 574",
        category: HadithCategory::Salah,
        grade: "Sahih",
    },
    Hadith {
        id: 14,
        arabic: "أَوَّلُ مَا يُحَاسَبُ بِهِ الْعَبْدُ يَوْمَ الْقِيَامَةِ الصَّلاَةُ",
        source: "Sunan an-Nasa'i 465",
        category: HadithCategory::Salah,
        grade: "Sahih",
    },
    Hadith {
        id: 5,
        arabic: "خَيْرُكُمْ مَنْ تَعَلَّمَ الْقُرْآنَ وَعَلَّمَهُ",
        source: "Sahih al-Bukhari 5027",
        category: HadithCategory::Quran,
        grade: "Sahih",
    },
    Hadith {
        id: 15,
        arabic: "الْمَاهِرُ بِالْقُرْآنِ مَعَ السَّفَرَةِ الْكِرَامِ الْبَرَرَةِ",
        source: "Sahih Muslim 798",
        category: HadithCategory::Quran,
        grade: "Sahih",
    },
    Hadith {
        id: 6,
        arabic: "الدُّعَاءُ هُوَ الْعِبَادَةُ",
        source: "Sunan Abi Dawud 1479",
        category: HadithCategory::Dua,
        grade: "Sahih",
    },
    Hadith {
        id: 16,
        arabic: "يَسْتَجَابُ لأَحَدِكُمْ مَا لَمْ يَعْجَلْ",
        source: "Sahih al-Bukhari 6340",
        category: HadithCategory::Dua,
        grade: "Sahih",
    },
    Hadith {
        id: 17,
        arabic: "مَا نَقَصَتْ صَدَقَةٌ مِنْ مَالٍ",
        source: "Sahih Muslim 2588",
        category: HadithCategory::Charity,
        grade: "Sahih",
    },
    Hadith {
        id: 18,
        arabic: "اتَّقُوا النَّارَ وَلَوْ بِشِقِّ تَمْرَةٍ",
        source: "Sahih al-Bukhari 1417",
        category: HadithCategory::Charity,
        grade: "Sahih",
    },
    Hadith {
        id: 19,
        arabic: "مَنْ سَلَكَ طَرِيقًا يَلْتَمِسُ فِيهِ عِلْمًا سَهَّلَ اللَّهُ لَهُ بِهِ طَرِيقًا إِلَى الْجَنَّةِ",
        source: "Sahih Muslim 2699",
        category: HadithCategory::Knowledge,
        grade: "Sahih",
    },
    Hadith {
        id: 20,
        arabic: "مَنْ يُرِدِ اللَّهُ بِهِ خَيْرًا يُفَقِّهْهُ فِي الدِّينِ",
        source: "Sahih al-Bukhari 71",
        category: HadithCategory::Knowledge,
        grade: "Sahih",
    },
    Hadith {
        id: 21,
        arabic: "وَمَنْ يَتَصَبَّرْ يُصَبِّرْهُ اللَّهُ، وَمَا أُعْطِيَ أَحَدٌ عَطَاءً خَيْرًا وَأَوْسَعَ مِنَ الصَّبْرِ",
        source: "Sahih al-Bukhari 1469",
        category: HadithCategory::Patience,
        grade: "Sahih",
    },
    Hadith {
        id: 22,
        arabic: "عَجَبًا لأَمْرِ الْمُؤْمِنِ إِنَّ أَمْرَهُ كُلَّهُ خَيْرٌ",
        source: "Sahih Muslim 2999",
        category: HadithCategory::Patience,
        grade: "Sahih",
    },
];

/// Deterministic hadith-of-the-day pick.
pub fn daily_index(day_of_year: u32) -> usize {
    day_of_year as usize % HADITHS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_pick_is_in_range() {
        for day in 0..730 {
            assert!(daily_index(day) < HADITHS.len());
        }
    }

    #[test]
    fn every_category_is_populated() {
        for category in HADITH_CATEGORIES.iter().flatten() {
            assert!(HADITHS.iter().any(|h| h.category == *category));
        }
    }
}
