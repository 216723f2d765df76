//! Curated remembrance collection and the per-card tap counter.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DhikrCategory {
    Morning,
    Evening,
    AfterSalah,
    Sleep,
    WakingUp,
    Travel,
    General,
}

impl DhikrCategory {
    /// Catalog key for the localized category label.
    pub fn key(self) -> &'static str {
        match self {
            DhikrCategory::Morning => "category.morning",
            DhikrCategory::Evening => "category.evening",
            DhikrCategory::AfterSalah => "category.after salah",
            DhikrCategory::Sleep => "category.sleep",
            DhikrCategory::WakingUp => "category.waking up",
            DhikrCategory::Travel => "category.travel",
            DhikrCategory::General => "category.general",
        }
    }
}

/// Category filter row: `None` renders as "All".
pub const ADHKAR_CATEGORIES: [Option<DhikrCategory>; 8] = [
    None,
    Some(DhikrCategory::Morning),
    Some(DhikrCategory::Evening),
    Some(DhikrCategory::AfterSalah),
    Some(DhikrCategory::Sleep),
    Some(DhikrCategory::WakingUp),
    Some(DhikrCategory::Travel),
    Some(DhikrCategory::General),
];

#[derive(Debug, Clone, Copy)]
pub struct Dhikr {
    pub id: u32,
    pub arabic: &'static str,
    pub count: u32,
    pub category: DhikrCategory,
    pub reference: Option<&'static str>,
    pub reward: Option<&'static str>,
}

/// Tap counter with deliberate wrap-to-zero overflow: tapping past the
/// target resets instead of saturating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapCounter {
    count: u32,
    target: u32,
}

impl TapCounter {
    pub fn new(target: u32) -> Self {
        Self {
            count: 0,
            target: target.max(1),
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_completed(&self) -> bool {
        self.count >= self.target
    }

    pub fn tap(&mut self) {
        if self.count < self.target {
            self.count += 1;
        } else {
            self.count = 0;
        }
    }

    pub fn progress(&self) -> f32 {
        (self.count as f32 / self.target as f32).min(1.0)
    }
}

pub const ADHKAR: &[Dhikr] = &[
    Dhikr {
        id: 11,
        arabic: "الْحَمْدُ لِلَّهِ الَّذِي أَحْيَانَا بَعْدَ مَا أَمَاتَنَا وَإِلَيْهِ النُّشُورُ",
        count: 1,
        category: DhikrCategory::WakingUp,
        reference: Some("Bukhari 6312"),
        reward: None,
    },
    Dhikr {
        id: 1,
        arabic: "أَصْبَحْنَا وَأَصْبَحَ الْمُلْكُ لِلَّهِ، وَالْحَمْدُ لِلَّهِ لاَ إِلَهَ إِلاَّ اللَّهُ وَحْدَهُ لاَ شَرِيكَ لَهُ، لَهُ الْمُلْكُ وَلَهُ الْحَمْدُ وَهُوَ عَلَى كُلِّ شَيْءٍ قَدِيرٌ",
        count: 1,
        category: DhikrCategory::Morning,
        reference: Some("Muslim 4:2088"),
        reward: None,
    },
    Dhikr {
        id: 2,
        arabic: "اللَّهُمَّ بِكَ أَصْبَحْنَا وَبِكَ أَمْسَيْنَا وَبِكَ نَحْيَا وَبِكَ نَمُوتُ وَإِلَيْكَ النُّشُورُ",
        count: 1,
        category: DhikrCategory::Morning,
        reference: Some("Tirmidhi 3:142"),
        reward: None,
    },
    Dhikr {
        id: 3,
        arabic: "سُبْحَانَ اللهِ وَبِحَمْدِهِ",
        count: 100,
        category: DhikrCategory::Morning,
        reference: None,
        reward: Some("Forgiven his sins even if they were like the foam of the sea."),
    },
    Dhikr {
        id: 12,
        arabic: "يَا حَيُّ يَا قَيُّومُ بِرَحْمَتِكَ أَسْتَغِيثُ أَصْلِحْ لِي شَأْنِي كُلَّهُ وَلَا تَكِلْنِي إِلَى نَفْسِي طَرْفَةَ عَيْنٍ",
        count: 1,
        category: DhikrCategory::Morning,
        reference: Some("Hisn al-Muslim"),
        reward: None,
    },
    Dhikr {
        id: 4,
        arabic: "أَمْسَيْنَا وَأَمْسَى الْمُلْكُ لِلَّهِ، وَالْحَمْدُ لِلَّهِ لاَ إِلَهَ إِلاَّ اللَّهُ وَحْدَهُ لاَ شَرِيكَ لَهُ",
        count: 1,
        category: DhikrCategory::Evening,
        reference: Some("Muslim 4:2088"),
        reward: None,
    },
    Dhikr {
        id: 5,
        arabic: "اللَّهُمَّ بِكَ أَمْسَيْنَا وَبِكَ أَصْبَحْنَا وَبِكَ نَحْيَا وَبِكَ نَمُوتُ وَإِلَيْكَ الْمَصِيرُ",
        count: 1,
        category: DhikrCategory::Evening,
        reference: Some("Tirmidhi 3:142"),
        reward: None,
    },
    Dhikr {
        id: 13,
        arabic: "أَعُوذُ بِكَلِمَاتِ اللَّهِ التَّامَّاتِ مِنْ شَرِّ مَا خَلَقَ",
        count: 3,
        category: DhikrCategory::Evening,
        reference: Some("Muslim 4:2081"),
        reward: None,
    },
    Dhikr {
        id: 6,
        arabic: "أَسْتَغْفِرُ اللَّهَ",
        count: 3,
        category: DhikrCategory::AfterSalah,
        reference: None,
        reward: None,
    },
    Dhikr {
        id: 7,
        arabic: "اللَّهُمَّ أَنْتَ السَّلاَمُ وَمِنْكَ السَّلاَمُ تَبَارَكْتَ يَا ذَا الْجَلاَلِ وَالإِكْرَامِ",
        count: 1,
        category: DhikrCategory::AfterSalah,
        reference: None,
        reward: None,
    },
    Dhikr {
        id: 8,
        arabic: "سُبْحَانَ اللَّهِ",
        count: 33,
        category: DhikrCategory::AfterSalah,
        reference: None,
        reward: None,
    },
    Dhikr {
        id: 9,
        arabic: "الْحَمْدُ لِلَّهِ",
        count: 33,
        category: DhikrCategory::AfterSalah,
        reference: None,
        reward: None,
    },
    Dhikr {
        id: 10,
        arabic: "اللَّهُ أَكْبَرُ",
        count: 33,
        category: DhikrCategory::AfterSalah,
        reference: None,
        reward: None,
    },
    Dhikr {
        id: 14,
        arabic: "لاَ إِلَهَ إِلاَّ اللَّهُ وَحْدَهُ لاَ شَرِيكَ لَهُ، لَهُ الْمُلْكُ وَلَهُ الْحَمْدُ وَهُوَ عَلَى كُلِّ شَيْءٍ قَدِيرٌ",
        count: 1,
        category: DhikrCategory::AfterSalah,
        reference: None,
        reward: None,
    },
    Dhikr {
        id: 15,
        arabic: "بِاسْمِكَ اللَّهُمَّ أَمُوتُ وَأَحْيَا",
        count: 1,
        category: DhikrCategory::Sleep,
        reference: Some("Bukhari 6312"),
        reward: None,
    },
    Dhikr {
        id: 16,
        arabic: "الْحَمْدُ لِلَّهِ الَّذِي أَطْعَمَنَا وَسَقَانَا وَكَفَانَا وَآوَانَا فَكَمْ مِمَّنْ لاَ كَافِيَ لَهُ وَلاَ مُؤْوِيَ",
        count: 1,
        category: DhikrCategory::Sleep,
        reference: Some("Muslim 2715"),
        reward: None,
    },
    Dhikr {
        id: 17,
        arabic: "سُبْحَانَ اللَّهِ (33)، الْحَمْدُ لِلَّهِ (33)، اللَّهُ أَكْبَرُ (34)",
        count: 100,
        category: DhikrCategory::Sleep,
        reference: Some("Bukhari 3113"),
        reward: None,
    },
    Dhikr {
        id: 18,
        arabic: "سُبْحَانَ الَّذِي سَخَّرَ لَنَا هَذَا وَمَا كُنَّا لَهُ مُقْرِنِينَ وَإِنَّا إِلَى رَبِّنَا لَمُنْقَلِبُونَ",
        count: 1,
        category: DhikrCategory::Travel,
        reference: Some("Quran 43:13-14"),
        reward: None,
    },
    Dhikr {
        id: 19,
        arabic: "لاَ حَوْلَ وَلاَ قُوَّةَ إِلاَّ بِاللَّهِ",
        count: 1,
        category: DhikrCategory::General,
        reference: None,
        reward: Some("A treasure from the treasures of Paradise"),
    },
    Dhikr {
        id: 20,
        arabic: "سُبْحَانَ اللَّهِ وَبِحَمْدِهِ، سُبْحَانَ اللَّهِ الْعَظِيمِ",
        count: 1,
        category: DhikrCategory::General,
        reference: None,
        reward: Some("Two words light on the tongue, heavy in the scale, beloved to the Most Merciful"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_wraps_past_target() {
        let mut counter = TapCounter::new(3);
        assert!(!counter.is_completed());
        counter.tap();
        counter.tap();
        counter.tap();
        assert!(counter.is_completed());
        assert_eq!(counter.count(), 3);
        // A fourth tap resets rather than saturating.
        counter.tap();
        assert_eq!(counter.count(), 0);
        assert!(!counter.is_completed());
    }

    #[test]
    fn progress_is_clamped() {
        let mut counter = TapCounter::new(4);
        assert_eq!(counter.progress(), 0.0);
        counter.tap();
        assert_eq!(counter.progress(), 0.25);
        for _ in 0..3 {
            counter.tap();
        }
        assert_eq!(counter.progress(), 1.0);
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in ADHKAR.iter().enumerate() {
            assert!(a.count >= 1);
            for b in &ADHKAR[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
