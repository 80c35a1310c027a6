//! Weather condition → news mood → keyword tables.
//!
//! Everything here is static configuration data; the lookups are total and
//! allocate nothing.

use serde::{Deserialize, Serialize};

use crate::thresholds::WeatherCondition;

/// Emotional news category derived from the weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsFilterType {
    Depressing,
    Fear,
    Winning,
}

impl std::fmt::Display for NewsFilterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NewsFilterType::Depressing => write!(f, "depressing"),
            NewsFilterType::Fear => write!(f, "fear"),
            NewsFilterType::Winning => write!(f, "winning"),
        }
    }
}

/// The two keyword sets attached to a mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodKeywords {
    /// Emotional terms used to judge relevance after fetching.
    pub generic: &'static [&'static str],
    /// Region-qualified phrases used to bias the search query itself.
    pub localized: &'static [&'static str],
}

struct MoodEntry {
    condition: WeatherCondition,
    mood: NewsFilterType,
}

struct KeywordEntry {
    mood: NewsFilterType,
    keywords: MoodKeywords,
    broad_query: &'static str,
}

static CONDITION_TO_MOOD: [MoodEntry; 3] = [
    MoodEntry {
        condition: WeatherCondition::Cold,
        mood: NewsFilterType::Depressing,
    },
    MoodEntry {
        condition: WeatherCondition::Hot,
        mood: NewsFilterType::Fear,
    },
    MoodEntry {
        condition: WeatherCondition::Cool,
        mood: NewsFilterType::Winning,
    },
];

static MOOD_KEYWORDS: [KeywordEntry; 3] = [
    KeywordEntry {
        mood: NewsFilterType::Depressing,
        keywords: MoodKeywords {
            generic: &[
                "tragedy",
                "death",
                "disaster",
                "crisis",
                "loss",
                "defeat",
                "failure",
                "recession",
                "unemployment",
                "sad",
                "mourning",
            ],
            localized: &[
                "India tragedy",
                "India crisis",
                "India disaster",
                "India unemployment",
                "India recession",
            ],
        },
        broad_query: "India news crisis OR tragedy OR loss",
    },
    KeywordEntry {
        mood: NewsFilterType::Fear,
        keywords: MoodKeywords {
            generic: &[
                "terror",
                "attack",
                "threat",
                "danger",
                "violence",
                "crime",
                "war",
                "conflict",
                "emergency",
                "fear",
                "scary",
            ],
            localized: &[
                "India security",
                "India violence",
                "India crime",
                "India terror",
                "India conflict",
            ],
        },
        broad_query: "India news security OR crime OR danger",
    },
    KeywordEntry {
        mood: NewsFilterType::Winning,
        keywords: MoodKeywords {
            generic: &[
                "victory",
                "success",
                "achievement",
                "celebration",
                "winner",
                "breakthrough",
                "progress",
                "joy",
                "happiness",
                "champion",
                "triumph",
            ],
            localized: &[
                "India success",
                "India victory",
                "India achievement",
                "India celebration",
                "India champion",
                "India progress",
            ],
        },
        broad_query: "India news success OR victory OR achievement",
    },
];

fn keyword_entry(mood: NewsFilterType) -> &'static KeywordEntry {
    MOOD_KEYWORDS
        .iter()
        .find(|entry| entry.mood == mood)
        .unwrap_or_else(|| unreachable!("MOOD_KEYWORDS has no row for {mood}"))
}

/// Mood shown for a weather condition: cold → depressing, hot → fear,
/// cool → winning.
#[must_use]
pub fn mood_for(condition: WeatherCondition) -> NewsFilterType {
    CONDITION_TO_MOOD
        .iter()
        .find(|entry| entry.condition == condition)
        .map(|entry| entry.mood)
        .unwrap_or_else(|| unreachable!("CONDITION_TO_MOOD has no row for {condition}"))
}

#[must_use]
pub fn keywords_for(mood: NewsFilterType) -> MoodKeywords {
    keyword_entry(mood).keywords
}

/// Single composite query used when keyword searches turn up nothing.
#[must_use]
pub fn broad_query_for(mood: NewsFilterType) -> &'static str {
    keyword_entry(mood).broad_query
}

impl MoodKeywords {
    /// Terms sent to the search endpoint: every localized phrase followed by
    /// the first two generic keywords.
    #[must_use]
    pub fn query_terms(&self) -> Vec<&'static str> {
        self.localized
            .iter()
            .chain(self.generic.iter().take(2))
            .copied()
            .collect()
    }

    /// Lowercased terms an article must mention to count as on-mood: every
    /// generic keyword plus the trailing word of each localized phrase.
    #[must_use]
    pub fn relevance_terms(&self) -> Vec<String> {
        self.generic
            .iter()
            .copied()
            .chain(
                self.localized
                    .iter()
                    .filter_map(|phrase| phrase.split_whitespace().last()),
            )
            .map(str::to_lowercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_to_mood_bijection() {
        assert_eq!(mood_for(WeatherCondition::Cold), NewsFilterType::Depressing);
        assert_eq!(mood_for(WeatherCondition::Hot), NewsFilterType::Fear);
        assert_eq!(mood_for(WeatherCondition::Cool), NewsFilterType::Winning);
    }

    #[test]
    fn lookups_are_deterministic() {
        for mood in [
            NewsFilterType::Depressing,
            NewsFilterType::Fear,
            NewsFilterType::Winning,
        ] {
            assert_eq!(keywords_for(mood), keywords_for(mood));
            assert_eq!(broad_query_for(mood), broad_query_for(mood));
        }
    }

    #[test]
    fn fear_query_terms_are_localized_then_two_generic() {
        let terms = keywords_for(NewsFilterType::Fear).query_terms();
        assert_eq!(
            terms,
            vec![
                "India security",
                "India violence",
                "India crime",
                "India terror",
                "India conflict",
                "terror",
                "attack",
            ]
        );
    }

    #[test]
    fn relevance_terms_use_trailing_word_of_localized_phrases() {
        let terms = keywords_for(NewsFilterType::Depressing).relevance_terms();
        assert!(terms.contains(&"crisis".to_string()));
        assert!(terms.contains(&"mourning".to_string()));
        assert!(!terms.iter().any(|t| t.contains("india")));
        assert_eq!(terms.len(), 11 + 5);
    }

    #[test]
    fn broad_queries() {
        assert_eq!(
            broad_query_for(NewsFilterType::Fear),
            "India news security OR crime OR danger"
        );
        assert_eq!(
            broad_query_for(NewsFilterType::Depressing),
            "India news crisis OR tragedy OR loss"
        );
        assert_eq!(
            broad_query_for(NewsFilterType::Winning),
            "India news success OR victory OR achievement"
        );
    }

    #[test]
    fn every_variant_has_exactly_one_row() {
        for condition in [
            WeatherCondition::Cold,
            WeatherCondition::Cool,
            WeatherCondition::Hot,
        ] {
            let rows = CONDITION_TO_MOOD
                .iter()
                .filter(|e| e.condition == condition)
                .count();
            assert_eq!(rows, 1, "condition {condition}");
        }
        for mood in [
            NewsFilterType::Depressing,
            NewsFilterType::Fear,
            NewsFilterType::Winning,
        ] {
            let rows = MOOD_KEYWORDS.iter().filter(|e| e.mood == mood).count();
            assert_eq!(rows, 1, "mood {mood}");
            assert_eq!(keyword_entry(mood).mood, mood);
        }
    }

    #[test]
    fn winning_has_six_localized_phrases() {
        assert_eq!(keywords_for(NewsFilterType::Winning).localized.len(), 6);
    }
}
