use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseCategoryError;

/// Top-headline categories supported by the news provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    General,
    Business,
    Entertainment,
    Health,
    Science,
    Sports,
    Technology,
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 7] = [
        NewsCategory::General,
        NewsCategory::Business,
        NewsCategory::Entertainment,
        NewsCategory::Health,
        NewsCategory::Science,
        NewsCategory::Sports,
        NewsCategory::Technology,
    ];

    /// Wire name used in the `category` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NewsCategory::General => "general",
            NewsCategory::Business => "business",
            NewsCategory::Entertainment => "entertainment",
            NewsCategory::Health => "health",
            NewsCategory::Science => "science",
            NewsCategory::Sports => "sports",
            NewsCategory::Technology => "technology",
        }
    }

    /// Free-text phrase used when headlines for this category come back empty
    /// and the category has to be searched instead.
    #[must_use]
    pub fn search_phrase(self) -> &'static str {
        match self {
            NewsCategory::General => "India news",
            NewsCategory::Business => "India business economy",
            NewsCategory::Entertainment => "India entertainment bollywood",
            NewsCategory::Health => "India health medical",
            NewsCategory::Science => "India science technology research",
            NewsCategory::Sports => "India sports cricket",
            NewsCategory::Technology => "India technology startup tech",
        }
    }
}

impl std::fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NewsCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        NewsCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_name() {
        for category in NewsCategory::ALL {
            assert_eq!(category.as_str().parse::<NewsCategory>(), Ok(category));
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(" Sports ".parse::<NewsCategory>(), Ok(NewsCategory::Sports));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "weather".parse::<NewsCategory>().unwrap_err();
        assert_eq!(err.to_string(), "unknown news category: weather");
    }

    #[test]
    fn business_search_phrase() {
        assert_eq!(NewsCategory::Business.search_phrase(), "India business economy");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&NewsCategory::Technology).unwrap();
        assert_eq!(json, "\"technology\"");
    }
}
