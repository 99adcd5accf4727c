use serde::{Deserialize, Serialize};

/// Состояние панели поиска в заголовке списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchVisibility {
    /// Static header row, search box collapsed
    #[default]
    Hidden,
    /// Inline search box laid out in flex mode
    Shown,
}

impl SearchVisibility {
    pub fn from_shown(shown: bool) -> Self {
        if shown {
            SearchVisibility::Shown
        } else {
            SearchVisibility::Hidden
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, SearchVisibility::Shown)
    }

    /// Код состояния (для логов и data-атрибутов)
    pub fn code(&self) -> &'static str {
        match self {
            SearchVisibility::Hidden => "hidden",
            SearchVisibility::Shown => "shown",
        }
    }
}

impl std::fmt::Display for SearchVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shown() {
        assert_eq!(SearchVisibility::from_shown(true), SearchVisibility::Shown);
        assert_eq!(SearchVisibility::from_shown(false), SearchVisibility::Hidden);
        assert!(!SearchVisibility::default().is_shown());
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&SearchVisibility::Shown).unwrap();
        assert_eq!(json, "\"shown\"");
        let parsed: SearchVisibility = serde_json::from_str("\"hidden\"").unwrap();
        assert_eq!(parsed, SearchVisibility::Hidden);
    }
}
