//! Voice keyword-priority table: synonym expansion over the voice section.

/// A trigger keyword and the voice key whose response it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub keyword: String,
    pub target: String,
}

/// Ordered list of keyword rules. Earlier rules take precedence when several
/// keywords occur in the same input, regardless of where they occur in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordPriorityTable {
    rules: Vec<KeywordRule>,
}

impl KeywordPriorityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, T>(pairs: impl IntoIterator<Item = (K, T)>) -> Self
    where
        K: Into<String>,
        T: Into<String>,
    {
        Self {
            rules: pairs
                .into_iter()
                .map(|(keyword, target)| KeywordRule {
                    keyword: keyword.into(),
                    target: target.into(),
                })
                .collect(),
        }
    }

    /// First rule, in table order, whose keyword occurs in `input`.
    pub fn first_match(&self, input: &str) -> Option<&KeywordRule> {
        self.rules.iter().find(|r| input.contains(r.keyword.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_beats_input_position() {
        let table = KeywordPriorityTable::from_pairs([("irrigation", "water"), ("seed", "planting")]);
        let hit = table.first_match("seed_tray_irrigation.wav").unwrap();
        assert_eq!(hit.keyword, "irrigation");
        assert_eq!(hit.target, "water");
    }

    #[test]
    fn no_match_on_unrelated_input() {
        let table = KeywordPriorityTable::from_pairs([("bug", "pest")]);
        assert!(table.first_match("weather_report.mp3").is_none());
    }
}
