//! Canned-response knowledge base.
//!
//! ## Layout
//!
//! | Section | Key                      | Response                         |
//! |---------|--------------------------|----------------------------------|
//! | text    | canonical question phrase | full-sentence advice            |
//! | image   | short tag (`leaf_disease`) | diagnostic advice              |
//! | voice   | short tag (`pest`)        | advice prefixed with an audio glyph |
//!
//! The voice section additionally carries a [`KeywordPriorityTable`] of synonyms
//! (`bug` → `pest`). Every table target must name a voice key; this is checked
//! once at construction so a stale synonym cannot silently fall through.
//!
//! A [`KnowledgeBase`] is built once at startup and never mutated afterwards.

mod farming;
mod keywords;
mod section;

pub use keywords::{KeywordPriorityTable, KeywordRule};
pub use section::{Entry, KnowledgeSection};

use crate::shared::Category;

/// Construction failures for a [`KnowledgeBase`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnowledgeError {
    #[error("duplicate key in knowledge section: {0}")]
    DuplicateKey(String),
    #[error("keyword `{keyword}` targets unknown voice key `{target}`")]
    UnknownKeywordTarget { keyword: String, target: String },
    #[error("default response for {0} is empty")]
    EmptyDefault(Category),
    #[error("default responses for {0} and {1} are identical")]
    DuplicateDefault(Category, Category),
}

/// Fallback answer per category when nothing in its section matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultResponses {
    pub text: String,
    pub image: String,
    pub voice: String,
}

impl DefaultResponses {
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Text => &self.text,
            Category::Image => &self.image,
            Category::Voice => &self.voice,
        }
    }

    fn validate(&self) -> Result<(), KnowledgeError> {
        for category in Category::all() {
            if self.get(category).trim().is_empty() {
                return Err(KnowledgeError::EmptyDefault(category));
            }
        }
        let all = Category::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                if self.get(*a) == self.get(*b) {
                    return Err(KnowledgeError::DuplicateDefault(*a, *b));
                }
            }
        }
        Ok(())
    }
}

/// Immutable, validated set of sections, voice keywords and defaults.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    text: KnowledgeSection,
    image: KnowledgeSection,
    voice: KnowledgeSection,
    voice_keywords: KeywordPriorityTable,
    defaults: DefaultResponses,
}

impl KnowledgeBase {
    /// Assembles a knowledge base, checking keyword targets and defaults.
    pub fn new(
        text: KnowledgeSection,
        image: KnowledgeSection,
        voice: KnowledgeSection,
        voice_keywords: KeywordPriorityTable,
        defaults: DefaultResponses,
    ) -> Result<Self, KnowledgeError> {
        if let Some(rule) = voice_keywords
            .iter()
            .find(|r| !voice.contains_key(&r.target))
        {
            return Err(KnowledgeError::UnknownKeywordTarget {
                keyword: rule.keyword.clone(),
                target: rule.target.clone(),
            });
        }
        defaults.validate()?;
        Ok(Self {
            text,
            image,
            voice,
            voice_keywords,
            defaults,
        })
    }

    /// The built-in farming assistant data.
    pub fn farming() -> Result<Self, KnowledgeError> {
        Self::new(
            KnowledgeSection::from_pairs(farming::TEXT_ENTRIES.iter().copied())?,
            KnowledgeSection::from_pairs(farming::IMAGE_ENTRIES.iter().copied())?,
            KnowledgeSection::from_pairs(farming::VOICE_ENTRIES.iter().copied())?,
            KeywordPriorityTable::from_pairs(farming::VOICE_KEYWORDS.iter().copied()),
            DefaultResponses {
                text: farming::DEFAULT_TEXT.to_string(),
                image: farming::DEFAULT_IMAGE.to_string(),
                voice: farming::DEFAULT_VOICE.to_string(),
            },
        )
    }

    /// Section searched for `category`.
    pub fn section(&self, category: Category) -> &KnowledgeSection {
        match category {
            Category::Text => &self.text,
            Category::Image => &self.image,
            Category::Voice => &self.voice,
        }
    }

    pub fn voice_keywords(&self) -> &KeywordPriorityTable {
        &self.voice_keywords
    }

    pub fn default_response(&self, category: Category) -> &str {
        self.defaults.get(category)
    }

    /// Keys of a section in order, for client-side suggestion lists.
    pub fn sample_keys(&self, category: Category) -> Vec<String> {
        self.section(category).keys().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> DefaultResponses {
        DefaultResponses {
            text: "t".into(),
            image: "i".into(),
            voice: "v".into(),
        }
    }

    #[test]
    fn farming_data_loads_in_order() {
        let kb = KnowledgeBase::farming().unwrap();
        assert_eq!(kb.section(Category::Text).len(), 10);
        assert_eq!(kb.section(Category::Image).len(), 8);
        assert_eq!(kb.section(Category::Voice).len(), 10);
        assert_eq!(kb.voice_keywords().len(), 18);
        assert_eq!(
            kb.sample_keys(Category::Image).first().map(String::as_str),
            Some("leaf_disease")
        );
        assert!(kb
            .section(Category::Voice)
            .iter()
            .all(|e| e.response.starts_with('🎧')));
    }

    #[test]
    fn rejects_keyword_with_unknown_target() {
        let voice = KnowledgeSection::from_pairs([("pest", "p")]).unwrap();
        let keywords = KeywordPriorityTable::from_pairs([("bug", "pest"), ("weed", "weeding")]);
        let err = KnowledgeBase::new(
            KnowledgeSection::new(),
            KnowledgeSection::new(),
            voice,
            keywords,
            defaults(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            KnowledgeError::UnknownKeywordTarget {
                keyword: "weed".into(),
                target: "weeding".into(),
            }
        );
    }

    #[test]
    fn rejects_empty_or_shared_defaults() {
        let mut empty = defaults();
        empty.image = "  ".into();
        let err = KnowledgeBase::new(
            KnowledgeSection::new(),
            KnowledgeSection::new(),
            KnowledgeSection::new(),
            KeywordPriorityTable::new(),
            empty,
        )
        .unwrap_err();
        assert_eq!(err, KnowledgeError::EmptyDefault(Category::Image));

        let mut shared = defaults();
        shared.voice = "t".into();
        let err = KnowledgeBase::new(
            KnowledgeSection::new(),
            KnowledgeSection::new(),
            KnowledgeSection::new(),
            KeywordPriorityTable::new(),
            shared,
        )
        .unwrap_err();
        assert_eq!(
            err,
            KnowledgeError::DuplicateDefault(Category::Text, Category::Voice)
        );
    }
}
