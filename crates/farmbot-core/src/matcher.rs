//! Response matcher: picks a canned answer for a raw input and a category.
//!
//! Stages, in order:
//!
//! 1. exact key match (all categories);
//! 2. text: token-overlap scoring, first-seen candidate wins ties;
//! 3. image/voice: first key contained in the input; voice then falls back to
//!    the keyword-priority table;
//! 4. the category default.
//!
//! The matcher never fails and holds no mutable state; it is safe to call from
//! any number of request tasks at once.

use crate::knowledge::{KnowledgeBase, KnowledgeError, KnowledgeSection};
use crate::shared::Category;

/// Which stage produced a [`Match`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStage<'a> {
    Exact { key: &'a str },
    TokenOverlap { key: &'a str, score: usize },
    Containment { key: &'a str },
    Keyword { keyword: &'a str, key: &'a str },
    Default,
}

/// A selected response and how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    pub response: &'a str,
    pub stage: MatchStage<'a>,
}

/// Trim and lower-case. Applied to every input before any comparison.
/// A leading or trailing byte-order mark is trimmed like whitespace.
pub fn normalize(input: &str) -> String {
    input
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
}

/// Matches inputs against an immutable [`KnowledgeBase`].
#[derive(Debug, Clone)]
pub struct ResponseMatcher {
    knowledge: KnowledgeBase,
}

impl ResponseMatcher {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Matcher over the built-in farming data.
    pub fn farming() -> Result<Self, KnowledgeError> {
        KnowledgeBase::farming().map(Self::new)
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Best response for `input`; always non-empty.
    pub fn find_best_match(&self, input: &str, category: Category) -> &str {
        self.match_input(input, category).response
    }

    /// Like [`find_best_match`](Self::find_best_match) but also reports the stage.
    pub fn match_input(&self, input: &str, category: Category) -> Match<'_> {
        let input = normalize(input);
        let section = self.knowledge.section(category);

        if let Some(entry) = section.iter().find(|e| e.key == input) {
            return Match {
                response: &entry.response,
                stage: MatchStage::Exact { key: &entry.key },
            };
        }

        let found = match category {
            Category::Text => best_token_overlap(section, &input),
            Category::Image => first_contained(section, &input),
            Category::Voice => {
                first_contained(section, &input).or_else(|| self.voice_keyword(&input))
            }
        };

        let found = found.unwrap_or_else(|| Match {
            response: self.knowledge.default_response(category),
            stage: MatchStage::Default,
        });
        tracing::trace!(
            target: "farmbot::matcher",
            category = %category,
            stage = ?found.stage,
            "matched input"
        );
        found
    }

    fn voice_keyword(&self, input: &str) -> Option<Match<'_>> {
        let rule = self.knowledge.voice_keywords().first_match(input)?;
        // Targets are validated against the voice section at construction.
        let response = self
            .knowledge
            .section(Category::Voice)
            .get(&rule.target)?;
        Some(Match {
            response,
            stage: MatchStage::Keyword {
                keyword: &rule.keyword,
                key: &rule.target,
            },
        })
    }
}

/// Counts input words that overlap some key word in either direction.
/// Duplicate input words are counted each time they occur.
fn overlap_score(input_words: &[&str], key: &str) -> usize {
    let key_words: Vec<&str> = key.split_whitespace().collect();
    input_words
        .iter()
        .filter(|word| {
            key_words
                .iter()
                .any(|k| k.contains(**word) || word.contains(*k))
        })
        .count()
}

fn best_token_overlap<'a>(section: &'a KnowledgeSection, input: &str) -> Option<Match<'a>> {
    // An empty input is one empty word, which every key word contains.
    let input_words: Vec<&str> = if input.is_empty() {
        vec![""]
    } else {
        input.split_whitespace().collect()
    };
    let mut best: Option<Match<'a>> = None;
    let mut best_score = 0;
    for entry in section.iter() {
        let score = overlap_score(&input_words, &entry.key);
        // Strictly greater: an equal later score never displaces the earlier one.
        if score > best_score {
            best_score = score;
            best = Some(Match {
                response: &entry.response,
                stage: MatchStage::TokenOverlap {
                    key: &entry.key,
                    score,
                },
            });
        }
    }
    best
}

fn first_contained<'a>(section: &'a KnowledgeSection, input: &str) -> Option<Match<'a>> {
    section
        .iter()
        .find(|e| input.contains(e.key.as_str()))
        .map(|e| Match {
            response: &e.response,
            stage: MatchStage::Containment { key: &e.key },
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{DefaultResponses, KeywordPriorityTable};

    fn farming() -> ResponseMatcher {
        ResponseMatcher::farming().unwrap()
    }

    fn response(m: &ResponseMatcher, category: Category, key: &str) -> String {
        m.knowledge()
            .section(category)
            .get(key)
            .unwrap()
            .to_string()
    }

    fn synthetic(
        text: &[(&str, &str)],
        voice: &[(&str, &str)],
        keywords: &[(&str, &str)],
    ) -> ResponseMatcher {
        let kb = KnowledgeBase::new(
            KnowledgeSection::from_pairs(text.iter().copied()).unwrap(),
            KnowledgeSection::new(),
            KnowledgeSection::from_pairs(voice.iter().copied()).unwrap(),
            KeywordPriorityTable::from_pairs(keywords.iter().copied()),
            DefaultResponses {
                text: "no text match".into(),
                image: "no image match".into(),
                voice: "no voice match".into(),
            },
        )
        .unwrap();
        ResponseMatcher::new(kb)
    }

    #[test]
    fn every_key_matches_itself_exactly() {
        let m = farming();
        for category in Category::all() {
            for entry in m.knowledge().section(category).iter() {
                let found = m.match_input(&entry.key, category);
                assert_eq!(found.response, entry.response);
                assert_eq!(found.stage, MatchStage::Exact { key: &entry.key });
            }
        }
    }

    #[test]
    fn exact_match_beats_earlier_containment() {
        // Containment alone would pick the earlier "pest" key.
        let m = synthetic(&[], &[("pest", "P"), ("pest control", "PC")], &[]);
        assert_eq!(m.find_best_match("pest control", Category::Voice), "PC");
        assert_eq!(m.find_best_match("pest control tips", Category::Voice), "P");
    }

    #[test]
    fn normalization_is_idempotent() {
        let m = farming();
        let variants = [
            ("  How To Prevent PEST Attacks \n", Category::Text),
            ("\tMY_Garden_LEAF_Disease.JPG ", Category::Image),
            (" I Have BUGS On My Tomatoes ", Category::Voice),
            ("Random Words", Category::Text),
        ];
        for (raw, category) in variants {
            assert_eq!(
                m.find_best_match(raw, category),
                m.find_best_match(&normalize(raw), category)
            );
        }
    }

    #[test]
    fn defaults_are_non_empty_and_distinct() {
        let m = farming();
        let text = m.find_best_match("zzz", Category::Text);
        let image = m.find_best_match("zzz.png", Category::Image);
        let voice = m.find_best_match("zzz.mp3", Category::Voice);
        for d in [text, image, voice] {
            assert!(!d.is_empty());
        }
        assert_ne!(text, image);
        assert_ne!(image, voice);
        assert_ne!(text, voice);
        assert_eq!(image, m.knowledge().default_response(Category::Image));
    }

    #[test]
    fn token_overlap_tie_goes_to_first_candidate() {
        let m = synthetic(
            &[
                ("water the roses", "roses"),
                ("water the tulips", "tulips"),
            ],
            &[],
            &[],
        );
        // Both keys score 2 ("water", "the"); the first one wins.
        let found = m.match_input("water the lawn", Category::Text);
        assert_eq!(found.response, "roses");
        assert_eq!(
            found.stage,
            MatchStage::TokenOverlap {
                key: "water the roses",
                score: 2
            }
        );

        let reversed = synthetic(
            &[
                ("water the tulips", "tulips"),
                ("water the roses", "roses"),
            ],
            &[],
            &[],
        );
        assert_eq!(reversed.find_best_match("water the lawn", Category::Text), "tulips");
    }

    #[test]
    fn token_overlap_is_bidirectional_and_counts_duplicates() {
        let m = synthetic(&[("grow tomatoes", "a"), ("tomato tomato", "b")], &[], &[]);
        // Both keys match all three input words in one direction or the other.
        let found = m.match_input("tom tomatoes tom", Category::Text);
        assert_eq!(
            found.stage,
            MatchStage::TokenOverlap {
                key: "grow tomatoes",
                score: 3
            }
        );
    }

    #[test]
    fn later_strictly_higher_score_wins() {
        let m = farming();
        let found = m.match_input("harvest tomatoes when ripe", Category::Text);
        assert_eq!(found.response, response(&m, Category::Text, "when to harvest tomatoes"));
    }

    #[test]
    fn voice_keyword_table_order_wins() {
        let m = farming();
        // "seed" appears first in the input but "irrigation" is earlier in the table.
        let found = m.match_input("seedling_irrigation_question.mp3", Category::Voice);
        assert_eq!(
            found.stage,
            MatchStage::Keyword {
                keyword: "irrigation",
                key: "water"
            }
        );
        assert_eq!(found.response, response(&m, Category::Voice, "water"));

        let swapped = m.find_best_match("irrigation_for_seedling.mp3", Category::Voice);
        assert_eq!(swapped, response(&m, Category::Voice, "water"));
    }

    #[test]
    fn containment_beats_keyword_table() {
        let m = farming();
        // "bug" is an early keyword for pest, but the full key "compost" is contained.
        let found = m.match_input("bug_in_my_compost.wav", Category::Voice);
        assert_eq!(found.stage, MatchStage::Containment { key: "compost" });
    }

    #[test]
    fn image_has_no_keyword_fallback() {
        let m = farming();
        assert_eq!(
            m.find_best_match("bugs_everywhere.png", Category::Image),
            m.knowledge().default_response(Category::Image)
        );
    }

    #[test]
    fn end_to_end_examples() {
        let m = farming();
        assert_eq!(
            m.find_best_match("How to prevent pest attacks", Category::Text),
            response(&m, Category::Text, "how to prevent pest attacks")
        );
        assert_eq!(
            m.match_input("my_garden_leaf_disease_photo.jpg", Category::Image).stage,
            MatchStage::Containment { key: "leaf_disease" }
        );
        let bugs = m.match_input("i have bugs on my tomatoes", Category::Voice);
        assert_eq!(
            bugs.stage,
            MatchStage::Keyword {
                keyword: "bug",
                key: "pest"
            }
        );
        let nonsense = m.match_input("xyzzy nonsense query", Category::Text);
        assert_eq!(nonsense.stage, MatchStage::Default);
        assert_eq!(nonsense.response, m.knowledge().default_response(Category::Text));
    }

    #[test]
    fn blank_text_input_picks_first_question() {
        let m = farming();
        let found = m.match_input("   ", Category::Text);
        assert_eq!(
            found.stage,
            MatchStage::TokenOverlap {
                key: "what crops should i plant in summer",
                score: 1
            }
        );
        assert_eq!(
            m.find_best_match("", Category::Image),
            m.knowledge().default_response(Category::Image)
        );
        assert_eq!(
            m.find_best_match("", Category::Voice),
            m.knowledge().default_response(Category::Voice)
        );
    }

    #[test]
    fn byte_order_mark_is_trimmed() {
        assert_eq!(normalize("\u{feff} Soil Preparation Tips\u{feff}"), "soil preparation tips");
        let m = farming();
        let found = m.match_input("\u{feff}soil preparation tips", Category::Text);
        assert_eq!(
            found.stage,
            MatchStage::Exact {
                key: "soil preparation tips"
            }
        );
    }
}
