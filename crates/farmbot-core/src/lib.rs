//! farmbot-core: category types, gateway config, the canned-response knowledge base
//! and the matcher that picks an answer for a chat message or uploaded filename.

mod knowledge;
mod matcher;
mod shared;

pub use shared::{Category, CoreConfig, DEFAULT_MAX_UPLOAD_BYTES};

pub use knowledge::{
    DefaultResponses, Entry, KeywordPriorityTable, KeywordRule, KnowledgeBase, KnowledgeError,
    KnowledgeSection,
};

pub use matcher::{normalize, Match, MatchStage, ResponseMatcher};
