// Skill extraction and comparison.
// Pure and synchronous: the matcher is built once at startup and shared read-only.

pub mod compare;
pub mod matcher;
pub mod tokenizer;
pub mod vocabulary;

pub use compare::{compare_with_posting, DisplayPolicy, SkillComparison, SkillGapView};
pub use matcher::SkillMatcher;
pub use vocabulary::SkillVocabulary;
