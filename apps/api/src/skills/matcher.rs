//! Phrase matcher — finds vocabulary phrases in free text on whole-token boundaries.
//!
//! The vocabulary is compiled once into token sequences indexed by their first
//! token. Extraction walks the text tokens and checks only the candidates that
//! start with the current token. The matcher holds no mutable state, so a single
//! instance behind an `Arc` serves every request handler.

use std::collections::{BTreeSet, HashMap};

use crate::skills::tokenizer::{tokenize, Token};
use crate::skills::vocabulary::SkillVocabulary;

#[derive(Debug)]
struct CompiledPhrase {
    phrase: String,
    tokens: Vec<Token>,
}

impl CompiledPhrase {
    /// Tests whether the phrase occurs at `start`. Glue between inner tokens must
    /// agree, so "ci/cd" needs "ci/cd" in the text, not "ci / cd".
    fn matches_at(&self, text: &[Token], start: usize) -> bool {
        let Some(window) = text.get(start..start + self.tokens.len()) else {
            return false;
        };

        window
            .iter()
            .zip(&self.tokens)
            .enumerate()
            .all(|(i, (got, want))| got.text == want.text && (i == 0 || got.joined == want.joined))
    }
}

#[derive(Debug)]
pub struct SkillMatcher {
    phrases: Vec<CompiledPhrase>,
    by_first_token: HashMap<String, Vec<usize>>,
}

impl SkillMatcher {
    pub fn new(vocabulary: &SkillVocabulary) -> Self {
        debug_assert!(!vocabulary.is_empty());
        let mut phrases = Vec::with_capacity(vocabulary.len());
        let mut by_first_token: HashMap<String, Vec<usize>> = HashMap::new();

        for phrase in vocabulary.phrases() {
            let tokens = tokenize(phrase);
            // The vocabulary guarantees at least one token per phrase.
            let Some(first) = tokens.first() else {
                continue;
            };
            by_first_token
                .entry(first.text.clone())
                .or_default()
                .push(phrases.len());
            phrases.push(CompiledPhrase {
                phrase: phrase.clone(),
                tokens,
            });
        }

        Self {
            phrases,
            by_first_token,
        }
    }

    /// Returns the distinct vocabulary phrases present in `text`, sorted ascending.
    ///
    /// Overlapping phrases are all reported: "react native" yields both
    /// "react" and "react native". Empty or unmatched text yields an empty list.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        let mut found: BTreeSet<&str> = BTreeSet::new();

        for (start, token) in tokens.iter().enumerate() {
            let Some(candidates) = self.by_first_token.get(&token.text) else {
                continue;
            };
            for &idx in candidates {
                let compiled = &self.phrases[idx];
                if compiled.matches_at(&tokens, start) {
                    found.insert(compiled.phrase.as_str());
                }
            }
        }

        found.into_iter().map(String::from).collect()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}
