//! Word-boundary tokenizer shared by the vocabulary compiler and text extraction.
//!
//! A word token is a run of alphanumeric characters, optionally closed by a run of
//! `+` or `#` so that "c++" and "c#" stay whole. A `+`/`#` run followed directly by
//! another word is a separator instead, so "html+css" splits into three tokens.
//! Every other non-whitespace character becomes its own punctuation token. Each
//! token records whether it was glued to the previous token, which keeps
//! "node.js" distinct from "node . js".

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased token text.
    pub text: String,
    /// True when no whitespace separates this token from the previous one.
    pub joined: bool,
}

pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_joined = false;
    let mut after_whitespace = true;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            flush(&mut tokens, &mut current, current_joined);
            after_whitespace = true;
            i += 1;
            continue;
        }

        if c.is_alphanumeric() {
            if current.is_empty() {
                current_joined = !after_whitespace && !tokens.is_empty();
            }
            current.extend(c.to_lowercase());
            i += 1;
        } else if !current.is_empty() && is_suffix_char(c) {
            let run_end = chars[i..]
                .iter()
                .position(|&ch| !is_suffix_char(ch))
                .map_or(chars.len(), |offset| i + offset);
            let separates_words = chars.get(run_end).is_some_and(|ch| ch.is_alphanumeric());

            if separates_words {
                flush(&mut tokens, &mut current, current_joined);
                for &symbol in &chars[i..run_end] {
                    push_punctuation(&mut tokens, symbol, true);
                }
            } else {
                current.extend(&chars[i..run_end]);
            }
            i = run_end;
        } else {
            flush(&mut tokens, &mut current, current_joined);
            let joined = !after_whitespace && !tokens.is_empty();
            push_punctuation(&mut tokens, c, joined);
            i += 1;
        }
        after_whitespace = false;
    }
    flush(&mut tokens, &mut current, current_joined);

    tokens
}

fn is_suffix_char(c: char) -> bool {
    matches!(c, '+' | '#')
}

fn push_punctuation(tokens: &mut Vec<Token>, c: char, joined: bool) {
    tokens.push(Token {
        text: c.to_lowercase().collect(),
        joined,
    });
}

fn flush(tokens: &mut Vec<Token>, current: &mut String, joined: bool) {
    if !current.is_empty() {
        tokens.push(Token {
            text: std::mem::take(current),
            joined,
        });
    }
}
