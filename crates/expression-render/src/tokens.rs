//! Splits rendered filter text into segments so callers can apply
//! visual emphasis to the boolean connectives without re-parsing.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Operator,
    Plain,
}

/// Splits `text` on whole-word, case-insensitive `AND`/`OR`.
///
/// Operator words keep their original casing in `text`; everything
/// between them is merged into `Plain` tokens. Concatenating all token
/// texts in order reproduces the input exactly.
pub fn boolean_tokens(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        let word_start = rest.find(is_word_char).unwrap_or(rest.len());
        plain.push_str(&rest[..word_start]);
        rest = &rest[word_start..];
        if rest.is_empty() {
            break;
        }

        let word_end = rest.find(|c| !is_word_char(c)).unwrap_or(rest.len());
        let word = &rest[..word_end];
        if word.eq_ignore_ascii_case("AND") || word.eq_ignore_ascii_case("OR") {
            if !plain.is_empty() {
                tokens.push(Token {
                    text: std::mem::take(&mut plain),
                    kind: TokenKind::Plain,
                });
            }
            tokens.push(Token {
                text: word.to_string(),
                kind: TokenKind::Operator,
            });
        } else {
            plain.push_str(word);
        }
        rest = &rest[word_end..];
    }

    if !plain.is_empty() {
        tokens.push(Token {
            text: plain,
            kind: TokenKind::Plain,
        });
    }
    tokens
}

// Word-boundary semantics: `BRAND` and `AND1` are plain text.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
