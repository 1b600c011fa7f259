//! Module for breaking galaxy lines into tokens.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use super::policies::Dialect;
use super::token::Token;
use crate::error::Error;
use crate::primitive::{Symbol, Value};


/// Maps whitespace-separated words to Tokens under a Dialect.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tokenizer {
    dialect: Dialect,
}

impl Tokenizer {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn tokenize<S: AsRef<str>>(&self, line: S) -> Result<Vec<Token>, Error> {
        let tokens = line
            .as_ref()
            .split_whitespace()
            .map(|word| self.lex(word))
            .collect::<Result<Vec<_>, _>>()?;
        trace!("tokenized {:?}", tokens);
        Ok(tokens)
    }

    /// Lex one word. First match wins:
    ///   `=`, digits, `:N` (N optionally signed), keyword, alphabetic name.
    pub fn lex(&self, word: &str) -> Result<Token, Error> {
        lazy_static! {
            static ref NUMBERED: Regex = Regex::new(r"^:([+-]?\d+)$").unwrap();
        }

        if word == "=" {
            return Ok(Token::Assign);
        }

        if is_integer(word, self.dialect.signed_integers()) {
            return match word.parse::<i64>() {
                Ok(i) => Ok(Token::Value(Value::Integer(i))),
                Err(_) => invalid(word),
            };
        }

        if word.starts_with(':') {
            let id = NUMBERED
                .captures(word)
                .and_then(|cap| cap.get(1))
                .and_then(|id| id.as_str().parse::<i64>().ok());
            return match id {
                Some(id) => Ok(Token::Value(Value::Symbol(Symbol::numbered(id)))),
                None => invalid(word),
            };
        }

        if let Some(keyword) = self.dialect.keyword(word) {
            return Ok(Token::Value(keyword));
        }

        if !word.is_empty() && word.chars().all(|c| c.is_alphabetic()) {
            return Ok(Token::Value(Value::Symbol(Symbol::named(word))));
        }

        invalid(word)
    }
}

/// Lex a word under the Core dialect.
pub fn lex(word: &str) -> Result<Token, Error> {
    Tokenizer::default().lex(word)
}

/// Tokenize a line under the Core dialect.
pub fn tokenize<S: AsRef<str>>(line: S) -> Result<Vec<Token>, Error> {
    Tokenizer::default().tokenize(line)
}


fn is_integer(word: &str, signed: bool) -> bool {
    let digits = match word.strip_prefix('-') {
        Some(rest) if signed => rest,
        _ => word,
    };
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn invalid<T>(word: &str) -> Result<T, Error> {
    err!(Lex {
        word: word.to_string(),
    })
}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
