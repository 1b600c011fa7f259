use rustyline::completion::Completer;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::collections::BTreeSet;

use crate::primitive::Symbol;
use crate::token::Dialect;


// Rustyline Helper for CliStream; completes keywords and bound names.
pub struct CliHelper {
    keywords: Vec<&'static str>,
    names: BTreeSet<String>,
}

impl CliHelper {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            keywords: dialect.keywords(),
            names: BTreeSet::new(),
        }
    }

    pub fn add_name(&mut self, symbol: &Symbol) {
        self.names.insert(symbol.to_string());
    }

    fn candidates(&self, prefix: &str) -> Vec<String> {
        let mut res = self
            .keywords
            .iter()
            .filter(|k| k.starts_with(prefix))
            .map(|k| k.to_string())
            .collect::<Vec<_>>();
        res.extend(
            self.names
                .range(prefix.to_string()..)
                .take_while(|k| k.starts_with(prefix))
                .cloned(),
        );
        res
    }

    fn word_start(&self, line: &str, pos: usize) -> usize {
        line[..pos]
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0)
    }
}


impl Completer for CliHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let start = self.word_start(line, pos);
        Ok((start, self.candidates(&line[start..pos])))
    }
}


impl Helper for CliHelper {}
impl Hinter for CliHelper {
    type Hint = String;
}
impl Highlighter for CliHelper {}
impl Validator for CliHelper {}


#[cfg(test)]
#[path = "./cli_helper_test.rs"]
mod cli_helper_test;
