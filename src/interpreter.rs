//! Line-at-a-time evaluation with `name = expr` assignments.

use derive_getters::Getters;
use log::info;

use crate::env::SymbolTable;
use crate::error::Error;
use crate::primitive::{Symbol, Value};
use crate::reducer::reduce;
use crate::token::{Dialect, Token, Tokenizer};


/// Evaluation session owning its own SymbolTable.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    table: SymbolTable,
    tokenizer: Tokenizer,
}

/// Outcome of one line.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Evaluation {
    /// Lexed line, kept for echoing.
    tokens: Vec<Token>,
    /// Reduced result. May still be an unresolved Symbol.
    value: Value,
    binding: Option<(Symbol, Value)>,
}

impl Interpreter {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            table: SymbolTable::new(),
            tokenizer: Tokenizer::new(dialect),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.tokenizer.dialect()
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Evaluate one line of text.
    ///
    /// A line must hold an expression; blank lines fail as malformed. Use
    /// `run` or `is_blank` to skip them.
    pub fn eval_line<S: AsRef<str>>(&mut self, line: S) -> Result<Evaluation, Error> {
        let tokens = self.tokenizer.tokenize(line)?;
        self.eval_tokens(tokens)
    }

    pub fn eval_tokens(&mut self, tokens: Vec<Token>) -> Result<Evaluation, Error> {
        let (target, expr) = split_assignment(&tokens)?;

        let value = reduce(expr, &self.table)?;
        info!("line evaluated to {}", value);

        let binding = target.map(|symbol| {
            self.table.bind(symbol.clone(), value.clone());
            info!("stored into {}", symbol);
            (symbol, value.clone())
        });

        Ok(Evaluation {
            tokens,
            value,
            binding,
        })
    }

    /// Resolve a result through the table for display or inspection.
    pub fn force(&self, value: &Value) -> Result<Value, Error> {
        self.table.force(value)
    }

    /// Evaluate a stream of lines, skipping blank ones and calling `on_result`
    /// after each of the rest.
    ///
    /// Errors carry their 1-based line number. Evaluation is lazy; the caller
    /// decides whether to keep pulling after an error.
    pub fn run<'a, I, S, F>(
        &'a mut self,
        lines: I,
        mut on_result: F,
    ) -> impl Iterator<Item = Result<Evaluation, Error>> + 'a
    where
        I: IntoIterator<Item = Result<S, Error>> + 'a,
        I::IntoIter: 'a,
        S: AsRef<str> + 'a,
        F: FnMut(&Interpreter, &Result<Evaluation, Error>) + 'a,
    {
        lines
            .into_iter()
            .enumerate()
            .filter(|(_, line)| !matches!(line, Ok(line) if is_blank(line)))
            .map(move |(i, line)| {
                let result = line
                    .and_then(|line| self.eval_line(line))
                    .map_err(|err| err.at_line(i + 1));
                on_result(&*self, &result);
                result
            })
    }
}

impl Evaluation {
    pub fn consume(self) -> (Vec<Token>, Value, Option<(Symbol, Value)>) {
        (self.tokens, self.value, self.binding)
    }
}


/// Whether a line holds no words at all.
pub fn is_blank<S: AsRef<str>>(line: S) -> bool {
    line.as_ref().trim().is_empty()
}

/// Split `name = expr...` into its target and expression values.
fn split_assignment(tokens: &[Token]) -> Result<(Option<Symbol>, Vec<Value>), Error> {
    let (target, expr) = match tokens {
        [Token::Value(Value::Symbol(symbol)), Token::Assign, rest @ ..] => {
            (Some(symbol.clone()), rest)
        }
        [target, Token::Assign, ..] => {
            return err!(InvalidAssignment(
                format!("cannot assign to {}", target).into()
            ));
        }
        _ => (None, tokens),
    };

    let mut values = Vec::with_capacity(expr.len());
    for token in expr {
        match token {
            Token::Value(value) => values.push(value.clone()),
            Token::Assign => {
                return err!(InvalidAssignment("= must follow a single name".into()));
            }
        }
    }
    Ok((target, values))
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
