//! Evaluator for galaxy notation: flat, prefix, curried combinator lines.
//!
//! Each line is split on whitespace, lexed into Tokens, and reduced with a
//! value stack into a single Value. Lines of the form `name = expr` bind the
//! result into the Interpreter's SymbolTable; names are only resolved when a
//! value is actually applied, so bindings may refer forward.
//!
//! This crate does *not* set up logging; binaries should take care of that.
//! See: https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod error;

pub mod builtins;
pub mod env;
pub mod interpreter;
pub mod primitive;
pub mod printer;
pub mod reducer;
pub mod stream;
pub mod token;

pub use interpreter::{Evaluation, Interpreter};

pub mod prelude {
    pub use crate::env::SymbolTable;
    pub use crate::error::{ErrKind, Error};
    pub use crate::interpreter::{Evaluation, Interpreter};
    pub use crate::primitive::prelude::*;
    pub use crate::reducer::reduce;
    pub use crate::stream::prelude::*;
    pub use crate::token::{lex, tokenize, Dialect, Token, Tokenizer};
    // Macros.
    pub use crate::err;
}
