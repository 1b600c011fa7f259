// Public exports.
pub use policies::Dialect;
pub use token::Token;
pub use tokenizer::{lex, tokenize, Tokenizer};

// Public mods.
pub mod policies;
pub mod token;

// Private mods.
mod tokenizer;
