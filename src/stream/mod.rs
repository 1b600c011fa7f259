//! Sources of lines for the Interpreter.
//!
//! Every source is an `Iterator<Item = Result<String, Error>>`, so any of
//! them can be handed to `Interpreter::run`.

pub mod input;

#[cfg(feature = "cli")]
pub mod cli_helper;
#[cfg(feature = "cli")]
pub mod cli_stream;

pub mod prelude {
    pub use super::input::{LineReader, StringReader};

    #[cfg(feature = "cli")]
    pub use super::cli_stream::CliStream;
}
