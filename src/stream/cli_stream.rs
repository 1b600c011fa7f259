use log::error;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use super::cli_helper::CliHelper;
use crate::error::Error;
use crate::primitive::Symbol;
use crate::token::Dialect;


/// Interactive line source.
///
/// ^C drops the line being typed, ^D ends the stream.
pub struct CliStream {
    editor: Editor<CliHelper>,
}

impl CliStream {
    pub fn new(dialect: Dialect) -> CliStream {
        let mut editor = Editor::<CliHelper>::new();
        editor.set_helper(Some(CliHelper::new(dialect)));

        CliStream { editor }
    }

    /// Offer `symbol` for completion from now on.
    pub fn learn_name(&mut self, symbol: &Symbol) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.add_name(symbol);
        }
    }
}


impl Iterator for CliStream {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.editor.readline("> ") {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str());
                    }
                    return Some(Ok(line));
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    return None;
                }
                Err(err) => {
                    error!("readline failed, ending session: {}", err);
                    return None;
                }
            }
        }
    }
}
