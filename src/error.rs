//! Errors surfaced while lexing, reducing, or binding a line.
//!
//! Every failure is fatal to the line being evaluated; whether to keep going
//! with later lines is up to the caller.

use std::borrow::Cow;
use std::fmt;

use self::ErrKind::*;
use crate::primitive::{Symbol, Value};


/// Creates an Error without line info, wrapped in Err.
#[macro_export]
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::error::Error::new($crate::error::ErrKind::$($kind)+))
    };
}


pub struct Error {
    line: Option<usize>,
    kind: ErrKind,
}

#[derive(Debug)]
pub enum ErrKind {
    Lex {
        word: String,
    },
    UnboundName(Symbol),
    Type {
        given: Value,
        reason: Cow<'static, str>,
    },
    MalformedExpression(Vec<Value>),
    InvalidAssignment(Cow<'static, str>),
    CyclicBinding(Symbol),
    Arithmetic(Cow<'static, str>),
    Io(std::io::Error),
}

impl Error {
    /// Prefer using err! for convenience.
    pub fn new(kind: ErrKind) -> Self {
        Self { line: None, kind }
    }

    pub fn kind(&self) -> &ErrKind {
        &self.kind
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Attach the 1-based line number the error came from.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}


impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Lang Error] ")?;
        if let Some(line) = self.line {
            write!(f, "line {}: ", line)?;
        }
        write!(f, "{}", self.kind)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{:?} @ line {}", self.kind, line),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl fmt::Display for ErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lex { word } => write!(f, "Invalid token: \"{}\"", word),
            UnboundName(symbol) => write!(f, "Unbound name: \"{}\"", symbol),
            Type { given, reason } => write!(f, "Type error: {} ({})", reason, given),
            MalformedExpression(stack) => {
                write!(f, "Malformed expression: {} values left [", stack.len())?;
                for (i, val) in stack.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
            InvalidAssignment(reason) => write!(f, "Invalid assignment: {}", reason),
            CyclicBinding(symbol) => write!(f, "Cyclic binding through \"{}\"", symbol),
            Arithmetic(reason) => write!(f, "Arithmetic error: {}", reason),
            Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(Io(err))
    }
}
