use std::fmt;

use crate::primitive::Value;


/// One lexed word.
///
/// `=` only means something as the second word of a line; every other word
/// lexes straight to the Value it denotes.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Assign,
    Value(Value),
}

impl Token {
    pub fn value(&self) -> Option<&Value> {
        match self {
            Token::Value(value) => Some(value),
            Token::Assign => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Token::Value(value) => Some(value),
            Token::Assign => None,
        }
    }
}


impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Assign => write!(f, "="),
            Token::Value(value) => write!(f, "{}", value),
        }
    }
}

impl From<Value> for Token {
    fn from(value: Value) -> Self {
        Token::Value(value)
    }
}
