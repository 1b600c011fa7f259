use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;

use super::Value;


/// Reference to a bound value, resolved against a SymbolTable at use time.
///
/// Named symbols come from alphabetic words (`galaxy`); numbered ones from
/// `:N` words and act as anonymous cells.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Symbol {
    Named(String),
    Numbered(i64),
}

pub trait ToSymbol {
    fn to_symbol(&self) -> Symbol;
}

impl Symbol {
    pub fn named<S: AsRef<str>>(name: S) -> Symbol {
        Symbol::Named(name.as_ref().to_string())
    }

    pub fn numbered(id: i64) -> Symbol {
        Symbol::Numbered(id)
    }

    /// Bare name without the `:` sigil of numbered symbols.
    pub fn name(&self) -> Cow<str> {
        match self {
            Symbol::Named(name) => Cow::Borrowed(name.as_str()),
            Symbol::Numbered(id) => Cow::Owned(id.to_string()),
        }
    }
}


impl ToSymbol for str {
    fn to_symbol(&self) -> Symbol {
        Symbol::named(self)
    }
}

impl ToSymbol for i64 {
    fn to_symbol(&self) -> Symbol {
        Symbol::numbered(*self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Named(name) => write!(f, "{}", name),
            Symbol::Numbered(id) => write!(f, ":{}", id),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a Symbol {
    type Error = &'a Value;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        if let Value::Symbol(symbol) = value {
            Ok(symbol)
        } else {
            Err(value)
        }
    }
}
