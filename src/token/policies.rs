//! Keyword tables for the lexer.

use std::fmt;
use std::str::FromStr;

use crate::builtins::{CORE_BUILTINS, GALAXY_BUILTINS};
use crate::primitive::Value;


/// Which keyword table the lexer consults.
///
/// Core knows only `cons`, `vec`, `ap`, `nil` and `f`; every other
/// alphabetic word is a name. Galaxy adds the rest of the galaxy builtins
/// and signed integer literals, taking words like `t` or `add` away from
/// the namespace.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dialect {
    Core,
    Galaxy,
}

#[derive(Debug)]
pub struct UnknownDialect(String);

impl Dialect {
    pub fn keyword(&self, word: &str) -> Option<Value> {
        match self {
            Dialect::Core => policy_core(word),
            Dialect::Galaxy => policy_galaxy(word),
        }
    }

    pub fn keywords(&self) -> Vec<&'static str> {
        let mut words = vec!["nil"];
        words.extend(CORE_BUILTINS.keys());
        if let Dialect::Galaxy = self {
            words.extend(GALAXY_BUILTINS.keys());
        }
        words.sort_unstable();
        words
    }

    pub fn signed_integers(&self) -> bool {
        matches!(self, Dialect::Galaxy)
    }
}

pub fn policy_core(word: &str) -> Option<Value> {
    match word {
        "nil" => Some(Value::Nil),
        _ => CORE_BUILTINS.get(word).map(|builtin| (*builtin).into()),
    }
}

pub fn policy_galaxy(word: &str) -> Option<Value> {
    policy_core(word).or_else(|| GALAXY_BUILTINS.get(word).map(|builtin| (*builtin).into()))
}


impl Default for Dialect {
    fn default() -> Self {
        Dialect::Core
    }
}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" => Ok(Dialect::Core),
            "galaxy" => Ok(Dialect::Galaxy),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Core => write!(f, "core"),
            Dialect::Galaxy => write!(f, "galaxy"),
        }
    }
}

impl fmt::Display for UnknownDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dialect \"{}\", expected core or galaxy", self.0)
    }
}

impl std::error::Error for UnknownDialect {}
