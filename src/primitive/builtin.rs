//! Native procedures backing the galaxy keywords.

use std::fmt;

use super::Value;
use crate::env::SymbolTable;
use crate::error::Error;


pub type Args = Vec<Value>;
pub type Ret = Result<Value, Error>;

/// Named primitive taking exactly `arity` arguments, supplied one at a time
/// through Procedure.
#[derive(Clone, Copy)]
pub struct BuiltIn {
    name: &'static str,
    arity: usize,
    fun: fn(Args, &SymbolTable) -> Ret,
}

impl BuiltIn {
    pub fn new(name: &'static str, arity: usize, fun: fn(Args, &SymbolTable) -> Ret) -> BuiltIn {
        debug_assert!(arity > 0, "builtin {} must take an argument", name);
        BuiltIn { name, arity, fun }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn call(&self, args: Args, table: &SymbolTable) -> Ret {
        (self.fun)(args, table)
    }
}

impl PartialEq for BuiltIn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{} @ {:p}]", self.name, &self.fun)
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}]", self.name)
    }
}
