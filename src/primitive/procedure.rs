use std::fmt;

use super::builtin::{Args, BuiltIn, Ret};
use super::Value;
use crate::env::SymbolTable;


/// Unary callable value: a builtin plus the arguments collected so far.
///
/// Calling a Procedure supplies one more argument. Until the builtin's arity
/// is met the result is a new, longer partial application; the final call
/// runs the builtin.
#[derive(Clone, Debug, PartialEq)]
pub struct Procedure {
    builtin: BuiltIn,
    args: Args,
}

impl Procedure {
    pub fn new(builtin: BuiltIn) -> Procedure {
        Procedure {
            builtin,
            args: Args::new(),
        }
    }

    pub fn builtin(&self) -> &BuiltIn {
        &self.builtin
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    pub fn call(&self, arg: Value, table: &SymbolTable) -> Ret {
        let mut args = Args::with_capacity(self.args.len() + 1);
        args.extend(self.args.iter().cloned());
        args.push(arg);

        if args.len() < self.builtin.arity() {
            Ok(Value::Procedure(Procedure {
                builtin: self.builtin,
                args,
            }))
        } else {
            self.builtin.call(args, table)
        }
    }
}


impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}", self.builtin.name())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        write!(f, "]")
    }
}

impl From<BuiltIn> for Value {
    fn from(builtin: BuiltIn) -> Self {
        Value::Procedure(Procedure::new(builtin))
    }
}
