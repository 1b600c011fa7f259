//! Runtime values produced by lexing and reduction.

use std::convert::TryFrom;
use std::fmt;
use std::rc::Rc;

use super::{Pair, Procedure, Symbol};


#[derive(Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Symbol(Symbol),
    Pair(Rc<Pair>),
    Nil,
    Procedure(Procedure),
}

impl Value {
    pub fn cons(head: Value, tail: Value) -> Value {
        Value::Pair(Rc::new(Pair::new(head, tail)))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn is_procedure(&self) -> bool {
        matches!(self, Value::Procedure(_))
    }

    /// Write as a list: pair chains ending in nil print as `(a b c)`, other
    /// tails as `(a b . c)`.
    ///
    /// Non-pair values are handed to write_atom; parens go through
    /// write_paren so callers can decorate them by depth.
    pub fn write_list<W, F, P>(
        &self,
        w: &mut W,
        depth: usize,
        write_atom: &mut F,
        write_paren: &mut P,
    ) -> fmt::Result
    where
        W: fmt::Write,
        F: FnMut(&mut W, &Value, usize) -> fmt::Result,
        P: FnMut(&mut W, &str, usize) -> fmt::Result,
    {
        // Any list longer than this will simply be suffixed with "..." after these
        // many elements.
        const MAX_DISPLAY_LENGTH: usize = 64;
        const MAX_DISPLAY_DEPTH: usize = 32;

        let mut current = match self {
            Value::Pair(pair) => pair,
            _ => return write_atom(w, self, depth),
        };
        if depth >= MAX_DISPLAY_DEPTH {
            return write!(w, "(..)");
        }

        write_paren(w, "(", depth)?;
        let mut pos: usize = 0;
        loop {
            if pos >= MAX_DISPLAY_LENGTH {
                write!(w, " ...")?;
                break;
            }
            if pos > 0 {
                write!(w, " ")?;
            }
            current
                .head()
                .write_list(w, depth + 1, write_atom, write_paren)?;
            pos += 1;

            match current.tail() {
                Value::Pair(next) => current = next,
                Value::Nil => break,
                last => {
                    write!(w, " . ")?;
                    last.write_list(w, depth + 1, write_atom, write_paren)?;
                    break;
                }
            }
        }
        write_paren(w, ")", depth)
    }

    fn write_atom<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(w, "{}", i),
            Value::Symbol(symbol) => write!(w, "{}", symbol),
            Value::Nil => write!(w, "nil"),
            Value::Procedure(procedure) => write!(w, "{}", procedure),
            // write_list never hands pairs over as atoms.
            Value::Pair(pair) => write!(w, "({} . {})", pair.head(), pair.tail()),
        }
    }
}


impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_list(
            f,
            0,
            &mut |writer, atom, _depth| atom.write_atom(writer),
            &mut |writer, paren, _depth| write!(writer, "{}", paren),
        )
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Procedure> for Value {
    fn from(procedure: Procedure) -> Self {
        Value::Procedure(procedure)
    }
}

/// Builds a nil-terminated list.
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter()
            .rev()
            .fold(Value::Nil, |tail, head| Value::cons(head.into(), tail))
    }
}

impl TryFrom<Value> for i64 {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::Integer(i) = value {
            Ok(i)
        } else {
            Err(value)
        }
    }
}


#[cfg(test)]
#[path = "./value_test.rs"]
mod value_test;
