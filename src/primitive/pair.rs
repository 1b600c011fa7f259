use std::mem;
use std::rc::Rc;

use super::Value;
use crate::error::Error;


/// Non-empty 2-tuple; `Value::Nil` is the empty sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Pair {
    head: Value,
    tail: Value,
}

impl Pair {
    pub fn new(head: Value, tail: Value) -> Pair {
        Pair { head, tail }
    }

    pub fn head(&self) -> &Value {
        &self.head
    }

    pub fn tail(&self) -> &Value {
        &self.tail
    }
}


/// First component of a non-nil pair.
pub fn head(value: &Value) -> Result<Value, Error> {
    match value {
        Value::Pair(pair) => Ok(pair.head().clone()),
        _ => err!(Type {
            given: value.clone(),
            reason: "not a pair".into(),
        }),
    }
}

/// Second component of a non-nil pair.
pub fn tail(value: &Value) -> Result<Value, Error> {
    match value {
        Value::Pair(pair) => Ok(pair.tail().clone()),
        _ => err!(Type {
            given: value.clone(),
            reason: "not a pair".into(),
        }),
    }
}


impl From<Pair> for Value {
    fn from(pair: Pair) -> Self {
        Value::Pair(Rc::new(pair))
    }
}

/// Unlinks uniquely owned tails one at a time so long lists don't recurse
/// once per element on drop.
impl Drop for Pair {
    fn drop(&mut self) {
        let mut tail = mem::replace(&mut self.tail, Value::Nil);
        while let Value::Pair(next) = tail {
            match Rc::try_unwrap(next) {
                Ok(mut next) => tail = mem::replace(&mut next.tail, Value::Nil),
                Err(_shared) => break,
            }
        }
    }
}


#[cfg(test)]
#[path = "./pair_test.rs"]
mod pair_test;
