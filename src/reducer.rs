//! Reduction of one line's flat prefix values into a single Value.
//!
//! Values are scanned right to left. Non-functions wait on a stack; each
//! function greedily takes arguments off the stack until its result stops
//! being a function or the stack runs dry. With no parse tree, a curried
//! prefix line like `cons 1 2` collapses as it is scanned.

use log::debug;

use crate::builtins::settle;
use crate::env::SymbolTable;
use crate::error::Error;
use crate::primitive::{Procedure, Value};


/// Progress of one function's curry chain.
enum Chain {
    /// Result so far is still a function and may take another argument.
    Reducible(Procedure),
    /// Saturated, or curried with nothing left on the stack to take.
    Done(Value),
}

pub fn reduce<I>(values: I, table: &SymbolTable) -> Result<Value, Error>
where
    I: IntoIterator<Item = Value>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut stack = Vec::<Value>::new();
    for value in values.into_iter().rev() {
        let procedure = match value {
            Value::Procedure(procedure) => procedure,
            other => {
                debug!("pushing {}", other);
                stack.push(other);
                continue;
            }
        };

        debug!("starting to apply {}", procedure);
        let mut chain = Chain::Reducible(procedure);
        let result = loop {
            chain = match chain {
                Chain::Done(value) => break value,
                Chain::Reducible(res) => match stack.pop() {
                    Some(arg) => match res.call(arg, table)? {
                        Value::Procedure(next) => Chain::Reducible(next),
                        saturated => {
                            debug!("result not callable, stopping: {}", saturated);
                            Chain::Done(saturated)
                        }
                    },
                    None => {
                        debug!("stopped because of an empty stack, leaving curried: {}", res);
                        Chain::Done(settle(res.into()))
                    }
                },
            };
        };
        stack.push(result);
    }

    if stack.len() != 1 {
        return err!(MalformedExpression(stack));
    }
    match stack.pop() {
        Some(value) => Ok(value),
        None => err!(MalformedExpression(Vec::new())),
    }
}


#[cfg(test)]
#[path = "./reducer_test.rs"]
mod reducer_test;
