//! Mapping from symbols to bound values.
//!
//! Values are stored as reduced, which may themselves be unresolved Symbols.
//! Resolution only happens when a value is used, so a binding may refer to a
//! name that a later line has yet to bind.

use log::trace;
use std::collections::hash_map::Keys;
use std::collections::HashMap;

use crate::error::Error;
use crate::primitive::{Symbol, Value};


#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    map: HashMap<Symbol, Value>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    /// Insert or overwrite.
    pub fn bind(&mut self, symbol: Symbol, value: Value) {
        trace!("binding {} to {}", symbol, value);
        self.map.insert(symbol, value);
    }

    pub fn lookup(&self, symbol: &Symbol) -> Option<&Value> {
        self.map.get(symbol)
    }

    pub fn contains_key(&self, symbol: &Symbol) -> bool {
        self.map.contains_key(symbol)
    }

    pub fn resolve(&self, symbol: &Symbol) -> Result<Value, Error> {
        match self.lookup(symbol) {
            Some(value) => Ok(value.clone()),
            None => err!(UnboundName(symbol.clone())),
        }
    }

    /// Single-step resolution: Symbols are looked up, all else is returned as is.
    pub fn resolve_value(&self, value: &Value) -> Result<Value, Error> {
        match value {
            Value::Symbol(symbol) => self.resolve(symbol),
            _ => Ok(value.clone()),
        }
    }

    /// Resolve until reaching a non-Symbol value.
    pub fn force(&self, value: &Value) -> Result<Value, Error> {
        let mut seen = Vec::<&Symbol>::new();
        let mut current = value;
        while let Value::Symbol(symbol) = current {
            if seen.contains(&symbol) {
                return err!(CyclicBinding(symbol.clone()));
            }
            seen.push(symbol);

            current = match self.lookup(symbol) {
                Some(bound) => bound,
                None => return err!(UnboundName(symbol.clone())),
            };
        }
        Ok(current.clone())
    }

    pub fn names(&self) -> Keys<Symbol, Value> {
        self.map.keys()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear()
    }
}


#[cfg(test)]
#[path = "./symbol_table_test.rs"]
mod symbol_table_test;
