use super::*;

use crate::error::ErrKind;
use crate::primitive::ToSymbol;
use crate::token::{Dialect, Tokenizer};


fn values(dialect: Dialect, line: &str) -> Vec<Value> {
    Tokenizer::new(dialect)
        .tokenize(line)
        .unwrap()
        .into_iter()
        .map(|token| token.into_value().unwrap())
        .collect()
}

fn core(line: &str) -> Result<Value, Error> {
    reduce(values(Dialect::Core, line), &SymbolTable::new())
}

fn galaxy(line: &str) -> Result<Value, Error> {
    reduce(values(Dialect::Galaxy, line), &SymbolTable::new())
}

fn pair(head: i64, tail: i64) -> Value {
    Value::cons(head.into(), tail.into())
}


#[test]
fn single_values() {
    assert_eq!(core("42").unwrap(), Value::Integer(42));
    assert_eq!(core("nil").unwrap(), Value::Nil);
    assert_eq!(core("x").unwrap(), Value::Symbol("x".to_symbol()));
    assert_eq!(core("cons").unwrap().to_string(), "[BUILTIN_cons]");
}

#[test]
fn cons() {
    assert_eq!(core("cons 1 2").unwrap(), pair(1, 2));
    assert_eq!(core("vec 1 2").unwrap(), pair(1, 2));
    assert_eq!(
        core("cons 1 cons 2 nil").unwrap(),
        Value::from(vec![1i64, 2])
    );
}

#[test]
fn apply_is_transparent() {
    assert_eq!(core("ap cons 1 2").unwrap(), pair(1, 2));
    assert_eq!(core("ap ap cons 1 2").unwrap(), pair(1, 2));
    assert_eq!(core("ap ap ap cons 1 2").unwrap(), pair(1, 2));
}

#[test]
fn partial_application_left_curried() {
    assert_eq!(core("cons 1").unwrap().to_string(), "[BUILTIN_cons 1]");
    assert_eq!(core("ap cons").unwrap().to_string(), "[BUILTIN_cons]");
}

#[test]
fn second_selector() {
    assert_eq!(core("f 1 2").unwrap(), Value::Integer(2));
    assert_eq!(core("f x y").unwrap(), Value::Symbol("y".to_symbol()));
}

#[test]
fn malformed() {
    let err = core("1 2").unwrap_err();
    match err.kind() {
        ErrKind::MalformedExpression(stack) => assert_eq!(stack.len(), 2),
        kind => panic!("unexpected error {:?}", kind),
    }

    assert!(matches!(
        core("cons 1 2 3").unwrap_err().kind(),
        ErrKind::MalformedExpression(_)
    ));
    assert!(matches!(
        reduce(Vec::new(), &SymbolTable::new()).unwrap_err().kind(),
        ErrKind::MalformedExpression(_)
    ));
}

#[test]
fn galaxy_arithmetic() {
    assert_eq!(galaxy("add 1 2").unwrap(), Value::Integer(3));
    assert_eq!(galaxy("ap ap add 1 2").unwrap(), Value::Integer(3));
    assert_eq!(galaxy("inc inc 0").unwrap(), Value::Integer(2));
    assert_eq!(galaxy("mul -2 add 1 2").unwrap(), Value::Integer(-6));
    assert_eq!(galaxy("car cons 5 nil").unwrap(), Value::Integer(5));
    assert_eq!(galaxy("isnil nil").unwrap().to_string(), "[BUILTIN_t]");
}

#[test]
fn galaxy_errors_propagate() {
    assert!(matches!(
        galaxy("div 1 0").unwrap_err().kind(),
        ErrKind::Arithmetic(_)
    ));
    assert!(matches!(
        galaxy("add x 1").unwrap_err().kind(),
        ErrKind::UnboundName(_)
    ));
}

#[test]
fn resolves_through_table() {
    let mut table = SymbolTable::new();
    table.bind("x".to_symbol(), Value::Integer(41));

    let res = reduce(values(Dialect::Galaxy, "inc x"), &table).unwrap();
    assert_eq!(res, Value::Integer(42));
}

#[test]
fn reduced_values_are_fixed_points() {
    let table = SymbolTable::new();
    let partial = core("cons 1").unwrap();
    for value in vec![
        Value::Integer(5),
        Value::Nil,
        Value::Symbol("x".to_symbol()),
        pair(1, 2),
        partial,
    ] {
        assert_eq!(reduce(vec![value.clone()], &table).unwrap(), value);
    }
}

#[test]
fn lone_apply_collapses_to_operand() {
    assert_eq!(core("ap 1").unwrap(), Value::Integer(1));
    assert_eq!(core("ap nil").unwrap(), Value::Nil);
    assert_eq!(core("ap x").unwrap(), Value::Symbol("x".to_symbol()));
    assert_eq!(galaxy("isnil ap nil").unwrap().to_string(), "[BUILTIN_t]");

    // A bare `ap` has no operand yet and stays as it is.
    assert_eq!(core("ap").unwrap().to_string(), "[BUILTIN_ap]");
}
