use super::*;

use crate::error::ErrKind;
use crate::primitive::ToSymbol;
use crate::stream::input::StringReader;


fn eval(interpreter: &mut Interpreter, line: &str) -> Evaluation {
    interpreter.eval_line(line).unwrap()
}


#[test]
fn blank_line_is_malformed() {
    let mut interpreter = Interpreter::default();
    for line in &["", "   "] {
        let err = interpreter.eval_line(line).unwrap_err();
        match err.kind() {
            ErrKind::MalformedExpression(stack) => assert!(stack.is_empty()),
            kind => panic!("unexpected error {:?}", kind),
        }
    }
    assert!(is_blank(" \t "));
    assert!(!is_blank(" nil "));
}

#[test]
fn expression() {
    let mut interpreter = Interpreter::default();
    let evaluation = eval(&mut interpreter, "ap ap cons 1 2");
    assert_eq!(evaluation.tokens().len(), 5);
    assert_eq!(evaluation.value().to_string(), "(1 . 2)");
    assert_eq!(evaluation.binding(), &None);
    assert!(interpreter.table().is_empty());
}

#[test]
fn assignment() {
    let mut interpreter = Interpreter::default();
    let evaluation = eval(&mut interpreter, ":1 = cons 1 nil");
    let (_, value, binding) = evaluation.consume();

    assert_eq!(value, Value::from(vec![1i64]));
    assert_eq!(binding, Some((1i64.to_symbol(), value.clone())));
    assert_eq!(interpreter.table().lookup(&1i64.to_symbol()), Some(&value));
}

#[test]
fn forward_reference() {
    let mut interpreter = Interpreter::new(Dialect::Galaxy);
    eval(&mut interpreter, "x = y");
    eval(&mut interpreter, "y = 41");

    let evaluation = eval(&mut interpreter, "inc x");
    assert_eq!(evaluation.value(), &Value::Integer(42));

    let x = Value::Symbol("x".to_symbol());
    assert_eq!(interpreter.force(&x).unwrap(), Value::Integer(41));
}

#[test]
fn rebinding() {
    let mut interpreter = Interpreter::default();
    eval(&mut interpreter, "x = 1");
    eval(&mut interpreter, "x = 2");
    assert_eq!(
        interpreter.force(&Value::Symbol("x".to_symbol())).unwrap(),
        Value::Integer(2)
    );
}

#[test]
fn invalid_assignments() {
    let mut interpreter = Interpreter::default();
    for line in &["1 = 2", "= 1", "x = y = 1", "cons = 1", "x 1 = 2"] {
        let err = interpreter.eval_line(line).unwrap_err();
        assert!(
            matches!(err.kind(), ErrKind::InvalidAssignment(_)),
            "{} gave {:?}",
            line,
            err
        );
    }
    assert!(interpreter.table().is_empty());
}

#[test]
fn failed_line_binds_nothing() {
    let mut interpreter = Interpreter::default();
    assert!(interpreter.eval_line("x = 1 2").is_err());
    assert!(interpreter.eval_line("x = 2x").is_err());
    assert!(interpreter.table().is_empty());
}

#[test]
fn run_tags_lines() {
    let mut interpreter = Interpreter::new(Dialect::Galaxy);
    let script = StringReader::new("a = 1\n\nb = add a 1\nc = div b 0\nadd a b\n");

    let mut seen = 0;
    let results = interpreter
        .run(script, |_, _| seen += 1)
        .collect::<Vec<_>>();
    assert_eq!(seen, 4);
    assert_eq!(results.len(), 4);

    assert_eq!(results[1].as_ref().unwrap().value(), &Value::Integer(2));
    let err = results[2].as_ref().unwrap_err();
    assert_eq!(err.line(), Some(4));
    assert!(err.to_string().starts_with("[Lang Error] line 4: "));
    assert_eq!(results[3].as_ref().unwrap().value(), &Value::Integer(3));

    assert!(!interpreter.table().contains_key(&"c".to_symbol()));
}

#[test]
fn run_sees_interpreter() {
    let mut interpreter = Interpreter::default();
    let script = StringReader::new("x = 1\ny = x");

    let mut sizes = Vec::new();
    let count = interpreter
        .run(script, |interpreter, _| sizes.push(interpreter.table().len()))
        .count();
    assert_eq!(count, 2);
    assert_eq!(sizes, vec![1, 2]);
}

#[test]
fn run_skips_blank_lines() {
    let mut interpreter = Interpreter::default();
    let script = StringReader::new("\n  \nx = 1\n\t\n");

    let results = interpreter.run(script, |_, _| {}).collect::<Vec<_>>();
    assert_eq!(results.len(), 1);
    assert!(results[0].is_ok());
}

#[test]
fn long_list_binding() {
    let line = format!("xs = {}nil", "cons 1 ".repeat(100_000));
    let mut interpreter = Interpreter::default();
    let evaluation = eval(&mut interpreter, &line);
    assert_eq!(evaluation.tokens().len(), 200_003);
    drop(evaluation);

    let xs = interpreter.force(&Value::Symbol("xs".to_symbol())).unwrap();
    assert_eq!(crate::primitive::head(&xs).unwrap(), Value::Integer(1));
    drop(xs);
    drop(interpreter);
}
