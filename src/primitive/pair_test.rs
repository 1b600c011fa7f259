use super::*;


fn long_list(len: i64) -> Value {
    (0..len).fold(Value::Nil, |tail, i| Value::cons(Value::Integer(i), tail))
}

#[test]
fn accessors() {
    let pair = Value::cons(Value::Integer(1), Value::Nil);
    assert_eq!(head(&pair).unwrap(), Value::Integer(1));
    assert_eq!(tail(&pair).unwrap(), Value::Nil);
    assert!(head(&Value::Nil).is_err());
    assert!(tail(&Value::Integer(1)).is_err());
}

#[test]
fn drop_long_list() {
    let list = long_list(200_000);
    assert_eq!(head(&list).unwrap(), Value::Integer(199_999));
    drop(list);
}

#[test]
fn drop_keeps_shared_tail() {
    let shared = long_list(100_000);
    let list = Value::cons(Value::Integer(-1), shared.clone());
    drop(list);

    assert_eq!(head(&shared).unwrap(), Value::Integer(99_999));
    let second = tail(&shared).unwrap();
    assert_eq!(head(&second).unwrap(), Value::Integer(99_998));
}
