//! Builtin procedures and the application engine behind `ap`.
//!
//! Every builtin is curried: it is invoked with one argument at a time and
//! only runs once all `arity` arguments are in. Arguments arrive unresolved;
//! a builtin forces a Symbol argument only when it needs its value.

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::convert::TryFrom;

use crate::env::SymbolTable;
use crate::error::{ErrKind, Error};
use crate::primitive::builtin::{Args, Ret};
use crate::primitive::{BuiltIn, Value};


pub const APPLY: &str = "ap";

macro_rules! builtins {
    [$($name:literal : $arity:literal => $fun:ident),+ $(,)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert($name, BuiltIn::new($name, $arity, $fun));
            )+
            m
        }
    };
}

lazy_static! {
    /// Builtins always available.
    pub static ref CORE_BUILTINS: HashMap<&'static str, BuiltIn> = builtins![
        "cons": 2 => cons,
        "vec": 2 => cons,
        "ap": 2 => ap,
        "f": 2 => second,
    ];

    /// The remaining galaxy combinators and arithmetic.
    pub static ref GALAXY_BUILTINS: HashMap<&'static str, BuiltIn> = builtins![
        "t": 2 => first,
        "i": 1 => identity,
        "inc": 1 => inc,
        "dec": 1 => dec,
        "neg": 1 => neg,
        "pwr2": 1 => pwr2,
        "add": 2 => add,
        "mul": 2 => mul,
        "div": 2 => div,
        "eq": 2 => eq,
        "lt": 2 => lt,
        "s": 3 => s,
        "c": 3 => c,
        "b": 3 => b,
        "car": 1 => car,
        "cdr": 1 => cdr,
        "isnil": 1 => isnil,
    ];
}


/// Apply `f` to `x`, resolving `f` only now.
///
/// A pair in function position dispatches on its components: `(h, t) x`
/// is `x h t`.
pub fn apply_value(f: &Value, x: Value, table: &SymbolTable) -> Ret {
    match table.force(f)? {
        Value::Procedure(procedure) => procedure.call(x, table),
        Value::Pair(pair) => {
            let routed = apply_value(&x, pair.head().clone(), table)?;
            apply_value(&routed, pair.tail().clone(), table)
        }
        other => err!(Type {
            given: other,
            reason: "not a function".into(),
        }),
    }
}

/// Collapse an `ap` that got its function operand but never its argument.
///
/// `ap f x` is `f x`, so a lone `ap f` behaves exactly like `f`. Any other
/// value is returned untouched.
pub fn settle(value: Value) -> Value {
    if let Value::Procedure(procedure) = &value {
        if procedure.builtin().name() == APPLY {
            if let [operand] = procedure.args().as_slice() {
                return operand.clone();
            }
        }
    }
    value
}

pub fn boolean(b: bool) -> Value {
    if b {
        BuiltIn::new("t", 2, first).into()
    } else {
        BuiltIn::new("f", 2, second).into()
    }
}


fn arguments<const N: usize>(args: Args) -> Result<[Value; N], Error> {
    <[Value; N]>::try_from(args).map_err(|args| Error::new(ErrKind::MalformedExpression(args)))
}

fn integer(value: &Value, table: &SymbolTable) -> Result<i64, Error> {
    match table.force(value)? {
        Value::Integer(i) => Ok(i),
        other => err!(Type {
            given: other,
            reason: "not an integer".into(),
        }),
    }
}

fn cons(args: Args, _table: &SymbolTable) -> Ret {
    let [head, tail] = arguments::<2>(args)?;
    Ok(Value::cons(head, tail))
}

fn ap(args: Args, table: &SymbolTable) -> Ret {
    let [f, x] = arguments::<2>(args)?;
    apply_value(&f, x, table)
}

fn first(args: Args, _table: &SymbolTable) -> Ret {
    let [x, _y] = arguments::<2>(args)?;
    Ok(x)
}

fn second(args: Args, _table: &SymbolTable) -> Ret {
    let [_x, y] = arguments::<2>(args)?;
    Ok(y)
}

fn identity(args: Args, _table: &SymbolTable) -> Ret {
    let [x] = arguments::<1>(args)?;
    Ok(x)
}

fn inc(args: Args, table: &SymbolTable) -> Ret {
    let [n] = arguments::<1>(args)?;
    Ok(integer(&n, table)?.wrapping_add(1).into())
}

fn dec(args: Args, table: &SymbolTable) -> Ret {
    let [n] = arguments::<1>(args)?;
    Ok(integer(&n, table)?.wrapping_sub(1).into())
}

fn neg(args: Args, table: &SymbolTable) -> Ret {
    let [n] = arguments::<1>(args)?;
    Ok(integer(&n, table)?.wrapping_neg().into())
}

fn pwr2(args: Args, table: &SymbolTable) -> Ret {
    let [n] = arguments::<1>(args)?;
    let exp = integer(&n, table)?;
    match u32::try_from(exp) {
        Ok(exp) => Ok(2i64.wrapping_pow(exp).into()),
        Err(_) => err!(Arithmetic(format!("pwr2 of {}", exp).into())),
    }
}

fn add(args: Args, table: &SymbolTable) -> Ret {
    let [a, b] = arguments::<2>(args)?;
    Ok(integer(&a, table)?
        .wrapping_add(integer(&b, table)?)
        .into())
}

fn mul(args: Args, table: &SymbolTable) -> Ret {
    let [a, b] = arguments::<2>(args)?;
    Ok(integer(&a, table)?
        .wrapping_mul(integer(&b, table)?)
        .into())
}

fn div(args: Args, table: &SymbolTable) -> Ret {
    let [a, b] = arguments::<2>(args)?;
    let (a, b) = (integer(&a, table)?, integer(&b, table)?);
    if b == 0 {
        return err!(Arithmetic(format!("{} divided by zero", a).into()));
    }
    Ok(a.wrapping_div(b).into())
}

fn eq(args: Args, table: &SymbolTable) -> Ret {
    let [a, b] = arguments::<2>(args)?;
    Ok(boolean(integer(&a, table)? == integer(&b, table)?))
}

fn lt(args: Args, table: &SymbolTable) -> Ret {
    let [a, b] = arguments::<2>(args)?;
    Ok(boolean(integer(&a, table)? < integer(&b, table)?))
}

fn s(args: Args, table: &SymbolTable) -> Ret {
    let [x, y, z] = arguments::<3>(args)?;
    let xz = apply_value(&x, z.clone(), table)?;
    let yz = apply_value(&y, z, table)?;
    apply_value(&xz, yz, table)
}

fn c(args: Args, table: &SymbolTable) -> Ret {
    let [x, y, z] = arguments::<3>(args)?;
    let xz = apply_value(&x, z, table)?;
    apply_value(&xz, y, table)
}

fn b(args: Args, table: &SymbolTable) -> Ret {
    let [x, y, z] = arguments::<3>(args)?;
    let yz = apply_value(&y, z, table)?;
    apply_value(&x, yz, table)
}

fn car(args: Args, table: &SymbolTable) -> Ret {
    let [x] = arguments::<1>(args)?;
    crate::primitive::head(&table.force(&x)?)
}

fn cdr(args: Args, table: &SymbolTable) -> Ret {
    let [x] = arguments::<1>(args)?;
    crate::primitive::tail(&table.force(&x)?)
}

fn isnil(args: Args, table: &SymbolTable) -> Ret {
    let [x] = arguments::<1>(args)?;
    Ok(boolean(table.force(&x)?.is_nil()))
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
