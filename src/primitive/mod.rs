//! Representation of runtime values.

pub mod builtin;
pub mod pair;
pub mod procedure;
pub mod symbol;
pub mod value;

pub use self::builtin::BuiltIn;
pub use self::pair::{head, tail, Pair};
pub use self::procedure::Procedure;
pub use self::symbol::{Symbol, ToSymbol};
pub use self::value::Value;

pub mod prelude {
    pub use super::{head, tail, BuiltIn, Pair, Procedure, Symbol, ToSymbol, Value};
}
