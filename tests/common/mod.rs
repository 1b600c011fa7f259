use galaxy::error::Error;
use galaxy::primitive::Value;
use galaxy::stream::input::StringReader;
use galaxy::token::Dialect;
use galaxy::Interpreter;


pub fn setup(dialect: Dialect) -> Interpreter {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    Interpreter::new(dialect)
}

/// Values of every non-blank line, as reduced.
pub fn results<S: AsRef<str>>(interpreter: &mut Interpreter, s: S) -> Vec<Value> {
    results_with_errors(interpreter, s)
        .into_iter()
        .map(|e| e.unwrap())
        .collect::<Vec<_>>()
}

/// Values of every non-blank line, resolved through the table afterwards.
pub fn forced<S: AsRef<str>>(interpreter: &mut Interpreter, s: S) -> Vec<Value> {
    let values = results(interpreter, s);
    values
        .iter()
        .map(|value| interpreter.force(value).unwrap())
        .collect::<Vec<_>>()
}

pub fn results_with_errors<S: AsRef<str>>(
    interpreter: &mut Interpreter,
    s: S,
) -> Vec<Result<Value, Error>> {
    interpreter
        .run(StringReader::new(s), |_, _| {})
        .map(|res| res.map(|evaluation| evaluation.consume().1))
        .collect::<Vec<_>>()
}
