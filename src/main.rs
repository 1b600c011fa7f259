//! Galaxy script runner and REPL.
//!
//! Run a script as:        `galaxy path/to/script.txt` (`-` reads stdin).
//! Run interactively as:   `RUST_LOG=info galaxy`.
//!
//! Scripts stop at the first failing line unless `--keep-going` is given;
//! the REPL always carries on.

use clap::{App, Arg};
use log::LevelFilter;
use std::io;

use galaxy::error::Error;
use galaxy::interpreter::is_blank;
use galaxy::primitive::Value;
use galaxy::printer::{render, render_tokens};
use galaxy::stream::cli_stream::CliStream;
use galaxy::stream::input::LineReader;
use galaxy::token::Dialect;
use galaxy::{Evaluation, Interpreter};


struct Options {
    echo: bool,
    keep_going: bool,
}

fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = App::new("galaxy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Evaluate galaxy notation from a script or interactively")
        .arg(
            Arg::new("script")
                .help("Script to run; - reads stdin, none starts a REPL")
                .index(1),
        )
        .arg(
            Arg::new("dialect")
                .short('d')
                .long("dialect")
                .value_name("DIALECT")
                .default_value("core")
                .help("Keyword set to lex with: core or galaxy"),
        )
        .arg(
            Arg::new("keep-going")
                .short('k')
                .long("keep-going")
                .help("Keep evaluating a script after a line fails"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not echo lexed tokens"),
        )
        .get_matches();

    let dialect = match matches.value_of("dialect").unwrap_or("core").parse::<Dialect>() {
        Ok(dialect) => dialect,
        Err(err) => return Err(err.to_string()),
    };
    let options = Options {
        echo: !matches.is_present("quiet"),
        keep_going: matches.is_present("keep-going"),
    };

    let mut interpreter = Interpreter::new(dialect);
    match matches.value_of("script") {
        None => interactive_repl(&mut interpreter, &options),
        Some("-") => {
            let stdin = io::stdin();
            run_script(&mut interpreter, LineReader::stdin(&stdin), &options)
        }
        Some(path) => {
            let reader = match LineReader::open(path) {
                Ok(reader) => reader,
                Err(err) => return Err(format!("{}: {}", path, err)),
            };
            run_script(&mut interpreter, reader, &options)
        }
    }
}

fn run_script<I>(interpreter: &mut Interpreter, lines: I, options: &Options) -> Result<(), String>
where
    I: Iterator<Item = Result<String, Error>>,
{
    let mut failed: usize = 0;
    let results = interpreter.run(lines, |interpreter, result| {
        print_result(interpreter, result, options.echo)
    });
    for result in results {
        if let Err(err) = result {
            if !options.keep_going {
                return Err(err.to_string());
            }
            failed += 1;
        }
    }

    match failed {
        0 => Ok(()),
        n => Err(format!("{} line(s) failed", n)),
    }
}

fn interactive_repl(interpreter: &mut Interpreter, options: &Options) -> Result<(), String> {
    let mut stream = CliStream::new(interpreter.dialect());
    while let Some(line) = stream.next() {
        if matches!(&line, Ok(line) if is_blank(line)) {
            continue;
        }
        let result = line.and_then(|line| interpreter.eval_line(line));

        print_result(interpreter, &result, options.echo);
        if let Ok(evaluation) = &result {
            if let Some((symbol, _)) = evaluation.binding() {
                stream.learn_name(symbol);
            }
        }
        println!();
    }
    Ok(())
}

fn print_result(interpreter: &Interpreter, result: &Result<Evaluation, Error>, echo: bool) {
    match result {
        Ok(evaluation) => {
            if echo {
                println!("{}", render_tokens(evaluation.tokens()));
            }

            let value = evaluation.value();
            print!("-> {}", render(value));
            // Show what a bare name currently stands for.
            if let Value::Symbol(_) = value {
                if let Ok(forced) = interpreter.force(value) {
                    print!(" => {}", render(&forced));
                }
            }
            println!();

            if let Some((symbol, _)) = evaluation.binding() {
                println!("stored into {}", symbol);
            }
        }
        Err(err) => {
            println!(" {}", err);
        }
    }
}
