/// Parses a JSON literal into an optional value and prints what came out.
///
/// ```text
/// cargo run --example parse_json -- -t int 42
/// cargo run --example parse_json -- -t bool null
/// ```
use clap::*;
use log::{info, Level};

use optional::prelude::v1::*;

fn main() {
    let matches = parse_args();
    init_logger(&matches);

    let literal = matches
        .get_one::<String>("literal")
        .expect("literal is required");
    let kind = matches
        .get_one::<String>("type")
        .map(String::as_str)
        .unwrap_or("string");

    let result = match kind {
        "int" => describe::<i64>(literal),
        "bool" => describe::<bool>(literal),
        "float" => describe::<f64>(literal),
        _ => describe::<String>(literal),
    };

    match result {
        Ok(description) => println!("{}", description),
        Err(err) => {
            eprintln!("unable to parse `{}` as {}: {}", literal, kind, err);
            std::process::exit(1);
        }
    }
}

fn describe<T>(literal: &str) -> serde_json::Result<String>
where
    T: serde::de::DeserializeOwned + serde::Serialize + std::fmt::Debug + std::fmt::Display,
{
    let mut value = Optional::<T>::empty();
    value.unmarshal_json(literal.as_bytes())?;
    info!("parsed {:?}", value);

    Ok(format!(
        "value: {}\ndebug: {:?}\njson:  {}",
        value,
        value,
        value.to_json_string()?
    ))
}

fn parse_args() -> ArgMatches {
    Command::new("parse_json example")
        .version(crate_version!())
        .arg(Arg::new("verbose").short('v').action(ArgAction::Count))
        .arg(
            Arg::new("type")
                .long("type")
                .short('t')
                .action(ArgAction::Set)
                .value_parser(["int", "bool", "float", "string"])
                .required(false),
        )
        .arg(Arg::new("literal").action(ArgAction::Set).required(true))
        .get_matches()
}

fn init_logger(matches: &ArgMatches) {
    let log_level = match matches.get_count("verbose") {
        0 => Level::Error,
        1 => Level::Warn,
        2 => Level::Info,
        3 => Level::Debug,
        4 => Level::Trace,
        _ => Level::Trace,
    };
    simplelog::TermLogger::init(
        log_level.to_level_filter(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    )
    .unwrap();
}
