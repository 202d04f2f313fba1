//! fxconv command-line tool
//!
//! Converts one amount between currencies using the built-in rate snapshot.
//!
//! Usage:
//!   fxconv <FROM> <TO> <UNITS> [NANOS]
//!   fxconv --json '{"from": {"units": 10, "nanos": 0, "currencyCode": "EUR"}, "toCode": "USD"}'
//!   fxconv --list

use std::process::ExitCode;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxconv_core::currency::{MoneyConverter, RateTable};
use fxconv_shared::{AppConfig, AppError, AppResult, ConversionRequest, Money};

const USAGE: &str = "usage: fxconv <FROM> <TO> <UNITS> [NANOS] | fxconv --json <REQUEST> | fxconv --list";

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Convert(ConversionRequest),
    List,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("{err}");
            return ExitCode::from(status(&err));
        }
    };

    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&config, &args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Single report on stderr; the subscriber only carries events
            eprintln!("{err:#}");
            ExitCode::from(failure_status(&err))
        }
    }
}

fn run(config: &AppConfig, args: &[String]) -> anyhow::Result<String> {
    let table = RateTable::snapshot();

    match parse_args(args)? {
        Command::List => {
            let codes: Vec<&str> = table.supported_currencies().collect();
            Ok(serde_json::to_string_pretty(&serde_json::json!({
                "version": table.version(),
                "reference": table.reference_currency(),
                "currencies": codes,
            }))?)
        }
        Command::Convert(request) => {
            let converter = MoneyConverter::new(table, config.conversion);
            let converted = converter
                .convert_request(&request)
                .map_err(AppError::from)?;
            info!(from = %request.from, to = %converted, "Converted");
            serde_json::to_string_pretty(&converted).context("serializing result")
        }
    }
}

fn parse_args(args: &[String]) -> AppResult<Command> {
    match args {
        [flag] if flag == "--list" => Ok(Command::List),
        [flag, json] if flag == "--json" => serde_json::from_str(json)
            .map(Command::Convert)
            .map_err(|err| AppError::Validation(format!("invalid request JSON: {err}"))),
        [from, to, units] => Ok(Command::Convert(ConversionRequest::new(
            Money::new(parse_number(units, "UNITS")?, 0, from.as_str()),
            to.as_str(),
        ))),
        [from, to, units, nanos] => Ok(Command::Convert(ConversionRequest::new(
            Money::new(
                parse_number(units, "UNITS")?,
                parse_number(nanos, "NANOS")?,
                from.as_str(),
            ),
            to.as_str(),
        ))),
        _ => Err(AppError::Validation(USAGE.to_string())),
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, name: &str) -> AppResult<T>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|err| AppError::Validation(format!("{name} '{value}': {err}")))
}

fn status(err: &AppError) -> u8 {
    u8::try_from(err.exit_code()).unwrap_or(1)
}

fn failure_status(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<AppError>().map_or(1, status)
}
