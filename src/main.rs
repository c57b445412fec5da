use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, error};
use shamir_rational::radix::{self, Radix};
use shamir_rational::share::ShareInput;
use shamir_rational::{deal, interpolate, Method};
use thiserror::Error;

#[derive(Error, Debug)]
enum CliError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed test case: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Shamir(#[from] shamir_rational::Error),

    #[error("{0}")]
    Usage(String),
}

fn cli() -> Command {
    Command::new("shamir-rational")
        .about("Exact Shamir secret reconstruction over the rationals")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Log progress (-v for debug, -vv for trace)"),
        )
        .subcommand(
            Command::new("reconstruct")
                .about("Recover the secret from a JSON test case")
                .arg(
                    Arg::new("file")
                        .default_value("test_case.json")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("method")
                        .short('m')
                        .long("method")
                        .default_value("all")
                        .value_parser(["all", "lagrange", "gauss", "linear"]),
                ),
        )
        .subcommand(
            Command::new("split")
                .about("Split a secret into shares and print them as a JSON test case")
                .arg(Arg::new("secret").required(true))
                .arg(
                    Arg::new("shares")
                        .short('n')
                        .long("shares")
                        .required(true)
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("threshold")
                        .short('k')
                        .long("threshold")
                        .required(true)
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("base")
                        .long("base")
                        .default_value("16")
                        .value_parser(value_parser!(u32))
                        .help("Base used to encode the share values"),
                )
                .arg(
                    Arg::new("secret-base")
                        .long("secret-base")
                        .default_value("10")
                        .value_parser(value_parser!(u32))
                        .help("Base the secret is written in"),
                ),
        )
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_test_case(path: &Path) -> Result<ShareInput, CliError> {
    let data = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(serde_json::from_str(&data)?)
}

fn reconstruct(args: &ArgMatches) -> Result<bool, CliError> {
    let path = args
        .get_one::<PathBuf>("file")
        .ok_or_else(|| CliError::Usage("missing test case file".into()))?;
    let input = read_test_case(path)?;
    debug!("read {} entries from {}", input.shares.len(), path.display());
    let set = input.point_set()?;

    let method = args.get_one::<String>("method").map(String::as_str);
    match method {
        None | Some("all") => {
            let rec = interpolate::reconstruct_all(&set)?;
            for method in Method::ALL {
                println!("{method:>8}: c = {}", rec.get(method));
            }
            match rec.secret() {
                Ok(secret) => {
                    println!("c = {secret}");
                    Ok(true)
                }
                Err(err) => {
                    error!("{err}");
                    Ok(false)
                }
            }
        }
        Some(name) => {
            let method: Method = name.parse().map_err(CliError::Usage)?;
            let secret = interpolate::reconstruct_secret(&set, method)?;
            println!("c = {secret}");
            Ok(true)
        }
    }
}

fn split(args: &ArgMatches) -> Result<bool, CliError> {
    let usage = |name: &str| CliError::Usage(format!("missing argument {name}"));
    let secret = args.get_one::<String>("secret").ok_or_else(|| usage("secret"))?;
    let n = *args.get_one::<usize>("shares").ok_or_else(|| usage("shares"))?;
    let k = *args.get_one::<usize>("threshold").ok_or_else(|| usage("threshold"))?;
    let base = Radix::new(*args.get_one::<u32>("base").ok_or_else(|| usage("base"))?)?;
    let secret_base =
        Radix::new(*args.get_one::<u32>("secret-base").ok_or_else(|| usage("secret-base"))?)?;

    let secret = radix::decode(secret, secret_base)?;
    let input = deal::split(&secret, n, k, base, &mut rand::rng())?;
    println!("{}", serde_json::to_string_pretty(&input)?);
    Ok(true)
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_logger(matches.get_count("verbose"));

    let res = match matches.subcommand() {
        Some(("reconstruct", args)) => reconstruct(args),
        Some(("split", args)) => split(args),
        _ => Err(CliError::Usage("unknown subcommand".into())),
    };
    match res {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn parses_reconstruct_defaults() {
        let m = cli().try_get_matches_from(["shamir-rational", "reconstruct"]).unwrap();
        let (name, args) = m.subcommand().unwrap();
        assert_eq!(name, "reconstruct");
        assert_eq!(args.get_one::<PathBuf>("file").unwrap(), Path::new("test_case.json"));
        assert_eq!(args.get_one::<String>("method").unwrap(), "all");
    }

    #[test]
    fn rejects_unknown_method() {
        assert!(cli()
            .try_get_matches_from(["shamir-rational", "reconstruct", "-m", "newton"])
            .is_err());
    }
}
