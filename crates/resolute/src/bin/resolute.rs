// The resolute CLI.
// Reads a problem from a file or stdin, runs the refutation and prints the
// clause listing and resolution steps, or the result as JSON.

use clap::Parser;
use resolute::json::ProofResultJson;
use resolute::{parse_problem, report, Problem, ProofResult, Prover, ProverConfig, ResoluteError};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[clap(
    name = "resolute",
    about = "A set-of-support resolution refutation prover",
    long_about = "Reads clauses, one per line with literals separated by `|`.\nClauses after a `---` line form the set of support.\nExit status: 0 proof, 1 no proof, 2 input error, 3 limit reached.",
    version = env!("CARGO_PKG_VERSION")
)]
struct Args {
    /// Problem file; stdin when omitted
    #[clap(value_name = "INPUT")]
    input: Option<PathBuf>,

    #[clap(long, help = "Print the result as JSON.")]
    json: bool,

    #[clap(
        long,
        default_value_t = 0,
        help = "Stop after this many given clauses (0 = no limit).",
        value_name = "N"
    )]
    max_iterations: usize,

    #[clap(
        long,
        default_value_t = 0,
        help = "Stop once the store holds this many clauses (0 = no limit).",
        value_name = "N"
    )]
    max_clauses: usize,

    #[clap(
        long,
        value_parser = parse_timeout,
        help = "Wall-clock limit in seconds.",
        value_name = "SECS"
    )]
    timeout: Option<Duration>,

    #[clap(short, long, help = "Log the search at debug level.")]
    verbose: bool,
}

impl Args {
    fn config(&self) -> ProverConfig {
        ProverConfig {
            max_iterations: self.max_iterations,
            max_clauses: self.max_clauses,
            timeout: self.timeout,
        }
    }
}

/// Parse a non-negative number of seconds that fits in a `Duration`
fn parse_timeout(arg: &str) -> Result<Duration, String> {
    let secs: f64 = arg
        .parse()
        .map_err(|_| format!("`{}` is not a number of seconds", arg))?;
    Duration::try_from_secs_f64(secs).map_err(|e| format!("invalid timeout `{}`: {}", arg, e))
}

fn read_problem(input: Option<&PathBuf>) -> resolute::Result<Problem> {
    match input {
        Some(path) => resolute::parse_problem_file(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(parse_problem(&text)?)
        }
    }
}

fn exit_code(result: &ProofResult) -> ExitCode {
    match result {
        ProofResult::Proof(_) => ExitCode::SUCCESS,
        ProofResult::Exhausted => ExitCode::from(1),
        ProofResult::ResourceLimit(_) => ExitCode::from(3),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; RUST_LOG overrides -v
    let default_level = if args.verbose { "resolute=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).without_time().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let problem = match read_problem(args.input.as_ref()) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();
    let mut prover = Prover::new(problem, args.config());
    let result = prover.prove();
    let elapsed = start.elapsed();

    if args.json {
        let json = ProofResultJson::from_result(&result, &prover, elapsed);
        match serde_json::to_string_pretty(&json) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("{}", ResoluteError::from(e));
                return ExitCode::from(2);
            }
        }
    } else {
        print!("{}", report::render(&prover, &result));
    }

    exit_code(&result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("2.5"), Ok(Duration::from_millis(2500)));
        assert_eq!(parse_timeout("0"), Ok(Duration::ZERO));
        assert!(parse_timeout("-1").is_err());
        assert!(parse_timeout("NaN").is_err());
        assert!(parse_timeout("1e300").is_err());
        assert!(parse_timeout("soon").is_err());
    }

    #[test]
    fn test_flags_map_onto_config() {
        let args = Args::parse_from(["resolute", "--max-clauses", "50", "--timeout", "1.5"]);
        let config = args.config();
        assert_eq!(config.max_clauses, 50);
        assert_eq!(config.max_iterations, 0);
        assert_eq!(config.timeout, Some(Duration::from_millis(1500)));
        assert!(args.input.is_none());
    }
}
