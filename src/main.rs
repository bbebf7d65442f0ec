use std::cmp::Ordering;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use rpmvercmp::{Dependency, DependencyFlags, Evr, latest, sort_by_version};

/// Compare RPM versions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// More logging, may be repeated
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print how two [epoch:]version[-release] strings relate.
    ///
    /// Exits with 0 if they are equal, 11 if the first one is newer and 12 if it is older.
    Compare { evr1: String, evr2: String },

    /// Exit with 0 if the relation holds, 1 if it doesn't
    Check {
        evr1: String,
        /// One of <, <=, =, ==, >=, >, != (or lt, le, eq, ge, gt, ne)
        #[arg(allow_hyphen_values = true)]
        operator: DependencyFlags,
        evr2: String,
    },

    /// Print versions from oldest to newest
    Sort {
        /// Only print the newest version
        #[arg(long)]
        latest: bool,

        #[arg(required = true)]
        evrs: Vec<String>,
    },
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// The relation between two EVRs and the exit status reporting it
fn compare(evr1: &str, evr2: &str) -> (&'static str, u8) {
    match Evr::parse(evr1).cmp(&Evr::parse(evr2)) {
        Ordering::Equal => ("==", 0),
        Ordering::Greater => (">", 11),
        Ordering::Less => ("<", 12),
    }
}

fn check(evr1: &str, operator: DependencyFlags, evr2: &str) -> bool {
    // the left-hand side takes the role of the installed package
    let constraint = Dependency::new("", operator, Evr::parse(evr2));
    constraint.is_satisfied_by(&Evr::parse(evr1))
}

fn sort(evrs: &[String], latest_only: bool) -> Vec<String> {
    let evrs = evrs.iter().map(|evr| Evr::parse(evr)).collect::<Vec<_>>();
    if latest_only {
        latest(&evrs).into_iter().map(ToString::to_string).collect()
    } else {
        sort_by_version(&evrs)
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();
    log::debug!("{:?}", cli);

    match &cli.command {
        Command::Compare { evr1, evr2 } => {
            let (symbol, code) = compare(evr1, evr2);
            println!("{evr1} {symbol} {evr2}");
            ExitCode::from(code)
        }
        Command::Check {
            evr1,
            operator,
            evr2,
        } => {
            if check(evr1, *operator, evr2) {
                ExitCode::SUCCESS
            } else {
                log::info!("{evr1} {operator} {evr2} does not hold");
                ExitCode::FAILURE
            }
        }
        Command::Sort { latest, evrs } => {
            for evr in sort(evrs, *latest) {
                println!("{evr}");
            }
            ExitCode::SUCCESS
        }
    }
}
