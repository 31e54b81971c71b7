//! Ballot ledger demo harness.
//!
//! Registers the configured voters and candidates, submits every ballot in
//! order, then prints the tally and the full chain.

mod config;
mod report;

use anyhow::bail;
use ballot_election::{Election, Registration, VoterId};
use ballot_utils::LogFormat;
use clap::Parser;
use config::ScenarioConfig;
use report::{BallotReport, RunReport};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ballot", about = "Hash-chained election ledger")]
struct Cli {
    /// Path to a TOML scenario file. Omitted fields use the built-in demo.
    #[arg(long, env = "BALLOT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "BALLOT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "BALLOT_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the scenario and print results and the chain.
    Run {
        /// Print a single JSON report instead of console text.
        #[arg(long)]
        json: bool,
    },
    /// Print the effective scenario as TOML.
    PrintConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => ScenarioConfig::from_toml_file(path)?,
        None => ScenarioConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    ballot_utils::init_logging(config.log_format, &config.log_level);
    if let Some(ref path) = cli.config {
        tracing::info!("Loaded scenario from {}", path.display());
    }

    match cli.command {
        Command::Run { json } => run(&config, json),
        Command::PrintConfig => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}

fn run(config: &ScenarioConfig, json: bool) -> anyhow::Result<()> {
    let mut election = Election::new();

    for &id in &config.voters {
        let registration = election.register_voter(VoterId::new(id))?;
        if !json {
            println!("Voter {id} registered.");
            if registration == Registration::AlreadyRegistered {
                println!("Voter {id} has already registered.");
            }
        }
    }
    for name in &config.candidates {
        election.declare_candidate(name)?;
    }
    if !json {
        println!();
    }

    let mut ballots = Vec::with_capacity(config.ballots.len());
    for ballot in &config.ballots {
        let voter = VoterId::new(ballot.voter);
        let result = election.cast_vote(voter, &ballot.candidate);
        if !json {
            println!("{}", report::ballot_line(voter, &ballot.candidate, &result));
        }
        ballots.push(BallotReport::new(voter, &ballot.candidate, &result));
    }

    let results = election.get_results();
    let chain = election.get_chain();
    let chain_valid = election.verify_chain();
    let blocks = chain.length;

    if json {
        let run_report = RunReport {
            ballots,
            results,
            chain_valid,
            chain,
        };
        println!("{}", serde_json::to_string_pretty(&run_report)?);
    } else {
        print!("{}", report::results_text(&results));
        print!("{}", report::chain_text(&chain));
    }

    if !chain_valid {
        bail!("chain verification failed");
    }
    tracing::info!(blocks, "election run complete");
    Ok(())
}
