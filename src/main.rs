// src/main.rs

mod cli;
mod error;
mod filter;
mod history;
mod miner;
mod model;
mod writer;

use clap::Parser;
use cli::Args;
use error::MinerError;
use filter::FilterRules;
use history::GitHistory;
use miner::MineSummary;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use writer::PairWriter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let start_time = Instant::now();

    match run(&args) {
        Ok(summary) => {
            if summary.target_reached() {
                println!("Collected {} ({}) pairs.", summary.collected, summary.target);
            } else {
                println!("Finished, collected {} pairs in total.", summary.collected);
            }
            println!("Total time: {:.2?}", start_time.elapsed());
        }
        Err(e) => {
            eprintln!("Error mining repository: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<MineSummary, MinerError> {
    let history = GitHistory::open(&args.repo, args.decode)?;
    let rules = FilterRules {
        extensions: args.extensions.clone(),
        min_lines: args.min_lines,
        max_lines: args.max_lines,
    };
    let writer = PairWriter::create(&args.output, args.pairs)?;
    miner::mine(history, &rules, &writer, args.pairs)
}
