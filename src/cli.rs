// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the git repository to mine
    #[arg(short, long)]
    pub repo: PathBuf,

    /// Directory to write the collected pairs into
    #[arg(short, long)]
    pub output: PathBuf,

    /// File extension to accept; repeat the flag for several
    #[arg(long = "ext", value_name = "EXT", default_values_t = [String::from(".java"), String::from(".py")])]
    pub extensions: Vec<String>,

    /// Number of pairs to collect before stopping
    #[arg(long, default_value_t = 25)]
    pub pairs: u32,

    /// Smallest accepted line count, checked on both sides of a pair
    #[arg(long, default_value_t = 25)]
    pub min_lines: usize,

    /// Largest accepted line count, checked on both sides of a pair
    #[arg(long, default_value_t = 30)]
    pub max_lines: usize,

    /// How undecodable bytes in file contents are handled
    #[arg(long, value_enum, default_value_t = DecodeMode::Drop)]
    pub decode: DecodeMode,
}

#[derive(clap::ValueEnum, Clone, Debug, Copy)]
pub enum DecodeMode {
    /// Drop invalid UTF-8 sequences and keep the rest of the file
    Drop,
    /// Skip files whose contents are not valid UTF-8
    Strict,
}
