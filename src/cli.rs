// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wordfreq", version, about = "単語頻度の集計ツール (Unicode対応)")]
pub struct Args {
    /// Input text file, decoded as UTF-8
    pub input: PathBuf,

    /// Report destination, created or truncated
    pub output: PathBuf,
}
