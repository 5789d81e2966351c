use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::classify::Classifier;
use crate::cli::Args;
use crate::count;
use crate::error::WordFreqError;
use crate::locale::Locale;
use crate::rank;
use crate::report;

/// Runs one batch: read, count, rank, write.
///
/// The output file is only touched after counting and ranking have finished,
/// so no failure before that leaves a partial report behind.
pub fn run(args: &Args) -> Result<()> {
    let text = load_input(&args.input).context("failed to load input")?;
    let locale = Locale::from_env().context("failed to prepare case folding")?;

    let classifier = Classifier::new();
    let counts = count::aggregate(&text, &classifier, &locale);
    let entries = rank::rank(counts);

    report::write_file(&args.output, &entries).context("failed to write report")?;
    Ok(())
}

/// Reads the whole input and decodes it as UTF-8, failing fast on the first
/// invalid byte sequence.
fn load_input(path: &Path) -> crate::error::Result<String> {
    let bytes = fs::read(path).map_err(|source| WordFreqError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|err| WordFreqError::Decode {
        path: path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })
}
