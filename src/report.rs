//! Report serialization: one `<count> <word>` line per entry.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, WordFreqError};
use crate::rank::RankedEntry;

pub fn render<W: Write>(mut out: W, entries: &[RankedEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{} {}", entry.count, entry.word)?;
    }
    out.flush()
}

/// Creates or truncates `path` and writes the full report to it.
pub fn write_file(path: &Path, entries: &[RankedEntry]) -> Result<()> {
    let to_error = |source: io::Error| WordFreqError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    render(BufWriter::new(file), entries).map_err(to_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(count: u64, word: &str) -> RankedEntry {
        RankedEntry { count, word: word.to_owned() }
    }

    #[test]
    fn renders_count_space_word_lines() {
        let mut buf = Vec::new();
        render(&mut buf, &[entry(3, "the"), entry(2, "cat"), entry(1, "on")]).unwrap();
        assert_eq!(buf, b"3 the\n2 cat\n1 on\n");
    }

    #[test]
    fn empty_report_is_empty_output() {
        let mut buf = Vec::new();
        render(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn words_are_written_as_utf8() {
        let mut buf = Vec::new();
        render(&mut buf, &[entry(1, "кошка")]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 кошка\n");
    }
}
