//! Input stream handling with transparent decompression

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use xz2::read::XzDecoder;

/// Open a text source for line-oriented reading.
///
/// `-` reads stdin; paths ending in `.gz` or `.xz` are decompressed on
/// the fly.
pub fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file =
        File::open(path).with_context(|| format!("failed to open input file: {path}"))?;
    let lower = path.to_ascii_lowercase();
    let reader: Box<dyn Read> = if lower.ends_with(".gz") {
        Box::new(GzDecoder::new(file))
    } else if lower.ends_with(".xz") {
        Box::new(XzDecoder::new(file))
    } else {
        Box::new(file)
    };
    Ok(Box::new(BufReader::new(reader)))
}

/// Read a whole input (possibly compressed) into a string.
pub fn read_to_string(path: &str) -> Result<String> {
    let mut reader = open_input(path)?;
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .with_context(|| format!("failed to read input as UTF-8: {path}"))?;
    Ok(text)
}
