//! Output sink handling

use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// An open text sink. Close it with [`OutputSink::finish`]; for gzip
/// sinks the trailer is only written there, and dropping the sink
/// instead would discard any error from that final write.
pub enum OutputSink {
    /// Standard output
    Stdout(BufWriter<io::Stdout>),
    /// Plain file
    File(BufWriter<File>),
    /// Gzip-compressed file
    Gzip(BufWriter<GzEncoder<File>>),
}

/// Open a text sink. `-` writes stdout; a path ending in `.gz` is
/// gzip-compressed.
pub fn open_output(path: &str) -> Result<OutputSink> {
    if path == "-" {
        return Ok(OutputSink::Stdout(BufWriter::new(io::stdout())));
    }
    let file =
        File::create(path).with_context(|| format!("failed to create output file: {path}"))?;
    if path.to_ascii_lowercase().ends_with(".gz") {
        Ok(OutputSink::Gzip(BufWriter::new(GzEncoder::new(
            file,
            Compression::default(),
        ))))
    } else {
        Ok(OutputSink::File(BufWriter::new(file)))
    }
}

impl OutputSink {
    /// Flush buffered data and close the stream, propagating any write
    /// error from the gzip trailer.
    pub fn finish(self) -> Result<()> {
        match self {
            OutputSink::Stdout(mut writer) => writer.flush()?,
            OutputSink::File(mut writer) => writer.flush()?,
            OutputSink::Gzip(writer) => {
                let encoder = writer.into_inner().map_err(|err| err.into_error())?;
                encoder.finish().context("failed to finish gzip output")?;
            }
        }
        Ok(())
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::Stdout(writer) => writer.write(buf),
            OutputSink::File(writer) => writer.write(buf),
            OutputSink::Gzip(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::Stdout(writer) => writer.flush(),
            OutputSink::File(writer) => writer.flush(),
            OutputSink::Gzip(writer) => writer.flush(),
        }
    }
}
