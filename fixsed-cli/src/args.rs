//! Command-line definitions and execution

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use crate::error::CliResult;
use crate::input;
use crate::output;
use crate::patterns::{self, PatternFormat};
use crate::rewrite::{self, Strategy};

/// Search and replace on text streams using fixed strings
#[derive(Debug, Parser)]
#[command(name = "fixsed", version, about)]
pub struct Args {
    /// File of pattern/replacement pairs (tab-separated or sed-style);
    /// .gz/.xz files are decompressed
    #[arg(value_name = "PATTERN_FILE")]
    pub pattern_file: PathBuf,

    /// Input files ("-" or nothing reads stdin); .gz/.xz files are
    /// decompressed
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Output file (default stdout; a .gz path is gzip-compressed)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub output: String,

    /// Pattern file format
    #[arg(long, value_enum, default_value = "auto")]
    pub pattern_format: FormatArg,

    /// Match patterns only on whole words
    #[arg(short, long)]
    pub words: bool,

    /// Use the slower, globally optimal replacement strategy
    #[arg(long)]
    pub slow: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Pattern file formats accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    /// Detect from the file contents
    Auto,
    /// Tab-separated `before<TAB>after`
    Tsv,
    /// Sed-style `s/before/after/`
    Sed,
}

impl From<FormatArg> for PatternFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Auto => PatternFormat::Auto,
            FormatArg::Tsv => PatternFormat::Tsv,
            FormatArg::Sed => PatternFormat::Sed,
        }
    }
}

impl Args {
    /// Execute the rewrite across all inputs.
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging()?;

        let pattern_path = self.pattern_file.to_string_lossy();
        log::info!("loading patterns from {pattern_path}");
        let pattern_text = input::read_to_string(&pattern_path)
            .with_context(|| format!("failed to load pattern file: {pattern_path}"))?;
        let (mut trie, boundaries) =
            patterns::build_trie(&pattern_text, self.pattern_format.into(), self.words)?;
        if boundaries {
            log::info!("matching on word boundaries");
        }

        let strategy = if self.slow {
            Strategy::Optimal
        } else {
            Strategy::Greedy
        };
        let mut writer = output::open_output(&self.output)?;
        let inputs = if self.inputs.is_empty() {
            vec!["-".to_string()]
        } else {
            self.inputs.clone()
        };
        let mut total = 0u64;
        for path in &inputs {
            log::info!("rewriting {path}");
            let mut reader = input::open_input(path)?;
            let lines = rewrite::rewrite_stream(
                &mut trie,
                &mut reader,
                &mut writer,
                boundaries,
                strategy,
            )?;
            total += lines;
        }
        writer.finish()?;
        log::info!("{total} lines written");
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> CliResult<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["fixsed", "patterns.tsv"]);
        assert_eq!(args.pattern_file, PathBuf::from("patterns.tsv"));
        assert!(args.inputs.is_empty());
        assert_eq!(args.output, "-");
        assert_eq!(args.pattern_format, FormatArg::Auto);
        assert!(!args.words);
        assert!(!args.slow);
    }

    #[test]
    fn test_flags_parse() {
        let args = Args::parse_from([
            "fixsed",
            "-w",
            "--slow",
            "--pattern-format",
            "sed",
            "-o",
            "out.txt",
            "patterns.sed",
            "a.txt",
            "b.txt.gz",
        ]);
        assert!(args.words);
        assert!(args.slow);
        assert_eq!(args.pattern_format, FormatArg::Sed);
        assert_eq!(args.output, "out.txt");
        assert_eq!(args.inputs, vec!["a.txt", "b.txt.gz"]);
    }
}
