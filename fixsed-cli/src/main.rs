//! fixsed binary entry point

use clap::Parser;
use fixsed_cli::args::Args;

fn main() {
    let args = Args::parse();
    if let Err(err) = args.execute() {
        eprintln!("fixsed: {err:#}");
        std::process::exit(1);
    }
}
