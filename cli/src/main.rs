use std::io::{self, BufWriter};

use clap::Parser;
use undigraph_cli::config::Settings;
use undigraph_cli::logging;

fn main() -> anyhow::Result<()> {
    let settings = Settings::parse();
    logging::init_tracing();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    undigraph_cli::run(&settings, &mut out)
}
