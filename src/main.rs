use std::io;

use clap::Parser;
use dirsync::config::{Cli, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from(cli);

    let mut stdout = io::stdout().lock();
    dirsync::sync::run(&config, &mut stdout)?;
    Ok(())
}
