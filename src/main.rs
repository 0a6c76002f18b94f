use std::error::Error;

use clap::Parser;
use repofetch::{cli::args::CliArgs, Repofetch};

fn run() -> Result<(), Box<dyn Error>> {
    let cli_args = CliArgs::parse();

    let mut builder = Repofetch::builder();
    if let Some(tmp_dir) = cli_args.tmp_dir {
        builder = builder.tmp_dir(tmp_dir);
    }
    let repofetch = builder.try_build()?;

    let path = repofetch.fetch(&cli_args.name, &cli_args.branch, cli_args.commit.as_deref())?;
    println!("{}", path.display());

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
