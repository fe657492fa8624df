#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod layout;
pub mod mapping;
pub mod renamer;
pub mod walker;

pub use error::*;

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::CoverCli::parse();
    init_logging(&cli);

    command::convert::execute(&layout::Layout::default())?;
    Ok(())
}

fn init_logging(cli: &cli::CoverCli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level() {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}
