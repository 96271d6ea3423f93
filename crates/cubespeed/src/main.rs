//! Command-line 3x3x3 cube puzzle simulator.

mod cli;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install()?;
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args.subcommand)
}
