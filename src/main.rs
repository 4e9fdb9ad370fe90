use clap::Parser;
use wordgrid::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    wordgrid::logging::init(cli.debug)?;
    wordgrid::cli::run(cli)
}
