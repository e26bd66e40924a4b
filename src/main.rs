use clap::Parser;
use colored::*;
use eyre::Result;
use gitstrap::bootstrap::Bootstrap;
use gitstrap::cli::Cli;
use gitstrap::logging;
use log::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    info!("Bootstrapping {} into {}", cli.repository, cli.directory.display());

    let code = Bootstrap::new(&cli.repository, &cli.directory).run()?;
    if code != 0 {
        println!("{} Bootstrap failed with exit code {}", "✗".red(), code);
        std::process::exit(code);
    }

    println!(
        "{} Cloned {} into {}",
        "✓".green(),
        cli.repository.cyan(),
        cli.directory.display()
    );

    Ok(())
}
