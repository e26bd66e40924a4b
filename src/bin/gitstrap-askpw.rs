use clap::Parser;
use eyre::Result;
use gitstrap::askpass::{self, Marker};
use gitstrap::cli::AskpwCli;
use gitstrap::config::AskpassConfig;
use gitstrap::logging;

fn main() -> Result<()> {
    let _cli = AskpwCli::parse();
    logging::init(false);

    let config = AskpassConfig::load()?;
    let marker = Marker::new(&config.marker);

    let answer = askpass::respond(&marker, &config)?;
    println!("{answer}");

    Ok(())
}
