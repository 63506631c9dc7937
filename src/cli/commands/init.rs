use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and writes the default configuration file
/// if none exists yet. In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rDupCheck…");

    let path = Config::init_all(cli.test)?;
    let cfg = Config::load_from(&path)?;

    println!("📄 Config file : {}", path.display());
    println!("📂 Data folder : {}", cfg.data_path().display());
    println!("📝 Log file    : {}", cfg.log_path().display());

    if cli.test {
        info("Test mode: configuration file not written");
    }

    success("rDupCheck initialization completed!");
    Ok(())
}
