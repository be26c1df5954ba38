use crate::cli::ConfigAction;
use crate::config::Config;
use anyhow::{bail, Context, Result};

pub fn run(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            if let Some(config_path) = Config::path() {
                println!("# {}", config_path.display());
            }
            print!("{}", toml::to_string_pretty(&Config::load())?);
        }
        ConfigAction::Init { force } => {
            let config_path = Config::path().context("No config directory available")?;
            if config_path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                );
            }
            let written = Config::default().save()?;
            println!("Wrote {}", written.display());
        }
    }
    Ok(())
}
