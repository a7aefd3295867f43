use std::path::Path;

use anyhow::Result;

use filmreel_core::AppConfig;

pub fn run(config: &AppConfig, explicit_path: Option<&Path>, init: bool) -> Result<()> {
    let default_path = AppConfig::config_path();
    let path = explicit_path.unwrap_or(&default_path);

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else if explicit_path.is_some() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, AppConfig::default().to_toml()?)?;
            println!("Wrote default config to {}", path.display());
        } else {
            AppConfig::default().save()?;
            println!("Wrote default config to {}", path.display());
        }
        return Ok(());
    }

    let source = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("# {}{}\n", path.display(), source);
    print!("{}", config.to_toml()?);

    for check in [config.reel.validate(), config.ui.validate()] {
        if let Err(e) = check {
            println!("\n# warning: {}", e);
        }
    }

    Ok(())
}
