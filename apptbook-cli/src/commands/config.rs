use anyhow::Result;
use apptbook_core::config::AppConfig;
use owo_colors::OwoColorize;

pub fn run(cfg: &AppConfig) -> Result<()> {
    let config_path = AppConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!();
    println!("{}", "Effective settings".bold());
    print!("{}", cfg.to_toml()?);

    Ok(())
}
