//! Validate combat config files.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;

use crate::utils;

/// Validate a combat config file
#[derive(Parser, Debug)]
pub struct CheckConfig {
    /// Config file to check (defaults to the bundled combat.toml)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Print the resolved config as JSON
    #[arg(long)]
    json: bool,
}

impl CheckConfig {
    pub fn execute(self) -> Result<()> {
        let path = self
            .path
            .unwrap_or_else(|| utils::content_dir().join("combat.toml"));
        let config = utils::resolve_config(Some(path.as_path()))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&config)?);
            return Ok(());
        }

        println!("{} {}", style("✓").green().bold(), path.display());
        println!("  alert_radius              {}", config.alert_radius);
        println!("  step_delay_ms             {}", config.step_delay_ms);
        println!("  melee_flourish_ticks      {}", config.melee_flourish_ticks);
        println!("  projectile_ticks_per_step {}", config.projectile_ticks_per_step);
        println!("  projection_range          {}", config.projection_range);
        Ok(())
    }
}
