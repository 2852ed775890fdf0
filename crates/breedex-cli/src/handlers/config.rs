//! Config command handler.

use anyhow::Result;
use breedex_core::{Settings, SettingsUpdate};

use crate::bootstrap::CliContext;
use crate::config_commands::ConfigCommand;

/// Execute the config command.
pub async fn execute(ctx: &CliContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let settings = ctx.app().settings().get().await?;
            println!("Current preferences:");
            print_settings(&settings);
        }
        ConfigCommand::Set {
            theme,
            default_species,
            page_size,
        } => {
            let update = SettingsUpdate {
                theme: theme.map(Some),
                default_species: default_species.map(Some),
                page_size: page_size.map(Some),
            };

            if update.is_empty() {
                println!("No settings provided. Use --help to see available options.");
                return Ok(());
            }

            // Validated by the settings service before anything is saved
            let updated = ctx.app().settings().update(update).await?;
            println!("✓ Preferences updated:");
            print_settings(&updated);
        }
        ConfigCommand::Reset => {
            ctx.app().settings().save(&Settings::with_defaults()).await?;
            println!("✓ All preferences have been reset to defaults.");
        }
    }
    Ok(())
}

fn print_settings(settings: &Settings) {
    println!(
        "  theme:           {}",
        settings.theme.unwrap_or_default()
    );
    println!("  default_species: {}", settings.effective_species());
    println!("  page_size:       {}", settings.effective_page_size());
}
