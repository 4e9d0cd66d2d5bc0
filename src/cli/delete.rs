//! Delete command implementation

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::resources::Kind;

pub async fn run(kind: Kind, id: &str, yes: bool, opts: &GlobalOptions) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete {} '{}'?", kind, id))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let ctx = CommandContext::new(opts).await?;
    kind.delete(&ctx.client, id).await?;

    println!("{} Deleted {}: {}", "✓".green(), kind, id);
    Ok(())
}
