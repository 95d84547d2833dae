//! `naradai whoami` command - show the current session

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::{effective_format, session};
use crate::cli::{GlobalOpts, OutputFormat};

#[derive(clap::Args, Debug)]
pub struct WhoamiArgs {}

pub fn run(_args: WhoamiArgs, global: &GlobalOpts) -> Result<()> {
    let session = session()?;
    let user = session.require_login().map_err(|e| miette::miette!("{}", e))?;

    match effective_format(global).resolve() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&user).into_diagnostic()?);
        }
        _ => {
            println!(
                "{} ({}) - role: {}",
                style(&user.name).cyan(),
                user.username,
                user.role
            );
        }
    }
    Ok(())
}
