//! `naradai logout` command - clear the stored session

use console::style;
use miette::Result;

use crate::cli::commands::session;
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct LogoutArgs {}

pub fn run(_args: LogoutArgs, global: &GlobalOpts) -> Result<()> {
    let session = session()?;
    let was_logged_in = session.current().is_some();
    session.logout().map_err(|e| miette::miette!("{}", e))?;

    if !global.quiet {
        if was_logged_in {
            println!("{} Logged out", style("✓").green());
        } else {
            println!("Not logged in.");
        }
    }
    Ok(())
}
