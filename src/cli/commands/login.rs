//! `naradai login` command - authenticate and store the session

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::session;
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    /// Username (prompted if omitted)
    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// Password (prompted if omitted)
    #[arg(long, short = 'p')]
    pub password: Option<String>,
}

pub fn run(args: LoginArgs, global: &GlobalOpts) -> Result<()> {
    let session = session()?;

    let theme = ColorfulTheme::default();
    let username = match args.username {
        Some(username) => username,
        None => Input::with_theme(&theme)
            .with_prompt("Username")
            .interact_text()
            .into_diagnostic()?,
    };
    let password = match args.password {
        Some(password) => password,
        None => Password::with_theme(&theme)
            .with_prompt("Password")
            .interact()
            .into_diagnostic()?,
    };

    let user = session
        .login(&username, &password)
        .map_err(|e| miette::miette!("{}", e))?;

    if !global.quiet {
        println!(
            "{} Logged in as {} ({})",
            style("✓").green(),
            style(&user.name).cyan(),
            user.role
        );
    }
    Ok(())
}
