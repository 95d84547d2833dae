//! Command implementations

pub mod action;
pub mod cluster;
pub mod comp;
pub mod completions;
pub mod dashboard;
pub mod login;
pub mod logout;
pub mod opp;
pub mod risk;
pub mod stat;
pub mod topic;
pub mod trend;
pub mod whoami;

use console::style;
use miette::Result;

use crate::api::ApiClient;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, Session};

/// Build the API client from the layered configuration
pub(crate) fn client(global: &GlobalOpts) -> Result<ApiClient> {
    let config = Config::load();
    let url = config.api_url(global.api_url.as_deref());
    ApiClient::new(&url, config.timeout_secs()).map_err(|e| miette::miette!("{}", e))
}

/// Open the durable session store
pub(crate) fn session() -> Result<Session> {
    Session::open().map_err(|e| miette::miette!("{}", e))
}

/// Resolve the effective output format: flag first, then the configured
/// default, then the table format.
pub(crate) fn effective_format(global: &GlobalOpts) -> OutputFormat {
    if global.format != OutputFormat::Auto {
        return global.format;
    }
    match Config::load().default_format.as_deref() {
        Some("json") => OutputFormat::Json,
        Some("csv") => OutputFormat::Csv,
        Some("id") => OutputFormat::Id,
        _ => OutputFormat::Table,
    }
}

/// Success notification for mutations
pub(crate) fn notify_success(global: &GlobalOpts, message: impl std::fmt::Display) {
    if !global.quiet {
        println!("{} {}", style("✓").green(), message);
    }
}

/// Warning notification (non-fatal, e.g. dashboard fetch falling back)
pub(crate) fn notify_warning(global: &GlobalOpts, message: impl std::fmt::Display) {
    if !global.quiet {
        eprintln!("{} {}", style("!").yellow(), style(message).dim());
    }
}
