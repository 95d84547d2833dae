//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    action::ActionCommands,
    cluster::ClusterCommands,
    comp::CompCommands,
    completions::CompletionsArgs,
    dashboard::DashboardArgs,
    login::LoginArgs,
    logout::LogoutArgs,
    opp::OppCommands,
    risk::RiskCommands,
    stat::StatCommands,
    topic::TopicCommands,
    trend::TrendCommands,
    whoami::WhoamiArgs,
};

#[derive(Parser)]
#[command(name = "naradai")]
#[command(author, version, about = "NaradAI Console")]
#[command(long_about = "Terminal dashboard and content manager for the NaradAI social intelligence API.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// API base URL (default: NARADAI_API_URL or the local dev address)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with a username and password
    Login(LoginArgs),

    /// Log out and clear the stored session
    Logout(LogoutArgs),

    /// Show the current session
    Whoami(WhoamiArgs),

    /// Render the analytics dashboard
    Dashboard(DashboardArgs),

    /// Priority action management
    #[command(subcommand)]
    Action(ActionCommands),

    /// Dashboard stat card management
    #[command(subcommand)]
    Stat(StatCommands),

    /// Risk management
    #[command(subcommand)]
    Risk(RiskCommands),

    /// Opportunity management
    #[command(subcommand)]
    Opp(OppCommands),

    /// Sentiment trend management
    #[command(subcommand)]
    Trend(TrendCommands),

    /// Discussion topic management
    #[command(subcommand)]
    Topic(TopicCommands),

    /// Competitive analysis management
    #[command(subcommand)]
    Comp(CompCommands),

    /// Conversation cluster management
    #[command(subcommand)]
    Cluster(ClusterCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for list and show commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pick from config, defaulting to a table
    Auto,
    Table,
    Json,
    Csv,
    /// IDs only, one per line
    Id,
}

impl OutputFormat {
    /// Resolve `auto` to a concrete format
    pub fn resolve(self) -> OutputFormat {
        match self {
            OutputFormat::Auto => OutputFormat::Table,
            other => other,
        }
    }
}
