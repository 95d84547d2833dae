//! `naradai action` command - priority action management

use clap::{Subcommand, ValueEnum};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::api::ListQuery;
use crate::cli::commands::{client, effective_format, notify_success, session};
use crate::cli::helpers::{escape_csv, format_count, format_sentiment, format_short_id, truncate_str};
use crate::cli::{forms, table, GlobalOpts, OutputFormat};
use crate::core::ActionStore;
use crate::entities::action::{
    ActionDraft, ActionPriority, ActionStatus, Effort, Impact, PriorityAction,
};
use crate::entities::{Icon, Resource, Trajectory};

#[derive(Subcommand, Debug)]
pub enum ActionCommands {
    /// List priority actions with filtering
    List(ListArgs),

    /// Show an action's details
    Show(ShowArgs),

    /// Create a new priority action
    New(NewArgs),

    /// Edit a priority action interactively
    Edit(EditArgs),

    /// Delete a priority action
    Rm(RmArgs),

    /// Change only the workflow status
    Status(StatusArgs),

    /// Render the share text for an action
    Share(ShareArgs),
}

/// Priority filter
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PriorityFilter {
    Critical,
    High,
    Medium,
    All,
}

impl PriorityFilter {
    fn as_param(self) -> Option<String> {
        match self {
            PriorityFilter::All => None,
            other => Some(format!("{:?}", other).to_lowercase()),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by priority
    #[arg(long, short = 'p', default_value = "all")]
    pub priority: PriorityFilter,

    /// Limit output to N items
    #[arg(long, short = 'n')]
    pub limit: Option<u64>,

    /// Skip the first N items
    #[arg(long)]
    pub offset: Option<u64>,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Action ID
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Title (min 3 characters)
    #[arg(long, required_unless_present = "interactive")]
    pub title: Option<String>,

    /// Description (min 10 characters)
    #[arg(long, required_unless_present = "interactive")]
    pub description: Option<String>,

    /// Recommendation (min 10 characters)
    #[arg(long, required_unless_present = "interactive")]
    pub recommendation: Option<String>,

    /// Priority
    #[arg(long, short = 'p', default_value = "medium")]
    pub priority: PriorityChoice,

    /// Expected impact
    #[arg(long, default_value = "medium")]
    pub impact: ImpactChoice,

    /// Estimated effort
    #[arg(long, default_value = "medium")]
    pub effort: EffortChoice,

    /// Mention count backing the recommendation
    #[arg(long, default_value_t = 0)]
    pub mentions: u64,

    /// Sentiment score (conventionally -1..1)
    #[arg(long, default_value_t = 0.0)]
    pub sentiment: f64,

    /// Trend
    #[arg(long, default_value = "stable")]
    pub trend: super::risk::TrendChoice,

    /// Card icon
    #[arg(long, default_value = "package")]
    pub icon: ActionIconChoice,

    /// Use the interactive form
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PriorityChoice {
    Critical,
    High,
    Medium,
}

impl From<PriorityChoice> for ActionPriority {
    fn from(choice: PriorityChoice) -> Self {
        match choice {
            PriorityChoice::Critical => ActionPriority::Critical,
            PriorityChoice::High => ActionPriority::High,
            PriorityChoice::Medium => ActionPriority::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ImpactChoice {
    Critical,
    High,
    Medium,
    Low,
}

impl From<ImpactChoice> for Impact {
    fn from(choice: ImpactChoice) -> Self {
        match choice {
            ImpactChoice::Critical => Impact::Critical,
            ImpactChoice::High => Impact::High,
            ImpactChoice::Medium => Impact::Medium,
            ImpactChoice::Low => Impact::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EffortChoice {
    Low,
    Medium,
    High,
}

impl From<EffortChoice> for Effort {
    fn from(choice: EffortChoice) -> Self {
        match choice {
            EffortChoice::Low => Effort::Low,
            EffortChoice::Medium => Effort::Medium,
            EffortChoice::High => Effort::High,
        }
    }
}

/// Icons permitted on action cards
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ActionIconChoice {
    Package,
    MessageSquare,
    Zap,
    AlertTriangle,
    Target,
}

impl From<ActionIconChoice> for Icon {
    fn from(choice: ActionIconChoice) -> Self {
        match choice {
            ActionIconChoice::Package => Icon::Package,
            ActionIconChoice::MessageSquare => Icon::MessageSquare,
            ActionIconChoice::Zap => Icon::Zap,
            ActionIconChoice::AlertTriangle => Icon::AlertTriangle,
            ActionIconChoice::Target => Icon::Target,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Action ID
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Action ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    /// Action ID
    pub id: String,

    /// New workflow status
    pub status: StatusChoice,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusChoice {
    NotStarted,
    InProgress,
    Completed,
}

impl From<StatusChoice> for ActionStatus {
    fn from(choice: StatusChoice) -> Self {
        match choice {
            StatusChoice::NotStarted => ActionStatus::NotStarted,
            StatusChoice::InProgress => ActionStatus::InProgress,
            StatusChoice::Completed => ActionStatus::Completed,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ShareArgs {
    /// Action ID
    pub id: String,

    /// Render as a mailto: URL instead of plain text
    #[arg(long)]
    pub email: bool,
}

pub fn run(cmd: ActionCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ActionCommands::List(args) => run_list(args, global),
        ActionCommands::Show(args) => run_show(args, global),
        ActionCommands::New(args) => run_new(args, global),
        ActionCommands::Edit(args) => run_edit(args, global),
        ActionCommands::Rm(args) => run_rm(args, global),
        ActionCommands::Status(args) => run_status(args, global),
        ActionCommands::Share(args) => run_share(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_login().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let query = ListQuery {
        is_active: None,
        filter: args.priority.as_param().map(|p| ("priority", p)),
        limit: args.limit,
        offset: args.offset,
    };

    let mut store = ActionStore::new();
    let total = store
        .refresh(&client, &query)
        .map_err(|e| miette::miette!("Failed to fetch priority actions: {}", e))?;
    let actions = store.items();

    match effective_format(global).resolve() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(actions).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("id,priority,title,impact,effort,mentions,sentiment,trend,status");
            for action in actions {
                println!(
                    "{},{},{},{},{},{},{},{},{}",
                    action.id,
                    action.priority,
                    escape_csv(&action.title),
                    action.impact,
                    action.effort,
                    action.mentions,
                    action.sentiment,
                    action.trend,
                    store.status_of(&action.id)
                );
            }
        }
        OutputFormat::Id => {
            for action in actions {
                println!("{}", action.id);
            }
        }
        _ => {
            if actions.is_empty() {
                println!("No priority actions found.");
                println!();
                println!("Create one with: {}", style("naradai action new").yellow());
                return Ok(());
            }
            let rows = actions
                .iter()
                .map(|a| {
                    vec![
                        format_short_id(&a.id),
                        priority_styled(a.priority),
                        truncate_str(&a.title, 30),
                        a.impact.to_string(),
                        a.effort.to_string(),
                        format_count(a.mentions),
                        format_sentiment(a.sentiment),
                        store.status_of(&a.id).label().to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                table::render(
                    &["id", "priority", "title", "impact", "effort", "mentions", "sent", "status"],
                    rows
                )
            );
            println!(
                "{}",
                table::summary(actions.len(), total, PriorityAction::LABEL)
            );
        }
    }

    Ok(())
}

fn priority_styled(priority: ActionPriority) -> String {
    match priority {
        ActionPriority::Critical => style("critical").red().to_string(),
        ActionPriority::High => style("high").yellow().to_string(),
        ActionPriority::Medium => "medium".to_string(),
    }
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_login().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let action: PriorityAction = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch priority action: {}", e))?;

    if effective_format(global).resolve() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&action).into_diagnostic()?);
        return Ok(());
    }

    let status = action.status.unwrap_or_default();
    println!("{} {}", style(&action.title).bold(), style(&action.id).dim());
    println!(
        "  priority: {}   impact: {}   effort: {}   status: {}",
        priority_styled(action.priority),
        action.impact,
        action.effort,
        status.label()
    );
    println!("  {}", action.description);
    println!(
        "  {} {}",
        style("recommendation:").dim(),
        action.recommendation
    );
    println!(
        "  mentions: {}   sentiment: {}   trend: {}   icon: {}",
        format_count(action.mentions),
        format_sentiment(action.sentiment),
        action.trend,
        action.icon
    );
    Ok(())
}

/// Interactive form, pre-filled with `defaults`
fn action_form(defaults: &ActionDraft) -> Result<ActionDraft> {
    let priority = forms::select_one("Priority", ActionPriority::ALL, defaults.priority)?;
    let title = forms::input_text("Title", Some(&defaults.title), forms::MIN_TITLE_LEN)?;
    let description = forms::input_text(
        "Description",
        Some(&defaults.description),
        forms::MIN_DESCRIPTION_LEN,
    )?;
    let impact = forms::select_one("Impact", Impact::ALL, defaults.impact)?;
    let effort = forms::select_one("Effort", Effort::ALL, defaults.effort)?;
    let recommendation = forms::input_text(
        "Recommendation",
        Some(&defaults.recommendation),
        forms::MIN_DESCRIPTION_LEN,
    )?;
    let mentions = forms::input_u64("Mentions", defaults.mentions)?;
    let sentiment = forms::input_f64("Sentiment (-1..1)", defaults.sentiment)?;
    let trend = forms::select_one("Trend", Trajectory::ALL, defaults.trend)?;
    let icon = forms::select_one("Icon", Icon::ACTION_SET, defaults.icon)?;
    let status = forms::select_one(
        "Status",
        ActionStatus::ALL,
        defaults.status.unwrap_or_default(),
    )?;

    Ok(ActionDraft {
        priority,
        title,
        description,
        impact,
        effort,
        recommendation,
        mentions,
        sentiment,
        trend,
        icon,
        status: Some(status),
    })
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let draft = if args.interactive {
        action_form(&ActionDraft {
            priority: ActionPriority::Medium,
            title: String::new(),
            description: String::new(),
            impact: Impact::Medium,
            effort: Effort::Medium,
            recommendation: String::new(),
            mentions: 0,
            sentiment: 0.0,
            trend: Trajectory::Stable,
            icon: Icon::Package,
            status: None,
        })?
    } else {
        let title = args.title.unwrap_or_default();
        let description = args.description.unwrap_or_default();
        let recommendation = args.recommendation.unwrap_or_default();
        forms::validate_text("Title", &title, forms::MIN_TITLE_LEN)?;
        forms::validate_text("Description", &description, forms::MIN_DESCRIPTION_LEN)?;
        forms::validate_text("Recommendation", &recommendation, forms::MIN_DESCRIPTION_LEN)?;
        ActionDraft {
            priority: args.priority.into(),
            title,
            description,
            impact: args.impact.into(),
            effort: args.effort.into(),
            recommendation,
            mentions: args.mentions,
            sentiment: args.sentiment,
            trend: args.trend.into(),
            icon: args.icon.into(),
            status: None,
        }
    };

    let mut store = ActionStore::new();
    let created = store
        .create(&client, &draft)
        .map_err(|e| miette::miette!("Failed to create priority action: {}", e))?;

    notify_success(
        global,
        format!("Created priority action {}", style(&created.id).cyan()),
    );
    Ok(())
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let existing: PriorityAction = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch priority action: {}", e))?;
    let draft = action_form(&existing.draft())?;

    let mut store = ActionStore::new();
    let updated = store
        .update(&client, &args.id, &draft)
        .map_err(|e| miette::miette!("Failed to update priority action: {}", e))?;

    notify_success(
        global,
        format!("Updated priority action {}", style(&updated.id).cyan()),
    );
    Ok(())
}

fn run_rm(args: RmArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    if !args.yes && !forms::confirm(&format!("Delete priority action {}?", args.id), false)? {
        println!("Aborted.");
        return Ok(());
    }

    let mut store = ActionStore::new();
    store
        .delete(&client, &args.id)
        .map_err(|e| miette::miette!("Failed to delete priority action: {}", e))?;

    notify_success(
        global,
        format!("Deleted priority action {}", style(&args.id).cyan()),
    );
    Ok(())
}

fn run_status(args: StatusArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let status: ActionStatus = args.status.into();
    let mut store = ActionStore::new();
    store
        .update_status(&client, &args.id, status)
        .map_err(|e| miette::miette!("Failed to update status: {}", e))?;

    notify_success(
        global,
        format!(
            "Status of {} is now {}",
            style(&args.id).cyan(),
            style(status.label()).cyan()
        ),
    );
    Ok(())
}

fn run_share(args: ShareArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_login().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let action: PriorityAction = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch priority action: {}", e))?;

    if args.email {
        println!(
            "mailto:?subject={}&body={}",
            urlencode(&action.title),
            urlencode(&action.share_text())
        );
    } else {
        println!("{}", action.share_text());
    }
    Ok(())
}

/// Percent-encode for a mailto: URL (RFC 3986 unreserved set kept)
fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlencode() {
        assert_eq!(urlencode("abc-123"), "abc-123");
        assert_eq!(urlencode("a b"), "a%20b");
        assert_eq!(urlencode("x\ny"), "x%0Ay");
    }
}
