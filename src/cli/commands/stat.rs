//! `naradai stat` command - dashboard stat card management

use clap::{Subcommand, ValueEnum};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::api::ListQuery;
use crate::cli::commands::{client, effective_format, notify_success, session};
use crate::cli::helpers::{escape_csv, format_short_id};
use crate::cli::{forms, table, GlobalOpts, OutputFormat};
use crate::core::ResourceStore;
use crate::entities::stat::{DashboardStat, StatDraft, StatTrend};
use crate::entities::{Icon, Resource};

#[derive(Subcommand, Debug)]
pub enum StatCommands {
    /// List stat cards
    List(ListArgs),

    /// Show a stat card's details
    Show(ShowArgs),

    /// Create a new stat card
    New(NewArgs),

    /// Edit a stat card interactively
    Edit(EditArgs),

    /// Delete a stat card
    Rm(RmArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Only active records
    #[arg(long, conflicts_with = "inactive")]
    pub active: bool,

    /// Only inactive records
    #[arg(long)]
    pub inactive: bool,

    /// Limit output to N items
    #[arg(long, short = 'n')]
    pub limit: Option<u64>,

    /// Skip the first N items
    #[arg(long)]
    pub offset: Option<u64>,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Stat card ID
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Card label (min 2 characters)
    #[arg(long, required_unless_present = "interactive")]
    pub label: Option<String>,

    /// Display value ("847.2K")
    #[arg(long, required_unless_present = "interactive")]
    pub value: Option<String>,

    /// Change badge text ("+12.5%")
    #[arg(long, default_value = "")]
    pub change: String,

    /// Badge direction
    #[arg(long, default_value = "up")]
    pub trend: StatTrendChoice,

    /// Card icon
    #[arg(long, default_value = "bar-chart3")]
    pub icon: StatIconChoice,

    /// Display order
    #[arg(long, default_value_t = 0)]
    pub order: i64,

    /// Create as inactive
    #[arg(long)]
    pub inactive: bool,

    /// Use the interactive form
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatTrendChoice {
    Up,
    Down,
}

impl From<StatTrendChoice> for StatTrend {
    fn from(choice: StatTrendChoice) -> Self {
        match choice {
            StatTrendChoice::Up => StatTrend::Up,
            StatTrendChoice::Down => StatTrend::Down,
        }
    }
}

/// Icons permitted on stat cards
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatIconChoice {
    Users,
    TrendingUp,
    TrendingDown,
    AlertTriangle,
    BarChart3,
    Activity,
    Percent,
    Eye,
}

impl From<StatIconChoice> for Icon {
    fn from(choice: StatIconChoice) -> Self {
        match choice {
            StatIconChoice::Users => Icon::Users,
            StatIconChoice::TrendingUp => Icon::TrendingUp,
            StatIconChoice::TrendingDown => Icon::TrendingDown,
            StatIconChoice::AlertTriangle => Icon::AlertTriangle,
            StatIconChoice::BarChart3 => Icon::BarChart3,
            StatIconChoice::Activity => Icon::Activity,
            StatIconChoice::Percent => Icon::Percent,
            StatIconChoice::Eye => Icon::Eye,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Stat card ID
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Stat card ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(cmd: StatCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        StatCommands::List(args) => run_list(args, global),
        StatCommands::Show(args) => run_show(args, global),
        StatCommands::New(args) => run_new(args, global),
        StatCommands::Edit(args) => run_edit(args, global),
        StatCommands::Rm(args) => run_rm(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_login().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let query = ListQuery {
        is_active: if args.active {
            Some(true)
        } else if args.inactive {
            Some(false)
        } else {
            None
        },
        filter: None,
        limit: args.limit,
        offset: args.offset,
    };

    let mut store = ResourceStore::<DashboardStat>::new();
    let total = store
        .refresh(&client, &query)
        .map_err(|e| miette::miette!("Failed to fetch dashboard stats: {}", e))?;
    let stats = store.items();

    match effective_format(global).resolve() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(stats).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("id,label,value,change,trend,icon,active,order");
            for stat in stats {
                println!(
                    "{},{},{},{},{},{},{},{}",
                    stat.id,
                    escape_csv(&stat.label),
                    escape_csv(&stat.value),
                    escape_csv(&stat.change),
                    stat.trend,
                    stat.icon,
                    stat.is_active,
                    stat.order
                );
            }
        }
        OutputFormat::Id => {
            for stat in stats {
                println!("{}", stat.id);
            }
        }
        _ => {
            if stats.is_empty() {
                println!("No dashboard stats found.");
                println!();
                println!("Create one with: {}", style("naradai stat new").yellow());
                return Ok(());
            }
            let rows = stats
                .iter()
                .map(|s| {
                    vec![
                        format_short_id(&s.id),
                        s.label.clone(),
                        s.value.clone(),
                        s.change.clone(),
                        s.trend.to_string(),
                        s.icon.to_string(),
                        if s.is_active { "yes".into() } else { "no".into() },
                        s.order.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                table::render(
                    &["id", "label", "value", "change", "trend", "icon", "active", "order"],
                    rows
                )
            );
            println!("{}", table::summary(stats.len(), total, DashboardStat::LABEL));
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_login().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let stat: DashboardStat = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch dashboard stat: {}", e))?;

    if effective_format(global).resolve() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&stat).into_diagnostic()?);
        return Ok(());
    }

    println!("{} {}", style(&stat.label).bold(), style(&stat.id).dim());
    println!(
        "  value: {}   change: {} ({})   icon: {}   active: {}   order: {}",
        stat.value, stat.change, stat.trend, stat.icon, stat.is_active, stat.order
    );
    Ok(())
}

fn stat_form(defaults: &StatDraft) -> Result<StatDraft> {
    let label = forms::input_text("Label", Some(&defaults.label), forms::MIN_LABEL_LEN)?;
    let value = forms::input_text("Value", Some(&defaults.value), 1)?;
    let change = forms::input_optional_text("Change", Some(&defaults.change))?;
    let trend = forms::select_one("Trend", StatTrend::ALL, defaults.trend)?;
    let icon = forms::select_one("Icon", Icon::STAT_SET, defaults.icon)?;
    let is_active = forms::confirm("Active (visible on dashboard)?", defaults.is_active)?;
    let order = forms::input_i64("Display order", defaults.order)?;

    Ok(StatDraft {
        label,
        value,
        change,
        trend,
        icon,
        order,
        is_active,
    })
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let draft = if args.interactive {
        stat_form(&StatDraft {
            label: String::new(),
            value: String::new(),
            change: String::new(),
            trend: StatTrend::Up,
            icon: Icon::BarChart3,
            order: 0,
            is_active: true,
        })?
    } else {
        let label = args.label.unwrap_or_default();
        let value = args.value.unwrap_or_default();
        forms::validate_text("Label", &label, forms::MIN_LABEL_LEN)?;
        forms::validate_text("Value", &value, 1)?;
        StatDraft {
            label,
            value,
            change: args.change,
            trend: args.trend.into(),
            icon: args.icon.into(),
            order: args.order,
            is_active: !args.inactive,
        }
    };

    let mut store = ResourceStore::<DashboardStat>::new();
    let created = store
        .create(&client, &draft)
        .map_err(|e| miette::miette!("Failed to create dashboard stat: {}", e))?;

    notify_success(
        global,
        format!("Created dashboard stat {}", style(&created.id).cyan()),
    );
    Ok(())
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let existing: DashboardStat = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch dashboard stat: {}", e))?;
    let draft = stat_form(&existing.draft())?;

    let mut store = ResourceStore::<DashboardStat>::new();
    let updated = store
        .update(&client, &args.id, &draft)
        .map_err(|e| miette::miette!("Failed to update dashboard stat: {}", e))?;

    notify_success(
        global,
        format!("Updated dashboard stat {}", style(&updated.id).cyan()),
    );
    Ok(())
}

fn run_rm(args: RmArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    if !args.yes && !forms::confirm(&format!("Delete dashboard stat {}?", args.id), false)? {
        println!("Aborted.");
        return Ok(());
    }

    let mut store = ResourceStore::<DashboardStat>::new();
    store
        .delete(&client, &args.id)
        .map_err(|e| miette::miette!("Failed to delete dashboard stat: {}", e))?;

    notify_success(
        global,
        format!("Deleted dashboard stat {}", style(&args.id).cyan()),
    );
    Ok(())
}
