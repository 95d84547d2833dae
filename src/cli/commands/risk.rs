//! `naradai risk` command - risk management

use clap::{Subcommand, ValueEnum};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::api::ListQuery;
use crate::cli::commands::{client, effective_format, notify_success, session};
use crate::cli::helpers::{escape_csv, format_short_id, truncate_str};
use crate::cli::{forms, table, GlobalOpts, OutputFormat};
use crate::core::ResourceStore;
use crate::entities::risk::{Risk, RiskDraft, RiskIndicator, RiskSeverity};
use crate::entities::{Resource, Trajectory};

#[derive(Subcommand, Debug)]
pub enum RiskCommands {
    /// List risks with filtering
    List(ListArgs),

    /// Show a risk's details
    Show(ShowArgs),

    /// Create a new risk
    New(NewArgs),

    /// Edit a risk interactively
    Edit(EditArgs),

    /// Delete a risk
    Rm(RmArgs),
}

/// Severity filter
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SeverityFilter {
    Critical,
    High,
    Medium,
    Low,
    All,
}

impl SeverityFilter {
    fn as_param(self) -> Option<String> {
        match self {
            SeverityFilter::All => None,
            other => Some(format!("{:?}", other).to_lowercase()),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by severity
    #[arg(long, short = 's', default_value = "all")]
    pub severity: SeverityFilter,

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
    /// Risk ID
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

    /// Severity
    #[arg(long, short = 's', default_value = "medium")]
    pub severity: SeverityChoice,

    /// Probability 0-100
    #[arg(long, default_value_t = 50.0)]
    pub probability: f64,

    /// Impact assessment text
    #[arg(long, default_value = "")]
    pub impact_assessment: String,

    /// Trend
    #[arg(long, default_value = "stable")]
    pub trend: TrendChoice,

    /// Mitigation strategy entry (repeatable)
    #[arg(long = "mitigation")]
    pub mitigation_strategy: Vec<String>,

    /// Display order
    #[arg(long, default_value_t = 0)]
    pub order: i64,

    /// Create as inactive (hidden from dashboard views)
    #[arg(long)]
    pub inactive: bool,

    /// Use the interactive form
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SeverityChoice {
    Critical,
    High,
    Medium,
    Low,
}

impl From<SeverityChoice> for RiskSeverity {
    fn from(choice: SeverityChoice) -> Self {
        match choice {
            SeverityChoice::Critical => RiskSeverity::Critical,
            SeverityChoice::High => RiskSeverity::High,
            SeverityChoice::Medium => RiskSeverity::Medium,
            SeverityChoice::Low => RiskSeverity::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TrendChoice {
    Increasing,
    Decreasing,
    Stable,
}

impl From<TrendChoice> for Trajectory {
    fn from(choice: TrendChoice) -> Self {
        match choice {
            TrendChoice::Increasing => Trajectory::Increasing,
            TrendChoice::Decreasing => Trajectory::Decreasing,
            TrendChoice::Stable => Trajectory::Stable,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Risk ID
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Risk ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(cmd: RiskCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        RiskCommands::List(args) => run_list(args, global),
        RiskCommands::Show(args) => run_show(args, global),
        RiskCommands::New(args) => run_new(args, global),
        RiskCommands::Edit(args) => run_edit(args, global),
        RiskCommands::Rm(args) => run_rm(args, global),
    }
}

fn list_query(args: &ListArgs) -> ListQuery {
    ListQuery {
        is_active: if args.active {
            Some(true)
        } else if args.inactive {
            Some(false)
        } else {
            None
        },
        filter: args.severity.as_param().map(|s| ("severity", s)),
        limit: args.limit,
        offset: args.offset,
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_login().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let mut store = ResourceStore::<Risk>::new();
    let total = store
        .refresh(&client, &list_query(&args))
        .map_err(|e| miette::miette!("Failed to fetch risks: {}", e))?;
    let risks = store.items();

    match effective_format(global).resolve() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(risks).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("id,title,severity,probability,trend,active,order");
            for risk in risks {
                println!(
                    "{},{},{},{},{},{},{}",
                    risk.id,
                    escape_csv(&risk.title),
                    risk.severity,
                    risk.probability,
                    risk.trend,
                    risk.is_active,
                    risk.order
                );
            }
        }
        OutputFormat::Id => {
            for risk in risks {
                println!("{}", risk.id);
            }
        }
        _ => {
            if risks.is_empty() {
                println!("No risks found.");
                println!();
                println!("Create one with: {}", style("naradai risk new").yellow());
                return Ok(());
            }
            let rows = risks
                .iter()
                .map(|r| {
                    vec![
                        format_short_id(&r.id),
                        truncate_str(&r.title, 32),
                        r.severity.to_string(),
                        format!("{:.0}%", r.probability),
                        r.trend.to_string(),
                        if r.is_active { "yes".into() } else { "no".into() },
                        r.order.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                table::render(
                    &["id", "title", "severity", "prob", "trend", "active", "order"],
                    rows
                )
            );
            println!("{}", table::summary(risks.len(), total, Risk::LABEL));
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_login().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let risk: Risk = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch risk: {}", e))?;

    if effective_format(global).resolve() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&risk).into_diagnostic()?);
        return Ok(());
    }

    println!("{} {}", style(&risk.title).bold(), style(&risk.id).dim());
    println!(
        "  severity: {}   probability: {:.0}%   trend: {}   active: {}",
        severity_styled(risk.severity),
        risk.probability,
        risk.trend,
        risk.is_active
    );
    println!("  {}", risk.description);
    if !risk.impact_assessment.is_empty() {
        println!("  impact: {}", risk.impact_assessment);
    }
    if !risk.indicators.is_empty() {
        println!("  indicators:");
        for ind in &risk.indicators {
            println!("    {} = {} ({:+})", ind.label, ind.value, ind.change);
        }
    }
    if !risk.mitigation_strategy.is_empty() {
        println!("  mitigation:");
        for (i, step) in risk.mitigation_strategy.iter().enumerate() {
            println!("    {}. {}", i + 1, step);
        }
    }
    Ok(())
}

fn severity_styled(severity: RiskSeverity) -> String {
    match severity {
        RiskSeverity::Critical => style("critical").red().to_string(),
        RiskSeverity::High => style("high").yellow().to_string(),
        other => other.to_string(),
    }
}

/// Interactive form, pre-filled with `defaults`
fn risk_form(defaults: &RiskDraft) -> Result<RiskDraft> {
    let title = forms::input_text("Title", Some(&defaults.title), forms::MIN_TITLE_LEN)?;
    let description = forms::input_text(
        "Description",
        Some(&defaults.description),
        forms::MIN_DESCRIPTION_LEN,
    )?;
    let severity = forms::select_one("Severity", RiskSeverity::ALL, defaults.severity)?;
    let probability = forms::input_percent("Probability (0-100)", defaults.probability)?;
    let impact_assessment =
        forms::input_optional_text("Impact assessment", Some(&defaults.impact_assessment))?;
    let trend = forms::select_one("Trend", Trajectory::ALL, defaults.trend)?;

    let indicators = forms::edit_list(
        "Indicators",
        defaults.indicators.clone(),
        |ind: &RiskIndicator| format!("{} = {} ({:+})", ind.label, ind.value, ind.change),
        || {
            let label = forms::input_text("Indicator label", None, forms::MIN_LABEL_LEN)?;
            let value = forms::input_f64("Indicator value", 0.0)?;
            let change = forms::input_f64("Indicator change", 0.0)?;
            Ok(RiskIndicator { label, value, change })
        },
    )?;

    let mitigation_strategy = forms::edit_list(
        "Mitigation strategy",
        defaults.mitigation_strategy.clone(),
        |step: &String| step.clone(),
        || forms::input_text("Mitigation step", None, forms::MIN_LABEL_LEN),
    )?;

    let is_active = forms::confirm("Active (visible on dashboard)?", defaults.is_active)?;
    let order = forms::input_i64("Display order", defaults.order)?;

    Ok(RiskDraft {
        title,
        description,
        severity,
        probability,
        impact_assessment,
        trend,
        indicators,
        mitigation_strategy,
        is_active,
        order,
    })
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let draft = if args.interactive {
        risk_form(&RiskDraft {
            title: String::new(),
            description: String::new(),
            severity: RiskSeverity::Medium,
            probability: 50.0,
            impact_assessment: String::new(),
            trend: Trajectory::Stable,
            indicators: vec![],
            mitigation_strategy: vec![],
            is_active: true,
            order: 0,
        })?
    } else {
        let title = args.title.unwrap_or_default();
        let description = args.description.unwrap_or_default();
        forms::validate_text("Title", &title, forms::MIN_TITLE_LEN)?;
        forms::validate_text("Description", &description, forms::MIN_DESCRIPTION_LEN)?;
        RiskDraft {
            title,
            description,
            severity: args.severity.into(),
            probability: forms::clamp_percent(args.probability),
            impact_assessment: args.impact_assessment,
            trend: args.trend.into(),
            indicators: vec![],
            mitigation_strategy: args.mitigation_strategy,
            is_active: !args.inactive,
            order: args.order,
        }
    };

    let mut store = ResourceStore::<Risk>::new();
    let created = store
        .create(&client, &draft)
        .map_err(|e| miette::miette!("Failed to create risk: {}", e))?;

    notify_success(global, format!("Created risk {}", style(&created.id).cyan()));
    Ok(())
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let existing: Risk = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch risk: {}", e))?;
    let draft = risk_form(&existing.draft())?;

    let mut store = ResourceStore::<Risk>::new();
    let updated = store
        .update(&client, &args.id, &draft)
        .map_err(|e| miette::miette!("Failed to update risk: {}", e))?;

    notify_success(global, format!("Updated risk {}", style(&updated.id).cyan()));
    Ok(())
}

fn run_rm(args: RmArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    if !args.yes && !forms::confirm(&format!("Delete risk {}?", args.id), false)? {
        println!("Aborted.");
        return Ok(());
    }

    let mut store = ResourceStore::<Risk>::new();
    store
        .delete(&client, &args.id)
        .map_err(|e| miette::miette!("Failed to delete risk: {}", e))?;

    notify_success(global, format!("Deleted risk {}", style(&args.id).cyan()));
    Ok(())
}
