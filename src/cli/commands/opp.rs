//! `naradai opp` command - opportunity management

use clap::{Subcommand, ValueEnum};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::api::ListQuery;
use crate::cli::commands::{client, effective_format, notify_success, session};
use crate::cli::helpers::{escape_csv, format_short_id, truncate_str};
use crate::cli::{forms, table, GlobalOpts, OutputFormat};
use crate::core::ResourceStore;
use crate::entities::opportunity::{KeyMetric, Opportunity, OpportunityDraft, Potential, Timeframe};
use crate::entities::{Resource, Trajectory};

#[derive(Subcommand, Debug)]
pub enum OppCommands {
    /// List opportunities with filtering
    List(ListArgs),

    /// Show an opportunity's details
    Show(ShowArgs),

    /// Create a new opportunity
    New(NewArgs),

    /// Edit an opportunity interactively
    Edit(EditArgs),

    /// Delete an opportunity
    Rm(RmArgs),
}

/// Potential filter
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PotentialFilter {
    High,
    Medium,
    Low,
    All,
}

impl PotentialFilter {
    fn as_param(self) -> Option<String> {
        match self {
            PotentialFilter::All => None,
            other => Some(format!("{:?}", other).to_lowercase()),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by potential
    #[arg(long, short = 'p', default_value = "all")]
    pub potential: PotentialFilter,

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
    /// Opportunity ID
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

    /// Potential
    #[arg(long, short = 'p', default_value = "medium")]
    pub potential: PotentialChoice,

    /// Confidence score 0-100
    #[arg(long, default_value_t = 50.0)]
    pub confidence: f64,

    /// Timeframe
    #[arg(long, default_value = "short-term")]
    pub timeframe: TimeframeChoice,

    /// Category
    #[arg(long, default_value = "")]
    pub category: String,

    /// Trend
    #[arg(long, default_value = "stable")]
    pub trend: super::risk::TrendChoice,

    /// Recommended action entry (repeatable)
    #[arg(long = "recommended-action")]
    pub recommended_actions: Vec<String>,

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
pub enum PotentialChoice {
    High,
    Medium,
    Low,
}

impl From<PotentialChoice> for Potential {
    fn from(choice: PotentialChoice) -> Self {
        match choice {
            PotentialChoice::High => Potential::High,
            PotentialChoice::Medium => Potential::Medium,
            PotentialChoice::Low => Potential::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TimeframeChoice {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl From<TimeframeChoice> for Timeframe {
    fn from(choice: TimeframeChoice) -> Self {
        match choice {
            TimeframeChoice::ShortTerm => Timeframe::ShortTerm,
            TimeframeChoice::MediumTerm => Timeframe::MediumTerm,
            TimeframeChoice::LongTerm => Timeframe::LongTerm,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Opportunity ID
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Opportunity ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(cmd: OppCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        OppCommands::List(args) => run_list(args, global),
        OppCommands::Show(args) => run_show(args, global),
        OppCommands::New(args) => run_new(args, global),
        OppCommands::Edit(args) => run_edit(args, global),
        OppCommands::Rm(args) => run_rm(args, global),
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
        filter: args.potential.as_param().map(|p| ("potential", p)),
        limit: args.limit,
        offset: args.offset,
    };

    let mut store = ResourceStore::<Opportunity>::new();
    let total = store
        .refresh(&client, &query)
        .map_err(|e| miette::miette!("Failed to fetch opportunities: {}", e))?;
    let opportunities = store.items();

    match effective_format(global).resolve() {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(opportunities).into_diagnostic()?
            );
        }
        OutputFormat::Csv => {
            println!("id,title,potential,confidence,timeframe,category,trend,active,order");
            for opp in opportunities {
                println!(
                    "{},{},{},{},{},{},{},{},{}",
                    opp.id,
                    escape_csv(&opp.title),
                    opp.potential,
                    opp.confidence_score,
                    opp.timeframe,
                    escape_csv(&opp.category),
                    opp.trend,
                    opp.is_active,
                    opp.order
                );
            }
        }
        OutputFormat::Id => {
            for opp in opportunities {
                println!("{}", opp.id);
            }
        }
        _ => {
            if opportunities.is_empty() {
                println!("No opportunities found.");
                println!();
                println!("Create one with: {}", style("naradai opp new").yellow());
                return Ok(());
            }
            let rows = opportunities
                .iter()
                .map(|o| {
                    vec![
                        format_short_id(&o.id),
                        truncate_str(&o.title, 32),
                        o.potential.to_string(),
                        format!("{:.0}%", o.confidence_score),
                        o.timeframe.to_string(),
                        truncate_str(&o.category, 20),
                        if o.is_active { "yes".into() } else { "no".into() },
                        o.order.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                table::render(
                    &[
                        "id",
                        "title",
                        "potential",
                        "conf",
                        "timeframe",
                        "category",
                        "active",
                        "order"
                    ],
                    rows
                )
            );
            println!(
                "{}",
                table::summary(opportunities.len(), total, Opportunity::LABEL)
            );
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_login().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let opp: Opportunity = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch opportunity: {}", e))?;

    if effective_format(global).resolve() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&opp).into_diagnostic()?);
        return Ok(());
    }

    println!("{} {}", style(&opp.title).bold(), style(&opp.id).dim());
    println!(
        "  potential: {}   confidence: {:.0}%   timeframe: {}   trend: {}",
        opp.potential, opp.confidence_score, opp.timeframe, opp.trend
    );
    println!("  {}", opp.description);
    if !opp.category.is_empty() {
        println!("  category: {}", opp.category);
    }
    if !opp.key_metrics.is_empty() {
        println!("  key metrics:");
        for metric in &opp.key_metrics {
            println!("    {}: {}", metric.label, metric.value);
        }
    }
    if !opp.recommended_actions.is_empty() {
        println!("  recommended actions:");
        for (i, action) in opp.recommended_actions.iter().enumerate() {
            println!("    {}. {}", i + 1, action);
        }
    }
    Ok(())
}

/// Interactive form, pre-filled with `defaults`
fn opportunity_form(defaults: &OpportunityDraft) -> Result<OpportunityDraft> {
    let title = forms::input_text("Title", Some(&defaults.title), forms::MIN_TITLE_LEN)?;
    let description = forms::input_text(
        "Description",
        Some(&defaults.description),
        forms::MIN_DESCRIPTION_LEN,
    )?;
    let potential = forms::select_one("Potential", Potential::ALL, defaults.potential)?;
    let confidence_score =
        forms::input_percent("Confidence score (0-100)", defaults.confidence_score)?;
    let timeframe = forms::select_one("Timeframe", Timeframe::ALL, defaults.timeframe)?;
    let category = forms::input_optional_text("Category", Some(&defaults.category))?;
    let trend = forms::select_one("Trend", Trajectory::ALL, defaults.trend)?;

    let key_metrics = forms::edit_list(
        "Key metrics",
        defaults.key_metrics.clone(),
        |m: &KeyMetric| format!("{}: {}", m.label, m.value),
        || {
            let label = forms::input_text("Metric label", None, forms::MIN_LABEL_LEN)?;
            let value = forms::input_text("Metric value", None, 1)?;
            Ok(KeyMetric { label, value })
        },
    )?;

    let recommended_actions = forms::edit_list(
        "Recommended actions",
        defaults.recommended_actions.clone(),
        |a: &String| a.clone(),
        || forms::input_text("Recommended action", None, forms::MIN_LABEL_LEN),
    )?;

    let is_active = forms::confirm("Active (visible on dashboard)?", defaults.is_active)?;
    let order = forms::input_i64("Display order", defaults.order)?;

    Ok(OpportunityDraft {
        title,
        description,
        potential,
        confidence_score,
        timeframe,
        category,
        trend,
        key_metrics,
        recommended_actions,
        is_active,
        order,
    })
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let draft = if args.interactive {
        opportunity_form(&OpportunityDraft {
            title: String::new(),
            description: String::new(),
            potential: Potential::Medium,
            confidence_score: 50.0,
            timeframe: Timeframe::ShortTerm,
            category: String::new(),
            trend: Trajectory::Stable,
            key_metrics: vec![],
            recommended_actions: vec![],
            is_active: true,
            order: 0,
        })?
    } else {
        let title = args.title.unwrap_or_default();
        let description = args.description.unwrap_or_default();
        forms::validate_text("Title", &title, forms::MIN_TITLE_LEN)?;
        forms::validate_text("Description", &description, forms::MIN_DESCRIPTION_LEN)?;
        OpportunityDraft {
            title,
            description,
            potential: args.potential.into(),
            confidence_score: forms::clamp_percent(args.confidence),
            timeframe: args.timeframe.into(),
            category: args.category,
            trend: args.trend.into(),
            key_metrics: vec![],
            recommended_actions: args.recommended_actions,
            is_active: !args.inactive,
            order: args.order,
        }
    };

    let mut store = ResourceStore::<Opportunity>::new();
    let created = store
        .create(&client, &draft)
        .map_err(|e| miette::miette!("Failed to create opportunity: {}", e))?;

    notify_success(
        global,
        format!("Created opportunity {}", style(&created.id).cyan()),
    );
    Ok(())
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let existing: Opportunity = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch opportunity: {}", e))?;
    let draft = opportunity_form(&existing.draft())?;

    let mut store = ResourceStore::<Opportunity>::new();
    let updated = store
        .update(&client, &args.id, &draft)
        .map_err(|e| miette::miette!("Failed to update opportunity: {}", e))?;

    notify_success(
        global,
        format!("Updated opportunity {}", style(&updated.id).cyan()),
    );
    Ok(())
}

fn run_rm(args: RmArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    if !args.yes && !forms::confirm(&format!("Delete opportunity {}?", args.id), false)? {
        println!("Aborted.");
        return Ok(());
    }

    let mut store = ResourceStore::<Opportunity>::new();
    store
        .delete(&client, &args.id)
        .map_err(|e| miette::miette!("Failed to delete opportunity: {}", e))?;

    notify_success(
        global,
        format!("Deleted opportunity {}", style(&args.id).cyan()),
    );
    Ok(())
}
