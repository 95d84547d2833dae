//! `naradai trend` command - sentiment trend management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::api::ListQuery;
use crate::cli::commands::{client, effective_format, notify_success, session};
use crate::cli::helpers::{escape_csv, format_short_id, truncate_str};
use crate::cli::{forms, table, GlobalOpts, OutputFormat};
use crate::core::ResourceStore;
use crate::entities::trend::{SentimentPoint, SentimentTrend, TrendDraft};
use crate::entities::Resource;

#[derive(Subcommand, Debug)]
pub enum TrendCommands {
    /// List sentiment trends
    List(ListArgs),

    /// Show a sentiment trend with its series
    Show(ShowArgs),

    /// Create a new sentiment trend
    New(NewArgs),

    /// Edit a sentiment trend interactively
    Edit(EditArgs),

    /// Delete a sentiment trend
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
    /// Sentiment trend ID
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Title (min 3 characters)
    #[arg(long, required_unless_present = "interactive")]
    pub title: Option<String>,

    /// Period label ("Last 30 days")
    #[arg(long, default_value = "")]
    pub period: String,

    /// Positive share 0-100
    #[arg(long, default_value_t = 0.0)]
    pub positive: f64,

    /// Negative share 0-100
    #[arg(long, default_value_t = 0.0)]
    pub negative: f64,

    /// Neutral share 0-100
    #[arg(long, default_value_t = 0.0)]
    pub neutral: f64,

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

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Sentiment trend ID
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Sentiment trend ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(cmd: TrendCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        TrendCommands::List(args) => run_list(args, global),
        TrendCommands::Show(args) => run_show(args, global),
        TrendCommands::New(args) => run_new(args, global),
        TrendCommands::Edit(args) => run_edit(args, global),
        TrendCommands::Rm(args) => run_rm(args, global),
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

    let mut store = ResourceStore::<SentimentTrend>::new();
    let total = store
        .refresh(&client, &query)
        .map_err(|e| miette::miette!("Failed to fetch sentiment trends: {}", e))?;
    let trends = store.items();

    match effective_format(global).resolve() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(trends).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("id,title,period,positive,negative,neutral,points,active,order");
            for trend in trends {
                println!(
                    "{},{},{},{},{},{},{},{},{}",
                    trend.id,
                    escape_csv(&trend.title),
                    escape_csv(&trend.period),
                    trend.positive_percent,
                    trend.negative_percent,
                    trend.neutral_percent,
                    trend.trend_data.len(),
                    trend.is_active,
                    trend.order
                );
            }
        }
        OutputFormat::Id => {
            for trend in trends {
                println!("{}", trend.id);
            }
        }
        _ => {
            if trends.is_empty() {
                println!("No sentiment trends found.");
                println!();
                println!("Create one with: {}", style("naradai trend new").yellow());
                return Ok(());
            }
            let rows = trends
                .iter()
                .map(|t| {
                    vec![
                        format_short_id(&t.id),
                        truncate_str(&t.title, 28),
                        t.period.clone(),
                        format!("{:.0}%", t.positive_percent),
                        format!("{:.0}%", t.negative_percent),
                        format!("{:.0}%", t.neutral_percent),
                        t.trend_data.len().to_string(),
                        if t.is_active { "yes".into() } else { "no".into() },
                        t.order.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                table::render(
                    &["id", "title", "period", "pos", "neg", "neu", "points", "active", "order"],
                    rows
                )
            );
            println!("{}", table::summary(trends.len(), total, SentimentTrend::LABEL));
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_login().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let trend: SentimentTrend = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch sentiment trend: {}", e))?;

    if effective_format(global).resolve() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&trend).into_diagnostic()?);
        return Ok(());
    }

    println!("{} {}", style(&trend.title).bold(), style(&trend.id).dim());
    println!(
        "  period: {}   positive: {:.0}%   negative: {:.0}%   neutral: {:.0}%",
        trend.period, trend.positive_percent, trend.negative_percent, trend.neutral_percent
    );
    if !trend.trend_data.is_empty() {
        let rows = trend
            .trend_data
            .iter()
            .map(|p| {
                vec![
                    p.date.clone(),
                    format!("{:.0}%", p.positive),
                    format!("{:.0}%", p.negative),
                    format!("{:.0}%", p.neutral()),
                ]
            })
            .collect();
        println!("{}", table::render(&["date", "positive", "negative", "neutral"], rows));
    }
    Ok(())
}

fn trend_form(defaults: &TrendDraft) -> Result<TrendDraft> {
    let title = forms::input_text("Title", Some(&defaults.title), forms::MIN_TITLE_LEN)?;
    let period = forms::input_optional_text("Period", Some(&defaults.period))?;
    let positive_percent = forms::input_percent("Positive % (0-100)", defaults.positive_percent)?;
    let negative_percent = forms::input_percent("Negative % (0-100)", defaults.negative_percent)?;
    let neutral_percent = forms::input_percent("Neutral % (0-100)", defaults.neutral_percent)?;

    // The three shares are entered independently; flag but don't correct
    let sum = positive_percent + negative_percent + neutral_percent;
    if (sum - 100.0).abs() > 0.01 {
        println!(
            "  {}",
            style(format!("note: shares total {:.0}%, not 100%", sum)).dim()
        );
    }

    let trend_data = forms::edit_list(
        "Series points",
        defaults.trend_data.clone(),
        |p: &SentimentPoint| format!("{}: +{:.0}% / -{:.0}%", p.date, p.positive, p.negative),
        || {
            let date = forms::input_text("Point date label", None, 1)?;
            let positive = forms::input_percent("Positive (0-100)", 0.0)?;
            let negative = forms::input_percent("Negative (0-100)", 0.0)?;
            Ok(SentimentPoint { date, positive, negative })
        },
    )?;

    let is_active = forms::confirm("Active (visible on dashboard)?", defaults.is_active)?;
    let order = forms::input_i64("Display order", defaults.order)?;

    Ok(TrendDraft {
        title,
        period,
        positive_percent,
        negative_percent,
        neutral_percent,
        trend_data,
        is_active,
        order,
    })
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let draft = if args.interactive {
        trend_form(&TrendDraft {
            title: String::new(),
            period: String::new(),
            positive_percent: 0.0,
            negative_percent: 0.0,
            neutral_percent: 0.0,
            trend_data: vec![],
            is_active: true,
            order: 0,
        })?
    } else {
        let title = args.title.unwrap_or_default();
        forms::validate_text("Title", &title, forms::MIN_TITLE_LEN)?;
        TrendDraft {
            title,
            period: args.period,
            positive_percent: forms::clamp_percent(args.positive),
            negative_percent: forms::clamp_percent(args.negative),
            neutral_percent: forms::clamp_percent(args.neutral),
            trend_data: vec![],
            is_active: !args.inactive,
            order: args.order,
        }
    };

    let mut store = ResourceStore::<SentimentTrend>::new();
    let created = store
        .create(&client, &draft)
        .map_err(|e| miette::miette!("Failed to create sentiment trend: {}", e))?;

    notify_success(
        global,
        format!("Created sentiment trend {}", style(&created.id).cyan()),
    );
    Ok(())
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let existing: SentimentTrend = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch sentiment trend: {}", e))?;
    let draft = trend_form(&existing.draft())?;

    let mut store = ResourceStore::<SentimentTrend>::new();
    let updated = store
        .update(&client, &args.id, &draft)
        .map_err(|e| miette::miette!("Failed to update sentiment trend: {}", e))?;

    notify_success(
        global,
        format!("Updated sentiment trend {}", style(&updated.id).cyan()),
    );
    Ok(())
}

fn run_rm(args: RmArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    if !args.yes && !forms::confirm(&format!("Delete sentiment trend {}?", args.id), false)? {
        println!("Aborted.");
        return Ok(());
    }

    let mut store = ResourceStore::<SentimentTrend>::new();
    store
        .delete(&client, &args.id)
        .map_err(|e| miette::miette!("Failed to delete sentiment trend: {}", e))?;

    notify_success(
        global,
        format!("Deleted sentiment trend {}", style(&args.id).cyan()),
    );
    Ok(())
}
