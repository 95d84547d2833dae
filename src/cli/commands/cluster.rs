//! `naradai cluster` command - conversation cluster management

use clap::{Subcommand, ValueEnum};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::api::ListQuery;
use crate::cli::commands::{client, effective_format, notify_success, session};
use crate::cli::helpers::{escape_csv, format_count, format_sentiment, format_short_id, truncate_str};
use crate::cli::{forms, table, GlobalOpts, OutputFormat};
use crate::core::ResourceStore;
use crate::entities::cluster::{ClusterDraft, ClusterTrend, ConversationCluster};
use crate::entities::Resource;

#[derive(Subcommand, Debug)]
pub enum ClusterCommands {
    /// List conversation clusters
    List(ListArgs),

    /// Show a cluster's details
    Show(ShowArgs),

    /// Create a new cluster
    New(NewArgs),

    /// Edit a cluster interactively
    Edit(EditArgs),

    /// Delete a cluster
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
    /// Cluster ID
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Cluster theme (min 3 characters)
    #[arg(long, required_unless_present = "interactive")]
    pub theme: Option<String>,

    /// Mention count
    #[arg(long, default_value_t = 0)]
    pub size: u64,

    /// Sentiment score (conventionally -1..1)
    #[arg(long, default_value_t = 0.0)]
    pub sentiment: f64,

    /// Volume trajectory
    #[arg(long, default_value = "stable")]
    pub trend: ClusterTrendChoice,

    /// Keyword (repeatable)
    #[arg(long = "keyword")]
    pub keywords: Vec<String>,

    /// Display order
    #[arg(long, default_value_t = 0)]
    pub order: i64,

    /// Create as inactive
    #[arg(long)]
    pub inactive: bool,

    /// Use the interactive form
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// After a successful create, loop the form for another record
    #[arg(long, requires = "interactive")]
    pub again: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ClusterTrendChoice {
    Up,
    Down,
    Stable,
}

impl From<ClusterTrendChoice> for ClusterTrend {
    fn from(choice: ClusterTrendChoice) -> Self {
        match choice {
            ClusterTrendChoice::Up => ClusterTrend::Up,
            ClusterTrendChoice::Down => ClusterTrend::Down,
            ClusterTrendChoice::Stable => ClusterTrend::Stable,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Cluster ID
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Cluster ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(cmd: ClusterCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ClusterCommands::List(args) => run_list(args, global),
        ClusterCommands::Show(args) => run_show(args, global),
        ClusterCommands::New(args) => run_new(args, global),
        ClusterCommands::Edit(args) => run_edit(args, global),
        ClusterCommands::Rm(args) => run_rm(args, global),
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

    let mut store = ResourceStore::<ConversationCluster>::new();
    let total = store
        .refresh(&client, &query)
        .map_err(|e| miette::miette!("Failed to fetch conversation clusters: {}", e))?;
    let clusters = store.items();

    match effective_format(global).resolve() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(clusters).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("id,theme,size,sentiment,trend,keywords,active,order");
            for cluster in clusters {
                println!(
                    "{},{},{},{},{},{},{},{}",
                    cluster.id,
                    escape_csv(&cluster.theme),
                    cluster.size,
                    cluster.sentiment,
                    cluster.trend,
                    escape_csv(&cluster.keywords.join("; ")),
                    cluster.is_active,
                    cluster.order
                );
            }
        }
        OutputFormat::Id => {
            for cluster in clusters {
                println!("{}", cluster.id);
            }
        }
        _ => {
            if clusters.is_empty() {
                println!("No conversation clusters found.");
                println!();
                println!("Create one with: {}", style("naradai cluster new").yellow());
                return Ok(());
            }
            let rows = clusters
                .iter()
                .map(|c| {
                    vec![
                        format_short_id(&c.id),
                        truncate_str(&c.theme, 30),
                        format_count(c.size),
                        format_sentiment(c.sentiment),
                        c.trend.to_string(),
                        c.keywords.len().to_string(),
                        if c.is_active { "yes".into() } else { "no".into() },
                        c.order.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                table::render(
                    &["id", "theme", "size", "sentiment", "trend", "kw", "active", "order"],
                    rows
                )
            );
            println!(
                "{}",
                table::summary(clusters.len(), total, ConversationCluster::LABEL)
            );
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_login().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let cluster: ConversationCluster = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch conversation cluster: {}", e))?;

    if effective_format(global).resolve() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&cluster).into_diagnostic()?);
        return Ok(());
    }

    println!("{} {}", style(&cluster.theme).bold(), style(&cluster.id).dim());
    println!(
        "  {} mentions   sentiment: {}   trend: {}   active: {}   order: {}",
        format_count(cluster.size),
        format_sentiment(cluster.sentiment),
        cluster.trend,
        cluster.is_active,
        cluster.order
    );
    if !cluster.keywords.is_empty() {
        println!("  keywords: {}", cluster.keywords.join(", "));
    }
    Ok(())
}

fn cluster_form(defaults: &ClusterDraft) -> Result<ClusterDraft> {
    let theme = forms::input_text("Theme", Some(&defaults.theme), forms::MIN_TITLE_LEN)?;
    let size = forms::input_u64("Size (mentions)", defaults.size)?;
    let sentiment = forms::input_f64("Sentiment (-1..1)", defaults.sentiment)?;
    let trend = forms::select_one("Trend", ClusterTrend::ALL, defaults.trend)?;
    let keywords = forms::edit_list(
        "Keywords",
        defaults.keywords.clone(),
        |k: &String| k.clone(),
        || forms::input_text("Keyword", None, 1),
    )?;
    let is_active = forms::confirm("Active (visible on dashboard)?", defaults.is_active)?;
    let order = forms::input_i64("Display order", defaults.order)?;

    Ok(ClusterDraft {
        theme,
        size,
        sentiment,
        trend,
        keywords,
        is_active,
        order,
    })
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;
    let mut store = ResourceStore::<ConversationCluster>::new();

    if args.interactive {
        // Create-and-add-another: keep the form looping while requested
        loop {
            let draft = cluster_form(&ClusterDraft {
                theme: String::new(),
                size: 0,
                sentiment: 0.0,
                trend: ClusterTrend::Stable,
                keywords: vec![],
                is_active: true,
                order: 0,
            })?;
            let created = store
                .create(&client, &draft)
                .map_err(|e| miette::miette!("Failed to create conversation cluster: {}", e))?;
            notify_success(
                global,
                format!("Created conversation cluster {}", style(&created.id).cyan()),
            );

            if !args.again || !forms::confirm("Add another?", true)? {
                break;
            }
        }
        return Ok(());
    }

    let theme = args.theme.unwrap_or_default();
    forms::validate_text("Theme", &theme, forms::MIN_TITLE_LEN)?;
    let draft = ClusterDraft {
        theme,
        size: args.size,
        sentiment: args.sentiment,
        trend: args.trend.into(),
        keywords: args.keywords,
        is_active: !args.inactive,
        order: args.order,
    };

    let created = store
        .create(&client, &draft)
        .map_err(|e| miette::miette!("Failed to create conversation cluster: {}", e))?;
    notify_success(
        global,
        format!("Created conversation cluster {}", style(&created.id).cyan()),
    );
    Ok(())
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let existing: ConversationCluster = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch conversation cluster: {}", e))?;
    let draft = cluster_form(&existing.draft())?;

    let mut store = ResourceStore::<ConversationCluster>::new();
    let updated = store
        .update(&client, &args.id, &draft)
        .map_err(|e| miette::miette!("Failed to update conversation cluster: {}", e))?;

    notify_success(
        global,
        format!("Updated conversation cluster {}", style(&updated.id).cyan()),
    );
    Ok(())
}

fn run_rm(args: RmArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    if !args.yes && !forms::confirm(&format!("Delete conversation cluster {}?", args.id), false)? {
        println!("Aborted.");
        return Ok(());
    }

    let mut store = ResourceStore::<ConversationCluster>::new();
    store
        .delete(&client, &args.id)
        .map_err(|e| miette::miette!("Failed to delete conversation cluster: {}", e))?;

    notify_success(
        global,
        format!("Deleted conversation cluster {}", style(&args.id).cyan()),
    );
    Ok(())
}
