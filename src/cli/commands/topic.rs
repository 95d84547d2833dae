//! `naradai topic` command - discussion topic management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::api::ListQuery;
use crate::cli::commands::{client, effective_format, notify_success, session};
use crate::cli::helpers::{escape_csv, format_count, format_sentiment, format_short_id, truncate_str};
use crate::cli::{forms, table, GlobalOpts, OutputFormat};
use crate::core::ResourceStore;
use crate::entities::topic::{DiscussionTopic, TopicDraft};
use crate::entities::Resource;

#[derive(Subcommand, Debug)]
pub enum TopicCommands {
    /// List discussion topics
    List(ListArgs),

    /// Show a topic's details
    Show(ShowArgs),

    /// Create a new topic
    New(NewArgs),

    /// Edit a topic interactively
    Edit(EditArgs),

    /// Delete a topic
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
    /// Topic ID
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Topic name (min 3 characters)
    #[arg(long, required_unless_present = "interactive")]
    pub name: Option<String>,

    /// Mention volume
    #[arg(long, default_value_t = 0)]
    pub volume: u64,

    /// Sentiment score (conventionally -1..1)
    #[arg(long, default_value_t = 0.0)]
    pub sentiment: f64,

    /// Color gradient used by the web dashboard
    #[arg(long, default_value = "from-violet-500 to-cyan-500")]
    pub color: String,

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
    /// Topic ID
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Topic ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(cmd: TopicCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        TopicCommands::List(args) => run_list(args, global),
        TopicCommands::Show(args) => run_show(args, global),
        TopicCommands::New(args) => run_new(args, global),
        TopicCommands::Edit(args) => run_edit(args, global),
        TopicCommands::Rm(args) => run_rm(args, global),
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

    let mut store = ResourceStore::<DiscussionTopic>::new();
    let total = store
        .refresh(&client, &query)
        .map_err(|e| miette::miette!("Failed to fetch discussion topics: {}", e))?;
    let topics = store.items();

    match effective_format(global).resolve() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(topics).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("id,name,volume,sentiment,active,order");
            for topic in topics {
                println!(
                    "{},{},{},{},{},{}",
                    topic.id,
                    escape_csv(&topic.name),
                    topic.volume,
                    topic.sentiment_score,
                    topic.is_active,
                    topic.order
                );
            }
        }
        OutputFormat::Id => {
            for topic in topics {
                println!("{}", topic.id);
            }
        }
        _ => {
            if topics.is_empty() {
                println!("No discussion topics found.");
                println!();
                println!("Create one with: {}", style("naradai topic new").yellow());
                return Ok(());
            }
            let rows = topics
                .iter()
                .map(|t| {
                    vec![
                        format_short_id(&t.id),
                        truncate_str(&t.name, 30),
                        format_count(t.volume),
                        format_sentiment(t.sentiment_score),
                        if t.is_active { "yes".into() } else { "no".into() },
                        t.order.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                table::render(&["id", "name", "volume", "sentiment", "active", "order"], rows)
            );
            println!("{}", table::summary(topics.len(), total, DiscussionTopic::LABEL));
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_login().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let topic: DiscussionTopic = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch discussion topic: {}", e))?;

    if effective_format(global).resolve() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&topic).into_diagnostic()?);
        return Ok(());
    }

    println!("{} {}", style(&topic.name).bold(), style(&topic.id).dim());
    println!(
        "  volume: {}   sentiment: {}   color: {}   active: {}   order: {}",
        format_count(topic.volume),
        format_sentiment(topic.sentiment_score),
        topic.color,
        topic.is_active,
        topic.order
    );
    Ok(())
}

fn topic_form(defaults: &TopicDraft) -> Result<TopicDraft> {
    let name = forms::input_text("Name", Some(&defaults.name), forms::MIN_TITLE_LEN)?;
    let volume = forms::input_u64("Volume (mentions)", defaults.volume)?;
    let sentiment_score = forms::input_f64("Sentiment score (-1..1)", defaults.sentiment_score)?;
    let color = forms::input_optional_text("Color gradient", Some(&defaults.color))?;
    let is_active = forms::confirm("Active (visible on dashboard)?", defaults.is_active)?;
    let order = forms::input_i64("Display order", defaults.order)?;

    Ok(TopicDraft {
        name,
        volume,
        sentiment_score,
        color,
        is_active,
        order,
    })
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let draft = if args.interactive {
        topic_form(&TopicDraft {
            name: String::new(),
            volume: 0,
            sentiment_score: 0.0,
            color: "from-violet-500 to-cyan-500".to_string(),
            is_active: true,
            order: 0,
        })?
    } else {
        let name = args.name.unwrap_or_default();
        forms::validate_text("Name", &name, forms::MIN_TITLE_LEN)?;
        TopicDraft {
            name,
            volume: args.volume,
            sentiment_score: args.sentiment,
            color: args.color,
            is_active: !args.inactive,
            order: args.order,
        }
    };

    let mut store = ResourceStore::<DiscussionTopic>::new();
    let created = store
        .create(&client, &draft)
        .map_err(|e| miette::miette!("Failed to create discussion topic: {}", e))?;

    notify_success(
        global,
        format!("Created discussion topic {}", style(&created.id).cyan()),
    );
    Ok(())
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let existing: DiscussionTopic = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch discussion topic: {}", e))?;
    let draft = topic_form(&existing.draft())?;

    let mut store = ResourceStore::<DiscussionTopic>::new();
    let updated = store
        .update(&client, &args.id, &draft)
        .map_err(|e| miette::miette!("Failed to update discussion topic: {}", e))?;

    notify_success(
        global,
        format!("Updated discussion topic {}", style(&updated.id).cyan()),
    );
    Ok(())
}

fn run_rm(args: RmArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    if !args.yes && !forms::confirm(&format!("Delete discussion topic {}?", args.id), false)? {
        println!("Aborted.");
        return Ok(());
    }

    let mut store = ResourceStore::<DiscussionTopic>::new();
    store
        .delete(&client, &args.id)
        .map_err(|e| miette::miette!("Failed to delete discussion topic: {}", e))?;

    notify_success(
        global,
        format!("Deleted discussion topic {}", style(&args.id).cyan()),
    );
    Ok(())
}
