//! `naradai comp` command - competitive analysis management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::api::ListQuery;
use crate::cli::commands::{client, effective_format, notify_success, session};
use crate::cli::helpers::{escape_csv, format_short_id, truncate_str};
use crate::cli::{forms, table, GlobalOpts, OutputFormat};
use crate::core::ResourceStore;
use crate::entities::competitor::{CompetitiveAnalysis, CompetitorDraft};
use crate::entities::Resource;

#[derive(Subcommand, Debug)]
pub enum CompCommands {
    /// List competitive analyses
    List(ListArgs),

    /// Show a competitive analysis
    Show(ShowArgs),

    /// Create a new competitive analysis
    New(NewArgs),

    /// Edit a competitive analysis interactively
    Edit(EditArgs),

    /// Delete a competitive analysis
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
    /// Competitive analysis ID
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Brand name (min 3 characters)
    #[arg(long, required_unless_present = "interactive")]
    pub name: Option<String>,

    /// Share of voice 0-100
    #[arg(long, default_value_t = 0.0)]
    pub share_of_voice: f64,

    /// Sentiment score
    #[arg(long, default_value_t = 0.0)]
    pub sentiment: f64,

    /// Engagement score
    #[arg(long, default_value_t = 0.0)]
    pub engagement: f64,

    /// Market position text (conventionally only for your own brand)
    #[arg(long, default_value = "")]
    pub position: String,

    /// Gap-to-leader text
    #[arg(long, default_value = "")]
    pub gap_to_leader: String,

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

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Competitive analysis ID
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Competitive analysis ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(cmd: CompCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CompCommands::List(args) => run_list(args, global),
        CompCommands::Show(args) => run_show(args, global),
        CompCommands::New(args) => run_new(args, global),
        CompCommands::Edit(args) => run_edit(args, global),
        CompCommands::Rm(args) => run_rm(args, global),
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

    let mut store = ResourceStore::<CompetitiveAnalysis>::new();
    let total = store
        .refresh(&client, &query)
        .map_err(|e| miette::miette!("Failed to fetch competitive analyses: {}", e))?;
    let analyses = store.items();

    match effective_format(global).resolve() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(analyses).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("id,name,share_of_voice,sentiment,engagement,position,gap_to_leader,active,order");
            for analysis in analyses {
                println!(
                    "{},{},{},{},{},{},{},{},{}",
                    analysis.id,
                    escape_csv(&analysis.name),
                    analysis.share_of_voice,
                    analysis.sentiment,
                    analysis.engagement,
                    escape_csv(&analysis.position),
                    escape_csv(&analysis.gap_to_leader),
                    analysis.is_active,
                    analysis.order
                );
            }
        }
        OutputFormat::Id => {
            for analysis in analyses {
                println!("{}", analysis.id);
            }
        }
        _ => {
            if analyses.is_empty() {
                println!("No competitive analyses found.");
                println!();
                println!("Create one with: {}", style("naradai comp new").yellow());
                return Ok(());
            }
            let rows = analyses
                .iter()
                .map(|a| {
                    vec![
                        format_short_id(&a.id),
                        truncate_str(&a.name, 24),
                        format!("{:.0}%", a.share_of_voice),
                        format!("{:.0}", a.sentiment),
                        format!("{:.1}", a.engagement),
                        truncate_str(&a.position, 24),
                        if a.is_active { "yes".into() } else { "no".into() },
                        a.order.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                table::render(
                    &["id", "name", "sov", "sent", "eng", "position", "active", "order"],
                    rows
                )
            );
            println!(
                "{}",
                table::summary(analyses.len(), total, CompetitiveAnalysis::LABEL)
            );
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_login().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let analysis: CompetitiveAnalysis = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch competitive analysis: {}", e))?;

    if effective_format(global).resolve() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&analysis).into_diagnostic()?);
        return Ok(());
    }

    println!("{} {}", style(&analysis.name).bold(), style(&analysis.id).dim());
    println!(
        "  share of voice: {:.0}%   sentiment: {:.0}   engagement: {:.1}",
        analysis.share_of_voice, analysis.sentiment, analysis.engagement
    );
    if !analysis.position.is_empty() {
        println!("  position: {}", analysis.position);
    }
    if !analysis.gap_to_leader.is_empty() {
        println!("  gap to leader: {}", analysis.gap_to_leader);
    }
    Ok(())
}

fn competitor_form(defaults: &CompetitorDraft) -> Result<CompetitorDraft> {
    let name = forms::input_text("Brand name", Some(&defaults.name), forms::MIN_TITLE_LEN)?;
    let share_of_voice =
        forms::input_percent("Share of voice (0-100)", defaults.share_of_voice)?;
    let sentiment = forms::input_f64("Sentiment score", defaults.sentiment)?;
    let engagement = forms::input_f64("Engagement score", defaults.engagement)?;
    let position = forms::input_optional_text("Market position", Some(&defaults.position))?;
    let gap_to_leader =
        forms::input_optional_text("Gap to leader", Some(&defaults.gap_to_leader))?;
    let is_active = forms::confirm("Active (visible on dashboard)?", defaults.is_active)?;
    let order = forms::input_i64("Display order", defaults.order)?;

    Ok(CompetitorDraft {
        name,
        share_of_voice,
        sentiment,
        engagement,
        position,
        gap_to_leader,
        is_active,
        order,
    })
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;
    let mut store = ResourceStore::<CompetitiveAnalysis>::new();

    if args.interactive {
        // Create-and-add-another: keep the form looping while requested
        loop {
            let draft = competitor_form(&CompetitorDraft {
                name: String::new(),
                share_of_voice: 0.0,
                sentiment: 0.0,
                engagement: 0.0,
                position: String::new(),
                gap_to_leader: String::new(),
                is_active: true,
                order: 0,
            })?;
            let created = store
                .create(&client, &draft)
                .map_err(|e| miette::miette!("Failed to create competitive analysis: {}", e))?;
            notify_success(
                global,
                format!("Created competitive analysis {}", style(&created.id).cyan()),
            );

            if !args.again || !forms::confirm("Add another?", true)? {
                break;
            }
        }
        return Ok(());
    }

    let name = args.name.unwrap_or_default();
    forms::validate_text("Name", &name, forms::MIN_TITLE_LEN)?;
    let draft = CompetitorDraft {
        name,
        share_of_voice: forms::clamp_percent(args.share_of_voice),
        sentiment: args.sentiment,
        engagement: args.engagement,
        position: args.position,
        gap_to_leader: args.gap_to_leader,
        is_active: !args.inactive,
        order: args.order,
    };

    let created = store
        .create(&client, &draft)
        .map_err(|e| miette::miette!("Failed to create competitive analysis: {}", e))?;
    notify_success(
        global,
        format!("Created competitive analysis {}", style(&created.id).cyan()),
    );
    Ok(())
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let existing: CompetitiveAnalysis = client
        .get(&args.id)
        .map_err(|e| miette::miette!("Failed to fetch competitive analysis: {}", e))?;
    let draft = competitor_form(&existing.draft())?;

    let mut store = ResourceStore::<CompetitiveAnalysis>::new();
    let updated = store
        .update(&client, &args.id, &draft)
        .map_err(|e| miette::miette!("Failed to update competitive analysis: {}", e))?;

    notify_success(
        global,
        format!("Updated competitive analysis {}", style(&updated.id).cyan()),
    );
    Ok(())
}

fn run_rm(args: RmArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_admin().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    if !args.yes && !forms::confirm(&format!("Delete competitive analysis {}?", args.id), false)? {
        println!("Aborted.");
        return Ok(());
    }

    let mut store = ResourceStore::<CompetitiveAnalysis>::new();
    store
        .delete(&client, &args.id)
        .map_err(|e| miette::miette!("Failed to delete competitive analysis: {}", e))?;

    notify_success(
        global,
        format!("Deleted competitive analysis {}", style(&args.id).cyan()),
    );
    Ok(())
}
