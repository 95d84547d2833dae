//! `naradai dashboard` command - the end-user analytics view
//!
//! Each widget fetches its own data and falls back to the built-in demo
//! dataset when the fetch fails or returns no active records; one failing
//! section never blocks the others and the dashboard never renders blank.

use clap::ValueEnum;
use console::style;
use miette::Result;

use crate::api::{ApiClient, ListQuery};
use crate::cli::commands::{client, notify_warning, session};
use crate::cli::helpers::{format_count, format_sentiment, truncate_str};
use crate::cli::{table, GlobalOpts};
use crate::core::demo;
use crate::core::paging::{Pager, ACTIONS_PER_PAGE};
use crate::core::{ActionStore, ResourceStore};
use crate::entities::cluster::{ClusterTrend, ConversationCluster};
use crate::entities::competitor::{resolve_primary_brand, CompetitiveAnalysis};
use crate::entities::opportunity::Opportunity;
use crate::entities::risk::Risk;
use crate::entities::stat::{DashboardStat, StatTrend};
use crate::entities::topic::DiscussionTopic;
use crate::entities::trend::SentimentTrend;
use crate::entities::{display_sort, Resource};

#[derive(clap::Args, Debug)]
pub struct DashboardArgs {
    /// Render only one section
    #[arg(long, short = 's', default_value = "all")]
    pub section: Section,

    /// Page of the priority-actions panel (wraps around)
    #[arg(long, default_value_t = 0)]
    pub page: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    All,
    Stats,
    Sentiment,
    Topics,
    Competitors,
    Risks,
    Opportunities,
    Clusters,
    Actions,
}

pub fn run(args: DashboardArgs, global: &GlobalOpts) -> Result<()> {
    session()?.require_login().map_err(|e| miette::miette!("{}", e))?;
    let client = client(global)?;

    let all = args.section == Section::All;
    if all || args.section == Section::Stats {
        render_stats(&client, global);
    }
    if all || args.section == Section::Sentiment {
        render_sentiment(&client, global);
    }
    if all || args.section == Section::Topics {
        render_topics(&client, global);
    }
    if all || args.section == Section::Competitors {
        render_competitors(&client, global);
    }
    if all || args.section == Section::Risks {
        render_risks(&client, global);
    }
    if all || args.section == Section::Opportunities {
        render_opportunities(&client, global);
    }
    if all || args.section == Section::Clusters {
        render_clusters(&client, global);
    }
    if all || args.section == Section::Actions {
        render_actions(&client, global, args.page);
    }
    Ok(())
}

fn heading(title: &str, subtitle: &str) {
    println!();
    println!("{} {}", style("◆").cyan(), style(title).bold());
    if !subtitle.is_empty() {
        println!("  {}", style(subtitle).dim());
    }
    println!("{}", style("─".repeat(64)).dim());
}

/// Fetch a widget's backing list; a failure is reported as a dim warning
/// and leaves the store empty so the caller falls back to demo data.
///
/// Stats and risks/opportunities filter active records server-side; the
/// other widgets fetch unfiltered and filter in the display layer.
fn fetch_widget<R: Resource>(
    client: &ApiClient,
    global: &GlobalOpts,
    label: &str,
    query: &ListQuery,
) -> ResourceStore<R> {
    let mut store = ResourceStore::<R>::new();
    if let Err(e) = store.refresh(client, query) {
        notify_warning(global, format!("{}: {} (showing demo data)", label, e));
    }
    store
}

fn render_stats(client: &ApiClient, global: &GlobalOpts) {
    heading("Overview", "");
    let store = fetch_widget::<DashboardStat>(client, global, "dashboard stats", &ListQuery::active());
    let active = store.active();
    let fallback = demo::stats();
    let stats: Vec<&DashboardStat> = if active.is_empty() {
        fallback.iter().collect()
    } else {
        active
    };

    let rows = stats
        .iter()
        .map(|s| {
            let change = match s.trend {
                StatTrend::Up => style(&s.change).green().to_string(),
                StatTrend::Down => style(&s.change).red().to_string(),
            };
            vec![s.label.clone(), s.value.clone(), change]
        })
        .collect();
    println!("{}", table::render(&["metric", "value", "change"], rows));
}

fn render_sentiment(client: &ApiClient, global: &GlobalOpts) {
    heading("Sentiment Trend", "Positive vs negative share over time");
    let store = fetch_widget::<SentimentTrend>(client, global, "sentiment trends", &ListQuery::default());

    // First active record wins; fall back to the demo series
    let fallback = demo::sentiment_trend();
    let trend = store
        .items()
        .iter()
        .find(|t| t.is_active)
        .or_else(|| store.items().first())
        .unwrap_or(&fallback);

    for point in &trend.trend_data {
        println!(
            "  {:>7}  {} {:>3.0}%  {} {:>3.0}%  neutral {:>3.0}%",
            point.date,
            style(table::bar(point.positive, 100.0, 20)).green(),
            point.positive,
            style(table::bar(point.negative, 100.0, 20)).red(),
            point.negative,
            point.neutral()
        );
    }
    println!();
    println!(
        "  {} positive   {} negative   {} neutral",
        style(format!("{:.0}%", trend.positive_percent)).green(),
        style(format!("{:.0}%", trend.negative_percent)).red(),
        style(format!("{:.0}%", trend.neutral_percent)).dim()
    );
}

fn render_topics(client: &ApiClient, global: &GlobalOpts) {
    heading("Discussion Topics", "What people are talking about");
    let store = fetch_widget::<DiscussionTopic>(client, global, "discussion topics", &ListQuery::default());
    let active = store.active();
    let fallback = demo::topics();
    let topics: Vec<&DiscussionTopic> = if active.is_empty() {
        fallback.iter().collect()
    } else {
        active
    };

    let max_volume = topics.iter().map(|t| t.volume).max().unwrap_or(1) as f64;
    for topic in &topics {
        let sentiment = if topic.sentiment_score < 0.0 {
            style(format_sentiment(topic.sentiment_score)).red()
        } else {
            style(format_sentiment(topic.sentiment_score)).green()
        };
        println!(
            "  {:<18} {:<24} {:>7}  {}",
            truncate_str(&topic.name, 18),
            style(table::bar(topic.volume as f64, max_volume, 24)).magenta(),
            format_count(topic.volume),
            sentiment
        );
    }
}

fn render_competitors(client: &ApiClient, global: &GlobalOpts) {
    heading("Competitor Comparison", "Share of voice and sentiment");
    let store = fetch_widget::<CompetitiveAnalysis>(client, global, "competitive analyses", &ListQuery::default());
    let active = store.active();
    let fallback = demo::competitors();
    let analyses: Vec<&CompetitiveAnalysis> = if active.is_empty() {
        let mut refs: Vec<&CompetitiveAnalysis> = fallback.iter().collect();
        display_sort(&mut refs);
        refs
    } else {
        active
    };

    let rows = analyses
        .iter()
        .map(|a| {
            vec![
                truncate_str(&a.name, 24),
                format!("{:.0}%", a.share_of_voice),
                format!("{:.0}", a.sentiment),
                format!("{:.1}", a.engagement),
            ]
        })
        .collect();
    println!(
        "{}",
        table::render(&["brand", "share of voice", "sentiment", "engagement"], rows)
    );

    let brand = resolve_primary_brand(&analyses);
    let position = brand
        .map(|b| b.position.trim())
        .filter(|p| !p.is_empty())
        .unwrap_or(demo::DEFAULT_POSITION);
    let gap = brand
        .map(|b| b.gap_to_leader.trim())
        .filter(|g| !g.is_empty())
        .unwrap_or(demo::DEFAULT_GAP_TO_LEADER);
    println!("  Your Position: {}", style(position).cyan());
    println!("  Gap to Leader: {}", style(gap).green());
}

fn render_risks(client: &ApiClient, global: &GlobalOpts) {
    heading("Risks", "Emerging threats to watch");
    let store = fetch_widget::<Risk>(client, global, "risks", &ListQuery::active());
    let active = store.active();
    let fallback = demo::risks();
    let risks: Vec<&Risk> = if active.is_empty() {
        fallback.iter().collect()
    } else {
        active
    };

    for risk in &risks {
        let severity = match risk.severity {
            crate::entities::risk::RiskSeverity::Critical => style("critical").red().to_string(),
            crate::entities::risk::RiskSeverity::High => style("high").yellow().to_string(),
            other => other.to_string(),
        };
        println!(
            "  {} [{}] {:.0}% probability, {}",
            style(&risk.title).bold(),
            severity,
            risk.probability,
            risk.trend
        );
        println!("    {}", style(&risk.description).dim());
        for ind in &risk.indicators {
            println!("      {} = {} ({:+})", ind.label, ind.value, ind.change);
        }
        if !risk.mitigation_strategy.is_empty() {
            println!(
                "    {} {} mitigation step(s)",
                style("·").dim(),
                risk.mitigation_strategy.len()
            );
        }
    }
}

fn render_opportunities(client: &ApiClient, global: &GlobalOpts) {
    heading("Opportunities", "Openings worth pursuing");
    let store = fetch_widget::<Opportunity>(client, global, "opportunities", &ListQuery::active());
    let active = store.active();
    let fallback = demo::opportunities();
    let opportunities: Vec<&Opportunity> = if active.is_empty() {
        fallback.iter().collect()
    } else {
        active
    };

    for opp in &opportunities {
        println!(
            "  {} [{} potential] {:.0}% confidence, {}",
            style(&opp.title).bold(),
            opp.potential,
            opp.confidence_score,
            opp.timeframe
        );
        println!("    {}", style(&opp.description).dim());
        for metric in &opp.key_metrics {
            println!("      {}: {}", metric.label, metric.value);
        }
        for action in &opp.recommended_actions {
            println!("    {} {}", style("→").cyan(), action);
        }
    }
}

fn render_clusters(client: &ApiClient, global: &GlobalOpts) {
    heading("Conversation Clusters", "Grouped discussion themes");
    let store = fetch_widget::<ConversationCluster>(client, global, "conversation clusters", &ListQuery::default());
    let active = store.active();
    let fallback = demo::clusters();
    let clusters: Vec<&ConversationCluster> = if active.is_empty() {
        fallback.iter().collect()
    } else {
        active
    };

    for cluster in &clusters {
        let glyph = match cluster.trend {
            ClusterTrend::Up => style("↑").yellow().to_string(),
            ClusterTrend::Down => style("↓").cyan().to_string(),
            ClusterTrend::Stable => style("→").dim().to_string(),
        };
        let sentiment = if cluster.sentiment < 0.0 {
            style(format_sentiment(cluster.sentiment)).red()
        } else {
            style(format_sentiment(cluster.sentiment)).green()
        };
        println!(
            "  {} {}  {} mentions  {} sentiment",
            style(&cluster.theme).bold(),
            glyph,
            format_count(cluster.size),
            sentiment
        );
        if !cluster.keywords.is_empty() {
            println!("    {}", style(cluster.keywords.join(", ")).dim());
        }
    }
}

fn render_actions(client: &ApiClient, global: &GlobalOpts, page: usize) {
    heading(
        "Priority Actions",
        "AI-recommended actions based on urgent issues",
    );
    let mut store = ActionStore::new();
    if let Err(e) = store.refresh(client, &ListQuery::default()) {
        println!("  {}", style(format!("Error: {}", e)).red());
        return;
    }
    if store.items().is_empty() {
        println!("  No priority actions found");
        return;
    }

    let pager = Pager::new(store.items().len(), ACTIONS_PER_PAGE, page);
    for action in pager.visible(store.items()) {
        let priority = match action.priority {
            crate::entities::action::ActionPriority::Critical => style("critical").red().to_string(),
            crate::entities::action::ActionPriority::High => style("high").yellow().to_string(),
            crate::entities::action::ActionPriority::Medium => "medium".to_string(),
        };
        println!(
            "  {} [{}] {}",
            style(&action.title).bold(),
            priority,
            style(store.status_of(&action.id).label()).cyan()
        );
        println!("    {}", style(&action.description).dim());
        println!(
            "    impact {} / effort {}   {} mentions   {} sentiment   {}",
            action.impact,
            action.effort,
            format_count(action.mentions),
            format_sentiment(action.sentiment),
            action.trend
        );
        println!("    {} {}", style("recommendation:").dim(), action.recommendation);
    }
    println!();
    println!(
        "  {}  page {}/{}  (--page N to navigate, wraps around)",
        pager.dots(),
        pager.page() + 1,
        pager.total_pages()
    );
}
