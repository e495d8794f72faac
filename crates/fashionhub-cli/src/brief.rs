//! Brief board command handlers for the CLI.
//!
//! `post` submits through the stub backend, which keeps nothing, so the
//! created record is printed instead of being stored. `board` reads the briefs
//! pinned in the seed directory.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::Subcommand;
use fashionhub_client::{actions, Credentials, MemoryTokenStore, Session, StubBackend};
use fashionhub_core::{
    AppConfig, BoardQuery, Brief, BriefCategory, BriefStatus, BriefVisibility, BudgetRange,
    NewBrief, ProductCategory, SortKey, Tag,
};

use crate::directory::{clip, seeded_backend};

/// Sub-commands available under `brief`.
#[derive(Debug, Subcommand)]
pub enum BriefCommands {
    /// Post a new brief
    Post {
        /// Account posting the brief
        #[arg(long)]
        email: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Product categories (repeatable, e.g. --product-category knits)
        #[arg(long = "product-category")]
        product_category: Vec<ProductCategory>,
        #[arg(long, default_value = "materials")]
        category: BriefCategory,
        /// Tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<Tag>,
        #[arg(long, default_value = "public")]
        visibility: BriefVisibility,
        /// Require responders to sign an NDA
        #[arg(long)]
        nda: bool,
        /// Minimum order quantity
        #[arg(long)]
        moq: Option<u32>,
        /// Free-text timeline, e.g. "6-8 weeks"
        #[arg(long)]
        timeline: Option<String>,
        #[arg(long)]
        budget: Option<BudgetRange>,
        /// Print the created brief as JSON
        #[arg(long)]
        json: bool,
    },
    /// Browse the brief board
    Board {
        /// Search titles and descriptions
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        category: Option<BriefCategory>,
        #[arg(long)]
        status: Option<BriefStatus>,
        /// Sort key; a leading '-' sorts descending
        #[arg(long, default_value = "-created_date", allow_hyphen_values = true)]
        sort: SortKey,
    },
}

fn fmt_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Dispatch a `brief` sub-command.
///
/// # Errors
///
/// Propagates the failure of the selected command.
pub(crate) async fn run_brief(config: &AppConfig, command: BriefCommands) -> anyhow::Result<()> {
    match command {
        BriefCommands::Post {
            email,
            title,
            description,
            product_category,
            category,
            tags,
            visibility,
            nda,
            moq,
            timeline,
            budget,
            json,
        } => {
            let draft = NewBrief {
                title,
                description,
                category,
                product_category,
                quantity_moq: moq,
                timeline,
                budget_range: budget,
                nda_required: nda,
                visibility,
                tags,
                ..NewBrief::default()
            };
            run_brief_post(&email, &draft, json).await
        }
        BriefCommands::Board {
            query,
            category,
            status,
            sort,
        } => {
            let query = BoardQuery {
                text: query.unwrap_or_default(),
                category,
                status,
            };
            run_brief_board(config, &query, sort).await
        }
    }
}

/// Sign in as `email` and submit `draft`.
///
/// # Errors
///
/// Returns an error if sign-in fails or the draft is incomplete.
pub(crate) async fn run_brief_post(
    email: &str,
    draft: &NewBrief,
    json: bool,
) -> anyhow::Result<()> {
    let mut session = Session::new(
        Arc::new(StubBackend::new()),
        Box::new(MemoryTokenStore::new()),
    );
    session.login(&Credentials::email_only(email)).await?;

    let brief = actions::submit_brief(&session, draft).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&brief)?);
    } else {
        println!(
            "posted brief {} \"{}\" ({})",
            brief.id, brief.title, brief.status
        );
    }
    Ok(())
}

fn print_row(brief: &Brief) {
    let marker = if brief.featured { "*" } else { " " };
    println!(
        "{marker} {:<12}{:<14}{:<28}{}",
        fmt_date(brief.created_date),
        brief.status,
        brief.category.display_name(),
        clip(&brief.title, 50)
    );
}

/// Print the seeded board narrowed by `query` and ordered by `sort`.
///
/// # Errors
///
/// Returns an error if the seed cannot be loaded.
pub(crate) async fn run_brief_board(
    config: &AppConfig,
    query: &BoardQuery,
    sort: SortKey,
) -> anyhow::Result<()> {
    let backend = seeded_backend(config)?;
    let shown = actions::board(&backend, query, sort).await?;

    if shown.is_empty() {
        println!("no briefs match");
        return Ok(());
    }

    println!("{} briefs, {}", shown.len(), sort.label());
    let header = format!("  {:<12}{:<14}{:<28}TITLE", "POSTED", "STATUS", "CATEGORY");
    println!("{header}");
    for brief in &shown {
        print_row(brief);
    }
    Ok(())
}
