use clap::{Parser, Subcommand};
use fashionhub_core::{Tag, UserRole};
use tracing_subscriber::EnvFilter;

mod brief;
mod directory;
mod session;

use brief::BriefCommands;

#[derive(Debug, Parser)]
#[command(name = "fashionhub-cli")]
#[command(about = "Fashion Hub command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search the professionals directory
    Directory {
        /// Free-text search over names, bios, skills and capabilities
        #[arg(long)]
        query: Option<String>,
        /// Only show one kind of professional (brand, supplier, expert)
        #[arg(long)]
        role: Option<UserRole>,
        /// Only show profiles serving this region (e.g., AU)
        #[arg(long)]
        region: Option<String>,
        /// Only show profiles carrying this tag (e.g., low_moq)
        #[arg(long)]
        tag: Option<Tag>,
        /// Print matching profiles as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the URL path for a page name
    PageUrl {
        /// Page name, e.g. "My Page"
        name: String,
    },
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
    },
    /// Sign out and clear the stored session token
    Logout,
    /// Show the account behind the stored session token
    Whoami,
    /// Post and browse briefs
    Brief {
        #[command(subcommand)]
        command: BriefCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = fashionhub_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(env = %config.env, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Directory {
            query,
            role,
            region,
            tag,
            json,
        }) => {
            let criteria = fashionhub_core::DirectoryCriteria {
                role,
                region,
                tag,
                query,
            };
            directory::run_directory(&config, &criteria, json).await?;
        }
        Some(Commands::PageUrl { name }) => {
            println!("{}", fashionhub_core::create_page_url(&name));
        }
        Some(Commands::Login { email }) => session::run_login(&config, &email).await?,
        Some(Commands::Logout) => session::run_logout(&config).await?,
        Some(Commands::Whoami) => session::run_whoami(&config).await?,
        Some(Commands::Brief { command }) => brief::run_brief(&config, command).await?,
        None => println!("fashionhub-cli ready; run with --help to list commands"),
    }

    Ok(())
}
