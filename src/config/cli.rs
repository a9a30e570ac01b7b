use crate::render::Theme;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "folio-site")]
#[command(about = "Render the portfolio page and deliver contact messages")]
pub struct CliConfig {
    /// Path to TOML configuration file (optional, defaults are built in)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the theme from config
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write index.html to the output directory
    Render {
        /// Override [output].directory
        #[arg(long)]
        output: Option<String>,
    },
    /// Send a message through the contact form relay
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    /// Print the navigation section ids in page order
    Sections,
}
