use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{render_reports, user_payload};

#[derive(Parser)]
#[command(name = "schoolhub")]
#[command(about = "Multi-school portal tools: printable report cards and user payloads")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render report-card records into a printable A4 HTML document
    ///
    /// The input is the JSON array returned by the report-card-data
    /// endpoint. Every record becomes one page, in input order.
    RenderReports {
        /// Path to the JSON array of report-card records
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the HTML document
        ///
        /// Parent directories are created if they don't exist.
        #[arg(short, long)]
        output: PathBuf,

        /// Application name shown in the document title
        #[arg(long, env = "APP_NAME", default_value = common::DEFAULT_APP_NAME)]
        app_name: String,
    },
    /// Build the create/update payload for a user form and print it as JSON
    UserPayload {
        /// Path to the user form JSON
        #[arg(short, long)]
        input: PathBuf,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::RenderReports { input, output, app_name } => {
                render_reports(&input, &output, &app_name).await?;
            }
            Commands::UserPayload { input } => {
                let payload = user_payload(&input).await?;
                println!("{}", payload);
            }
        }
        Ok(())
    }
}
