//! `legalmatch` — match client cases to lawyers and draft documents.
//!
//! # Usage
//!
//! ```
//! legalmatch submit --description "..." --case-type "Family Law" \
//!   --location "San Francisco, CA" --email parent@example.com
//! legalmatch login michael.chen@legalmatch.com
//! legalmatch cases
//! legalmatch draft case2 --type "Engagement Letter"
//! legalmatch suggest case2 --type "Engagement Letter" --section 1 --apply
//! ```

mod app;
mod config;
mod display;

use std::{io, path::PathBuf};

use anyhow::Result;
use app::App;
use clap::{Parser, Subcommand};
use config::CliConfig;
use legalmatch_core::{
  case::{BudgetSensitivity, CaseType, NewCase},
  document::DocumentType,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "legalmatch", author, version, about = "Case matching and document drafting for lawyers")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, global = true, default_value = "legalmatch.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Submit a new case as a client.
  Submit {
    #[arg(long)]
    description: String,
    /// e.g. "Business Law", "Family Law", "Immigration".
    #[arg(long)]
    case_type:   CaseType,
    #[arg(long)]
    location:    String,
    #[arg(long, default_value = "Not Specified")]
    budget:      BudgetSensitivity,
    #[arg(long)]
    email:       String,
  },
  /// List cases submitted through `submit`.
  Submitted,
  /// Log in as a lawyer or admin.
  Login {
    email:    String,
    #[arg(long, env = "LEGALMATCH_PASSWORD", default_value = "", hide_env_values = true)]
    password: String,
  },
  Logout,
  /// Show the logged-in user.
  Whoami,
  /// List cases matched to the logged-in lawyer.
  Cases,
  /// Show a case and its documents.
  Case { case_id: String },
  /// List documents drafted for a case.
  Documents { case_id: String },
  /// Open (or create) a document for a case and print it.
  Draft {
    case_id:       String,
    #[arg(short = 't', long = "type")]
    document_type: DocumentType,
  },
  /// Replace the content of one section.
  Edit {
    case_id:       String,
    #[arg(short = 't', long = "type")]
    document_type: DocumentType,
    /// Section number, starting at 1.
    #[arg(short, long)]
    section:       usize,
    #[arg(long)]
    content:       String,
  },
  /// Generate suggested content for one section.
  Suggest {
    case_id:       String,
    #[arg(short = 't', long = "type")]
    document_type: DocumentType,
    #[arg(short, long)]
    section:       usize,
    /// Save the suggestion into the section.
    #[arg(long)]
    apply:         bool,
  },
  /// Write a document to a plain-text file.
  Export {
    case_id:       String,
    #[arg(short = 't', long = "type")]
    document_type: DocumentType,
    #[arg(short, long, default_value = ".")]
    out:           PathBuf,
  },
  /// Delete a document by id.
  Delete { document_id: String },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  // Logs go to stderr; stdout carries command output.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let config = CliConfig::load(&cli.config)?;
  let mut app = App::open(&config).await?;
  let mut out = io::stdout().lock();

  match cli.command {
    Command::Submit { description, case_type, location, budget, email } => {
      let input = NewCase {
        description,
        case_type,
        location,
        budget_sensitivity: budget,
        email,
      };
      app.submit(&mut out, input).await
    }
    Command::Submitted => app.submitted(&mut out).await,
    Command::Login { email, password } => app.login(&mut out, &email, &password).await,
    Command::Logout => app.logout(&mut out).await,
    Command::Whoami => app.whoami(&mut out),
    Command::Cases => app.matched_cases(&mut out),
    Command::Case { case_id } => app.show_case(&mut out, &case_id).await,
    Command::Documents { case_id } => app.documents(&mut out, &case_id).await,
    Command::Draft { case_id, document_type } => {
      app.draft(&mut out, &case_id, document_type).await
    }
    Command::Edit { case_id, document_type, section, content } => {
      app.edit(&mut out, &case_id, document_type, section, content).await
    }
    Command::Suggest { case_id, document_type, section, apply } => {
      app.suggest(&mut out, &case_id, document_type, section, apply).await
    }
    Command::Export { case_id, document_type, out: dir } => {
      app.export(&mut out, &case_id, document_type, &dir).await.map(|_| ())
    }
    Command::Delete { document_id } => app.delete(&mut out, &document_id).await,
  }
}
