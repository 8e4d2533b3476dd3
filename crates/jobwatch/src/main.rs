//! jobwatch: email digests of new Amazon entry-level software postings.
//!
//! One invocation is one run: query the search endpoint for each configured
//! term, drop anything already notified or older than the window, email the
//! rest as an HTML digest with a CSV attachment, and record what was sent.
//! Periodicity comes from an external scheduler (cron, systemd timer).

use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jobwatch::tracker::{self, TrackerConfig};
use jobwatch_notify::{DEFAULT_SMTP_PORT, DEFAULT_SMTP_RELAY, EmailConfig, SmtpSender};
use jobwatch_search::{DEFAULT_SEARCH_URL, DEFAULT_WINDOW_DAYS, SearchClient};
use jobwatch_store::SeenStore;

#[derive(Parser)]
#[command(name = "jobwatch")]
#[command(about = "Email digests of new Amazon entry-level software postings", long_about = None)]
struct Cli {
    /// Sending account address (From, To, and SMTP auth user)
    #[arg(long, env = "EMAIL_ADDRESS")]
    email_address: String,

    /// App password for the sending account
    #[arg(long, env = "EMAIL_PASSWORD", hide_env_values = true)]
    email_password: String,

    /// Cc recipient
    #[arg(long, env = "CC_EMAIL")]
    cc_email: String,

    /// Comma-separated blind-copy recipients
    #[arg(long, env = "BCC_RECIPIENTS", value_delimiter = ',', required = true)]
    bcc_recipients: Vec<String>,

    /// Path of the seen-postings state file
    #[arg(long, default_value = "seen_jobs.json")]
    state_file: PathBuf,

    /// Maximum posting age in days
    #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
    window_days: i64,

    /// Search endpoint URL
    #[arg(long, default_value = DEFAULT_SEARCH_URL)]
    search_url: String,

    /// SMTP relay host
    #[arg(long, default_value = DEFAULT_SMTP_RELAY)]
    smtp_relay: String,

    /// SMTP relay port
    #[arg(long, default_value_t = DEFAULT_SMTP_PORT)]
    smtp_port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "jobwatch=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = TrackerConfig {
        window_days: cli.window_days,
    };
    let client = SearchClient::new(cli.search_url);
    let store = SeenStore::new(cli.state_file);
    let sender = SmtpSender::new(EmailConfig {
        address: cli.email_address,
        password: cli.email_password,
        cc: cli.cc_email,
        bcc: cli.bcc_recipients,
        relay: cli.smtp_relay,
        port: cli.smtp_port,
    });

    let summary = tracker::run_once(&config, &client, &store, &sender)
        .await
        .into_diagnostic()?;

    info!(
        new_postings = summary.new_postings,
        failed_terms = summary.failed_terms,
        delivered = summary.delivered,
        "run complete"
    );
    Ok(())
}
