use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rma_workflow::application::demo::demo_events;
use rma_workflow::application::runner::Runner;
use rma_workflow::application::service::RmaService;
use rma_workflow::config::{ChannelPolicy, ServiceConfig, TransitionPolicy};
use rma_workflow::interfaces::csv::EventReader;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Workflow script CSV file. Runs the built-in demo when omitted.
    script: Option<PathBuf>,

    /// Whether a request already approved or denied may be inspected again.
    #[arg(long, value_enum, default_value_t = TransitionPolicy::Permissive)]
    transitions: TransitionPolicy,

    /// Whether an unknown refund channel falls back to wallet or is rejected.
    #[arg(long, value_enum, default_value_t = ChannelPolicy::Lenient)]
    channels: ChannelPolicy,

    /// Masked card token credited by card refunds.
    #[arg(long, default_value = "XXXX-1234")]
    card_token: String,

    /// Wallet credited by wallet refunds.
    #[arg(long, default_value = "Wallet001")]
    wallet_id: String,

    /// Print the final summary as JSON.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            transitions: self.transitions,
            channels: self.channels,
            card_token: self.card_token.clone(),
            wallet_id: self.wallet_id.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let service = RmaService::in_memory(cli.service_config());

    let stdout = io::stdout();
    let mut runner = Runner::new(&service, stdout.lock());
    match &cli.script {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            let reader = EventReader::new(file);
            runner.run(reader.events()).await.into_diagnostic()?;
        }
        None => {
            let events = demo_events().into_diagnostic()?;
            runner
                .run(events.into_iter().map(Ok))
                .await
                .into_diagnostic()?;
        }
    }
    tracing::info!(rejected = runner.rejected(), "workflow finished");
    let mut out = runner.into_inner();

    let summary = service.summary().await.into_diagnostic()?;
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &summary).into_diagnostic()?;
        writeln!(out).into_diagnostic()?;
    } else {
        writeln!(out).into_diagnostic()?;
        write!(out, "{summary}").into_diagnostic()?;
    }

    Ok(())
}
