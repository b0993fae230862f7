use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mixpanel_report::mongo::{aggregation, client};
use mixpanel_report::report;

/// Print event frequencies from the mixpanel_stage collection as CSV.
///
/// Output goes to stdout: a banner line, an `event,row_count` header, then
/// one `<event>,<count>` line per distinct event value. Logs go to stderr.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// MongoDB connection string
    #[arg(
        long,
        env = "MONGODB_URI",
        default_value = "mongodb://localhost:27017"
    )]
    uri: String,

    /// Database holding the mixpanel_stage collection
    #[arg(long, env = "MONGODB_DB", default_value = "mixpanel")]
    db: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs on stderr so the report on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args).await {
        error!("report failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(args: &Args) -> Result<()> {
    let client = client::connect(&args.uri).await?;
    info!(
        db = %args.db,
        collection = aggregation::EVENTS_COLLECTION,
        "connected"
    );

    let collection = client::events_collection(&client, &args.db).await?;
    let cursor = aggregation::event_counts(collection).await?;

    let mut stdout = std::io::stdout().lock();
    let rows = report::write_report(cursor, &mut stdout).await?;
    info!(rows, "report complete");

    Ok(())
}
