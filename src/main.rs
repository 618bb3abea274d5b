use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};

use es_seed_products::conf;
use es_seed_products::{messages, seeder, EsClient, SeedError, SystemClock};

#[derive(Parser, Debug)]
#[command(name = "es-seed-products", version, about)]
struct Args {
    /// TOML or JSON config file; `ES_SEED_*` variables override it
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Elasticsearch URL
    #[arg(long)]
    url: Option<String>,
    /// Target index name
    #[arg(long = "index")]
    index_name: Option<String>,
    /// Number of documents to generate
    #[arg(long = "count", value_name = "COUNT")]
    document_count: Option<usize>,
    /// Fail when the bulk response rejects any document
    #[arg(long)]
    strict: bool,
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
    /// Log as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(debug: bool, json: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(args: Args) -> Result<(), SeedError> {
    let config = conf::load(args.config.as_deref())?.with_overrides(
        args.url,
        args.index_name,
        args.document_count,
        args.strict,
    );
    config.validate()?;

    let endpoint = config.get_endpoint();
    debug!(
        "Config loaded: endpoint={}, index={}, count={}, strict={}",
        serde_json::to_string(&endpoint.redacted()).unwrap_or_default(),
        config.get_index_name(),
        config.get_document_count(),
        config.is_strict()
    );

    let client = EsClient::connect(endpoint).await?;
    client.print_server_info("Store").await;

    let plan = config.to_plan();
    let index_status = seeder::provision(&client, &plan).await?;
    println!("{}", messages::index_status_line(&plan.index_name, index_status));

    let mut rng = rand::rng();
    let report = seeder::load(&client, &plan, &SystemClock, &mut rng).await?;
    for line in messages::insert_summary_lines(&report) {
        println!("{}", line);
    }

    seeder::check_report(&plan, &report)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug, args.json_logs);

    info!("Application started!");

    let result = run(args).await;
    if let Err(e) = &result {
        error!("Seeding failed: {}", e);
        eprintln!("{}", messages::failure_line(e));
    }
    ExitCode::from(messages::exit_code(&result))
}
