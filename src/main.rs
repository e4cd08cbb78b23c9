use axum::routing::get;
use axum::{Json, Router};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use promo_portfolio::catalog::{
    catalog_router, portfolio_sheet, CatalogState, DimensionFilter, FilterSpec, SortKey,
};
use promo_portfolio::config::AppConfig;
use promo_portfolio::decision::flow::{HEIGHT_QUESTION_ID, STANDARDIZATION_QUESTION_ID};
use promo_portfolio::decision::recommendation::{
    FinishPreference, LightnessImportance, StrategicDriver,
};
use promo_portfolio::decision::{
    audit_table, decision_router, recommend, viability_summary, AnswerValue, Phase1Answers,
    RecommendationInputs,
};
use promo_portfolio::error::AppError;
use promo_portfolio::store::{demo_projects, MemoryStore, ProjectStore, SupabaseClient};
use promo_portfolio::telemetry;
use serde_json::json;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "Promo Portfolio",
    about = "Serve and query the development portfolio and its industrialization assessment",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Export the filtered portfolio as CSV
    Sheet(SheetArgs),
    /// Score an industrialization assessment from the command line
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug, Default)]
struct SheetArgs {
    /// Write the CSV to this path instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
    /// Free-text match on name and reference code
    #[arg(long)]
    search: Option<String>,
    /// Free-text match on municipality
    #[arg(long)]
    location: Option<String>,
    /// Comma-separated status labels
    #[arg(long)]
    status: Option<String>,
    /// Comma-separated business types
    #[arg(long, value_name = "TYPE")]
    business_type: Option<String>,
    /// Comma-separated regimes
    #[arg(long)]
    regime: Option<String>,
    /// Comma-separated floor counts
    #[arg(long)]
    floors: Option<String>,
    /// Comma-separated size ranges
    #[arg(long)]
    size: Option<String>,
    /// Sort order: recent, name or units
    #[arg(long, value_parser = parse_sort)]
    sort: Option<SortKey>,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Comma-separated answer values (1, 3 or 5) for questions 1..12
    #[arg(long, value_parser = parse_answer_values)]
    answers: AnswerList,
    /// Strategic driver option (a-d)
    #[arg(long)]
    motor: Option<char>,
    /// Lightness option (a-b)
    #[arg(long)]
    ligereza: Option<char>,
    /// Finish option (a-c)
    #[arg(long)]
    acabado: Option<char>,
}

#[derive(Debug, Clone)]
struct AnswerList(Vec<AnswerValue>);

fn parse_answer_values(raw: &str) -> Result<AnswerList, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let number: u8 = part
                .parse()
                .map_err(|_| format!("'{part}' is not a number"))?;
            AnswerValue::try_from(number).map_err(|err| err.to_string())
        })
        .collect::<Result<Vec<_>, _>>()
        .map(AnswerList)
}

fn parse_sort(raw: &str) -> Result<SortKey, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "recent" => Ok(SortKey::Recent),
        "name" => Ok(SortKey::Name),
        "units" => Ok(SortKey::Units),
        other => Err(format!("unknown sort order '{other}'")),
    }
}

fn dimension(raw: Option<String>) -> DimensionFilter {
    match raw {
        Some(raw) if !raw.trim().is_empty() => DimensionFilter::any_of(
            raw.split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        ),
        _ => DimensionFilter::Unconstrained,
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Sheet(args) => run_sheet(args).await,
        Command::Evaluate(args) => run_evaluate(args),
    }
}

/// Load the portfolio into memory once at startup. A configured backend
/// is authoritative; without one the bundled demo portfolio is served.
async fn hydrate(config: &AppConfig) -> (MemoryStore, Option<Arc<SupabaseClient>>) {
    match &config.backend {
        Some(backend) => match SupabaseClient::new(backend) {
            Ok(client) => {
                let projects = match client.fetch_all().await {
                    Ok(projects) => projects,
                    Err(err) => {
                        error!(error = %err, "initial portfolio fetch failed, starting empty");
                        Vec::new()
                    }
                };
                info!(count = projects.len(), "portfolio hydrated from backend");
                (MemoryStore::new(projects), Some(Arc::new(client)))
            }
            Err(err) => {
                error!(error = %err, "backend client unavailable, serving demo portfolio");
                (MemoryStore::new(demo_projects()), None)
            }
        },
        None => {
            info!("no backend configured, serving demo portfolio");
            (MemoryStore::new(demo_projects()), None)
        }
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (store, backend) = hydrate(&config).await;
    let state = CatalogState {
        store: Arc::new(store),
        backend,
    };

    let app = Router::new()
        .route("/healthz", get(healthcheck))
        .merge(catalog_router(state))
        .merge(decision_router());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(?config.environment, %addr, "portfolio service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_sheet(args: SheetArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let (store, _backend) = hydrate(&config).await;

    let spec = FilterSpec {
        search_term: args.search.unwrap_or_default(),
        location_term: args.location.unwrap_or_default(),
        status: dimension(args.status),
        business_type: dimension(args.business_type),
        regime: dimension(args.regime),
        floors: dimension(args.floors),
        size: dimension(args.size),
        sort: args.sort.unwrap_or_default(),
    };

    let records = store.fetch_all()?;
    let sheet = portfolio_sheet(&records, &spec, Local::now().date_naive());

    match args.output {
        Some(path) => {
            let file = File::create(&path)?;
            sheet.write_csv(file)?;
            println!("Wrote {} projects to {}", sheet.visible, path.display());
        }
        None => sheet.write_csv(io::stdout())?,
    }

    Ok(())
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let mut answers = Phase1Answers::new();
    for (index, value) in args.answers.0.iter().enumerate() {
        answers.record(index as u8 + 1, *value);
    }

    let report = viability_summary(&answers);
    println!("Industrialization assessment");
    println!(
        "Score: {} / {} ({})",
        report.score, report.max_score, report.title
    );
    println!("\n{}", report.narrative);

    println!("\nScore audit");
    for row in audit_table(&answers) {
        println!(
            "- {}: {} x{} = {} ({})",
            row.criterion,
            row.points,
            row.weight,
            row.subtotal,
            row.answer.unwrap_or("-")
        );
    }

    if args.motor.is_some() || args.ligereza.is_some() || args.acabado.is_some() {
        let inputs = RecommendationInputs {
            height: answers.value_for(HEIGHT_QUESTION_ID),
            standardization: answers.value_for(STANDARDIZATION_QUESTION_ID),
            driver: args.motor.and_then(StrategicDriver::from_option_id),
            lightness: args.ligereza.and_then(LightnessImportance::from_option_id),
            finish: args.acabado.and_then(FinishPreference::from_option_id),
        };
        let recommendation = recommend(&inputs);
        println!("\nRecommended system: {}", recommendation.system);
        println!("{}", recommendation.justification);
        for feature in recommendation.features {
            println!("- {feature}");
        }
        println!("Referencia: {}", recommendation.companies.join(", "));
    }

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
