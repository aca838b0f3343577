use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use contrast_grid::api;
use contrast_grid::models::{AppConfig, AxisState};
use contrast_grid::server;
use contrast_grid::services::history::location_for;
use contrast_grid::services::{
    input_parser, matrix, state_codec, ColorMath, CssColorMath, GridView, QueryParams,
};

#[derive(Parser)]
#[command(name = "contrast-grid")]
#[command(about = "Contrast Grid - pairwise color contrast with shareable links")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print a contrast grid for two color lists
    Grid {
        /// File with the X axis colors (columns), one per line
        #[arg(short, long)]
        x: PathBuf,

        /// File with the Y axis colors (rows); defaults to the X axis
        #[arg(short, long)]
        y: Option<PathBuf>,

        /// Minimum contrast ratio; lower cells are marked with `*`
        #[arg(short, long)]
        threshold: Option<f64>,
    },
    /// Print a shareable link for two color lists
    Link {
        /// File with the X axis colors (columns), one per line
        #[arg(short, long)]
        x: PathBuf,

        /// File with the Y axis colors (rows); defaults to the X axis
        #[arg(short, long)]
        y: Option<PathBuf>,

        /// Base URL (overrides base_url from config)
        #[arg(long)]
        base: Option<String>,
    },
    /// Decode a shared query string and print both axes as JSON
    Decode {
        /// Query string or full URL
        query: String,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contrast Grid API",
        description = "Pairwise color contrast with shareable URL state",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_grid, api::handle_parse, api::handle_encode),
    components(schemas(
        GridView,
        api::ParseRequest,
        api::ParseResponse,
        api::EncodeRequest,
        api::EncodeResponse,
    )),
    tags(
        (name = "Grid", description = "Contrast grid computation"),
        (name = "Input", description = "Parsing and link building")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Grid { x, y, threshold }) => {
            run_grid_command(&x, y.as_deref(), threshold)
        }
        Some(Commands::Link { x, y, base }) => run_link_command(&x, y.as_deref(), base),
        Some(Commands::Decode { query }) => run_decode_command(&query),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contrast_grid=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn load_config() -> AppConfig {
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    AppConfig::load(config_file.as_deref())
}

/// Read and parse both axes; Y falls back to X when absent or empty
fn read_axes(
    x_path: &Path,
    y_path: Option<&Path>,
    math: &dyn ColorMath,
) -> anyhow::Result<(AxisState, AxisState)> {
    let x_text = std::fs::read_to_string(x_path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", x_path.display()))?;
    let x = input_parser::parse(&x_text, math);

    let y = match y_path {
        Some(path) => {
            let y_text = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
            input_parser::parse(&y_text, math)
        }
        None => AxisState::default(),
    };
    let y = if y.is_empty() { x.clone() } else { y };

    Ok((x, y))
}

/// Print a grid as a plain text table
fn run_grid_command(x_path: &Path, y_path: Option<&Path>, threshold: Option<f64>) -> anyhow::Result<()> {
    init_cli_logging();

    let config = load_config();
    let math = CssColorMath::new();
    let (x, y) = read_axes(x_path, y_path, &math)?;

    if x.is_empty() {
        eprintln!("No valid colors in {}", x_path.display());
        std::process::exit(1);
    }

    let threshold = config.threshold(threshold);
    let grid = matrix::build_grid(&x, &y, &math);
    let view = GridView::build(&grid, &math, threshold, &config.readable_candidates);

    print!("{}", format_text_grid(&view));
    println!(
        "\n{} of {} pairs below {threshold}",
        view.failing(),
        x.len() * y.len()
    );

    Ok(())
}

fn format_text_grid(view: &GridView) -> String {
    let labels = view
        .header
        .iter()
        .chain(view.rows.iter().map(|row| &row.swatch))
        .map(|s| s.label.chars().count());
    let width = labels.max().unwrap_or(0).max(6) + 2;

    let mut out = format!("{:width$}", "");
    for column in &view.header {
        out.push_str(&format!("{:>width$}", column.label));
    }
    out.push('\n');

    for row in &view.rows {
        out.push_str(&format!("{:<width$}", row.swatch.label));
        for cell in &row.cells {
            let mark = if cell.passes { " " } else { "*" };
            let value = format!("{}{mark}", cell.display_ratio);
            out.push_str(&format!("{value:>width$}"));
        }
        out.push('\n');
    }

    out
}

/// Print a shareable URL for two color lists
fn run_link_command(x_path: &Path, y_path: Option<&Path>, base: Option<String>) -> anyhow::Result<()> {
    init_cli_logging();

    let config = load_config();
    let math = CssColorMath::new();
    let (x, y) = read_axes(x_path, y_path, &math)?;

    let mut params = QueryParams::new();
    if !state_codec::encode(&mut params, &x, &y)? {
        eprintln!("No valid colors in {}", x_path.display());
        std::process::exit(1);
    }

    let base = base.unwrap_or(config.base_url);
    println!("{}{}", base.trim_end_matches('/'), location_for("/", &params));

    Ok(())
}

/// Decode a query string (or URL) and print the state
fn run_decode_command(query: &str) -> anyhow::Result<()> {
    init_cli_logging();

    let query = query.split_once('?').map_or(query, |(_, q)| q);
    match state_codec::decode(query)? {
        Some(state) => println!("{}", serde_json::to_string_pretty(&state)?),
        None => println!("No grid state in query"),
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Contrast Grid v{VERSION}");
    println!("Pairwise color contrast with shareable links\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    println!("\nConfig:  {config_source}");

    println!("\nCommands:");
    println!("  contrast-grid serve    Start the HTTP server");
    println!("  contrast-grid grid     Print a contrast grid");
    println!("  contrast-grid link     Print a shareable link");
    println!("  contrast-grid decode   Decode a shared link");
    println!("\nRun 'contrast-grid --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contrast_grid=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = load_config();

    tracing::info!(
        default_threshold = config.default_threshold,
        base_url = %config.base_url,
        "Configuration ready"
    );

    let state = server::create_app_state(config)?;

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Contrast grid server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
