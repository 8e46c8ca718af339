use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use solarmap::core::TopologySource;
use solarmap::config::parse_width;
use solarmap::core::viewport::DEFAULT_WIDTH;
use solarmap::{AppConfig, Catalog, Dashboard};

#[derive(Parser)]
#[command(name = "solarmap")]
#[command(about = "Interactive map of solar project sites")]
struct Cli {
    /// Topology URL or local TopoJSON file
    #[arg(long, value_name = "SRC")]
    topology: Option<String>,

    /// Project catalog JSON file (defaults to the built-in catalog)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Project id to select on start
    #[arg(long, value_name = "ID")]
    select: Option<String>,

    /// Render the map to an SVG file and exit
    #[arg(long, value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Map width in pixels for --snapshot
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_WIDTH, value_parser = parse_width)]
    width: f64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> AppConfig {
        AppConfig {
            topology: self
                .topology
                .as_deref()
                .map(TopologySource::parse)
                .unwrap_or_default(),
            catalog: self.catalog,
            initial_selection: self.select,
            snapshot: self.snapshot,
            snapshot_width: self.width,
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);
    let config = args.into_config();

    let catalog = match &config.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    log::info!(
        "Loaded {} projects ({} MW total)",
        catalog.len(),
        catalog.total_capacity_mw()
    );
    let catalog = Arc::new(catalog);

    if let Some(output) = &config.snapshot {
        let mut dashboard = Dashboard::new(catalog);
        if let Some(id) = &config.initial_selection {
            dashboard.select_project(id);
        }
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        return runtime.block_on(solarmap::snapshot::write_snapshot(
            &dashboard,
            config.topology.clone(),
            config.snapshot_width,
            output,
        ));
    }

    run_gui(config, catalog)
}

#[cfg(feature = "gui")]
fn run_gui(config: AppConfig, catalog: Arc<Catalog>) -> anyhow::Result<()> {
    solarmap::gui::run(config, catalog).map_err(|e| anyhow::anyhow!("GUI failed: {}", e))
}

#[cfg(not(feature = "gui"))]
fn run_gui(_config: AppConfig, _catalog: Arc<Catalog>) -> anyhow::Result<()> {
    anyhow::bail!("built without the `gui` feature; use --snapshot to render a map")
}
