//! `tier-placement`: build an allocation plan from a benchmark's telemetry
//!
//! ```text
//! tier-placement -i btree -k 2 -s 5
//! ```
//!
//! reads `btree_logfile.txt`, `btree_optane-pcm-memory.csv` and
//! `btree_dram-pcm-memory.csv` and writes the plan to `output.txt`.

use anyhow::{Context, Result};
use clap::Parser;
use placement_io::{save_plan, BenchmarkPaths};
use std::path::PathBuf;
use tier_placement::logging::{init_logging, LogConfig, LogFormat};
use tier_placement::{PlacementConfig, PlacementPipeline};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "tier-placement")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Benchmark name used to derive the telemetry file names
    #[arg(short = 'i', long = "input-benchmark")]
    input_benchmark: String,

    /// AO spikes kept per bandwidth window
    #[arg(short = 'k', long = "top-k-ao-spikes")]
    top_k_ao_spikes: Option<usize>,

    /// Slow-tier samples averaged around each bandwidth sample
    #[arg(short = 's', long = "window-size")]
    window_size: Option<usize>,

    /// JSON configuration file; flags above override its values
    #[arg(long, env = "TIER_PLACEMENT_CONFIG")]
    config: Option<PathBuf>,

    /// Allocator log (default: <benchmark>_logfile.txt)
    #[arg(long)]
    log_path: Option<PathBuf>,

    /// Slow-tier PCM export (default: <benchmark>_optane-pcm-memory.csv)
    #[arg(long)]
    slow_tier_csv: Option<PathBuf>,

    /// Fast-tier PCM export (default: <benchmark>_dram-pcm-memory.csv)
    #[arg(long)]
    fast_tier_csv: Option<PathBuf>,

    /// Plan file to write
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log format: human or json
    #[arg(long, default_value = "human")]
    log_format: LogFormat,
}

impl Cli {
    fn placement_config(&self) -> Result<PlacementConfig> {
        let mut config = match &self.config {
            Some(path) => PlacementConfig::from_json_file(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => PlacementConfig::default(),
        };
        if let Some(top_k) = self.top_k_ao_spikes {
            config = config.with_top_k(top_k);
        }
        if let Some(window_size) = self.window_size {
            config = config.with_window_size(window_size);
        }
        Ok(config)
    }

    fn paths(&self) -> BenchmarkPaths {
        let mut paths =
            BenchmarkPaths::for_benchmark(&self.input_benchmark).with_output(&self.output);
        if let Some(log) = &self.log_path {
            paths = paths.with_log(log);
        }
        if let Some(csv) = &self.slow_tier_csv {
            paths = paths.with_slow_tier_csv(csv);
        }
        if let Some(csv) = &self.fast_tier_csv {
            paths = paths.with_fast_tier_csv(csv);
        }
        paths
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogConfig {
        format: cli.log_format,
        level: cli.log_level.clone(),
    })
    .context("initializing logging")?;

    let config = cli.placement_config()?;
    debug!(?config, "Effective configuration");
    let pipeline = PlacementPipeline::new(config).context("invalid placement parameters")?;

    let paths = cli.paths();
    info!(benchmark = %cli.input_benchmark, "Building placement plan");
    let outcome = pipeline
        .run_benchmark(&paths)
        .with_context(|| format!("analysing benchmark {}", cli.input_benchmark))?;

    for spike in &outcome.selected {
        debug!(
            interval = %spike.interval,
            weight = spike.weight,
            bw_index = spike.bw_index,
            "Selected AO spike"
        );
    }

    save_plan(&paths.output, outcome.plan.as_ref())
        .with_context(|| format!("writing plan to {}", paths.output.display()))?;
    Ok(())
}
