use jello::{ScenarioConfig, Scenario};
use jello::simulation::energy::total_energy;
use jello::{bench_accumulate, bench_step};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "jello", about = "Mass-spring jello cube simulator")]
struct Args {
    /// Scenario file; bare names are looked up in the crate's scenarios/ directory
    #[arg(short, long, default_value = "jello.yaml")]
    file: PathBuf,

    /// Number of frames to simulate, each advancing `n` steps
    #[arg(long, default_value_t = 100)]
    frames: u64,

    /// Write the final world to this YAML file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file: &Path) -> Result<ScenarioConfig> {
    let config_path = if file.exists() {
        file.to_path_buf()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file)
    };
    debug!(path = %config_path.display(), "loading scenario");

    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    if args.bench {
        bench_accumulate();
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    let e0 = total_energy(&scenario.world, &scenario.bbox);
    info!(energy = e0, frames = args.frames, "starting run");

    for frame in 0..args.frames {
        scenario.advance_frame();
        debug!(
            frame,
            t = scenario.t,
            energy = total_energy(&scenario.world, &scenario.bbox),
            "frame"
        );
    }

    info!(
        steps = scenario.steps,
        t = scenario.t,
        energy = total_energy(&scenario.world, &scenario.bbox),
        "run finished"
    );

    if let Some(path) = args.output {
        scenario.to_config().write_to_path(&path)?;
        info!(path = %path.display(), "world saved");
    }

    Ok(())
}
