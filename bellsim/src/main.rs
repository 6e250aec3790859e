use bellsim::{bench_timestep, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Override the environment seed from the scenario
    #[arg(long)]
    seed: Option<u64>,

    /// Time the integrator instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_timestep();
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(seed) = args.seed {
        scenario_cfg.environment.seed = seed;
    }
    info!(file = %args.file_name, seed = scenario_cfg.environment.seed, "loaded scenario");

    let mut scenario = Scenario::build_scenario(scenario_cfg).context("building scenario")?;
    let summary = scenario.run().context("running scenario")?;

    info!(
        frames = summary.frames,
        dings = summary.dings,
        stay_hits = summary.stay_hits,
        samples = scenario.history.len(),
        "episode finished"
    );
    print!("{}", serde_yaml::to_string(&summary)?);

    Ok(())
}
