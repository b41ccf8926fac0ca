use adsim::{run_headless_with, Scenario, ScenarioConfig};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "disk.yaml")]
    file_name: String,

    /// Print a progress line every this many steps (0 = only the final summary)
    #[arg(short, long, default_value_t = 1000)]
    progress: u64,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario file {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario file {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    println!(
        "adsim: starting headless run with {} bodies, t_end = {}, h0 = {}",
        scenario.registry.len(),
        scenario.parameters.t_end,
        scenario.parameters.h0,
    );

    let progress = args.progress;
    let summary = run_headless_with(&mut scenario, |i, registry| {
        if progress > 0 && i % progress == 0 {
            println!(
                "t = {:9.3}  bodies = {:5}  total mass = {:12.4}",
                registry.t,
                registry.len(),
                registry.total_mass(),
            );
        }
    });

    println!(
        "done: {} steps, {} mergers, {} absorptions, {} bodies remain, star mass = {:.4}, total mass = {:.4}",
        summary.steps,
        summary.merges,
        summary.absorptions,
        summary.final_bodies,
        summary.final_star_mass,
        summary.total_mass,
    );

    Ok(())
}
