//! Runs an automaton headlessly and prints a JSON summary.
//!
//! Usage:
//!   `tessel-run grid <rules.json> <steps> [options]`     - neighborhood rules
//!   `tessel-run pointer <rules.json> <steps> [options]`  - pointer rules
//!   `tessel-run linear <rule> <steps> [options]`         - elementary rule 0-255
//!
//! Options:
//!   `--config <file>`   engine configuration JSON (missing fields default)
//!   `--seed <n>`        fill the grid randomly before running (grid only)
//!   `--export <file>`   write the final grid state (grid and pointer only)
//!   `--json`            export as JSON instead of bincode
//!
//! Log level follows `RUST_LOG`, default `info`. Logs go to stderr.

use log::{LevelFilter, info};
use serde_json::{Value, json};
use simple_logger::SimpleLogger;
use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tessel_automata::{
    GridAutomaton, LinearConfig, LinearEngine, NeighborhoodConfig, NeighborhoodEngine,
    PointerConfig, PointerEngine, State,
};
use tessel_serde::{
    BincodeFormat, GridFormat, JsonFormat, export_grid_state, load_config_file,
    parse_neighborhood_rules, parse_pointer_rules,
};

type BoxError = Box<dyn Error>;

const USAGE: &str = "usage: tessel-run <grid|pointer|linear> <rules.json|rule> <steps> \
[--config <file>] [--seed <n>] [--export <file>] [--json]";

#[derive(Debug)]
enum Kind {
    Grid,
    Pointer,
    Linear,
}

#[derive(Debug)]
struct Options {
    kind: Kind,
    source: String,
    steps: u64,
    config: Option<PathBuf>,
    seed: Option<u64>,
    export: Option<PathBuf>,
    json: bool,
}

impl Options {
    fn parse(args: &[String]) -> Result<Self, String> {
        let [kind, source, steps, rest @ ..] = args else {
            return Err(USAGE.to_string());
        };
        let kind = match kind.as_str() {
            "grid" => Kind::Grid,
            "pointer" => Kind::Pointer,
            "linear" => Kind::Linear,
            other => return Err(format!("unknown automaton kind {other:?}\n{USAGE}")),
        };
        let steps = steps
            .parse()
            .map_err(|_| format!("invalid step count {steps:?}"))?;

        let mut options = Self {
            kind,
            source: source.clone(),
            steps,
            config: None,
            seed: None,
            export: None,
            json: false,
        };

        let mut rest = rest.iter();
        while let Some(flag) = rest.next() {
            let mut value = || {
                rest.next()
                    .cloned()
                    .ok_or_else(|| format!("{flag} needs a value"))
            };
            match flag.as_str() {
                "--config" => options.config = Some(value()?.into()),
                "--export" => options.export = Some(value()?.into()),
                "--seed" => {
                    let seed = value()?;
                    options.seed = Some(seed.parse().map_err(|_| format!("invalid seed {seed:?}"))?);
                }
                "--json" => options.json = true,
                other => return Err(format!("unknown option {other:?}\n{USAGE}")),
            }
        }
        Ok(options)
    }

    fn format(&self) -> Box<dyn GridFormat> {
        if self.json {
            Box::new(JsonFormat::pretty())
        } else {
            Box::new(BincodeFormat::new())
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match Options::parse(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("failed to install logger: {err}");
    }

    match run(&options) {
        Ok(summary) => {
            println!("{summary:#}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> Result<Value, BoxError> {
    match options.kind {
        Kind::Grid => run_grid(options),
        Kind::Pointer => run_pointer(options),
        Kind::Linear => run_linear(options),
    }
}

fn run_grid(options: &Options) -> Result<Value, BoxError> {
    let config: NeighborhoodConfig = match &options.config {
        Some(path) => load_config_file(path)?,
        None => NeighborhoodConfig::default(),
    };
    let ruleset = parse_neighborhood_rules(&fs::read(&options.source)?)?;
    let mut engine = NeighborhoodEngine::new(config, ruleset)?;

    if let Some(seed) = options.seed {
        let weights: Vec<(State, u32)> = engine.state_colors().keys().map(|&state| (state, 1)).collect();
        engine.fill_random(seed, &weights);
        info!("seeded {} live cells", engine.grid().population());
    }

    for _ in 0..options.steps {
        engine.step();
    }
    export(&engine, options)?;

    let bbox = engine.active_bounding_box().map(|region| {
        json!({
            "min_row": region.min_row,
            "max_row": region.max_row,
            "min_col": region.min_col,
            "max_col": region.max_col,
        })
    });
    Ok(json!({
        "kind": "grid",
        "generation": engine.generation(),
        "population": engine.grid().population(),
        "state_counts": engine.state_counts(),
        "active_bounding_box": bbox,
    }))
}

fn run_pointer(options: &Options) -> Result<Value, BoxError> {
    let config: PointerConfig = match &options.config {
        Some(path) => load_config_file(path)?,
        None => PointerConfig::default(),
    };
    let (rules, colors) = parse_pointer_rules(&fs::read(&options.source)?)?;
    let mut engine = PointerEngine::new(config, rules, colors)?;

    let mut capacity_events = 0u64;
    for _ in 0..options.steps {
        if engine.step_generation().capacity.is_some() {
            capacity_events += 1;
        }
    }
    export(&engine, options)?;

    Ok(json!({
        "kind": "pointer",
        "generation": engine.generation(),
        "pointers": engine.population(),
        "max_pointers": engine.max_pointers(),
        "capacity_events": capacity_events,
        "state_counts": engine.state_counts(),
    }))
}

fn run_linear(options: &Options) -> Result<Value, BoxError> {
    let mut config: LinearConfig = match &options.config {
        Some(path) => load_config_file(path)?,
        None => LinearConfig::default(),
    };
    config.rule = options
        .source
        .parse()
        .map_err(|_| format!("rule must be 0-255, got {:?}", options.source))?;

    let mut engine = LinearEngine::new(config)?;
    engine.seed_center();
    for _ in 0..options.steps {
        engine.step();
    }

    let latest: String = engine
        .latest()
        .iter()
        .map(|&cell| if cell == 1 { '#' } else { '.' })
        .collect();
    Ok(json!({
        "kind": "linear",
        "rule": engine.rule(),
        "generation": engine.generation(),
        "rows": engine.rows().len(),
        "latest": latest,
    }))
}

fn export<A: GridAutomaton>(engine: &A, options: &Options) -> Result<(), BoxError> {
    if let Some(path) = &options.export {
        let bytes = export_grid_state(engine, options.format().as_ref())?;
        fs::write(path, bytes)?;
        info!("wrote grid state to {}", path.display());
    }
    Ok(())
}
