//! city-runner: headless runner for the smart-city zone simulator.
//!
//! Usage:
//!   city-runner --seed 12345 --ticks 6
//!   city-runner --seed 12345 --ticks 12 --mode auto_control
//!   city-runner --zones-file zones.json --ipc-mode

use anyhow::Result;
use smartcity_core::{
    advisor::{planner_advice, what_if_outcome, ZoneAdvice},
    config::SimConfig,
    engine::SimEngine,
    policy::Mode,
    snapshot::{CitySummary, StateSnapshot, ZoneSnapshot},
    types::Tick,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Step { count: u64 },
    SetMode { mode: String },
    SetSignal { zone: String, active: bool },
    Quit,
}

#[derive(serde::Serialize)]
struct UiState {
    tick:    Tick,
    mode:    String,
    zones:   Vec<ZoneSnapshot>,
    summary: CitySummary,
    outcome: String,
    advice:  Vec<ZoneAdvice>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", time_seed());
    let ticks = parse_arg(&args, "--ticks", 6u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let mode = match args.windows(2).find(|w| w[0] == "--mode") {
        Some(w) => w[1].parse::<Mode>()?,
        None => Mode::Manual,
    };
    let config = match args.windows(2).find(|w| w[0] == "--zones-file") {
        Some(w) => SimConfig::load(&w[1])?,
        None => SimConfig::default(),
    };

    if !ipc_mode {
        println!("Smart City Zone Control: city-runner");
        println!("  seed:  {seed}");
        println!("  ticks: {ticks}");
        println!("  mode:  {}", mode.label());
        println!("  zones: {}", config.zones.len());
        println!();
    }

    log::info!(
        "run starting: seed={seed} ticks={ticks} mode={}",
        mode.label()
    );

    let mut engine = SimEngine::new(config, seed);
    engine.set_mode(mode);

    if ipc_mode {
        run_ipc_loop(&mut engine)?;
    } else {
        let snapshot = engine.step(ticks);
        print_summary(&snapshot);
    }

    Ok(())
}

fn run_ipc_loop(engine: &mut SimEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{err_json}")?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {
                let state = build_ui_state(engine);
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
            IpcCommand::Step { count } => {
                engine.step(count);
                let state = build_ui_state(engine);
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
            IpcCommand::SetMode { mode } => match mode.parse::<Mode>() {
                Ok(m) => {
                    engine.set_mode(m);
                    let state = build_ui_state(engine);
                    writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
                }
                Err(e) => {
                    log::warn!("rejected set_mode: {e}");
                    let err_json = serde_json::json!({ "error": e.to_string() });
                    writeln!(stdout, "{err_json}")?;
                }
            },
            IpcCommand::SetSignal { zone, active } => {
                match engine.set_manual_flags(&[(zone, active)]) {
                    Ok(()) => {
                        let state = build_ui_state(engine);
                        writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
                    }
                    Err(e) => {
                        log::warn!("rejected set_signal: {e}");
                        let err_json = serde_json::json!({ "error": e.to_string() });
                        writeln!(stdout, "{err_json}")?;
                    }
                }
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn build_ui_state(engine: &SimEngine) -> UiState {
    let snapshot = engine.state();
    let outcome = what_if_outcome(snapshot.mode, &snapshot.zones);
    let advice = planner_advice(&snapshot.zones);
    UiState {
        tick:    snapshot.tick,
        mode:    snapshot.mode.label().to_string(),
        zones:   snapshot.zones,
        summary: snapshot.summary,
        outcome: outcome.message,
        advice,
    }
}

fn print_summary(snapshot: &StateSnapshot) {
    println!(
        "=== ZONE STATUS (tick {}, {}) ===",
        snapshot.tick,
        snapshot.mode.label()
    );
    for row in &snapshot.zones {
        println!(
            "  {:<12} | traffic {:>3} | complaints {:>3} | risk {:>3} | {:<9} | signal {}",
            row.zone,
            row.traffic,
            row.complaints,
            row.risk_score,
            row.status.label(),
            if row.signal_active { "on" } else { "off" },
        );
    }

    println!();
    println!("=== CITY SUMMARY ===");
    println!("  avg traffic:     {}", snapshot.summary.avg_traffic);
    println!("  avg complaints:  {}", snapshot.summary.avg_complaints);
    println!("  high-risk zones: {}", snapshot.summary.high_risk_zones);

    let outcome = what_if_outcome(snapshot.mode, &snapshot.zones);
    println!();
    println!("=== OUTCOME ===");
    println!("  {}", outcome.message);

    println!();
    println!("=== PLANNER RECOMMENDATIONS ===");
    for advice in planner_advice(&snapshot.zones) {
        println!("  [p{}] {:<12} {}", advice.priority, advice.zone, advice.message);
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
