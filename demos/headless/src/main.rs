//! headless — run either model without a UI and log progress.
//!
//! ```text
//! RUST_LOG=debug cargo run -p headless -- diffusion --agents 500 --ticks 300
//! cargo run -p headless --release -- flocking --agents 2000 --size 1000
//! ```

use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;

use abm_agent::{Agent, KnowledgeAgent, centroid, mean_speed};
use abm_core::{PopulationConfig, Tick};
use abm_diffusion::{DiffusionModel, DiffusionParams};
use abm_flocking::{FlockingModel, FlockingParams};
use abm_sim::{SimBuilder, SimObserver, SnapshotRecorder};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ModelKind {
    Flocking,
    Diffusion,
}

#[derive(Parser, Debug)]
#[command(about = "Run a flocking or knowledge-diffusion population headless")]
struct Cli {
    #[arg(value_enum)]
    model: ModelKind,

    #[arg(long, default_value_t = 200)]
    agents: usize,

    /// Side length of the square domain.
    #[arg(long, default_value_t = 500.0)]
    size: f64,

    #[arg(long, default_value_t = 500)]
    ticks: u64,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Log a summary line every this many ticks.
    #[arg(long, default_value_t = 50)]
    interval: u64,

    /// Frames kept in the playback buffer.
    #[arg(long, default_value_t = 100)]
    keep_frames: usize,
}

// ── Observers ─────────────────────────────────────────────────────────────────

/// Logs a one-line population summary with every snapshot and keeps a
/// bounded playback buffer.
struct ProgressLog<A: Clone> {
    summarize: fn(&[A]) -> String,
    frames: SnapshotRecorder<A>,
}

impl<A: Clone> SimObserver<A> for ProgressLog<A> {
    fn on_snapshot(&mut self, tick: Tick, agents: &[A]) {
        info!("{tick}: {}", (self.summarize)(agents));
        self.frames.on_snapshot(tick, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!(
            "finished at {final_tick}; {} frames buffered for playback",
            self.frames.len()
        );
    }
}

fn flock_summary(agents: &[Agent]) -> String {
    let c = centroid(agents);
    format!("centroid ({:.1}, {:.1})  mean speed {:.3}", c.x, c.y, mean_speed(agents))
}

fn knowledge_summary(agents: &[KnowledgeAgent]) -> String {
    let informed = agents.iter().filter(|a| a.is_informed()).count();
    // Level above which a renderer highlights an agent.
    let expert = agents.iter().filter(|a| a.knowledge_level > 0.8).count();
    let mean =
        agents.iter().map(|a| a.knowledge_level).sum::<f64>() / agents.len().max(1) as f64;
    format!("informed {informed}/{}  experts {expert}  mean {mean:.3}", agents.len())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = PopulationConfig::new(cli.agents, cli.size, cli.seed);
    config.validate()?;
    info!(
        "{:?}: {} agents on a {}-unit domain, {} ticks, seed {}",
        cli.model, cli.agents, cli.size, cli.ticks, cli.seed
    );

    let t0 = Instant::now();
    match cli.model {
        ModelKind::Flocking => {
            let model = FlockingModel::from_config(&config, FlockingParams::default())?;
            let mut sim = SimBuilder::new(model)
                .total_ticks(cli.ticks)
                .snapshot_interval(cli.interval)
                .build()?;
            let mut obs = ProgressLog {
                summarize: flock_summary,
                frames: SnapshotRecorder::with_frame_limit(cli.keep_frames),
            };
            sim.run(&mut obs);

            let c = sim.model.centroid();
            info!(
                "final: centroid ({:.1}, {:.1}), mean speed {:.3}",
                c.x,
                c.y,
                sim.model.mean_speed()
            );
        }
        ModelKind::Diffusion => {
            let model = DiffusionModel::from_config(&config, DiffusionParams::default())?;
            let mut sim = SimBuilder::new(model)
                .total_ticks(cli.ticks)
                .snapshot_interval(cli.interval)
                .build()?;
            let mut obs = ProgressLog {
                summarize: knowledge_summary,
                frames: SnapshotRecorder::with_frame_limit(cli.keep_frames),
            };
            sim.run(&mut obs);

            let stats = sim.model.stats();
            info!(
                "final: {} informed ({:.1}%), {} saturated, mean knowledge {:.3}",
                stats.informed,
                stats.informed_fraction * 100.0,
                stats.saturated,
                stats.mean_knowledge
            );
        }
    }
    info!("elapsed {:.3} s", t0.elapsed().as_secs_f64());

    Ok(())
}
