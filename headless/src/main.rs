//! Palm Pong headless driver
//!
//! Runs the simulation at a fixed frame rate with a scripted hand, standing
//! in for the camera tracker and the canvas presenter. Frames can be recorded
//! to a file as length-prefixed postcard messages.

mod script;
mod wire;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{
    Clock, Config, ControlSender, Game, GameRng, ManualClock, MatchHooks, Side, SystemClock,
};
use proto::{C2S, S2C};
use script::HandScript;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use wire::{frame_message, read_all, side_index, summarize, Recorder};

#[derive(Parser)]
#[command(name = "palm-pong-headless")]
#[command(about = "Run a Palm Pong match without camera or screen", long_about = None)]
struct Cli {
    /// RNG seed; entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many frames
    #[arg(long, default_value_t = 36_000)]
    frames: u32,

    /// Frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Countdown length in seconds
    #[arg(long)]
    countdown: Option<u32>,

    /// Points needed to win the match
    #[arg(long)]
    target: Option<u8>,

    /// Sweep paddle collisions so fast balls cannot tunnel
    #[arg(long, default_value = "false")]
    swept: bool,

    /// Advance a simulated clock instead of sleeping between frames
    #[arg(long, default_value = "false")]
    fast: bool,

    /// Report the camera as unavailable before the first frame
    #[arg(long, default_value = "false")]
    no_signal: bool,

    /// Press restart when a match ends instead of stopping
    #[arg(long, default_value = "false")]
    rematch: bool,

    /// Write every frame to this file
    #[arg(long)]
    record: Option<PathBuf>,

    /// Summarize a recording instead of playing
    #[arg(long, conflicts_with = "record")]
    replay: Option<PathBuf>,
}

struct LogHooks;

impl MatchHooks for LogHooks {
    fn on_match_over(&mut self, winner: Side) {
        info!(winner = winner.as_str(), "Match over");
    }

    fn on_opponent_victory_cue(&mut self) {
        info!("Opponent victory cue");
    }
}

fn build_config(cli: &Cli) -> Config {
    let mut config = Config::new();
    if let Some(secs) = cli.countdown {
        config.countdown_secs = secs;
    }
    if let Some(target) = cli.target {
        config.win_score = target;
    }
    config.swept_paddle_collision = cli.swept;
    config
}

/// Decode one inbound message and apply it
fn dispatch(game: &mut Game, control: &ControlSender, bytes: &[u8]) -> Result<()> {
    match C2S::from_bytes(bytes).context("Malformed control message")? {
        C2S::HandSample { x, y } => control.on_point(x, y),
        C2S::Restart => {
            if !game.restart() {
                debug!("Restart ignored while the match is running");
            }
        }
        C2S::SignalLost { reason } => game.report_signal_unavailable(&reason),
    }
    Ok(())
}

fn replay(path: &Path) -> Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read recording {}", path.display()))?;
    let summary = summarize(&read_all(&bytes)?);
    info!(
        frames = summary.frames,
        player = summary.score.0,
        opponent = summary.score.1,
        matches = summary.winners.len(),
        "Replay"
    );
    for winner in &summary.winners {
        info!(winner, "Match over");
    }
    for text in &summary.advisories {
        info!(text = text.as_str(), "Advisory");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Some(path) = &cli.replay {
        return replay(path);
    }
    anyhow::ensure!(cli.fps > 0, "--fps must be positive");

    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let sim_clock = ManualClock::new();
    let clock: Box<dyn Clock> = if cli.fast {
        Box::new(sim_clock.clone())
    } else {
        Box::new(SystemClock::new())
    };

    let mut game = Game::new(build_config(&cli), clock, rng)
        .context("Invalid game configuration")?
        .with_hooks(Box::new(LogHooks));
    let control = game.control();
    let mut recorder = cli.record.as_deref().map(Recorder::create).transpose()?;

    if cli.no_signal {
        let msg = C2S::SignalLost {
            reason: "no camera attached".to_string(),
        };
        dispatch(&mut game, &control, &msg.to_bytes()?)?;
        if let Some(rec) = recorder.as_mut() {
            rec.write(&S2C::Advisory {
                text: "Camera error — check permissions.".to_string(),
            })?;
        }
    }

    let script = HandScript::default();
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(cli.fps));
    info!(fps = cli.fps, frames = cli.frames, fast = cli.fast, "Starting match");

    for tick in 0..cli.frames {
        let started = Instant::now();
        let t = f64::from(tick) / f64::from(cli.fps);

        if !cli.no_signal {
            dispatch(&mut game, &control, &script.sample(t).to_bytes()?)?;
        }

        if let Some(side) = game.frame() {
            let s = &game.state().score;
            info!(
                scorer = side.as_str(),
                player = s.player,
                opponent = s.opponent,
                "Point"
            );
        }

        let snap = game.snapshot();
        if let Some(rec) = recorder.as_mut() {
            rec.write(&frame_message(tick, &snap))?;
        }

        if game.state().events.match_over {
            if let (Some(rec), Some(winner)) = (recorder.as_mut(), snap.winner) {
                rec.write(&S2C::MatchOver {
                    winner: side_index(winner),
                })?;
            }
            if cli.rematch {
                dispatch(&mut game, &control, &C2S::Restart.to_bytes()?)?;
            } else {
                break;
            }
        }

        if cli.fast {
            sim_clock.advance(frame_time.as_secs_f64());
        } else {
            std::thread::sleep(frame_time.saturating_sub(started.elapsed()));
        }
    }

    let snap = game.snapshot();
    info!(
        player = snap.player_score,
        opponent = snap.opponent_score,
        match_over = snap.match_over,
        "Finished"
    );

    if let Some(rec) = recorder {
        let written = rec.written();
        rec.finish()?;
        info!(messages = written, "Recording saved");
    }

    Ok(())
}
