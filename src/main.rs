//! Soccer Pool entry point
//!
//! Native headless runner: drives the simulation at the fixed tick rate and
//! logs snapshots in place of drawing them.

use std::time::{Duration, Instant};

use glam::Vec2;

use soccer_pool::Settings;
use soccer_pool::consts::*;
use soccer_pool::sim::{InputEvent, PointerEvent, Renderer, SimulationLoop, Snapshot};

/// Ticks between scripted gestures
const DEMO_INTERVAL: u64 = 90;
/// Ticks the scripted pointer is held down
const DEMO_HOLD_TICKS: u64 = 12;
/// Longest scripted move
const DEMO_REACH: f32 = 120.0;

/// Stand-in renderer: logs every Nth snapshot as JSON
struct LogRenderer {
    interval: u64,
    last_logged: u64,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, snapshot: &Snapshot) {
        if self.interval == 0 || snapshot.tick < self.last_logged + self.interval {
            return;
        }
        self.last_logged = snapshot.tick;
        match snapshot.to_json() {
            Ok(json) => log::info!("{json}"),
            Err(e) => log::warn!("Failed to encode snapshot: {e}"),
        }
    }
}

/// Scripted player: presses on each home agent in turn and flicks it toward the ball
#[derive(Default)]
struct DemoScript {
    next_tick: u64,
    cycle: usize,
    release_at: Option<Vec2>,
}

impl DemoScript {
    fn poll(&mut self, sim: &SimulationLoop) -> Option<InputEvent> {
        let now = sim.state.time_ticks;
        if now < self.next_tick || sim.state.is_frozen() {
            return None;
        }

        if let Some(end) = self.release_at.take() {
            self.next_tick = now + DEMO_INTERVAL;
            return Some(InputEvent::Pointer(PointerEvent::Up(end)));
        }

        let home: Vec<_> = sim.state.agents.iter().filter(|a| a.is_human()).collect();
        let agent = home.get(self.cycle % home.len().max(1))?;
        self.cycle += 1;

        // Release point whose reversed, halved drag lands the agent on `reach`
        let reach = (sim.state.ball.pos - agent.pos).clamp_length_max(DEMO_REACH);
        self.release_at = Some(agent.pos - reach / DRAG_SCALE);
        self.next_tick = now + DEMO_HOLD_TICKS;
        Some(InputEvent::Pointer(PointerEvent::Down(agent.pos)))
    }
}

fn main() {
    env_logger::init();
    log::info!("Soccer Pool (native) starting...");

    let settings = Settings::load_or_default(&Settings::path_from_env());
    let mut sim = SimulationLoop::new(settings.resolve_seed());
    let mut renderer = LogRenderer {
        interval: u64::from(settings.snapshot_interval),
        last_logged: 0,
    };
    let mut demo = DemoScript::default();
    let mut last = Instant::now();

    while sim.is_running() {
        if settings
            .max_ticks
            .is_some_and(|max| sim.state.time_ticks >= max)
        {
            sim.push_event(InputEvent::Quit);
            break;
        }

        if settings.demo_input {
            if let Some(event) = demo.poll(&sim) {
                sim.push_event(event);
            }
        }

        if settings.realtime {
            let now = Instant::now();
            sim.update((now - last).as_secs_f32(), &mut renderer);
            last = now;
            std::thread::sleep(Duration::from_secs_f32(TICK_SECONDS / 2.0));
        } else {
            sim.step();
            renderer.draw(&sim.snapshot());
        }
    }

    let score = sim.state.score;
    log::info!(
        "Final score YOU {} : {} BOT after {} ticks",
        score.home,
        score.away,
        sim.state.time_ticks
    );
}
