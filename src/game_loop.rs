//! Fixed-cadence game loop
//!
//! One thread, strictly sequential per tick: wait for the clock, poll input,
//! simulate, then redraw everything in draw order.

use crate::platform::{EventSource, FrameClock, Renderer};
use crate::sim::{TickInput, TickStatus, World, tick};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The player asked to quit
    Quit,
    /// The optional tick limit was reached
    TickLimit,
}

/// Draw the current world state as one frame
pub fn render(world: &World, renderer: &mut impl Renderer) {
    renderer.clear();
    for sprite in world.draw_list() {
        renderer.draw(sprite);
    }
    renderer.present();
}

/// Run until quit, or until `max_ticks` ticks have been simulated
pub fn run(
    world: &mut World,
    events: &mut impl EventSource,
    renderer: &mut impl Renderer,
    clock: &mut impl FrameClock,
    max_ticks: Option<u64>,
) -> LoopExit {
    let tick_rate = world.settings.tick_rate;
    log::info!("Game loop started at {tick_rate} ticks/s");

    loop {
        if max_ticks.is_some_and(|limit| world.time_ticks >= limit) {
            log::info!("Tick limit reached after {} ticks", world.time_ticks);
            return LoopExit::TickLimit;
        }

        let elapsed_ms = clock.tick(tick_rate);
        let input = TickInput::new(events.poll_events());

        if tick(world, &input) == TickStatus::Quit {
            return LoopExit::Quit;
        }

        render(world, renderer);

        if elapsed_ms > 2 * 1000 / u64::from(tick_rate.max(1)) {
            log::debug!("Slow frame: {elapsed_ms} ms on tick {}", world.time_ticks);
        }
    }
}
