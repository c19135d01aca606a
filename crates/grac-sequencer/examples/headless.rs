//! Runs a sequencer without a window, printing the ring and the score.
//!
//! Run with: RUST_LOG=debug cargo run -p grac-sequencer --example headless

use grac_automata::{CellValue, RuleTable};
use grac_sequencer::Sequencer;
use tracing_subscriber::EnvFilter;

const GLYPHS: [char; 5] = ['.', 'o', 'x', '#', '@'];

fn render(row: &[CellValue]) -> String {
    row.iter().map(|&v| GLYPHS[v as usize % GLYPHS.len()]).collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut sequencer = Sequencer::default();
    sequencer.sound_mut().cycle();

    let engine = sequencer.engine_mut();
    engine.set_grid_size(16, true);
    engine.set_alphabet_size(3, true);
    let rules = RuleTable::from_fn(3, |l, m, r| (l + 2 * m + r) % 3);
    for (i, &value) in rules.entries().iter().enumerate() {
        engine.set_rule(i, value);
    }
    engine.set_initial_cell(7, 1);
    engine.set_initial_cell(8, 2);

    sequencer.start();
    let ticks = sequencer.transport().ticks_per_advance();
    for _ in 0..8 * ticks {
        let Some(triggers) = sequencer.tick() else {
            continue;
        };
        let engine = sequencer.engine();
        println!(
            "gen {:>3}  {}  ({} sounds)",
            engine.generation(),
            render(engine.grid()),
            triggers.len()
        );
    }

    println!("score ahead:");
    for row in sequencer.engine().score().rows() {
        println!("         {}", render(row));
    }
}
