#![no_main]

use grac_automata::AutomatonEngine;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any sequence of in-contract operations keeps every value in the alphabet
    // and never indexes outside the rule table.
    let mut engine = AutomatonEngine::default();
    let config = *engine.config();
    for op in data.chunks(3) {
        let [kind, a, b] = [op[0], *op.get(1).unwrap_or(&0), *op.get(2).unwrap_or(&0)];
        let fresh = b & 1 == 1;
        match kind % 7 {
            0 => engine.set_grid_size(config.clamp_size(a as usize), fresh),
            1 => engine.set_alphabet_size(config.clamp_alphabet(a), fresh),
            2 => engine.set_rule(usize::from(a) % (engine.rules().len() + 1), b),
            3 => engine.set_initial_cell(usize::from(a) % (engine.size() + 1), b),
            4 => {
                engine.cycle_rule(usize::from(a));
            }
            5 => engine.initialize(),
            _ => engine.advance(),
        }

        let n = engine.num_val();
        assert!(engine.rules().entries().iter().all(|&v| v < n));
        assert!(engine.initial_grid().iter().all(|&v| v < n));
        assert!(engine.grid().iter().all(|&v| v < n));
        assert!(engine.last_grid().iter().all(|&v| v < n));
        assert!(engine.next_grid().iter().all(|&v| v < n));
        assert!(engine.score().rows().iter().flatten().all(|&v| v < n));
    }
});
