//! End-to-end editing and playback through the public API.

use grac_automata::RuleTable;
use grac_sequencer::cursor::{step_alphabet, step_size, CellCursor, RuleCursor, Step};
use grac_sequencer::{Sequencer, SequencerConfig, Trigger};

/// Walks the rule cursor over every entry, row by row.
fn visit_rules(len: usize, mut f: impl FnMut(usize)) {
    let mut cursor = RuleCursor::default();
    let rows = len.div_ceil(8);
    for row in 0..rows {
        for _ in 0..8 {
            f(cursor.index());
            let before = cursor.index();
            cursor.right(len);
            if cursor.index() == before {
                break;
            }
        }
        while cursor.position().1 > 0 {
            cursor.left();
        }
        if row + 1 < rows {
            cursor.down(len);
        }
    }
}

#[test]
fn test_first_run_then_reconfigure() {
    let mut sequencer = Sequencer::new(SequencerConfig {
        frames_per_minute: 12,
        tempo_index: 5,
        ..Default::default()
    })
    .unwrap();
    sequencer.sound_mut().cycle();

    // First run: everything fresh.
    let config = *sequencer.engine().config();
    let mut size = config.default_size;
    for _ in 0..4 {
        size = step_size(&config, size, Step::Down);
    }
    assert_eq!(size, 4);
    let mut num_val = config.default_num_val;
    num_val = step_alphabet(&config, num_val, Step::Up);
    assert_eq!(num_val, 3);

    let engine = sequencer.engine_mut();
    engine.set_grid_size(size, true);
    engine.set_alphabet_size(num_val, true);

    let target = RuleTable::from_fn(3, |l, m, r| (l + m + r) % 3);
    let mut visited = Vec::new();
    visit_rules(engine.rules().len(), |index| {
        visited.push(index);
        for _ in 0..target.entries()[index] {
            engine.cycle_rule(index);
        }
    });
    visited.sort_unstable();
    assert_eq!(visited, (0..27).collect::<Vec<_>>());
    assert_eq!(engine.rules(), &target);

    let mut cell = CellCursor::default();
    engine.cycle_initial_cell(cell.index());
    cell.left(size);
    engine.cycle_initial_cell(cell.index());
    engine.cycle_initial_cell(cell.index());
    assert_eq!(engine.initial_grid(), &[1, 0, 0, 2]);

    let started = sequencer.start();
    assert_eq!(
        started,
        vec![
            Trigger { cell: 0, soundset: 0, sample: 0 },
            Trigger { cell: 3, soundset: 0, sample: 1 },
        ]
    );

    // Tempo 12 of 12 frames per minute advances every frame.
    let mut expected = vec![1, 0, 0, 2];
    for _ in 0..5 {
        let mut next = vec![0; 4];
        target.step_ring(&expected, &mut next);
        expected = next;

        let triggers = sequencer.tick().expect("advance every frame");
        let sounding: Vec<usize> = triggers.iter().map(|t| t.cell).collect();
        let want: Vec<usize> = (0..4).filter(|&i| expected[i] != 0).collect();
        assert_eq!(sounding, want);
        assert_eq!(sequencer.engine().grid(), expected.as_slice());
    }

    // Second pass: grow the ring and shrink the alphabet without a fresh reset.
    let engine = sequencer.engine_mut();
    engine.set_grid_size(6, false);
    engine.set_alphabet_size(2, false);
    assert_eq!(engine.initial_grid(), &[1, 0, 0, 0, 0, 0]);
    for index in 0..8 {
        let (l, m, r) = grac_automata::rule_neighbors(index, 2);
        let old = target.apply(l, m, r);
        let want = if old < 2 { old } else { 0 };
        assert_eq!(engine.rule(index), Some(want));
    }

    // Back to three values: the ternary table comes back intact.
    engine.set_alphabet_size(3, false);
    assert_eq!(engine.rules(), &target);

    sequencer.start();
    assert_eq!(sequencer.engine().generation(), 0);
    assert_eq!(sequencer.engine().grid(), &[1, 0, 0, 0, 0, 0]);
}

#[test]
fn test_muted_sequencer_still_advances() {
    let mut sequencer = Sequencer::new(SequencerConfig {
        frames_per_minute: 12,
        tempo_index: 5,
        ..Default::default()
    })
    .unwrap();
    let engine = sequencer.engine_mut();
    engine.set_grid_size(5, true);
    engine.set_alphabet_size(2, true);
    engine.set_rule(0, 1);
    assert!(sequencer.start().is_empty());

    let triggers = sequencer.tick().unwrap();
    assert!(triggers.is_empty());
    assert_eq!(sequencer.engine().grid(), &[1, 1, 1, 1, 1]);
}
