//! Ring-level properties of the recoloring engine.

use cv::engine::{run_all, run_reference};
use cv::fill::fill_proper;
use cv::ring::{Color, ColorStore, check_proper, color_bound_after};
use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

/// Nudge colors until no two ring neighbors are equal.
fn make_proper(mut colors: Vec<Color>) -> Vec<Color> {
    let n = colors.len();
    for i in 1..n {
        while colors[i] == colors[i - 1] {
            colors[i] = colors[i].wrapping_add(1);
        }
    }
    while colors[n - 1] == colors[0] || colors[n - 1] == colors[n - 2] {
        colors[n - 1] = colors[n - 1].wrapping_add(1);
    }
    colors
}

fn ring_strategy(max_len: usize) -> impl Strategy<Value = Vec<Color>> {
    prop::collection::vec(any::<u64>(), 2..max_len).prop_map(make_proper)
}

fn seeded_ring(length: usize, seed: u64) -> Vec<Color> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut colors = vec![0; length];
    fill_proper(&mut rng, &mut colors).unwrap();
    colors
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_blocked_matches_reference(
        colors in ring_strategy(120),
        rounds in 1usize..7,
        cpus in 1usize..9,
    ) {
        let cpus = cpus.min(colors.len());
        let mut expected = colors.clone();
        run_reference(&mut expected, rounds);

        let mut actual = colors;
        run_all(&mut actual, cpus, rounds);
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_every_round_stays_proper(colors in ring_strategy(80), rounds in 1usize..6) {
        let cpus = colors.len().min(2);
        let mut ring = colors;
        for _ in 0..rounds {
            run_all(&mut ring, cpus, 1);
            prop_assert!(check_proper(&ring).is_ok());
        }
    }

    #[test]
    fn test_rounds_compose(colors in ring_strategy(80), first in 1usize..4, second in 1usize..4) {
        let mut split = colors.clone();
        run_all(&mut split, 1, first);
        run_all(&mut split, 1, second);

        let mut joined = colors;
        run_all(&mut joined, 1, first + second);
        prop_assert_eq!(split, joined);
    }

    #[test]
    fn test_bit_width_never_grows(colors in ring_strategy(80), rounds in 1usize..7) {
        let mut store = ColorStore::new(colors).unwrap();
        let mut width = store.max_bit_width();
        for _ in 0..rounds {
            run_all(store.as_mut_slice(), 1, 1);
            let next = store.max_bit_width();
            prop_assert!(next <= width);
            width = next;
        }
    }

    #[test]
    fn test_four_rounds_reach_six_colors(colors in ring_strategy(200)) {
        let cpus = colors.len().min(3);
        let mut ring = colors;
        run_all(&mut ring, cpus, 4);
        prop_assert!(ring.iter().all(|&c| c < 6));
    }
}

#[test]
fn test_cpus_do_not_change_result() {
    let colors = seeded_ring(10_007, 1);
    let mut baseline = colors.clone();
    run_all(&mut baseline, 1, 4);

    for cpus in [2, 3, 5, 8, 64, 256] {
        let mut ring = colors.clone();
        run_all(&mut ring, cpus, 4);
        assert_eq!(ring, baseline, "cpus={cpus}");
    }
}

#[test]
fn test_one_node_per_worker() {
    for length in [2, 3, 5, 16] {
        let colors = seeded_ring(length, length as u64);
        let mut expected = colors.clone();
        run_reference(&mut expected, 4);

        let mut ring = colors;
        run_all(&mut ring, length, 4);
        assert_eq!(ring, expected, "length={length}");
    }
}

#[test]
fn test_color_bounds_per_round() {
    let colors = seeded_ring(4096, 99);
    for rounds in 1..=6 {
        let mut ring = colors.clone();
        run_all(&mut ring, 4, rounds);
        let bound = color_bound_after(64, rounds);
        assert!(ring.iter().all(|&c| c < bound), "rounds={rounds}");
        assert!(check_proper(&ring).is_ok());
    }
}

#[test]
fn test_golden_vector() {
    let mut ring = vec![1, 2, 1, 2];
    run_all(&mut ring, 2, 1);
    assert_eq!(ring, vec![1, 0, 1, 0]);
}
