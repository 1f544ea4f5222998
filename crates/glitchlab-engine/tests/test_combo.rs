//! End-to-end tests for the random effect combinator.
//!
//! Exercises tier bounds, distinctness, determinism, and descriptor
//! serialization against real buffers.

use std::collections::HashSet;

use glitchlab_engine::buffer::{Channels, PixelBuffer};
use glitchlab_engine::combo::{random_glitch_combo, sample_combo, EffectKind, EffectOp, Intensity};
use glitchlab_engine::effects::Direction;
use glitchlab_engine::rng::DeterministicRng;

fn test_image(width: u32, height: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height, Channels::Rgb);
    for y in 0..height {
        for x in 0..width {
            buf.set(
                x,
                y,
                &[
                    ((x * 3) % 256) as u8,
                    ((y * 5) % 256) as u8,
                    ((x + y) % 256) as u8,
                ],
            );
        }
    }
    buf
}

// ============================================================================
// Tier bounds and distinctness
// ============================================================================

/// Every tier draws its documented number of distinct operations.
#[test]
fn test_tier_bounds_hold_across_many_seeds() {
    let cases = [
        (Intensity::Low, 1usize, 2usize),
        (Intensity::Medium, 2, 4),
        (Intensity::High, 4, 6),
    ];

    for (intensity, lo, hi) in cases {
        for seed in 0..100 {
            let mut rng = DeterministicRng::new(seed);
            let ops = sample_combo(intensity, &mut rng);

            assert!(
                (lo..=hi).contains(&ops.len()),
                "{} drew {} ops for seed {}",
                intensity,
                ops.len(),
                seed
            );

            let kinds: HashSet<EffectKind> = ops.iter().filter_map(|op| op.kind()).collect();
            assert_eq!(
                kinds.len(),
                ops.len(),
                "{} repeated an effect kind for seed {}",
                intensity,
                seed
            );
        }
    }
}

/// Applying a combo to an image reports exactly the ops that ran.
#[test]
fn test_combo_reports_applied_ops() {
    let base = test_image(64, 64);
    let mut rng = DeterministicRng::new(11);
    let (glitched, ops) = random_glitch_combo(&base, Intensity::High, &mut rng).unwrap();

    assert!((4..=6).contains(&ops.len()));
    assert_eq!(glitched.width(), base.width());
    assert_eq!(glitched.height(), base.height());
    assert!(ops.iter().all(|op| op.kind().is_some()));
}

// ============================================================================
// Determinism
// ============================================================================

/// The same seed over the same input reproduces both the op list and the
/// output bytes.
#[test]
fn test_combo_is_reproducible() {
    let base = test_image(48, 48);

    for seed in [0u32, 1, 42, 9999] {
        let (out1, ops1) =
            random_glitch_combo(&base, Intensity::Medium, &mut DeterministicRng::new(seed))
                .unwrap();
        let (out2, ops2) =
            random_glitch_combo(&base, Intensity::Medium, &mut DeterministicRng::new(seed))
                .unwrap();

        assert_eq!(ops1, ops2, "op lists diverged for seed {}", seed);
        assert_eq!(out1, out2, "pixels diverged for seed {}", seed);
    }
}

/// Different seeds should draw different pipelines at least sometimes.
#[test]
fn test_different_seeds_vary_the_pipeline() {
    let mut distinct = HashSet::new();
    for seed in 0..20 {
        let mut rng = DeterministicRng::new(seed);
        let ops = sample_combo(Intensity::Medium, &mut rng);
        let kinds: Vec<EffectKind> = ops.iter().filter_map(|op| op.kind()).collect();
        distinct.insert(kinds);
    }
    assert!(
        distinct.len() > 1,
        "20 seeds produced a single pipeline shape"
    );
}

// ============================================================================
// Descriptor serialization
// ============================================================================

/// A sampled pipeline survives a JSON round trip unchanged.
#[test]
fn test_sampled_pipeline_roundtrips_through_json() {
    let mut rng = DeterministicRng::new(7);
    let ops = sample_combo(Intensity::High, &mut rng);

    let json = serde_json::to_string_pretty(&ops).unwrap();
    let back: Vec<EffectOp> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ops);
}

/// Deterministic descriptors replayed from JSON reproduce the original
/// output bytes.
#[test]
fn test_deterministic_ops_replay_from_json() {
    let base = test_image(32, 32);
    let ops = vec![
        EffectOp::RgbShift {
            r_shift: [4, 0],
            g_shift: [0, 0],
            b_shift: [-4, 0],
        },
        EffectOp::ScanLines {
            line_height: 2,
            intensity: 0.35,
        },
        EffectOp::WaveDistortion {
            amplitude: 6,
            frequency: 0.08,
            direction: Direction::Horizontal,
        },
    ];

    let apply_all = |ops: &[EffectOp]| {
        let mut rng = DeterministicRng::new(0);
        let mut current = base.clone();
        for op in ops {
            current = op.apply(&current, &mut rng).unwrap();
        }
        current
    };

    let first = apply_all(&ops);

    let json = serde_json::to_string(&ops).unwrap();
    let replayed: Vec<EffectOp> = serde_json::from_str(&json).unwrap();
    let second = apply_all(&replayed);

    assert_eq!(first, second, "replayed pipeline diverged");
}
