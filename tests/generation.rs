//! Integration tests for the public generation contract.
//!
//! Everything here is deterministic: layers are built from fixed parameters
//! and compared against each other, never against wall-clock or OS entropy.

// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use std::collections::HashSet;

use night_sky::{LayerParams, SkyPreset, generate_layer, sample};
use proptest::prelude::*;

fn dim(count: usize) -> LayerParams {
	LayerParams::new("dim", count, 0.0, (0.6, 1.5), (0.18, 0.43))
}

fn bits(layer: &night_sky::Layer) -> Vec<[u64; 9]> {
	layer
		.particles
		.iter()
		.map(|p| {
			[
				p.position.x.to_bits(),
				p.position.y.to_bits(),
				p.size.to_bits(),
				p.opacity.to_bits(),
				p.hue.to_bits(),
				p.color.a.to_bits(),
				p.blur.to_bits(),
				p.animation_delay.to_bits(),
				p.animation_duration.to_bits(),
			]
		})
		.collect()
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn every_preset_layer_is_bit_reproducible() {
	for preset in [SkyPreset::starfield(), SkyPreset::ocean()] {
		for params in &preset.layers {
			let a = generate_layer(params);
			let b = generate_layer(params);
			assert_eq!(bits(&a), bits(&b), "layer '{}' differs", params.name);
		}
	}
}

#[test]
fn serialized_layers_are_byte_identical() {
	let params = &SkyPreset::starfield().layers[1];
	let a = serde_json::to_string(&generate_layer(params).particles).unwrap();
	let b = serde_json::to_string(&generate_layer(params).particles).unwrap();
	assert_eq!(a, b);
}

/// Particle 1 of a zero-based layer has key 1, so every attribute is the
/// sampler at that attribute's multiplier.
#[test]
fn second_dim_star_matches_the_sampler() {
	let layer = generate_layer(&dim(2));
	let p = &layer.particles[1];
	assert_eq!(p.position.x, sample(13.37));
	assert_eq!(p.position.y, sample(91.91));
	assert_eq!(p.size, 0.6 + sample(7.77) * (1.5 - 0.6));
	assert_eq!(p.opacity, 0.18 + sample(3.21) * (0.43 - 0.18));
	assert_eq!(p.hue, 200.0 + sample(4.2) * 15.0);
	assert_eq!(p.animation_delay, sample(8.88) * 6.0);
	assert_eq!(p.animation_duration, 5.0 + sample(6.66) * 7.0);
	assert_eq!(p.blur, 0.0);
}

/// Literal values recorded from an earlier build. A change to the sampler,
/// its amplitude, the multiplier table or the range mapping breaks this, as
/// would any drift between processes or releases.
#[test]
fn second_dim_star_matches_recorded_values() {
	let layer = generate_layer(&dim(3));
	let p = &layer.particles[1];
	let expected = [
		("x", p.position.x, 0.7997801506162432_f64),
		("y", p.position.y, 0.925558073546199),
		("size", p.size, 1.2805326654051896),
		("opacity", p.opacity, 0.2949846973805495),
		("hue", p.hue, 203.63413796178065),
		("delay", p.animation_delay, 1.6923552585085417),
		("duration", p.animation_duration, 9.235740066925246),
	];
	for (field, got, want) in expected {
		assert_eq!(got.to_bits(), want.to_bits(), "{field}: got {got}, want {want}");
	}
	assert_eq!(p.blur, 0.0);
}

// ---------------------------------------------------------------------------
// Counts and ranges
// ---------------------------------------------------------------------------

#[test]
fn count_fidelity() {
	assert!(generate_layer(&dim(0)).particles.is_empty());
	for n in [1, 50, 180] {
		assert_eq!(generate_layer(&dim(n)).particles.len(), n);
	}
}

#[test]
fn example_scenario() {
	let first = generate_layer(&dim(3));
	assert_eq!(first.particles.len(), 3);
	for p in &first.particles {
		assert!((0.6..1.5).contains(&p.size));
		assert!((0.18..0.43).contains(&p.opacity));
	}
	assert_eq!(first, generate_layer(&dim(3)));
}

#[test]
fn sampler_sweep_stays_bounded() {
	let seeds = (-1000..=1000).map(|i| i as f64 * 1000.0).chain([0.0, -1.0e6, 1.0e6, -0.5, 0.5]);
	for seed in seeds {
		let s = sample(seed);
		assert!((0.0..1.0).contains(&s), "sample({seed}) = {s}");
	}
}

// ---------------------------------------------------------------------------
// Layer independence
// ---------------------------------------------------------------------------

#[test]
fn preset_layers_never_share_a_position() {
	for preset in [SkyPreset::starfield(), SkyPreset::ocean()] {
		let layers: Vec<_> = preset.layers.iter().map(generate_layer).collect();
		for (i, a) in layers.iter().enumerate() {
			let seen: HashSet<_> = a
				.particles
				.iter()
				.map(|p| (p.position.x.to_bits(), p.position.y.to_bits()))
				.collect();
			for b in &layers[i + 1..] {
				for p in &b.particles {
					let pos = (p.position.x.to_bits(), p.position.y.to_bits());
					assert!(
						!seen.contains(&pos),
						"'{}' and '{}' share a particle at {:?}",
						a.name(),
						b.name(),
						p.position
					);
				}
			}
		}
	}
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
	#[test]
	fn generated_fields_stay_in_range(
		count in 0usize..64,
		seed_base in -10_000.0f64..10_000.0,
		size_lo in 0.1f64..3.0,
		size_span in 0.01f64..3.0,
		alpha_lo in 0.01f64..0.5,
		alpha_span in 0.01f64..0.45,
	) {
		let params = LayerParams::new(
			"prop",
			count,
			seed_base,
			(size_lo, size_lo + size_span),
			(alpha_lo, alpha_lo + alpha_span),
		);
		let layer = generate_layer(&params);
		prop_assert_eq!(layer.particles.len(), count);
		for p in &layer.particles {
			prop_assert!((0.0..1.0).contains(&p.position.x));
			prop_assert!((0.0..1.0).contains(&p.position.y));
			prop_assert!(p.size >= size_lo && p.size < size_lo + size_span);
			prop_assert!(p.opacity >= alpha_lo && p.opacity < alpha_lo + alpha_span);
			prop_assert!(p.opacity > 0.0 && p.opacity < 1.0);
			prop_assert!(p.blur >= 0.0);
		}
	}

	#[test]
	fn sample_is_bounded(seed in -1.0e6f64..1.0e6) {
		let s = sample(seed);
		prop_assert!((0.0..1.0).contains(&s));
	}
}
