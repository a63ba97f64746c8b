//! Deterministic particle layer generation.
//!
//! A layer is produced from a [`LayerParams`] alone. Particle `i` of a layer is
//! keyed by `seed_base + i`, and each of its attributes samples
//! `sample(key * multiplier)` with the attribute's multiplier from the
//! layer's table ([`SEED_MULTIPLIERS_V1`] unless set otherwise). The tables
//! are part of the public contract: changing any entry changes the scene.

use log::debug;
use serde::Serialize;

use super::sampler::{lerp_range, sample};
use super::theme::Hsla;

/// Per-attribute seed multipliers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedMultipliers {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Diameter within the layer's size range.
	pub size: f64,
	/// Opacity within the layer's alpha range.
	pub opacity: f64,
	/// Hue within the cold-white band.
	pub hue: f64,
	/// Decides whether a particle blooms.
	pub blur_select: f64,
	/// Blur radius of a blooming particle.
	pub blur_amount: f64,
	/// Twinkle phase offset.
	pub delay: f64,
	/// Twinkle period.
	pub duration: f64,
}

/// Version 1 of the multiplier table, used by bright and near layers.
pub const SEED_MULTIPLIERS_V1: SeedMultipliers = SeedMultipliers {
	x: 13.37,
	y: 91.91,
	size: 7.77,
	opacity: 3.21,
	hue: 4.2,
	blur_select: 3.9,
	blur_amount: 1.11,
	delay: 8.88,
	duration: 6.66,
};

/// Version 1 table for dim stars: size and opacity use their own keys.
pub const SEED_MULTIPLIERS_DIM_V1: SeedMultipliers = SeedMultipliers {
	size: 5.55,
	opacity: 2.17,
	..SEED_MULTIPLIERS_V1
};

/// Base hue of the cold bluish-white tint, in degrees.
pub const HUE_BASE: f64 = 200.0;
/// Hue spread above [`HUE_BASE`].
pub const HUE_SPREAD: f64 = 15.0;
/// Saturation of every particle, in percent.
pub const PARTICLE_SATURATION: f64 = 40.0;
/// Lightness of every particle, in percent.
pub const PARTICLE_LIGHTNESS: f64 = 92.0;
/// Twinkle phase offsets fall in `[0, DELAY_MAX)` seconds.
pub const DELAY_MAX: f64 = 6.0;
/// Twinkle periods fall in `[DURATION_MIN, DURATION_MIN + DURATION_SPREAD)` seconds.
pub const DURATION_MIN: f64 = 5.0;
/// See [`DURATION_MIN`].
pub const DURATION_SPREAD: f64 = 7.0;

/// How a layer assigns blur to its particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlurRule {
	/// Every particle is sharp.
	None,
	/// A particle whose blur-selector sample falls below `chance` gets a blur
	/// of `min + s * spread` pixels, all others stay sharp.
	Bloom {
		/// Probability of blooming, below one half to keep bloom a minority.
		chance: f64,
		/// Smallest blur radius in pixels.
		min: f64,
		/// Range of blur radii above `min`.
		spread: f64,
	},
}

/// Constant drift of a whole layer, in normalized scene units per second.
///
/// The name identifies the drift animation; the renderer applies the offset,
/// particles themselves never move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drift {
	/// Animation identity, e.g. `"drift-far"`.
	pub name: &'static str,
	/// Horizontal speed.
	pub dx: f64,
	/// Vertical speed.
	pub dy: f64,
}

impl Drift {
	/// A layer that does not move.
	pub const STILL: Drift = Drift {
		name: "still",
		dx: 0.0,
		dy: 0.0,
	};

	/// A named drift moving `(dx, dy)` per second.
	pub const fn new(name: &'static str, dx: f64, dy: f64) -> Self {
		Self { name, dx, dy }
	}

	/// Offset accumulated after `elapsed` seconds.
	pub fn offset(&self, elapsed: f64) -> (f64, f64) {
		(self.dx * elapsed, self.dy * elapsed)
	}
}

/// Everything a layer is generated from.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerParams {
	/// Layer name, e.g. `"dim"` or `"near"`.
	pub name: &'static str,
	/// Number of particles.
	pub count: usize,
	/// Key of the first particle; layers must not share keys.
	pub seed_base: f64,
	/// Half-open diameter range in pixels.
	pub size_range: (f64, f64),
	/// Half-open opacity range, inside `(0, 1)`.
	pub alpha_range: (f64, f64),
	pub blur: BlurRule,
	pub drift: Drift,
	/// Per-attribute seed multipliers.
	pub multipliers: SeedMultipliers,
}

impl LayerParams {
	/// A sharp, still layer using [`SEED_MULTIPLIERS_V1`].
	pub fn new(
		name: &'static str,
		count: usize,
		seed_base: f64,
		size_range: (f64, f64),
		alpha_range: (f64, f64),
	) -> Self {
		Self {
			name,
			count,
			seed_base,
			size_range,
			alpha_range,
			blur: BlurRule::None,
			drift: Drift::STILL,
			multipliers: SEED_MULTIPLIERS_V1,
		}
	}

	/// Replace the blur rule.
	pub fn with_blur(self, blur: BlurRule) -> Self {
		Self { blur, ..self }
	}

	/// Replace the drift.
	pub fn with_drift(self, drift: Drift) -> Self {
		Self { drift, ..self }
	}

	/// Replace the seed multiplier table.
	pub fn with_multipliers(self, multipliers: SeedMultipliers) -> Self {
		Self {
			multipliers,
			..self
		}
	}

	/// The half-open range of particle keys this layer samples.
	pub fn key_range(&self) -> (f64, f64) {
		(self.seed_base, self.seed_base + self.count as f64)
	}
}

/// Normalized position, each axis in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Position {
	/// Fraction of the viewport width.
	pub x: f64,
	/// Fraction of the viewport height.
	pub y: f64,
}

/// One generated particle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticleDescriptor {
	/// Normalized position.
	pub position: Position,
	/// Diameter in canvas pixels.
	pub size: f64,
	/// Opacity within the layer's alpha range.
	pub opacity: f64,
	/// Hue in degrees; also carried by `color`.
	pub hue: f64,
	/// Fill color, alpha equal to `opacity`.
	pub color: Hsla,
	/// Blur radius in pixels, zero for sharp particles.
	pub blur: f64,
	/// Twinkle phase offset in seconds.
	pub animation_delay: f64,
	/// Twinkle period in seconds.
	pub animation_duration: f64,
}

impl ParticleDescriptor {
	/// Derive the particle with the given key from the layer parameters.
	fn generate(key: f64, params: &LayerParams, m: &SeedMultipliers) -> Self {
		let x = sample(key * m.x);
		let y = sample(key * m.y);
		let size = lerp_range(sample(key * m.size), params.size_range);
		let opacity = lerp_range(sample(key * m.opacity), params.alpha_range);
		let hue = HUE_BASE + sample(key * m.hue) * HUE_SPREAD;
		let blur = match params.blur {
			BlurRule::None => 0.0,
			BlurRule::Bloom { chance, min, spread } => {
				if sample(key * m.blur_select) < chance {
					min + sample(key * m.blur_amount) * spread
				} else {
					0.0
				}
			}
		};

		Self {
			position: Position { x, y },
			size,
			opacity,
			hue,
			color: Hsla::new(hue, PARTICLE_SATURATION, PARTICLE_LIGHTNESS, opacity),
			blur,
			animation_delay: sample(key * m.delay) * DELAY_MAX,
			animation_duration: DURATION_MIN + sample(key * m.duration) * DURATION_SPREAD,
		}
	}
}

/// A named, ordered set of particles sharing one parameter set.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
	/// Parameters the layer was generated from.
	pub params: LayerParams,
	/// Particles in key order.
	pub particles: Vec<ParticleDescriptor>,
}

impl Layer {
	/// Name from the layer parameters.
	pub fn name(&self) -> &'static str {
		self.params.name
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the layer has no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Number of particles with a nonzero blur.
	pub fn bloom_count(&self) -> usize {
		self.particles.iter().filter(|p| p.blur > 0.0).count()
	}
}

/// Generate a layer with its own multiplier table.
pub fn generate_layer(params: &LayerParams) -> Layer {
	generate_layer_with(params, &params.multipliers)
}

/// Generate a layer with an explicit multiplier table, overriding the one in
/// `params`.
pub fn generate_layer_with(params: &LayerParams, multipliers: &SeedMultipliers) -> Layer {
	let particles: Vec<_> = (0..params.count)
		.map(|i| ParticleDescriptor::generate(params.seed_base + i as f64, params, multipliers))
		.collect();

	let layer = Layer {
		params: LayerParams {
			multipliers: *multipliers,
			..params.clone()
		},
		particles,
	};
	debug!(
		"night-sky: generated layer '{}' ({} particles, {} bloomed)",
		layer.name(),
		layer.len(),
		layer.bloom_count()
	);
	layer
}
