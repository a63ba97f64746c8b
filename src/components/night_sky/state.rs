//! Scene state: memoized layers, viewport size and animation clock.
//!
//! Layers are generated once per distinct parameter set and shared through
//! `Rc`. Switching presets back and forth, or re-applying the same preset on
//! a re-render, reuses the cached layers instead of regenerating them.

use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, info, warn};

use super::layer::{BlurRule, Layer, LayerParams, generate_layer};
use super::preset::SkyPreset;
use super::viewport::Viewport;

/// Hashable image of a [`LayerParams`]; floats are compared by bit pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayerKey {
	name: &'static str,
	count: usize,
	seed_base: u64,
	size_range: (u64, u64),
	alpha_range: (u64, u64),
	blur: Option<(u64, u64, u64)>,
	drift: (&'static str, u64, u64),
	multipliers: [u64; 9],
}

impl From<&LayerParams> for LayerKey {
	fn from(p: &LayerParams) -> Self {
		let bits = |(a, b): (f64, f64)| (a.to_bits(), b.to_bits());
		Self {
			name: p.name,
			count: p.count,
			seed_base: p.seed_base.to_bits(),
			size_range: bits(p.size_range),
			alpha_range: bits(p.alpha_range),
			blur: match p.blur {
				BlurRule::None => None,
				BlurRule::Bloom { chance, min, spread } => {
					Some((chance.to_bits(), min.to_bits(), spread.to_bits()))
				}
			},
			drift: (p.drift.name, p.drift.dx.to_bits(), p.drift.dy.to_bits()),
			multipliers: {
				let m = &p.multipliers;
				[
					m.x, m.y, m.size, m.opacity, m.hue, m.blur_select, m.blur_amount, m.delay,
					m.duration,
				]
				.map(f64::to_bits)
			},
		}
	}
}

/// Generated layers keyed by their parameters.
#[derive(Debug, Default)]
pub struct LayerCache {
	entries: HashMap<LayerKey, Rc<Layer>>,
	generated: usize,
}

impl LayerCache {
	/// Return the cached layer for `params`, generating it on first use.
	pub fn get_or_generate(&mut self, params: &LayerParams) -> Rc<Layer> {
		let key = LayerKey::from(params);
		if let Some(layer) = self.entries.get(&key) {
			debug!("night-sky: reusing cached layer '{}'", params.name);
			return layer.clone();
		}

		let layer = Rc::new(generate_layer(params));
		self.generated += 1;
		self.entries.insert(key, layer.clone());
		layer
	}

	/// How many layers have been generated (cache misses).
	pub fn generated(&self) -> usize {
		self.generated
	}

	/// Number of distinct layers held.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether nothing has been generated yet.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Everything the renderer needs for one frame.
///
/// Created once when the component mounts; the animation loop advances the
/// clock with [`SkyState::tick`].
pub struct SkyState {
	/// Active preset.
	pub preset: SkyPreset,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Seconds since mount.
	pub elapsed: f64,
	layers: Vec<Rc<Layer>>,
	cache: LayerCache,
}

impl SkyState {
	/// State for `preset` on a `width` x `height` canvas, layers generated.
	pub fn new(preset: SkyPreset, width: f64, height: f64) -> Self {
		let mut state = Self {
			preset: SkyPreset::default(),
			width,
			height,
			elapsed: 0.0,
			layers: Vec::new(),
			cache: LayerCache::default(),
		};
		state.apply_preset(preset);
		state
	}

	/// Switch to `preset`, generating only layers not seen before.
	///
	/// Returns `false` when the preset is already active.
	pub fn apply_preset(&mut self, preset: SkyPreset) -> bool {
		if !self.layers.is_empty() && preset == self.preset {
			return false;
		}

		if !preset.seed_bases_disjoint() {
			warn!(
				"night-sky: preset '{}' has overlapping seed bases, layers will correlate",
				preset.name
			);
		}

		let before = self.cache.generated();
		self.layers = preset
			.layers
			.iter()
			.map(|params| self.cache.get_or_generate(params))
			.collect();
		info!(
			"night-sky: applied preset '{}' ({} layers, {} particles, {} newly generated)",
			preset.name,
			self.layers.len(),
			preset.particle_count(),
			self.cache.generated() - before
		);
		self.preset = preset;
		true
	}

	/// Active layers, farthest first.
	pub fn layers(&self) -> &[Rc<Layer>] {
		&self.layers
	}

	/// The layer cache, for inspecting what was generated.
	pub fn cache(&self) -> &LayerCache {
		&self.cache
	}

	/// Current canvas size.
	pub fn viewport(&self) -> Viewport {
		Viewport::new(self.width, self.height)
	}

	/// Advance the animation clock by `dt` seconds.
	pub fn tick(&mut self, dt: f64) {
		self.elapsed += dt;
	}

	/// Follow a canvas resize; layers are normalized and need no update.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::night_sky::layer::SEED_MULTIPLIERS_DIM_V1;

	#[test]
	fn new_state_generates_every_layer_once() {
		let state = SkyState::new(SkyPreset::starfield(), 800.0, 600.0);
		assert_eq!(state.layers().len(), 2);
		assert_eq!(state.cache().generated(), 2);
		assert_eq!(state.layers()[0].name(), "dim");
		assert_eq!(state.layers()[1].name(), "bright");
	}

	#[test]
	fn reapplying_the_same_preset_is_a_noop() {
		let mut state = SkyState::new(SkyPreset::starfield(), 800.0, 600.0);
		let first = state.layers()[0].clone();
		assert!(!state.apply_preset(SkyPreset::starfield()));
		assert!(Rc::ptr_eq(&first, &state.layers()[0]));
		assert_eq!(state.cache().generated(), 2);
	}

	#[test]
	fn switching_back_reuses_cached_layers() {
		let mut state = SkyState::new(SkyPreset::starfield(), 800.0, 600.0);
		let dim = state.layers()[0].clone();

		assert!(state.apply_preset(SkyPreset::ocean()));
		assert_eq!(state.layers().len(), 3);
		assert_eq!(state.cache().generated(), 5);

		assert!(state.apply_preset(SkyPreset::starfield()));
		assert_eq!(state.cache().generated(), 5);
		assert!(Rc::ptr_eq(&dim, &state.layers()[0]));
	}

	#[test]
	fn changed_parameters_miss_the_cache() {
		let mut cache = LayerCache::default();
		let params = LayerParams::new("dim", 10, 0.0, (0.6, 1.5), (0.18, 0.43));
		let a = cache.get_or_generate(&params);
		let b = cache.get_or_generate(&LayerParams {
			count: 11,
			..params.clone()
		});
		let c = cache.get_or_generate(&params);

		assert!(!Rc::ptr_eq(&a, &b));
		assert!(Rc::ptr_eq(&a, &c));
		assert_eq!(cache.generated(), 2);
		assert_eq!(cache.len(), 2);
	}

	#[test]
	fn key_distinguishes_blur_rules() {
		let sharp = LayerParams::new("l", 5, 0.0, (1.0, 2.0), (0.2, 0.4));
		let bloom = sharp.clone().with_blur(BlurRule::Bloom {
			chance: 0.3,
			min: 0.4,
			spread: 0.6,
		});
		assert_ne!(LayerKey::from(&sharp), LayerKey::from(&bloom));
	}

	#[test]
	fn key_distinguishes_multiplier_tables() {
		let v1 = LayerParams::new("dim", 5, 0.0, (0.6, 1.5), (0.18, 0.43));
		let dim = v1.clone().with_multipliers(SEED_MULTIPLIERS_DIM_V1);
		assert_ne!(LayerKey::from(&v1), LayerKey::from(&dim));

		let mut cache = LayerCache::default();
		cache.get_or_generate(&v1);
		cache.get_or_generate(&dim);
		assert_eq!(cache.generated(), 2);
	}

	#[test]
	fn tick_and_resize() {
		let mut state = SkyState::new(SkyPreset::ocean(), 800.0, 600.0);
		state.tick(0.5);
		state.tick(0.25);
		assert_eq!(state.elapsed, 0.75);
		state.resize(1024.0, 768.0);
		assert_eq!(state.viewport(), Viewport::new(1024.0, 768.0));
	}
}
