//! Deterministic night-sky background.
//!
//! Renders a layered sky on an HTML canvas with:
//! - Star layers generated from a stateless seeded sampler, identical on every load
//! - Per-particle twinkle and optional bloom
//! - Drifting parallax layers
//! - Gradient atmosphere: background glow, haze, moon with halo, vignette
//!
//! # Example
//!
//! ```ignore
//! use night_sky::{NightSkyCanvas, PresetKind};
//!
//! view! { <NightSkyCanvas preset=PresetKind::Ocean fullscreen=true /> }
//! ```
//!
//! The generation core can also be used on its own:
//!
//! ```
//! use night_sky::{LayerParams, generate_layer};
//!
//! let layer = generate_layer(&LayerParams::new("dim", 3, 0.0, (0.6, 1.5), (0.18, 0.43)));
//! assert_eq!(layer.len(), 3);
//! ```

mod component;
pub mod layer;
pub mod preset;
mod render;
pub mod sampler;
mod state;
pub mod theme;
mod twinkle;
pub mod viewport;

pub use component::NightSkyCanvas;
pub use layer::{
	BlurRule, Drift, Layer, LayerParams, ParticleDescriptor, Position, SEED_MULTIPLIERS_DIM_V1,
	SEED_MULTIPLIERS_V1, SeedMultipliers, generate_layer, generate_layer_with,
};
pub use preset::{PresetKind, SkyPreset};
pub use sampler::sample;
pub use state::{LayerCache, SkyState};
pub use twinkle::twinkle_factor;
