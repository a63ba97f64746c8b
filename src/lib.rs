//! night-sky: deterministic layered night-sky background for the web.
//!
//! This crate provides a WASM-based canvas component that paints an animated
//! sky (star layers, moon, haze and vignette) which looks exactly the same on
//! every reload, plus the pure generation core behind it.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::night_sky::{
	BlurRule, Drift, Layer, LayerCache, LayerParams, NightSkyCanvas, ParticleDescriptor, Position,
	PresetKind, SEED_MULTIPLIERS_DIM_V1, SEED_MULTIPLIERS_V1, SeedMultipliers, SkyPreset, SkyState,
	generate_layer, generate_layer_with, sample, twinkle_factor,
};

/// Scene options read from the host page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
	/// Which compiled-in preset to mount.
	pub preset: PresetKind,
}

impl SceneConfig {
	/// Parse the JSON body of the config script element.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("night-sky: logging initialized");
}

/// Load scene options from a script element with id="scene-config".
/// Expected format: JSON with { "preset": "starfield" | "ocean" }
fn load_scene_config() -> Option<SceneConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("scene-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match SceneConfig::from_json(&json_text) {
		Ok(config) => {
			info!("night-sky: loaded scene config, preset {:?}", config.preset);
			Some(config)
		}
		Err(e) => {
			warn!("night-sky: failed to parse scene config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads the scene config from the DOM and renders the sky fullscreen.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_scene_config().unwrap_or_default();
	let preset = Signal::derive(move || config.preset);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Night Sky" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-sky" style="position: fixed; inset: 0; overflow: hidden; background: #000; user-select: none;">
			<NightSkyCanvas preset=preset fullscreen=true />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn config_selects_preset() {
		let config = SceneConfig::from_json(r#"{ "preset": "ocean" }"#).unwrap();
		assert_eq!(config.preset, PresetKind::Ocean);
	}

	#[test]
	fn empty_config_falls_back_to_starfield() {
		let config = SceneConfig::from_json("{}").unwrap();
		assert_eq!(config, SceneConfig::default());
		assert_eq!(config.preset, PresetKind::Starfield);
	}

	#[test]
	fn unknown_preset_is_rejected() {
		assert!(SceneConfig::from_json(r#"{ "preset": "aurora" }"#).is_err());
	}
}
