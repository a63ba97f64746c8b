//! Compiled-in scene presets.
//!
//! A preset bundles the star layers (farthest first) with the atmosphere
//! painted around them: background glow, haze layers, the moon and its halo,
//! and a vignette. Presets are plain constructors; the host page only picks
//! which one to mount through [`PresetKind`].

use serde::Deserialize;

use super::layer::{BlurRule, Drift, LayerParams, SEED_MULTIPLIERS_DIM_V1};
use super::theme::Color;
use super::viewport::Length;

/// One color stop of a radial gradient, offset in `[0, 1]`.
pub type GradientStop = (f64, Color);

/// Elliptical radial gradient placed on the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGlow {
	/// Center as fractions of the viewport.
	pub center: (f64, f64),
	/// Horizontal and vertical radii.
	pub radius: (Length, Length),
	/// Color stops, inner first.
	pub stops: Vec<GradientStop>,
}

impl RadialGlow {
	/// Glow with explicit stops.
	pub fn new(center: (f64, f64), radius: (Length, Length), stops: Vec<GradientStop>) -> Self {
		Self {
			center,
			radius,
			stops,
		}
	}

	/// A single-color glow fading to transparent at `fade_at`.
	pub fn soft(center: (f64, f64), rx: f64, ry: f64, color: Color, fade_at: f64) -> Self {
		Self::new(
			center,
			(Length::Px(rx), Length::Px(ry)),
			vec![(0.0, color), (fade_at, Color::TRANSPARENT)],
		)
	}
}

/// Translucent, blurred group of glows composited with `screen`.
#[derive(Clone, Debug, PartialEq)]
pub struct HazeLayer {
	/// Label used in logs.
	pub name: &'static str,
	/// Layer opacity.
	pub opacity: f64,
	/// Gaussian blur applied to the whole layer.
	pub blur_px: f64,
	/// Contrast in percent, 100 leaves the layer untouched.
	pub contrast_pct: f64,
	/// Glows composited with a screen blend.
	pub glows: Vec<RadialGlow>,
}

impl HazeLayer {
	/// Canvas filter string for this layer.
	pub fn filter(&self) -> String {
		if self.contrast_pct == 100.0 {
			format!("blur({}px)", self.blur_px)
		} else {
			format!("blur({}px) contrast({}%)", self.blur_px, self.contrast_pct)
		}
	}
}

/// Soft outer glow of a disc, like a CSS box shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
	/// Shadow blur radius.
	pub blur_px: f64,
	/// Shadow color.
	pub color: Color,
}

/// The glowing celestial body, horizontally centered.
#[derive(Clone, Debug, PartialEq)]
pub struct Moon {
	/// Distance from the top of the viewport to the top of the disc.
	pub top: Length,
	/// Disc diameter.
	pub diameter: Length,
	/// Lower bound on the resolved diameter.
	pub min_diameter_px: f64,
	/// Gradient center as fractions of the disc's bounding box.
	pub focus: (f64, f64),
	/// Disc gradient stops.
	pub stops: Vec<GradientStop>,
	/// Drawn innermost first.
	pub shadows: Vec<Shadow>,
}

/// Wide glow behind the moon.
#[derive(Clone, Debug, PartialEq)]
pub struct Halo {
	/// Distance from the top of the viewport to the top of the halo.
	pub top: Length,
	/// Halo diameter.
	pub size: Length,
	/// Blur applied to the halo.
	pub blur_px: f64,
	/// Halo gradient stops.
	pub stops: Vec<GradientStop>,
}

/// Everything except the particle layers.
#[derive(Clone, Debug, PartialEq)]
pub struct Atmosphere {
	/// Solid fill underneath everything.
	pub base: Color,
	/// Sky gradient over the base.
	pub background: RadialGlow,
	/// Farthest first.
	pub haze: Vec<HazeLayer>,
	/// Glow behind the moon.
	pub halo: Halo,
	/// The moon disc.
	pub moon: Moon,
	/// Darkening toward the edges, drawn last.
	pub vignette: RadialGlow,
}

/// Complete scene description.
#[derive(Clone, Debug, PartialEq)]
pub struct SkyPreset {
	/// Preset name, as logged.
	pub name: &'static str,
	/// Farthest first.
	pub layers: Vec<LayerParams>,
	/// Everything drawn around the particles.
	pub atmosphere: Atmosphere,
}

/// Selects one of the compiled-in presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetKind {
	/// Plain starfield under a moon.
	#[default]
	Starfield,
	/// Three drifting parallax layers seen through water.
	Ocean,
}

impl PresetKind {
	/// Build the preset this kind names.
	pub fn preset(self) -> SkyPreset {
		match self {
			PresetKind::Starfield => SkyPreset::starfield(),
			PresetKind::Ocean => SkyPreset::ocean(),
		}
	}
}

impl SkyPreset {
	/// Dim and bright stars over a cold blue sky.
	pub fn starfield() -> Self {
		Self {
			name: "starfield",
			layers: vec![
				// Many tiny, barely visible points
				LayerParams::new("dim", 180, 0.0, (0.6, 1.5), (0.18, 0.43))
					.with_multipliers(SEED_MULTIPLIERS_DIM_V1),
				// Fewer, brighter ones, a quarter of them with bloom
				LayerParams::new("bright", 40, 999.0, (1.6, 2.8), (0.7, 0.95)).with_blur(
					BlurRule::Bloom {
						chance: 0.22,
						min: 0.4,
						spread: 0.6,
					},
				),
			],
			atmosphere: Atmosphere {
				base: Color::rgb(0, 0, 0),
				background: RadialGlow::new(
					(0.5, 0.15),
					(Length::Px(1200.0), Length::Px(800.0)),
					vec![
						(0.0, Color::rgba(18, 32, 56, 0.9)),
						(0.55, Color::rgba(6, 12, 20, 0.95)),
						(0.70, Color::rgba(2, 5, 9, 0.98)),
						(1.0, Color::rgb(0, 0, 0)),
					],
				),
				haze: vec![
					HazeLayer {
						name: "nebula",
						opacity: 0.18,
						blur_px: 64.0,
						contrast_pct: 100.0,
						glows: vec![
							RadialGlow::soft((0.48, 0.22), 350.0, 220.0, Color::rgba(110, 150, 220, 0.20), 0.6),
							RadialGlow::soft((0.54, 0.30), 480.0, 260.0, Color::rgba(90, 130, 210, 0.18), 0.6),
							RadialGlow::soft((0.60, 0.38), 420.0, 240.0, Color::rgba(70, 110, 180, 0.14), 0.6),
						],
					},
					HazeLayer {
						name: "clouds",
						opacity: 0.22,
						blur_px: 24.0,
						contrast_pct: 120.0,
						glows: vec![
							RadialGlow::soft((0.40, 0.26), 220.0, 160.0, Color::rgba(160, 200, 255, 0.10), 0.65),
							RadialGlow::soft((0.62, 0.28), 260.0, 140.0, Color::rgba(170, 210, 255, 0.10), 0.65),
							RadialGlow::soft((0.50, 0.40), 320.0, 180.0, Color::rgba(150, 190, 250, 0.08), 0.70),
							RadialGlow::soft((0.35, 0.36), 280.0, 160.0, Color::rgba(120, 170, 240, 0.07), 0.70),
						],
					},
					HazeLayer {
						name: "filaments",
						opacity: 0.10,
						blur_px: 10.0,
						contrast_pct: 100.0,
						glows: vec![
							RadialGlow::soft((0.45, 0.22), 160.0, 90.0, Color::rgba(200, 230, 255, 0.18), 0.55),
							RadialGlow::soft((0.55, 0.26), 180.0, 100.0, Color::rgba(205, 235, 255, 0.15), 0.60),
						],
					},
				],
				halo: Halo {
					top: Length::Vh(5.0),
					size: Length::Vmin(38.0),
					blur_px: 2.0,
					stops: vec![
						(0.0, Color::rgba(180, 210, 255, 0.16)),
						(0.45, Color::rgba(60, 100, 170, 0.10)),
						(0.70, Color::rgba(20, 35, 60, 0.0)),
					],
				},
				moon: Moon {
					top: Length::Vh(4.5),
					diameter: Length::Vmin(9.0),
					min_diameter_px: 48.0,
					focus: (0.6, 0.45),
					stops: vec![
						(0.10, Color::rgb(247, 251, 255)),
						(0.55, Color::rgb(230, 240, 255)),
						(0.85, Color::rgb(200, 220, 255)),
					],
					shadows: vec![
						Shadow {
							blur_px: 8.0,
							color: Color::rgba(200, 220, 255, 0.9),
						},
						Shadow {
							blur_px: 28.0,
							color: Color::rgba(130, 170, 255, 0.45),
						},
						Shadow {
							blur_px: 70.0,
							color: Color::rgba(90, 130, 220, 0.25),
						},
					],
				},
				vignette: RadialGlow::new(
					(0.5, 0.35),
					(Length::Vw(120.0), Length::Vh(85.0)),
					vec![
						(0.35, Color::rgba(0, 0, 0, 0.0)),
						(0.60, Color::rgba(0, 0, 0, 0.45)),
						(0.85, Color::rgba(0, 0, 0, 0.82)),
						(1.0, Color::rgba(0, 0, 0, 0.96)),
					],
				),
			},
		}
	}

	/// Far, mid and near particle layers drifting at increasing speed under
	/// a teal surface glow.
	pub fn ocean() -> Self {
		Self {
			name: "ocean",
			layers: vec![
				LayerParams::new("far", 140, 0.0, (0.5, 1.2), (0.15, 0.35))
					.with_drift(Drift::new("drift-far", 0.002, -0.0005)),
				LayerParams::new("mid", 70, 2000.0, (0.9, 1.8), (0.3, 0.6))
					.with_blur(BlurRule::Bloom {
						chance: 0.15,
						min: 0.3,
						spread: 0.4,
					})
					.with_drift(Drift::new("drift-mid", 0.005, -0.0012)),
				LayerParams::new("near", 28, 4000.0, (1.8, 3.2), (0.55, 0.85))
					.with_blur(BlurRule::Bloom {
						chance: 0.4,
						min: 0.6,
						spread: 0.8,
					})
					.with_drift(Drift::new("drift-near", 0.011, -0.0025)),
			],
			atmosphere: Atmosphere {
				base: Color::rgb(0, 4, 8),
				background: RadialGlow::new(
					(0.5, 0.0),
					(Length::Vw(110.0), Length::Vh(95.0)),
					vec![
						(0.0, Color::rgba(22, 64, 92, 0.9)),
						(0.45, Color::rgba(8, 30, 48, 0.95)),
						(0.75, Color::rgba(3, 12, 22, 0.98)),
						(1.0, Color::rgb(0, 4, 8)),
					],
				),
				haze: vec![
					HazeLayer {
						name: "caustics",
						opacity: 0.16,
						blur_px: 48.0,
						contrast_pct: 100.0,
						glows: vec![
							RadialGlow::soft((0.30, 0.10), 520.0, 200.0, Color::rgba(90, 180, 210, 0.22), 0.6),
							RadialGlow::soft((0.70, 0.14), 480.0, 180.0, Color::rgba(80, 170, 200, 0.18), 0.6),
						],
					},
					HazeLayer {
						name: "fog",
						opacity: 0.20,
						blur_px: 28.0,
						contrast_pct: 110.0,
						glows: vec![
							RadialGlow::soft((0.50, 0.55), 700.0, 260.0, Color::rgba(60, 120, 150, 0.12), 0.7),
							RadialGlow::soft((0.25, 0.70), 420.0, 200.0, Color::rgba(50, 110, 140, 0.10), 0.7),
							RadialGlow::soft((0.78, 0.66), 460.0, 220.0, Color::rgba(55, 115, 145, 0.10), 0.7),
						],
					},
				],
				halo: Halo {
					top: Length::Vh(2.0),
					size: Length::Vmin(46.0),
					blur_px: 6.0,
					stops: vec![
						(0.0, Color::rgba(170, 225, 240, 0.14)),
						(0.45, Color::rgba(50, 120, 150, 0.08)),
						(0.70, Color::rgba(10, 40, 60, 0.0)),
					],
				},
				moon: Moon {
					top: Length::Vh(6.0),
					diameter: Length::Vmin(7.0),
					min_diameter_px: 40.0,
					focus: (0.55, 0.4),
					stops: vec![
						(0.10, Color::rgba(235, 250, 255, 0.85)),
						(0.55, Color::rgba(200, 235, 245, 0.7)),
						(0.85, Color::rgba(150, 205, 225, 0.55)),
					],
					shadows: vec![
						Shadow {
							blur_px: 12.0,
							color: Color::rgba(170, 225, 240, 0.5),
						},
						Shadow {
							blur_px: 48.0,
							color: Color::rgba(80, 160, 190, 0.25),
						},
					],
				},
				vignette: RadialGlow::new(
					(0.5, 0.3),
					(Length::Vw(115.0), Length::Vh(90.0)),
					vec![
						(0.30, Color::rgba(0, 0, 0, 0.0)),
						(0.60, Color::rgba(0, 4, 8, 0.5)),
						(1.0, Color::rgba(0, 2, 4, 0.97)),
					],
				),
			},
		}
	}

	/// Particles across all layers.
	pub fn particle_count(&self) -> usize {
		self.layers.iter().map(|l| l.count).sum()
	}

	/// Whether no two layers share a particle key.
	pub fn seed_bases_disjoint(&self) -> bool {
		self.layers.iter().enumerate().all(|(i, a)| {
			let (a_lo, a_hi) = a.key_range();
			self.layers[i + 1..].iter().all(|b| {
				let (b_lo, b_hi) = b.key_range();
				a_hi <= b_lo || b_hi <= a_lo
			})
		})
	}
}

impl Default for SkyPreset {
	fn default() -> Self {
		Self::starfield()
	}
}
