//! Colors used by the sky scene.
//!
//! Gradients and glows are specified in RGBA; particles carry an HSLA color
//! because their tint is generated as a hue.

use serde::Serialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Fully transparent black, the usual last gradient stop.
	pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Hex when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// HSLA color, hue in degrees and saturation/lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hsla {
	/// Hue in degrees.
	pub h: f64,
	/// Saturation in percent.
	pub s: f64,
	/// Lightness in percent.
	pub l: f64,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Hsla {
	/// Color from its four components.
	pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
		Self { h, s, l, a }
	}

	/// CSS `hsla(...)` string.
	pub fn to_css(self) -> String {
		format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(247, 251, 255).to_css(), "#f7fbff");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		assert_eq!(
			Color::rgba(18, 32, 56, 0.9).to_css(),
			"rgba(18, 32, 56, 0.9)"
		);
	}

	#[test]
	fn hsla_css() {
		assert_eq!(
			Hsla::new(207.5, 40.0, 92.0, 0.25).to_css(),
			"hsla(207.5, 40%, 92%, 0.25)"
		);
	}
}
