//! Viewport-relative lengths for atmosphere elements.
//!
//! Gradients, the moon and its halo are specified in CSS-like units so the
//! scene keeps its composition at any canvas size. Lengths are resolved to
//! canvas pixels once per frame against the current [`Viewport`].
//!
//! # Units
//!
//! - [`Length::Px`]: fixed canvas pixels.
//! - [`Length::Vw`] / [`Length::Vh`]: percent of the viewport width / height.
//! - [`Length::Vmin`] / [`Length::Vmax`]: percent of the smaller / larger side.

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Width in pixels.
	pub width: f64,
	/// Height in pixels.
	pub height: f64,
}

impl Viewport {
	/// Viewport of the given size.
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Smaller side.
	pub fn vmin(&self) -> f64 {
		self.width.min(self.height)
	}

	/// Larger side.
	pub fn vmax(&self) -> f64 {
		self.width.max(self.height)
	}

	/// Pixel position of a point given as fractions of the viewport.
	pub fn point(&self, fx: f64, fy: f64) -> (f64, f64) {
		(fx * self.width, fy * self.height)
	}
}

/// A length that scales with the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
	/// Canvas pixels.
	Px(f64),
	/// Percent of the width.
	Vw(f64),
	/// Percent of the height.
	Vh(f64),
	/// Percent of the smaller side.
	Vmin(f64),
	/// Percent of the larger side.
	Vmax(f64),
}

impl Length {
	/// Resolve to canvas pixels.
	pub fn resolve(&self, viewport: &Viewport) -> f64 {
		match *self {
			Length::Px(px) => px,
			Length::Vw(p) => p / 100.0 * viewport.width,
			Length::Vh(p) => p / 100.0 * viewport.height,
			Length::Vmin(p) => p / 100.0 * viewport.vmin(),
			Length::Vmax(p) => p / 100.0 * viewport.vmax(),
		}
	}

	/// Resolve to canvas pixels, never below `min_px`.
	pub fn resolve_at_least(&self, viewport: &Viewport, min_px: f64) -> f64 {
		self.resolve(viewport).max(min_px)
	}
}
