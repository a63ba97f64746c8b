//! Canvas rendering for the sky scene.
//!
//! Paint order, back to front:
//! 1. Base fill and background glow
//! 2. Haze layers (farthest first)
//! 3. Particle layers in preset order, with drift and twinkle applied
//! 4. Moon halo, then the moon with its glow
//! 5. Vignette

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::layer::Layer;
use super::preset::{Atmosphere, GradientStop, Halo, HazeLayer, Moon, RadialGlow};
use super::state::SkyState;
use super::twinkle::twinkle_factor;
use super::viewport::Viewport;

/// Renders the complete scene to the canvas.
pub fn render(state: &SkyState, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
	let viewport = state.viewport();
	let atmosphere = &state.preset.atmosphere;

	draw_background(ctx, &viewport, atmosphere)?;

	for haze in &atmosphere.haze {
		draw_haze(ctx, &viewport, haze)?;
	}

	for layer in state.layers() {
		draw_layer(ctx, &viewport, layer, state.elapsed)?;
	}

	draw_halo(ctx, &viewport, &atmosphere.halo)?;
	draw_moon(ctx, &viewport, &atmosphere.moon)?;
	draw_glow(ctx, &viewport, &atmosphere.vignette)
}

fn draw_background(
	ctx: &CanvasRenderingContext2d,
	viewport: &Viewport,
	atmosphere: &Atmosphere,
) -> Result<(), JsValue> {
	ctx.set_fill_style_str(&atmosphere.base.to_css());
	ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
	draw_glow(ctx, viewport, &atmosphere.background)
}

fn draw_haze(
	ctx: &CanvasRenderingContext2d,
	viewport: &Viewport,
	haze: &HazeLayer,
) -> Result<(), JsValue> {
	ctx.save();
	ctx.set_global_alpha(haze.opacity);
	ctx.set_filter(&haze.filter());
	ctx.set_global_composite_operation("screen")?;

	let result = haze
		.glows
		.iter()
		.try_for_each(|glow| draw_glow(ctx, viewport, glow));

	ctx.restore();
	result
}

/// Fill the whole viewport with an elliptical radial gradient.
///
/// Canvas gradients are circular, so the context is squashed vertically by
/// `ry / rx` around the glow center before filling.
fn draw_glow(
	ctx: &CanvasRenderingContext2d,
	viewport: &Viewport,
	glow: &RadialGlow,
) -> Result<(), JsValue> {
	let (cx, cy) = viewport.point(glow.center.0, glow.center.1);
	let rx = glow.radius.0.resolve(viewport);
	let ry = glow.radius.1.resolve(viewport);
	if rx <= 0.0 || ry <= 0.0 {
		return Ok(());
	}
	let squash = ry / rx;

	ctx.save();
	ctx.translate(cx, cy)?;
	ctx.scale(1.0, squash)?;

	let gradient = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, rx)?;
	add_stops(&gradient, &glow.stops)?;

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(-cx, -cy / squash, viewport.width, viewport.height / squash);
	ctx.restore();
	Ok(())
}

fn add_stops(gradient: &web_sys::CanvasGradient, stops: &[GradientStop]) -> Result<(), JsValue> {
	for (offset, color) in stops {
		gradient.add_color_stop(*offset as f32, &color.to_css())?;
	}
	Ok(())
}

/// Wrap a drifted coordinate back into `[0, 1)`.
fn wrap_unit(v: f64) -> f64 {
	v - v.floor()
}

fn draw_layer(
	ctx: &CanvasRenderingContext2d,
	viewport: &Viewport,
	layer: &Layer,
	elapsed: f64,
) -> Result<(), JsValue> {
	let (ox, oy) = layer.params.drift.offset(elapsed);
	let mut blurred = false;

	ctx.save();
	for p in &layer.particles {
		// Only touch the filter when it changes, most particles are sharp.
		if p.blur > 0.0 {
			ctx.set_filter(&format!("blur({}px)", p.blur));
			blurred = true;
		} else if blurred {
			ctx.set_filter("none");
			blurred = false;
		}

		let twinkle = twinkle_factor(elapsed, p.animation_delay, p.animation_duration);
		ctx.set_global_alpha(p.opacity * twinkle);
		ctx.set_fill_style_str(&p.color.to_css());

		let (x, y) = viewport.point(wrap_unit(p.position.x + ox), wrap_unit(p.position.y + oy));
		ctx.begin_path();
		ctx.arc(x, y, p.size / 2.0, 0.0, PI * 2.0)?;
		ctx.fill();
	}
	ctx.restore();
	Ok(())
}

fn draw_halo(
	ctx: &CanvasRenderingContext2d,
	viewport: &Viewport,
	halo: &Halo,
) -> Result<(), JsValue> {
	let size = halo.size.resolve(viewport);
	let radius = size / 2.0;
	let (cx, cy) = (viewport.width / 2.0, halo.top.resolve(viewport) + radius);

	let gradient = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, radius)?;
	add_stops(&gradient, &halo.stops)?;

	ctx.save();
	ctx.set_filter(&format!("blur({}px)", halo.blur_px));
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.begin_path();
	ctx.arc(cx, cy, radius, 0.0, PI * 2.0)?;
	ctx.fill();
	ctx.restore();
	Ok(())
}

/// Distance from a point inside a unit box to its farthest corner.
fn farthest_corner(fx: f64, fy: f64) -> f64 {
	fx.max(1.0 - fx).hypot(fy.max(1.0 - fy))
}

fn draw_moon(
	ctx: &CanvasRenderingContext2d,
	viewport: &Viewport,
	moon: &Moon,
) -> Result<(), JsValue> {
	let diameter = moon.diameter.resolve_at_least(viewport, moon.min_diameter_px);
	let radius = diameter / 2.0;
	let (left, top) = (viewport.width / 2.0 - radius, moon.top.resolve(viewport));
	let (cx, cy) = (left + radius, top + radius);

	// Glow first, outermost at the bottom, so the disc covers the shadow casters.
	ctx.save();
	for shadow in moon.shadows.iter().rev() {
		ctx.set_shadow_blur(shadow.blur_px);
		ctx.set_shadow_color(&shadow.color.to_css());
		ctx.set_fill_style_str(&shadow.color.to_css());
		ctx.begin_path();
		ctx.arc(cx, cy, radius, 0.0, PI * 2.0)?;
		ctx.fill();
	}
	ctx.restore();

	let (fx, fy) = (left + moon.focus.0 * diameter, top + moon.focus.1 * diameter);
	let reach = farthest_corner(moon.focus.0, moon.focus.1) * diameter;
	let gradient = ctx.create_radial_gradient(fx, fy, 0.0, fx, fy, reach)?;
	add_stops(&gradient, &moon.stops)?;

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.begin_path();
	ctx.arc(cx, cy, radius, 0.0, PI * 2.0)?;
	ctx.fill();
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wrap_unit_folds_drift() {
		assert!((wrap_unit(1.25) - 0.25).abs() < 1.0e-12);
		assert!((wrap_unit(-0.25) - 0.75).abs() < 1.0e-12);
		assert_eq!(wrap_unit(0.5), 0.5);
	}

	#[test]
	fn farthest_corner_of_centered_focus() {
		assert!((farthest_corner(0.5, 0.5) - 0.5f64.hypot(0.5)).abs() < 1.0e-12);
		assert!((farthest_corner(0.6, 0.45) - 0.6f64.hypot(0.55)).abs() < 1.0e-12);
	}
}
