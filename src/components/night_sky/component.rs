//! Leptos component wrapping the sky canvas.
//!
//! The component creates an HTML canvas element, builds the [`SkyState`] once
//! the canvas is mounted, and runs an animation loop via
//! `requestAnimationFrame` that advances the clock and repaints the scene.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::preset::PresetKind;
use super::render;
use super::state::SkyState;

/// Longest frame step fed to the clock, so a backgrounded tab does not jump.
const MAX_FRAME_SECONDS: f64 = 0.1;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Current size of the browser window.
fn window_size(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w, h))
}

/// Renders the animated sky scene on a canvas element.
///
/// The `preset` signal selects the scene; switching presets reuses any layers
/// already generated. The component sizes itself to its parent container by
/// default; set `fullscreen = true` to fill the viewport and follow window
/// resizes. Explicit `width`/`height` override automatic sizing.
#[component]
pub fn NightSkyCanvas(
	#[prop(into)] preset: Signal<PresetKind>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let sky: Rc<RefCell<Option<SkyState>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: FrameCallback = Rc::new(RefCell::new(None));
	let (sky_init, animate_init, resize_cb_init) = (sky.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("night-sky: no window, not rendering");
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					warn!("night-sky: 2d context has an unexpected type");
					return;
				}
			},
			_ => {
				warn!("night-sky: canvas has no 2d context");
				return;
			}
		};

		*sky_init.borrow_mut() = Some(SkyState::new(preset.get_untracked().preset(), w, h));

		if fullscreen {
			let (sky_resize, canvas_resize) = (sky_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *sky_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (sky_anim, animate_inner) = (sky_init.clone(), animate_init.clone());
		let mut last_frame = js_sys::Date::now();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let now = js_sys::Date::now();
			let dt = ((now - last_frame) / 1000.0).clamp(0.0, MAX_FRAME_SECONDS);
			last_frame = now;

			if let Some(ref mut s) = *sky_anim.borrow_mut() {
				s.tick(dt);
				if let Err(e) = render::render(s, &ctx) {
					warn!("night-sky: frame failed: {:?}", e);
				}
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let sky_preset = sky.clone();
	Effect::new(move |_| {
		let kind = preset.get();
		if let Some(ref mut s) = *sky_preset.borrow_mut() {
			if s.apply_preset(kind.preset()) {
				info!("night-sky: switched to {:?}", kind);
			}
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="night-sky-canvas"
			aria-hidden="true"
			style="display: block; pointer-events: none;"
		/>
	}
}
