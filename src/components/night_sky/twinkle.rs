//! Twinkle oscillation driven by a particle's animation timing.
//!
//! The oscillation starts after `animation_delay` seconds, then runs from full
//! brightness down to [`TWINKLE_FLOOR`] over one `animation_duration`, back up
//! over the next, and so on (ease-in-out, alternating direction).

/// Lowest opacity multiplier reached at the bottom of a twinkle.
pub const TWINKLE_FLOOR: f64 = 0.35;

/// Ease-in-out curve on `[0, 1]`.
pub fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Opacity multiplier in `[TWINKLE_FLOOR, 1]` at `elapsed` seconds.
pub fn twinkle_factor(elapsed: f64, delay: f64, duration: f64) -> f64 {
	if duration <= 0.0 || elapsed < delay {
		return 1.0;
	}

	let cycles = (elapsed - delay) / duration;
	let lap = cycles.floor();
	let within = cycles - lap;
	// Odd laps run backwards.
	let progress = if lap % 2.0 == 0.0 { within } else { 1.0 - within };

	1.0 - (1.0 - TWINKLE_FLOOR) * smooth_step(progress.clamp(0.0, 1.0))
}
