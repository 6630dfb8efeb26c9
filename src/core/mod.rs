/// Ambient particle field: dust, stars, sparkles and horizontal fog bands.
///
/// A field is generated once per mount and never mutated afterwards; motion
/// on screen comes entirely from looping CSS animations parameterised by the
/// per-entry duration and delay. The random source is injected so callers
/// (and tests) can pick between entropy and a seeded generator.
pub mod field;
pub mod format;
/// Renderer-independent overlay primitives; the DOM renderer only
/// materialises these trees.
pub mod glyph;
/// Single-track playback controller.
///
/// The controller owns the displayed `PlaybackState` and forwards user
/// intents to a `MediaResource`. Progress is only ever derived from offsets
/// reported by the resource through `MediaEvent`s.
pub mod playback;
pub mod track;

pub use field::ParticleField;
pub use format::format_time;
pub use glyph::{overlay_glyphs, Glyph};
pub use playback::{AudioController, ControlsMemo, MediaEvent, MediaResource, PlaybackState};
pub use track::TrackInfo;
