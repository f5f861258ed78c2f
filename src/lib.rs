//! tintframe: color parsing and animated image timing
//!
//! This crate provides two small, independent utilities for rendering layers:
//! a hex/packed-integer color parser, and a timeline builder that turns
//! variable-delay animation frames into a uniform-duration playback
//! sequence.
//!
//! # Colors
//!
//! ```
//! use tintframe::{parse_hex, to_hex_string, ColorSpace};
//!
//! let color = parse_hex("#1A2B3C4D", ColorSpace::DisplayP3).unwrap();
//! assert_eq!(color.color_space(), ColorSpace::DisplayP3);
//! assert_eq!(to_hex_string(&color), "#1A2B3C");
//!
//! assert!(parse_hex("GGGGGG", ColorSpace::Srgb).is_err());
//! ```
//!
//! # Animation Timelines
//!
//! Frames can come from the built-in GIF adapter ([`decode_gif`]) or from
//! any other decoder as `(image, delay)` pairs:
//!
//! ```
//! use tintframe::{compute_timeline_with, Frame, TimelineOptions};
//!
//! let options = TimelineOptions::new().with_zero_delay_floor_ms(100);
//! let timeline = compute_timeline_with(
//!     vec![Frame::new("a", 100), Frame::new("b", 200), Frame::new("c", 0)],
//!     &options,
//! );
//!
//! assert_eq!(timeline.gcd_ms(), 100);
//! assert_eq!(timeline.sequence(), &[0, 1, 1, 2]);
//! assert_eq!(timeline.total_duration_ms(), 400);
//! ```
//!
//! # Logging
//!
//! Diagnostics are emitted through `tracing`. The crate never installs a
//! subscriber.

mod animation;
mod color;
mod error;
mod image_ops;
mod options;

pub use animation::gif::{decode_gif, decode_gif_timeline};
pub use animation::{
    AnimationTimeline, Frame, compute_timeline, compute_timeline_with, gcd, gcd_all,
};
pub use color::{
    Color, ColorSpace, parse_hex, parse_packed, to_hex_string, to_hex_string_with_alpha,
};
pub use error::{ColorError, DecodeError, HexFormatReason};
pub use image_ops::{resized_to_width, scaled, solid_image, tinted, with_alpha};
pub use options::{DEFAULT_ZERO_DELAY_FLOOR_MS, TimelineOptions};
