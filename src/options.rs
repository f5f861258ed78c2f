//! Serializable decoder options.
//!
//! [`TimelineOptions`] carries the policy knobs of the timeline builder in a
//! JSON-friendly form so a host can persist or ship them between processes.
//!
//! # Example
//!
//! ```
//! use tintframe::TimelineOptions;
//!
//! let options = TimelineOptions::new()
//!     .with_zero_delay_floor_ms(50)
//!     .with_max_frames(Some(500));
//!
//! let json = options.to_json().unwrap();
//! let restored = TimelineOptions::from_json(&json).unwrap();
//! assert_eq!(restored, options);
//! ```

use serde::{Deserialize, Serialize};

/// Delay substituted for frames whose container delay is zero.
pub const DEFAULT_ZERO_DELAY_FLOOR_MS: u32 = 100;

/// Options for [`compute_timeline_with`](crate::compute_timeline_with) and
/// [`decode_gif`](crate::decode_gif).
///
/// # JSON Format
///
/// ```json
/// {
///   "zeroDelayFloorMs": 100,
///   "maxFrames": 500
/// }
/// ```
///
/// Every field is optional when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineOptions {
    /// Substitute for a zero container delay, in milliseconds.
    ///
    /// `0` disables flooring: zero-delay frames then get no repeats and add
    /// nothing to the total duration.
    pub zero_delay_floor_ms: u32,

    /// Upper bound on frames read from a container. `None` reads all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_frames: Option<usize>,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            zero_delay_floor_ms: DEFAULT_ZERO_DELAY_FLOOR_MS,
            max_frames: None,
        }
    }
}

impl TimelineOptions {
    /// Creates options with the default floor and no frame limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the zero-delay floor.
    pub fn with_zero_delay_floor_ms(mut self, floor_ms: u32) -> Self {
        self.zero_delay_floor_ms = floor_ms;
        self
    }

    /// Sets the frame limit.
    pub fn with_max_frames(mut self, max_frames: Option<usize>) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Applies the zero-delay floor to a single container delay.
    pub fn effective_delay_ms(&self, delay_ms: u32) -> u32 {
        if delay_ms == 0 {
            self.zero_delay_floor_ms
        } else {
            delay_ms
        }
    }

    /// Serializes the options to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the options to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = TimelineOptions::default();
        assert_eq!(options.zero_delay_floor_ms, 100);
        assert!(options.max_frames.is_none());
    }

    #[test]
    fn empty_json_uses_defaults() {
        let options = TimelineOptions::from_json("{}").unwrap();
        assert_eq!(options, TimelineOptions::default());
    }

    #[test]
    fn json_is_camel_case() {
        let json = TimelineOptions::new()
            .with_max_frames(Some(3))
            .to_json_pretty()
            .unwrap();

        assert!(json.contains("\"zeroDelayFloorMs\""));
        assert!(json.contains("\"maxFrames\""));
    }

    #[test]
    fn max_frames_omitted_when_unset() {
        let json = TimelineOptions::new().to_json().unwrap();
        assert!(!json.contains("maxFrames"));
    }

    #[test]
    fn effective_delay_floors_zero_only() {
        let options = TimelineOptions::new().with_zero_delay_floor_ms(40);
        assert_eq!(options.effective_delay_ms(0), 40);
        assert_eq!(options.effective_delay_ms(10), 10);
    }
}
