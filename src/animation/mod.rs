//! Animated image timelines.
//!
//! An animation arrives as an ordered list of [`Frame`]s, each with its own
//! delay. [`compute_timeline`] reduces those delays to a common unit (their
//! greatest common divisor) and expands every frame into `delay / unit`
//! consecutive slots, so playing the flattened sequence at one slot per unit
//! reproduces the original variable timing without floating-point timers.
//!
//! # Example
//!
//! ```
//! use tintframe::{compute_timeline, Frame};
//!
//! let timeline = compute_timeline(vec![Frame::new('a', 100), Frame::new('b', 200)]);
//!
//! assert_eq!(timeline.gcd_ms(), 100);
//! assert_eq!(timeline.iter().copied().collect::<String>(), "abb");
//! assert_eq!(timeline.total_duration_ms(), 300);
//! ```

pub mod gif;

use std::time::Duration;

use crate::options::TimelineOptions;

// ============================================================================
// Frame
// ============================================================================

/// One raster frame of an animation plus its container delay.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<T> {
    /// The decoded image (or any handle the caller uses for it).
    pub image: T,

    /// Display time in milliseconds as reported by the container.
    pub delay_ms: u32,
}

impl<T> Frame<T> {
    pub fn new(image: T, delay_ms: u32) -> Self {
        Self { image, delay_ms }
    }
}

// ============================================================================
// AnimationTimeline
// ============================================================================

/// Frames expanded into a uniform-duration playback sequence.
///
/// The timeline owns its frames; [`sequence`](Self::sequence) holds indices
/// into [`frames`](Self::frames), one per `gcd_ms` slot.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTimeline<T> {
    frames: Vec<Frame<T>>,
    sequence: Vec<usize>,
    gcd_ms: u32,
    total_duration_ms: u64,
}

impl<T> AnimationTimeline<T> {
    /// An empty timeline with `gcd_ms` of 1.
    pub fn empty() -> Self {
        Self {
            frames: Vec::new(),
            sequence: Vec::new(),
            gcd_ms: 1,
            total_duration_ms: 0,
        }
    }

    /// The source frames in decode order, with floored delays.
    pub fn frames(&self) -> &[Frame<T>] {
        &self.frames
    }

    /// Indices into [`frames`](Self::frames) in playback order.
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// The common time unit; every slot in the sequence lasts this long.
    pub fn gcd_ms(&self) -> u32 {
        self.gcd_ms
    }

    pub fn unit_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.gcd_ms))
    }

    /// Sum of all frame delays.
    pub fn total_duration_ms(&self) -> u64 {
        self.total_duration_ms
    }

    pub fn total_duration(&self) -> Duration {
        Duration::from_millis(self.total_duration_ms)
    }

    /// Number of slots in the flattened sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Iterates frame images in flattened playback order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.sequence.iter().map(|&i| &self.frames[i].image)
    }

    /// Returns the image shown `elapsed` after playback started, looping.
    ///
    /// Returns `None` for an empty timeline.
    pub fn frame_at(&self, elapsed: Duration) -> Option<&T> {
        if self.sequence.is_empty() {
            return None;
        }

        let slot = elapsed.as_millis() / u128::from(self.gcd_ms);
        let index = (slot % self.sequence.len() as u128) as usize;
        Some(&self.frames[self.sequence[index]].image)
    }

    /// Consumes the timeline, returning the source frames.
    pub fn into_frames(self) -> Vec<Frame<T>> {
        self.frames
    }
}

impl<T> Default for AnimationTimeline<T> {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// GCD
// ============================================================================

/// Greatest common divisor, where a zero operand yields the other operand.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// GCD across all values, skipping zeros. Returns 1 when every value is zero
/// or the input is empty.
pub fn gcd_all(values: impl IntoIterator<Item = u32>) -> u32 {
    match values.into_iter().fold(0, gcd) {
        0 => 1,
        g => g,
    }
}

// ============================================================================
// Timeline construction
// ============================================================================

/// Builds a timeline with [`TimelineOptions::default`] (100ms zero-delay floor).
pub fn compute_timeline<T>(frames: Vec<Frame<T>>) -> AnimationTimeline<T> {
    compute_timeline_with(frames, &TimelineOptions::default())
}

/// Builds a timeline, flooring zero delays to `options.zero_delay_floor_ms`.
///
/// Frames whose delay is still zero after flooring (only possible when the
/// floor is 0) get no slots in the sequence.
pub fn compute_timeline_with<T>(
    frames: Vec<Frame<T>>,
    options: &TimelineOptions,
) -> AnimationTimeline<T> {
    if frames.is_empty() {
        return AnimationTimeline::empty();
    }

    let frames: Vec<Frame<T>> = frames
        .into_iter()
        .enumerate()
        .map(|(index, mut frame)| {
            let delay_ms = options.effective_delay_ms(frame.delay_ms);
            if delay_ms != frame.delay_ms {
                tracing::trace!("frame {index}: zero delay floored to {delay_ms}ms");
            }
            frame.delay_ms = delay_ms;
            frame
        })
        .collect();

    let gcd_ms = gcd_all(frames.iter().map(|f| f.delay_ms));

    let sequence: Vec<usize> = frames
        .iter()
        .enumerate()
        .flat_map(|(index, frame)| {
            std::iter::repeat_n(index, (frame.delay_ms / gcd_ms) as usize)
        })
        .collect();

    let total_duration_ms: u64 = frames.iter().map(|f| u64::from(f.delay_ms)).sum();

    tracing::debug!(
        frames = frames.len(),
        gcd_ms,
        slots = sequence.len(),
        total_duration_ms,
        "computed animation timeline"
    );

    AnimationTimeline {
        frames,
        sequence,
        gcd_ms,
        total_duration_ms,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_conventions() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd_all([40]), 40);
        assert_eq!(gcd_all([0, 30, 0, 45]), 15);
        assert_eq!(gcd_all([]), 1);
        assert_eq!(gcd_all([0, 0]), 1);
    }

    #[test]
    fn empty_input() {
        let timeline = compute_timeline::<()>(Vec::new());
        assert!(timeline.is_empty());
        assert_eq!(timeline.total_duration_ms(), 0);
        assert_eq!(timeline.gcd_ms(), 1);
        assert!(timeline.frame_at(Duration::from_millis(50)).is_none());
    }

    #[test]
    fn expands_by_delay() {
        let timeline = compute_timeline(vec![Frame::new("a", 100), Frame::new("b", 200)]);

        assert_eq!(timeline.gcd_ms(), 100);
        assert_eq!(timeline.sequence(), &[0, 1, 1]);
        assert_eq!(timeline.iter().copied().collect::<Vec<_>>(), ["a", "b", "b"]);
        assert_eq!(timeline.total_duration_ms(), 300);
        assert_eq!(timeline.total_duration(), Duration::from_millis(300));
        assert_eq!(timeline.unit_duration(), Duration::from_millis(100));
    }

    #[test]
    fn zero_delay_is_floored() {
        let timeline = compute_timeline(vec![Frame::new("a", 0)]);

        assert_eq!(timeline.gcd_ms(), 100);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.total_duration_ms(), 100);
        assert_eq!(timeline.frames()[0].delay_ms, 100);
    }

    #[test]
    fn floored_delay_joins_gcd() {
        let timeline = compute_timeline(vec![Frame::new("a", 0), Frame::new("b", 30)]);

        assert_eq!(timeline.gcd_ms(), 10);
        assert_eq!(timeline.len(), 13);
        assert_eq!(timeline.total_duration_ms(), 130);
    }

    #[test]
    fn custom_floor() {
        let options = TimelineOptions::new().with_zero_delay_floor_ms(20);
        let timeline = compute_timeline_with(vec![Frame::new(1, 0), Frame::new(2, 60)], &options);

        assert_eq!(timeline.gcd_ms(), 20);
        assert_eq!(timeline.sequence(), &[0, 1, 1, 1]);
        assert_eq!(timeline.total_duration_ms(), 80);
    }

    #[test]
    fn disabled_floor_with_all_zero_delays() {
        let options = TimelineOptions::new().with_zero_delay_floor_ms(0);
        let timeline = compute_timeline_with(vec![Frame::new(1, 0), Frame::new(2, 0)], &options);

        assert_eq!(timeline.gcd_ms(), 1);
        assert!(timeline.is_empty());
        assert_eq!(timeline.total_duration_ms(), 0);
        assert_eq!(timeline.frames().len(), 2);
    }

    #[test]
    fn disabled_floor_skips_zero_frames() {
        let options = TimelineOptions::new().with_zero_delay_floor_ms(0);
        let timeline =
            compute_timeline_with(vec![Frame::new('x', 0), Frame::new('y', 50)], &options);

        assert_eq!(timeline.gcd_ms(), 50);
        assert_eq!(timeline.sequence(), &[1]);
        assert_eq!(timeline.total_duration_ms(), 50);
    }

    #[test]
    fn coprime_delays() {
        let timeline = compute_timeline(vec![Frame::new('a', 30), Frame::new('b', 70)]);

        assert_eq!(timeline.gcd_ms(), 10);
        assert_eq!(timeline.len(), 10);
        assert_eq!(timeline.iter().filter(|&&c| c == 'a').count(), 3);
        assert_eq!(timeline.iter().filter(|&&c| c == 'b').count(), 7);
    }

    #[test]
    fn order_is_preserved() {
        let timeline = compute_timeline(vec![
            Frame::new('c', 50),
            Frame::new('a', 50),
            Frame::new('b', 100),
        ]);

        assert_eq!(timeline.iter().collect::<String>(), "cabb");
    }

    #[test]
    fn frame_at_loops() {
        let timeline = compute_timeline(vec![Frame::new('a', 100), Frame::new('b', 200)]);

        assert_eq!(timeline.frame_at(Duration::ZERO), Some(&'a'));
        assert_eq!(timeline.frame_at(Duration::from_millis(99)), Some(&'a'));
        assert_eq!(timeline.frame_at(Duration::from_millis(100)), Some(&'b'));
        assert_eq!(timeline.frame_at(Duration::from_millis(299)), Some(&'b'));
        assert_eq!(timeline.frame_at(Duration::from_millis(300)), Some(&'a'));
        assert_eq!(timeline.frame_at(Duration::from_millis(1150)), Some(&'b'));
    }

    #[test]
    fn into_frames_returns_sources() {
        let timeline = compute_timeline(vec![Frame::new(7u8, 10)]);
        let frames = timeline.into_frames();
        assert_eq!(frames, vec![Frame::new(7u8, 10)]);
    }
}
