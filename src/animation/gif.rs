//! GIF container adapter.
//!
//! Reads an in-memory GIF with `image`'s decoder and hands back fully
//! composited RGBA frames with their delays, ready for
//! [`compute_timeline_with`](super::compute_timeline_with).

use std::io::Cursor;
use std::time::Duration;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, RgbaImage};

use super::{AnimationTimeline, Frame, compute_timeline_with};
use crate::error::DecodeError;
use crate::options::TimelineOptions;

/// Decodes every frame of a GIF held in memory.
///
/// At most `options.max_frames` frames are read. Delays are the container's
/// own values in milliseconds; flooring happens later in the timeline
/// builder.
///
/// # Errors
///
/// [`DecodeError::Container`] if the bytes are not a readable GIF or any
/// frame fails to decode, [`DecodeError::NoFrames`] if nothing was decoded.
/// No partial frame list is returned on error.
pub fn decode_gif(
    bytes: &[u8],
    options: &TimelineOptions,
) -> Result<Vec<Frame<RgbaImage>>, DecodeError> {
    let decoder = GifDecoder::new(Cursor::new(bytes))?;
    let limit = options.max_frames.unwrap_or(usize::MAX);

    let mut frames = Vec::new();
    for frame in decoder.into_frames().take(limit) {
        let frame = frame?;
        let delay = Duration::from(frame.delay());
        let delay_ms = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        frames.push(Frame::new(frame.into_buffer(), delay_ms));
    }

    if frames.is_empty() {
        return Err(DecodeError::NoFrames);
    }

    tracing::debug!(frames = frames.len(), "decoded gif");
    Ok(frames)
}

/// Decodes a GIF and builds its playback timeline in one step.
pub fn decode_gif_timeline(
    bytes: &[u8],
    options: &TimelineOptions,
) -> Result<AnimationTimeline<RgbaImage>, DecodeError> {
    let frames = decode_gif(bytes, options)?;
    Ok(compute_timeline_with(frames, options))
}
