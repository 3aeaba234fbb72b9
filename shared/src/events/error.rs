use thiserror::Error;

/// Errors that can occur while stepping a [`FrameClock`](super::frame_clock::FrameClock)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameClockError {
    /// `begin_frame()` was called while a frame was still open
    #[error("Frame {frame} is still in progress. Call `end_frame()` before beginning another frame")]
    FrameInProgress {
        frame: u64,
    },

    /// `end_frame()` was called with no open frame
    #[error("No frame is in progress. Call `begin_frame()` before ending a frame")]
    NoFrameInProgress,

    /// Frame delta must be a finite, non-negative number of seconds
    #[error("Invalid frame delta: {delta}. Frame delta must be finite and non-negative")]
    InvalidDelta {
        delta: f32,
    },
}
