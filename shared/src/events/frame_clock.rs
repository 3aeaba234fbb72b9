use super::{
    error::FrameClockError,
    host_events::{FrameEnd, FrameStart},
};

/// Produces [`FrameStart`] / [`FrameEnd`] payloads with a monotonic frame
/// counter.
///
/// Frames are numbered from zero; a frame's number is shared by its start
/// and end payloads and the counter advances when the frame ends.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    next_frame: u64,
    open: Option<FrameStart>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes numbering at `frame`, e.g. after loading a saved session.
    pub fn starting_at(frame: u64) -> Self {
        Self {
            next_frame: frame,
            open: None,
        }
    }

    /// Number of frames that have been ended so far (plus any starting offset).
    pub fn frames_completed(&self) -> u64 {
        self.next_frame
    }

    pub fn in_frame(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<FrameStart> {
        self.open
    }

    pub fn begin_frame(&mut self, delta: f32) -> Result<FrameStart, FrameClockError> {
        if let Some(open) = self.open {
            return Err(FrameClockError::FrameInProgress { frame: open.frame });
        }
        if !delta.is_finite() || delta < 0.0 {
            return Err(FrameClockError::InvalidDelta { delta });
        }

        let start = FrameStart {
            frame: self.next_frame,
            delta,
        };
        self.open = Some(start);
        Ok(start)
    }

    pub fn end_frame(&mut self) -> Result<FrameEnd, FrameClockError> {
        let Some(open) = self.open.take() else {
            return Err(FrameClockError::NoFrameInProgress);
        };

        self.next_frame = self.next_frame.wrapping_add(1);
        Ok(FrameEnd {
            frame: open.frame,
            delta: open.delta,
        })
    }
}
