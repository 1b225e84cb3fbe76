//! Display capability: size query and frame presentation.

use anyhow::Result;

use crate::fb::FrameBuffer;

/// A surface frames are presented on.
pub trait Screen {
    /// Current size in columns and rows.
    fn size(&self) -> Result<(u16, u16)>;

    /// Show `fb`. Synchronous; the frame is on screen when this returns.
    ///
    /// Implementations may swap buffer contents with `fb`, so callers must
    /// fully redraw it before the next call.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;
}

/// In-memory screen of fixed size. Keeps the last presented frame.
#[derive(Debug, Clone)]
pub struct HeadlessScreen {
    width: u16,
    height: u16,
    last: Option<FrameBuffer>,
    presented: u64,
}

impl HeadlessScreen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            last: None,
            presented: 0,
        }
    }

    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last.as_ref()
    }

    pub fn frames_presented(&self) -> u64 {
        self.presented
    }
}

impl Screen for HeadlessScreen {
    fn size(&self) -> Result<(u16, u16)> {
        Ok((self.width, self.height))
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        match self.last.as_mut() {
            Some(last) => last.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        self.presented += 1;
        Ok(())
    }
}
