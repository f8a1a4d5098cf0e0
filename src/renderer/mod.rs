//! Render collaborators
//!
//! A renderer gets one `Snapshot` per tick and paints it. It never touches the
//! simulation.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::error::RenderError;
use crate::sim::Snapshot;

/// Paints one frame
pub trait Renderer {
    fn render(&mut self, frame: &Snapshot) -> Result<(), RenderError>;
}

impl<F> Renderer for F
where
    F: FnMut(&Snapshot) -> Result<(), RenderError>,
{
    fn render(&mut self, frame: &Snapshot) -> Result<(), RenderError> {
        self(frame)
    }
}

/// Headless renderer: traces every frame and logs the score when it changes
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_score: Option<(u32, u32)>,
    frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Snapshot) -> Result<(), RenderError> {
        self.frames += 1;
        log::trace!(
            "tick {}: ball ({:.1}, {:.1}) paddles L {:.1} R {:.1}",
            frame.tick,
            frame.ball.x,
            frame.ball.y,
            frame.left_paddle.y,
            frame.right_paddle.y
        );

        let score = (frame.score_left, frame.score_right);
        if self.last_score != Some(score) {
            log::info!("Score {} - {}", score.0, score.1);
            self.last_score = Some(score);
        }
        Ok(())
    }
}
