//! Falling-drop timer animation.
//!
//! A drop of the current palette color falls from pixel 0 and rests on top of
//! the deepest background-colored pixel. When the strip fills, the whole
//! strip becomes the new background and the palette advances; wrapping past
//! the last palette color restarts on an empty strip.

use platform::{ClockReading, RGB8};

use crate::buffer::PixelBuffer;
use crate::color;
use crate::config;

/// Emitted when a drop comes to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DropLanded {
    pub(crate) palette_index: usize,
}

#[derive(Debug)]
pub(crate) struct TimerDrop {
    last_step: Option<ClockReading>,
    /// Current pixel of the in-flight drop, `None` between drops.
    drop_pos: Option<usize>,
    palette_index: usize,
}

impl TimerDrop {
    pub(crate) fn new() -> Self {
        Self {
            last_step: None,
            drop_pos: None,
            palette_index: 0,
        }
    }

    /// One animation step. `background` persists across mode switches so a
    /// resumed timer keeps its accumulated fill color.
    pub(crate) fn advance(
        &mut self,
        buf: &mut PixelBuffer,
        now: ClockReading,
        background: &mut RGB8,
    ) -> Option<DropLanded> {
        if let Some(last) = self.last_step {
            if now.elapsed_since(last) < config::TIMER_STEP_MS {
                return None;
            }
        }
        self.last_step = Some(now);

        let drop_color = color::rainbow(self.palette_index);
        match self.drop_pos {
            None => {
                if buf.get(0) == *background {
                    buf.set(0, drop_color);
                    self.drop_pos = Some(0);
                }
                None
            }
            Some(pos) => {
                let below_open =
                    pos + 1 < platform::STRIP_LEN && buf.get(pos + 1) == *background;
                if below_open {
                    buf.set(pos, *background);
                    buf.set(pos + 1, drop_color);
                    self.drop_pos = Some(pos + 1);
                    return None;
                }

                // Landed where it sits.
                let landed = DropLanded {
                    palette_index: self.palette_index,
                };
                self.drop_pos = None;
                if buf.none_eq(*background) {
                    self.palette_index = (self.palette_index + 1) % color::RAINBOW.len();
                    if self.palette_index == 0 {
                        // Full palette cycle complete: restart empty.
                        *background = color::OFF;
                        buf.fill(color::OFF);
                    } else {
                        *background = drop_color;
                    }
                }
                Some(landed)
            }
        }
    }
}
