//! Menu depth indicator: one breathing indigo pixel per menu level.

use platform::ClockReading;

use crate::buffer::PixelBuffer;
use crate::color;
use crate::config;

#[derive(Debug)]
pub(crate) struct MenuBreathing {
    last_update: Option<ClockReading>,
    fade_step: usize,
    depth: u8,
}

impl MenuBreathing {
    pub(crate) fn new() -> Self {
        Self {
            last_update: None,
            fade_step: 0,
            depth: 1,
        }
    }

    pub(crate) fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    pub(crate) fn advance(&mut self, buf: &mut PixelBuffer, now: ClockReading) {
        if let Some(last) = self.last_update {
            if now.elapsed_since(last) < config::MENU_REFRESH_MS {
                return;
            }
        }
        self.last_update = Some(now);

        buf.clear();
        let level = config::FADE_SEQUENCE[self.fade_step % config::FADE_SEQUENCE.len()];
        let lit = usize::from(self.depth).min(platform::STRIP_LEN);
        for i in 0..lit {
            buf.set(i, color::scale(color::INDIGO, level));
        }
        self.fade_step = (self.fade_step + 1) % config::FADE_SEQUENCE.len();
    }
}
