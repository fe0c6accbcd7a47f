//! Boot loading bar: four strip sections, one per boot stage.

use platform::{ClockReading, RGB8, STRIP_LEN};

use crate::buffer::PixelBuffer;
use crate::color;
use crate::config;
use crate::engine::BootStage;

/// Pixels per boot-stage section.
const SECTION_LEN: usize = STRIP_LEN / 4;

fn stage_color(stage: BootStage) -> RGB8 {
    match stage {
        BootStage::HardwareInit => color::RED,
        BootStage::SystemStart => color::YELLOW,
        BootStage::NetworkPrep => color::BLUE,
        BootStage::FinalPrep => color::GREEN,
    }
}

fn section_start(stage: BootStage) -> usize {
    stage.index() * SECTION_LEN
}

#[derive(Debug)]
pub(crate) struct LoadingBar {
    last_step: Option<ClockReading>,
    stage: BootStage,
    /// Absolute index of the next pixel to light within the active section.
    cursor: usize,
}

impl LoadingBar {
    pub(crate) fn new() -> Self {
        Self {
            last_step: None,
            stage: BootStage::HardwareInit,
            cursor: 0,
        }
    }

    /// Switch boot stage. The cursor jumps to the start of the new section
    /// rather than continuing from wherever the old section left it.
    pub(crate) fn set_stage(&mut self, stage: BootStage, buf: &mut PixelBuffer) {
        if stage == self.stage {
            return;
        }
        self.stage = stage;
        self.cursor = section_start(stage);
        // Earlier stages render complete even if a stage was skipped.
        for s in [
            BootStage::HardwareInit,
            BootStage::SystemStart,
            BootStage::NetworkPrep,
            BootStage::FinalPrep,
        ] {
            if s.index() < stage.index() {
                for i in section_start(s)..section_start(s) + SECTION_LEN {
                    buf.set(i, stage_color(s));
                }
            }
        }
    }

    pub(crate) fn advance(&mut self, buf: &mut PixelBuffer, now: ClockReading) {
        if let Some(last) = self.last_step {
            if now.elapsed_since(last) < config::LOADING_STEP_MS {
                return;
            }
        }
        self.last_step = Some(now);

        let end = section_start(self.stage) + SECTION_LEN;
        if self.cursor < end {
            buf.set(self.cursor, stage_color(self.stage));
            self.cursor += 1;
        }
        // Section full: hold until the stage changes.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(ms: u32) -> ClockReading {
        ClockReading::from_millis(ms)
    }

    #[test]
    fn lights_one_pixel_per_interval() {
        let mut bar = LoadingBar::new();
        let mut buf = PixelBuffer::new();
        bar.advance(&mut buf, t(0));
        assert_eq!(buf.get(0), color::RED);
        assert_eq!(buf.get(1), color::OFF);
        bar.advance(&mut buf, t(config::LOADING_STEP_MS));
        assert_eq!(buf.get(1), color::RED);
    }

    #[test]
    fn early_advance_does_not_step() {
        let mut bar = LoadingBar::new();
        let mut buf = PixelBuffer::new();
        bar.advance(&mut buf, t(0));
        bar.advance(&mut buf, t(config::LOADING_STEP_MS - 1));
        assert_eq!(buf.get(1), color::OFF);
    }

    #[test]
    fn stage_change_resets_cursor_to_new_section() {
        let mut bar = LoadingBar::new();
        let mut buf = PixelBuffer::new();
        bar.advance(&mut buf, t(0)); // pixel 0 lit, cursor mid-section
        bar.set_stage(BootStage::NetworkPrep, &mut buf);
        bar.advance(&mut buf, t(200));
        // First pixel of the NetworkPrep section, not a continuation.
        assert_eq!(buf.get(4), color::BLUE);
        assert_eq!(buf.get(5), color::OFF);
    }

    #[test]
    fn earlier_sections_backfill_on_stage_jump() {
        let mut bar = LoadingBar::new();
        let mut buf = PixelBuffer::new();
        bar.set_stage(BootStage::FinalPrep, &mut buf);
        assert_eq!(buf.get(0), color::RED);
        assert_eq!(buf.get(3), color::YELLOW);
        assert_eq!(buf.get(5), color::BLUE);
        assert_eq!(buf.get(6), color::OFF);
    }
}
