//! Whole-strip pulse in the color of the active emotion.

use platform::{ClockReading, Emotion, RGB8};

use crate::buffer::PixelBuffer;
use crate::color;
use crate::config;

fn emotion_color(emotion: Emotion) -> RGB8 {
    match emotion {
        Emotion::Calm => color::GREEN,
        Emotion::Joy => color::YELLOW,
        Emotion::Curious => color::BLUE,
        Emotion::Blue => color::INDIGO,
        Emotion::Drowsy => color::VIOLET,
    }
}

#[derive(Debug)]
pub(crate) struct EmotionPulse {
    last_update: Option<ClockReading>,
    fade_step: usize,
}

impl EmotionPulse {
    pub(crate) fn new() -> Self {
        Self {
            last_update: None,
            fade_step: 0,
        }
    }

    pub(crate) fn advance(&mut self, buf: &mut PixelBuffer, now: ClockReading, emotion: Emotion) {
        if let Some(last) = self.last_update {
            if now.elapsed_since(last) < config::EMOTION_REFRESH_MS {
                return;
            }
        }
        self.last_update = Some(now);

        let level = config::FADE_SEQUENCE[self.fade_step % config::FADE_SEQUENCE.len()];
        buf.fill(color::scale(emotion_color(emotion), level));
        self.fade_step = (self.fade_step + 1) % config::FADE_SEQUENCE.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_strip_with_emotion_color() {
        let mut pulse = EmotionPulse::new();
        let mut buf = PixelBuffer::new();
        pulse.advance(&mut buf, ClockReading::from_millis(0), Emotion::Joy);
        let expected = color::scale(color::YELLOW, config::FADE_SEQUENCE[0]);
        assert!(buf.all_eq(expected));
    }

    #[test]
    fn emotion_change_takes_effect_on_next_refresh() {
        let mut pulse = EmotionPulse::new();
        let mut buf = PixelBuffer::new();
        pulse.advance(&mut buf, ClockReading::from_millis(0), Emotion::Calm);
        pulse.advance(
            &mut buf,
            ClockReading::from_millis(config::EMOTION_REFRESH_MS),
            Emotion::Blue,
        );
        assert_eq!(
            buf.get(0),
            color::scale(color::INDIGO, config::FADE_SEQUENCE[1])
        );
    }
}
