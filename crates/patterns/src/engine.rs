//! Mode dispatch for the strip generators.
//!
//! The engine owns per-mode generator state and rebuilds it on every mode
//! switch, so no animation state leaks between modes. The one deliberate
//! exception is the timer background color, which survives switching away
//! from and back to the timer so an interrupted countdown resumes on its
//! accumulated fill.

use platform::{CalendarSnapshot, ClockReading, Emotion, RGB8, STRIP_LEN};

use crate::buffer::PixelBuffer;
use crate::clock_encoding::{FullEncoding, WeekStrip};
use crate::color;
use crate::config;
use crate::emotion::EmotionPulse;
use crate::festive::FestiveTwinkle;
use crate::loading::LoadingBar;
use crate::menu::MenuBreathing;
use crate::timer_drop::TimerDrop;

/// Boot progress stages shown by the loading bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootStage {
    /// Peripheral bring-up.
    HardwareInit,
    /// Core services starting.
    SystemStart,
    /// Network association in progress.
    NetworkPrep,
    /// Time sync and final checks.
    FinalPrep,
}

impl BootStage {
    pub(crate) fn index(self) -> usize {
        match self {
            BootStage::HardwareInit => 0,
            BootStage::SystemStart => 1,
            BootStage::NetworkPrep => 2,
            BootStage::FinalPrep => 3,
        }
    }
}

/// Clock-encoding layouts selectable from the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodingSubmode {
    /// Dense layout: weekday, week, month, hour, minutes, day of month.
    Full,
    /// One pixel per weekday with past days dark.
    Week,
    /// Falling-drop countdown animation.
    Timer,
    /// Breathing depth indicator while the menu is open.
    Menu,
    /// Frame supplied by an external app.
    Custom,
}

/// Top-level strip mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VisualMode {
    /// Strip dark.
    Off,
    /// Boot progress bar.
    Loading,
    /// One of the clock encodings.
    Encoding(EncodingSubmode),
    /// Seasonal twinkle for the current month.
    Festive,
    /// Whole-strip pulse tracking the active emotion.
    EmotionReactive,
}

/// Events a generator raises for the rest of the system to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternCue {
    /// A timer drop came to rest; index selects the landing tone.
    DropLanded {
        /// Position in the rainbow palette of the drop that landed.
        palette_index: usize,
    },
}

/// Modes reachable by turning the rotary encoder on the home screen.
const HOME_CYCLE: [VisualMode; 5] = [
    VisualMode::Encoding(EncodingSubmode::Full),
    VisualMode::Encoding(EncodingSubmode::Week),
    VisualMode::Encoding(EncodingSubmode::Timer),
    VisualMode::Festive,
    VisualMode::EmotionReactive,
];

#[derive(Debug)]
enum Generator {
    Off,
    Loading(LoadingBar),
    Full(FullEncoding),
    Week(WeekStrip),
    Timer(TimerDrop),
    Menu(MenuBreathing),
    Custom { last_update: Option<ClockReading> },
    Festive(FestiveTwinkle),
    Emotion(EmotionPulse),
}

/// Owns the active generator and routes per-tick updates to it.
#[derive(Debug)]
pub struct PatternEngine {
    mode: VisualMode,
    generator: Generator,
    /// Accumulated timer fill, kept across mode switches.
    timer_background: RGB8,
    menu_depth: u8,
    custom_frame: [RGB8; STRIP_LEN],
}

impl PatternEngine {
    /// Start in the loading mode, matching the boot sequence.
    pub fn new() -> Self {
        Self {
            mode: VisualMode::Loading,
            generator: Generator::Loading(LoadingBar::new()),
            timer_background: color::OFF,
            menu_depth: 1,
            custom_frame: [color::OFF; STRIP_LEN],
        }
    }

    /// Current top-level mode.
    pub fn mode(&self) -> VisualMode {
        self.mode
    }

    /// Switch modes, clearing the buffer and rebuilding generator state.
    pub fn set_mode(&mut self, mode: VisualMode, buf: &mut PixelBuffer) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        buf.clear();
        self.generator = match mode {
            VisualMode::Off => Generator::Off,
            VisualMode::Loading => Generator::Loading(LoadingBar::new()),
            VisualMode::Encoding(EncodingSubmode::Full) => Generator::Full(FullEncoding::new()),
            VisualMode::Encoding(EncodingSubmode::Week) => Generator::Week(WeekStrip::new()),
            VisualMode::Encoding(EncodingSubmode::Timer) => Generator::Timer(TimerDrop::new()),
            VisualMode::Encoding(EncodingSubmode::Menu) => {
                let mut menu = MenuBreathing::new();
                menu.set_depth(self.menu_depth);
                Generator::Menu(menu)
            }
            VisualMode::Encoding(EncodingSubmode::Custom) => Generator::Custom { last_update: None },
            VisualMode::Festive => Generator::Festive(FestiveTwinkle::new()),
            VisualMode::EmotionReactive => Generator::Emotion(EmotionPulse::new()),
        };
        if mode == VisualMode::Encoding(EncodingSubmode::Timer) {
            // Resume on the accumulated fill rather than a dark strip.
            buf.fill(self.timer_background);
        }
    }

    /// Step to the next (or previous) home-screen mode.
    pub fn cycle_submode(&mut self, step: i8, buf: &mut PixelBuffer) {
        let len = HOME_CYCLE.len() as i16;
        let current = HOME_CYCLE
            .iter()
            .position(|&m| m == self.mode)
            .unwrap_or(0) as i16;
        let next = (current + i16::from(step)).rem_euclid(len) as usize;
        self.set_mode(HOME_CYCLE[next], buf);
    }

    /// Advance the loading bar to a new boot stage.
    pub fn set_boot_stage(&mut self, stage: BootStage, buf: &mut PixelBuffer) {
        if let Generator::Loading(bar) = &mut self.generator {
            bar.set_stage(stage, buf);
        }
    }

    /// Number of menu levels currently open.
    pub fn set_menu_depth(&mut self, depth: u8) {
        self.menu_depth = depth;
        if let Generator::Menu(menu) = &mut self.generator {
            menu.set_depth(depth);
        }
    }

    /// Stage a frame for the custom submode.
    pub fn set_custom_frame(&mut self, frame: [RGB8; STRIP_LEN]) {
        self.custom_frame = frame;
    }

    /// Run the active generator for one tick. Each generator rate-limits
    /// itself, so calling this every tick is cheap.
    pub fn advance(
        &mut self,
        buf: &mut PixelBuffer,
        now: ClockReading,
        cal: Option<&CalendarSnapshot>,
        emotion: Emotion,
    ) -> Option<PatternCue> {
        match &mut self.generator {
            Generator::Off => {
                buf.clear();
                None
            }
            Generator::Loading(bar) => {
                bar.advance(buf, now);
                None
            }
            Generator::Full(full) => {
                full.advance(buf, now, cal);
                None
            }
            Generator::Week(week) => {
                week.advance(buf, now, cal);
                None
            }
            Generator::Timer(timer) => timer
                .advance(buf, now, &mut self.timer_background)
                .map(|landed| PatternCue::DropLanded {
                    palette_index: landed.palette_index,
                }),
            Generator::Menu(menu) => {
                menu.advance(buf, now);
                None
            }
            Generator::Custom { last_update } => {
                let due = match *last_update {
                    Some(last) => now.elapsed_since(last) >= config::CUSTOM_REFRESH_MS,
                    None => true,
                };
                if due {
                    *last_update = Some(now);
                    for (i, &c) in self.custom_frame.iter().enumerate() {
                        buf.set(i, c);
                    }
                }
                None
            }
            Generator::Festive(fx) => {
                fx.advance(buf, now, cal);
                None
            }
            Generator::Emotion(pulse) => {
                pulse.advance(buf, now, emotion);
                None
            }
        }
    }
}

impl Default for PatternEngine {
    fn default() -> Self {
        Self::new()
    }
}
