//! Active-app collaborator boundary.

/// Emotion reported by the companion character, consumed by the
/// emotion-reactive pattern generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Emotion {
    /// Neutral resting face.
    #[default]
    Calm,
    /// Happy.
    Joy,
    /// Curious / alert.
    Curious,
    /// Sad.
    Blue,
    /// Sleepy.
    Drowsy,
}

/// Host for launchable apps (games, utilities) living outside the core.
///
/// The `App → Home` behavior transition is driven purely by
/// [`is_app_active`](AppHost::is_app_active) going false.
pub trait AppHost {
    /// Whether an app currently has the foreground.
    fn is_app_active(&self) -> bool;

    /// The companion emotion the active experience is reporting.
    fn emotion(&self) -> Emotion;
}
