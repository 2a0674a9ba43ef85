//! Immersive window chrome for full-screen rendering.

/// How hidden system bars may come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarsBehavior {
    /// Bars reappear on any interaction with the system
    Default,
    /// Bars show briefly on an edge swipe and hide again
    TransientBarsBySwipe,
}

/// Window chrome settings applied while a session is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImmersiveMode {
    /// Whether content is laid out inside the system bars
    pub fit_system_windows: bool,
    pub hide_system_bars: bool,
    pub hide_display_cutout: bool,
    pub behavior: BarsBehavior,
}

impl ImmersiveMode {
    /// Render behind all system UI with the bars hidden.
    pub const FULLSCREEN: Self = Self {
        fit_system_windows: false,
        hide_system_bars: true,
        hide_display_cutout: true,
        behavior: BarsBehavior::TransientBarsBySwipe,
    };
}

impl Default for ImmersiveMode {
    fn default() -> Self {
        Self::FULLSCREEN
    }
}

/// The host window's chrome controller.
pub trait WindowChrome: Send {
    fn apply(&mut self, mode: &ImmersiveMode);
}
