// Drawable area the simulation spawns into

/// Long side of the virtual play area
const VIRTUAL_LONG_SIDE: f32 = 800.0;
/// Short side of the virtual play area
const VIRTUAL_SHORT_SIDE: f32 = 400.0;

/// Current drawable area in game units
///
/// May change between ticks; spawning always reads the current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Virtual resolution for a window of the given physical size
    ///
    /// The game always runs at 800x400 (landscape) or 400x800 (portrait)
    /// and the presentation layer stretches it to the window.
    pub fn for_window(width: u32, height: u32) -> Self {
        if width > height {
            Self::new(VIRTUAL_LONG_SIDE, VIRTUAL_SHORT_SIDE)
        } else {
            Self::new(VIRTUAL_SHORT_SIDE, VIRTUAL_LONG_SIDE)
        }
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(VIRTUAL_LONG_SIDE, VIRTUAL_SHORT_SIDE)
    }
}
