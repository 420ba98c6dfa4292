//! Focus and caret state for the input display surface.

use crate::display::DEFAULT_MASK_GLYPH;
use crate::display::DisplayMode;

#[derive(Clone, Debug)]
pub struct SurfaceOptions {
    pub placeholder: String,
    pub mode: DisplayMode,
    pub mask_glyph: char,
    pub auto_focus: bool,
    /// Once set, `blur()` is a no-op and the surface stays focused.
    pub always_focus: bool,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            mode: DisplayMode::default(),
            mask_glyph: DEFAULT_MASK_GLYPH,
            auto_focus: false,
            always_focus: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceAction {
    None,
    Focused,
    Blurred,
}

/// Caret blink phase. The host ticks it at its frame cadence; the surface
/// owns no timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl CursorBlink {
    pub fn tick(&mut self) {
        self.visible = !self.visible;
    }

    pub fn reset(&mut self) {
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

pub struct InputSurface {
    options: SurfaceOptions,
    focused: bool,
    blink: CursorBlink,
}

impl InputSurface {
    pub fn new(options: SurfaceOptions) -> Self {
        let focused = options.auto_focus || options.always_focus;
        Self {
            options,
            focused,
            blink: CursorBlink::default(),
        }
    }

    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Change-deduplicated: focusing an already focused surface reports
    /// nothing. The caret restarts on its visible phase.
    pub fn focus(&mut self) -> SurfaceAction {
        if self.focused {
            return SurfaceAction::None;
        }
        self.focused = true;
        self.blink.reset();
        SurfaceAction::Focused
    }

    pub fn blur(&mut self) -> SurfaceAction {
        if self.options.always_focus || !self.focused {
            return SurfaceAction::None;
        }
        self.focused = false;
        SurfaceAction::Blurred
    }

    pub fn tick(&mut self) {
        self.blink.tick();
    }

    /// Placeholder shows only while the value is empty and the surface is
    /// unfocused.
    pub fn shows_placeholder(&self, value_is_empty: bool) -> bool {
        value_is_empty && !self.focused && !self.options.placeholder.is_empty()
    }

    pub fn caret_visible(&self) -> bool {
        self.focused && self.blink.is_visible()
    }
}
