use ratatui::layout::Rect;
use ratatui_keypad_core::keyboard::Keyboard;

/// Where the keyboard overlay attaches. The host injects this instead of
/// the widget assuming a global attachment point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyboardMount {
    /// Anchor to the bottom of the frame, sized to the keyboard's measured
    /// height (the whole frame in full-height toolbar mode).
    #[default]
    BottomDock,
    /// Attach to an exact region the host controls.
    Fixed(Rect),
}

impl KeyboardMount {
    pub fn resolve(&self, frame: Rect, keyboard: &Keyboard) -> Rect {
        match self {
            KeyboardMount::Fixed(area) => *area,
            KeyboardMount::BottomDock => {
                let height = if keyboard.options().toolbar_full_height {
                    frame.height
                } else {
                    keyboard.measured_height().min(frame.height)
                };
                Rect::new(
                    frame.x,
                    frame.y + frame.height - height,
                    frame.width,
                    height,
                )
            }
        }
    }
}
