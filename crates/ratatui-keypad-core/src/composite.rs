//! The composite widget state: one input surface wired to one keyboard.
//!
//! Mouse dispatch follows a fixed ordering contract: containment claims
//! (surface, then keyboard-owned regions) are resolved before the
//! outside-close check runs, so a click that focuses or opens can never be
//! re-read as an outside interaction within the same dispatch.

use ratatui::layout::Rect;

use crate::display::DisplayMode;
use crate::display::Projection;
use crate::display::project;
use crate::format;
use crate::input::InputEvent;
use crate::input::KeyEvent;
use crate::input::MouseEvent;
use crate::keyboard::Keyboard;
use crate::keyboard::KeyboardAction;
use crate::keyboard::KeyboardOptions;
use crate::keyboard::KeyboardRegions;
use crate::keyboard::ValueKind;
use crate::surface::InputSurface;
use crate::surface::SurfaceOptions;

#[derive(Clone, Debug, Default)]
pub struct CompositeOptions {
    pub surface: SurfaceOptions,
    pub keyboard: KeyboardOptions,
    /// Composite-level overrides; OR-ed onto the keyboard's own flags.
    pub always_open: bool,
    pub open_on_mount: bool,
    /// Value the widget mounts with.
    pub value: String,
}

/// All regions the widget owns on screen, recorded at render time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetRegions {
    pub surface: Rect,
    pub keyboard: KeyboardRegions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompositeAction {
    None,
    Opened { height: u16 },
    Closed,
    Changed(String),
}

impl From<KeyboardAction> for CompositeAction {
    fn from(action: KeyboardAction) -> Self {
        match action {
            KeyboardAction::None => CompositeAction::None,
            KeyboardAction::Opened { height } => CompositeAction::Opened { height },
            KeyboardAction::Closed => CompositeAction::Closed,
            KeyboardAction::Changed(value) => CompositeAction::Changed(value),
        }
    }
}

pub struct InputKeyboard {
    surface: InputSurface,
    keyboard: Keyboard,
}

impl InputKeyboard {
    pub fn new(mut options: CompositeOptions) -> Self {
        options.keyboard.always_open |= options.always_open;
        options.keyboard.open_on_mount |= options.open_on_mount;
        let mut keyboard = Keyboard::new(options.keyboard);
        let mut surface = InputSurface::new(options.surface);
        if !options.value.is_empty() {
            keyboard.set_value(&options.value);
        }
        if keyboard.is_open() {
            surface.focus();
        }
        Self { surface, keyboard }
    }

    /// See [`Keyboard::with_validate`].
    pub fn with_validate(mut self, validate: impl Fn(String) -> String + 'static) -> Self {
        self.keyboard = self.keyboard.with_validate(validate);
        self
    }

    pub fn surface(&self) -> &InputSurface {
        &self.surface
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut Keyboard {
        &mut self.keyboard
    }

    pub fn value(&self) -> &str {
        self.keyboard.value()
    }

    pub fn is_open(&self) -> bool {
        self.keyboard.is_open()
    }

    /// Tokens for the current value under the surface's display mode.
    /// Numeric keyboards show the grouped display string; grouping is only
    /// applied for `Text` projection since separators are not part of the
    /// canonical value (`Numeric` validates it, `Masked` hides it).
    pub fn projection(&self) -> Projection {
        let opts = self.surface.options();
        let raw = match (opts.mode, self.keyboard.options().value_kind) {
            (DisplayMode::Text, ValueKind::Numeric) => format::group(self.keyboard.value()),
            _ => self.keyboard.value().to_string(),
        };
        project(&raw, opts.mode, opts.mask_glyph)
    }

    /// Imperative focus: claims the surface and opens the keyboard.
    pub fn focus(&mut self) -> CompositeAction {
        self.surface.focus();
        self.keyboard.open().into()
    }

    /// Imperative blur: releases the surface and closes the keyboard.
    /// Defensive no-op when already closed.
    pub fn blur(&mut self) -> CompositeAction {
        self.surface.blur();
        self.keyboard.close().into()
    }

    /// Pushes an externally driven value in; no duplicate change action when
    /// the formatted result is what is already stored.
    pub fn set_value(&mut self, external: &str) -> CompositeAction {
        self.keyboard.set_value(external).into()
    }

    pub fn handle_event(&mut self, event: InputEvent, regions: &WidgetRegions) -> CompositeAction {
        match event {
            InputEvent::Key(key) => self.handle_key_event(key),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse, regions),
        }
    }

    /// Physical-keyboard passthrough, active only while open.
    pub fn handle_key_event(&mut self, event: KeyEvent) -> CompositeAction {
        if !self.keyboard.is_open() {
            return CompositeAction::None;
        }
        self.keyboard.handle_key_event(event).into()
    }

    pub fn handle_mouse(&mut self, event: MouseEvent, regions: &WidgetRegions) -> CompositeAction {
        // Surface claim first: a click on the surface focuses and opens.
        if regions.surface.contains(event.position()) {
            return self.focus();
        }
        match self.keyboard.handle_mouse(event, &regions.keyboard) {
            KeyboardAction::Opened { height } => {
                self.surface.focus();
                CompositeAction::Opened { height }
            }
            KeyboardAction::Closed => {
                self.surface.blur();
                CompositeAction::Closed
            }
            other => other.into(),
        }
    }

    /// Advances the caret blink phase; drive at the host frame cadence.
    pub fn tick(&mut self) {
        self.surface.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayMode;
    use crate::display::DisplayToken;

    fn regions() -> WidgetRegions {
        let surface = Rect::new(0, 0, 20, 3);
        WidgetRegions {
            surface,
            keyboard: KeyboardRegions {
                trigger: surface,
                keys: Rect::new(0, 8, 30, 12),
                toolbar: None,
            },
        }
    }

    #[test]
    fn surface_click_focuses_and_opens() {
        let mut widget = InputKeyboard::new(CompositeOptions::default());
        let action = widget.handle_mouse(MouseEvent::down(5, 1), &regions());
        assert!(matches!(action, CompositeAction::Opened { .. }));
        assert!(widget.is_open());
        assert!(widget.surface().is_focused());
    }

    #[test]
    fn outside_click_closes_and_blurs() {
        let mut widget = InputKeyboard::new(CompositeOptions::default());
        widget.focus();
        let action = widget.handle_mouse(MouseEvent::down(29, 5), &regions());
        assert_eq!(action, CompositeAction::Closed);
        assert!(!widget.is_open());
        assert!(!widget.surface().is_focused());
    }

    #[test]
    fn click_inside_surface_never_closes() {
        let mut widget = InputKeyboard::new(CompositeOptions::default());
        widget.focus();
        let action = widget.handle_mouse(MouseEvent::down(1, 1), &regions());
        assert!(matches!(action, CompositeAction::Opened { .. }));
        assert!(widget.is_open());
    }

    #[test]
    fn external_value_does_not_echo_duplicates() {
        let mut widget = InputKeyboard::new(CompositeOptions::default());
        assert_eq!(
            widget.set_value("42"),
            CompositeAction::Changed("42".to_string())
        );
        assert_eq!(widget.set_value("42"), CompositeAction::None);
    }

    #[test]
    fn mount_value_and_open_on_mount() {
        let widget = InputKeyboard::new(CompositeOptions {
            open_on_mount: true,
            value: "0042".to_string(),
            ..CompositeOptions::default()
        });
        assert!(widget.is_open());
        assert!(widget.surface().is_focused());
        assert_eq!(widget.value(), "42");
    }

    #[test]
    fn projection_groups_numeric_values() {
        let mut widget = InputKeyboard::new(CompositeOptions::default());
        widget.set_value("1234567");
        let tokens: String = widget.projection().tokens.iter().map(|t| t.glyph()).collect();
        assert_eq!(tokens, "1,234,567");
    }

    #[test]
    fn projection_masks_when_configured() {
        let mut widget = InputKeyboard::new(CompositeOptions {
            surface: SurfaceOptions {
                mode: DisplayMode::Masked,
                ..SurfaceOptions::default()
            },
            keyboard: KeyboardOptions {
                value_kind: ValueKind::Text,
                ..KeyboardOptions::default()
            },
            ..CompositeOptions::default()
        });
        widget.set_value("1234");
        assert_eq!(
            widget.projection().tokens,
            vec![DisplayToken::Mask('\u{2022}'); 4]
        );
        assert_eq!(widget.value(), "1234");
    }

    #[test]
    fn typing_while_closed_is_ignored() {
        use crate::input::KeyCode;
        let mut widget = InputKeyboard::new(CompositeOptions::default());
        assert_eq!(
            widget.handle_key_event(KeyEvent::new(KeyCode::Char('5'))),
            CompositeAction::None
        );
        widget.focus();
        assert_eq!(
            widget.handle_key_event(KeyEvent::new(KeyCode::Char('5'))),
            CompositeAction::Changed("5".to_string())
        );
    }
}
