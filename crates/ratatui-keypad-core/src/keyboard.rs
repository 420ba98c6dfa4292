//! Open/close and value state machine behind the on-screen keypad.
//!
//! The keyboard owns its open flag and the current canonical value; every
//! entry point returns a [`KeyboardAction`] describing what changed, and the
//! host reacts to the action instead of registering callbacks. Change
//! notifications are deduplicated: an update that formats to the value
//! already stored returns [`KeyboardAction::None`].

use ratatui::layout::Rect;

use crate::format;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::MouseButton;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::layout::Key;
use crate::layout::KeyAction;
use crate::layout::Layout;
use crate::layout::Variant;
use crate::layout::layout_for;

/// Terminal rows one key cell occupies on screen. Hit-testing and height
/// measurement both derive from this.
pub const KEY_CELL_HEIGHT: u16 = 3;

/// Validation hook applied to every candidate value before formatting.
pub type ValidateFn = Box<dyn Fn(String) -> String>;

/// Whether values run through the numeric formatter or are kept verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueKind {
    #[default]
    Numeric,
    Text,
}

#[derive(Clone, Debug)]
pub struct KeyboardOptions {
    pub variant: Variant,
    pub value_kind: ValueKind,
    /// Once set, the keyboard never leaves the open state.
    pub always_open: bool,
    pub open_on_mount: bool,
    /// When true (the default), a click on the toolbar counts as an outside
    /// interaction and closes the keyboard.
    pub out_focus_on_click_toolbar: bool,
    /// Rows reserved above the key grid for host-supplied toolbar content.
    pub toolbar_rows: u16,
    /// Stretch the toolbar over all space the mount target grants beyond
    /// the key grid.
    pub toolbar_full_height: bool,
}

impl Default for KeyboardOptions {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            value_kind: ValueKind::default(),
            always_open: false,
            open_on_mount: false,
            out_focus_on_click_toolbar: true,
            toolbar_rows: 0,
            toolbar_full_height: false,
        }
    }
}

/// Screen regions the keyboard considers its own, recorded at render time.
/// A mouse-down anywhere else is an outside interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyboardRegions {
    /// The element whose click opens the keyboard (the input surface in the
    /// composite widget).
    pub trigger: Rect,
    /// The key grid.
    pub keys: Rect,
    pub toolbar: Option<Rect>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyboardAction {
    None,
    /// The keyboard is open; `height` is its measured height so the host can
    /// dock it. Re-fired on every trigger click, open or not.
    Opened { height: u16 },
    Closed,
    /// The canonical value changed to the carried string.
    Changed(String),
}

pub struct Keyboard {
    options: KeyboardOptions,
    layout: &'static Layout,
    open: bool,
    value: String,
    validate: Option<ValidateFn>,
}

impl Keyboard {
    pub fn new(options: KeyboardOptions) -> Self {
        let layout = layout_for(options.variant);
        let open = options.open_on_mount || options.always_open;
        Self {
            options,
            layout,
            open,
            value: String::new(),
            validate: None,
        }
    }

    /// Installs a hook that may veto or transform every candidate value,
    /// e.g. to enforce a maximum length. Identity when absent.
    pub fn with_validate(mut self, validate: impl Fn(String) -> String + 'static) -> Self {
        self.validate = Some(Box::new(validate));
        self
    }

    pub fn options(&self) -> &KeyboardOptions {
        &self.options
    }

    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_open(&self) -> bool {
        self.open || self.options.always_open
    }

    /// Rows the keyboard needs on screen: key grid plus reserved toolbar rows.
    pub fn measured_height(&self) -> u16 {
        self.layout.rows * KEY_CELL_HEIGHT + self.options.toolbar_rows
    }

    pub fn open(&mut self) -> KeyboardAction {
        self.open = true;
        KeyboardAction::Opened {
            height: self.measured_height(),
        }
    }

    pub fn close(&mut self) -> KeyboardAction {
        if self.options.always_open || !self.open {
            return KeyboardAction::None;
        }
        self.open = false;
        KeyboardAction::Closed
    }

    /// Applies one virtual key: delete pops the last character (no-op when
    /// empty), literals append. Never touches the open flag.
    pub fn handle_key(&mut self, key: Key) -> KeyboardAction {
        let mut candidate = self.value.clone();
        match key.action {
            KeyAction::Delete => {
                candidate.pop();
            }
            KeyAction::Literal(ch) => candidate.push(ch),
        }
        self.update_value(candidate)
    }

    /// Replaces the value from outside the keyboard's own keystrokes,
    /// running the same validate + format pipeline as [`Keyboard::handle_key`].
    pub fn set_value(&mut self, external: &str) -> KeyboardAction {
        self.update_value(external.to_string())
    }

    /// Physical-keyboard passthrough: a typed character clicks the matching
    /// virtual key, backspace clicks delete. Characters the active layout
    /// has no key for are ignored.
    pub fn handle_key_event(&mut self, event: KeyEvent) -> KeyboardAction {
        let key = match event.code {
            KeyCode::Char(ch) => self.layout.key_for_char(ch),
            KeyCode::Backspace => self.layout.delete_key(),
            KeyCode::Enter | KeyCode::Esc => None,
        };
        match key {
            Some(key) => self.handle_key(key),
            None => KeyboardAction::None,
        }
    }

    /// Routes a mouse event against the owned regions. Containment claims
    /// (trigger, key grid, protected toolbar) are resolved before the
    /// outside-close check, so a click that opens the keyboard can never
    /// also close it within the same dispatch.
    pub fn handle_mouse(&mut self, event: MouseEvent, regions: &KeyboardRegions) -> KeyboardAction {
        let MouseEventKind::Down(MouseButton::Left) = event.kind else {
            return KeyboardAction::None;
        };
        let pos = event.position();

        if regions.trigger.contains(pos) {
            return self.open();
        }
        if self.is_open() && regions.keys.contains(pos) {
            return match self.layout.key_at(pos, regions.keys) {
                Some(key) => self.handle_key(key),
                None => KeyboardAction::None,
            };
        }
        if let Some(toolbar) = regions.toolbar {
            if toolbar.contains(pos) && !self.options.out_focus_on_click_toolbar {
                return KeyboardAction::None;
            }
        }
        self.close()
    }

    fn update_value(&mut self, candidate: String) -> KeyboardAction {
        let validated = match &self.validate {
            Some(validate) => validate(candidate),
            None => candidate,
        };
        let next = match self.options.value_kind {
            ValueKind::Numeric => format::format_value(&validated).canonical,
            ValueKind::Text => validated,
        };
        if next == self.value {
            return KeyboardAction::None;
        }
        self.value = next.clone();
        KeyboardAction::Changed(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DECIMAL;

    fn key(ch: char) -> Key {
        DECIMAL.key_for_char(ch).unwrap()
    }

    fn delete() -> Key {
        DECIMAL.delete_key().unwrap()
    }

    #[test]
    fn key_clicks_build_a_formatted_value() {
        let mut kb = Keyboard::new(KeyboardOptions::default());
        for ch in ['1', '2', '3', '4'] {
            kb.handle_key(key(ch));
        }
        assert_eq!(kb.value(), "1234");
        assert_eq!(
            kb.handle_key(key('.')),
            KeyboardAction::Changed("1234.".to_string())
        );
    }

    #[test]
    fn delete_pops_and_underflows_quietly() {
        let mut kb = Keyboard::new(KeyboardOptions::default());
        kb.set_value("12.5");
        assert_eq!(
            kb.handle_key(delete()),
            KeyboardAction::Changed("12.".to_string())
        );
        assert_eq!(kb.value(), "12.");

        let mut empty = Keyboard::new(KeyboardOptions::default());
        assert_eq!(empty.handle_key(delete()), KeyboardAction::None);
        assert_eq!(empty.value(), "");
    }

    #[test]
    fn set_value_is_change_deduplicated() {
        let mut kb = Keyboard::new(KeyboardOptions::default());
        assert_eq!(
            kb.set_value("1234567"),
            KeyboardAction::Changed("1234567".to_string())
        );
        assert_eq!(kb.set_value("1234567"), KeyboardAction::None);
        assert_eq!(kb.set_value("1,234,567"), KeyboardAction::None);
    }

    #[test]
    fn validate_hook_can_veto_growth() {
        let mut kb = Keyboard::new(KeyboardOptions::default())
            .with_validate(|v| v.chars().take(3).collect());
        kb.set_value("123");
        assert_eq!(kb.handle_key(key('4')), KeyboardAction::None);
        assert_eq!(kb.value(), "123");
    }

    #[test]
    fn text_kind_skips_numeric_formatting() {
        let mut kb = Keyboard::new(KeyboardOptions {
            value_kind: ValueKind::Text,
            ..KeyboardOptions::default()
        });
        kb.set_value("007");
        assert_eq!(kb.value(), "007");
    }

    #[test]
    fn always_open_suppresses_close() {
        let mut kb = Keyboard::new(KeyboardOptions {
            always_open: true,
            ..KeyboardOptions::default()
        });
        assert!(kb.is_open());
        assert_eq!(kb.close(), KeyboardAction::None);
        assert!(kb.is_open());
    }

    #[test]
    fn close_is_edge_triggered() {
        let mut kb = Keyboard::new(KeyboardOptions::default());
        assert_eq!(kb.close(), KeyboardAction::None);
        kb.open();
        assert_eq!(kb.close(), KeyboardAction::Closed);
        assert_eq!(kb.close(), KeyboardAction::None);
    }

    #[test]
    fn trigger_click_opens_and_never_closes() {
        let mut kb = Keyboard::new(KeyboardOptions::default());
        let regions = KeyboardRegions {
            trigger: Rect::new(0, 0, 10, 3),
            keys: Rect::new(0, 5, 30, 12),
            toolbar: None,
        };
        let height = kb.measured_height();
        assert_eq!(
            kb.handle_mouse(MouseEvent::down(2, 1), &regions),
            KeyboardAction::Opened { height }
        );
        assert!(kb.is_open());
        // Same spot again: still an open claim, not an outside close.
        assert_eq!(
            kb.handle_mouse(MouseEvent::down(2, 1), &regions),
            KeyboardAction::Opened { height }
        );
        assert!(kb.is_open());
    }

    #[test]
    fn outside_click_closes_only_when_open() {
        let mut kb = Keyboard::new(KeyboardOptions::default());
        let regions = KeyboardRegions {
            trigger: Rect::new(0, 0, 10, 3),
            keys: Rect::new(0, 5, 30, 12),
            toolbar: None,
        };
        assert_eq!(
            kb.handle_mouse(MouseEvent::down(50, 1), &regions),
            KeyboardAction::None
        );
        kb.open();
        assert_eq!(
            kb.handle_mouse(MouseEvent::down(50, 1), &regions),
            KeyboardAction::Closed
        );
    }

    #[test]
    fn key_grid_click_types_into_the_value() {
        let mut kb = Keyboard::new(KeyboardOptions::default());
        kb.open();
        let keys = Rect::new(0, 5, 30, 12);
        let regions = KeyboardRegions {
            trigger: Rect::new(0, 0, 10, 3),
            keys,
            toolbar: None,
        };
        // Top-left cell is "1".
        assert_eq!(
            kb.handle_mouse(MouseEvent::down(1, 5), &regions),
            KeyboardAction::Changed("1".to_string())
        );
        // Mouse up is not a press.
        assert_eq!(
            kb.handle_mouse(MouseEvent::up(1, 5), &regions),
            KeyboardAction::None
        );
    }

    #[test]
    fn toolbar_click_respects_out_focus_flag() {
        let toolbar = Rect::new(0, 3, 30, 2);
        let regions = KeyboardRegions {
            trigger: Rect::new(0, 0, 10, 3),
            keys: Rect::new(0, 5, 30, 12),
            toolbar: Some(toolbar),
        };

        let mut kb = Keyboard::new(KeyboardOptions {
            toolbar_rows: 2,
            out_focus_on_click_toolbar: false,
            ..KeyboardOptions::default()
        });
        kb.open();
        assert_eq!(
            kb.handle_mouse(MouseEvent::down(5, 4), &regions),
            KeyboardAction::None
        );
        assert!(kb.is_open());

        let mut kb = Keyboard::new(KeyboardOptions {
            toolbar_rows: 2,
            ..KeyboardOptions::default()
        });
        kb.open();
        assert_eq!(
            kb.handle_mouse(MouseEvent::down(5, 4), &regions),
            KeyboardAction::Closed
        );
    }

    #[test]
    fn passthrough_maps_typed_chars_to_keys() {
        let mut kb = Keyboard::new(KeyboardOptions::default());
        kb.open();
        assert_eq!(
            kb.handle_key_event(KeyEvent::new(KeyCode::Char('7'))),
            KeyboardAction::Changed("7".to_string())
        );
        assert_eq!(
            kb.handle_key_event(KeyEvent::new(KeyCode::Char('x'))),
            KeyboardAction::None
        );
        assert_eq!(
            kb.handle_key_event(KeyEvent::new(KeyCode::Backspace)),
            KeyboardAction::Changed(String::new())
        );
    }

    #[test]
    fn measured_height_includes_toolbar_rows() {
        let kb = Keyboard::new(KeyboardOptions {
            toolbar_rows: 2,
            ..KeyboardOptions::default()
        });
        assert_eq!(kb.measured_height(), 4 * KEY_CELL_HEIGHT + 2);
    }
}
