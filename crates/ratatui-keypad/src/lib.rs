//! On-screen keypad + input surface widgets for mouse-driven ratatui apps.
//!
//! This facade crate renders the state machines from `ratatui-keypad-core`:
//! an input surface with placeholder, caret and optional masking, and a
//! phone-style keypad overlay docked by a [`mount::KeyboardMount`] strategy.
//! The host owns the event loop; it feeds
//! [`ratatui_keypad_core::input::InputEvent`]s in and reacts to the returned
//! actions.
//!
//! ```no_run
//! use ratatui_keypad::theme::Theme;
//! use ratatui_keypad::widget::InputKeyboardView;
//! use ratatui_keypad_core::composite::CompositeOptions;
//!
//! let mut widget = InputKeyboardView::new(CompositeOptions::default(), Theme::dark());
//! // each frame: widget.render_ref(input_area, frame_area, buf);
//! // each event: match widget.handle_event(event) { .. }
//! ```

pub mod input_view;
pub mod keyboard_view;
pub mod mount;
pub mod render;
pub mod theme;
pub mod widget;

pub use ratatui_keypad_core::composite::CompositeAction;
pub use ratatui_keypad_core::composite::CompositeOptions;
pub use ratatui_keypad_core::input::InputEvent;
