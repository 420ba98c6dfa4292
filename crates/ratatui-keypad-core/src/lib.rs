//! `ratatui-keypad-core` provides the state machines and value formatting
//! behind an on-screen keypad + input surface widget pair for mouse/touch
//! driven terminal UIs.
//!
//! This crate is host-independent: it knows about screen regions
//! ([`ratatui::layout::Rect`]) and an event vocabulary, but owns no event
//! loop, no timers and no terminal. The rendering facade lives in the
//! `ratatui-keypad` crate.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you feed input events and drive the caret tick.
//! - Total APIs: invalid input resolves to defined fallbacks, state misuse
//!   is a defensive no-op, nothing here returns `Result`.
//! - Callback-free: every entry point returns an action enum
//!   ([`keyboard::KeyboardAction`], [`composite::CompositeAction`]) the host
//!   matches on.
//!
//! Useful entry points:
//! - [`format`]: sanitize / thousands-group / ungroup numeric strings.
//! - [`layout::layout_for`]: the static key layout registry.
//! - [`keyboard::Keyboard`]: open/close + value state machine with
//!   outside-interaction detection.
//! - [`composite::InputKeyboard`]: a surface wired to a keyboard with the
//!   documented dispatch-ordering contract.

pub mod composite;
pub mod display;
pub mod format;
pub mod input;
pub mod keyboard;
pub mod layout;
pub mod surface;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;
