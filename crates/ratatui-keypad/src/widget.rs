//! The full widget: input surface + keypad overlay, rendered together and
//! fed from one event stream.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui_keypad_core::composite::CompositeAction;
use ratatui_keypad_core::composite::CompositeOptions;
use ratatui_keypad_core::composite::InputKeyboard;
use ratatui_keypad_core::composite::WidgetRegions;
use ratatui_keypad_core::input::InputEvent;
use ratatui_keypad_core::input::MouseEventKind;

use crate::input_view::InputView;
use crate::input_view::InputViewOptions;
use crate::keyboard_view::KeyboardView;
use crate::keyboard_view::KeyboardViewOptions;
use crate::mount::KeyboardMount;
use crate::theme::Theme;

pub struct InputKeyboardView {
    state: InputKeyboard,
    input_view: InputView,
    keyboard_view: KeyboardView,
    mount: KeyboardMount,
    regions: WidgetRegions,
}

impl InputKeyboardView {
    pub fn new(options: CompositeOptions, theme: Theme) -> Self {
        Self {
            state: InputKeyboard::new(options),
            input_view: InputView::new(theme.clone()),
            keyboard_view: KeyboardView::new(theme),
            mount: KeyboardMount::default(),
            regions: WidgetRegions::default(),
        }
    }

    pub fn with_views(
        options: CompositeOptions,
        theme: Theme,
        input_options: InputViewOptions,
        keyboard_options: KeyboardViewOptions,
        mount: KeyboardMount,
    ) -> Self {
        Self {
            state: InputKeyboard::new(options),
            input_view: InputView::with_options(theme.clone(), input_options),
            keyboard_view: KeyboardView::with_options(theme, keyboard_options),
            mount,
            regions: WidgetRegions::default(),
        }
    }

    /// See [`InputKeyboard::with_validate`].
    pub fn with_validate(mut self, validate: impl Fn(String) -> String + 'static) -> Self {
        self.state = self.state.with_validate(validate);
        self
    }

    pub fn state(&self) -> &InputKeyboard {
        &self.state
    }

    pub fn value(&self) -> &str {
        self.state.value()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn focus(&mut self) -> CompositeAction {
        self.state.focus()
    }

    pub fn blur(&mut self) -> CompositeAction {
        self.state.blur()
    }

    pub fn set_value(&mut self, external: &str) -> CompositeAction {
        self.state.set_value(external)
    }

    pub fn tick(&mut self) {
        self.state.tick();
    }

    /// Renders the surface into `input_area` and the keyboard at its mount
    /// target within `frame`, and records the owned regions every
    /// subsequent event is hit-tested against.
    pub fn render_ref(&mut self, input_area: Rect, frame: Rect, buf: &mut Buffer) {
        let surface = self
            .input_view
            .render_ref(self.state.surface(), &self.state.projection(), input_area, buf);

        let keyboard_area = self.mount.resolve(frame, self.state.keyboard());
        let mut keyboard =
            self.keyboard_view
                .render_ref(self.state.keyboard(), keyboard_area, buf);
        keyboard.trigger = surface;

        self.regions = WidgetRegions { surface, keyboard };
    }

    /// Routes one event using the regions from the last render.
    pub fn handle_event(&mut self, event: InputEvent) -> CompositeAction {
        if let InputEvent::Mouse(mouse) = &event {
            match mouse.kind {
                MouseEventKind::Down(_) => {
                    match self
                        .state
                        .keyboard()
                        .layout()
                        .key_index_at(mouse.position(), self.regions.keyboard.keys)
                    {
                        Some(index) if self.state.is_open() => self.keyboard_view.press(index),
                        _ => self.keyboard_view.release(),
                    }
                }
                MouseEventKind::Up(_) => self.keyboard_view.release(),
            }
        }
        self.state.handle_event(event, &self.regions)
    }
}
