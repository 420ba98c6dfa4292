//! Rendering for the keypad overlay: toolbar, key grid and the regions the
//! state machine hit-tests against.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui_keypad_core::keyboard::KEY_CELL_HEIGHT;
use ratatui_keypad_core::keyboard::Keyboard;
use ratatui_keypad_core::keyboard::KeyboardRegions;

use crate::render;
use crate::theme::Theme;

#[derive(Clone, Debug, Default)]
pub struct KeyboardViewOptions {
    /// Host-supplied toolbar lines rendered above the key grid. The number
    /// of rows actually shown is the keyboard's `toolbar_rows` (or all
    /// remaining space in full-height mode).
    pub toolbar: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct KeyboardView {
    options: KeyboardViewOptions,
    theme: Theme,
    active: Option<usize>,
}

impl KeyboardView {
    pub fn new(theme: Theme) -> Self {
        Self {
            options: KeyboardViewOptions::default(),
            theme,
            active: None,
        }
    }

    pub fn with_options(theme: Theme, options: KeyboardViewOptions) -> Self {
        Self {
            options,
            theme,
            active: None,
        }
    }

    /// Marks the key at `index` as pressed until [`KeyboardView::release`].
    pub fn press(&mut self, index: usize) {
        self.active = Some(index);
    }

    pub fn release(&mut self) {
        self.active = None;
    }

    /// Renders the keyboard into its mount area and returns the owned
    /// regions. A closed keyboard renders nothing and owns nothing; the
    /// trigger region is the composite's concern and is left empty here.
    pub fn render_ref(&self, keyboard: &Keyboard, area: Rect, buf: &mut Buffer) -> KeyboardRegions {
        if !keyboard.is_open() || area.width == 0 || area.height == 0 {
            return KeyboardRegions::default();
        }

        buf.set_style(area, self.theme.keyboard_bg);

        let layout = keyboard.layout();
        let grid_height = (layout.rows * KEY_CELL_HEIGHT).min(area.height);
        let options = keyboard.options();
        let toolbar_height = if options.toolbar_full_height {
            area.height.saturating_sub(grid_height)
        } else {
            options.toolbar_rows.min(area.height.saturating_sub(grid_height))
        };

        let toolbar_area = Rect::new(area.x, area.y, area.width, toolbar_height);
        let keys_area = Rect::new(
            area.x,
            area.y + toolbar_height,
            area.width,
            area.height - toolbar_height,
        );

        for (i, line) in self.options.toolbar.iter().enumerate() {
            if i as u16 >= toolbar_area.height {
                break;
            }
            render::render_str_clipped(
                toolbar_area.x + 1,
                toolbar_area.y + i as u16,
                toolbar_area.width.saturating_sub(2),
                buf,
                line,
                self.theme.keyboard_bg,
            );
        }

        for (index, key) in layout.keys.iter().enumerate() {
            let cell = layout.cell_rect(index, keys_area);
            // Leave the last row/column of each cell as the grid gap.
            let inner = Rect::new(
                cell.x,
                cell.y,
                cell.width.saturating_sub(1),
                cell.height.saturating_sub(1),
            );
            if inner.width == 0 || inner.height == 0 {
                continue;
            }
            let style = if self.active == Some(index) {
                self.theme.key_active
            } else {
                self.theme.key
            };
            buf.set_style(inner, style);
            render::render_str_centered(inner, inner.y, buf, key.label, style);
            if let Some(sub) = key.sub_label {
                if inner.height > 1 {
                    render::render_str_centered(
                        inner,
                        inner.y + 1,
                        buf,
                        sub,
                        self.theme.key_sub_label,
                    );
                }
            }
        }

        KeyboardRegions {
            trigger: Rect::default(),
            keys: keys_area,
            toolbar: (toolbar_height > 0).then_some(toolbar_area),
        }
    }
}
