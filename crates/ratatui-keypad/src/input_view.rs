//! Rendering for the input display surface: decorations, value tokens,
//! placeholder and caret.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui_keypad_core::display::Projection;
use ratatui_keypad_core::surface::InputSurface;
use unicode_width::UnicodeWidthStr;

use crate::render;
use crate::theme::Theme;

#[derive(Clone, Debug, Default)]
pub struct InputViewOptions {
    /// Rendered before the value, e.g. a currency sign.
    pub left_decoration: Option<String>,
    /// Rendered right-aligned after the value, e.g. a unit.
    pub right_decoration: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct InputView {
    options: InputViewOptions,
    theme: Theme,
}

impl InputView {
    pub fn new(theme: Theme) -> Self {
        Self {
            options: InputViewOptions::default(),
            theme,
        }
    }

    pub fn with_options(theme: Theme, options: InputViewOptions) -> Self {
        Self { options, theme }
    }

    /// Renders the surface into `area` and returns the region it owns for
    /// hit-testing. Zero-sized areas render nothing.
    pub fn render_ref(
        &self,
        surface: &InputSurface,
        projection: &Projection,
        area: Rect,
        buf: &mut Buffer,
    ) -> Rect {
        if area.width == 0 || area.height == 0 {
            return area;
        }
        buf.set_style(area, self.theme.surface_bg);

        let y = area.y + area.height / 2;
        let mut x = area.x + 1;
        let right_edge = area.x + area.width;

        if let Some(left) = &self.options.left_decoration {
            let remaining = right_edge.saturating_sub(x);
            x += render::render_str_clipped(x, y, remaining, buf, left, self.theme.text) + 1;
        }
        if let Some(right) = &self.options.right_decoration {
            let w = (UnicodeWidthStr::width(right.as_str()) as u16).min(area.width);
            let rx = right_edge.saturating_sub(w + 1);
            render::render_str_clipped(rx, y, w, buf, right, self.theme.text);
        }

        if surface.shows_placeholder(projection.is_empty()) {
            let remaining = right_edge.saturating_sub(x + 1);
            render::render_str_clipped(
                x,
                y,
                remaining,
                buf,
                &surface.options().placeholder,
                self.theme.placeholder,
            );
            return area;
        }

        let value: String = projection.tokens.iter().map(|t| t.glyph()).collect();
        let remaining = right_edge.saturating_sub(x + 1);
        x += render::render_str_clipped(x, y, remaining, buf, &value, self.theme.text);

        if surface.caret_visible() && x < right_edge {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(self.theme.text);
                cell.set_symbol("\u{2502}");
            }
        }

        area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui_keypad_core::display::DisplayMode;
    use ratatui_keypad_core::display::project;
    use ratatui_keypad_core::surface::SurfaceOptions;

    fn row(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn renders_tokens_on_the_middle_row() {
        let view = InputView::new(Theme::light());
        let surface = InputSurface::new(SurfaceOptions::default());
        let projection = project("1,234", DisplayMode::Text, '\u{2022}');
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        view.render_ref(&surface, &projection, area, &mut buf);
        assert!(row(&buf, 1, 12).contains("1,234"));
    }

    #[test]
    fn shows_placeholder_when_empty_and_unfocused() {
        let view = InputView::new(Theme::light());
        let surface = InputSurface::new(SurfaceOptions {
            placeholder: "amount".to_string(),
            ..SurfaceOptions::default()
        });
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        view.render_ref(&surface, &Projection::default(), area, &mut buf);
        assert!(row(&buf, 1, 12).contains("amount"));
    }

    #[test]
    fn caret_cell_appears_while_focused() {
        let view = InputView::new(Theme::light());
        let mut surface = InputSurface::new(SurfaceOptions::default());
        surface.focus();
        let projection = project("7", DisplayMode::Text, '\u{2022}');
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        view.render_ref(&surface, &projection, area, &mut buf);
        assert!(row(&buf, 1, 12).contains("7\u{2502}"));
    }

    #[test]
    fn zero_area_is_a_no_op() {
        let view = InputView::new(Theme::light());
        let surface = InputSurface::new(SurfaceOptions::default());
        let mut buf = Buffer::empty(Rect::new(0, 0, 1, 1));
        view.render_ref(&surface, &Projection::default(), Rect::default(), &mut buf);
    }
}
