use ratatui::style::Color;
use ratatui::style::Style;

/// Closed record of styles for the widget pair. Construct one per instance;
/// nothing here is process-global.
#[derive(Clone, Debug)]
pub struct Theme {
    pub text: Style,
    pub placeholder: Style,
    pub border: Style,
    pub surface_bg: Style,
    pub keyboard_bg: Style,
    pub key: Style,
    pub key_active: Style,
    pub key_sub_label: Style,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            text: Style::default().fg(Color::Black).bg(Color::White),
            placeholder: Style::default().fg(Color::Rgb(136, 136, 136)).bg(Color::White),
            border: Style::default().fg(Color::Rgb(51, 51, 51)),
            surface_bg: Style::default().bg(Color::White),
            keyboard_bg: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(206, 210, 217)),
            key: Style::default().fg(Color::Black).bg(Color::White),
            key_active: Style::default().fg(Color::Black).bg(Color::Rgb(206, 210, 217)),
            key_sub_label: Style::default().fg(Color::Rgb(136, 136, 136)).bg(Color::White),
        }
    }

    pub fn dark() -> Self {
        Self {
            text: Style::default().fg(Color::Rgb(221, 221, 221)).bg(Color::Black),
            placeholder: Style::default().fg(Color::Rgb(136, 136, 136)).bg(Color::Black),
            border: Style::default().fg(Color::Rgb(51, 51, 51)),
            surface_bg: Style::default().bg(Color::Black),
            keyboard_bg: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(32, 32, 32)),
            key: Style::default().fg(Color::White).bg(Color::Rgb(67, 67, 67)),
            key_active: Style::default().fg(Color::White).bg(Color::Rgb(88, 88, 88)),
            key_sub_label: Style::default()
                .fg(Color::Rgb(170, 170, 170))
                .bg(Color::Rgb(67, 67, 67)),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
