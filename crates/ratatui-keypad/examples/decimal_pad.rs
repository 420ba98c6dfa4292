use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui_keypad::theme::Theme;
use ratatui_keypad::widget::InputKeyboardView;
use ratatui_keypad_core::composite::CompositeAction;
use ratatui_keypad_core::composite::CompositeOptions;
use ratatui_keypad_core::crossterm_input::input_event_from_crossterm;
use ratatui_keypad_core::input::InputEvent;
use ratatui_keypad_core::input::KeyCode;
use ratatui_keypad_core::surface::SurfaceOptions;
use std::io;
use std::time::Duration;
use std::time::Instant;

const BLINK_INTERVAL: Duration = Duration::from_millis(500);

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut widget = InputKeyboardView::new(
        CompositeOptions {
            surface: SurfaceOptions {
                placeholder: "tap to enter an amount".to_string(),
                ..SurfaceOptions::default()
            },
            ..CompositeOptions::default()
        },
        Theme::dark(),
    );

    let res = run(&mut terminal, &mut widget);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend<Error = io::Error>>(
    terminal: &mut Terminal<B>,
    widget: &mut InputKeyboardView,
) -> io::Result<()> {
    let mut last_change = String::new();
    let mut last_blink = Instant::now();

    loop {
        terminal.draw(|f| {
            let frame = f.area();
            let input_area = Rect::new(
                frame.x + 2,
                frame.y + 1,
                frame.width.saturating_sub(4),
                3,
            );
            let buf = f.buffer_mut();
            widget.render_ref(input_area, frame, buf);
            buf.set_stringn(
                frame.x + 2,
                frame.y + 5,
                format!("last change: {last_change}  (Esc quits)"),
                frame.width.saturating_sub(4) as usize,
                Style::default(),
            );
        })?;

        if last_blink.elapsed() >= BLINK_INTERVAL {
            widget.tick();
            last_blink = Instant::now();
        }

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Some(event) = input_event_from_crossterm(crossterm::event::read()?) else {
            continue;
        };
        if let InputEvent::Key(key) = &event {
            if key.code == KeyCode::Esc {
                return Ok(());
            }
        }
        match widget.handle_event(event) {
            CompositeAction::Changed(value) => last_change = value,
            CompositeAction::Opened { .. } | CompositeAction::Closed | CompositeAction::None => {}
        }
    }
}
