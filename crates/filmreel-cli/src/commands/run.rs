use std::io;
use std::time::Duration;

use anyhow::{bail, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use filmreel_core::{AppConfig, ReelItem};
use filmreel_tui::{
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    widgets::{MasonryWidget, StatusBarWidget},
    App, Theme,
};

pub fn run(config: &AppConfig, items: Vec<ReelItem>) -> Result<()> {
    config.reel.validate()?;
    config.ui.validate()?;
    if items.is_empty() {
        bail!("No items to show. Pass an item file with --items.");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Filmreel"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config, items);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, config: &AppConfig, items: Vec<ReelItem>) -> Result<()> {
    let theme = Theme::default();
    let mut app = App::new(config, items);
    let event_handler = EventHandler::new(
        Duration::from_millis(config.ui.tick_rate_ms),
        config.ui.animation_tick_duration(),
    );
    let mut started = false;

    loop {
        // Layout pass: the list takes everything above the status bar
        let size = terminal.size()?;
        app.set_list_area(size.width, size.height.saturating_sub(1));
        if !started {
            app.start();
            started = true;
        }

        app.tick();

        terminal.draw(|frame| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            MasonryWidget::render(frame, rows[0], &app, &theme);
            StatusBarWidget::render(frame, rows[1], &app, &theme);
        })?;

        // Poll at frame rate while the reel moves
        let event = if app.reel.needs_frames() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    app.clear_status();
                    app.handle_action(handle_key_event(key));
                }
                AppEvent::Mouse(mouse) => app.handle_action(handle_mouse_event(mouse)),
                // Picked up by the next layout pass
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(
        mode = ?app.reel.mode(),
        scroll = app.reel.scroll_position(),
        "Reel closed"
    );
    Ok(())
}
