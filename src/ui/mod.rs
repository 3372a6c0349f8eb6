//! Terminal front end: one screen, three analysis buttons, a result popup.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod results;
pub mod terminal_guard;
pub mod theme;

use crate::config::Config;
use crate::ui::app::{App, SessionControl};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(session: &dyn SessionControl, config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(session, config.fetch.url.as_str());
    let events = EventHandler::new(tick_rate);
    tracing::info!(url = %config.fetch.url, "Terminal UI started");
    let size = terminal.size()?;
    app.set_viewport(Rect::new(0, 0, size.width, size.height));

    loop {
        app.sync();
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
                app.set_viewport(Rect::new(0, 0, cols, rows));
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(events);
    drop(guard);
    tracing::info!("Terminal UI stopped");
    Ok(())
}
