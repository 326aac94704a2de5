use crate::config::ConfigStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

pub fn run(store: ConfigStore) -> io::Result<()> {
    let config = store.get();
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(&config);
    let events = EventHandler::new(tick_rate);
    tracing::info!(config = %store.path().display(), "interactive session started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            // ratatui re-queries the backend size on the next draw
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
