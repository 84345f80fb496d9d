use crate::cli::Overrides;
use crate::config::ConfigStore;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Run the interactive selector until the user quits or a signal arrives.
pub fn run(config: ConfigStore, overrides: Overrides) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.get().ui.tick_rate_ms);
    let shutdown = ShutdownHandle::new();
    shutdown.install_signal_handlers();

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config, overrides);
    let events = EventHandler::new(tick_rate, shutdown.clone());
    tracing::info!(mode = %app.mode(), "tui started");

    loop {
        app.refresh();
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    tracing::info!("tui stopped");
    Ok(())
}
