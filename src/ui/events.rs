use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

pub enum AppEvent {
    Input(KeyEvent),
    /// Terminal was resized; the next draw picks up the new size.
    Resize,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    /// Spawns the reader thread. It exits on the first event after the
    /// handler is dropped.
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let spawned = thread::Builder::new()
            .name("input-reader".to_string())
            .spawn(move || loop {
                let ready = match event::poll(poll_interval) {
                    Ok(ready) => ready,
                    Err(err) => {
                        tracing::error!("Failed to poll terminal events: {}", err);
                        break;
                    }
                };
                if !ready {
                    continue;
                }
                let app_event = match event::read() {
                    Ok(Event::Key(key)) => AppEvent::Input(key),
                    Ok(Event::Resize(_, _)) => AppEvent::Resize,
                    Ok(_) => continue,
                    Err(err) => {
                        tracing::error!("Failed to read terminal event: {}", err);
                        break;
                    }
                };
                if tx.send(app_event).is_err() {
                    break;
                }
            });
        if let Err(err) = spawned {
            tracing::error!("Failed to spawn input reader: {}", err);
        }

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
