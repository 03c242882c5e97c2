//! Terminal event abstraction.
//!
//! A blocking reader task polls crossterm and forwards key presses and
//! resizes over a channel; quiet periods produce [`AppEvent::Tick`].  The main
//! loop handles one event at a time, which is what keeps view transitions
//! strictly sequential.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Start the reader and return its receiving end.  The task exits once the
/// receiver is dropped.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        let next = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                // Releases and repeats would double-fire actions on
                // terminals that report them.
                Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => AppEvent::Key(k),
                Ok(CtEvent::Resize(w, h)) => AppEvent::Resize(w, h),
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "terminal read failed");
                    break;
                }
            },
            Ok(false) => AppEvent::Tick,
            Err(e) => {
                tracing::warn!(error = %e, "terminal poll failed");
                break;
            }
        };
        if tx.send(next).is_err() {
            break;
        }
    });

    rx
}
