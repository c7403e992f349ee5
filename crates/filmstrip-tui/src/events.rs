use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    /// The image directory changed; the card list must be rebuilt.
    ContentChanged,
    Tick,
}

pub struct EventHandler {
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    shutdown_tx: mpsc::UnboundedSender<()>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (shutdown_tx, mut shutdown_rx) = mpsc::unbounded_channel();

        let poll_tx = tx.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                    _ = tokio::time::sleep(Duration::from_millis(16)) => {
                        if event::poll(Duration::from_millis(0)).unwrap_or(false) {
                            let forwarded = match event::read() {
                                Ok(CrosstermEvent::Key(key)) => poll_tx.send(Event::Key(key)),
                                Ok(CrosstermEvent::Resize(w, h)) => {
                                    poll_tx.send(Event::Resize(w, h))
                                }
                                _ => Ok(()),
                            };
                            if forwarded.is_err() {
                                break;
                            }
                        } else if poll_tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            tx,
            rx,
            shutdown_tx,
        }
    }

    /// A sender other tasks (the directory watcher) can push events through.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
