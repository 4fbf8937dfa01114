use carousel_domain::CardRecord;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    CardsLoaded(Result<Vec<CardRecord>, String>),
    SourceChanged,
}

pub struct EventHandler {
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    shutdown_tx: mpsc::UnboundedSender<()>,
}

impl EventHandler {
    /// Polls the terminal every frame, forwarding pending input followed by a tick.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (shutdown_tx, mut shutdown_rx) = mpsc::unbounded_channel();
        let input_tx = tx.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                    _ = tokio::time::sleep(Duration::from_millis(16)) => {
                        while event::poll(Duration::from_millis(0)).unwrap_or(false) {
                            let forwarded = match event::read() {
                                Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                                Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                                Ok(CrosstermEvent::Resize(cols, rows)) => Some(Event::Resize(cols, rows)),
                                _ => None,
                            };
                            if let Some(event) = forwarded {
                                if input_tx.send(event).is_err() {
                                    return;
                                }
                            }
                        }
                        if input_tx.send(Event::Tick).is_err() {
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

    /// Sender for background tasks that feed events into the loop.
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

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn should_quit(key: &KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
