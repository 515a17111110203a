//! Sinks for the board's event stream.
//!
//! The board never touches the filesystem. It queues [`GameEvent`]s, and a
//! [`Recorder`] decides what to do with them. [`GameLog`] turns them into
//! the plain-text `.sos` log that [`crate::replay`] can read back.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::event::GameEvent;

/// Receives board events in the order they happened.
pub trait Recorder {
    fn record(&mut self, event: &GameEvent);
}

impl Recorder for Vec<GameEvent> {
    fn record(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Text log of a game, one newline-terminated line per event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameLog {
    buffer: String,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a GameEvent>) -> Self {
        let mut log = Self::new();
        for event in events {
            log.record(event);
        }
        log
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Write the log to `path`, creating parent directories as needed.
    pub fn write_to(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, &self.buffer)?;
        info!(path = %path.display(), bytes = self.buffer.len(), "game log written");
        Ok(())
    }
}

impl Recorder for GameLog {
    fn record(&mut self, event: &GameEvent) {
        self.buffer.push_str(&event.to_string());
        self.buffer.push('\n');
    }
}
