//! The one place console bytes are written. Every line — caller messages and the crate's own
//! webhook failure reports alike — goes through a single lock, so lines never interleave.

use crate::entry::LogEntry;
use crate::severity::Severity;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

type Sink = Box<dyn Write + Send>;

/// Serialized console writer.
pub struct Console {
    /// Held for exactly one `write_all` + `flush`, never across network I/O.
    sink: Mutex<Sink>,
    /// Piped output and CI log viewers may not render ANSI escapes.
    colors: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}

impl Console {
    /// Colored output to the process's stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Any writer — a file, a pipe, or an in-memory buffer in tests.
    #[must_use]
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Mutex::new(Box::new(writer)),
            colors: true,
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// Renders and writes one line. Rendering (timestamp, escapes) happens before the lock
    /// is taken; the lock covers only the write.
    pub fn write(&self, severity: Severity, msg: &str) {
        let line = LogEntry::new(severity, msg).render(self.colors);
        self.write_line(&line);
    }

    /// Writes an already-rendered line. Console I/O has no failure path for callers,
    /// so write errors are dropped.
    pub fn write_line(&self, line: &str) {
        // A panic while holding the lock leaves the sink usable; keep logging.
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = sink.write_all(line.as_bytes());
        let _ = sink.flush();
    }
}
