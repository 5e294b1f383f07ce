//! Serialized line sink shared by every thread in the shop.
//!
//! All status output funnels through one [`EventLog`] so concurrent writers
//! never interleave partial lines. The sink is guarded by a blocking mutex
//! with RAII release; writers queue on the lock instead of spinning.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

use crate::event::Event;

/// Thread-safe, line-atomic event sink.
pub struct EventLog {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl EventLog {
    /// Wrap an arbitrary writer.
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Log to standard output.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Log into an in-memory buffer and return a handle for reading it back.
    ///
    /// Used by tests that assert on the emitted event stream.
    pub fn capture() -> (Self, LogCapture) {
        let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
        let log = Self::new(Box::new(CaptureWriter {
            buffer: buffer.clone(),
        }));
        (log, LogCapture { buffer })
    }

    /// Write one event as a single line.
    ///
    /// The whole line, terminator included, lands under one lock acquisition.
    /// Sink errors are swallowed: a broken console must not take the
    /// simulation down.
    pub fn emit(&self, event: Event) {
        let mut sink = self.sink.lock();
        let _ = writeln!(sink, "{event}");
        let _ = sink.flush();
    }
}

/// Read-side handle to a captured log stream.
#[derive(Clone)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// All complete lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        let buffer = self.buffer.lock();
        String::from_utf8_lossy(&buffer)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
