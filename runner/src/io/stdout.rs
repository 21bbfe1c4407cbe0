//! Standard-library backing for the harness runtime primitives.

use std::io::{self, Write};

use harness::{Runtime, Stream};
use tracing::warn;

/// [`Runtime`] that writes the transcript to any [`Write`] sink.
///
/// Stderr bytes always go to the process stderr.
#[derive(Debug)]
pub struct HostRuntime<W: Write> {
    out: W,
    write_errors: usize,
}

impl HostRuntime<io::StdoutLock<'static>> {
    /// Runtime over the locked process stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W: Write> HostRuntime<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            write_errors: 0,
        }
    }

    /// Number of writes the sink rejected so far.
    pub fn write_errors(&self) -> usize {
        self.write_errors
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Runtime for HostRuntime<W> {
    fn write_bytes(&mut self, stream: Stream, bytes: &[u8]) {
        let result = match stream {
            Stream::Stdout => self.out.write_all(bytes),
            Stream::Stderr => io::stderr().write_all(bytes),
        };
        // The harness has no error path for output; note it and keep going.
        if let Err(err) = result {
            self.write_errors += 1;
            warn!(fd = stream.fd(), err = %err, "transcript write failed");
        }
    }

    fn terminate(&mut self, code: i32) -> ! {
        if let Err(err) = self.out.flush() {
            warn!(err = %err, "flush before exit failed");
        }
        std::process::exit(code)
    }
}
