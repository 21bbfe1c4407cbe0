//! Host seam: the only way the harness touches the outside world.
//!
//! A freestanding build backs [`Runtime`] with raw system calls; a hosted
//! build backs it with the standard library. Everything above this module is
//! host-agnostic.

use crate::decimal::DecimalBuf;

/// Output stream identified by its raw descriptor number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Raw file descriptor passed to `write(2)`.
    pub const fn fd(self) -> i32 {
        match self {
            Stream::Stdout => 1,
            Stream::Stderr => 2,
        }
    }
}

/// Minimal runtime primitives the harness depends on.
pub trait Runtime {
    /// Write every byte of `bytes` to `stream`.
    ///
    /// Short writes and errors are not reported back; the output channel is
    /// assumed to accept everything offered to it.
    fn write_bytes(&mut self, stream: Stream, bytes: &[u8]);

    /// End the process with `code` as its exit status. Never returns.
    ///
    /// Only the low 8 bits survive on most hosts.
    fn terminate(&mut self, code: i32) -> !;

    /// Write a static string to stdout.
    fn print_text(&mut self, text: &str) {
        self.write_bytes(Stream::Stdout, text.as_bytes());
    }

    /// Write `value` to stdout as decimal digits.
    fn print_integer(&mut self, value: u64) {
        let mut buf = DecimalBuf::new();
        self.write_bytes(Stream::Stdout, buf.format(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Recorder;

    #[test]
    fn stream_descriptors_are_posix() {
        assert_eq!(Stream::Stdout.fd(), 1);
        assert_eq!(Stream::Stderr.fd(), 2);
    }

    #[test]
    fn print_integer_writes_plain_digits() {
        let mut rt = Recorder::default();
        rt.print_integer(0);
        rt.print_text(" ");
        rt.print_integer(202);
        assert_eq!(rt.stdout_str(), "0 202");
    }

    #[test]
    fn stderr_is_kept_apart() {
        let mut rt = Recorder::default();
        rt.write_bytes(Stream::Stderr, b"diag");
        assert!(rt.stdout.is_empty());
        assert_eq!(rt.stderr, b"diag");
    }
}
