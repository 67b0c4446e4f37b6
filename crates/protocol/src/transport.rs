//! A bidirectional, timeout-controllable byte stream.
//!
//! This is the seam spec.md's core assumes but does not implement: socket
//! setup belongs to the `daemon` crate's accept loop, not here. Modeling it
//! as a trait lets [`crate::framing::FramingReader`] and the handshake be
//! exercised against an in-memory duplex buffer in tests instead of a real
//! socket.

use std::io;
use std::net::TcpStream;
use std::time::Duration;

/// A stream the framing reader can read from, write to, and retime.
pub trait Transport {
    /// Reads at least one byte into `buf`, returning the number read, or
    /// `Ok(0)` on a clean end of stream.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Writes the entirety of `buf`.
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()>;

    /// Sets the timeout applied to subsequent reads. `None` disables the
    /// timeout.
    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()>;
}

impl Transport for TcpStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        use std::io::Read as _;
        Read::read(self, buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        use std::io::Write as _;
        Write::write_all(self, buf)
    }

    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        Self::set_read_timeout(self, timeout)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::Transport;
    use std::collections::VecDeque;
    use std::io;
    use std::time::Duration;

    /// An in-memory [`Transport`] fed from a pre-scripted inbound queue,
    /// recording everything written to it. `recv` chunking is simulated by
    /// draining the inbound queue in fixed-size slices, matching the real
    /// `TcpStream::read` contract of "at least one byte, maybe fewer than
    /// asked for".
    pub struct MockTransport {
        inbound: VecDeque<u8>,
        pub outbound: Vec<u8>,
        pub timeouts: Vec<Duration>,
        exhausted_is_timeout: bool,
    }

    impl MockTransport {
        pub fn new(script: &[u8]) -> Self {
            Self {
                inbound: script.iter().copied().collect(),
                outbound: Vec::new(),
                timeouts: Vec::new(),
                exhausted_is_timeout: true,
            }
        }

        pub fn outbound_as_str(&self) -> String {
            String::from_utf8_lossy(&self.outbound).into_owned()
        }

        /// Exhausting the script yields a clean EOF (`Ok(0)`) instead of a
        /// timeout error.
        pub fn eof_at_end(mut self) -> Self {
            self.exhausted_is_timeout = false;
            self
        }
    }

    impl Transport for MockTransport {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.inbound.is_empty() {
                return if self.exhausted_is_timeout {
                    Err(io::Error::new(io::ErrorKind::WouldBlock, "mock timeout"))
                } else {
                    Ok(0)
                };
            }
            let n = buf.len().min(self.inbound.len());
            for slot in buf.iter_mut().take(n) {
                *slot = self.inbound.pop_front().expect("checked non-empty");
            }
            Ok(n)
        }

        fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
            self.outbound.extend_from_slice(buf);
            Ok(())
        }

        fn set_read_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()> {
            if let Some(timeout) = timeout {
                self.timeouts.push(timeout);
            }
            Ok(())
        }
    }
}
