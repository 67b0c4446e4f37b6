#![cfg(test)]

//! A scripted in-process robot used to drive [`crate::navigator`] and
//! [`crate::sweeper`] through a real [`Transport`] implementation instead of
//! asserting against recorded bytes.

use core::grid::{Direction, Position};
use protocol::transport::Transport;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::time::Duration;

pub(crate) struct FakeRobot {
    position: Position,
    facing: Direction,
    transient_blocks: HashMap<Position, u32>,
    messages: HashMap<Position, String>,
    inbound: Vec<u8>,
    outbound_reply: VecDeque<u8>,
    received: Vec<u8>,
}

impl FakeRobot {
    pub(crate) fn new(position: Position, facing: Direction) -> Self {
        Self {
            position,
            facing,
            transient_blocks: HashMap::new(),
            messages: HashMap::new(),
            inbound: Vec::new(),
            outbound_reply: VecDeque::new(),
            received: Vec::new(),
        }
    }

    /// Every byte ever written to this robot, for asserting that a
    /// particular command was sent even after its framing has been drained
    /// from the live `inbound` buffer.
    pub(crate) fn outbound_as_str(&self) -> String {
        String::from_utf8_lossy(&self.received).into_owned()
    }

    /// The robot refuses to move onto `position` for the first `attempts`
    /// times a `MOVE` would land there, then allows it. Models a blocked
    /// robot that the navigator's unconditional retry eventually clears.
    pub(crate) fn block_for(mut self, position: Position, attempts: u32) -> Self {
        self.transient_blocks.insert(position, attempts);
        self
    }

    /// `GET MESSAGE` returns `message` once the robot is at `position`.
    pub(crate) fn with_message(mut self, position: Position, message: &str) -> Self {
        self.messages.insert(position, message.to_string());
        self
    }

    /// Applies `command` and returns the reply it provokes, or `None` for
    /// text the robot doesn't answer: the handshake's numeric server code
    /// and `200 OK` precede any navigation command and draw no reply from
    /// the robot side of the wire.
    fn handle(&mut self, command: &str) -> Option<String> {
        match command {
            "102 MOVE" => {
                let target = self.position.stepped(self.facing);
                let transiently_blocked = match self.transient_blocks.get_mut(&target) {
                    Some(remaining) if *remaining > 0 => {
                        *remaining -= 1;
                        true
                    }
                    _ => false,
                };
                if !transiently_blocked {
                    self.position = target;
                }
                Some(format!("OK {} {}", self.position.x, self.position.y))
            }
            "103 TURN LEFT" => {
                self.facing = self.facing.left();
                Some(format!("OK {} {}", self.position.x, self.position.y))
            }
            "104 TURN RIGHT" => {
                self.facing = self.facing.right();
                Some(format!("OK {} {}", self.position.x, self.position.y))
            }
            "105 GET MESSAGE" => {
                Some(self.messages.get(&self.position).cloned().unwrap_or_default())
            }
            "200 OK" => None,
            other => {
                if other.chars().all(|c| c.is_ascii_digit()) {
                    None
                } else {
                    panic!("fake robot received unexpected command: {other}")
                }
            }
        }
    }
}

impl Transport for FakeRobot {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.outbound_reply.is_empty() {
            return Err(io::Error::new(io::ErrorKind::WouldBlock, "fake robot idle"));
        }
        let n = buf.len().min(self.outbound_reply.len());
        for slot in buf.iter_mut().take(n) {
            *slot = self.outbound_reply.pop_front().expect("checked non-empty");
        }
        Ok(n)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.received.extend_from_slice(buf);
        self.inbound.extend_from_slice(buf);
        while let Some(at) = self.inbound.windows(2).position(|w| w == [0x07, 0x08]) {
            let command = String::from_utf8_lossy(&self.inbound[..at]).into_owned();
            self.inbound.drain(..at + 2);
            if command == "106 LOGOUT" {
                continue;
            }
            if let Some(reply) = self.handle(&command) {
                self.outbound_reply.extend(reply.bytes());
                self.outbound_reply.push_back(0x07);
                self.outbound_reply.push_back(0x08);
            }
        }
        Ok(())
    }

    fn set_read_timeout(&mut self, _timeout: Option<Duration>) -> io::Result<()> {
        Ok(())
    }
}
