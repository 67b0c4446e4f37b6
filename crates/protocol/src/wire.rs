//! Wire-level constants: the message terminator, outbound command
//! literals, and the handshake's two additive keys.

/// The two-byte sequence (BEL, BS) that ends every protocol message.
pub const TERMINATOR: [u8; 2] = [0x07, 0x08];

/// Added to the username hash to produce the server's half of the
/// handshake.
pub const SERVER_KEY: u32 = 54_621;

/// Added to the username hash to produce the confirmation code a
/// well-behaved client is expected to echo back.
pub const CLIENT_KEY: u32 = 45_328;

/// The hash and both derived codes wrap at this modulus.
pub const MODULUS: u32 = 65_536;

/// The status literal a recharging robot must send before any further
/// command is accepted.
pub const FULL_POWER: &str = "FULL POWER";

/// The status literal that begins a recharge pause.
pub const RECHARGING: &str = "RECHARGING";

/// The fixed set of commands the server ever sends, and the two
/// handshake-ack / already-terminal literals that share the same
/// terminator framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `102 MOVE`
    Move,
    /// `103 TURN LEFT`
    TurnLeft,
    /// `104 TURN RIGHT`
    TurnRight,
    /// `105 GET MESSAGE`
    GetMessage,
    /// `106 LOGOUT`
    Logout,
    /// `200 OK`, the handshake's success acknowledgement.
    Ok,
    /// `300 LOGIN FAILED`
    LoginFailed,
    /// `301 SYNTAX ERROR`
    SyntaxError,
    /// `302 LOGIC ERROR`
    LogicError,
}

impl Command {
    /// The literal wire text for this command, terminator excluded.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Move => "102 MOVE",
            Self::TurnLeft => "103 TURN LEFT",
            Self::TurnRight => "104 TURN RIGHT",
            Self::GetMessage => "105 GET MESSAGE",
            Self::Logout => "106 LOGOUT",
            Self::Ok => "200 OK",
            Self::LoginFailed => "300 LOGIN FAILED",
            Self::SyntaxError => "301 SYNTAX ERROR",
            Self::LogicError => "302 LOGIC ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminator_is_bel_then_backspace() {
        assert_eq!(TERMINATOR, [0x07, 0x08]);
    }

    #[test]
    fn command_literals_match_the_wire_table() {
        assert_eq!(Command::Move.as_str(), "102 MOVE");
        assert_eq!(Command::TurnLeft.as_str(), "103 TURN LEFT");
        assert_eq!(Command::TurnRight.as_str(), "104 TURN RIGHT");
        assert_eq!(Command::GetMessage.as_str(), "105 GET MESSAGE");
        assert_eq!(Command::Logout.as_str(), "106 LOGOUT");
        assert_eq!(Command::Ok.as_str(), "200 OK");
        assert_eq!(Command::LoginFailed.as_str(), "300 LOGIN FAILED");
        assert_eq!(Command::SyntaxError.as_str(), "301 SYNTAX ERROR");
        assert_eq!(Command::LogicError.as_str(), "302 LOGIC ERROR");
    }
}
