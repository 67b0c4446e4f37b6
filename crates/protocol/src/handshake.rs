//! Username-hash handshake: server code out, confirmation code in.

use crate::codec::parse_confirmation;
use crate::error::SessionError;
use crate::framing::FramingReader;
use crate::transport::Transport;
use crate::wire::{Command, CLIENT_KEY, MODULUS, SERVER_KEY};
use core::config::LengthCaps;
use core::error::LoginFault;

/// Computes `H = (sum of ASCII ordinals * 1000) mod 65536` for `username`.
/// The multiply-before-mod ordering is the contract; simplifying it changes
/// every derived code.
#[must_use]
pub fn hash_username(username: &str) -> u32 {
    let sum: u32 = username.bytes().map(u32::from).sum();
    (sum * 1000) % MODULUS
}

/// Runs the handshake to completion: reads the username, sends the derived
/// server code, reads and checks the confirmation code, and sends `200 OK`
/// on success. A mismatch is returned as a [`LoginFault`] without writing
/// anything — the session driver owns sending the terminal `300 LOGIN
/// FAILED` response exactly once.
pub fn run<T: Transport>(
    reader: &mut FramingReader<T>,
    caps: &LengthCaps,
) -> Result<(), SessionError> {
    let username = reader.next_message(caps.username)?;
    let hash = hash_username(&username);

    let server_code = (hash + SERVER_KEY) % MODULUS;
    reader.send_text(&server_code.to_string())?;

    let confirmation_raw = reader.next_message(caps.confirmation)?;
    let confirmation = parse_confirmation(&confirmation_raw)?;

    let client_code = (hash + CLIENT_KEY) % MODULUS;
    if confirmation != client_code {
        return Err(LoginFault::ConfirmationMismatch {
            expected: client_code as u16,
            actual: confirmation as u16,
        }
        .into());
    }

    reader.send_command(Command::Ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;
    use core::config::Timeouts;

    fn handshake_script(username: &str, confirmation: u32) -> Vec<u8> {
        let mut script = Vec::new();
        script.extend_from_slice(username.as_bytes());
        script.extend_from_slice(&[0x07, 0x08]);
        script.extend_from_slice(confirmation.to_string().as_bytes());
        script.extend_from_slice(&[0x07, 0x08]);
        script
    }

    #[test]
    fn hash_multiplies_before_taking_the_modulus() {
        // "AB" = 65 + 66 = 131; 131 * 1000 = 131000; 131000 % 65536 = 65464.
        assert_eq!(hash_username("AB"), 65_464);
    }

    #[test]
    fn accepts_the_client_code_derived_from_the_same_hash() {
        let hash = hash_username("Mnau");
        let client_code = (hash + CLIENT_KEY) % MODULUS;
        let script = handshake_script("Mnau", client_code);
        let mut reader = FramingReader::new(
            MockTransport::new(&script),
            Timeouts::default(),
            LengthCaps::default(),
        );

        run(&mut reader, &LengthCaps::default()).unwrap();

        let server_code = (hash + SERVER_KEY) % MODULUS;
        let expected = format!("{server_code}\u{7}\u{8}200 OK\u{7}\u{8}");
        assert_eq!(reader.transport_mut().outbound_as_str(), expected);
    }

    #[test]
    fn rejects_the_server_code_sent_back_as_a_confirmation() {
        let hash = hash_username("Mnau");
        let server_code = (hash + SERVER_KEY) % MODULUS;
        let script = handshake_script("Mnau", server_code);
        let mut reader = FramingReader::new(
            MockTransport::new(&script),
            Timeouts::default(),
            LengthCaps::default(),
        );

        let err = run(&mut reader, &LengthCaps::default()).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Fault(core::error::SessionFault::Login(
                core::error::LoginFault::ConfirmationMismatch { .. }
            ))
        ));
    }
}
