use std::io::Write;
use std::os::unix::net::UnixStream;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

pub const SOCKET_PATH: &str = "/tmp/passindi.sock";

/// A line-oriented command understood by the indicator host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Command {
    Advance,
    Retreat,
    Reset,
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("Failed to connect to passindi at {path}: {source}. Is passindi-gtk running?")]
    Connect {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to send command: {0}")]
    Write(#[from] std::io::Error),
}

pub fn send_command(command: Command) -> Result<(), SendError> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|source| SendError::Connect {
        path: SOCKET_PATH.to_string(),
        source,
    })?;

    writeln!(stream, "{}", command)?;
    Ok(())
}
