use std::io;

/// Errors the demo can exit with.
#[derive(Debug, thiserror::Error)]
pub enum SphereError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("could not determine terminal size")]
    TerminalSize,
}
