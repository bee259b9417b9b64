use {
    crate::{display::*, prelude::*},
    thiserror::Error,
};

/// Custom error definitions for the NFT Checker CLI. Takes care of displaying
/// a pretty summary in the console.
///
/// Classified OpenSea failures are not part of this enum: commands print them
/// with remediation tips and carry on.
#[derive(Debug, Error)]
pub(crate) enum NftCheckerCliError {
    #[error("{error}{separator}\n{0}", error = "Syntax Error".red().bold(), separator = separator())]
    SyntaxError(clap::error::Error),
    #[error("{error}{separator}\n{0}", error = "IO Error".red().bold(), separator = separator())]
    IoError(#[from] std::io::Error),
    #[error("{error}{separator}\n{0}", error = "Error".red().bold(), separator = separator())]
    Any(#[from] anyhow::Error),
}
