use thiserror::Error;

/// Library error type for marquee operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A carousel was requested over an empty slide deck.
    #[error("cannot build a carousel track from an empty slide deck")]
    EmptyTrack,

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),
}
