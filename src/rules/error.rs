#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("no cards to play")]
    Empty,
    #[error("cards do not form a recognized combination")]
    Unrecognized,
}
