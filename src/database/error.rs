/// A database error.
#[derive(Debug, Error)]
#[error("database error: {0}")]
pub struct DatabaseError(#[from] sqlx::Error);
