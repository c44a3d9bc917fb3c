use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to load environment variables for database connection: {0}")]
    ConnectionConfigError(String),

    #[error("Database query failed: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("{entity} with id {id} was not found in the database.")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Cannot sort {entity} by '{property}'")]
    InvalidSort { entity: &'static str, property: String },
}
