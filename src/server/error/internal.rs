use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A status label read from the database is not part of the order lifecycle.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {kind} status '{value}' stored in database")]
    UnknownStatus {
        /// Which status column held the label (`order` or `payment`)
        kind: &'static str,
        /// The unrecognised label
        value: String,
    },

    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}
