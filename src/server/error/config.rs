use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but its value cannot be used.
    ///
    /// `PORT` must be a valid port number and `HOST` an IP address.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// Value that failed to parse
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}
