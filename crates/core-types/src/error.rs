use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Data integrity violation for account '{account_id}': {detail}")]
    DataIntegrity { account_id: String, detail: String },

    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),
}
