use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("The date axis is empty; a dataset must have at least one trading date.")]
    EmptyDateAxis,
}
