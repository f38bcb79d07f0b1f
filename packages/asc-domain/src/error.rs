pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to parse embedded {dataset} dataset.")]
	Dataset { dataset: &'static str, source: serde_json::Error },
	#[error("Invalid year-month value {value:?}.")]
	InvalidYearMonth { value: String },
	#[error("{message}")]
	Validation { message: String },
}
