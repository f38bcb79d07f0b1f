pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{message}")]
	InvalidProfile { message: String },
	#[error("{message}")]
	Store { message: String },
}
