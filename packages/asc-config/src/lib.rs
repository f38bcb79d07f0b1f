//! Configuration for the directory application, loaded from TOML.

mod error;
mod types;

pub use error::{Error, Result};
pub use types::{App, Config, Directory};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if !matches!(cfg.app.log_level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
		return Err(Error::Validation {
			message: "app.log_level must be one of trace, debug, info, warn, or error.".to_string(),
		});
	}
	if !matches!(cfg.app.default_view.as_str(), "grid" | "list") {
		return Err(Error::Validation {
			message: "app.default_view must be one of grid or list.".to_string(),
		});
	}
	if cfg.directory.researchers_page_size == 0 {
		return Err(Error::Validation {
			message: "directory.researchers_page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.directory.papers_page_size == 0 {
		return Err(Error::Validation {
			message: "directory.papers_page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.directory.projects_page_size == 0 {
		return Err(Error::Validation {
			message: "directory.projects_page_size must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.app.log_level = cfg.app.log_level.trim().to_lowercase();
	cfg.app.default_view = cfg.app.default_view.trim().to_lowercase();

	if cfg.app.log_level.is_empty() {
		cfg.app.log_level = App::default().log_level;
	}
	if cfg.app.default_view.is_empty() {
		cfg.app.default_view = App::default().default_view;
	}
}
