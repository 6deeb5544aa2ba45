//! User settings: config file, then `MDTASKS_*` environment overrides.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::Deserialize;
use smart_default::SmartDefault;

use crate::InclusionFilter;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, SmartDefault)]
#[serde(default)]
pub struct Settings {
	/// Only checkbox lines carrying this tag (or a nested tag under it) are tasks.
	pub global_filter: Option<String>,
	/// Strip the global filter from task descriptions.
	#[default(false)]
	pub remove_global_filter: bool,
}

#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum SettingsError {
	#[error("config file {} does not exist", .0.display())]
	#[diagnostic(code(mdtasks::config::missing))]
	Missing(PathBuf),

	#[error("failed to load settings")]
	#[diagnostic(code(mdtasks::config::invalid), help("expected TOML with optional `global_filter` (string) and `remove_global_filter` (bool)"))]
	Load(#[from] config::ConfigError),
}

impl Settings {
	/// Load from `path` if given, else from `$XDG_CONFIG_HOME/mdtasks/config.toml` when it exists.
	/// Environment variables (`MDTASKS_GLOBAL_FILTER`, `MDTASKS_REMOVE_GLOBAL_FILTER`) win over the file.
	pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
		let file = match path {
			Some(path) if !path.exists() => return Err(SettingsError::Missing(path.to_path_buf())),
			Some(path) => Some(path.to_path_buf()),
			None => xdg::BaseDirectories::with_prefix("mdtasks").find_config_file("config.toml"),
		};
		Self::load_from(file.as_deref(), config::Environment::with_prefix("MDTASKS").try_parsing(true))
	}

	pub(crate) fn load_from(file: Option<&Path>, env: config::Environment) -> Result<Self, SettingsError> {
		let mut builder = config::Config::builder();
		if let Some(file) = file {
			tracing::debug!("[config] reading {}", file.display());
			builder = builder.add_source(config::File::from(file).format(config::FileFormat::Toml));
		}
		let settings: Self = builder.add_source(env).build()?.try_deserialize()?;
		tracing::debug!("[config] {settings:?}");
		Ok(settings)
	}

	pub fn filter(&self) -> InclusionFilter {
		InclusionFilter::new(self.global_filter.as_deref(), self.remove_global_filter)
	}
}
