use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum, ValueHint};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Args, Validate)]
#[clap(next_help_heading = Some("Program paths"))]
pub struct ProgramPathConfig {
    /// Path to the yt-dlp executable.
    ///
    /// If not provided, yt-dlp will be searched for in $PATH
    #[arg(long, default_value = None, env = "VIDEO_INFO_HUB_YT_DLP", value_hint = ValueHint::FilePath, value_parser = validate_valid_path())]
    #[validate(custom(function = "valid_path"), required)]
    yt_dlp_path: Option<PathBuf>,
}
impl ProgramPathConfig {
    #[must_use]
    pub fn yt_dlp_path(&self) -> &Path {
        self.yt_dlp_path.as_ref().expect(
            "`yt-dlp` executable not found. Please make sure it is installed and added to the \
             PATH environment variable.",
        )
    }

    #[must_use]
    pub fn resolve_paths(mut self) -> Self {
        self.with_resolved_paths();
        self
    }

    pub fn with_resolved_paths(&mut self) -> &Self {
        self.yt_dlp_path = self
            .yt_dlp_path
            .clone()
            .or_else(|| which::which("yt-dlp").ok());

        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Args, Validate)]
#[clap(next_help_heading = "Server options")]
pub struct ServerConfig {
    /// The port on which the server will listen.
    #[arg(long, default_value = "5000", env = "PORT", value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,

    /// The host on which the server will listen.
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    pub host: String,
}
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ValueEnum)]
pub enum DumpConfigType {
    Json,
    Toml,
}
#[derive(Debug, Clone, Default, Serialize, Deserialize, Args, Validate)]
#[allow(clippy::option_option)]
#[clap(next_help_heading = Some("Run options"))]
pub struct RunConfig {
    /// Dump the config to stdout
    #[arg(long, value_enum, default_value = None)]
    pub dump_config: Option<Option<DumpConfigType>>,
}

#[must_use]
pub fn validate_valid_path() -> impl clap::builder::TypedValueParser {
    move |s: &str| {
        let path = Path::new(s);
        if !path.exists() {
            return Err("File does not exist");
        }

        Ok(path.to_path_buf())
    }
}

pub fn valid_path(path: &Path) -> Result<(), ValidationError> {
    if !path.exists() {
        return Err(ValidationError::new("File does not exist"));
    }

    if !path.is_file() {
        return Err(ValidationError::new("Path is not a valid file"));
    }

    Ok(())
}
