use clap::{ArgAction, Parser};
use serde::{Deserialize, Serialize};

use crate::common;

/// A backend that extracts playable media metadata for a video URL
/// and returns it as a normalized list of quality options.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[clap(disable_help_flag = true)]
pub struct CliArgs {
    /// Print help
    #[clap(action = ArgAction::Help, long)]
    help: Option<bool>,

    #[command(flatten)]
    pub dependency_path: common::ProgramPathConfig,

    #[command(flatten)]
    pub run: common::RunConfig,

    #[command(flatten)]
    pub server: common::ServerConfig,
}
