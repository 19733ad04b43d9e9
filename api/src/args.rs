use std::path::PathBuf;

use clap::Parser;
use skinsafe_core::domain::{
    common::{ConflictConfig, SkinsafeConfig},
    conflict::value_objects::DEFAULT_MIN_FRAGMENT_LEN,
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "skinsafe-api",
    version,
    about = "SkinSafe routine analysis API"
)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub conflict: ConflictArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`
    #[arg(
        long = "server-root-path",
        env = "SERVER_ROOT_PATH",
        default_value = ""
    )]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ConflictArgs {
    /// JSON rule table replacing the built-in one
    #[arg(long = "conflict-rules-path", env = "CONFLICT_RULES_PATH")]
    pub rules_path: Option<PathBuf>,

    #[arg(
        long = "conflict-min-fragment-len",
        env = "CONFLICT_MIN_FRAGMENT_LEN",
        default_value_t = DEFAULT_MIN_FRAGMENT_LEN
    )]
    pub min_fragment_len: usize,
}

impl From<Args> for SkinsafeConfig {
    fn from(args: Args) -> Self {
        SkinsafeConfig {
            conflict: ConflictConfig {
                rules_path: args.conflict.rules_path,
                min_fragment_len: args.conflict.min_fragment_len,
            },
        }
    }
}
