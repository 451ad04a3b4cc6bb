//! Runtime configuration from environment variables
//!
//! - `OVERVIEW_CONTENT_PATH`: corpus file (default `content.json`, relative
//!   paths resolve against the working directory)
//! - `OVERVIEW_MODE`: `stdio` (MCP, default) or `http`
//! - `OVERVIEW_HTTP_ADDR`: listen address for `http` mode (default `127.0.0.1:3030`)
//! - `OVERVIEW_STRICT_FIELDS`: `true`/`1` fails the load on missing entry
//!   fields, `false`/`0` substitutes empty values. Defaults to strict in debug
//!   builds and lenient in release builds.

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::corpus::FieldPolicy;
use crate::error::ConfigError;

pub const CONTENT_PATH_VAR: &str = "OVERVIEW_CONTENT_PATH";
pub const MODE_VAR: &str = "OVERVIEW_MODE";
pub const HTTP_ADDR_VAR: &str = "OVERVIEW_HTTP_ADDR";
pub const STRICT_FIELDS_VAR: &str = "OVERVIEW_STRICT_FIELDS";

const DEFAULT_CONTENT_FILE: &str = "content.json";
const DEFAULT_HTTP_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3030);

/// Which transport the server speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeMode {
    /// MCP JSON-RPC over stdin/stdout
    Stdio,
    /// REST API over HTTP
    Http,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub content_path: PathBuf,
    pub mode: ServeMode,
    pub http_addr: SocketAddr,
    pub field_policy: FieldPolicy,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_lookup(&current_dir, |var| env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(current_dir: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content_path = match lookup(CONTENT_PATH_VAR) {
            Some(path) if Path::new(&path).is_absolute() => PathBuf::from(path),
            Some(path) => current_dir.join(path),
            None => current_dir.join(DEFAULT_CONTENT_FILE),
        };

        let mode = match lookup(MODE_VAR).as_deref().map(str::trim) {
            None | Some("") => ServeMode::Stdio,
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "stdio" | "mcp" => ServeMode::Stdio,
                "http" => ServeMode::Http,
                _ => return Err(invalid(MODE_VAR, value, "expected 'stdio' or 'http'")),
            },
        };

        let http_addr = match lookup(HTTP_ADDR_VAR) {
            Some(addr) => addr
                .trim()
                .parse()
                .map_err(|e: std::net::AddrParseError| invalid(HTTP_ADDR_VAR, &addr, e.to_string()))?,
            None => SocketAddr::from(DEFAULT_HTTP_ADDR),
        };

        let field_policy = match lookup(STRICT_FIELDS_VAR).as_deref().map(str::trim) {
            None | Some("") => default_field_policy(),
            Some("1") | Some("true") => FieldPolicy::Strict,
            Some("0") | Some("false") => FieldPolicy::Lenient,
            Some(value) => return Err(invalid(STRICT_FIELDS_VAR, value, "expected true/false or 1/0")),
        };

        Ok(Self {
            content_path,
            mode,
            http_addr,
            field_policy,
        })
    }
}

/// Fail fast on missing fields in development, degrade in production
fn default_field_policy() -> FieldPolicy {
    if cfg!(debug_assertions) {
        FieldPolicy::Strict
    } else {
        FieldPolicy::Lenient
    }
}

fn invalid(var: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        var,
        value: value.to_string(),
        reason: reason.into(),
    }
}
