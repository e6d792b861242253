//! Classifier configuration
//!
//! Defaults, a TOML form, and environment overrides:
//!
//! ```toml
//! max_proxy_depth = 8
//! debug = true
//! ```
//!
//! - `VECTOR_KIND_MAX_PROXY_DEPTH` overrides `max_proxy_depth`
//! - `VECTOR_KIND_DEBUG` turns `debug` on

use std::env;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::debug::DEBUG_ENV_VAR;
use crate::error::{KindError, KindResult};

/// Default number of proxy hops before a value is declared cyclic.
pub const DEFAULT_MAX_PROXY_DEPTH: usize = 64;

/// Largest accepted `max_proxy_depth`.
pub const MAX_PROXY_DEPTH_CEILING: usize = 4096;

/// Environment variable overriding `max_proxy_depth`
pub const MAX_PROXY_DEPTH_ENV_VAR: &str = "VECTOR_KIND_MAX_PROXY_DEPTH";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifyConfig {
    /// Proxy hops allowed while deciding whether an object is a vector
    pub max_proxy_depth: usize,
    /// Trace proxy hops on stderr for this classifier
    pub debug: bool,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        ClassifyConfig {
            max_proxy_depth: DEFAULT_MAX_PROXY_DEPTH,
            debug: false,
        }
    }
}

impl ClassifyConfig {
    /// Defaults with environment overrides applied. Unparseable values are
    /// ignored.
    pub fn from_env() -> Self {
        let mut config = ClassifyConfig::default();
        if let Some(depth) = max_proxy_depth_from_env() {
            config.max_proxy_depth = depth;
        }
        if env::var(DEBUG_ENV_VAR).is_ok() {
            config.debug = true;
        }
        config
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> KindResult<Self> {
        let config: ClassifyConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> KindResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| KindError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn with_max_proxy_depth(mut self, depth: usize) -> Self {
        self.max_proxy_depth = depth;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn validate(&self) -> KindResult<()> {
        if self.max_proxy_depth > MAX_PROXY_DEPTH_CEILING {
            return Err(KindError::invalid_config(format!(
                "max_proxy_depth {} exceeds the ceiling of {}",
                self.max_proxy_depth, MAX_PROXY_DEPTH_CEILING
            )));
        }
        Ok(())
    }
}

/// Process-wide configuration, read from the environment on first use.
static PROCESS_CONFIG: Lazy<ClassifyConfig> = Lazy::new(ClassifyConfig::from_env);

/// Configuration used by the free-standing predicate functions.
pub fn process_config() -> &'static ClassifyConfig {
    &PROCESS_CONFIG
}

fn max_proxy_depth_from_env() -> Option<usize> {
    let raw = env::var(MAX_PROXY_DEPTH_ENV_VAR).ok()?;
    parse_depth(&raw)
}

fn parse_depth(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|depth| *depth <= MAX_PROXY_DEPTH_CEILING)
}
