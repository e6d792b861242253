//! Vector predicate
//!
//! Decides whether a value behaves as a vector. Primitive vectors, lists and
//! data frames always do; null and scalars never do. An `s3` object is
//! unwrapped through the proxy protocol and its proxy is classified with
//! dispatch turned off, so a classed proxy is judged by its representation.
//!
//! Proxy hops are counted against `ClassifyConfig::max_proxy_depth`; going
//! past it is a `ProxyCycle` error rather than a stack overflow.
//!
//! ## Debug Logging
//!
//! Set `VECTOR_KIND_DEBUG=1` (or `ClassifyConfig::debug`) to trace proxy hops.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use vector_kind_value::Value;

use crate::config::{process_config, ClassifyConfig};
use crate::debug::{debug_enabled, debug_log};
use crate::error::{KindError, KindResult};
use crate::kind::Kind;
use crate::proxy::{Proxy, ProxyRegistry};
use crate::resolve::{resolve_kind, DispatchMode};

/// Check whether `x` is a vector, with dispatch enabled.
pub fn is_vector<P: Proxy + ?Sized>(x: &Value, proxy: &P) -> KindResult<bool> {
    is_vector_with(x, DispatchMode::Dispatch, proxy)
}

/// Check whether `x` is a vector, starting from a caller-supplied dispatch
/// mode.
pub fn is_vector_with<P: Proxy + ?Sized>(
    x: &Value,
    dispatch: DispatchMode,
    proxy: &P,
) -> KindResult<bool> {
    is_vector_rec(x, dispatch, proxy, process_config(), 0)
}

fn is_vector_rec<P: Proxy + ?Sized>(
    x: &Value,
    dispatch: DispatchMode,
    proxy: &P,
    config: &ClassifyConfig,
    depth: usize,
) -> KindResult<bool> {
    match resolve_kind(x, dispatch) {
        Kind::Logical
        | Kind::Integer
        | Kind::Double
        | Kind::Complex
        | Kind::Character
        | Kind::Raw
        | Kind::List
        | Kind::DataFrame => Ok(true),

        Kind::S3 => {
            let tracing = config.debug || debug_enabled();
            if depth >= config.max_proxy_depth {
                let class = class_label(x);
                if tracing {
                    debug_log(format_args!(
                        "proxy cycle: `{}` unresolved after {} hops",
                        class, depth
                    ));
                }
                return Err(KindError::proxy_cycle(class, depth, config.max_proxy_depth));
            }

            let unwrapped = proxy.proxy(x)?;
            if tracing {
                debug_log(format_args!(
                    "proxy hop {}: {} -> {}",
                    depth + 1,
                    x,
                    unwrapped
                ));
            }
            is_vector_rec(&unwrapped, DispatchMode::Bare, proxy, config, depth + 1)
        }

        Kind::Null | Kind::Scalar => Ok(false),
    }
}

fn class_label(x: &Value) -> String {
    x.class()
        .map(|c| c.to_string())
        .unwrap_or_else(|| x.type_name().to_string())
}

/// A proxy protocol bundled with its configuration
#[derive(Debug, Clone, Default)]
pub struct Classifier<P = ProxyRegistry> {
    proxy: P,
    config: ClassifyConfig,
}

impl<P: Proxy> Classifier<P> {
    /// Classifier using `proxy` and the default configuration
    pub fn new(proxy: P) -> Self {
        Classifier {
            proxy,
            config: ClassifyConfig::default(),
        }
    }

    /// Replace the configuration. Rejected like a config file would be
    /// when `max_proxy_depth` is above `MAX_PROXY_DEPTH_CEILING`.
    pub fn with_config(mut self, config: ClassifyConfig) -> KindResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &ClassifyConfig {
        &self.config
    }

    pub fn proxy(&self) -> &P {
        &self.proxy
    }

    pub fn proxy_mut(&mut self) -> &mut P {
        &mut self.proxy
    }

    /// Kind of `x` under `dispatch`
    #[inline]
    pub fn resolve(&self, x: &Value, dispatch: DispatchMode) -> Kind {
        resolve_kind(x, dispatch)
    }

    /// Check whether `x` is a vector, with dispatch enabled.
    pub fn is_vector(&self, x: &Value) -> KindResult<bool> {
        self.is_vector_with(x, DispatchMode::Dispatch)
    }

    /// Check whether `x` is a vector, starting from `dispatch`.
    pub fn is_vector_with(&self, x: &Value, dispatch: DispatchMode) -> KindResult<bool> {
        is_vector_rec(x, dispatch, &self.proxy, &self.config, 0)
    }
}
