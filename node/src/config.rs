// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::net::SocketAddr;
use std::time::Duration;

use building_store::RequiredFields;
use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8989;

/// Per-request deadline; slower requests get 408.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// How long in-flight requests may drain after the shutdown signal.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Command line of the node binary.
#[derive(Parser, Debug, Default)]
#[command(name = "building-node", about = "In-memory building registry over HTTP")]
pub struct NodeArgs {
    /// JSON parameter document, e.g. {"port":"8989","showlog":true,"required_fields":"name_only"}
    #[arg(long, env = "API_CONFIG")]
    pub config: Option<String>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid config document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid port: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    pub show_log: bool,
    pub required_fields: RequiredFields,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            show_log: false,
            required_fields: RequiredFields::default(),
        }
    }
}

// Port arrives as a string in older documents.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum PortValue {
    Number(u16),
    Text(String),
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ParameterConfig {
    port: Option<PortValue>,
    showlog: bool,
    required_fields: Option<RequiredFields>,
}

impl NodeConfig {
    /// Defaults overridden by whatever the parameter document sets.
    pub fn from_json(doc: &str) -> Result<Self, ConfigError> {
        let params: ParameterConfig = serde_json::from_str(doc)?;
        let mut cfg = Self::default();

        match params.port {
            Some(PortValue::Number(port)) => cfg.bind_addr.set_port(port),
            Some(PortValue::Text(text)) => {
                let port = text
                    .trim()
                    .trim_start_matches(':')
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort(text.clone()))?;
                cfg.bind_addr.set_port(port);
            }
            None => {}
        }
        cfg.show_log = params.showlog;
        if let Some(policy) = params.required_fields {
            cfg.required_fields = policy;
        }
        Ok(cfg)
    }

    pub fn from_args(args: &NodeArgs) -> Result<Self, ConfigError> {
        match args.config.as_deref().map(str::trim) {
            Some(doc) if !doc.is_empty() => Self::from_json(doc),
            _ => Ok(Self::default()),
        }
    }

    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.show_log {
            "building_node=debug,building_store=debug,tower_http=debug"
        } else {
            "building_node=info,building_store=info,tower_http=info"
        }
    }
}
