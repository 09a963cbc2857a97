// 🔧 Server Configuration - CLI flags with environment fallbacks

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable output for development
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "receipt-server", about = "Receipt processor HTTP server", version)]
pub struct ServerConfig {
    #[arg(
        long,
        env = "RECEIPT_PROCESSOR_HOST",
        default_value = DEFAULT_HOST,
        help = "Interface to bind"
    )]
    pub host: String,

    #[arg(
        long,
        env = "RECEIPT_PROCESSOR_PORT",
        default_value_t = DEFAULT_PORT,
        help = "Port to listen on"
    )]
    pub port: u16,

    #[arg(
        long,
        env = "RECEIPT_PROCESSOR_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty,
        help = "Log output format"
    )]
    pub log_format: LogFormat,

    #[arg(long, help = "Disable the permissive CORS layer")]
    pub no_cors: bool,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }

    pub fn cors_enabled(&self) -> bool {
        !self.no_cors
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
            no_cors: false,
        }
    }
}
