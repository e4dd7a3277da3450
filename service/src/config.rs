use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Country dataset used when no source is configured.
pub const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/mledoze/countries/master/countries.json";

/// Service settings. Every flag can also be given through the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "country-routing", version, about = "Land routes between countries over HTTP")]
pub struct Config {
    /// Border data: an http(s) URL or a local path to a countries JSON document
    #[arg(long, env = "ROUTING_SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Address the HTTP server binds to
    #[arg(long, env = "ROUTING_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "country_routing_core=debug")
    #[arg(long, env = "ROUTING_LOG", default_value = "info")]
    pub log_level: String,
}

/// Where the border data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Source::Url(trimmed.to_string())
        } else {
            Source::File(PathBuf::from(trimmed))
        }
    }
}

impl Config {
    pub fn source(&self) -> Source {
        Source::parse(&self.source)
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Url(url) => f.write_str(url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}
