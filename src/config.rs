use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub seed_samples: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed_samples: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads `PORT`, `BIND_ADDR` and `JOURNAL_SEED_SAMPLES` through `lookup`.
    /// Unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let seed_samples = match lookup("JOURNAL_SEED_SAMPLES") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!("ignoring invalid JOURNAL_SEED_SAMPLES value {raw:?}");
                defaults.seed_samples
            }),
            None => defaults.seed_samples,
        };

        Self {
            bind_addr: parse_or("BIND_ADDR", lookup("BIND_ADDR"), defaults.bind_addr),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            seed_samples,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, value: Option<String>, default: T) -> T {
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring invalid {key} value {raw:?}");
            default
        }),
        None => default,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
