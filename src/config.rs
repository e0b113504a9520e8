//! Runtime configuration.
//!
//! Every option can be given on the command line or through its environment
//! variable; the flag wins when both are set.

use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Clone, Parser)]
#[clap(name = "stock-adjust", about = "Batch stock adjustment service", version)]
pub struct Config {
    /// Address the HTTP server listens on.
    #[clap(long, env = "INVENTORY_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Mailbox capacity of the stock table actor.
    #[clap(long, env = "INVENTORY_CHANNEL_CAPACITY", default_value_t = 32, value_parser = parse_capacity)]
    pub channel_capacity: usize,

    /// Start with an empty table instead of the bootstrap rows.
    #[clap(long, env = "INVENTORY_NO_SEED", default_value_t = false)]
    pub no_seed: bool,

    /// Mount `GET /api/all_items`.
    #[clap(long, env = "INVENTORY_EXPOSE_ALL_ITEMS", default_value_t = false)]
    pub expose_all_items: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            channel_capacity: 32,
            no_seed: false,
            expose_all_items: false,
        }
    }
}

fn parse_capacity(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("channel capacity must be greater than zero".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_parsed_defaults() {
        let parsed = Config::try_parse_from(["stock-adjust"]).unwrap();
        let default = Config::default();

        assert_eq!(parsed.addr, default.addr);
        assert_eq!(parsed.channel_capacity, default.channel_capacity);
        assert_eq!(parsed.no_seed, default.no_seed);
        assert_eq!(parsed.expose_all_items, default.expose_all_items);
    }

    #[test]
    fn test_flags_override_defaults() {
        let parsed = Config::try_parse_from([
            "stock-adjust",
            "--addr",
            "0.0.0.0:8080",
            "--channel-capacity",
            "4",
            "--no-seed",
            "--expose-all-items",
        ])
        .unwrap();

        assert_eq!(parsed.addr.port(), 8080);
        assert_eq!(parsed.channel_capacity, 4);
        assert!(parsed.no_seed);
        assert!(parsed.expose_all_items);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(Config::try_parse_from(["stock-adjust", "--channel-capacity", "0"]).is_err());
        assert!(Config::try_parse_from(["stock-adjust", "--channel-capacity", "many"]).is_err());
    }
}
