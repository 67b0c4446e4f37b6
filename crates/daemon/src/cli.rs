//! Command-line surface for `roverd`.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use core::config::{LengthCaps, RuntimeConfig, Timeouts};

/// Drives a fleet of rovers across the sweep protocol and recovers the
/// hidden message each one is carrying.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address the accept loop binds its listener to.
    #[arg(long, default_value = "0.0.0.0:3999")]
    pub bind: SocketAddr,

    /// Read timeout, in milliseconds, applied outside a recharge pause.
    #[arg(long, default_value_t = 1000)]
    pub normal_timeout_ms: u64,

    /// Read timeout, in milliseconds, applied between `RECHARGING` and
    /// `FULL POWER`.
    #[arg(long, default_value_t = 5000)]
    pub recharge_timeout_ms: u64,

    /// Increases log verbosity; repeatable (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the immutable [`RuntimeConfig`] every session is constructed
    /// from out of the parsed flags.
    #[must_use]
    pub fn into_runtime_config(self) -> RuntimeConfig {
        RuntimeConfig {
            bind: self.bind,
            timeouts: Timeouts {
                normal: Duration::from_millis(self.normal_timeout_ms),
                recharging: Duration::from_millis(self.recharge_timeout_ms),
            },
            length_caps: LengthCaps::default(),
            verbosity: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_recommended_timeouts() {
        let args = Args::parse_from(["roverd"]);
        let config = args.into_runtime_config();
        assert_eq!(config.timeouts.normal, Duration::from_millis(1000));
        assert_eq!(config.timeouts.recharging, Duration::from_millis(5000));
        assert_eq!(config.bind, "0.0.0.0:3999".parse::<SocketAddr>().unwrap());
        assert_eq!(config.verbosity, 0);
    }

    #[test]
    fn repeated_verbose_flag_increments_the_count() {
        let args = Args::parse_from(["roverd", "-vvv"]);
        assert_eq!(args.verbose, 3);
    }

    #[test]
    fn bind_flag_overrides_the_default_address() {
        let args = Args::parse_from(["roverd", "--bind", "127.0.0.1:4000"]);
        assert_eq!(args.bind, "127.0.0.1:4000".parse::<SocketAddr>().unwrap());
    }
}
