//! Command-line configuration.

use std::io;

use anyhow::{bail, Result};
use clap::Parser;
use corelib::token::{parse_count, DEFAULT_RING_RANGE};
use num_bigint::BigUint;
use num_traits::Zero;
use strategies::StrategyKind;

use crate::commands;
use crate::format::OutputFormat;

/// Token generator for multi-datacenter rings.
///
/// With `--dc-count 0` (the default) node counts are asked for interactively.
#[derive(Parser, Debug, Clone)]
#[command(name = "tgen", version, about = "Calculate tokens for a multi-datacenter ring")]
pub struct CliConfig {
    /// Use the JSON output format.
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Print the output in indented JSON (implies --json).
    #[arg(short = 'J', long = "pretty-json")]
    pub pretty_json: bool,

    /// Optimize multi-datacenter distribution for NetworkTopologyStrategy [default].
    #[arg(short = 'n', long = "nts")]
    pub nts: bool,

    /// Optimize multi-datacenter distribution for OldNetworkTopologyStrategy.
    #[arg(short = 'o', long = "onts")]
    pub onts: bool,

    /// Size of the ring; tokens fall in [0, RINGRANGE).
    #[arg(
        short = 'r',
        long = "ringrange",
        env = "TGEN_RING_RANGE",
        default_value = DEFAULT_RING_RANGE
    )]
    pub ring_range: String,

    /// Number of datacenters to calculate tokens for.
    #[arg(short = 'd', long = "dc-count", default_value = "0")]
    pub dc_count: String,

    /// Comma-delimited list of datacenter node counts, e.g. '3,2,1'.
    #[arg(short = 'c', long = "node-count", default_value = "1")]
    pub node_count: String,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Validated settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub strategy: StrategyKind,
    pub output: OutputFormat,
    pub ring_range: BigUint,
    /// Column width of the widest possible token, the ring range's digit count.
    pub token_width: usize,
    /// `None` selects interactive input.
    pub node_counts: Option<Vec<BigUint>>,
}

impl CliConfig {
    /// Converts the raw flags into [`Options`].
    ///
    /// `--onts` wins over `--nts`, and `--pretty-json` implies `--json`.
    pub fn options(&self) -> Result<Options> {
        let strategy = if self.onts {
            StrategyKind::Onts
        } else {
            StrategyKind::Nts
        };

        let output = if self.pretty_json {
            OutputFormat::PrettyJson
        } else if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        };

        let ring_range = parse_count(&self.ring_range)?;
        if ring_range.is_zero() {
            bail!("the ring range (-r) must be greater than zero");
        }

        let dc_count = parse_count(&self.dc_count)?;
        let node_counts = if dc_count.is_zero() {
            None
        } else {
            let items: Vec<&str> = self.node_count.split(',').collect();
            if dc_count != BigUint::from(items.len()) {
                bail!("the datacenter count (-d) must be equivalent to count of items in the node count (-c) array");
            }
            let counts = items
                .into_iter()
                .map(parse_count)
                .collect::<corelib::Result<Vec<_>>>()?;
            Some(counts)
        };

        Ok(Options {
            strategy,
            output,
            ring_range,
            token_width: self.ring_range.trim().len(),
            node_counts,
        })
    }

    /// Runs against the process's stdin and stdout.
    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        commands::run(self, &mut stdin.lock(), &mut stdout.lock())
    }
}
