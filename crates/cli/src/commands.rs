//! Token generation command.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use corelib::{TokenAssignment, TokenRing};
use tracing::info;

use crate::config::{CliConfig, Options};
use crate::interactive;

/// Computes the tokens described by `options`.
///
/// Node counts missing from `options` are read interactively from `input`,
/// with prompts written to `output`.
pub fn generate<R: BufRead, W: Write>(
    options: &Options,
    input: &mut R,
    output: &mut W,
) -> Result<TokenAssignment> {
    let node_counts = match &options.node_counts {
        Some(counts) => counts.clone(),
        None => interactive::read_node_counts(input, output)?,
    };

    let ring = TokenRing::new(node_counts, options.ring_range.clone())?;
    let tokens = options
        .strategy
        .tokens(&ring)
        .context("failed to generate tokens")?;

    info!(
        strategy = ?options.strategy,
        datacenters = ring.dc_count(),
        nodes = %ring.total_nodes(),
        "tokens generated"
    );

    Ok(tokens)
}

/// Validates `config`, generates the tokens and writes them to `output`.
pub fn run<R: BufRead, W: Write>(config: &CliConfig, input: &mut R, output: &mut W) -> Result<()> {
    let options = config.options()?;
    let tokens = generate(&options, input, output)?;

    let rendered = options
        .output
        .render(&tokens, options.token_width)
        .context("failed to render tokens")?;
    output.write_all(rendered.as_bytes())?;
    output.flush()?;

    Ok(())
}
