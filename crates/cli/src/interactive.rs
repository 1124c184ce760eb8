//! Interactive collection of node counts.

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Result};
use corelib::token::parse_count;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Asks for the number of datacenters, then the node count of each.
///
/// Answers that are not non-negative integers are reported and asked again.
/// Running out of input is an error.
pub fn read_node_counts<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Vec<BigUint>> {
    writeln!(output, "Token Generator Interactive Mode")?;
    writeln!(output, "--------------------------------")?;
    writeln!(output)?;

    let dcs = ask(
        input,
        output,
        " How many datacenters will participate in this cluster? ",
    )?;
    let dcs = dcs
        .to_usize()
        .ok_or_else(|| anyhow!("too many datacenters: {dcs}"))?;

    let mut counts = Vec::new();
    for dc in 1..=dcs {
        let question = format!(" How many nodes are in datacenter #{dc}? ");
        counts.push(ask(input, output, &question)?);
    }

    writeln!(output)?;

    Ok(counts)
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<BigUint> {
    loop {
        write!(output, "{question}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("unexpected end of input");
        }

        let answer = line.trim();
        match parse_count(answer) {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Oops, '{answer}' can't be converted to a big integer\n")?,
        }
    }
}
