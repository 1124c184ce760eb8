//! Rendering of generated tokens.
//!
//! Two formats, both keyed by datacenter position:
//!
//! ```text
//! DC #1:
//!   Node #1:                                        0
//!   Node #2:   56713727820156410577229101238628035242
//! ```
//!
//! and JSON, an array of per-datacenter arrays with tokens as exact numbers.

use std::str::FromStr;

use corelib::Token;
use serde::ser::{Error as _, Serialize, Serializer};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    PrettyJson,
}

impl OutputFormat {
    /// Renders `tokens`, newline terminated.
    ///
    /// `width` is the digit count of the ring range, used to align the table.
    pub fn render(self, tokens: &[Vec<Token>], width: usize) -> serde_json::Result<String> {
        match self {
            OutputFormat::Table => Ok(format_tokens(tokens, width)),
            OutputFormat::Json => format_json(tokens, false).map(|json| json + "\n"),
            OutputFormat::PrettyJson => format_json(tokens, true).map(|json| json + "\n"),
        }
    }
}

/// Renders the per-datacenter table.
///
/// Node numbers are padded to the digit count of the datacenter's node count;
/// tokens are right-aligned in a column one wider than `width`.
pub fn format_tokens(tokens: &[Vec<Token>], width: usize) -> String {
    let mut buf = String::new();

    for (dc, dc_tokens) in tokens.iter().enumerate() {
        buf.push_str(&format!("DC #{}:\n", dc + 1));

        let node_width = dc_tokens.len().to_string().len();

        for (node, token) in dc_tokens.iter().enumerate() {
            buf.push_str(&format!(
                "  Node #{:>node_width$}: {:>token_width$}\n",
                node + 1,
                format!(" {token}"),
                token_width = width + 1,
            ));
        }
    }

    buf
}

/// Renders the tokens as a JSON array of arrays.
pub fn format_json(tokens: &[Vec<Token>], pretty: bool) -> serde_json::Result<String> {
    let json = JsonTokens(tokens);
    if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    }
}

struct JsonTokens<'a>(&'a [Vec<Token>]);

struct JsonDatacenter<'a>(&'a [Token]);

/// A token as an exact JSON number, however many digits it has.
struct JsonToken<'a>(&'a Token);

impl Serialize for JsonTokens<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|dc| JsonDatacenter(dc.as_slice())))
    }
}

impl Serialize for JsonDatacenter<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(JsonToken))
    }
}

impl Serialize for JsonToken<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_json::Number::from_str(&self.0.to_string())
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}
