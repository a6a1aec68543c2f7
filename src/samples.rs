// src/samples.rs

//! Parsing of whitespace-separated sample listings, the format of a night's
//! detailed sleep graph (one stage code every 30 seconds).

use crate::error::SampleParseError;
use crate::state::StateCode;

/// Parse a listing such as `"0 0 1 2 2 3 4"` into state codes.
///
/// Any whitespace separates samples and blank input yields an empty sequence.
pub fn parse_stage_graph(text: &str) -> Result<Vec<StateCode>, SampleParseError> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<i32>()
                .map(StateCode)
                .map_err(|_| SampleParseError {
                    token: token.to_string(),
                    position,
                })
        })
        .collect()
}
