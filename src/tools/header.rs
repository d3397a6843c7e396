//! Text header for the encoded file: the frequency table written as
//! `"<symbol> <count>"` pairs, ascending by symbol and separated by single spaces.
//!
//! For "aaabbbbcc" the header is `97 3 98 4 99 2`. An empty table writes an
//! empty header.

use log::trace;

use crate::error::DecodeError;
use crate::tools::freq_count::FrequencyTable;

/// Serialize every non-zero count, ascending by symbol, with no trailing space.
pub fn serialize(freqs: &FrequencyTable) -> String {
    freqs
        .present()
        .map(|(sym, count)| format!("{} {}", sym, count))
        .collect::<Vec<String>>()
        .join(" ")
}

/// Parse a header back into a frequency table. Pairs may come in any order.
/// An odd token count, a token that is not an integer, a symbol above 255, a
/// symbol listed twice or counts whose sum does not fit a u64 is rejected.
pub fn parse(header: &str) -> Result<FrequencyTable, DecodeError> {
    let tokens = header.split_whitespace().collect::<Vec<&str>>();
    if tokens.len() % 2 != 0 {
        return Err(DecodeError::MalformedHeader(format!(
            "odd number of tokens ({})",
            tokens.len()
        )));
    }

    let mut freqs = FrequencyTable::new();
    let mut seen = [false; 256];
    // Every weight sum in the tree is bounded by this total.
    let mut total: u64 = 0;
    for pair in tokens.chunks_exact(2) {
        let symbol = pair[0].parse::<u8>().map_err(|_| {
            DecodeError::MalformedHeader(format!("{:?} is not a symbol value (0-255)", pair[0]))
        })?;
        let count = pair[1].parse::<u64>().map_err(|_| {
            DecodeError::MalformedHeader(format!(
                "{:?} is not a count for symbol {}",
                pair[1], symbol
            ))
        })?;
        if seen[symbol as usize] {
            return Err(DecodeError::MalformedHeader(format!(
                "symbol {} listed twice",
                symbol
            )));
        }
        seen[symbol as usize] = true;
        total = total.checked_add(count).ok_or_else(|| {
            DecodeError::MalformedHeader(format!("counts overflow at symbol {}", symbol))
        })?;
        trace!("Header entry {} -> {}", symbol, count);
        freqs.set(symbol, count);
    }
    Ok(freqs)
}
