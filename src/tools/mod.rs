//! The tools module provides the helper pieces around the Huffman core.
//!
//! The tools are:
//! - cli: Command line interface and the resolved run options.
//! - freq_count: Frequency count of the 256 byte symbols.
//! - header: The text header carrying the frequency table.
//!
pub mod cli;
pub mod freq_count;
pub mod header;
