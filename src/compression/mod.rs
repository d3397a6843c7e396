//! The compression module drives the encode and decode pipelines.
//!
//! Encoding:
//! - Frequency count: count every byte of the input.
//! - Tree build: merge the two least nodes until one root remains.
//! - Code table: record the branch path to every leaf.
//! - Output: the header line, then a line holding the codes of every input byte.
//!
//! Decoding reverses it: parse the header, rebuild the same tree, and walk the body
//! through it. Both directions read their whole input before writing anything.
//!

pub mod compress;
pub mod decompress;
