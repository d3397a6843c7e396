//! Huffman text codec with a plain-text frequency header.
//!
//! An encoded file holds two lines. The first lists `"<symbol> <count>"` pairs in
//! ascending symbol order; the second is the code of every input byte written as
//! '0' and '1' characters. The decoder never sees the tree, it rebuilds an identical
//! one from the counts.
//!
//! Basic usage to encode a file is as follows:
//!
//! `$> hufftext -z notes.txt`
//!
//! This writes notes.txt.huf. `hufftext -d notes.txt.huf` restores notes.txt.
//!
//! From code:
//!
//! ```
//! use hufftext::{decode_bytes, encode_bytes};
//!
//! let encoded = encode_bytes(b"aaabbbbcc").unwrap();
//! assert_eq!(encoded, b"97 3 98 4 99 2\n11111100001010");
//! assert_eq!(decode_bytes(&encoded).unwrap(), b"aaabbbbcc");
//! ```
//!
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::{encode, encode_bytes, encode_file};
pub use compression::decompress::{decode, decode_bytes, decode_file};
pub use error::{DecodeError, EncodeError};
pub use huffman_coding::code_table::CodeTable;
pub use huffman_coding::huffman::{combine, comes_before, HuffmanTree, Node};
pub use tools::freq_count::FrequencyTable;
