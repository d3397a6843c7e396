//! The huffman module builds the prefix-code tree and the code table derived from it.
//!
//! The tree is never stored in the encoded file. Only the frequency counts are, and the
//! decoder rebuilds the tree from them. That works because construction is fully
//! deterministic: nodes are ordered by weight, ties are broken by symbol (an internal node
//! takes the smallest symbol below it), and the lesser of two merged nodes always becomes
//! the left child.
//!
//! Codes are strings of '0' and '1' characters, one per branch from the root to a leaf.
//!

pub mod code_table;
pub mod huffman;
