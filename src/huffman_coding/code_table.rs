use log::trace;

use super::huffman::{HuffmanTree, Node};
use crate::tools::freq_count::SYMBOLS;

/// Code string for each symbol, written over the characters '0' and '1'.
/// Only symbols that have a leaf in the tree get a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<String>>,
}

impl CodeTable {
    /// A table with no codes, the result for an empty input.
    pub fn empty() -> Self {
        Self {
            codes: vec![None; SYMBOLS],
        }
    }

    /// Walk the tree depth first and record the root-to-leaf path of every leaf,
    /// '0' for each left branch and '1' for each right branch.
    ///
    /// A tree that is a single leaf gives that symbol the empty code.
    pub fn from_tree(tree: Option<&HuffmanTree>) -> Self {
        let mut table = Self::empty();
        let Some(tree) = tree else {
            return table;
        };

        // Explicit stack, skewed trees can be as deep as the alphabet is wide.
        let mut stack: Vec<(&Node, String)> = vec![(tree.root(), String::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    trace!("Code for {}: {:?}", symbol, path);
                    table.codes[*symbol as usize] = Some(path);
                }
                Node::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push('1');
                    let mut left_path = path;
                    left_path.push('0');
                    stack.push((&**right, right_path));
                    stack.push((&**left, left_path));
                }
            }
        }
        table
    }

    pub fn get(&self, symbol: u8) -> Option<&str> {
        self.codes[symbol as usize].as_deref()
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }

    /// (symbol, code) pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(sym, code)| code.as_deref().map(|c| (sym as u8, c)))
    }

    /// Concatenate the codes of `data` in order. Fails with the first byte of
    /// `data` that has no code in this table.
    pub fn encode(&self, data: &[u8]) -> Result<String, u8> {
        let mut body = String::new();
        for &byte in data {
            body.push_str(self.get(byte).ok_or(byte)?);
        }
        Ok(body)
    }
}

#[cfg(test)]
mod test {
    use super::CodeTable;
    use crate::huffman_coding::huffman::HuffmanTree;
    use crate::tools::freq_count::FrequencyTable;

    fn codes_for(data: &[u8]) -> CodeTable {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(data));
        CodeTable::from_tree(tree.as_ref())
    }

    #[test]
    fn empty_tree_test() {
        let table = CodeTable::from_tree(None);
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.get(b'a'), None);
    }

    #[test]
    fn single_symbol_test() {
        let table = codes_for(b"zzzzz");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(b'z'), Some(""));
        assert_eq!(table.encode(b"zzz"), Ok(String::new()));
    }

    #[test]
    fn aaabbbbcc_test() {
        let table = codes_for(b"aaabbbbcc");
        assert_eq!(table.get(b'b'), Some("0"));
        assert_eq!(table.get(b'c'), Some("10"));
        assert_eq!(table.get(b'a'), Some("11"));
        assert_eq!(
            table.encode(b"aaabbbbcc").as_deref(),
            Ok("11111100001010")
        );
    }

    #[test]
    fn known_codes_test() {
        // a:2 b:4 c:8 d:16 f:2
        let data = [
            vec![b'a'; 2],
            vec![b'b'; 4],
            vec![b'c'; 8],
            vec![b'd'; 16],
            vec![b'f'; 2],
        ]
        .concat();
        let table = codes_for(&data);
        assert_eq!(table.get(b'd'), Some("1"));
        assert_eq!(table.get(b'a'), Some("0000"));
        assert_eq!(table.get(b'f'), Some("0001"));
        assert_eq!(table.get(b'b'), Some("001"));
        assert_eq!(table.get(b'c'), Some("01"));
        assert_eq!(table.get(b'g'), None);

        // ' ':3 a:4 b:3 c:2 d:1
        let table = codes_for(b"aaaa bbb cc d");
        assert_eq!(table.get(b' '), Some("00"));
        assert_eq!(table.get(b'b'), Some("01"));
        assert_eq!(table.get(b'a'), Some("11"));
        assert_eq!(table.get(b'd'), Some("100"));
        assert_eq!(table.get(b'c'), Some("101"));
    }

    #[test]
    fn prefix_free_test() {
        let table = codes_for(b"It was the best of times, it was the worst of times.\n");
        let codes = table.iter().collect::<Vec<_>>();
        for (s, a) in &codes {
            for (t, b) in &codes {
                if s != t {
                    assert!(!b.starts_with(a), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn frequent_symbols_are_shorter_test() {
        let table = codes_for(b"aaabbbbcc");
        let len = |s: u8| table.get(s).unwrap().len();
        assert!(len(b'b') <= len(b'a'));
        assert!(len(b'b') <= len(b'c'));
    }

    #[test]
    fn unknown_symbol_test() {
        let table = codes_for(b"abc");
        assert_eq!(table.encode(b"abd"), Err(b'd'));
    }
}
