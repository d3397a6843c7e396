use std::io::{self, Read};
use std::ops::Index;

use log::debug;

/// Size of the symbol alphabet. Every byte value is a symbol.
pub const SYMBOLS: usize = 256;

/// Read buffer used when counting from a stream.
const CHUNK_SIZE: usize = 16_000;

/// Occurrence count for each of the 256 byte values. A count of zero means the
/// symbol is absent and gets no leaf in the tree.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOLS],
}

impl FrequencyTable {
    /// An all-zero table.
    pub fn new() -> Self {
        Self {
            counts: [0; SYMBOLS],
        }
    }

    /// Returns a frequency count of the input data.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut freqs = Self::new();
        freqs.add_bytes(data);
        freqs
    }

    /// Count every byte of a stream, reading it to exhaustion.
    pub fn from_reader<R: Read>(mut source: R) -> io::Result<Self> {
        let mut freqs = Self::new();
        let mut buf = vec![0_u8; CHUNK_SIZE];
        loop {
            let received = match source.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            freqs.add_bytes(&buf[..received]);
        }
        debug!(
            "Counted {} symbols, {} distinct",
            freqs.total(),
            freqs.distinct()
        );
        Ok(freqs)
    }

    fn add_bytes(&mut self, data: &[u8]) {
        data.iter().for_each(|&el| self.counts[el as usize] += 1);
    }

    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    pub fn set(&mut self, symbol: u8, count: u64) {
        self.counts[symbol as usize] = count;
    }

    /// Sum of all counts, i.e. the length of the source text.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Iterate the (symbol, count) pairs with non-zero counts in ascending symbol order.
    pub fn present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count != 0)
            .map(|(sym, &count)| (sym as u8, count))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<u8> for FrequencyTable {
    type Output = u64;

    fn index(&self, symbol: u8) -> &u64 {
        &self.counts[symbol as usize]
    }
}

impl std::fmt::Debug for FrequencyTable {
    // Only the present symbols, 256 mostly-zero slots are unreadable.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.present()).finish()
    }
}
