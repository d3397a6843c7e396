use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::DecodeError;
use crate::huffman_coding::huffman::{HuffmanTree, Node};
use crate::tools::cli::{HuffOpts, Output};
use crate::tools::header;

/*
    Decoding runs in three steps:
    - ReadHeader: split off the first line. An empty first line means an empty
      input, and decoding stops there.
    - RebuildModel: parse the header and rebuild the tree. Identical counts give
      an identical tree, so no tree is stored in the file.
    - WalkBits: walk the tree with the body, '0' going left and '1' going right,
      emitting a symbol at every leaf and starting over at the root.

    A tree that is a single leaf has the empty code, so the body says nothing.
    The symbol is then repeated as often as the header counts it.
*/

/// Decode a complete encoded buffer.
pub fn decode_bytes(encoded: &[u8]) -> Result<Vec<u8>, DecodeError> {
    // ReadHeader
    let (header_line, body) = split_lines(encoded);
    let header_text = std::str::from_utf8(header_line)
        .map_err(|_| DecodeError::MalformedHeader("header is not valid text".to_string()))?;

    // RebuildModel
    let freqs = header::parse(header_text)?;
    let Some(tree) = HuffmanTree::build(&freqs) else {
        if body.is_empty() {
            debug!("Empty header, nothing to decode");
            return Ok(Vec::new());
        }
        return Err(DecodeError::UnexpectedBody);
    };
    let expected = freqs.total();
    info!(
        "Decoding {} symbols from a {} bit body",
        expected,
        body.len()
    );

    // WalkBits
    if let Node::Leaf { symbol, weight } = tree.root() {
        if !body.is_empty() {
            return Err(DecodeError::UnexpectedBody);
        }
        debug!("Single symbol {} repeated {} times", symbol, weight);
        let too_large = || {
            io::Error::new(
                io::ErrorKind::OutOfMemory,
                format!("cannot hold {} copies of symbol {}", weight, symbol),
            )
        };
        let count = usize::try_from(*weight).map_err(|_| too_large())?;
        let mut out = Vec::new();
        out.try_reserve_exact(count).map_err(|_| too_large())?;
        out.resize(count, *symbol);
        return Ok(out);
    }
    if body.is_empty() {
        return Err(DecodeError::MissingBody);
    }

    let decoded = walk_bits(&tree, body)?;
    if decoded.len() as u64 != expected {
        return Err(DecodeError::CountMismatch {
            expected,
            found: decoded.len() as u64,
        });
    }
    Ok(decoded)
}

/// Split at the first newline. The body loses its trailing line ending; a
/// missing second line is the same as an empty one.
fn split_lines(encoded: &[u8]) -> (&[u8], &[u8]) {
    match encoded.iter().position(|&b| b == b'\n') {
        Some(idx) => {
            let mut body = &encoded[idx + 1..];
            while let [rest @ .., b'\n' | b'\r'] = body {
                body = rest;
            }
            (&encoded[..idx], body)
        }
        None => (encoded, &[][..]),
    }
}

/// Walk the body through a tree with at least two leaves.
fn walk_bits(tree: &HuffmanTree, body: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let root = tree.root();
    let mut out = Vec::with_capacity(body.len() / 2);
    let mut node = root;
    for (offset, &bit) in body.iter().enumerate() {
        let (left, right) = match node.children() {
            Some(kids) => kids,
            // Only the root can be a leaf here, and the caller rules that out.
            None => return Err(DecodeError::UnexpectedBody),
        };
        node = match bit {
            b'0' => left,
            b'1' => right,
            other => {
                return Err(DecodeError::InvalidBit {
                    found: other as char,
                    offset,
                })
            }
        };
        if let Node::Leaf { symbol, .. } = node {
            out.push(*symbol);
            node = root;
        }
    }
    // The body has to finish exactly on a leaf.
    if !std::ptr::eq(node, root) {
        warn!("Body ended inside a code after {} symbols", out.len());
        return Err(DecodeError::TruncatedBody { decoded: out.len() });
    }
    Ok(out)
}

/// Read the whole encoded source, then write the decoded bytes to the sink.
/// Nothing is written unless the full body decodes.
pub fn decode<R: Read, W: Write>(mut input: R, mut output: W) -> Result<(), DecodeError> {
    let mut encoded = Vec::new();
    input.read_to_end(&mut encoded)?;
    let decoded = decode_bytes(&encoded)?;
    output.write_all(&decoded)?;
    output.flush()?;
    Ok(())
}

/// Decode the file at `input` into the file at `output`. A missing input is
/// reported as `SourceNotFound` and the output file is not created.
pub fn decode_file(input: &Path, output: &Path) -> Result<(), DecodeError> {
    let decoded = decode_bytes(&read_source(input)?)?;
    let mut f_out = File::create(output)?;
    f_out.write_all(&decoded)?;
    info!("Wrote {}", output.display());
    Ok(())
}

/// Decode the input file named in opts <HuffOpts>.
pub fn decompress(opts: &HuffOpts) -> Result<(), DecodeError> {
    let decoded = decode_bytes(&read_source(&opts.file)?)?;
    match &opts.output {
        Output::File(path) => {
            if path.exists() && !opts.force_overwrite {
                return Err(DecodeError::OutputExists { path: path.clone() });
            }
            File::create(path)?.write_all(&decoded)?;
        }
        Output::Stdout => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(&decoded)?;
            lock.flush()?;
        }
    }
    info!("Wrote {}", opts.output);
    Ok(())
}

fn read_source(path: &Path) -> Result<Vec<u8>, DecodeError> {
    let mut data = Vec::new();
    File::open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DecodeError::SourceNotFound {
                path: path.to_path_buf(),
            },
            _ => DecodeError::Io(e),
        })?
        .read_to_end(&mut data)?;
    Ok(data)
}
