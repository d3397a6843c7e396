use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use log::{debug, info};

use crate::error::EncodeError;
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::huffman::HuffmanTree;
use crate::tools::cli::{HuffOpts, Output};
use crate::tools::freq_count::FrequencyTable;
use crate::tools::header;

/*
    Encoding runs in three steps:
    - ReadInput: pull the whole source into memory and count it. Stream sources
      are counted chunk by chunk as they are read.
    - BuildModel: build the tree from those counts and derive the code table.
    - EmitOutput: write the header, then (for non-empty input) a newline and
      the codes of every input byte in order.

    An empty input encodes to an empty output: empty header, no newline, no body.
*/

/// Encode a byte slice into its complete encoded form.
pub fn encode_bytes(data: &[u8]) -> Result<Vec<u8>, EncodeError> {
    // ReadInput
    let freqs = FrequencyTable::from_bytes(data);
    emit(data, &freqs)
}

/// BuildModel and EmitOutput for data already counted into `freqs`.
fn emit(data: &[u8], freqs: &FrequencyTable) -> Result<Vec<u8>, EncodeError> {
    info!(
        "Encoding {} bytes, {} distinct symbols",
        data.len(),
        freqs.distinct()
    );

    // BuildModel
    let tree = HuffmanTree::build(freqs);
    let codes = CodeTable::from_tree(tree.as_ref());
    debug!("Code table holds {} codes", codes.len());

    // EmitOutput
    let mut out = header::serialize(freqs).into_bytes();
    if !data.is_empty() {
        let body = codes
            .encode(data)
            .map_err(|symbol| EncodeError::MissingCode { symbol })?;
        out.push(b'\n');
        out.extend_from_slice(body.as_bytes());
    }
    debug!("Encoded output is {} bytes", out.len());
    Ok(out)
}

/// Keeps a copy of everything read through it.
struct Keep<'a, R> {
    inner: R,
    kept: &'a mut Vec<u8>,
}

impl<R: Read> Read for Keep<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let received = self.inner.read(buf)?;
        self.kept.extend_from_slice(&buf[..received]);
        Ok(received)
    }
}

/// Read the whole source, then write the encoded form to the sink. Nothing is
/// written if reading fails.
pub fn encode<R: Read, W: Write>(input: R, mut output: W) -> Result<(), EncodeError> {
    let mut data = Vec::new();
    let freqs = FrequencyTable::from_reader(Keep {
        inner: input,
        kept: &mut data,
    })?;
    let encoded = emit(&data, &freqs)?;
    output.write_all(&encoded)?;
    output.flush()?;
    Ok(())
}

/// Encode the file at `input` into the file at `output`. A missing input is
/// reported as `SourceNotFound` and the output file is not created.
pub fn encode_file(input: &Path, output: &Path) -> Result<(), EncodeError> {
    let encoded = encode_bytes(&read_source(input)?)?;
    let mut f_out = File::create(output)?;
    f_out.write_all(&encoded)?;
    info!("Wrote {}", output.display());
    Ok(())
}

/// Encode the input file named in opts <HuffOpts>.
pub fn compress(opts: &HuffOpts) -> Result<(), EncodeError> {
    let encoded = encode_bytes(&read_source(&opts.file)?)?;
    match &opts.output {
        Output::File(path) => {
            if path.exists() && !opts.force_overwrite {
                return Err(EncodeError::OutputExists { path: path.clone() });
            }
            File::create(path)?.write_all(&encoded)?;
        }
        Output::Stdout => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(&encoded)?;
            lock.flush()?;
        }
    }
    info!("Wrote {}", opts.output);
    Ok(())
}

fn read_source(path: &Path) -> Result<Vec<u8>, EncodeError> {
    let mut data = Vec::new();
    File::open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => EncodeError::SourceNotFound {
                path: path.to_path_buf(),
            },
            _ => EncodeError::Io(e),
        })?
        .read_to_end(&mut data)?;
    Ok(data)
}
