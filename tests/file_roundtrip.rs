use std::fs;
use std::path::PathBuf;

use hufftext::compression::compress::compress;
use hufftext::compression::decompress::decompress;
use hufftext::tools::cli::{HuffOpts, Mode, Output};
use hufftext::{decode_file, encode_file, DecodeError, EncodeError};

/// A fresh scratch directory per test so tests can run in parallel.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hufftext-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn encode_then_decode(name: &str, text: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let dir = scratch(name);
    let input = dir.join("input.txt");
    let encoded = dir.join("input.txt.huf");
    let decoded = dir.join("decoded.txt");
    fs::write(&input, text).unwrap();
    encode_file(&input, &encoded).unwrap();
    decode_file(&encoded, &decoded).unwrap();
    let result = (fs::read(&encoded).unwrap(), fs::read(&decoded).unwrap());
    fs::remove_dir_all(&dir).unwrap();
    result
}

#[test]
fn textfile_test() {
    let (encoded, decoded) = encode_then_decode("textfile", b"abcd abc ab a");
    assert_eq!(
        encoded,
        b"32 3 97 4 98 3 99 2 100 1\n11011011000011011010011010011"
    );
    assert_eq!(decoded, b"abcd abc ab a");
}

#[test]
fn multiline_test() {
    let text = b"hello world\nsecond line here\n";
    let (encoded, decoded) = encode_then_decode("multiline", text);
    let expected = concat!(
        "10 2 32 3 99 1 100 2 101 5 104 2 105 1 108 4 110 2 111 3 114 2 115 1 119 1\n",
        "1001001011010101111111010101101101100001101110000011100101100100011111010111111000011111001001101000110"
    );
    assert_eq!(encoded, expected.as_bytes());
    assert_eq!(decoded, text);
}

#[test]
fn empty_file_test() {
    let (encoded, decoded) = encode_then_decode("empty", b"");
    assert!(encoded.is_empty());
    assert!(decoded.is_empty());
}

#[test]
fn single_char_test() {
    let (encoded, decoded) = encode_then_decode("single_char", b"a");
    assert_eq!(encoded, b"97 1\n");
    assert_eq!(decoded, b"a");
}

#[test]
fn single_letter_test() {
    let (encoded, decoded) = encode_then_decode("single_letter", b"aaaaaaaaaaaaaaaaaaaa");
    assert_eq!(encoded, b"97 20\n");
    assert_eq!(decoded, b"aaaaaaaaaaaaaaaaaaaa");
}

#[test]
fn declaration_test() {
    let text = b"When in the Course of human events, it becomes necessary for one people \
to dissolve the political bands which have connected them with another, and to assume \
among the powers of the earth, the separate and equal station to which the Laws of \
Nature and of Nature's God entitle them, a decent respect to the opinions of mankind \
requires that they should declare the causes which impel them to the separation.\n";
    let (encoded, decoded) = encode_then_decode("declaration", text);
    assert_eq!(decoded, text);
    let header_end = encoded.iter().position(|&b| b == b'\n').unwrap();
    assert!(encoded[header_end + 1..].iter().all(|&b| b == b'0' || b == b'1'));
}

#[test]
fn nonexistent_file_test() {
    let dir = scratch("nonexistent");
    let missing = dir.join("not_existing.txt");
    let out = dir.join("test.txt");
    assert!(matches!(
        encode_file(&missing, &out),
        Err(EncodeError::SourceNotFound { .. })
    ));
    assert!(matches!(
        decode_file(&missing, &out),
        Err(DecodeError::SourceNotFound { .. })
    ));
    assert!(!out.exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn corrupt_input_leaves_no_output_test() {
    let dir = scratch("corrupt");
    let input = dir.join("broken.huf");
    let out = dir.join("broken");
    fs::write(&input, "97 3 98 4 99 2\n111").unwrap();
    assert!(matches!(
        decode_file(&input, &out),
        Err(DecodeError::TruncatedBody { .. })
    ));
    assert!(!out.exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn opts_driven_test() {
    let dir = scratch("opts");
    let input = dir.join("notes.txt");
    fs::write(&input, "aaabbbbcc").unwrap();

    let opts = HuffOpts::new(&input, Mode::Encode);
    assert_eq!(opts.output, Output::File(dir.join("notes.txt.huf")));
    compress(&opts).unwrap();
    assert_eq!(
        fs::read(dir.join("notes.txt.huf")).unwrap(),
        b"97 3 98 4 99 2\n11111100001010"
    );

    // Refuse to overwrite without force.
    assert!(matches!(
        compress(&opts),
        Err(EncodeError::OutputExists { .. })
    ));
    let mut forced = opts.clone();
    forced.force_overwrite = true;
    compress(&forced).unwrap();

    let mut back = HuffOpts::new(dir.join("notes.txt.huf"), Mode::Decode);
    assert_eq!(back.output, Output::File(input.clone()));
    assert!(matches!(
        decompress(&back),
        Err(DecodeError::OutputExists { .. })
    ));
    back.output = Output::File(dir.join("restored.txt"));
    decompress(&back).unwrap();
    assert_eq!(fs::read(dir.join("restored.txt")).unwrap(), b"aaabbbbcc");
    fs::remove_dir_all(&dir).unwrap();
}
