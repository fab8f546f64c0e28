//! GRIN container integration tests.

use grin_huffman::{
    CodeTree, Decoder, Encoder, ErrorKind, FrequencyTable, GrinConfig, GrinDecoder, GrinEncoder,
    GrinError, Symbol, compress, decode_file, decompress, encode_file,
};
use std::fs;

/// Container for "aab": tree Inner(a, Inner(b, EOF)), body 0 0 10 11.
const AAB: [u8; 9] = [0x00, 0x00, 0x07, 0x36, 0x8C, 0x31, 0x89, 0x00, 0x2C];

fn lcg_bytes(size: usize, mut seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

fn roundtrip(original: &[u8]) {
    let compressed = compress(original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");
    assert_eq!(decompressed, original);
}

#[test]
fn test_known_containers() {
    assert_eq!(compress(b"aab").unwrap(), AAB);
    assert_eq!(
        compress(&[0x41]).unwrap(),
        vec![0x00, 0x00, 0x07, 0x36, 0x88, 0x28, 0x02]
    );
    assert_eq!(
        compress(b"").unwrap(),
        vec![0x00, 0x00, 0x07, 0x36, 0x40, 0x00]
    );
}

#[test]
fn test_roundtrip_edge_inputs() {
    roundtrip(b"");
    roundtrip(b"A");
    roundtrip(&[0x00]);
    roundtrip(&[0xFF, 0xFF]);
    roundtrip(b"ab");
}

#[test]
fn test_roundtrip_all_byte_values() {
    let original: Vec<u8> = (0..=255).collect();
    roundtrip(&original);

    let repeated: Vec<u8> = (0..=255u8).cycle().take(256 * 40).collect();
    roundtrip(&repeated);
}

#[test]
fn test_roundtrip_random() {
    for (size, seed) in [(1, 1), (17, 2), (4096, 3), (100_000, 0x123456789ABCDEF0)] {
        roundtrip(&lcg_bytes(size, seed));
    }
}

#[test]
fn test_roundtrip_text() {
    let text = b"The quick brown fox jumps over the lazy dog. \
                 Pack my box with five dozen liquor jugs.\n"
        .repeat(50);
    let compressed = compress(&text).unwrap();

    println!("Original size: {} bytes", text.len());
    println!("Compressed size: {} bytes", compressed.len());

    // Fewer than 32 distinct symbols, so no code needs 8 bits on average
    assert!(compressed.len() < text.len() * 3 / 4);
    assert_eq!(decompress(&compressed).unwrap(), text);
}

#[test]
fn test_skewed_frequencies_roundtrip() {
    // Weights 1, 2, 3, 5, ... continue the Fibonacci run started by EOF's
    // weight 1, so every merge joins the growing subtree with the next
    // leaf and the tree degenerates into a chain.
    let mut data = Vec::new();
    let (mut a, mut b) = (1usize, 2usize);
    for byte in 0u8..20 {
        data.extend(std::iter::repeat_n(byte, a));
        (a, b) = (b, a + b);
    }
    let table = FrequencyTable::from_bytes(&data);
    let tree = CodeTree::from_frequencies(&table).unwrap();
    assert_eq!(tree.leaf_count(), 21);
    assert_eq!(tree.depth(), 20);

    // The two rarest symbols share the deepest level
    let codes = tree.code_table();
    assert_eq!(codes.get(Symbol::from_byte(0)).unwrap().len(), 20);
    assert_eq!(codes.get(Symbol::EOF).unwrap().len(), 20);
    assert_eq!(codes.get(Symbol::from_byte(19)).unwrap().len(), 1);
    roundtrip(&data);
}

#[test]
fn test_tree_has_one_leaf_per_distinct_byte_plus_eof() {
    let data = b"mississippi";
    let tree = CodeTree::from_frequencies(&FrequencyTable::from_bytes(data)).unwrap();
    let mut symbols = tree.symbols();
    symbols.sort();
    assert_eq!(
        symbols,
        vec![
            Symbol::from_byte(b'i'),
            Symbol::from_byte(b'm'),
            Symbol::from_byte(b'p'),
            Symbol::from_byte(b's'),
            Symbol::EOF,
        ]
    );

    let codes = tree.code_table();
    for (symbol, code) in codes.iter() {
        for (other, other_code) in codes.iter() {
            if symbol != other {
                assert!(!code.is_prefix_of(other_code));
            }
        }
    }
}

#[test]
fn test_encoding_is_deterministic() {
    let data = lcg_bytes(5000, 42);
    assert_eq!(compress(&data).unwrap(), compress(&data).unwrap());
}

#[test]
fn test_rejects_wrong_magic() {
    let mut data = AAB;
    data[0] = 0x01;
    let err = decompress(&data).unwrap_err();
    assert!(matches!(err, GrinError::InvalidMagic { .. }));
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_rejects_short_input() {
    for len in 0..4 {
        let err = decompress(&AAB[..len]).unwrap_err();
        assert!(matches!(err, GrinError::TruncatedHeader), "len {}", len);
    }
}

#[test]
fn test_rejects_truncated_tree() {
    for len in 4..8 {
        let err = decompress(&AAB[..len]).unwrap_err();
        assert!(matches!(err, GrinError::TruncatedTree { .. }), "len {}", len);
    }
}

#[test]
fn test_rejects_missing_eof() {
    let err = decompress(&AAB[..8]).unwrap_err();
    assert!(matches!(err, GrinError::MissingEof { .. }));

    let mut data = AAB.to_vec();
    data[8] = 0x00;
    let err = decompress(&data).unwrap_err();
    assert!(matches!(err, GrinError::MissingEof { bit_position: 72 }));
}

#[test]
fn test_rejects_body_cut_inside_code() {
    let mut data = AAB.to_vec();
    data[8] = 0x01;
    let err = decompress(&data).unwrap_err();
    assert!(matches!(err, GrinError::TruncatedBody { .. }));
    assert!(err.is_format_error());
}

#[test]
fn test_rejects_tree_without_eof() {
    // 1 | 0 'a' | 0 'b' : two literal leaves, no EOF
    // bits: 1 0 001100001 0 001100010
    let data = [0x00, 0x00, 0x07, 0x36, 0x8C, 0x23, 0x10];
    let err = decompress(&data).unwrap_err();
    assert!(matches!(err, GrinError::MissingEofLeaf));
}

#[test]
fn test_ignores_bytes_after_container() {
    let mut data = AAB.to_vec();
    data.extend_from_slice(b"trailing garbage");
    assert_eq!(decompress(&data).unwrap(), b"aab");
}

#[test]
fn test_concatenated_containers_decode_first() {
    let mut data = compress(b"first").unwrap();
    data.extend(compress(b"second").unwrap());
    assert_eq!(decompress(&data).unwrap(), b"first");
}

#[test]
fn test_custom_config_roundtrip() {
    let config = GrinConfig::default().with_magic(0x4752_494E);
    let encoder = GrinEncoder::new(config);
    let decoder = GrinDecoder::new(config);

    let compressed = encoder.encode_all(b"custom magic").unwrap();
    assert_eq!(&compressed[..4], b"GRIN");
    assert_eq!(decoder.decode_all(&compressed).unwrap(), b"custom magic");
    assert!(matches!(
        decompress(&compressed).unwrap_err(),
        GrinError::InvalidMagic { .. }
    ));
}

#[test]
fn test_summaries_agree() {
    let data = lcg_bytes(3000, 7);
    let mut compressed = Vec::new();
    let encoded = GrinEncoder::default()
        .encode(&mut std::io::Cursor::new(&data), &mut compressed)
        .unwrap();

    assert_eq!(encoded.input_bytes, 3000);
    assert_eq!(encoded.output_bytes, compressed.len() as u64);
    assert_eq!(
        encoded.output_bytes,
        (32 + encoded.tree_bits + encoded.body_bits).div_ceil(8)
    );

    let mut output = Vec::new();
    let decoded = GrinDecoder::default()
        .decode(&compressed[..], &mut output)
        .unwrap();
    assert_eq!(decoded.output_bytes, 3000);
    assert_eq!(decoded.leaf_count, encoded.distinct_symbols + 1);
    assert_eq!(
        decoded.input_bits,
        32 + encoded.tree_bits + encoded.body_bits
    );
}

#[test]
fn test_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let packed = dir.path().join("input.grin");
    let unpacked = dir.path().join("output.txt");

    let original = b"file based round trip\n".repeat(100);
    fs::write(&input, &original).unwrap();

    let encoded = encode_file(&input, &packed).unwrap();
    assert_eq!(encoded.input_bytes, original.len() as u64);
    assert_eq!(fs::metadata(&packed).unwrap().len(), encoded.output_bytes);

    let decoded = decode_file(&packed, &unpacked).unwrap();
    assert_eq!(decoded.output_bytes, original.len() as u64);
    assert_eq!(fs::read(&unpacked).unwrap(), original);
}

#[test]
fn test_file_empty_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty");
    let packed = dir.path().join("empty.grin");
    let unpacked = dir.path().join("empty.out");
    fs::write(&input, b"").unwrap();

    encode_file(&input, &packed).unwrap();
    assert_eq!(fs::read(&packed).unwrap(), vec![0x00, 0x00, 0x07, 0x36, 0x40, 0x00]);
    decode_file(&packed, &unpacked).unwrap();
    assert!(fs::read(&unpacked).unwrap().is_empty());
}

#[test]
fn test_file_missing_input_is_resource_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let output = dir.path().join("out");

    let err = encode_file(&missing, &output).unwrap_err();
    assert!(matches!(err, GrinError::Open { .. }));
    assert_eq!(err.kind(), ErrorKind::Resource);
    assert!(!output.exists());

    let err = decode_file(&missing, &output).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Resource);
}

#[test]
fn test_decode_file_rejects_invalid_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plain.txt");
    let output = dir.path().join("plain.out");
    fs::write(&input, b"definitely not a container").unwrap();

    let err = decode_file(&input, &output).unwrap_err();
    assert!(err.is_format_error());
    assert!(!output.exists());
}

#[test]
fn test_decode_file_removes_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cut.grin");
    let output = dir.path().join("cut.out");

    let mut data = AAB.to_vec();
    data[8] = 0x00;
    fs::write(&input, &data).unwrap();

    let err = decode_file(&input, &output).unwrap_err();
    assert!(matches!(err, GrinError::MissingEof { .. }));
    assert!(!output.exists());
}

#[test]
fn test_decode_file_leaves_existing_output_on_bad_header() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.grin");
    let output = dir.path().join("keep.txt");
    fs::write(&input, b"nope").unwrap();
    fs::write(&output, b"keep me").unwrap();

    assert!(decode_file(&input, &output).is_err());
    assert_eq!(fs::read(&output).unwrap(), b"keep me");
}

#[test]
fn test_decode_file_onto_itself_keeps_container() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("self.grin");
    fs::write(&path, AAB).unwrap();

    let err = decode_file(&path, &path).unwrap_err();
    assert!(matches!(err, GrinError::SamePath { .. }));
    assert_eq!(err.kind(), ErrorKind::Resource);
    assert_eq!(fs::read(&path).unwrap(), AAB);

    // A different spelling of the same file is caught too
    let dotted = dir.path().join(".").join("self.grin");
    let err = decode_file(&path, &dotted).unwrap_err();
    assert!(matches!(err, GrinError::SamePath { .. }));
    assert_eq!(fs::read(&path).unwrap(), AAB);
}

#[test]
fn test_encode_file_onto_itself_keeps_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("self.txt");
    fs::write(&path, b"do not truncate me").unwrap();

    let err = encode_file(&path, &path).unwrap_err();
    assert!(matches!(err, GrinError::SamePath { .. }));
    assert_eq!(fs::read(&path).unwrap(), b"do not truncate me");
}
