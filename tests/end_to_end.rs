//! Builds complete QR symbols in memory (placement + masking + Reed-Solomon
//! encoding) and feeds them through `rust_qr_decode::decode`, exercising the
//! full VER -> FMT -> READ -> ECC -> MSG pipeline rather than each stage in
//! isolation.

use rust_qr_decode::decode;
use rust_qr_decode::decoder::bch;
use rust_qr_decode::decoder::ecc::bits_to_codewords;
use rust_qr_decode::decoder::reed_solomon::Gf256;
use rust_qr_decode::decoder::reserved::reserved;
use rust_qr_decode::decoder::DecodeError;
use rust_qr_decode::{BitMatrix, ECLevel, MaskPattern};

fn gf_poly_mul(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut result = vec![0u8; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            result[i + j] ^= Gf256::mul(ai, bj);
        }
    }
    result
}

/// Monic generator polynomial `(x - 2^0)(x - 2^1)...(x - 2^(degree-1))`,
/// returned high-degree-coefficient first with the leading 1 omitted.
fn rs_generator(degree: usize) -> Vec<u8> {
    let mut poly = vec![1u8];
    for i in 0..degree {
        poly = gf_poly_mul(&poly, &[1, Gf256::pow(2, i as u8)]);
    }
    poly[1..].to_vec()
}

/// Reed-Solomon ECC codewords for `data`, via polynomial long division
/// against the generator (the standard shift-register formulation).
fn rs_encode(data: &[u8], ecc_len: usize) -> Vec<u8> {
    let generator = rs_generator(ecc_len);
    let mut register = vec![0u8; ecc_len];
    for &byte in data {
        let factor = byte ^ register.remove(0);
        register.push(0);
        if factor != 0 {
            for (i, &g) in generator.iter().enumerate() {
                register[i] ^= Gf256::mul(g, factor);
            }
        }
    }
    register
}

fn push_bits(out: &mut Vec<bool>, value: u32, width: usize) {
    for i in (0..width).rev() {
        out.push((value >> i) & 1 == 1);
    }
}

/// Place bits into a matrix's data modules following the canonical
/// traversal, masking each as a real encoder would.
fn place_data_bits(matrix: &mut BitMatrix, side: usize, data_bits: &[bool], mask: MaskPattern) {
    let mut idx = 0;
    let mut upward = true;
    let mut col = side as i32 - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }
        let rows: Box<dyn Iterator<Item = usize>> = if upward {
            Box::new((0..side).rev())
        } else {
            Box::new(0..side)
        };
        for row in rows {
            for c in [col, col - 1] {
                if c >= 0 && !reserved(c as usize, row, side) {
                    if idx < data_bits.len() {
                        let bit = data_bits[idx] ^ mask.is_masked(row, c as usize);
                        matrix.set(c as usize, row, bit);
                        idx += 1;
                    }
                }
            }
        }
        upward = !upward;
        col -= 2;
    }

    assert_eq!(idx, data_bits.len(), "test built the wrong number of data bits for this symbol size");
}

fn write_timing_and_dark_module(matrix: &mut BitMatrix, side: usize) {
    for i in 7..=(side - 8) {
        matrix.set(6, i, i % 2 == 0);
        matrix.set(i, 6, i % 2 == 0);
    }
    matrix.set(8, side - 8, true);
}

fn write_format_info(matrix: &mut BitMatrix, ec_level: ECLevel, mask: MaskPattern, side: usize) {
    let data = (ec_level.to_bits() << 3) | mask.to_bits();
    let codeword = bch::format_codeword(data as u16) ^ bch::FORMAT_MASK;
    let bit = |i: u32| (codeword >> i) & 1 == 1;

    for (k, col) in (0..6).enumerate() {
        matrix.set(col, 8, bit(14 - k as u32));
    }
    matrix.set(7, 8, bit(8));
    matrix.set(8, 8, bit(7));
    matrix.set(8, 7, bit(6));
    for (k, row) in (0..6).rev().enumerate() {
        matrix.set(8, row, bit(5 - k as u32));
    }

    for (k, row) in (side - 7..side).rev().enumerate() {
        matrix.set(8, row, bit(14 - k as u32));
    }
    for (k, col) in (side - 8..side).enumerate() {
        matrix.set(col, 8, bit(7 - k as u32));
    }
}

/// Build a complete, valid version-1 symbol carrying `data_codewords`
/// (already padded to the version/EC-level's full data capacity) under the
/// given EC level and mask.
fn build_symbol(data_codewords: &[u8], ec_level: ECLevel, mask: MaskPattern) -> BitMatrix {
    let side = 21usize;
    let ecc_len = 10; // version 1, EC level M
    let ecc = rs_encode(data_codewords, ecc_len);

    let mut codewords = data_codewords.to_vec();
    codewords.extend(ecc);

    let mut data_bits = Vec::with_capacity(codewords.len() * 8);
    for byte in codewords {
        push_bits(&mut data_bits, byte as u32, 8);
    }

    let mut matrix = BitMatrix::new(side, side);
    write_timing_and_dark_module(&mut matrix, side);
    write_format_info(&mut matrix, ec_level, mask, side);
    place_data_bits(&mut matrix, side, &data_bits, mask);
    matrix
}

fn byte_message_codewords(text: &[u8], capacity: usize) -> Vec<u8> {
    let mut bits = Vec::new();
    push_bits(&mut bits, 0b0100, 4); // byte mode
    push_bits(&mut bits, text.len() as u32, 8); // version 1-9 character count width
    for &b in text {
        push_bits(&mut bits, b as u32, 8);
    }
    push_bits(&mut bits, 0b0000, 4); // terminator

    while bits.len() % 8 != 0 {
        bits.push(false);
    }
    let mut codewords = bits_to_codewords(&bits);

    let pad = [0xECu8, 0x11u8];
    let mut i = 0;
    while codewords.len() < capacity {
        codewords.push(pad[i % 2]);
        i += 1;
    }
    codewords
}

#[test]
fn test_round_trip_byte_message() {
    let data = byte_message_codewords(b"HELLO", 16);
    let matrix = build_symbol(&data, ECLevel::M, MaskPattern::Pattern0);
    assert_eq!(decode(&matrix).unwrap(), "HELLO");
}

#[test]
fn test_round_trip_survives_single_bit_errors_per_block() {
    let data = byte_message_codewords(b"HI", 16);
    let matrix = build_symbol(&data, ECLevel::M, MaskPattern::Pattern3);

    // Flip a handful of bits across the symbol; 10 ECC codewords can
    // correct up to 5 codeword errors in this single-block layout.
    let mut corrupted = matrix.clone();
    for &(x, y) in &[(20usize, 20usize), (19, 19), (20, 18)] {
        corrupted.toggle(x, y);
    }
    assert_eq!(decode(&corrupted).unwrap(), "HI");
}

#[test]
fn test_missing_dark_module_is_rejected() {
    let matrix = BitMatrix::new(21, 21);
    assert_eq!(decode(&matrix), Err(DecodeError::DarkModuleMissing));
}

#[test]
fn test_undersized_matrix_is_rejected() {
    let matrix = BitMatrix::new(15, 15);
    assert_eq!(decode(&matrix), Err(DecodeError::MatrixTooSmall { side: 15 }));
}
