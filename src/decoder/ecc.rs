use crate::decoder::error::DecodeError;
use crate::decoder::reed_solomon::ReedSolomonDecoder;
use crate::decoder::tables::ec_block_info;
use crate::models::ECLevel;

/// Pack a flat bit stream (MSB first) into 8-bit codewords, dropping any
/// trailing partial byte.
pub fn bits_to_codewords(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
        .collect()
}

/// De-interleave a symbol's codewords into their error-correction blocks,
/// correct each block independently with Reed-Solomon, and concatenate the
/// corrected data portions back into a single data codeword stream.
///
/// Blocks are split into a "short" group and a "long" group per the QR
/// layout rules: when the data codewords don't divide evenly across
/// `num_blocks`, the last blocks each carry one extra data codeword.
pub fn deinterleave_and_correct(
    codewords: &[u8],
    version: u32,
    ec_level: ECLevel,
) -> Result<Vec<u8>, DecodeError> {
    let info = ec_block_info(version as u8, ec_level).ok_or(DecodeError::InvalidVersion {
        version: version as i32,
    })?;

    let total_ecc = info.num_blocks * info.ecc_per_block;
    let data_total = codewords.len().saturating_sub(total_ecc);
    let short_data_len = data_total / info.num_blocks;
    let num_long_blocks = data_total % info.num_blocks;

    let block_data_lens: Vec<usize> = (0..info.num_blocks)
        .map(|i| {
            if i >= info.num_blocks - num_long_blocks {
                short_data_len + 1
            } else {
                short_data_len
            }
        })
        .collect();

    let mut blocks: Vec<Vec<u8>> = block_data_lens
        .iter()
        .map(|&len| Vec::with_capacity(len + info.ecc_per_block))
        .collect();

    // Data codewords are interleaved column-wise across the short blocks
    // first, then the long blocks pick up their extra trailing codeword.
    let mut pos = 0;
    let max_data_len = short_data_len + 1;
    for col in 0..max_data_len {
        for (b, block) in blocks.iter_mut().enumerate() {
            if col < block_data_lens[b] {
                block.push(codewords[pos]);
                pos += 1;
            }
        }
    }

    // Then the ECC codewords, column-wise across all blocks.
    for _ in 0..info.ecc_per_block {
        for block in blocks.iter_mut() {
            block.push(codewords[pos]);
            pos += 1;
        }
    }

    let rs = ReedSolomonDecoder::new(info.ecc_per_block);
    let mut data = Vec::with_capacity(data_total);
    for (index, block) in blocks.iter_mut().enumerate() {
        rs.decode(block)
            .map_err(|_| DecodeError::Uncorrectable { block: index })?;
        data.extend_from_slice(&block[..block_data_lens[index]]);
    }

    Ok(data)
}
