//! GIF-variant LZW coding.
//!
//! Variable-width codes packed LSB-first, a clear code emitted up front
//! and again whenever the dictionary fills. The dictionary lives for one
//! call; nothing carries across frames.

use std::collections::HashMap;

use crate::error::{PinwheelError, Result};

/// Dictionary capacity fixed by the 12-bit code ceiling.
const MAX_TABLE: u16 = 4096;
const MAX_CODE_WIDTH: u32 = 12;

/// Compress an index stream.
///
/// `min_code_size` is the palette depth: literal codes occupy
/// `0..2^min_code_size`, with the clear and end codes directly above.
pub fn compress(min_code_size: u8, indices: &[u8]) -> Vec<u8> {
    let clear: u16 = 1 << min_code_size;
    let end: u16 = clear + 1;

    let mut packer = BitPacker::new();
    let mut width = u32::from(min_code_size) + 1;
    let mut table: HashMap<(u16, u8), u16> = HashMap::new();
    let mut next_code = end + 1;

    packer.push(clear, width);

    let Some((&first, rest)) = indices.split_first() else {
        packer.push(end, width);
        return packer.finish();
    };

    let mut w = u16::from(first);
    for &k in rest {
        if let Some(&code) = table.get(&(w, k)) {
            w = code;
            continue;
        }

        packer.push(w, width);
        if next_code < MAX_TABLE {
            table.insert((w, k), next_code);
            next_code += 1;
            if next_code == 1 << width && width < MAX_CODE_WIDTH {
                width += 1;
            }
        } else {
            packer.push(clear, width);
            table.clear();
            next_code = end + 1;
            width = u32::from(min_code_size) + 1;
        }
        w = u16::from(k);
    }

    packer.push(w, width);
    packer.push(end, width);
    packer.finish()
}

/// Decode a stream produced by [`compress`].
///
/// Strict: out-of-range codes and a missing end-of-information code are
/// reported as errors rather than truncated output.
pub fn decompress(min_code_size: u8, data: &[u8]) -> Result<Vec<u8>> {
    let clear: u16 = 1 << min_code_size;
    let end: u16 = clear + 1;

    let mut reader = BitReader::new(data);
    let mut width = u32::from(min_code_size) + 1;
    let mut table: Vec<Vec<u8>> = Vec::new();
    reset_table(&mut table, clear);

    let mut out = Vec::new();
    let mut prev: Option<u16> = None;

    while let Some(code) = reader.read(width) {
        if code == clear {
            reset_table(&mut table, clear);
            width = u32::from(min_code_size) + 1;
            prev = None;
            continue;
        }
        if code == end {
            return Ok(out);
        }

        let entry = match table.get(usize::from(code)) {
            Some(seq) if !seq.is_empty() => seq.clone(),
            _ => {
                // The code about to be defined: prev plus its own first byte
                let Some(p) = prev else {
                    return Err(codec_error(format!("Invalid leading code {code}")));
                };
                if usize::from(code) != table.len() {
                    return Err(codec_error(format!("Code {code} is beyond the dictionary")));
                }
                let seed = &table[usize::from(p)];
                let mut seq = seed.clone();
                seq.push(seed[0]);
                seq
            }
        };

        out.extend_from_slice(&entry);

        if let Some(p) = prev {
            if (table.len() as u16) < MAX_TABLE {
                let mut seq = table[usize::from(p)].clone();
                seq.push(entry[0]);
                table.push(seq);
                // The decoder grows one code earlier than the encoder: it
                // has not yet seen the entry the encoder defined last.
                if table.len() as u16 == (1 << width) - 1 && width < MAX_CODE_WIDTH {
                    width += 1;
                }
            }
        }
        prev = Some(code);
    }

    Err(codec_error(String::from("Missing end-of-information code")))
}

fn reset_table(table: &mut Vec<Vec<u8>>, clear: u16) {
    table.clear();
    for literal in 0..clear {
        table.push(vec![literal as u8]);
    }
    // Reserved slots for the clear and end codes
    table.push(Vec::new());
    table.push(Vec::new());
}

fn codec_error(message: String) -> PinwheelError {
    PinwheelError::Codec {
        message,
        help: None,
    }
}

/// LSB-first bit packer with an integer accumulator.
struct BitPacker {
    out: Vec<u8>,
    acc: u32,
    bits: u32,
}

impl BitPacker {
    fn new() -> Self {
        Self {
            out: Vec::new(),
            acc: 0,
            bits: 0,
        }
    }

    fn push(&mut self, code: u16, width: u32) {
        self.acc |= u32::from(code) << self.bits;
        self.bits += width;
        while self.bits >= 8 {
            self.out.push((self.acc & 0xFF) as u8);
            self.acc >>= 8;
            self.bits -= 8;
        }
    }

    /// Flush the trailing partial byte, padding with zero bits.
    fn finish(mut self) -> Vec<u8> {
        if self.bits > 0 {
            self.out.push((self.acc & 0xFF) as u8);
        }
        self.out
    }
}

/// LSB-first bit reader over a byte slice.
struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
    acc: u32,
    bits: u32,
}

impl<'a> BitReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            acc: 0,
            bits: 0,
        }
    }

    /// Read `width` bits; `None` once the stream is exhausted.
    fn read(&mut self, width: u32) -> Option<u16> {
        while self.bits < width {
            let byte = *self.data.get(self.pos)?;
            self.pos += 1;
            self.acc |= u32::from(byte) << self.bits;
            self.bits += 8;
        }
        let code = (self.acc & ((1 << width) - 1)) as u16;
        self.acc >>= width;
        self.bits -= width;
        Some(code)
    }
}
