//! This module contains the adaptive-dictionary (LZW) engine.
//!
//! The encoder walks the symbol stream greedily, extending the current phrase
//! while it is still in the dictionary and emitting the phrase's code on the
//! first miss. Every miss inserts one new phrase, so codes are dense and
//! strictly increasing from 256. The dictionary is local to each call.
//!
//! All codes of one stream are packed at a single width, chosen after the pass
//! from the final dictionary size (see [`codelength_for`]).

use hashbrown::HashMap;

use crate::error::CodecError;

/// Number of single-symbol phrases every dictionary is seeded with.
pub const SEED_ENTRIES: usize = 256;
/// Smallest width a code stream is ever packed at.
pub const MIN_CODELENGTH: u8 = 8;

/// The output of one encoder pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCodes {
    pub codes: Vec<u32>,
    /// Dictionary size once the pass finished.
    pub dict_size: usize,
    /// Bit width every code in `codes` is packed at.
    pub codelength: u8,
}

/// `max(8, ceil(log2(dict_size)))`.
pub fn codelength_for(dict_size: usize) -> u8 {
    if dict_size <= 1 {
        return MIN_CODELENGTH;
    }
    let bits = usize::BITS - (dict_size - 1).leading_zeros();
    (bits as u8).max(MIN_CODELENGTH)
}

//==================================================================================
// 1. Encoder
//==================================================================================

/// Encodes a symbol stream into dictionary codes. Never fails; an empty input
/// yields an empty code stream with the minimum codelength.
pub fn encode(symbols: &[u8]) -> EncodedCodes {
    // A phrase `wc` is addressed by the code of `w` plus the symbol `c`.
    let mut dictionary: HashMap<(u32, u8), u32> = HashMap::new();
    let mut next_code = SEED_ENTRIES as u32;
    let mut codes = Vec::new();
    let mut current: Option<u32> = None;

    for &symbol in symbols {
        let w = match current {
            None => {
                current = Some(u32::from(symbol));
                continue;
            }
            Some(w) => w,
        };

        match dictionary.get(&(w, symbol)) {
            Some(&code) => current = Some(code),
            None => {
                codes.push(w);
                dictionary.insert((w, symbol), next_code);
                next_code += 1;
                current = Some(u32::from(symbol));
            }
        }
    }

    if let Some(w) = current {
        codes.push(w);
    }

    let dict_size = next_code as usize;
    let codelength = codelength_for(dict_size);
    log::debug!(
        "lzw encode: {} symbols -> {} codes, dict_size {}, codelength {}",
        symbols.len(),
        codes.len(),
        dict_size,
        codelength
    );

    EncodedCodes {
        codes,
        dict_size,
        codelength,
    }
}

//==================================================================================
// 2. Decoder
//==================================================================================

/// One decoder table entry. Phrases are stored as a back-link to their prefix
/// so the table stays linear in the number of codes.
#[derive(Clone, Copy)]
struct Entry {
    prefix: Option<u32>,
    suffix: u8,
    first: u8,
    len: usize,
}

struct DecodeTable {
    entries: Vec<Entry>,
}

impl DecodeTable {
    fn seeded() -> Self {
        let entries = (0..=u8::MAX)
            .map(|symbol| Entry {
                prefix: None,
                suffix: symbol,
                first: symbol,
                len: 1,
            })
            .collect();
        DecodeTable { entries }
    }

    fn next_index(&self) -> u32 {
        self.entries.len() as u32
    }

    fn first_of(&self, code: u32) -> u8 {
        self.entries[code as usize].first
    }

    fn push(&mut self, prefix: u32, suffix: u8) {
        let base = self.entries[prefix as usize];
        self.entries.push(Entry {
            prefix: Some(prefix),
            suffix,
            first: base.first,
            len: base.len + 1,
        });
    }

    /// Appends the phrase for `code` to `out`. `code` must be in the table.
    fn expand(&self, code: u32, out: &mut Vec<u8>) {
        let entry = self.entries[code as usize];
        let start = out.len();
        out.resize(start + entry.len, 0);

        let mut cursor = Some(code);
        let mut pos = start + entry.len;
        while let Some(c) = cursor {
            let e = &self.entries[c as usize];
            pos -= 1;
            out[pos] = e.suffix;
            cursor = e.prefix;
        }
    }
}

/// Decodes a code stream produced by [`encode`] back into symbols.
///
/// # Errors
/// Returns `CodecError::InvalidCode` for the first code that is neither in
/// the dictionary nor the index the encoder would have created next.
pub fn decode(codes: &[u32]) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    let (&first, rest) = match codes.split_first() {
        Some(split) => split,
        None => return Ok(out),
    };

    let mut table = DecodeTable::seeded();
    if first as usize >= SEED_ENTRIES {
        return Err(CodecError::InvalidCode {
            code: first,
            dict_size: SEED_ENTRIES,
        });
    }
    table.expand(first, &mut out);
    let mut previous = first;

    for &code in rest {
        let next_index = table.next_index();
        if code < next_index {
            let entry_first = table.first_of(code);
            table.push(previous, entry_first);
            table.expand(code, &mut out);
        } else if code == next_index {
            // The phrase being read is the one the encoder just built: `w + w[0]`.
            let w_first = table.first_of(previous);
            table.push(previous, w_first);
            table.expand(code, &mut out);
        } else {
            return Err(CodecError::InvalidCode {
                code,
                dict_size: next_index as usize,
            });
        }
        previous = code;
    }

    log::debug!(
        "lzw decode: {} codes -> {} symbols, dict_size {}",
        codes.len(),
        out.len(),
        table.entries.len()
    );
    Ok(out)
}
