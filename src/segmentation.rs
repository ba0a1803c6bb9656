//! Splits long text messages into PDU-sized short_message payloads.
//!
//! Handles GSM 03.38 7-bit packing and UCS-2 encoding, and produces either
//! UDH-prefixed parts (for esm_class-flagged concatenation) or bare payloads
//! sized for SAR TLV-based concatenation.

/// Requested text encoding for a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingType {
    Gsm7Bit,
    Ucs2,
}

/// How multi-part messages signal concatenation on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitMode {
    /// 6-byte User Data Header prefixed to each segment's short_message.
    Udh,
    /// No UDH; caller attaches SAR_MSG_REF_NUM/SAR_TOTAL_SEGMENTS/SAR_SEGMENT_SEQNUM TLVs.
    Sar,
}

/// Result of splitting a message: one payload per PDU plus the data_coding
/// value the caller must set on every resulting submit_sm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentationOutput {
    pub parts: Vec<Vec<u8>>,
    pub data_coding: u8,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SegmentationError {
    #[error("character {0:?} has no GSM 03.38 representation and fallback was disabled")]
    Unencodable(char),
}

const UDH_LEN: usize = 6;

// GSM 03.38 default alphabet: char -> septet value.
fn basic_septet(c: char) -> Option<u8> {
    Some(match c {
        '@' => 0x00,
        '£' => 0x01,
        '$' => 0x02,
        '¥' => 0x03,
        'è' => 0x04,
        'é' => 0x05,
        'ù' => 0x06,
        'ì' => 0x07,
        'ò' => 0x08,
        'Ç' => 0x09,
        '\n' => 0x0A,
        'Ø' => 0x0B,
        'ø' => 0x0C,
        '\r' => 0x0D,
        'Å' => 0x0E,
        'å' => 0x0F,
        'Δ' => 0x10,
        '_' => 0x11,
        'Φ' => 0x12,
        'Γ' => 0x13,
        'Λ' => 0x14,
        'Ω' => 0x15,
        'Π' => 0x16,
        'Ψ' => 0x17,
        'Σ' => 0x18,
        'Θ' => 0x19,
        'Ξ' => 0x1A,
        // 0x1B is the escape-to-extension-table marker, not a printable char.
        'Æ' => 0x1C,
        'æ' => 0x1D,
        'ß' => 0x1E,
        'É' => 0x1F,
        ' ' => 0x20,
        '!' => 0x21,
        '"' => 0x22,
        '#' => 0x23,
        '¤' => 0x24,
        '%' => 0x25,
        '&' => 0x26,
        '\'' => 0x27,
        '(' => 0x28,
        ')' => 0x29,
        '*' => 0x2A,
        '+' => 0x2B,
        ',' => 0x2C,
        '-' => 0x2D,
        '.' => 0x2E,
        '/' => 0x2F,
        '0'..='9' => 0x30 + (c as u8 - b'0'),
        ':' => 0x3A,
        ';' => 0x3B,
        '<' => 0x3C,
        '=' => 0x3D,
        '>' => 0x3E,
        '?' => 0x3F,
        '¡' => 0x40,
        'A'..='Z' => 0x41 + (c as u8 - b'A'),
        'Ä' => 0x5B,
        'Ö' => 0x5C,
        'Ñ' => 0x5D,
        'Ü' => 0x5E,
        '§' => 0x5F,
        '¿' => 0x60,
        'a'..='z' => 0x61 + (c as u8 - b'a'),
        'ä' => 0x7B,
        'ö' => 0x7C,
        'ñ' => 0x7D,
        'ü' => 0x7E,
        'à' => 0x7F,
        _ => return None,
    })
}

// Extension table: char -> septet emitted after the ESC (0x1B) septet.
fn extension_septet(c: char) -> Option<u8> {
    Some(match c {
        '\x0C' => 0x0A,
        '^' => 0x14,
        '{' => 0x28,
        '}' => 0x29,
        '\\' => 0x2F,
        '[' => 0x3C,
        '~' => 0x3D,
        ']' => 0x3E,
        '|' => 0x40,
        '€' => 0x65,
        _ => return None,
    })
}

/// Encodes `text` as a sequence of GSM 03.38 septet values (not yet packed
/// into octets). Extension-table characters contribute two septets
/// (ESC, ext) that must never be split across a segment boundary.
fn gsm7_septets(text: &str) -> Option<Vec<u8>> {
    let mut septets = Vec::with_capacity(text.len());
    for c in text.chars() {
        if let Some(s) = basic_septet(c) {
            septets.push(s);
        } else if let Some(s) = extension_septet(c) {
            septets.push(0x1B);
            septets.push(s);
        } else {
            return None;
        }
    }
    Some(septets)
}

/// Packs 7-bit septet values into 8-bit octets per GSM 03.38 §6.1.2.1.
fn pack_septets(septets: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity((septets.len() * 7).div_ceil(8));
    let mut acc: u16 = 0;
    let mut bits = 0u32;
    for &s in septets {
        acc |= (s as u16 & 0x7F) << bits;
        bits += 7;
        if bits >= 8 {
            out.push((acc & 0xFF) as u8);
            acc >>= 8;
            bits -= 8;
        }
    }
    if bits > 0 {
        out.push((acc & 0xFF) as u8);
    }
    out
}

fn ucs2_bytes(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}

/// Splits `text` into one or more short_message payloads sized for the
/// SMPP PDU body, choosing UDH or SAR-style concatenation as requested.
///
/// If `encoding` is `Gsm7Bit` but `text` contains a character outside the
/// default and extension alphabets, the engine falls back to `Ucs2` rather
/// than erroring; `SegmentationOutput::data_coding` reflects the encoding
/// actually used.
pub fn split_message(text: &str, encoding: EncodingType, mode: SplitMode) -> SegmentationOutput {
    match encoding {
        EncodingType::Gsm7Bit => match gsm7_septets(text) {
            Some(septets) => split_gsm7(&septets, mode),
            None => {
                tracing::trace!("text has no GSM 03.38 representation, falling back to UCS-2");
                split_ucs2(text, mode)
            }
        },
        EncodingType::Ucs2 => split_ucs2(text, mode),
    }
}

fn split_gsm7(septets: &[u8], mode: SplitMode) -> SegmentationOutput {
    const SINGLE_LIMIT: usize = 160;
    const SPLIT_LIMIT: usize = 153;

    if septets.len() <= SINGLE_LIMIT {
        return SegmentationOutput {
            parts: vec![pack_septets(septets)],
            data_coding: 0x00,
        };
    }

    let chunks = chunk_septets(septets, SPLIT_LIMIT);
    let total = chunks.len() as u8;
    let reference = 0u8;
    let parts = chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let packed = pack_septets(chunk);
            match mode {
                SplitMode::Sar => packed,
                SplitMode::Udh => {
                    let mut part = Vec::with_capacity(UDH_LEN + packed.len());
                    part.extend_from_slice(&[0x05, 0x00, 0x03, reference, total, (i + 1) as u8]);
                    part.extend_from_slice(&packed);
                    part
                }
            }
        })
        .collect();

    SegmentationOutput {
        parts,
        data_coding: 0x00,
    }
}

/// Splits septets into chunks of at most `limit` septets each, never
/// separating an extension-table (ESC, ext) pair across a chunk boundary.
fn chunk_septets(septets: &[u8], limit: usize) -> Vec<&[u8]> {
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < septets.len() {
        let mut end = (start + limit).min(septets.len());
        if end < septets.len() && septets[end - 1] == 0x1B {
            end -= 1;
        }
        chunks.push(&septets[start..end]);
        start = end;
    }
    if chunks.is_empty() {
        chunks.push(&septets[0..0]);
    }
    chunks
}

fn split_ucs2(text: &str, mode: SplitMode) -> SegmentationOutput {
    const SINGLE_LIMIT: usize = 140;
    const SPLIT_LIMIT: usize = 134;

    let units: Vec<u16> = text.encode_utf16().collect();
    let bytes = ucs2_bytes(text);

    if bytes.len() <= SINGLE_LIMIT {
        return SegmentationOutput {
            parts: vec![bytes],
            data_coding: 0x08,
        };
    }

    let units_per_part = SPLIT_LIMIT / 2;
    let chunks: Vec<&[u16]> = units.chunks(units_per_part).collect();
    let total = chunks.len() as u8;
    let reference = 0u8;

    let parts = chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let mut payload = Vec::with_capacity(chunk.len() * 2);
            for unit in chunk {
                payload.extend_from_slice(&unit.to_be_bytes());
            }
            match mode {
                SplitMode::Sar => payload,
                SplitMode::Udh => {
                    let mut part = Vec::with_capacity(UDH_LEN + payload.len());
                    part.extend_from_slice(&[0x05, 0x00, 0x03, reference, total, (i + 1) as u8]);
                    part.extend_from_slice(&payload);
                    part
                }
            }
        })
        .collect();

    SegmentationOutput {
        parts,
        data_coding: 0x08,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_fits_single_segment_gsm7() {
        let out = split_message("hello world", EncodingType::Gsm7Bit, SplitMode::Udh);
        assert_eq!(out.parts.len(), 1);
        assert_eq!(out.data_coding, 0x00);
    }

    #[test]
    fn empty_text_yields_one_empty_part() {
        let out = split_message("", EncodingType::Gsm7Bit, SplitMode::Udh);
        assert_eq!(out.parts, vec![Vec::<u8>::new()]);
        assert_eq!(out.data_coding, 0x00);
    }

    #[test]
    fn exact_single_segment_limit_not_split() {
        let text: String = "a".repeat(160);
        let out = split_message(&text, EncodingType::Gsm7Bit, SplitMode::Udh);
        assert_eq!(out.parts.len(), 1);
    }

    #[test]
    fn long_gsm7_message_splits_with_udh() {
        let text: String = "a".repeat(161);
        let out = split_message(&text, EncodingType::Gsm7Bit, SplitMode::Udh);
        assert_eq!(out.parts.len(), 2);
        for part in &out.parts {
            assert_eq!(&part[0..3], &[0x05, 0x00, 0x03]);
            assert_eq!(part[4], 2); // total segments
        }
    }

    #[test]
    fn long_gsm7_message_splits_with_sar_has_no_udh() {
        let text: String = "a".repeat(161);
        let out = split_message(&text, EncodingType::Gsm7Bit, SplitMode::Sar);
        assert_eq!(out.parts.len(), 2);
        // first part packs 153 septets = ceil(153*7/8) = 134 octets, no UDH prefix
        assert_eq!(out.parts[0].len(), (153 * 7_usize).div_ceil(8));
    }

    #[test]
    fn non_gsm7_char_falls_back_to_ucs2() {
        let out = split_message("héllo 日本語", EncodingType::Gsm7Bit, SplitMode::Udh);
        assert_eq!(out.data_coding, 0x08);
    }

    #[test]
    fn ucs2_single_segment() {
        let out = split_message("日本語", EncodingType::Ucs2, SplitMode::Sar);
        assert_eq!(out.parts.len(), 1);
        assert_eq!(out.data_coding, 0x08);
        assert_eq!(out.parts[0].len(), 6);
    }

    #[test]
    fn ucs2_long_message_splits() {
        let text: String = "日".repeat(71);
        let out = split_message(&text, EncodingType::Ucs2, SplitMode::Udh);
        assert!(out.parts.len() >= 2);
        for part in &out.parts {
            assert_eq!(&part[0..3], &[0x05, 0x00, 0x03]);
        }
    }

    #[test]
    fn extension_table_pair_not_split_across_segments() {
        // Build text whose 153rd/154th septet boundary lands mid extension pair.
        let mut text = "a".repeat(152);
        text.push('{'); // extension char: ESC + septet, 2 septets
        text.push_str(&"b".repeat(20));
        let out = split_message(&text, EncodingType::Gsm7Bit, SplitMode::Sar);
        assert!(out.parts.len() >= 2);
        // first chunk must not end with a lone ESC byte
        let septets = gsm7_septets(&text).unwrap();
        let chunks = chunk_septets(&septets, 153);
        assert_ne!(*chunks[0].last().unwrap(), 0x1B);
    }
}
