//! Field-specific value encoding rules
//!
//! Most configuration values are hex-encoded bytes. A handful of tags carry
//! ASCII text or a packed bitmask instead; [`FieldRule::for_tag`] selects
//! the rule from the resolved tag.

use emvparam_core::{hex_to_bytes, EmvParamError, EmvParamResult};

use crate::tables::tags;

/// Byte placed after a left-justified ASCII value
pub const LEFT_JUSTIFY_PAD: u8 = 0x20;

/// Placement of an ASCII value inside a fixed-width field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    /// Value at the end of the field, `0x00` before it
    Right,
    /// Value at the start of the field, followed by [`LEFT_JUSTIFY_PAD`]
    Left,
}

/// How a field value string becomes value bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Hex-encoded bytes
    Hex,
    /// ASCII text placed in a fixed-width field
    AsciiFixed { width: usize, justify: Justify },
    /// ASCII text, length of the input
    AsciiVariable,
    /// Comma-separated transaction type codes packed into 2 bytes
    TransactionTypeMask,
}

impl FieldRule {
    /// Select the encoding rule for a resolved tag
    pub fn for_tag(tag: &str) -> Self {
        match tag {
            tags::MERCHANT_ID => FieldRule::AsciiFixed {
                width: 15,
                justify: Justify::Right,
            },
            tags::TERMINAL_ID | tags::IFD_SERIAL_NUMBER => FieldRule::AsciiFixed {
                width: 8,
                justify: Justify::Right,
            },
            tags::MERCHANT_NAME_LOCATION => FieldRule::AsciiVariable,
            tags::TRANSACTION_TYPE_GROUP => FieldRule::TransactionTypeMask,
            _ => FieldRule::Hex,
        }
    }

    /// Encode `value` for the field `name`
    pub fn encode(&self, name: &str, value: &str) -> EmvParamResult<Vec<u8>> {
        match *self {
            FieldRule::Hex => hex_to_bytes(value),
            FieldRule::AsciiFixed { width, justify } => fit_ascii(name, value.as_bytes(), width, justify),
            FieldRule::AsciiVariable => Ok(value.as_bytes().to_vec()),
            FieldRule::TransactionTypeMask => Ok(transaction_type_mask(value).to_be_bytes().to_vec()),
        }
    }
}

/// Place `input` into a field of exactly `width` bytes
///
/// Right-justified values are preceded by `0x00` bytes. Left-justified values
/// are followed by [`LEFT_JUSTIFY_PAD`] over `input.len()..width - input.len()`
/// only; any byte past that range stays `0x00`. Kernels configured from
/// existing parameter files expect this layout, so it is kept as is.
///
/// # Error Handling
/// Returns `FieldTooLong` if `input` is longer than `width`.
pub fn fit_ascii(name: &str, input: &[u8], width: usize, justify: Justify) -> EmvParamResult<Vec<u8>> {
    let len = input.len();
    if len > width {
        return Err(EmvParamError::FieldTooLong {
            field: name.to_string(),
            actual: len,
            max: width,
        });
    }

    let mut field = vec![0u8; width];
    match justify {
        Justify::Right => field[width - len..].copy_from_slice(input),
        Justify::Left => {
            field[..len].copy_from_slice(input);
            for byte in field.iter_mut().take(width.saturating_sub(len)).skip(len) {
                *byte = LEFT_JUSTIFY_PAD;
            }
        }
    }
    Ok(field)
}

/// Pack transaction type codes into a bitmask
///
/// `00` purchase → `0x01`, `01` cash → `0x02`, `09` cashback → `0x04`,
/// `20` refund → `0x08`. Unknown codes are ignored.
pub fn transaction_type_mask(codes: &str) -> u16 {
    codes
        .split(',')
        .map(|code| match code.trim() {
            "00" => 0x01,
            "01" => 0x02,
            "09" => 0x04,
            "20" => 0x08,
            _ => 0,
        })
        .fold(0u16, |mask, bit| mask | bit)
}
