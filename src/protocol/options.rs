//! Executor options encoding
//!
//! LayerZero V2 OApps attach "type 3" options to outgoing messages telling the
//! executor how much gas (and native value) to use when delivering them. The
//! encoding is a `0x0003` header followed by one record per option:
//!
//! ```text
//! workerId (u8 = 1) | length (u16) | optionType (u8) | payload
//! ```
//!
//! where `length` covers the option type byte plus the payload.
//!
//! Reference: <https://docs.layerzero.network/v2/developers/evm/protocol-gas-settings/options>

use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

/// Options format version header
pub const OPTIONS_TYPE_3: u16 = 3;

/// Worker id of the executor
pub const EXECUTOR_WORKER_ID: u8 = 1;

pub const OPTION_TYPE_LZRECEIVE: u8 = 1;
pub const OPTION_TYPE_COMPOSE: u8 = 3;
pub const OPTION_TYPE_ORDERED_EXECUTION: u8 = 4;

/// A single executor option
///
/// Serialized externally tagged, e.g. `{"lzReceive": {"gas": 200000}}` or
/// `"ordered"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExecutorOption {
    /// Gas and msg.value for the `lzReceive` call on the destination
    LzReceive {
        gas: u128,
        #[serde(default)]
        value: u128,
    },
    /// Gas and msg.value for the `lzCompose` call at `index`
    Compose {
        index: u16,
        gas: u128,
        #[serde(default)]
        value: u128,
    },
    /// Request ordered nonce execution
    Ordered,
}

impl ExecutorOption {
    #[inline]
    pub const fn option_type(&self) -> u8 {
        match self {
            Self::LzReceive { .. } => OPTION_TYPE_LZRECEIVE,
            Self::Compose { .. } => OPTION_TYPE_COMPOSE,
            Self::Ordered => OPTION_TYPE_ORDERED_EXECUTION,
        }
    }

    /// Packed payload following the option type byte.
    ///
    /// A zero `value` is omitted from the payload.
    pub fn payload(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(34);
        match *self {
            Self::LzReceive { gas, value } => {
                out.extend_from_slice(&gas.to_be_bytes());
                if value != 0 {
                    out.extend_from_slice(&value.to_be_bytes());
                }
            }
            Self::Compose { index, gas, value } => {
                out.extend_from_slice(&index.to_be_bytes());
                out.extend_from_slice(&gas.to_be_bytes());
                if value != 0 {
                    out.extend_from_slice(&value.to_be_bytes());
                }
            }
            Self::Ordered => {}
        }
        out
    }
}

/// Encodes a list of executor options into a type 3 options blob
///
/// # Example
///
/// ```rust
/// use oapp_topology::{encode_options, ExecutorOption};
///
/// let options = encode_options(&[ExecutorOption::LzReceive { gas: 200_000, value: 0 }]);
/// assert_eq!(
///     options.to_string(),
///     "0x00030100110100000000000000000000000000030d40"
/// );
/// ```
pub fn encode_options<'a>(options: impl IntoIterator<Item = &'a ExecutorOption>) -> Bytes {
    let mut out = OPTIONS_TYPE_3.to_be_bytes().to_vec();

    for option in options {
        let payload = option.payload();
        // Payloads are at most 34 bytes
        let len = (payload.len() + 1) as u16;

        out.push(EXECUTOR_WORKER_ID);
        out.extend_from_slice(&len.to_be_bytes());
        out.push(option.option_type());
        out.extend_from_slice(&payload);
    }

    Bytes::from(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;

    #[test]
    fn test_empty_options_is_header_only() {
        let encoded = encode_options(&[] as &[ExecutorOption]);
        assert_eq!(&encoded[..], &[0x00, 0x03]);
    }

    #[test]
    fn test_lz_receive_without_value() {
        let encoded = encode_options(&[ExecutorOption::LzReceive {
            gas: 200_000,
            value: 0,
        }]);
        assert_eq!(
            hex::encode(&encoded),
            "00030100110100000000000000000000000000030d40"
        );
    }

    #[test]
    fn test_lz_receive_with_value() {
        let encoded = encode_options(&[ExecutorOption::LzReceive { gas: 1, value: 2 }]);
        // header + worker + len + type + gas + value
        assert_eq!(encoded.len(), 2 + 1 + 2 + 1 + 16 + 16);
        assert_eq!(&encoded[3..5], &[0x00, 0x21]);
        assert_eq!(encoded[5], OPTION_TYPE_LZRECEIVE);
        assert_eq!(encoded[21], 1);
        assert_eq!(encoded[37], 2);
    }

    #[test]
    fn test_compose_and_ordered() {
        let encoded = encode_options(&[
            ExecutorOption::Compose {
                index: 0,
                gas: 50_000,
                value: 0,
            },
            ExecutorOption::Ordered,
        ]);

        // compose record: 1 + 2 + 1 + 2 + 16
        assert_eq!(&encoded[2..6], &[EXECUTOR_WORKER_ID, 0x00, 0x13, OPTION_TYPE_COMPOSE]);
        // ordered record trails with an empty payload
        assert_eq!(
            &encoded[encoded.len() - 4..],
            &[EXECUTOR_WORKER_ID, 0x00, 0x01, OPTION_TYPE_ORDERED_EXECUTION]
        );
    }

    #[test]
    fn test_largest_payload_length_prefix() {
        let option = ExecutorOption::Compose {
            index: u16::MAX,
            gas: u128::MAX,
            value: u128::MAX,
        };
        assert_eq!(option.payload().len(), 34);

        let encoded = encode_options(&[option]);
        assert_eq!(&encoded[3..5], &[0x00, 0x23]);
        assert_eq!(encoded.len(), 2 + 1 + 2 + 1 + 34);
    }

    #[test]
    fn test_serde_shape() {
        let option: ExecutorOption = serde_json::from_str(r#"{"lzReceive":{"gas":65000}}"#).unwrap();
        assert_eq!(
            option,
            ExecutorOption::LzReceive {
                gas: 65_000,
                value: 0
            }
        );

        let ordered: ExecutorOption = serde_json::from_str(r#""ordered""#).unwrap();
        assert_eq!(ordered, ExecutorOption::Ordered);
    }
}
