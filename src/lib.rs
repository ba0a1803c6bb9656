//! Encode and decode SMPP (Short Message Peer-to-Peer) 3.4/5.0 protocol data units.
//!
//! This crate is a pure codec: it turns PDU values into wire bytes and back, and
//! splits long message text into multipart segments. It does not open sockets, bind
//! sessions, or manage sequence numbers — that belongs to whatever transport you
//! build on top.
//!
//! # Examples
//!
//! Encoding and decoding a `submit_sm`:
//!
//! ```rust
//! use smpp_codec::codec::{Decodable, Encodable, PduHeader};
//! use smpp_codec::datatypes::{SubmitSm, TypeOfNumber, NumericPlanIndicator};
//! use std::io::Cursor;
//!
//! let pdu = SubmitSm::builder()
//!     .sequence_number(1)
//!     .source_addr(TypeOfNumber::International, NumericPlanIndicator::Isdn, "123456")
//!     .unwrap()
//!     .destination_addr(TypeOfNumber::International, NumericPlanIndicator::Isdn, "9876543210")
//!     .unwrap()
//!     .short_message("Hello, World!")
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let bytes = pdu.to_bytes();
//! let mut cursor = Cursor::new(&bytes[..]);
//! let header = PduHeader::decode(&mut cursor).unwrap();
//! let decoded = SubmitSm::decode(header, &mut cursor).unwrap();
//! assert_eq!(decoded.short_message.as_bytes(), b"Hello, World!");
//! ```
//!
//! Splitting a long message across multiple `submit_sm` parts:
//!
//! ```rust
//! use smpp_codec::segmentation::{split_message, EncodingType, SplitMode};
//!
//! let long_text = "x".repeat(200);
//! let result = split_message(&long_text, EncodingType::Gsm7Bit, SplitMode::Udh);
//! assert!(result.parts.len() > 1);
//! ```

pub mod codec;
pub mod datatypes;
pub mod macros;
pub mod segmentation;

pub use codec::{CodecError, Decodable, Encodable, Frame, PduHeader, PduRegistry};
