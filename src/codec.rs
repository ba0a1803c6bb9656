// SMPP v3.4 Codec - Separates parsing/encoding logic from domain models
//
// This module provides a clean separation between the wire format (codec)
// and the domain models (PDUs). Each PDU implements Encodable/Decodable traits
// rather than having all parsing logic in a monolithic frame parser.

use crate::datatypes::{CommandId, CommandStatus};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::collections::HashMap;
use std::io::Cursor;
use thiserror::Error;

// Frame and registry types are defined in this file

/// Maximum allowed PDU size to prevent memory exhaustion attacks
pub const MAX_PDU_SIZE: u32 = 65536; // 64KB

/// SMPP v3.4 PDU Header (16 bytes, common to all PDUs)
#[derive(Debug, Clone, PartialEq)]
pub struct PduHeader {
    pub command_length: u32,
    pub command_id: CommandId,
    pub command_status: CommandStatus,
    pub sequence_number: u32,
}

impl PduHeader {
    pub const SIZE: usize = 16;

    /// Decode PDU header from buffer with validation
    pub fn decode(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        if buf.remaining() < Self::SIZE {
            return Err(CodecError::Incomplete);
        }

        let command_length = buf.get_u32();
        let command_id_raw = buf.get_u32();
        let command_id = CommandId::try_from(command_id_raw)
            .map_err(|_| CodecError::InvalidCommandId(command_id_raw))?;
        let command_status_raw = buf.get_u32();
        let command_status = CommandStatus::try_from(command_status_raw)
            .map_err(|_| CodecError::InvalidCommandStatus(command_status_raw))?;
        let sequence_number = buf.get_u32();

        // Validate PDU size constraints
        if command_length < Self::SIZE as u32 {
            return Err(CodecError::InvalidPduLength {
                length: command_length,
                min: Self::SIZE as u32,
                max: MAX_PDU_SIZE,
            });
        }

        if command_length > MAX_PDU_SIZE {
            return Err(CodecError::InvalidPduLength {
                length: command_length,
                min: Self::SIZE as u32,
                max: MAX_PDU_SIZE,
            });
        }

        // Validate SMPP v3.4 rule: requests must have command_status = 0
        if !command_id.is_response() && command_status != CommandStatus::Ok {
            return Err(CodecError::InvalidRequestStatus {
                command_id,
                command_status,
            });
        }

        // Validate reserved sequence numbers
        if sequence_number == 0 || sequence_number == 0xFFFFFFFF {
            return Err(CodecError::ReservedSequenceNumber(sequence_number));
        }

        Ok(PduHeader {
            command_length,
            command_id,
            command_status,
            sequence_number,
        })
    }

    /// Encode PDU header to buffer
    pub fn encode(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        buf.put_u32(self.command_length);
        buf.put_u32(self.command_id as u32);
        buf.put_u32(self.command_status as u32);
        buf.put_u32(self.sequence_number);
        Ok(())
    }
}

/// Trait for types that can be encoded to bytes
pub trait Encodable {
    /// Encode this PDU to the buffer
    fn encode(&self, buf: &mut BytesMut) -> Result<(), CodecError>;

    /// Calculate the encoded size without actually encoding
    fn encoded_size(&self) -> usize {
        let mut buf = BytesMut::new();
        self.encode(&mut buf).map(|_| buf.len()).unwrap_or(0)
    }

    /// Convert this PDU to bytes (convenience method)
    ///
    /// This is a default implementation that creates a buffer, encodes into it,
    /// fixes the command_length field, and returns the frozen bytes. This replaces the legacy ToBytes trait.
    fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::new();
        self.encode(&mut buf)
            .expect("Encoding should not fail for valid PDU");

        // Fix the command_length field in the header (first 4 bytes)
        if buf.len() >= 4 {
            let length = buf.len() as u32;
            buf[0..4].copy_from_slice(&length.to_be_bytes());
        }

        buf.freeze()
    }
}

/// Trait for types that can be decoded from bytes
pub trait Decodable: Sized {
    /// Decode this PDU from the buffer after header
    fn decode(header: PduHeader, buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError>;

    /// Return the expected command_id for this PDU type
    fn command_id() -> CommandId;

    /// Validate the header is appropriate for this PDU type
    fn validate_header(header: &PduHeader) -> Result<(), CodecError> {
        if header.command_id != Self::command_id() {
            return Err(CodecError::UnexpectedCommandId {
                expected: Self::command_id(),
                actual: header.command_id,
            });
        }
        Ok(())
    }
}

/// Codec errors with detailed context for debugging
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Incomplete PDU: need more data")]
    Incomplete,

    #[error("Invalid command_id: {0:#x}")]
    InvalidCommandId(u32),

    #[error("Invalid command_status: {0:#x}")]
    InvalidCommandStatus(u32),

    #[error("Invalid PDU length: {length}, must be {min}-{max}")]
    InvalidPduLength { length: u32, min: u32, max: u32 },

    #[error("Request PDU {command_id:?} has non-zero status: {command_status:?}")]
    InvalidRequestStatus {
        command_id: CommandId,
        command_status: CommandStatus,
    },

    #[error("Reserved sequence number: {0} (0 and 0xFFFFFFFF are reserved)")]
    ReservedSequenceNumber(u32),

    #[error("Unexpected command_id: expected {expected:?}, got {actual:?}")]
    UnexpectedCommandId {
        expected: CommandId,
        actual: CommandId,
    },

    #[error("Field '{field}' validation failed: {reason}")]
    FieldValidation { field: &'static str, reason: String },

    #[error("TLV parsing error: {0}")]
    TlvError(String),

    #[error("UTF-8 decoding error in field '{field}': {source}")]
    Utf8Error {
        field: &'static str,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A C-Octet-String field had no null terminator within its declared cap.
    #[error("field '{field}' (offset {offset}): no null terminator within {max} octets")]
    TruncatedField {
        field: &'static str,
        offset: usize,
        max: usize,
    },

    /// A value supplied to an encoder exceeded the field's maximum wire length.
    #[error("field '{field}': value of {actual} octets exceeds maximum of {max}")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    /// A TLV's declared length would read past the end of the PDU body.
    #[error("TLV tag {tag:#06x} (offset {offset}): declared length {declared} exceeds {remaining} remaining body bytes")]
    MalformedTlv {
        tag: u16,
        offset: usize,
        declared: usize,
        remaining: usize,
    },

    /// sm_length disagreed with the actual short_message byte count.
    #[error("field '{field}': sm_length {declared} does not match {actual} actual octets")]
    LengthMismatch {
        field: &'static str,
        declared: usize,
        actual: usize,
    },

    /// The segmentation engine could not represent a character in the pinned encoding.
    #[error("segmentation error: {0}")]
    EncodingError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandId {
    /// Check if this command_id represents a response PDU
    pub fn is_response(&self) -> bool {
        (*self as u32) & 0x8000_0000 != 0
    }
}

/// Convert codec errors to appropriate SMPP command_status codes
impl CodecError {
    pub fn to_command_status(&self) -> CommandStatus {
        match self {
            CodecError::InvalidPduLength { .. } => CommandStatus::InvalidCommandLength,
            CodecError::InvalidCommandId(_) => CommandStatus::InvalidCommandId,
            CodecError::FieldValidation { field, .. } => {
                // Map specific field errors to appropriate status codes
                match *field {
                    "source_addr" | "destination_addr" => CommandStatus::InvalidSourceAddress,
                    "short_message" => CommandStatus::InvalidMsgLength,
                    _ => CommandStatus::SystemError,
                }
            }
            CodecError::TlvError(_) => CommandStatus::SystemError, // Could add specific TLV error code
            _ => CommandStatus::SystemError,
        }
    }
}

/// Utility functions for decoding common SMPP field types
///
/// A C-Octet-String is variable length on the wire: content bytes followed by
/// a single `0x00` terminator, never padded. `max_len` is the field's cap
/// *including* that terminator (e.g. system_id's cap of 16 permits up to 15
/// content bytes). The cursor only advances past the terminator actually
/// found; it never consumes a fixed `max_len` window.
pub fn decode_cstring(
    buf: &mut Cursor<&[u8]>,
    max_len: usize,
    field_name: &'static str,
) -> Result<String, CodecError> {
    let offset = buf.position() as usize;
    let data = buf.get_ref();
    let available = data.len().saturating_sub(offset);
    let scan_len = available.min(max_len);
    let window = &data[offset..offset + scan_len];

    match window.iter().position(|&b| b == 0) {
        Some(terminator_idx) => {
            let content = String::from_utf8(window[..terminator_idx].to_vec()).map_err(|e| {
                CodecError::Utf8Error {
                    field: field_name,
                    source: e,
                }
            })?;
            buf.advance(terminator_idx + 1);
            Ok(content)
        }
        None if available < max_len => Err(CodecError::Incomplete),
        None => Err(CodecError::TruncatedField {
            field: field_name,
            offset,
            max: max_len,
        }),
    }
}

/// Validates that a caller-declared length field (e.g. `sm_length`) does not
/// claim more bytes than the PDU's own `command_length` leaves in the body
/// from the cursor's current position.
pub fn check_declared_length(
    header: &PduHeader,
    buf: &Cursor<&[u8]>,
    declared_len: usize,
    field_name: &'static str,
) -> Result<(), CodecError> {
    let body_remaining = (header.command_length as usize).saturating_sub(buf.position() as usize);
    if declared_len > body_remaining {
        return Err(CodecError::LengthMismatch {
            field: field_name,
            declared: declared_len,
            actual: body_remaining,
        });
    }
    Ok(())
}

/// Decode a single byte
pub fn decode_u8(buf: &mut Cursor<&[u8]>) -> Result<u8, CodecError> {
    if buf.remaining() < 1 {
        return Err(CodecError::Incomplete);
    }
    Ok(buf.get_u8())
}

/// Decode a 16-bit big-endian integer
pub fn decode_u16(buf: &mut Cursor<&[u8]>) -> Result<u16, CodecError> {
    if buf.remaining() < 2 {
        return Err(CodecError::Incomplete);
    }
    Ok(buf.get_u16())
}

/// Decode a 32-bit big-endian integer
pub fn decode_u32(buf: &mut Cursor<&[u8]>) -> Result<u32, CodecError> {
    if buf.remaining() < 4 {
        return Err(CodecError::Incomplete);
    }
    Ok(buf.get_u32())
}

/// Peek at next 4 bytes without advancing cursor (for command_length)
pub fn peek_u32(buf: &mut Cursor<&[u8]>) -> Result<u32, CodecError> {
    if buf.remaining() < 4 {
        return Err(CodecError::Incomplete);
    }

    let pos = buf.position();
    let value = buf.get_u32();
    buf.set_position(pos); // Reset position
    Ok(value)
}

/// Utility functions for encoding common SMPP field types
///
/// Writes `value` followed by a single `0x00` terminator — no fixed-width
/// padding. `max_len` is the field's cap including that terminator; a value
/// whose content would not leave room for the terminator is rejected with
/// `FieldTooLong` rather than silently truncated.
pub fn encode_cstring(
    buf: &mut BytesMut,
    value: &str,
    max_len: usize,
    field_name: &'static str,
) -> Result<(), CodecError> {
    let bytes = value.as_bytes();
    if bytes.len() > max_len - 1 {
        return Err(CodecError::FieldTooLong {
            field: field_name,
            actual: bytes.len(),
            max: max_len - 1,
        });
    }

    buf.put_slice(bytes);
    buf.put_u8(0);
    Ok(())
}

/// Encode a single byte
pub fn encode_u8(buf: &mut BytesMut, value: u8) {
    buf.put_u8(value);
}

/// Encode a 16-bit big-endian integer
pub fn encode_u16(buf: &mut BytesMut, value: u16) {
    buf.put_u16(value);
}

/// Encode a 32-bit big-endian integer
pub fn encode_u32(buf: &mut BytesMut, value: u32) {
    buf.put_u32(value);
}

/// Generic frame type that can hold any PDU
#[derive(Debug)]
pub enum Frame {
    // Keep-alive PDUs
    EnquireLink(crate::datatypes::EnquireLink),
    EnquireLinkResp(crate::datatypes::EnquireLinkResponse),

    // Session management PDUs
    Unbind(crate::datatypes::Unbind),
    UnbindResp(crate::datatypes::UnbindResponse),

    // Bind PDUs
    BindReceiver(crate::datatypes::BindReceiver),
    BindReceiverResp(crate::datatypes::BindReceiverResponse),
    BindTransceiver(crate::datatypes::BindTransceiver),
    BindTransceiverResp(crate::datatypes::BindTransceiverResponse),
    BindTransmitter(crate::datatypes::BindTransmitter),
    BindTransmitterResp(crate::datatypes::BindTransmitterResponse),

    // Message PDUs
    SubmitSm(Box<crate::datatypes::SubmitSm>),
    SubmitSmResp(crate::datatypes::SubmitSmResponse),
    SubmitMulti(Box<crate::datatypes::SubmitMulti>),
    SubmitMultiResp(crate::datatypes::SubmitMultiResponse),
    QuerySm(crate::datatypes::QuerySm),
    QuerySmResp(crate::datatypes::QuerySmResponse),
    ReplaceSm(Box<crate::datatypes::ReplaceSm>),
    ReplaceSmResp(crate::datatypes::ReplaceSmResponse),
    CancelSm(crate::datatypes::CancelSm),
    CancelSmResp(crate::datatypes::CancelSmResponse),
    DataSm(Box<crate::datatypes::DataSm>),
    DataSmResp(crate::datatypes::DataSmResponse),
    DeliverSm(Box<crate::datatypes::DeliverSm>),
    DeliverSmResp(crate::datatypes::DeliverSmResponse),

    // Broadcast PDUs (SMPP v5.0)
    BroadcastSm(Box<crate::datatypes::BroadcastSm>),
    BroadcastSmResp(crate::datatypes::BroadcastSmResponse),
    QueryBroadcastSm(crate::datatypes::QueryBroadcastSm),
    QueryBroadcastSmResp(crate::datatypes::QueryBroadcastSmResponse),
    CancelBroadcastSm(crate::datatypes::CancelBroadcastSm),
    CancelBroadcastSmResp(crate::datatypes::CancelBroadcastSmResponse),

    // Notification PDUs
    AlertNotification(crate::datatypes::AlertNotification),

    // Special PDUs
    GenericNack(crate::datatypes::GenericNack),
    Outbind(crate::datatypes::Outbind),

    // For unknown PDUs (forward compatibility)
    Unknown { header: PduHeader, body: Bytes },
}

/// Registry of PDU decoders for extensible parsing
type DecoderFn =
    Box<dyn Fn(PduHeader, &mut Cursor<&[u8]>) -> Result<Frame, CodecError> + Send + Sync>;

pub struct PduRegistry {
    decoders: HashMap<CommandId, DecoderFn>,
}

impl PduRegistry {
    /// Create a new registry with standard SMPP v3.4 PDUs registered
    pub fn new() -> Self {
        let mut registry = Self {
            decoders: HashMap::new(),
        };

        // Register simple PDUs
        registry.register_pdu::<crate::datatypes::EnquireLink, _>(Frame::EnquireLink);
        registry.register_pdu::<crate::datatypes::EnquireLinkResponse, _>(Frame::EnquireLinkResp);
        registry.register_pdu::<crate::datatypes::Unbind, _>(Frame::Unbind);
        registry.register_pdu::<crate::datatypes::UnbindResponse, _>(Frame::UnbindResp);
        registry.register_pdu::<crate::datatypes::GenericNack, _>(Frame::GenericNack);
        registry.register_pdu::<crate::datatypes::Outbind, _>(Frame::Outbind);

        // Register bind PDUs
        registry.register_pdu::<crate::datatypes::BindReceiver, _>(Frame::BindReceiver);
        registry.register_pdu::<crate::datatypes::BindReceiverResponse, _>(Frame::BindReceiverResp);
        registry.register_pdu::<crate::datatypes::BindTransceiver, _>(Frame::BindTransceiver);
        registry
            .register_pdu::<crate::datatypes::BindTransceiverResponse, _>(Frame::BindTransceiverResp);
        registry.register_pdu::<crate::datatypes::BindTransmitter, _>(Frame::BindTransmitter);
        registry
            .register_pdu::<crate::datatypes::BindTransmitterResponse, _>(Frame::BindTransmitterResp);

        // Register message PDUs (boxed for large structs)
        registry.register_boxed_pdu::<crate::datatypes::SubmitSm, _>(|pdu| {
            Frame::SubmitSm(Box::new(pdu))
        });
        registry.register_pdu::<crate::datatypes::SubmitSmResponse, _>(Frame::SubmitSmResp);

        // Register submit_multi PDUs
        registry.register_boxed_pdu::<crate::datatypes::SubmitMulti, _>(|pdu| {
            Frame::SubmitMulti(Box::new(pdu))
        });
        registry.register_pdu::<crate::datatypes::SubmitMultiResponse, _>(Frame::SubmitMultiResp);

        // Register query PDUs
        registry.register_pdu::<crate::datatypes::QuerySm, _>(Frame::QuerySm);
        registry.register_pdu::<crate::datatypes::QuerySmResponse, _>(Frame::QuerySmResp);

        // Register replace PDUs
        registry.register_boxed_pdu::<crate::datatypes::ReplaceSm, _>(|pdu| {
            Frame::ReplaceSm(Box::new(pdu))
        });
        registry.register_pdu::<crate::datatypes::ReplaceSmResponse, _>(Frame::ReplaceSmResp);

        // Register cancel PDUs
        registry.register_pdu::<crate::datatypes::CancelSm, _>(Frame::CancelSm);
        registry.register_pdu::<crate::datatypes::CancelSmResponse, _>(Frame::CancelSmResp);

        // Register data_sm PDUs
        registry.register_boxed_pdu::<crate::datatypes::DataSm, _>(|pdu| {
            Frame::DataSm(Box::new(pdu))
        });
        registry.register_pdu::<crate::datatypes::DataSmResponse, _>(Frame::DataSmResp);

        // Register deliver_sm PDUs (boxed for large structs)
        registry.register_boxed_pdu::<crate::datatypes::DeliverSm, _>(|pdu| {
            Frame::DeliverSm(Box::new(pdu))
        });
        registry.register_pdu::<crate::datatypes::DeliverSmResponse, _>(Frame::DeliverSmResp);

        // Register broadcast PDUs (SMPP v5.0)
        registry.register_boxed_pdu::<crate::datatypes::BroadcastSm, _>(|pdu| {
            Frame::BroadcastSm(Box::new(pdu))
        });
        registry.register_pdu::<crate::datatypes::BroadcastSmResponse, _>(Frame::BroadcastSmResp);
        registry.register_pdu::<crate::datatypes::QueryBroadcastSm, _>(Frame::QueryBroadcastSm);
        registry.register_pdu::<crate::datatypes::QueryBroadcastSmResponse, _>(
            Frame::QueryBroadcastSmResp,
        );
        registry.register_pdu::<crate::datatypes::CancelBroadcastSm, _>(Frame::CancelBroadcastSm);
        registry.register_pdu::<crate::datatypes::CancelBroadcastSmResponse, _>(
            Frame::CancelBroadcastSmResp,
        );

        // Register notification PDUs
        registry.register_pdu::<crate::datatypes::AlertNotification, _>(Frame::AlertNotification);

        registry
    }

    /// Register a simple PDU type (no boxing required)
    fn register_pdu<T, F>(&mut self, frame_constructor: F)
    where
        T: Decodable + 'static,
        F: Fn(T) -> Frame + Send + Sync + 'static,
    {
        let command_id = T::command_id();
        let decoder = Box::new(move |header: PduHeader, buf: &mut Cursor<&[u8]>| {
            let pdu = T::decode(header, buf)?;
            Ok(frame_constructor(pdu))
        });
        self.decoders.insert(command_id, decoder);
    }

    /// Register a PDU type that should be boxed
    fn register_boxed_pdu<T, F>(&mut self, frame_constructor: F)
    where
        T: Decodable + 'static,
        F: Fn(T) -> Frame + Send + Sync + 'static,
    {
        let command_id = T::command_id();
        let decoder = Box::new(move |header: PduHeader, buf: &mut Cursor<&[u8]>| {
            let pdu = T::decode(header, buf)?;
            Ok(frame_constructor(pdu))
        });
        self.decoders.insert(command_id, decoder);
    }

    /// Decode a PDU given its header and body
    pub fn decode_pdu(
        &self,
        header: PduHeader,
        buf: &mut Cursor<&[u8]>,
    ) -> Result<Frame, CodecError> {
        match self.decoders.get(&header.command_id) {
            Some(decoder) => decoder(header, buf),
            None => {
                // Handle unknown PDU gracefully for forward compatibility
                let body_size = header.command_length as usize - PduHeader::SIZE;
                if buf.remaining() < body_size {
                    return Err(CodecError::Incomplete);
                }

                let body = buf.copy_to_bytes(body_size);
                tracing::warn!(
                    "Unknown PDU command_id: {:#x}, treating as opaque data",
                    header.command_id as u32
                );

                Ok(Frame::Unknown { header, body })
            }
        }
    }

    /// Check if a command_id is registered
    pub fn is_registered(&self, command_id: CommandId) -> bool {
        self.decoders.contains_key(&command_id)
    }

    /// Get all registered command_ids
    pub fn registered_commands(&self) -> Vec<CommandId> {
        self.decoders.keys().copied().collect()
    }
}

impl Default for PduRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// Get the command_id for this frame
    pub fn command_id(&self) -> CommandId {
        match self {
            Frame::EnquireLink(_) => CommandId::EnquireLink,
            Frame::EnquireLinkResp(_) => CommandId::EnquireLinkResp,
            Frame::Unbind(_) => CommandId::Unbind,
            Frame::UnbindResp(_) => CommandId::UnbindResp,
            Frame::BindReceiver(_) => CommandId::BindReceiver,
            Frame::BindReceiverResp(_) => CommandId::BindReceiverResp,
            Frame::BindTransceiver(_) => CommandId::BindTransceiver,
            Frame::BindTransceiverResp(_) => CommandId::BindTransceiverResp,
            Frame::BindTransmitter(_) => CommandId::BindTransmitter,
            Frame::BindTransmitterResp(_) => CommandId::BindTransmitterResp,
            Frame::SubmitSm(_) => CommandId::SubmitSm,
            Frame::SubmitSmResp(_) => CommandId::SubmitSmResp,
            Frame::SubmitMulti(_) => CommandId::SubmitMulti,
            Frame::SubmitMultiResp(_) => CommandId::SubmitMultiResp,
            Frame::QuerySm(_) => CommandId::QuerySm,
            Frame::QuerySmResp(_) => CommandId::QuerySmResp,
            Frame::ReplaceSm(_) => CommandId::ReplaceSm,
            Frame::ReplaceSmResp(_) => CommandId::ReplaceSmResp,
            Frame::CancelSm(_) => CommandId::CancelSm,
            Frame::CancelSmResp(_) => CommandId::CancelSmResp,
            Frame::DataSm(_) => CommandId::DataSm,
            Frame::DataSmResp(_) => CommandId::DataSmResp,
            Frame::DeliverSm(_) => CommandId::DeliverSm,
            Frame::DeliverSmResp(_) => CommandId::DeliverSmResp,
            Frame::BroadcastSm(_) => CommandId::BroadcastSm,
            Frame::BroadcastSmResp(_) => CommandId::BroadcastSmResp,
            Frame::QueryBroadcastSm(_) => CommandId::QueryBroadcastSm,
            Frame::QueryBroadcastSmResp(_) => CommandId::QueryBroadcastSmResp,
            Frame::CancelBroadcastSm(_) => CommandId::CancelBroadcastSm,
            Frame::CancelBroadcastSmResp(_) => CommandId::CancelBroadcastSmResp,
            Frame::AlertNotification(_) => CommandId::AlertNotification,
            Frame::GenericNack(_) => CommandId::GenericNack,
            Frame::Outbind(_) => CommandId::Outbind,
            Frame::Unknown { header, .. } => header.command_id,
        }
    }

    /// Get the sequence number for this frame
    pub fn sequence_number(&self) -> u32 {
        match self {
            Frame::EnquireLink(pdu) => pdu.sequence_number,
            Frame::EnquireLinkResp(pdu) => pdu.sequence_number,
            Frame::Unbind(pdu) => pdu.sequence_number,
            Frame::UnbindResp(pdu) => pdu.sequence_number,
            Frame::BindReceiver(pdu) => pdu.sequence_number,
            Frame::BindReceiverResp(pdu) => pdu.sequence_number,
            Frame::BindTransceiver(pdu) => pdu.sequence_number,
            Frame::BindTransceiverResp(pdu) => pdu.sequence_number,
            Frame::BindTransmitter(pdu) => pdu.sequence_number,
            Frame::BindTransmitterResp(pdu) => pdu.sequence_number,
            Frame::SubmitSm(pdu) => pdu.sequence_number,
            Frame::SubmitSmResp(pdu) => pdu.sequence_number,
            Frame::SubmitMulti(pdu) => pdu.sequence_number,
            Frame::SubmitMultiResp(pdu) => pdu.sequence_number,
            Frame::QuerySm(pdu) => pdu.sequence_number,
            Frame::QuerySmResp(pdu) => pdu.sequence_number,
            Frame::ReplaceSm(pdu) => pdu.sequence_number,
            Frame::ReplaceSmResp(pdu) => pdu.sequence_number,
            Frame::CancelSm(pdu) => pdu.sequence_number,
            Frame::CancelSmResp(pdu) => pdu.sequence_number,
            Frame::DataSm(pdu) => pdu.sequence_number,
            Frame::DataSmResp(pdu) => pdu.sequence_number,
            Frame::DeliverSm(pdu) => pdu.sequence_number,
            Frame::DeliverSmResp(pdu) => pdu.sequence_number,
            Frame::BroadcastSm(pdu) => pdu.sequence_number,
            Frame::BroadcastSmResp(pdu) => pdu.sequence_number,
            Frame::QueryBroadcastSm(pdu) => pdu.sequence_number,
            Frame::QueryBroadcastSmResp(pdu) => pdu.sequence_number,
            Frame::CancelBroadcastSm(pdu) => pdu.sequence_number,
            Frame::CancelBroadcastSmResp(pdu) => pdu.sequence_number,
            Frame::AlertNotification(pdu) => pdu.sequence_number,
            Frame::GenericNack(pdu) => pdu.sequence_number,
            Frame::Outbind(pdu) => pdu.sequence_number,
            Frame::Unknown { header, .. } => header.sequence_number,
        }
    }

    /// Check if this frame is a response PDU
    pub fn is_response(&self) -> bool {
        self.command_id().is_response()
    }

    /// Decode a complete PDU (header + body) from a buffer using the default registry.
    pub fn parse(buf: &mut Cursor<&[u8]>) -> Result<Frame, CodecError> {
        let registry = PduRegistry::new();
        let header = PduHeader::decode(buf)?;
        registry.decode_pdu(header, buf)
    }
}
