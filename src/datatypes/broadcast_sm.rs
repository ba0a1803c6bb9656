// ABOUTME: SMPP v5.0 broadcast_sm PDU implementation for broadcast messaging
// ABOUTME: Handles broadcast message submission with area identification and scheduling

use crate::codec::{
    CodecError, Decodable, Encodable, decode_cstring, decode_u8, encode_cstring, encode_u8,
};
use crate::datatypes::tags;
use crate::datatypes::tlv::Tlv;
use crate::datatypes::{
    CommandId, CommandStatus, DataCoding, MessageId, NumericPlanIndicator, PriorityFlag,
    ScheduleDeliveryTime, ServiceType, SourceAddr, TypeOfNumber, ValidityPeriod,
};
use bytes::{BufMut, BytesMut};
use std::io::Cursor;

/// SMPP v5.0 broadcast_sm PDU for sending broadcast messages.
///
/// `broadcast_area_identifier`, `broadcast_content_type`, `broadcast_rep_num`
/// and `broadcast_frequency_interval` are mandatory TLVs carried after the
/// fixed octet block, not inline fields -- the SMPP v5.0 spec defines them
/// this way so broadcast_sm can share the same mandatory/optional TLV
/// machinery as every other PDU.
#[derive(Clone, Debug, PartialEq)]
pub struct BroadcastSm {
    pub command_status: CommandStatus,
    pub sequence_number: u32,
    pub service_type: ServiceType,
    pub source_addr_ton: TypeOfNumber,
    pub source_addr_npi: NumericPlanIndicator,
    pub source_addr: SourceAddr,
    pub message_id: MessageId,
    pub priority_flag: PriorityFlag,
    pub schedule_delivery_time: ScheduleDeliveryTime,
    pub validity_period: ValidityPeriod,
    pub replace_if_present_flag: u8,
    pub data_coding: DataCoding,
    pub sm_default_msg_id: u8,

    // Mandatory TLVs.
    pub broadcast_area_identifier: Vec<u8>,
    pub broadcast_content_type: Vec<u8>,
    pub broadcast_rep_num: u16,
    pub broadcast_frequency_interval: u32,

    // Optional TLVs.
    pub broadcast_channel_indicator: Option<Tlv>,
    pub broadcast_content_type_info: Option<Tlv>,
    pub broadcast_message_class: Option<Tlv>,
    pub broadcast_end_time: Option<Tlv>,
    pub broadcast_service_group: Option<Tlv>,
    pub billing_identification: Option<Tlv>,
    pub source_subaddress: Option<Tlv>,
    pub dest_subaddress: Option<Tlv>,
    pub user_message_reference: Option<Tlv>,
    pub alert_on_msg_delivery: Option<Tlv>,
    pub callback_num: Option<Tlv>,
    pub language_indicator: Option<Tlv>,
    pub sc_interface_version: Option<Tlv>,
    /// Optional message text, carried via MESSAGE_PAYLOAD since broadcast_sm
    /// has no inline short_message field.
    pub message_payload: Option<Tlv>,
}

/// SMPP v5.0 broadcast_sm_resp PDU
#[derive(Clone, Debug, PartialEq)]
pub struct BroadcastSmResponse {
    pub command_status: CommandStatus,
    pub sequence_number: u32,
    pub message_id: MessageId,
}

/// Validation error for BroadcastSm PDU
#[derive(Debug, thiserror::Error)]
pub enum BroadcastSmValidationError {
    #[error("broadcast_area_identifier cannot be empty")]
    EmptyBroadcastAreaIdentifier,
    #[error("broadcast_rep_num must be greater than 0")]
    InvalidBroadcastRepNum,
    #[error("message_id too long (max 64 characters)")]
    MessageIdTooLong,
}

impl BroadcastSm {
    /// Create a builder for BroadcastSm
    pub fn builder() -> BroadcastSmBuilder {
        BroadcastSmBuilder::default()
    }

    /// Get the sequence number
    pub fn sequence_number(&self) -> u32 {
        self.sequence_number
    }

    /// Get the message ID
    pub fn message_id(&self) -> &str {
        self.message_id.as_str().unwrap_or("")
    }

    /// Get the broadcast repetition number
    pub fn broadcast_rep_num(&self) -> u16 {
        self.broadcast_rep_num
    }

    /// Get the broadcast frequency interval
    pub fn broadcast_frequency_interval(&self) -> u32 {
        self.broadcast_frequency_interval
    }
}

impl BroadcastSmResponse {
    /// Create a new BroadcastSmResponse
    pub fn new(sequence_number: u32, command_status: CommandStatus, message_id: &str) -> Self {
        Self {
            command_status,
            sequence_number,
            message_id: MessageId::from(message_id),
        }
    }

    /// Get the sequence number
    pub fn sequence_number(&self) -> u32 {
        self.sequence_number
    }

    /// Get the command status
    pub fn command_status(&self) -> CommandStatus {
        self.command_status
    }

    /// Get the message ID
    pub fn message_id(&self) -> &str {
        self.message_id.as_str().unwrap_or("")
    }
}

/// Builder for BroadcastSm PDU
#[derive(Default)]
pub struct BroadcastSmBuilder {
    sequence_number: Option<u32>,
    service_type: Option<ServiceType>,
    source_addr_ton: Option<TypeOfNumber>,
    source_addr_npi: Option<NumericPlanIndicator>,
    source_addr: Option<String>,
    message_id: Option<String>,
    priority_flag: Option<PriorityFlag>,
    schedule_delivery_time: Option<ScheduleDeliveryTime>,
    validity_period: Option<ValidityPeriod>,
    replace_if_present_flag: Option<u8>,
    data_coding: Option<DataCoding>,
    sm_default_msg_id: Option<u8>,
    broadcast_area_identifier: Option<Vec<u8>>,
    broadcast_content_type: Option<Vec<u8>>,
    broadcast_rep_num: Option<u16>,
    broadcast_frequency_interval: Option<u32>,
    message_payload: Option<String>,
}

impl BroadcastSmBuilder {
    pub fn sequence_number(mut self, sequence_number: u32) -> Self {
        self.sequence_number = Some(sequence_number);
        self
    }

    pub fn service_type(mut self, service_type: ServiceType) -> Self {
        self.service_type = Some(service_type);
        self
    }

    pub fn source_addr(
        mut self,
        addr: &str,
        ton: TypeOfNumber,
        npi: NumericPlanIndicator,
    ) -> Self {
        self.source_addr = Some(addr.to_string());
        self.source_addr_ton = Some(ton);
        self.source_addr_npi = Some(npi);
        self
    }

    pub fn message_id(mut self, message_id: &str) -> Self {
        self.message_id = Some(message_id.to_string());
        self
    }

    pub fn priority_flag(mut self, priority_flag: PriorityFlag) -> Self {
        self.priority_flag = Some(priority_flag);
        self
    }

    pub fn schedule_delivery_time(mut self, schedule_delivery_time: ScheduleDeliveryTime) -> Self {
        self.schedule_delivery_time = Some(schedule_delivery_time);
        self
    }

    pub fn validity_period(mut self, validity_period: ValidityPeriod) -> Self {
        self.validity_period = Some(validity_period);
        self
    }

    pub fn replace_if_present_flag(mut self, flag: u8) -> Self {
        self.replace_if_present_flag = Some(flag);
        self
    }

    pub fn data_coding(mut self, data_coding: DataCoding) -> Self {
        self.data_coding = Some(data_coding);
        self
    }

    pub fn sm_default_msg_id(mut self, id: u8) -> Self {
        self.sm_default_msg_id = Some(id);
        self
    }

    pub fn broadcast_area_identifier(mut self, broadcast_area_identifier: Vec<u8>) -> Self {
        self.broadcast_area_identifier = Some(broadcast_area_identifier);
        self
    }

    pub fn broadcast_content_type(mut self, broadcast_content_type: Vec<u8>) -> Self {
        self.broadcast_content_type = Some(broadcast_content_type);
        self
    }

    pub fn broadcast_rep_num(mut self, broadcast_rep_num: u16) -> Self {
        self.broadcast_rep_num = Some(broadcast_rep_num);
        self
    }

    pub fn broadcast_frequency_interval(mut self, broadcast_frequency_interval: u32) -> Self {
        self.broadcast_frequency_interval = Some(broadcast_frequency_interval);
        self
    }

    pub fn message_payload(mut self, text: &str) -> Self {
        self.message_payload = Some(text.to_string());
        self
    }

    pub fn build(self) -> Result<BroadcastSm, BroadcastSmValidationError> {
        let broadcast_area_identifier = self.broadcast_area_identifier.unwrap_or_default();

        if broadcast_area_identifier.is_empty() {
            return Err(BroadcastSmValidationError::EmptyBroadcastAreaIdentifier);
        }

        let broadcast_rep_num = self.broadcast_rep_num.unwrap_or(1);
        if broadcast_rep_num == 0 {
            return Err(BroadcastSmValidationError::InvalidBroadcastRepNum);
        }

        let message_id_str = self.message_id.unwrap_or_default();
        if message_id_str.len() > 64 {
            return Err(BroadcastSmValidationError::MessageIdTooLong);
        }

        let source_addr_ton = self.source_addr_ton.unwrap_or(TypeOfNumber::Unknown);
        let source_addr = SourceAddr::new(self.source_addr.as_deref().unwrap_or(""), source_addr_ton)
            .unwrap_or_default();

        Ok(BroadcastSm {
            command_status: CommandStatus::Ok,
            sequence_number: self.sequence_number.unwrap_or(1),
            service_type: self.service_type.unwrap_or_default(),
            source_addr_ton,
            source_addr_npi: self.source_addr_npi.unwrap_or(NumericPlanIndicator::Unknown),
            source_addr,
            message_id: MessageId::from(message_id_str.as_str()),
            priority_flag: self.priority_flag.unwrap_or(PriorityFlag::Level0),
            schedule_delivery_time: self
                .schedule_delivery_time
                .unwrap_or_else(ScheduleDeliveryTime::immediate),
            validity_period: self
                .validity_period
                .unwrap_or_else(ValidityPeriod::immediate),
            replace_if_present_flag: self.replace_if_present_flag.unwrap_or(0),
            data_coding: self.data_coding.unwrap_or_default(),
            sm_default_msg_id: self.sm_default_msg_id.unwrap_or(0),
            broadcast_area_identifier,
            broadcast_content_type: self.broadcast_content_type.unwrap_or_else(|| vec![0u8; 3]),
            broadcast_rep_num,
            broadcast_frequency_interval: self.broadcast_frequency_interval.unwrap_or(3600),
            broadcast_channel_indicator: None,
            broadcast_content_type_info: None,
            broadcast_message_class: None,
            broadcast_end_time: None,
            broadcast_service_group: None,
            billing_identification: None,
            source_subaddress: None,
            dest_subaddress: None,
            user_message_reference: None,
            alert_on_msg_delivery: None,
            callback_num: None,
            language_indicator: None,
            sc_interface_version: None,
            message_payload: self
                .message_payload
                .map(|text| Tlv::new(tags::MESSAGE_PAYLOAD, text.into_bytes())),
        })
    }
}

impl Decodable for BroadcastSm {
    fn decode(header: crate::codec::PduHeader, buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        Self::validate_header(&header)?;

        let service_type_str = decode_cstring(buf, 6, "service_type")?;
        let service_type = ServiceType::from(service_type_str.as_str());

        let source_addr_ton = TypeOfNumber::from_byte(decode_u8(buf)?);
        let source_addr_npi = NumericPlanIndicator::from_byte(decode_u8(buf)?);

        let source_addr_str = decode_cstring(buf, 21, "source_addr")?;
        let source_addr =
            SourceAddr::new(&source_addr_str, source_addr_ton).map_err(|e| CodecError::FieldValidation {
                field: "source_addr",
                reason: e.to_string(),
            })?;

        let message_id_str = decode_cstring(buf, 65, "message_id")?;
        let message_id = MessageId::from(message_id_str.as_str());

        let priority_flag = PriorityFlag::try_from(decode_u8(buf)?).map_err(|_| {
            CodecError::FieldValidation {
                field: "priority_flag",
                reason: "Invalid priority flag".to_string(),
            }
        })?;

        let schedule_delivery_time_str = decode_cstring(buf, 17, "schedule_delivery_time")?;
        let schedule_delivery_time = ScheduleDeliveryTime::from(schedule_delivery_time_str.as_str());

        let validity_period_str = decode_cstring(buf, 17, "validity_period")?;
        let validity_period = ValidityPeriod::from(validity_period_str.as_str());

        let replace_if_present_flag = decode_u8(buf)?;

        let data_coding = DataCoding::try_from(decode_u8(buf)?).map_err(|_| {
            CodecError::FieldValidation {
                field: "data_coding",
                reason: "Invalid data coding".to_string(),
            }
        })?;

        let sm_default_msg_id = decode_u8(buf)?;

        let mut broadcast_area_identifier: Option<Vec<u8>> = None;
        let mut broadcast_content_type: Option<Vec<u8>> = None;
        let mut broadcast_rep_num: Option<u16> = None;
        let mut broadcast_frequency_interval: Option<u32> = None;
        let mut broadcast_channel_indicator = None;
        let mut broadcast_content_type_info = None;
        let mut broadcast_message_class = None;
        let mut broadcast_end_time = None;
        let mut broadcast_service_group = None;
        let mut billing_identification = None;
        let mut source_subaddress = None;
        let mut dest_subaddress = None;
        let mut user_message_reference = None;
        let mut alert_on_msg_delivery = None;
        let mut callback_num = None;
        let mut language_indicator = None;
        let mut sc_interface_version = None;
        let mut message_payload = None;

        for tlv in Tlv::decode_list(buf)? {
            match tlv.tag {
                tags::BROADCAST_AREA_IDENTIFIER => {
                    broadcast_area_identifier = Some(tlv.value.to_vec())
                }
                tags::BROADCAST_CONTENT_TYPE => broadcast_content_type = Some(tlv.value.to_vec()),
                tags::BROADCAST_REP_NUM => {
                    if tlv.value.len() != 2 {
                        return Err(CodecError::FieldValidation {
                            field: "broadcast_rep_num",
                            reason: "expected 2-octet TLV value".to_string(),
                        });
                    }
                    broadcast_rep_num = Some(u16::from_be_bytes([tlv.value[0], tlv.value[1]]));
                }
                tags::BROADCAST_FREQUENCY_INTERVAL => {
                    if tlv.value.len() != 4 {
                        return Err(CodecError::FieldValidation {
                            field: "broadcast_frequency_interval",
                            reason: "expected 4-octet TLV value".to_string(),
                        });
                    }
                    broadcast_frequency_interval = Some(u32::from_be_bytes([
                        tlv.value[0],
                        tlv.value[1],
                        tlv.value[2],
                        tlv.value[3],
                    ]));
                }
                tags::BROADCAST_CHANNEL_INDICATOR => broadcast_channel_indicator = Some(tlv),
                tags::BROADCAST_CONTENT_TYPE_INFO => broadcast_content_type_info = Some(tlv),
                tags::BROADCAST_MESSAGE_CLASS => broadcast_message_class = Some(tlv),
                tags::BROADCAST_END_TIME => broadcast_end_time = Some(tlv),
                tags::BROADCAST_SERVICE_GROUP => broadcast_service_group = Some(tlv),
                tags::BILLING_IDENTIFICATION => billing_identification = Some(tlv),
                tags::SOURCE_SUBADDRESS => source_subaddress = Some(tlv),
                tags::DEST_SUBADDRESS => dest_subaddress = Some(tlv),
                tags::USER_MESSAGE_REFERENCE => user_message_reference = Some(tlv),
                tags::ALERT_ON_MSG_DELIVERY => alert_on_msg_delivery = Some(tlv),
                tags::CALLBACK_NUM => callback_num = Some(tlv),
                tags::LANGUAGE_INDICATOR => language_indicator = Some(tlv),
                tags::SC_INTERFACE_VERSION => sc_interface_version = Some(tlv),
                tags::MESSAGE_PAYLOAD => message_payload = Some(tlv),
                _ => {}
            }
        }

        let broadcast_area_identifier = broadcast_area_identifier.ok_or(CodecError::FieldValidation {
            field: "broadcast_area_identifier",
            reason: "mandatory TLV missing".to_string(),
        })?;
        let broadcast_content_type = broadcast_content_type.ok_or(CodecError::FieldValidation {
            field: "broadcast_content_type",
            reason: "mandatory TLV missing".to_string(),
        })?;
        let broadcast_rep_num = broadcast_rep_num.ok_or(CodecError::FieldValidation {
            field: "broadcast_rep_num",
            reason: "mandatory TLV missing".to_string(),
        })?;
        let broadcast_frequency_interval =
            broadcast_frequency_interval.ok_or(CodecError::FieldValidation {
                field: "broadcast_frequency_interval",
                reason: "mandatory TLV missing".to_string(),
            })?;

        Ok(BroadcastSm {
            command_status: header.command_status,
            sequence_number: header.sequence_number,
            service_type,
            source_addr_ton,
            source_addr_npi,
            source_addr,
            message_id,
            priority_flag,
            schedule_delivery_time,
            validity_period,
            replace_if_present_flag,
            data_coding,
            sm_default_msg_id,
            broadcast_area_identifier,
            broadcast_content_type,
            broadcast_rep_num,
            broadcast_frequency_interval,
            broadcast_channel_indicator,
            broadcast_content_type_info,
            broadcast_message_class,
            broadcast_end_time,
            broadcast_service_group,
            billing_identification,
            source_subaddress,
            dest_subaddress,
            user_message_reference,
            alert_on_msg_delivery,
            callback_num,
            language_indicator,
            sc_interface_version,
            message_payload,
        })
    }

    fn command_id() -> CommandId {
        CommandId::BroadcastSm
    }
}

impl Encodable for BroadcastSm {
    fn encode(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        buf.put_u32(0);
        buf.put_u32(Self::command_id() as u32);
        buf.put_u32(self.command_status as u32);
        buf.put_u32(self.sequence_number);

        encode_cstring(buf, self.service_type.as_str(), 6, "service_type")?;
        encode_u8(buf, self.source_addr_ton.to_byte());
        encode_u8(buf, self.source_addr_npi.to_byte());
        encode_cstring(buf, self.source_addr.as_str().unwrap_or(""), 21, "source_addr")?;
        encode_cstring(buf, self.message_id.as_str().unwrap_or(""), 65, "message_id")?;
        encode_u8(buf, self.priority_flag as u8);
        encode_cstring(
            buf,
            self.schedule_delivery_time.as_str().unwrap_or(""),
            17,
            "schedule_delivery_time",
        )?;
        encode_cstring(buf, self.validity_period.as_str().unwrap_or(""), 17, "validity_period")?;
        encode_u8(buf, self.replace_if_present_flag);
        encode_u8(buf, u8::from(self.data_coding));
        encode_u8(buf, self.sm_default_msg_id);

        Tlv::new(tags::BROADCAST_AREA_IDENTIFIER, self.broadcast_area_identifier.clone())
            .encode(buf)?;
        Tlv::new(tags::BROADCAST_CONTENT_TYPE, self.broadcast_content_type.clone()).encode(buf)?;
        Tlv::new_u16(tags::BROADCAST_REP_NUM, self.broadcast_rep_num).encode(buf)?;
        Tlv::new_u32(tags::BROADCAST_FREQUENCY_INTERVAL, self.broadcast_frequency_interval)
            .encode(buf)?;

        for tlv in [
            &self.broadcast_channel_indicator,
            &self.broadcast_content_type_info,
            &self.broadcast_message_class,
            &self.broadcast_end_time,
            &self.broadcast_service_group,
            &self.billing_identification,
            &self.source_subaddress,
            &self.dest_subaddress,
            &self.user_message_reference,
            &self.alert_on_msg_delivery,
            &self.callback_num,
            &self.language_indicator,
            &self.sc_interface_version,
            &self.message_payload,
        ] {
            if let Some(tlv) = tlv {
                tlv.encode(buf)?;
            }
        }

        Ok(())
    }
}

impl Decodable for BroadcastSmResponse {
    fn decode(header: crate::codec::PduHeader, buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        Self::validate_header(&header)?;

        let message_id_str = decode_cstring(buf, 65, "message_id")?;
        let message_id = MessageId::from(message_id_str.as_str());

        Ok(BroadcastSmResponse {
            command_status: header.command_status,
            sequence_number: header.sequence_number,
            message_id,
        })
    }

    fn command_id() -> CommandId {
        CommandId::BroadcastSmResp
    }
}

impl Encodable for BroadcastSmResponse {
    fn encode(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        buf.put_u32(0);
        buf.put_u32(Self::command_id() as u32);
        buf.put_u32(self.command_status as u32);
        buf.put_u32(self.sequence_number);

        encode_cstring(buf, self.message_id.as_str().unwrap_or(""), 65, "message_id")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::PduHeader;

    #[test]
    fn test_broadcast_sm_builder() {
        let result = BroadcastSm::builder()
            .sequence_number(1)
            .message_id("TEST123")
            .broadcast_area_identifier(vec![0x01, 0x02, 0x03, 0x04])
            .broadcast_rep_num(1)
            .broadcast_frequency_interval(3600)
            .build();

        assert!(result.is_ok());
        let pdu = result.unwrap();
        assert_eq!(pdu.sequence_number(), 1);
        assert_eq!(pdu.message_id(), "TEST123");
    }

    #[test]
    fn test_broadcast_sm_validation() {
        let result = BroadcastSm::builder().broadcast_area_identifier(vec![]).build();
        assert!(result.is_err());

        let result = BroadcastSm::builder()
            .broadcast_area_identifier(vec![0x01])
            .broadcast_rep_num(0)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_broadcast_sm_response() {
        let response = BroadcastSmResponse::new(42, CommandStatus::Ok, "MSG123");
        assert_eq!(response.sequence_number(), 42);
        assert_eq!(response.command_status(), CommandStatus::Ok);
        assert_eq!(response.message_id(), "MSG123");
    }

    #[test]
    fn broadcast_sm_roundtrip() {
        let original = BroadcastSm::builder()
            .sequence_number(7)
            .source_addr("1234", TypeOfNumber::International, NumericPlanIndicator::Isdn)
            .message_id("MID1")
            .broadcast_area_identifier(vec![0x01, 0x02, 0x03])
            .broadcast_content_type(vec![0x00, 0x00, 0x01])
            .broadcast_rep_num(4)
            .broadcast_frequency_interval(7200)
            .message_payload("broadcast text")
            .build()
            .unwrap();

        let bytes = Encodable::to_bytes(&original);
        let mut cursor = Cursor::new(bytes.as_ref());
        let header = PduHeader::decode(&mut cursor).unwrap();
        let decoded = BroadcastSm::decode(header, &mut cursor).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn broadcast_sm_decode_missing_mandatory_tlv_fails() {
        let original = BroadcastSm::builder()
            .broadcast_area_identifier(vec![0x01])
            .broadcast_rep_num(1)
            .broadcast_frequency_interval(60)
            .build()
            .unwrap();

        let mut bytes = BytesMut::new();
        original.encode(&mut bytes).unwrap();

        // Keep only the fixed header/octet block plus the first mandatory
        // TLV (broadcast_area_identifier); drop everything after it so the
        // other three mandatory TLVs are missing.
        let fixed_len = 16 + 6 + 1 + 1 + 21 + 65 + 1 + 17 + 17 + 1 + 1 + 1;
        let keep = fixed_len + 4 + original.broadcast_area_identifier.len();
        let truncated = bytes[..keep].to_vec();

        let mut cursor = Cursor::new(truncated.as_slice());
        let header = PduHeader::decode(&mut cursor).unwrap();
        assert!(BroadcastSm::decode(header, &mut cursor).is_err());
    }

    #[test]
    fn broadcast_sm_response_roundtrip() {
        let original = BroadcastSmResponse::new(3, CommandStatus::Ok, "MID2");
        let bytes = Encodable::to_bytes(&original);
        let mut cursor = Cursor::new(bytes.as_ref());
        let header = PduHeader::decode(&mut cursor).unwrap();
        let decoded = BroadcastSmResponse::decode(header, &mut cursor).unwrap();
        assert_eq!(decoded, original);
    }
}
