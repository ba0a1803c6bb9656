use crate::codec::{
    CodecError, Decodable, Encodable, PduHeader, check_declared_length, decode_cstring, decode_u8,
    encode_cstring, encode_u8,
};
use crate::datatypes::numeric_plan_indicator::NumericPlanIndicator;
use crate::datatypes::tlv::Tlv;
use crate::datatypes::{
    AddressError, CommandId, CommandStatus, DataCoding, DestinationAddr, EsmClass, FixedStringError,
    MessageId, ScheduleDeliveryTime, ServiceType, ShortMessage, SourceAddr, TypeOfNumber,
    ValidityPeriod,
};
use bytes::{Buf, BytesMut};
use std::io::Cursor;

/// This operation is used by an ESME to submit a short message to the SMSC for onward
/// transmission to a specified short message entity (SME). The submit_sm PDU does not
/// support the transaction message mode.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitSm {
    pub command_status: CommandStatus,
    pub sequence_number: u32,

    // Mandatory parameters
    pub service_type: ServiceType,
    pub source_addr_ton: TypeOfNumber,
    pub source_addr_npi: NumericPlanIndicator,
    pub source_addr: SourceAddr,
    pub dest_addr_ton: TypeOfNumber,
    pub dest_addr_npi: NumericPlanIndicator,
    pub destination_addr: DestinationAddr,
    pub esm_class: EsmClass,
    pub protocol_id: u8,
    pub priority_flag: u8,
    pub schedule_delivery_time: ScheduleDeliveryTime,
    pub validity_period: ValidityPeriod,
    pub registered_delivery: u8,
    pub replace_if_present_flag: u8,
    pub data_coding: DataCoding,
    pub sm_default_msg_id: u8,
    pub sm_length: u8,
    pub short_message: ShortMessage,

    // Optional parameters (TLV format)
    pub user_message_reference: Option<Tlv>,
    pub source_port: Option<Tlv>,
    pub source_addr_submit: Option<Tlv>,
    pub destination_port: Option<Tlv>,
    pub dest_addr_submit: Option<Tlv>,
    pub sar_msg_ref_num: Option<Tlv>,
    pub sar_total_segments: Option<Tlv>,
    pub sar_segment_seqnum: Option<Tlv>,
    pub more_messages_to_send: Option<Tlv>,
    pub payload_type: Option<Tlv>,
    pub message_payload: Option<Tlv>,
    pub privacy_indicator: Option<Tlv>,
    pub callback_num: Option<Tlv>,
    pub callback_num_pres_ind: Option<Tlv>,
    pub callback_num_atag: Option<Tlv>,
    pub source_subaddress: Option<Tlv>,
    pub dest_subaddress: Option<Tlv>,
    pub display_time: Option<Tlv>,
    pub sms_signal: Option<Tlv>,
    pub ms_validity: Option<Tlv>,
    pub ms_msg_wait_facilities: Option<Tlv>,
    pub number_of_messages: Option<Tlv>,
    pub alert_on_msg_delivery: Option<Tlv>,
    pub language_indicator: Option<Tlv>,
    pub its_reply_type: Option<Tlv>,
    pub its_session_info: Option<Tlv>,
    pub ussd_service_op: Option<Tlv>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitSmValidationError {
    #[error("sm_length ({sm_length}) does not match short_message length ({message_length})")]
    SmLengthMismatch {
        sm_length: u8,
        message_length: usize,
    },

    #[error("Cannot use both short_message and message_payload - they are mutually exclusive")]
    MutualExclusivityViolation,

    #[error("invalid {field}: {reason}")]
    FieldError {
        field: &'static str,
        reason: String,
    },
}

impl SubmitSm {
    /// Validates the SubmitSm PDU according to SMPP v3.4 specification
    pub fn validate(&self) -> Result<(), SubmitSmValidationError> {
        if self.sm_length as usize != self.short_message.len() as usize {
            return Err(SubmitSmValidationError::SmLengthMismatch {
                sm_length: self.sm_length,
                message_length: self.short_message.len() as usize,
            });
        }

        if !self.short_message.is_empty() && self.message_payload.is_some() {
            return Err(SubmitSmValidationError::MutualExclusivityViolation);
        }

        Ok(())
    }

    pub fn builder() -> SubmitSmBuilder {
        SubmitSmBuilder::new()
    }
}

/// Builder for constructing SubmitSm PDUs with validation and sensible defaults.
pub struct SubmitSmBuilder {
    command_status: CommandStatus,
    sequence_number: u32,
    service_type: ServiceType,
    source_addr_ton: TypeOfNumber,
    source_addr_npi: NumericPlanIndicator,
    source_addr: SourceAddr,
    dest_addr_ton: TypeOfNumber,
    dest_addr_npi: NumericPlanIndicator,
    destination_addr: DestinationAddr,
    esm_class: EsmClass,
    protocol_id: u8,
    priority_flag: u8,
    schedule_delivery_time: ScheduleDeliveryTime,
    validity_period: ValidityPeriod,
    registered_delivery: u8,
    replace_if_present_flag: u8,
    data_coding: DataCoding,
    sm_default_msg_id: u8,
    short_message: ShortMessage,
    sm_length: u8,
    user_message_reference: Option<Tlv>,
    source_port: Option<Tlv>,
    source_addr_submit: Option<Tlv>,
    destination_port: Option<Tlv>,
    dest_addr_submit: Option<Tlv>,
    sar_msg_ref_num: Option<Tlv>,
    sar_total_segments: Option<Tlv>,
    sar_segment_seqnum: Option<Tlv>,
    more_messages_to_send: Option<Tlv>,
    payload_type: Option<Tlv>,
    message_payload: Option<Tlv>,
    privacy_indicator: Option<Tlv>,
    callback_num: Option<Tlv>,
    callback_num_pres_ind: Option<Tlv>,
    callback_num_atag: Option<Tlv>,
    source_subaddress: Option<Tlv>,
    dest_subaddress: Option<Tlv>,
    display_time: Option<Tlv>,
    sms_signal: Option<Tlv>,
    ms_validity: Option<Tlv>,
    ms_msg_wait_facilities: Option<Tlv>,
    number_of_messages: Option<Tlv>,
    alert_on_msg_delivery: Option<Tlv>,
    language_indicator: Option<Tlv>,
    its_reply_type: Option<Tlv>,
    its_session_info: Option<Tlv>,
    ussd_service_op: Option<Tlv>,
}

impl Default for SubmitSmBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitSmBuilder {
    pub fn new() -> Self {
        Self {
            command_status: CommandStatus::Ok,
            sequence_number: 1,
            service_type: ServiceType::default(),
            source_addr_ton: TypeOfNumber::Unknown,
            source_addr_npi: NumericPlanIndicator::Unknown,
            source_addr: SourceAddr::default(),
            dest_addr_ton: TypeOfNumber::Unknown,
            dest_addr_npi: NumericPlanIndicator::Unknown,
            destination_addr: DestinationAddr::default(),
            esm_class: EsmClass::default(),
            protocol_id: 0,
            priority_flag: 0,
            schedule_delivery_time: ScheduleDeliveryTime::default(),
            validity_period: ValidityPeriod::default(),
            registered_delivery: 0,
            replace_if_present_flag: 0,
            data_coding: DataCoding::default(),
            sm_default_msg_id: 0,
            short_message: ShortMessage::default(),
            sm_length: 0,
            user_message_reference: None,
            source_port: None,
            source_addr_submit: None,
            destination_port: None,
            dest_addr_submit: None,
            sar_msg_ref_num: None,
            sar_total_segments: None,
            sar_segment_seqnum: None,
            more_messages_to_send: None,
            payload_type: None,
            message_payload: None,
            privacy_indicator: None,
            callback_num: None,
            callback_num_pres_ind: None,
            callback_num_atag: None,
            source_subaddress: None,
            dest_subaddress: None,
            display_time: None,
            sms_signal: None,
            ms_validity: None,
            ms_msg_wait_facilities: None,
            number_of_messages: None,
            alert_on_msg_delivery: None,
            language_indicator: None,
            its_reply_type: None,
            its_session_info: None,
            ussd_service_op: None,
        }
    }

    pub fn sequence_number(mut self, seq: u32) -> Self {
        self.sequence_number = seq;
        self
    }

    pub fn service_type(mut self, service_type: &str) -> Self {
        self.service_type = ServiceType::new(service_type).unwrap_or(ServiceType::Default);
        self
    }

    pub fn source_addr(
        mut self,
        ton: TypeOfNumber,
        npi: NumericPlanIndicator,
        addr: &str,
    ) -> Result<Self, AddressError> {
        self.source_addr_ton = ton;
        self.source_addr_npi = npi;
        self.source_addr = SourceAddr::new(addr, ton)?;
        Ok(self)
    }

    pub fn destination_addr(
        mut self,
        ton: TypeOfNumber,
        npi: NumericPlanIndicator,
        addr: &str,
    ) -> Result<Self, AddressError> {
        self.dest_addr_ton = ton;
        self.dest_addr_npi = npi;
        self.destination_addr = DestinationAddr::new(addr, ton)?;
        Ok(self)
    }

    pub fn short_message(mut self, message: &str) -> Result<Self, FixedStringError> {
        self.short_message = ShortMessage::new(message.as_bytes())?;
        Ok(self)
    }

    pub fn esm_class(mut self, esm_class: EsmClass) -> Self {
        self.esm_class = esm_class;
        self
    }

    pub fn data_coding(mut self, data_coding: DataCoding) -> Self {
        self.data_coding = data_coding;
        self
    }

    pub fn priority_flag(mut self, priority_flag: u8) -> Self {
        self.priority_flag = priority_flag;
        self
    }

    pub fn registered_delivery(mut self, registered_delivery: u8) -> Self {
        self.registered_delivery = registered_delivery;
        self
    }

    pub fn sar_msg_ref_num(mut self, tlv: Tlv) -> Self {
        self.sar_msg_ref_num = Some(tlv);
        self
    }

    pub fn sar_total_segments(mut self, tlv: Tlv) -> Self {
        self.sar_total_segments = Some(tlv);
        self
    }

    pub fn sar_segment_seqnum(mut self, tlv: Tlv) -> Self {
        self.sar_segment_seqnum = Some(tlv);
        self
    }

    pub fn message_payload(mut self, tlv: Tlv) -> Self {
        self.message_payload = Some(tlv);
        self
    }

    /// Builds the SubmitSm, performing validation and calculating sm_length automatically.
    pub fn build(mut self) -> Result<SubmitSm, SubmitSmValidationError> {
        self.sm_length = self.short_message.len();

        let submit_sm = SubmitSm {
            command_status: self.command_status,
            sequence_number: self.sequence_number,
            service_type: self.service_type,
            source_addr_ton: self.source_addr_ton,
            source_addr_npi: self.source_addr_npi,
            source_addr: self.source_addr,
            dest_addr_ton: self.dest_addr_ton,
            dest_addr_npi: self.dest_addr_npi,
            destination_addr: self.destination_addr,
            esm_class: self.esm_class,
            protocol_id: self.protocol_id,
            priority_flag: self.priority_flag,
            schedule_delivery_time: self.schedule_delivery_time,
            validity_period: self.validity_period,
            registered_delivery: self.registered_delivery,
            replace_if_present_flag: self.replace_if_present_flag,
            data_coding: self.data_coding,
            sm_default_msg_id: self.sm_default_msg_id,
            sm_length: self.sm_length,
            short_message: self.short_message,
            user_message_reference: self.user_message_reference,
            source_port: self.source_port,
            source_addr_submit: self.source_addr_submit,
            destination_port: self.destination_port,
            dest_addr_submit: self.dest_addr_submit,
            sar_msg_ref_num: self.sar_msg_ref_num,
            sar_total_segments: self.sar_total_segments,
            sar_segment_seqnum: self.sar_segment_seqnum,
            more_messages_to_send: self.more_messages_to_send,
            payload_type: self.payload_type,
            message_payload: self.message_payload,
            privacy_indicator: self.privacy_indicator,
            callback_num: self.callback_num,
            callback_num_pres_ind: self.callback_num_pres_ind,
            callback_num_atag: self.callback_num_atag,
            source_subaddress: self.source_subaddress,
            dest_subaddress: self.dest_subaddress,
            display_time: self.display_time,
            sms_signal: self.sms_signal,
            ms_validity: self.ms_validity,
            ms_msg_wait_facilities: self.ms_msg_wait_facilities,
            number_of_messages: self.number_of_messages,
            alert_on_msg_delivery: self.alert_on_msg_delivery,
            language_indicator: self.language_indicator,
            its_reply_type: self.its_reply_type,
            its_session_info: self.its_session_info,
            ussd_service_op: self.ussd_service_op,
        };

        submit_sm.validate()?;
        Ok(submit_sm)
    }
}

/// The submit_sm_resp PDU is used to provide a response to the submit_sm request.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitSmResponse {
    pub command_status: CommandStatus,
    pub sequence_number: u32,
    pub message_id: MessageId,
}

impl SubmitSmResponse {
    pub fn new(sequence_number: u32, message_id: MessageId) -> Self {
        Self {
            command_status: CommandStatus::Ok,
            sequence_number,
            message_id,
        }
    }

    pub fn error(sequence_number: u32, status: CommandStatus) -> Self {
        Self {
            command_status: status,
            sequence_number,
            message_id: MessageId::default(),
        }
    }
}

impl Decodable for SubmitSm {
    fn command_id() -> CommandId {
        CommandId::SubmitSm
    }

    fn decode(header: PduHeader, buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        Self::validate_header(&header)?;

        let service_type_str = decode_cstring(buf, 6, "service_type")?;
        let source_addr_ton = TypeOfNumber::from_byte(decode_u8(buf)?);
        let source_addr_npi = NumericPlanIndicator::from_byte(decode_u8(buf)?);
        let source_addr_str = decode_cstring(buf, 21, "source_addr")?;
        let dest_addr_ton = TypeOfNumber::from_byte(decode_u8(buf)?);
        let dest_addr_npi = NumericPlanIndicator::from_byte(decode_u8(buf)?);
        let destination_addr_str = decode_cstring(buf, 21, "destination_addr")?;
        let esm_class = EsmClass::from(decode_u8(buf)?);
        let protocol_id = decode_u8(buf)?;
        let priority_flag = decode_u8(buf)?;
        let schedule_delivery_time_str = decode_cstring(buf, 17, "schedule_delivery_time")?;
        let validity_period_str = decode_cstring(buf, 17, "validity_period")?;
        let registered_delivery = decode_u8(buf)?;
        let replace_if_present_flag = decode_u8(buf)?;
        let data_coding = DataCoding::from_byte(decode_u8(buf)?);
        let sm_default_msg_id = decode_u8(buf)?;
        let sm_length = decode_u8(buf)?;

        check_declared_length(&header, buf, sm_length as usize, "short_message")?;
        if buf.remaining() < sm_length as usize {
            return Err(CodecError::Incomplete);
        }
        let mut message_bytes = vec![0u8; sm_length as usize];
        buf.copy_to_slice(&mut message_bytes);

        let service_type = ServiceType::new(&service_type_str).map_err(|e| {
            CodecError::FieldValidation {
                field: "service_type",
                reason: e.to_string(),
            }
        })?;
        let source_addr = SourceAddr::from_parsed_string(source_addr_str).map_err(|e| {
            CodecError::FieldValidation {
                field: "source_addr",
                reason: e.to_string(),
            }
        })?;
        let destination_addr =
            DestinationAddr::from_parsed_string(destination_addr_str).map_err(|e| {
                CodecError::FieldValidation {
                    field: "destination_addr",
                    reason: e.to_string(),
                }
            })?;
        let schedule_delivery_time =
            ScheduleDeliveryTime::new(&schedule_delivery_time_str).map_err(|e| {
                CodecError::FieldValidation {
                    field: "schedule_delivery_time",
                    reason: e.to_string(),
                }
            })?;
        let validity_period = ValidityPeriod::new(&validity_period_str).map_err(|e| {
            CodecError::FieldValidation {
                field: "validity_period",
                reason: e.to_string(),
            }
        })?;
        let short_message =
            ShortMessage::new(&message_bytes).map_err(|e| CodecError::FieldValidation {
                field: "short_message",
                reason: e.to_string(),
            })?;

        // Optional TLVs: parsed in wire order, each matched against its tag.
        let mut user_message_reference = None;
        let mut source_port = None;
        let mut source_addr_submit = None;
        let mut destination_port = None;
        let mut dest_addr_submit = None;
        let mut sar_msg_ref_num = None;
        let mut sar_total_segments = None;
        let mut sar_segment_seqnum = None;
        let mut more_messages_to_send = None;
        let mut payload_type = None;
        let mut message_payload = None;
        let mut privacy_indicator = None;
        let mut callback_num = None;
        let mut callback_num_pres_ind = None;
        let mut callback_num_atag = None;
        let mut source_subaddress = None;
        let mut dest_subaddress = None;
        let mut display_time = None;
        let mut sms_signal = None;
        let mut ms_validity = None;
        let mut ms_msg_wait_facilities = None;
        let mut number_of_messages = None;
        let mut alert_on_msg_delivery = None;
        let mut language_indicator = None;
        let mut its_reply_type = None;
        let mut its_session_info = None;
        let mut ussd_service_op = None;

        while buf.has_remaining() {
            let tlv = Tlv::decode(buf)?;
            match tlv.tag {
                crate::datatypes::tags::USER_MESSAGE_REFERENCE => user_message_reference = Some(tlv),
                crate::datatypes::tags::SOURCE_PORT => source_port = Some(tlv),
                crate::datatypes::tags::SOURCE_ADDR_SUBUNIT => source_addr_submit = Some(tlv),
                crate::datatypes::tags::DESTINATION_PORT => destination_port = Some(tlv),
                crate::datatypes::tags::DEST_ADDR_SUBUNIT => dest_addr_submit = Some(tlv),
                crate::datatypes::tags::SAR_MSG_REF_NUM => sar_msg_ref_num = Some(tlv),
                crate::datatypes::tags::SAR_TOTAL_SEGMENTS => sar_total_segments = Some(tlv),
                crate::datatypes::tags::SAR_SEGMENT_SEQNUM => sar_segment_seqnum = Some(tlv),
                crate::datatypes::tags::MORE_MESSAGES_TO_SEND => more_messages_to_send = Some(tlv),
                crate::datatypes::tags::PAYLOAD_TYPE => payload_type = Some(tlv),
                crate::datatypes::tags::MESSAGE_PAYLOAD => message_payload = Some(tlv),
                crate::datatypes::tags::PRIVACY_INDICATOR => privacy_indicator = Some(tlv),
                crate::datatypes::tags::CALLBACK_NUM => callback_num = Some(tlv),
                crate::datatypes::tags::CALLBACK_NUM_PRES_IND => callback_num_pres_ind = Some(tlv),
                crate::datatypes::tags::CALLBACK_NUM_ATAG => callback_num_atag = Some(tlv),
                crate::datatypes::tags::SOURCE_SUBADDRESS => source_subaddress = Some(tlv),
                crate::datatypes::tags::DEST_SUBADDRESS => dest_subaddress = Some(tlv),
                crate::datatypes::tags::DISPLAY_TIME => display_time = Some(tlv),
                crate::datatypes::tags::SMS_SIGNAL => sms_signal = Some(tlv),
                crate::datatypes::tags::MS_VALIDITY => ms_validity = Some(tlv),
                crate::datatypes::tags::MS_MSG_WAIT_FACILITIES => ms_msg_wait_facilities = Some(tlv),
                crate::datatypes::tags::NUMBER_OF_MESSAGES => number_of_messages = Some(tlv),
                crate::datatypes::tags::ALERT_ON_MSG_DELIVERY => alert_on_msg_delivery = Some(tlv),
                crate::datatypes::tags::LANGUAGE_INDICATOR => language_indicator = Some(tlv),
                crate::datatypes::tags::ITS_REPLY_TYPE => its_reply_type = Some(tlv),
                crate::datatypes::tags::ITS_SESSION_INFO => its_session_info = Some(tlv),
                crate::datatypes::tags::USSD_SERVICE_OP => ussd_service_op = Some(tlv),
                _ => {}
            }
        }

        Ok(SubmitSm {
            command_status: header.command_status,
            sequence_number: header.sequence_number,
            service_type,
            source_addr_ton,
            source_addr_npi,
            source_addr,
            dest_addr_ton,
            dest_addr_npi,
            destination_addr,
            esm_class,
            protocol_id,
            priority_flag,
            schedule_delivery_time,
            validity_period,
            registered_delivery,
            replace_if_present_flag,
            data_coding,
            sm_default_msg_id,
            sm_length,
            short_message,
            user_message_reference,
            source_port,
            source_addr_submit,
            destination_port,
            dest_addr_submit,
            sar_msg_ref_num,
            sar_total_segments,
            sar_segment_seqnum,
            more_messages_to_send,
            payload_type,
            message_payload,
            privacy_indicator,
            callback_num,
            callback_num_pres_ind,
            callback_num_atag,
            source_subaddress,
            dest_subaddress,
            display_time,
            sms_signal,
            ms_validity,
            ms_msg_wait_facilities,
            number_of_messages,
            alert_on_msg_delivery,
            language_indicator,
            its_reply_type,
            its_session_info,
            ussd_service_op,
        })
    }
}

impl Encodable for SubmitSm {
    fn encode(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        self.validate().map_err(|e| CodecError::FieldValidation {
            field: "submit_sm",
            reason: e.to_string(),
        })?;

        let header = PduHeader {
            command_length: 0,
            command_id: CommandId::SubmitSm,
            command_status: self.command_status,
            sequence_number: self.sequence_number,
        };
        header.encode(buf)?;

        encode_cstring(buf, self.service_type.as_str(), 6, "service_type")?;
        encode_u8(buf, self.source_addr_ton.to_byte());
        encode_u8(buf, self.source_addr_npi.to_byte());
        encode_cstring(buf, self.source_addr.as_str().unwrap_or(""), 21, "source_addr")?;
        encode_u8(buf, self.dest_addr_ton.to_byte());
        encode_u8(buf, self.dest_addr_npi.to_byte());
        encode_cstring(
            buf,
            self.destination_addr.as_str().unwrap_or(""),
            21,
            "destination_addr",
        )?;
        encode_u8(buf, self.esm_class.to_byte());
        encode_u8(buf, self.protocol_id);
        encode_u8(buf, self.priority_flag);
        encode_cstring(
            buf,
            self.schedule_delivery_time.as_str().unwrap_or(""),
            17,
            "schedule_delivery_time",
        )?;
        encode_cstring(buf, self.validity_period.as_str().unwrap_or(""), 17, "validity_period")?;
        encode_u8(buf, self.registered_delivery);
        encode_u8(buf, self.replace_if_present_flag);
        encode_u8(buf, self.data_coding.to_byte());
        encode_u8(buf, self.sm_default_msg_id);
        encode_u8(buf, self.sm_length);

        let message_bytes = self.short_message.as_bytes();
        buf.extend_from_slice(&message_bytes[..(self.sm_length as usize).min(message_bytes.len())]);

        for tlv in [
            &self.user_message_reference,
            &self.source_port,
            &self.source_addr_submit,
            &self.destination_port,
            &self.dest_addr_submit,
            &self.sar_msg_ref_num,
            &self.sar_total_segments,
            &self.sar_segment_seqnum,
            &self.more_messages_to_send,
            &self.payload_type,
            &self.message_payload,
            &self.privacy_indicator,
            &self.callback_num,
            &self.callback_num_pres_ind,
            &self.callback_num_atag,
            &self.source_subaddress,
            &self.dest_subaddress,
            &self.display_time,
            &self.sms_signal,
            &self.ms_validity,
            &self.ms_msg_wait_facilities,
            &self.number_of_messages,
            &self.alert_on_msg_delivery,
            &self.language_indicator,
            &self.its_reply_type,
            &self.its_session_info,
            &self.ussd_service_op,
        ] {
            if let Some(tlv) = tlv {
                tlv.encode(buf)?;
            }
        }

        Ok(())
    }
}

impl Decodable for SubmitSmResponse {
    fn command_id() -> CommandId {
        CommandId::SubmitSmResp
    }

    fn decode(header: PduHeader, buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        Self::validate_header(&header)?;

        let message_id_str = decode_cstring(buf, 65, "message_id")?;
        let message_id: MessageId =
            message_id_str
                .parse()
                .map_err(|e: FixedStringError| CodecError::FieldValidation {
                    field: "message_id",
                    reason: e.to_string(),
                })?;

        Ok(SubmitSmResponse {
            command_status: header.command_status,
            sequence_number: header.sequence_number,
            message_id,
        })
    }
}

impl Encodable for SubmitSmResponse {
    fn encode(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        let header = PduHeader {
            command_length: 0,
            command_id: CommandId::SubmitSmResp,
            command_status: self.command_status,
            sequence_number: self.sequence_number,
        };
        header.encode(buf)?;

        encode_cstring(buf, self.message_id.as_str().unwrap_or(""), 65, "message_id")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn submit_sm_builder_basic() {
        let submit_sm = SubmitSm::builder()
            .sequence_number(1)
            .source_addr(TypeOfNumber::International, NumericPlanIndicator::Isdn, "123456")
            .unwrap()
            .destination_addr(
                TypeOfNumber::International,
                NumericPlanIndicator::Isdn,
                "9876543210",
            )
            .unwrap()
            .short_message("Hello, World!")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(submit_sm.source_addr.as_str().unwrap(), "123456");
        assert_eq!(submit_sm.destination_addr.as_str().unwrap(), "9876543210");
        assert_eq!(submit_sm.short_message.as_str().unwrap(), "Hello, World!");
        assert_eq!(submit_sm.sm_length, 13);
    }

    #[test]
    fn submit_sm_roundtrip() {
        let original = SubmitSm::builder()
            .sequence_number(42)
            .source_addr(TypeOfNumber::International, NumericPlanIndicator::Isdn, "123456")
            .unwrap()
            .destination_addr(
                TypeOfNumber::International,
                NumericPlanIndicator::Isdn,
                "9876543210",
            )
            .unwrap()
            .short_message("Hello, World!")
            .unwrap()
            .build()
            .unwrap();

        let bytes = original.to_bytes();
        let mut cursor = Cursor::new(bytes.as_ref());
        let header = PduHeader::decode(&mut cursor).unwrap();
        let decoded = SubmitSm::decode(header, &mut cursor).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn submit_sm_response_roundtrip() {
        let original = SubmitSmResponse::new(7, "MSG00001".parse().unwrap());

        let bytes = original.to_bytes();
        let mut cursor = Cursor::new(bytes.as_ref());
        let header = PduHeader::decode(&mut cursor).unwrap();
        let decoded = SubmitSmResponse::decode(header, &mut cursor).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn submit_sm_rejects_sm_length_mismatch() {
        let mut submit_sm = SubmitSm::builder()
            .source_addr(TypeOfNumber::International, NumericPlanIndicator::Isdn, "123456")
            .unwrap()
            .destination_addr(
                TypeOfNumber::International,
                NumericPlanIndicator::Isdn,
                "9876543210",
            )
            .unwrap()
            .short_message("Hello, World!")
            .unwrap()
            .build()
            .unwrap();

        submit_sm.sm_length = 5;
        assert!(matches!(
            submit_sm.validate(),
            Err(SubmitSmValidationError::SmLengthMismatch { .. })
        ));
    }
}
