use crate::datatypes::{CommandId, CommandStatus};
use crate::macros::impl_complete_header_only_pdu;

#[derive(Clone, Debug, PartialEq)]
pub struct EnquireLink {
    pub command_status: CommandStatus,
    pub sequence_number: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnquireLinkResponse {
    pub command_status: CommandStatus,
    pub sequence_number: u32,
}

impl_complete_header_only_pdu!(EnquireLink, CommandId::EnquireLink);
impl_complete_header_only_pdu!(EnquireLinkResponse, CommandId::EnquireLinkResp);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decodable, Encodable, PduHeader};
    use std::io::Cursor;

    #[test]
    fn enquire_link_roundtrip() {
        let pdu = EnquireLink::new(42);
        let bytes = pdu.to_bytes();
        assert_eq!(bytes.len(), 16);

        let mut cursor = Cursor::new(&bytes[..]);
        let header = PduHeader::decode(&mut cursor).unwrap();
        let decoded = EnquireLink::decode(header, &mut cursor).unwrap();
        assert_eq!(decoded, pdu);
    }

    #[test]
    fn enquire_link_response_roundtrip() {
        let pdu = EnquireLinkResponse::new(7);
        let bytes = pdu.to_bytes();

        let mut cursor = Cursor::new(&bytes[..]);
        let header = PduHeader::decode(&mut cursor).unwrap();
        let decoded = EnquireLinkResponse::decode(header, &mut cursor).unwrap();
        assert_eq!(decoded, pdu);
        assert_eq!(decoded.command_status, CommandStatus::Ok);
    }

    #[test]
    fn enquire_link_rejects_trailing_body() {
        let mut bytes = EnquireLink::new(1).to_bytes().to_vec();
        bytes[0] = 0;
        bytes[3] = 17;
        bytes.push(0xFF);

        let mut cursor = Cursor::new(&bytes[..]);
        let header = PduHeader::decode(&mut cursor).unwrap();
        assert!(EnquireLink::decode(header, &mut cursor).is_err());
    }
}
