// SMPP v3.4 Type of Number (TON): address type classification for source/destination addresses.
//
// Unknown wire values are preserved via Other(u8) rather than rejected, so decode never fails
// on a TON byte the catalog doesn't recognize. This mirrors the permissive pattern DataCoding
// already uses for its own catch-all byte values.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeOfNumber {
    Unknown,
    International,
    National,
    NetworkSpecific,
    SubscriberNumber,
    Alphanumeric,
    Abbreviated,
    /// A TON byte not in the known catalog, preserved verbatim.
    Other(u8),
}

impl TypeOfNumber {
    pub fn from_byte(value: u8) -> Self {
        match value {
            0x00 => Self::Unknown,
            0x01 => Self::International,
            0x02 => Self::National,
            0x03 => Self::NetworkSpecific,
            0x04 => Self::SubscriberNumber,
            0x05 => Self::Alphanumeric,
            0x06 => Self::Abbreviated,
            other => Self::Other(other),
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            Self::Unknown => 0x00,
            Self::International => 0x01,
            Self::National => 0x02,
            Self::NetworkSpecific => 0x03,
            Self::SubscriberNumber => 0x04,
            Self::Alphanumeric => 0x05,
            Self::Abbreviated => 0x06,
            Self::Other(v) => v,
        }
    }
}

impl Default for TypeOfNumber {
    fn default() -> Self {
        Self::Unknown
    }
}

impl From<u8> for TypeOfNumber {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<TypeOfNumber> for u8 {
    fn from(value: TypeOfNumber) -> Self {
        value.to_byte()
    }
}
