// SMPP v3.4 Numbering Plan Indicator (NPI): numbering plan used alongside TON for addressing.
//
// Unknown wire values are preserved via Other(u8) rather than rejected; see type_of_number.rs
// for the matching rationale.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NumericPlanIndicator {
    Unknown,
    Isdn,
    Data,
    Telex,
    LandMobile,
    National,
    Private,
    Ermes,
    Internet,
    WapClientId,
    /// An NPI byte not in the known catalog, preserved verbatim.
    Other(u8),
}

impl NumericPlanIndicator {
    pub fn from_byte(value: u8) -> Self {
        match value {
            0x00 => Self::Unknown,
            0x01 => Self::Isdn,
            0x03 => Self::Data,
            0x04 => Self::Telex,
            0x06 => Self::LandMobile,
            0x08 => Self::National,
            0x09 => Self::Private,
            0x0A => Self::Ermes,
            0x0E => Self::Internet,
            0x12 => Self::WapClientId,
            other => Self::Other(other),
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            Self::Unknown => 0x00,
            Self::Isdn => 0x01,
            Self::Data => 0x03,
            Self::Telex => 0x04,
            Self::LandMobile => 0x06,
            Self::National => 0x08,
            Self::Private => 0x09,
            Self::Ermes => 0x0A,
            Self::Internet => 0x0E,
            Self::WapClientId => 0x12,
            Self::Other(v) => v,
        }
    }
}

impl Default for NumericPlanIndicator {
    fn default() -> Self {
        Self::Unknown
    }
}

impl From<u8> for NumericPlanIndicator {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<NumericPlanIndicator> for u8 {
    fn from(value: NumericPlanIndicator) -> Self {
        value.to_byte()
    }
}
