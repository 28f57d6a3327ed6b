//! Storage classification of enum values.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Signedness and bit width of the integer that backs an exported enum.
///
/// The storage type is an export-time choice: the same definition can be
/// exported as 8-bit in one call and 64-bit in another, so entry values are
/// only checked against it when exporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum StorageType {
    Signed8Bit,
    Unsigned8Bit,
    Signed16Bit,
    Unsigned16Bit,
    #[default]
    Signed32Bit,
    Unsigned32Bit,
    Signed64Bit,
    Unsigned64Bit,
}

impl StorageType {
    /// All storage types, narrowest first.
    pub const ALL: [StorageType; 8] = [
        Self::Signed8Bit,
        Self::Unsigned8Bit,
        Self::Signed16Bit,
        Self::Unsigned16Bit,
        Self::Signed32Bit,
        Self::Unsigned32Bit,
        Self::Signed64Bit,
        Self::Unsigned64Bit,
    ];

    /// Inclusive `(min, max)` bounds of representable values.
    pub fn range(&self) -> (i128, i128) {
        match self {
            Self::Signed8Bit => (i8::MIN.into(), i8::MAX.into()),
            Self::Unsigned8Bit => (0, u8::MAX.into()),
            Self::Signed16Bit => (i16::MIN.into(), i16::MAX.into()),
            Self::Unsigned16Bit => (0, u16::MAX.into()),
            Self::Signed32Bit => (i32::MIN.into(), i32::MAX.into()),
            Self::Unsigned32Bit => (0, u32::MAX.into()),
            Self::Signed64Bit => (i64::MIN.into(), i64::MAX.into()),
            Self::Unsigned64Bit => (0, u64::MAX.into()),
        }
    }

    /// Check if `value` is representable by this storage type.
    pub fn contains(&self, value: i128) -> bool {
        let (min, max) = self.range();
        (min..=max).contains(&value)
    }

    /// Canonical name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Signed8Bit => "int8",
            Self::Unsigned8Bit => "uint8",
            Self::Signed16Bit => "int16",
            Self::Unsigned16Bit => "uint16",
            Self::Signed32Bit => "int32",
            Self::Unsigned32Bit => "uint32",
            Self::Signed64Bit => "int64",
            Self::Unsigned64Bit => "uint64",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StorageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int8" | "i8" | "sbyte" => Ok(Self::Signed8Bit),
            "uint8" | "u8" | "byte" => Ok(Self::Unsigned8Bit),
            "int16" | "i16" | "short" => Ok(Self::Signed16Bit),
            "uint16" | "u16" | "ushort" => Ok(Self::Unsigned16Bit),
            "int32" | "i32" | "int" => Ok(Self::Signed32Bit),
            "uint32" | "u32" | "uint" => Ok(Self::Unsigned32Bit),
            "int64" | "i64" | "long" => Ok(Self::Signed64Bit),
            "uint64" | "u64" | "ulong" => Ok(Self::Unsigned64Bit),
            _ => Err(format!(
                "unknown storage type '{}', expected one of: int8, uint8, int16, uint16, int32, uint32, int64, uint64",
                s
            )),
        }
    }
}

impl TryFrom<String> for StorageType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_signed_32_bit() {
        assert_eq!(StorageType::default(), StorageType::Signed32Bit);
    }

    #[test]
    fn test_ranges() {
        assert_eq!(StorageType::Signed8Bit.range(), (-128, 127));
        assert_eq!(StorageType::Unsigned8Bit.range(), (0, 255));
        assert_eq!(StorageType::Signed16Bit.range(), (-32768, 32767));
        assert_eq!(StorageType::Unsigned16Bit.range(), (0, 65535));
        assert_eq!(
            StorageType::Signed32Bit.range(),
            (-2_147_483_648, 2_147_483_647)
        );
        assert_eq!(StorageType::Unsigned32Bit.range(), (0, 4_294_967_295));
        assert_eq!(
            StorageType::Signed64Bit.range(),
            (-9_223_372_036_854_775_808, 9_223_372_036_854_775_807)
        );
        assert_eq!(
            StorageType::Unsigned64Bit.range(),
            (0, 18_446_744_073_709_551_615)
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        for storage in StorageType::ALL {
            let (min, max) = storage.range();
            assert!(storage.contains(min), "{storage} should contain {min}");
            assert!(storage.contains(max), "{storage} should contain {max}");
            assert!(!storage.contains(min - 1), "{storage} should reject {}", min - 1);
            assert!(!storage.contains(max + 1), "{storage} should reject {}", max + 1);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("uint8".parse(), Ok(StorageType::Unsigned8Bit));
        assert_eq!("u8".parse(), Ok(StorageType::Unsigned8Bit));
        assert_eq!("Byte".parse(), Ok(StorageType::Unsigned8Bit));
        assert_eq!("long".parse(), Ok(StorageType::Signed64Bit));
        assert_eq!("INT32".parse(), Ok(StorageType::Signed32Bit));
        assert!("int128".parse::<StorageType>().is_err());
        assert!("".parse::<StorageType>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for storage in StorageType::ALL {
            assert_eq!(storage.to_string().parse(), Ok(storage));
        }
    }

    #[test]
    fn test_deserialize() {
        let storage: StorageType = serde_json::from_str(r#""uint16""#).unwrap();
        assert_eq!(storage, StorageType::Unsigned16Bit);

        assert!(serde_json::from_str::<StorageType>(r#""float""#).is_err());
    }
}
