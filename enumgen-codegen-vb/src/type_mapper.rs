use enumgen_codegen::TypeMapper;
use enumgen_core::StorageType;

/// Visual Basic type mapper. Literals are bare decimals.
pub struct VisualBasicTypeMapper;

impl TypeMapper for VisualBasicTypeMapper {
    fn storage_type(&self, storage: StorageType) -> &'static str {
        match storage {
            StorageType::Signed8Bit => "SByte",
            StorageType::Unsigned8Bit => "Byte",
            StorageType::Signed16Bit => "Short",
            StorageType::Unsigned16Bit => "UShort",
            StorageType::Signed32Bit => "Integer",
            StorageType::Unsigned32Bit => "UInteger",
            StorageType::Signed64Bit => "Long",
            StorageType::Unsigned64Bit => "ULong",
        }
    }
}
