use enumgen_codegen::TypeMapper;
use enumgen_core::StorageType;

/// CIL type mapper: `int8` … `uint64`, literals written as `int32(1)`.
pub struct CilTypeMapper;

impl TypeMapper for CilTypeMapper {
    fn storage_type(&self, storage: StorageType) -> &'static str {
        match storage {
            StorageType::Signed8Bit => "int8",
            StorageType::Unsigned8Bit => "uint8",
            StorageType::Signed16Bit => "int16",
            StorageType::Unsigned16Bit => "uint16",
            StorageType::Signed32Bit => "int32",
            StorageType::Unsigned32Bit => "uint32",
            StorageType::Signed64Bit => "int64",
            StorageType::Unsigned64Bit => "uint64",
        }
    }

    fn literal(&self, storage: StorageType, value: i128) -> String {
        format!("{}({})", self.storage_type(storage), value)
    }
}
