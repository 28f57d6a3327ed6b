use enumgen_codegen::TypeMapper;
use enumgen_core::StorageType;

/// C# type mapper using the language keywords (`byte`, `int`, …).
pub struct CSharpTypeMapper;

impl TypeMapper for CSharpTypeMapper {
    fn storage_type(&self, storage: StorageType) -> &'static str {
        match storage {
            StorageType::Signed8Bit => "sbyte",
            StorageType::Unsigned8Bit => "byte",
            StorageType::Signed16Bit => "short",
            StorageType::Unsigned16Bit => "ushort",
            StorageType::Signed32Bit => "int",
            StorageType::Unsigned32Bit => "uint",
            StorageType::Signed64Bit => "long",
            StorageType::Unsigned64Bit => "ulong",
        }
    }
}
