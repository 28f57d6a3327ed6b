//! Mapping storage types to notation-specific tokens.

use enumgen_core::StorageType;

/// Trait for mapping storage types and values to notation-specific text.
///
/// Implement this trait for each target notation.
pub trait TypeMapper {
    /// The primitive type token for `storage` (e.g., `uint8`, `Byte`).
    fn storage_type(&self, storage: StorageType) -> &'static str;

    /// Render `value` as a literal of `storage`.
    fn literal(&self, _storage: StorageType, value: i128) -> String {
        // Default: bare signed decimal
        value.to_string()
    }
}
