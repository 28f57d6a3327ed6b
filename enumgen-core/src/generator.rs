//! Metadata identifying the tool that produced a document.

use std::fmt;

/// Tool name and version stamped into header banners and generated-code
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInfo {
    tool_name: String,
    version: String,
}

impl GeneratorInfo {
    pub fn new(tool_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            version: version.into(),
        }
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl Default for GeneratorInfo {
    fn default() -> Self {
        Self::new("enumgen", env!("CARGO_PKG_VERSION"))
    }
}

impl fmt::Display for GeneratorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.tool_name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let info = GeneratorInfo::new("EnumGenerator.Core", "5.0.0.0");
        assert_eq!(info.to_string(), "EnumGenerator.Core - 5.0.0.0");
    }

    #[test]
    fn test_default() {
        let info = GeneratorInfo::default();
        assert_eq!(info.tool_name(), "enumgen");
        assert_eq!(info.version(), env!("CARGO_PKG_VERSION"));
    }
}
