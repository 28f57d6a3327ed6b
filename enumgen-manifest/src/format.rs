//! Output notations selectable from definition files and the command line.

use std::{fmt, path::Path, str::FromStr};

use serde::Deserialize;

/// Supported output notations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Format {
    /// IL assembler listing
    Cil,
    /// Visual Basic
    VisualBasic,
    /// C#
    #[default]
    CSharp,
}

impl Format {
    /// Returns the format identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Cil => "cil",
            Format::VisualBasic => "visual-basic",
            Format::CSharp => "csharp",
        }
    }

    /// Guess the format from an output path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "il" => Some(Format::Cil),
            "vb" => Some(Format::VisualBasic),
            "cs" => Some(Format::CSharp),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cil" | "il" => Ok(Format::Cil),
            "visual-basic" | "visualbasic" | "vb" => Ok(Format::VisualBasic),
            "csharp" | "cs" | "c#" => Ok(Format::CSharp),
            _ => Err(format!(
                "unknown format '{}', expected 'cil', 'visual-basic' or 'csharp'",
                s
            )),
        }
    }
}

impl TryFrom<String> for Format {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Format::from_str("cil").unwrap(), Format::Cil);
        assert_eq!(Format::from_str("IL").unwrap(), Format::Cil);
        assert_eq!(Format::from_str("vb").unwrap(), Format::VisualBasic);
        assert_eq!(
            Format::from_str("Visual-Basic").unwrap(),
            Format::VisualBasic
        );
        assert_eq!(Format::from_str("c#").unwrap(), Format::CSharp);
        assert!(Format::from_str("fsharp").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Format::Cil.to_string(), "cil");
        assert_eq!(Format::VisualBasic.to_string(), "visual-basic");
        assert_eq!(Format::CSharp.to_string(), "csharp");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Format::from_path(Path::new("out/Months.g.cs")), Some(Format::CSharp));
        assert_eq!(Format::from_path(Path::new("Months.IL")), Some(Format::Cil));
        assert_eq!(Format::from_path(Path::new("Months.vb")), Some(Format::VisualBasic));
        assert_eq!(Format::from_path(Path::new("Months.txt")), None);
        assert_eq!(Format::from_path(Path::new("Months")), None);
    }

    #[test]
    fn test_deserialize() {
        let format: Format = serde_json::from_str(r#""visual-basic""#).unwrap();
        assert_eq!(format, Format::VisualBasic);
        assert!(serde_json::from_str::<Format>(r#""rust""#).is_err());
    }
}
