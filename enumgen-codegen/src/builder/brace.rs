use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Where the opening brace of a braced scope is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum BraceStyle {
    /// Opening brace on its own line, aligned with the header.
    #[default]
    NewLine,
    /// Opening brace appended to the header line.
    SameLine,
}

impl BraceStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewLine => "new-line",
            Self::SameLine => "same-line",
        }
    }
}

impl fmt::Display for BraceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BraceStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new-line" | "newline" | "new_line" => Ok(Self::NewLine),
            "same-line" | "sameline" | "same_line" => Ok(Self::SameLine),
            _ => Err(format!(
                "unknown brace style '{}', expected 'new-line' or 'same-line'",
                s
            )),
        }
    }
}

impl TryFrom<String> for BraceStyle {
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
        assert_eq!("new-line".parse(), Ok(BraceStyle::NewLine));
        assert_eq!("SameLine".parse(), Ok(BraceStyle::SameLine));
        assert_eq!("same_line".parse(), Ok(BraceStyle::SameLine));
        assert!("k&r".parse::<BraceStyle>().is_err());
    }

    #[test]
    fn test_deserialize() {
        let style: BraceStyle = serde_json::from_str(r#""same-line""#).unwrap();
        assert_eq!(style, BraceStyle::SameLine);
    }
}
