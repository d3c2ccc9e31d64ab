use crate::error::OcrError;
use std::fmt;

/// Recognition languages offered by the application.
///
/// This is a closed set: Tesseract itself accepts any installed traineddata
/// pack, but the user-facing picker only exposes these combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Portuguese and English combined (`por+eng`)
    #[default]
    PorEng,
    Portuguese,
    English,
    Spanish,
    French,
    Italian,
    German,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::PorEng,
        Language::Portuguese,
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Italian,
        Language::German,
    ];

    /// The code passed to Tesseract via `-l`.
    pub fn code(&self) -> &'static str {
        match self {
            Language::PorEng => "por+eng",
            Language::Portuguese => "por",
            Language::English => "eng",
            Language::Spanish => "spa",
            Language::French => "fra",
            Language::Italian => "ita",
            Language::German => "deu",
        }
    }

    /// Human-readable label for pickers and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Language::PorEng => "Portuguese + English",
            Language::Portuguese => "Portuguese",
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Italian => "Italian",
            Language::German => "German",
        }
    }

    /// Parse a language code (as given on the command line).
    pub fn from_code(code: &str) -> Result<Self, OcrError> {
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.code() == code.trim().to_lowercase())
            .ok_or_else(|| OcrError::UnsupportedLanguage(code.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()).unwrap(), lang);
        }
    }

    #[test]
    fn test_default_is_combined_portuguese_english() {
        assert_eq!(Language::default().code(), "por+eng");
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!(matches!(
            Language::from_code("klingon"),
            Err(OcrError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Language::from_code("ENG").unwrap(), Language::English);
        assert_eq!(Language::from_code(" deu ").unwrap(), Language::German);
    }
}
