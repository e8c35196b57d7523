use phf::phf_map;

/// Language names stripped from release titles.
/// All entries are UPPERCASE; matching is case-insensitive on word boundaries.
pub const LANGUAGES: &[&str] = &[
    "ENGLISH", "HINDI", "FRENCH", "SPANISH", "GERMAN", "TURKISH",
    "KOREAN", "JAPANESE", "CHINESE", "ITALIAN", "RUSSIAN", "PORTUGUESE",
    "ARABIC", "DUTCH", "SWEDISH", "NORWEGIAN", "DANISH", "FINNISH",
    "POLISH", "GREEK", "CZECH", "HUNGARIAN", "ROMANIAN", "THAI",
];

/// ISO 639-1 code → English language name, for labelling subtitle tracks.
/// Keys are lowercase.
static SUBTITLE_LANGUAGES: phf::Map<&'static str, &'static str> = phf_map! {
    "en" => "English",
    "bg" => "Bulgarian",
    "hi" => "Hindi",
    "fr" => "French",
    "es" => "Spanish",
    "de" => "German",
    "tr" => "Turkish",
    "ko" => "Korean",
    "ja" => "Japanese",
    "zh" => "Chinese",
    "it" => "Italian",
    "ru" => "Russian",
    "pt" => "Portuguese",
    "ar" => "Arabic",
    "nl" => "Dutch",
    "sv" => "Swedish",
    "no" => "Norwegian",
    "nb" => "Norwegian",
    "da" => "Danish",
    "fi" => "Finnish",
    "pl" => "Polish",
    "el" => "Greek",
    "cs" => "Czech",
    "hu" => "Hungarian",
    "ro" => "Romanian",
    "th" => "Thai",
    "uk" => "Ukrainian",
    "he" => "Hebrew",
    "sr" => "Serbian",
    "hr" => "Croatian",
};

/// Label used when a subtitle's language can't be determined.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Guess a subtitle's language from its file name.
///
/// Looks at the last dot-separated segment of the stem, so
/// `Movie.2010.en.srt` is English and `Movie.2010.srt` is unknown.
pub fn subtitle_language(file_name: &str) -> &'static str {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => file_name,
    };
    let last = stem.rsplit('.').next().unwrap_or(stem);
    SUBTITLE_LANGUAGES
        .get(last.to_lowercase().as_str())
        .copied()
        .unwrap_or(UNKNOWN_LANGUAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_list_has_24_entries() {
        assert_eq!(LANGUAGES.len(), 24);
        assert!(LANGUAGES.iter().all(|l| *l == l.to_uppercase()));
    }

    #[test]
    fn subtitle_language_from_suffix() {
        assert_eq!(subtitle_language("Inception.2010.en.srt"), "English");
        assert_eq!(subtitle_language("Inception.2010.BG.vtt"), "Bulgarian");
    }

    #[test]
    fn subtitle_language_unknown() {
        assert_eq!(subtitle_language("Inception.2010.srt"), UNKNOWN_LANGUAGE);
        assert_eq!(subtitle_language("noext"), UNKNOWN_LANGUAGE);
        assert_eq!(subtitle_language(""), UNKNOWN_LANGUAGE);
    }
}
