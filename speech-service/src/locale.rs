//! Fixed language-code mapping tables for voice input and output.

/// Recognition locale for a language code, defaulting to a generic English
/// locale when unmapped.
pub fn recognition_locale(language: &str) -> &'static str {
    match language {
        "en" => "en-US",
        "hi" => "hi-IN",
        "bn" => "bn-IN",
        "te" => "te-IN",
        "ta" => "ta-IN",
        "mr" => "mr-IN",
        "gu" => "gu-IN",
        "kn" => "kn-IN",
        "ml" => "ml-IN",
        "pa" => "pa-IN",
        "or" => "or-IN",
        "as" => "as-IN",
        _ => "en-US",
    }
}

/// Synthesis locale for a language code. English intentionally maps to the
/// Indian-accent voice.
pub fn synthesis_locale(language: &str) -> &'static str {
    match language {
        "en" => "en-IN",
        "hi" => "hi-IN",
        "bn" => "bn-IN",
        "te" => "te-IN",
        "ta" => "ta-IN",
        "mr" => "mr-IN",
        "gu" => "gu-IN",
        "kn" => "kn-IN",
        "ml" => "ml-IN",
        "pa" => "pa-IN",
        "or" => "or-IN",
        "as" => "as-IN",
        _ => "en-IN",
    }
}

/// Multilingual voice currently used for every supported language.
const MULTILINGUAL_VOICE: &str = "9BWtsMINqrJLrRacOk9x";

/// Remote-synthesis voice id for a language code.
///
/// One multilingual voice covers all supported languages today; the table
/// keeps per-language entries so regional voices can be swapped in later.
pub fn voice_id(language: &str) -> &'static str {
    match language {
        "en" | "hi" | "bn" | "te" | "ta" | "mr" | "gu" | "kn" | "ml" | "pa" | "or" | "as" => {
            MULTILINGUAL_VOICE
        }
        _ => MULTILINGUAL_VOICE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognition_locales() {
        assert_eq!(recognition_locale("en"), "en-US");
        assert_eq!(recognition_locale("hi"), "hi-IN");
        assert_eq!(recognition_locale("xx"), "en-US");
    }

    #[test]
    fn test_synthesis_locales() {
        assert_eq!(synthesis_locale("en"), "en-IN");
        assert_eq!(synthesis_locale("ta"), "ta-IN");
        assert_eq!(synthesis_locale("xx"), "en-IN");
    }

    #[test]
    fn test_voice_fallback() {
        assert_eq!(voice_id("hi"), voice_id("unknown"));
    }
}
