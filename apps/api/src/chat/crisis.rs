//! Crisis keyword scan. A match short-circuits the pipeline before any model call.

/// English and Amharic self-harm / suicide phrases.
pub const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "jump off",
    "hurt myself",
    "self-harm",
    "ራሴን መግደል",
    "መሞት እፈልጋለሁ",
    "ህይወቴን ማጥፋት",
    "ራሴን ላጥፋ",
    "መሞት",
    "ራሴን ልግደል",
];

/// Fixed bilingual safety reply returned instead of a model completion.
pub const CRISIS_RESPONSE: &str = "It sounds like you're going through a very difficult time. \
Please reach out to a professional immediately. You can contact a local emergency service or a \
mental health helpline. You are not alone. (እባክዎን በአቅራቢያዎ የሚገኝ የጤና ተቋም ያነጋግሩ፤ እርስዎ ብቻዎን አይደሉም።)";

/// Returns the first crisis keyword contained in `message`, case-insensitively.
pub fn find_crisis_keyword(message: &str) -> Option<&'static str> {
    let lower = message.to_lowercase();
    CRISIS_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_crisis(message: &str) -> bool {
        find_crisis_keyword(message).is_some()
    }

    #[test]
    fn test_english_keyword_case_insensitive() {
        assert_eq!(find_crisis_keyword("I want to JUMP OFF"), Some("jump off"));
        assert!(is_crisis("Thinking about Suicide lately"));
    }

    #[test]
    fn test_keyword_inside_longer_text() {
        assert!(is_crisis("sometimes i feel like i could hurt myself, you know"));
        assert!(is_crisis("what is self-harm exactly?"));
    }

    #[test]
    fn test_amharic_keywords() {
        assert!(is_crisis("ራሴን መግደል እፈልጋለሁ"));
        assert!(is_crisis("መሞት እፈልጋለሁ"));
        assert!(is_crisis("ዛሬ ራሴን ላጥፋ ብዬ አሰብኩ"));
    }

    #[test]
    fn test_ordinary_messages_pass() {
        assert!(!is_crisis("I feel a bit stressed about exams"));
        assert!(!is_crisis("ደስተኛ ነኝ"));
        assert!(!is_crisis(""));
    }

    #[test]
    fn test_response_is_bilingual() {
        assert!(CRISIS_RESPONSE.contains("You are not alone."));
        assert!(CRISIS_RESPONSE.contains("ብቻዎን አይደሉም"));
    }
}
