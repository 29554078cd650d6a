//! Property tests: the tokenizer accepts any input in any language.

use polyphrase_parser::Engine;
use proptest::prelude::*;

const LANGUAGES: [&str; 13] = [
    "en", "es", "pt", "fr", "de", "it", "ja", "zh", "ko", "ar", "tr", "id", "vi",
];

proptest! {
    #[test]
    fn spans_cover_token_text(input in "\\PC{0,40}", language in prop::sample::select(LANGUAGES.to_vec())) {
        let stream = Engine::global().tokenize(&input, language).unwrap();
        let mut last_end = 0;
        for token in stream.iter() {
            prop_assert!(token.span.start >= last_end);
            prop_assert!(token.span.end <= input.len());
            prop_assert_eq!(input.get(token.span.start..token.span.end), Some(token.text.as_str()));
            last_end = token.span.end;
        }
    }

    #[test]
    fn whitespace_only_input_has_no_tokens(input in "[ \t\n]{0,10}") {
        let stream = Engine::global().tokenize(&input, "en").unwrap();
        prop_assert!(stream.is_empty());
    }
}
