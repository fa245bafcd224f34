use reviewlens_preprocessing::{Stage, TextProcessor, STOPWORDS};

const INPUTS: [&str; 8] = [
    "This product is absolutely amazing! Fast shipping, great quality, \
     and excellent customer service.",
    "Terrible experience. The product broke after just one week \
     and customer support was unhelpful.",
    "The product is okay. It works as expected but nothing special.",
    "WAS it WORTH it?? The A-Team says: YES!!!",
    "tabs\tand\nnewlines   and  doubled  spaces",
    "émigré CAFÉ Über-cool ümlaut",
    "",
    "   ",
];

fn is_word_or_space(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace()
}

#[test]
fn test_lowercase_stage_has_no_uppercase() {
    let processor = TextProcessor::new();
    for input in INPUTS {
        let trace = processor.normalize(input).unwrap();
        assert!(
            !trace.lowercase().chars().any(char::is_uppercase),
            "uppercase left in {:?}",
            trace.lowercase()
        );
    }
}

#[test]
fn test_special_chars_stage_has_only_word_chars_and_whitespace() {
    let processor = TextProcessor::new();
    for input in INPUTS {
        let trace = processor.normalize(input).unwrap();
        assert!(
            trace.no_special_chars().chars().all(is_word_or_space),
            "special character left in {:?}",
            trace.no_special_chars()
        );
    }
}

// Whitespace survives stage 2 untouched, so this checks "whitespace" rather
// than "single spaces". Runs of whitespace are collapsed by the stopword stage.
#[test]
fn test_special_chars_stage_keeps_whitespace_runs() {
    let trace = TextProcessor::new().normalize("great - value\tok").unwrap();
    assert_eq!(trace.no_special_chars(), "great  value\tok");
    assert_eq!(trace.no_stopwords(), "great value ok");
}

#[test]
fn test_accented_letters_are_stripped() {
    let trace = TextProcessor::new().normalize("émigré CAFÉ Über-cool ümlaut").unwrap();
    assert_eq!(trace.lowercase(), "émigré café über-cool ümlaut");
    assert_eq!(trace.no_special_chars(), "migr caf bercool mlaut");
    assert_eq!(trace.lemmatized(), "migr caf bercool mlaut");
}

#[test]
fn test_stopword_stage_has_no_stopwords() {
    let processor = TextProcessor::new();
    for input in INPUTS {
        let trace = processor.normalize(input).unwrap();
        for token in trace.no_stopwords().split_whitespace() {
            assert!(!STOPWORDS.contains(&token), "stopword {:?} survived", token);
        }
    }
}

#[test]
fn test_stopword_removal_is_idempotent() {
    let processor = TextProcessor::new();
    for input in INPUTS {
        let trace = processor.normalize(input).unwrap();
        let once = trace.no_stopwords();
        assert_eq!(TextProcessor::remove_stopwords(once), once);
    }
}

#[test]
fn test_filtering_stages_never_add_tokens() {
    let processor = TextProcessor::new();
    for input in INPUTS {
        let trace = processor.normalize(input).unwrap();
        let special = trace.no_special_chars().split_whitespace().count();
        let filtered = trace.no_stopwords().split_whitespace().count();
        let lemmatized = trace.lemmatized().split_whitespace().count();

        assert!(filtered <= special);
        assert!(lemmatized <= filtered);
    }
}

#[test]
fn test_original_is_byte_identical() {
    let processor = TextProcessor::new();
    for input in INPUTS {
        let trace = processor.normalize(input).unwrap();
        assert_eq!(trace.original().as_bytes(), input.as_bytes());
    }
}

#[test]
fn test_default_lemmatizer_mirrors_stopword_stage() {
    let processor = TextProcessor::new();
    for input in INPUTS {
        let trace = processor.normalize(input).unwrap();
        assert_eq!(trace.get(Stage::Lemmatized), trace.get(Stage::NoStopwords));
    }
}

#[test]
fn test_normalize_is_deterministic() {
    let processor = TextProcessor::new();
    for input in INPUTS {
        assert_eq!(processor.normalize(input).unwrap(), processor.normalize(input).unwrap());
    }
}
