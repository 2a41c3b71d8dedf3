//! Greeting grammar tests — the whole trimmed query must match.

use gharkhoj::extract::QueryExtractor;

#[test]
fn pure_greetings_match() {
    let extractor = QueryExtractor::new();
    for query in [
        "hi",
        "Hi!",
        "hii",
        "HELLO",
        "Hello.",
        "hey",
        "greetings",
        "good morning",
        "Good Afternoon!",
        "welcome",
        "sup",
        "howdy",
        "  hey!  ",
    ] {
        assert!(extractor.is_greeting(query), "expected greeting: {query:?}");
    }
}

#[test]
fn partial_greetings_do_not_match() {
    let extractor = QueryExtractor::new();
    for query in [
        "hi, can you find me a flat",
        "hello there",
        "good morning everyone",
        "say hi",
        "heya",
        "2 bhk in bangalore",
        "",
    ] {
        assert!(!extractor.is_greeting(query), "not a greeting: {query:?}");
    }
}

#[test]
fn trailing_punctuation_and_whitespace_are_allowed() {
    let extractor = QueryExtractor::new();
    assert!(extractor.is_greeting("hello!!! "));
    assert!(extractor.is_greeting("good morning."));
}
