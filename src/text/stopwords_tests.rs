use super::*;

#[test]
fn test_default_filter_basic() {
    let filter = StopWordsFilter::default();
    let filtered = filter.filter(&["the", "quick", "brown", "fox", "of", "doom"]);
    assert_eq!(filtered, vec!["quick", "brown", "fox", "doom"]);
}

#[test]
fn test_default_filter_case_insensitive() {
    let filter = StopWordsFilter::default();
    let filtered = filter.filter(&["The", "Cat", "IS", "happy"]);
    assert_eq!(filtered, vec!["Cat", "happy"]);
}

#[test]
fn test_default_list_keeps_negation_cues() {
    let filter = StopWordsFilter::default();
    assert!(!filter.is_stop_word("not"));
    assert!(!filter.is_stop_word("but"));
    assert_eq!(filter.len(), DEFAULT_STOP_WORDS.len());
}

#[test]
fn test_custom_stop_words() {
    let filter = StopWordsFilter::new(vec!["foo", "bar", "baz"]);
    let filtered = filter.filter(&["foo", "test", "bar", "data", "baz"]);
    assert_eq!(filtered, vec!["test", "data"]);
}

#[test]
fn test_empty_tokens() {
    let filter = StopWordsFilter::default();
    let tokens: Vec<&str> = vec![];
    assert!(filter.filter(&tokens).is_empty());
}

#[test]
fn test_all_stop_words() {
    let filter = StopWordsFilter::default();
    assert!(filter.filter(&["a", "an", "the"]).is_empty());
}

#[test]
fn test_filter_owned() {
    let filter = StopWordsFilter::default();
    let tokens = vec!["a".to_string(), "fine".to_string(), "film".to_string()];
    assert_eq!(filter.filter_owned(tokens), vec!["fine", "film"]);
}

#[test]
fn test_empty_filter() {
    let filter = StopWordsFilter::new(Vec::<String>::new());
    assert!(filter.is_empty());
    assert_eq!(filter.filter(&["the"]), vec!["the"]);
}
