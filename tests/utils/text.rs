use writerdesk::utils::text::{truncate, wrap};

#[test]
fn test_truncate() {
    assert_eq!(truncate("Digital Gold", 20), "Digital Gold");
    assert_eq!(truncate("Digital Gold", 12), "Digital Gold");
    assert_eq!(truncate("Digital Gold", 8), "Digital…");
    assert_eq!(truncate("Digital Gold", 0), "");
    assert_eq!(truncate("₿₿₿₿", 3), "₿₿…");
}

#[test]
fn test_wrap_breaks_on_words() {
    let lines = wrap("The untold story of Bitcoin and its early pioneers.", 20);
    assert_eq!(lines, vec!["The untold story of", "Bitcoin and its", "early pioneers."]);
    for line in &lines {
        assert!(line.chars().count() <= 20);
    }
}

#[test]
fn test_wrap_truncates_long_words() {
    assert_eq!(wrap("cryptocurrency", 6), vec!["crypt…"]);
    assert!(wrap("anything", 0).is_empty());
    assert!(wrap("   ", 10).is_empty());
}
