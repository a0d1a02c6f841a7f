/// Split recognized text into words on maximal runs of whitespace.
///
/// Leading, trailing and repeated whitespace never produce empty words, and
/// the returned words keep their order of appearance in `text`.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
