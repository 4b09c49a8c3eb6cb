//! String functions for the course stdlib

use std::collections::HashMap;

use crate::error::{StdlibError, StdlibResult};

/// Count the alphabetic characters in `text`.
///
/// # Test Cases
/// - count_letters("Hello world!!!") = 10
/// - count_letters("123456789") = 0
pub fn count_letters(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphabetic()).count()
}

/// Most frequent whitespace-separated word in `text`.
///
/// Ties go to the word that appears first.
///
/// # Errors
/// `text` has no words.
///
/// # Test Cases
/// - most_frequent_word("a ola como como como") = "como"
/// - most_frequent_word("voce esta bem") = "voce"
pub fn most_frequent_word(text: &str) -> StdlibResult<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for word in order {
        let count = counts[word];
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((word, count)),
        }
    }

    best.map(|(word, _)| word.to_string())
        .ok_or_else(|| StdlibError::InvalidArgument("text has no words".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_letters() {
        assert_eq!(count_letters("Hello world!!!"), 10);
        assert_eq!(count_letters("123456789"), 0);
        assert_eq!(count_letters("ação"), 4);
        assert_eq!(count_letters(""), 0);
    }

    #[test]
    fn test_most_frequent_word() {
        assert_eq!(most_frequent_word("a ola como como como").unwrap(), "como");
        assert_eq!(most_frequent_word("voce esta bem").unwrap(), "voce");
        assert_eq!(most_frequent_word("b a a b").unwrap(), "b");
        assert_eq!(most_frequent_word("  one\ttwo\ntwo ").unwrap(), "two");
    }

    #[test]
    fn test_most_frequent_word_rejects_empty() {
        assert!(most_frequent_word("").is_err());
        assert!(most_frequent_word("   \n\t").is_err());
    }
}
