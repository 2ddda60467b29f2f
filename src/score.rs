//! Jaundice rate calculation.
//!
//! The jaundice rate of an article is the percentage of its tokens that appear
//! in the charged-word dictionary. It is the system's single sentiment-bias
//! metric, computed once per article after tokenization.

use std::collections::HashSet;

/// Compute the charged-word percentage over a token sequence.
///
/// Returns `100 * charged / total` rounded to 2 decimal digits. An empty token
/// sequence is defined as `0.0` so a blank article never divides by zero.
///
/// Membership is tested against a `HashSet`, so the whole pass is linear in
/// the token count even for articles with thousands of words.
pub fn jaundice_rate(tokens: &[String], charged_words: &HashSet<String>) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let charged = tokens
        .iter()
        .filter(|token| charged_words.contains(token.as_str()))
        .count();
    let rate = charged as f64 / tokens.len() as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charged(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_tokens_score_zero() {
        assert_eq!(jaundice_rate(&[], &charged(&["шок"])), 0.0);
    }

    #[test]
    fn test_no_charged_words_score_zero() {
        let rate = jaundice_rate(&tokens(&["обычный", "текст"]), &charged(&["шок"]));
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_all_charged_words_score_hundred() {
        let rate = jaundice_rate(&tokens(&["шок", "сенсация"]), &charged(&["шок", "сенсация"]));
        assert_eq!(rate, 100.0);
    }

    #[test]
    fn test_ratio_is_rounded_to_two_decimals() {
        // 1 of 3 tokens charged: 33.333...% rounds to 33.33.
        let rate = jaundice_rate(&tokens(&["шок", "два", "три"]), &charged(&["шок"]));
        assert_eq!(rate, 33.33);

        // 2 of 3: 66.666...% rounds to 66.67.
        let rate = jaundice_rate(&tokens(&["шок", "ужас", "три"]), &charged(&["шок", "ужас"]));
        assert_eq!(rate, 66.67);
    }

    #[test]
    fn test_duplicate_tokens_each_count() {
        let rate = jaundice_rate(&tokens(&["шок", "шок", "три", "четыре"]), &charged(&["шок"]));
        assert_eq!(rate, 50.0);
    }

    #[test]
    fn test_rate_stays_within_bounds() {
        let words = tokens(&["один", "шок", "три", "четыре", "пять", "шесть", "семь"]);
        let rate = jaundice_rate(&words, &charged(&["шок"]));
        assert!((0.0..=100.0).contains(&rate));
        assert_eq!(rate, 14.29);
    }
}
