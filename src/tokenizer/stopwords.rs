use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Common English function words.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "almost", "also", "am", "among",
    "an", "and", "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "done", "down",
    "during", "each", "either", "else", "ever", "every", "few", "for", "from", "further", "had",
    "has", "have", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his",
    "how", "however", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "least",
    "less", "may", "me", "might", "more", "most", "much", "must", "my", "myself", "neither",
    "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours",
    "ourselves", "out", "over", "own", "per", "please", "quite", "rather", "really", "same",
    "she", "should", "since", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "there", "these", "they", "this", "those", "though", "through",
    "thus", "to", "too", "under", "until", "up", "upon", "us", "very", "via", "was", "we",
    "well", "were", "what", "whatever", "when", "whence", "where", "whether", "which", "while",
    "who", "whoever", "whom", "whose", "why", "will", "with", "within", "without", "would",
    "yet", "you", "your", "yours", "yourself", "yourselves", "'s", "n't", "'re", "'ve", "'ll",
    "'d", "'m",
];

static ENGLISH: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOPWORDS.iter().copied().collect());

/// Case-insensitive membership in the English stopword list.
pub fn is_stopword(word: &str) -> bool {
    if ENGLISH.contains(word) {
        return true;
    }
    ENGLISH.contains(word.to_lowercase().as_str())
}
