//! Country and nationality names recognised in news commands

/// Lowercase country/nationality name -> ISO 3166 alpha-2 code
const COUNTRY_CODES: &[(&str, &str)] = &[
    ("italia", "it"), ("italiana", "it"), ("italiano", "it"),
    ("italy", "it"), ("italian", "it"),
    ("stati uniti", "us"), ("usa", "us"), ("america", "us"), ("americana", "us"),
    ("united states", "us"), ("american", "us"),
    ("spagna", "es"), ("spagnola", "es"), ("spagnolo", "es"),
    ("spain", "es"), ("spanish", "es"),
    ("francia", "fr"), ("francese", "fr"),
    ("france", "fr"), ("french", "fr"),
    ("germania", "de"), ("tedesca", "de"), ("tedesco", "de"),
    ("germany", "de"), ("german", "de"),
    ("regno unito", "gb"), ("gran bretagna", "gb"), ("inghilterra", "gb"), ("uk", "gb"),
    ("united kingdom", "gb"), ("britain", "gb"), ("british", "gb"), ("england", "gb"),
    ("portogallo", "pt"), ("portoghese", "pt"), ("portugal", "pt"), ("portuguese", "pt"),
    ("brasile", "br"), ("brasiliana", "br"), ("brazil", "br"), ("brazilian", "br"),
    ("olanda", "nl"), ("paesi bassi", "nl"), ("netherlands", "nl"), ("dutch", "nl"),
    ("giappone", "jp"), ("giapponese", "jp"), ("japan", "jp"), ("japanese", "jp"),
    ("cina", "cn"), ("cinese", "cn"), ("china", "cn"), ("chinese", "cn"),
    ("india", "in"), ("indiana", "in"), ("indian", "in"),
    ("canada", "ca"), ("canadese", "ca"), ("canadian", "ca"),
    ("australia", "au"), ("australiana", "au"), ("australian", "au"),
    ("messico", "mx"), ("messicana", "mx"), ("mexico", "mx"), ("mexican", "mx"),
];

/// News language per country; anything else gets English
const COUNTRY_LANGUAGES: &[(&str, &str)] = &[
    ("it", "it"),
    ("es", "es"),
    ("mx", "es"),
    ("fr", "fr"),
    ("de", "de"),
    ("pt", "pt"),
    ("br", "pt"),
    ("nl", "nl"),
    ("jp", "ja"),
    ("cn", "zh"),
];

pub fn lookup(name: &str) -> Option<&'static str> {
    COUNTRY_CODES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

pub fn language_for(country: &str) -> &'static str {
    COUNTRY_LANGUAGES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(country))
        .map(|(_, lang)| *lang)
        .unwrap_or("en")
}

/// Finds the first country mention scanning left to right.
/// At each position a two-word name wins over a single word.
/// Returns the code and the words left once the mention is removed.
pub fn extract_country(text: &str) -> Option<(&'static str, String)> {
    let words: Vec<&str> = text.split_whitespace().collect();

    for i in 0..words.len() {
        if i + 1 < words.len() {
            let pair = format!("{} {}", words[i], words[i + 1]);
            if let Some(code) = lookup(&pair) {
                return Some((code, join_without(&words, i, 2)));
            }
        }
        if let Some(code) = lookup(words[i]) {
            return Some((code, join_without(&words, i, 1)));
        }
    }
    None
}

fn join_without(words: &[&str], start: usize, len: usize) -> String {
    words
        .iter()
        .enumerate()
        .filter(|(i, _)| *i < start || *i >= start + len)
        .map(|(_, w)| *w)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_lowercase_and_unique() {
        for (i, (name, _)) in COUNTRY_CODES.iter().enumerate() {
            assert_eq!(*name, name.to_lowercase());
            assert!(
                COUNTRY_CODES[i + 1..].iter().all(|(other, _)| other != name),
                "duplicate entry {}",
                name
            );
        }
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(
            extract_country("calcio spagna francia"),
            Some(("es", "calcio francia".to_string()))
        );
    }

    #[test]
    fn two_word_names() {
        assert_eq!(
            extract_country("stati uniti elezioni"),
            Some(("us", "elezioni".to_string()))
        );
        assert_eq!(
            extract_country("brexit united kingdom"),
            Some(("gb", "brexit".to_string()))
        );
    }

    #[test]
    fn only_whole_words_match() {
        // "business" contains "us" but is not a country
        assert_eq!(extract_country("business news"), None);
    }

    #[test]
    fn languages() {
        assert_eq!(language_for("it"), "it");
        assert_eq!(language_for("BR"), "pt");
        assert_eq!(language_for("us"), "en");
        assert_eq!(language_for("gb"), "en");
    }
}
