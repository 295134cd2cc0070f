//! Turns a raw utterance into a typed command

use crate::core::countries;
use crate::error::AssistantError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    News,
    Movie,
    Weather,
    TimeZone,
    Unrecognized,
}

const NEWS_USAGE: &str =
    "Ehi! Devi specificare almeno un argomento o un Paese. Es: 'news sport' o 'news spagna'.";
const MOVIE_USAGE: &str = "Ehi! Dimmi il titolo del film. Es: 'movie interstellar'.";
const WEATHER_USAGE: &str = "Ehi! Dimmi la città. Es: 'weather palermo'.";
const TIMEZONE_USAGE: &str = "Ehi! Dimmi la città. Es: 'timezone tokyo'.";

/// Leading-token prefix, keyword and the guidance shown when its argument is missing.
/// English first, then the Italian aliases.
const KEYWORDS: &[(&str, Keyword, &str)] = &[
    ("news", Keyword::News, NEWS_USAGE),
    ("movie", Keyword::Movie, MOVIE_USAGE),
    ("weather", Keyword::Weather, WEATHER_USAGE),
    ("timezone", Keyword::TimeZone, TIMEZONE_USAGE),
    ("notizie", Keyword::News, NEWS_USAGE),
    ("film", Keyword::Movie, MOVIE_USAGE),
    ("meteo", Keyword::Weather, WEATHER_USAGE),
    ("fuso", Keyword::TimeZone, TIMEZONE_USAGE),
    ("orario", Keyword::TimeZone, TIMEZONE_USAGE),
];

fn match_keyword(token: &str) -> Option<(Keyword, &'static str)> {
    KEYWORDS
        .iter()
        .find(|(prefix, _, _)| token.starts_with(prefix))
        .map(|(_, keyword, usage)| (*keyword, *usage))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub keyword: Keyword,
    pub argument: String,
    /// Only set for news
    pub country_hint: Option<String>,
}

/// Parses one utterance. Case and surrounding whitespace are ignored.
/// `default_country` is used for news when no country is mentioned.
pub fn parse(input: &str, default_country: &str) -> Result<Command, AssistantError> {
    let text = input.trim().to_lowercase();

    let (token, rest) = match text.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim()),
        None => (text.as_str(), ""),
    };

    let (keyword, usage) = match match_keyword(token) {
        Some(found) => found,
        None => {
            return Ok(Command {
                keyword: Keyword::Unrecognized,
                argument: text.clone(),
                country_hint: None,
            })
        }
    };

    if rest.is_empty() {
        return Err(AssistantError::Parse(usage.to_string()));
    }

    if keyword == Keyword::News {
        let (country, topic) = match countries::extract_country(rest) {
            Some((code, topic)) => (code.to_string(), topic),
            None => (default_country.to_lowercase(), rest.to_string()),
        };
        return Ok(Command {
            keyword,
            argument: topic,
            country_hint: Some(country),
        });
    }

    Ok(Command {
        keyword,
        argument: rest.to_string(),
        country_hint: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(input: &str) -> Command {
        parse(input, "it").unwrap()
    }

    #[test]
    fn keywords_any_case_and_padding() {
        let cases = [
            ("news calcio", Keyword::News, "calcio"),
            ("  MOVIE  Interstellar ", Keyword::Movie, "interstellar"),
            ("Weather Palermo", Keyword::Weather, "palermo"),
            ("\ttimezone new york\n", Keyword::TimeZone, "new york"),
            ("notizie borsa", Keyword::News, "borsa"),
            ("Film Il Padrino", Keyword::Movie, "il padrino"),
            ("meteo torino", Keyword::Weather, "torino"),
            ("fuso tokyo", Keyword::TimeZone, "tokyo"),
            ("orario londra", Keyword::TimeZone, "londra"),
        ];

        for (input, keyword, argument) in cases {
            let command = ok(input);
            assert_eq!(command.keyword, keyword, "input {:?}", input);
            assert_eq!(command.argument, argument, "input {:?}", input);
        }
    }

    #[test]
    fn keyword_match_is_a_prefix_of_the_leading_token() {
        assert_eq!(ok("newsfeed calcio").keyword, Keyword::News);
        assert_eq!(ok("movies alien").keyword, Keyword::Movie);
    }

    #[test]
    fn news_extracts_country() {
        let command = ok("news spain football");
        assert_eq!(command.country_hint.as_deref(), Some("es"));
        assert_eq!(command.argument, "football");
    }

    #[test]
    fn news_without_country_uses_fallback() {
        let command = ok("news champions league");
        assert_eq!(command.country_hint.as_deref(), Some("it"));
        assert_eq!(command.argument, "champions league");

        let command = parse("news champions league", "FR").unwrap();
        assert_eq!(command.country_hint.as_deref(), Some("fr"));
    }

    #[test]
    fn news_country_only_means_top_headlines() {
        let command = ok("notizie Spagna");
        assert_eq!(command.country_hint.as_deref(), Some("es"));
        assert_eq!(command.argument, "");
    }

    #[test]
    fn other_commands_have_no_country() {
        let command = ok("weather spagna");
        assert_eq!(command.country_hint, None);
        assert_eq!(command.argument, "spagna");
    }

    #[test]
    fn lone_keyword_is_a_parse_error() {
        for input in ["news", "movie", " WEATHER ", "timezone", "meteo"] {
            assert!(
                matches!(parse(input, "it"), Err(AssistantError::Parse(_))),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn lone_keyword_guidance_matches_the_keyword() {
        assert_eq!(parse("notizie", "it"), Err(AssistantError::Parse(NEWS_USAGE.to_string())));
        assert_eq!(parse("FILM", "it"), Err(AssistantError::Parse(MOVIE_USAGE.to_string())));
        assert_eq!(parse("meteo ", "it"), Err(AssistantError::Parse(WEATHER_USAGE.to_string())));
        assert_eq!(parse("orario", "it"), Err(AssistantError::Parse(TIMEZONE_USAGE.to_string())));
    }

    #[test]
    fn unknown_input_is_unrecognized() {
        let command = ok("ciao come stai");
        assert_eq!(command.keyword, Keyword::Unrecognized);
        assert_eq!(command.argument, "ciao come stai");

        assert_eq!(ok("").keyword, Keyword::Unrecognized);
        assert_eq!(ok("   ").keyword, Keyword::Unrecognized);
    }
}
