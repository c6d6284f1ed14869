//! Built-in keyword dialects.

use crate::error::{CukeError, Result};

/// The generic bullet keyword, valid in every dialect.
pub const STAR: &str = "* ";

/// Step keywords of one natural language.
///
/// Keywords are spelled as they appear in feature files, including the
/// trailing space where the language separates keyword and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Language code (`en`, `fr`, ...).
    pub code: &'static str,
    /// English name of the language.
    pub name: &'static str,
    pub given: &'static [&'static str],
    pub when: &'static [&'static str],
    pub then: &'static [&'static str],
    pub and: &'static [&'static str],
    pub but: &'static [&'static str],
}

pub static ENGLISH: Dialect = Dialect {
    code: "en",
    name: "English",
    given: &[STAR, "Given "],
    when: &[STAR, "When "],
    then: &[STAR, "Then "],
    and: &[STAR, "And "],
    but: &[STAR, "But "],
};

pub static FRENCH: Dialect = Dialect {
    code: "fr",
    name: "French",
    given: &[
        STAR,
        "Soit ",
        "Etant donné ",
        "Etant donnée ",
        "Etant donnés ",
        "Etant données ",
        "Étant donné ",
        "Étant donnée ",
        "Étant donnés ",
        "Étant données ",
    ],
    when: &[STAR, "Quand ", "Lorsque ", "Lorsqu'"],
    then: &[STAR, "Alors "],
    and: &[STAR, "Et "],
    but: &[STAR, "Mais "],
};

pub static GERMAN: Dialect = Dialect {
    code: "de",
    name: "German",
    given: &[STAR, "Angenommen ", "Gegeben sei ", "Gegeben seien "],
    when: &[STAR, "Wenn "],
    then: &[STAR, "Dann "],
    and: &[STAR, "Und "],
    but: &[STAR, "Aber "],
};

pub static SPANISH: Dialect = Dialect {
    code: "es",
    name: "Spanish",
    given: &[STAR, "Dado ", "Dada ", "Dados ", "Dadas "],
    when: &[STAR, "Cuando "],
    then: &[STAR, "Entonces "],
    and: &[STAR, "Y ", "E "],
    but: &[STAR, "Pero "],
};

pub static DUTCH: Dialect = Dialect {
    code: "nl",
    name: "Dutch",
    given: &[STAR, "Gegeven ", "Stel "],
    when: &[STAR, "Als ", "Wanneer "],
    then: &[STAR, "Dan "],
    and: &[STAR, "En "],
    but: &[STAR, "Maar "],
};

/// All built-in dialects.
pub static DIALECTS: &[&Dialect] = &[&ENGLISH, &FRENCH, &GERMAN, &SPANISH, &DUTCH];

impl Dialect {
    /// Find a built-in dialect by language code.
    pub fn lookup(code: &str) -> Result<&'static Dialect> {
        DIALECTS
            .iter()
            .copied()
            .find(|d| d.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| CukeError::UnknownLanguage {
                code: code.to_string(),
            })
    }

    /// Step keywords in declaration order: given, when, then, and, but.
    pub fn step_keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.given
            .iter()
            .chain(self.when)
            .chain(self.then)
            .chain(self.and)
            .chain(self.but)
            .copied()
    }
}
