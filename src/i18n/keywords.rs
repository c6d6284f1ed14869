//! Effective keyword resolution.
//!
//! `And`, `But` and the `*` bullet have no meaning of their own in a
//! report: they render as the nearest preceding concrete keyword.

use crate::i18n::dialect::{Dialect, STAR};

/// Keyword classification for one dialect.
///
/// # Example
///
/// ```
/// use cukerun::i18n::{Keywords, ENGLISH};
///
/// let keywords = Keywords::new(&ENGLISH);
/// let block = ["Given ", "And ", "But "];
///
/// assert_eq!(keywords.actual_keyword(&block, 2).as_deref(), Some("Given "));
/// assert_eq!(keywords.actual_keyword(&["And "], 0).as_deref(), Some("And "));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Keywords {
    dialect: &'static Dialect,
}

impl Keywords {
    /// Create a classifier for a dialect.
    pub fn new(dialect: &'static Dialect) -> Self {
        Self { dialect }
    }

    /// The dialect's `and`/`but` keywords, without the bullet.
    pub fn repeat_keywords(&self) -> Vec<&'static str> {
        let mut repeats: Vec<&'static str> = Vec::new();
        for keyword in self.dialect.but.iter().chain(self.dialect.and) {
            if *keyword != STAR && !repeats.contains(keyword) {
                repeats.push(*keyword);
            }
        }
        repeats
    }

    /// Whether `keyword` repeats the previous step's keyword.
    pub fn is_repeat_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        self.repeat_keywords()
            .iter()
            .any(|repeat| repeat.trim() == keyword)
    }

    /// Whether `keyword` is the generic bullet.
    pub fn is_star(keyword: &str) -> bool {
        keyword.trim() == STAR.trim()
    }

    /// Keyword a leading bullet renders as: the dialect's first step keyword
    /// that is neither the bullet nor a repeater.
    pub fn star_code_keyword(&self) -> &'static str {
        let repeats = self.repeat_keywords();
        self.dialect
            .step_keywords()
            .find(|keyword| *keyword != STAR && !repeats.contains(keyword))
            .unwrap_or(STAR)
    }

    /// Resolve the effective keyword of `block[index]`.
    ///
    /// Repeat keywords and bullets walk back to the closest earlier step with
    /// a concrete keyword. A repeat keyword on the first step keeps its
    /// literal text; a bullet on the first step becomes
    /// [`star_code_keyword`](Self::star_code_keyword). Returns `None` when
    /// `index` is out of range.
    pub fn actual_keyword(&self, block: &[&str], index: usize) -> Option<String> {
        let mut current = index;
        loop {
            let keyword = *block.get(current)?;
            let repeats = Self::is_star(keyword) || self.is_repeat_keyword(keyword);

            if repeats && current > 0 {
                current -= 1;
                continue;
            }

            return Some(if Self::is_star(keyword) {
                self.star_code_keyword().to_string()
            } else {
                keyword.to_string()
            });
        }
    }
}
