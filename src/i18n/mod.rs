//! Natural-language step keywords.
//!
//! - [`Dialect`] - Step keywords of one language
//! - [`Keywords`] - Repeat-keyword classification and effective keyword resolution

pub mod dialect;
pub mod keywords;

pub use dialect::{Dialect, DIALECTS, DUTCH, ENGLISH, FRENCH, GERMAN, SPANISH, STAR};
pub use keywords::Keywords;
