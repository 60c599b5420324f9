//! Zone name conventions.
//!
//! - Answer cells are `<question><option>`, e.g. `12A`
//! - Matrix cells are `<prefix><row><col>`, e.g. `D07`
//! - Pasted names that collide get `_1`, `_2`, ... appended

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A name of the form *leading integer followed by a letter suffix*.
///
/// Parsed structurally so renumbering works on the number itself, not on
/// a textual prefix of the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneName {
    pub number: u32,
    pub suffix: String,
}

impl ZoneName {
    /// Parses `12A`-style names. Anything else (`D00`, `1A_1`, `A1`,
    /// numbers that overflow `u32`) yields `None`.
    pub fn parse(name: &str) -> Option<Self> {
        static NUMBERED_NAME: OnceLock<Regex> = OnceLock::new();
        let regex = NUMBERED_NAME
            .get_or_init(|| Regex::new(r"^(\d+)([A-Za-z]+)$").expect("invalid regex pattern"));
        let captures = regex.captures(name)?;
        let number = captures[1].parse().ok()?;
        Some(Self {
            number,
            suffix: captures[2].to_string(),
        })
    }
}

impl fmt::Display for ZoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.suffix)
    }
}

/// Splits `name` into its leading number and whatever follows it.
///
/// Looser than [`ZoneName::parse`]: `1A_1` gives `(1, "A_1")`. Names
/// without leading digits, or whose number overflows `u32`, yield `None`.
pub fn leading_number(name: &str) -> Option<(u32, &str)> {
    static LEADING_NUMBER: OnceLock<Regex> = OnceLock::new();
    let regex = LEADING_NUMBER
        .get_or_init(|| Regex::new(r"^(\d+)(.*)$").expect("invalid regex pattern"));
    let captures = regex.captures(name)?;
    let number = captures[1].parse().ok()?;
    let rest = captures.get(2).map_or("", |m| m.as_str());
    Some((number, rest))
}

/// Name of an answer cell: question number then option letter.
pub fn answer_cell(question: u32, option: &str) -> String {
    format!("{}{}", question, option)
}

/// Name of a matrix cell: prefix, row digit(s), column digit(s).
pub fn matrix_cell(prefix: &str, row: u32, col: u32) -> String {
    format!("{}{}{}", prefix, row, col)
}

/// Returns `base` if it is free, otherwise the first free `base_N`
/// for N = 1, 2, ...
pub fn unique_name(base: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(base) {
        return base.to_string();
    }
    (1u32..)
        .map(|counter| format!("{}_{}", base, counter))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| base.to_string())
}
