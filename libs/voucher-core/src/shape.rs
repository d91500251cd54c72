//! Declarative code-shape descriptors
//!
//! A [`CodeShape`] describes how a brand's voucher string is assembled:
//! how many groups, how long each group is, which separator joins them and
//! which alphabet the characters are drawn from. The generator and the
//! derived validation pattern both consume the same descriptor, so the two
//! cannot disagree on shape.

/// Character set a voucher group draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// Uppercase letters and digits (`A-Z0-9`).
    UpperAlphanumeric,
    /// Decimal digits (`0-9`).
    Digits,
}

impl Alphabet {
    /// Characters that may be drawn from this alphabet.
    pub fn charset(self) -> &'static [u8] {
        match self {
            Alphabet::UpperAlphanumeric => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
            Alphabet::Digits => b"0123456789",
        }
    }

    /// Regex character class matching exactly one character of this alphabet.
    pub fn regex_class(self) -> &'static str {
        match self {
            Alphabet::UpperAlphanumeric => "[A-Z0-9]",
            Alphabet::Digits => "[0-9]",
        }
    }
}

/// Structural description of a brand's voucher string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeShape {
    /// Number of character groups.
    pub groups: usize,
    /// Characters per group.
    pub group_len: usize,
    /// Separator between groups. Inserted literally into the derived
    /// pattern, so it must not be a regex metacharacter.
    pub separator: char,
    /// Alphabet the characters are drawn from.
    pub alphabet: Alphabet,
}

impl CodeShape {
    pub const fn new(groups: usize, group_len: usize, separator: char, alphabet: Alphabet) -> Self {
        Self {
            groups,
            group_len,
            separator,
            alphabet,
        }
    }

    /// Anchored regex pattern matching exactly this shape.
    pub fn pattern(&self) -> String {
        let group = format!("{}{{{}}}", self.alphabet.regex_class(), self.group_len);
        let body = vec![group; self.groups].join(&self.separator.to_string());
        format!("^{body}$")
    }

    /// Total character length of a voucher, separators included.
    pub fn expected_len(&self) -> usize {
        self.groups * self.group_len + self.groups.saturating_sub(1)
    }
}
