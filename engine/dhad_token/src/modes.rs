//! The three program representations and the knobs that move between them.

use std::fmt;

/// One of the three textual representations of a program.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Full English vocabulary, no directional markup.
    Primary,
    /// Full Arabic vocabulary with directional isolate markup for RTL
    /// rendering.
    Localized,
    /// English keywords, Arabic identifiers, no markup. The form handed to
    /// the stock compiler.
    Hybrid,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Primary => "primary",
            Mode::Localized => "localized",
            Mode::Hybrid => "hybrid",
        };
        f.write_str(name)
    }
}

/// Which vocabulary a translation pass moves symbols toward.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Arabic symbols become English.
    ToPrimary,
    /// English symbols become Arabic.
    ToLocalized,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::ToPrimary => "to-primary",
            Direction::ToLocalized => "to-localized",
        };
        f.write_str(name)
    }
}

/// How much of the token stream a translation pass may touch.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Scope {
    /// Only reserved words change; identifiers pass through verbatim.
    KeywordsOnly,
    /// Keywords and identifiers are both looked up.
    Full,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scope::KeywordsOnly => "keywords-only",
            Scope::Full => "full",
        };
        f.write_str(name)
    }
}
