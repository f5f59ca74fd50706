use regex::RegexSet;
use std::sync::LazyLock;

/// Whitespace absorbed around a title: the Unicode `White_Space` set, matching what
/// `char::is_whitespace` and `str::trim` treat as whitespace.
pub const TITLE_WHITESPACE: &[char] = &[
    '\t', '\n', '\u{0B}', '\u{0C}', '\r', ' ', '\u{85}', '\u{A0}', '\u{1680}', '\u{2000}',
    '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}', '\u{2007}',
    '\u{2008}', '\u{2009}', '\u{200A}', '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}',
    '\u{3000}',
];

// Bracket class over `TITLE_WHITESPACE`, written with literal characters so every engine
// reads the same set without relying on its own escape syntax.
macro_rules! ws {
    () => {
        "[\t\n\u{0B}\u{0C}\r \u{85}\u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}]"
    };
}

/// A single rule for recognising auto-assigned photo titles.
///
/// The `pattern` is written in the subset of regular expression syntax shared by the
/// Rust `regex` crate, PostgreSQL (`~`), MySQL 8 (ICU) and MariaDB (PCRE), so the exact
/// same string is used in application code and bound as a query parameter. Surrounding
/// whitespace is absorbed by the pattern itself. It is spelled out as a literal class
/// because `[[:space:]]` and `\s` disagree between those engines on non-ASCII input.
///
/// The `glob` is a SQLite `GLOB` expression that accepts every title the pattern
/// accepts (and possibly more) once the title has been trimmed of [`TITLE_WHITESPACE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub glob: &'static str,
}

pub const TITLE_RULES: &[TitleRule] = &[
    TitleRule {
        name: "blank",
        pattern: concat!("^", ws!(), "*$"),
        glob: "",
    },
    TitleRule {
        name: "uuid",
        pattern: concat!(
            "^",
            ws!(),
            r"*(?:[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}|[0-9a-fA-F]{32})(?:\.[A-Za-z0-9_]+)?",
            ws!(),
            "*$"
        ),
        glob: "[0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F]*",
    },
    TitleRule {
        name: "camera_prefix",
        pattern: concat!("^", ws!(), r"*[A-Za-z0-9]{3}_[0-9]+(?:\.[A-Za-z0-9_]+)?", ws!(), "*$"),
        glob: "[A-Za-z0-9][A-Za-z0-9][A-Za-z0-9]_[0-9]*",
    },
    TitleRule {
        name: "p_series",
        pattern: concat!("^", ws!(), r"*P[0-9]{7}(?:\.[A-Za-z0-9_]+)?", ws!(), "*$"),
        glob: "P[0-9][0-9][0-9][0-9][0-9][0-9][0-9]*",
    },
    TitleRule {
        name: "timestamp",
        pattern: concat!("^", ws!(), r"*[0-9]{8}_[0-9]{6}(?:\.[A-Za-z0-9_]+)?", ws!(), "*$"),
        glob: "[0-9][0-9][0-9][0-9][0-9][0-9][0-9][0-9]_[0-9][0-9][0-9][0-9][0-9][0-9]*",
    },
    TitleRule {
        name: "whatsapp",
        pattern: concat!("^", ws!(), r"*IMG-[0-9]{8}-WA[0-9]{4}(?:\.[A-Za-z0-9_]+)?", ws!(), "*$"),
        glob: "IMG-[0-9][0-9][0-9][0-9][0-9][0-9][0-9][0-9]-WA[0-9][0-9][0-9][0-9]*",
    },
    TitleRule {
        name: "screenshot",
        pattern: concat!("^", ws!(), "*Screenshot"),
        glob: "Screenshot*",
    },
    TitleRule {
        name: "idg_prefix",
        pattern: concat!("^", ws!(), "*IDG_"),
        glob: "IDG_*",
    },
];

static TITLE_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(TITLE_RULES.iter().map(|rule| rule.pattern))
        .expect("title rule patterns are valid")
});

/// Returns `true` when the title looks camera-, phone- or tool-assigned rather than typed
/// by a person. Empty and whitespace-only titles are generic.
#[must_use]
pub fn is_generic_title(title: &str) -> bool {
    TITLE_SET.is_match(title)
}

/// Returns the first rule (in table order) that classifies the title as generic.
#[must_use]
pub fn matching_rule(title: &str) -> Option<&'static TitleRule> {
    TITLE_SET
        .matches(title)
        .iter()
        .next()
        .map(|index| &TITLE_RULES[index])
}

/// Like [`is_generic_title`], treating a missing title as generic.
#[must_use]
pub fn is_generic_title_opt(title: Option<&str>) -> bool {
    title.is_none_or(is_generic_title)
}
