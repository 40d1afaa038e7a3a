//! Line classification for list detection.
//!
//! A line is a bullet item, a numbered item or plain text. Classification
//! only looks at the start of the line, after dropping one leading
//! right-to-left mark and any leading whitespace, so it never changes what
//! text ends up in the document.

use once_cell::sync::Lazy;
use regex::Regex;

/// Right-to-left mark that chat clients prepend to RTL text.
pub const RTL_MARK: char = '\u{200F}';

/// Glyphs that open a bullet item.
pub const BULLET_GLYPHS: [char; 2] = ['•', '▪'];

// ASCII and Extended Arabic-Indic (Persian) digits share one class, so
// mixed-script numbers such as "1۲." are accepted too.
static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9\x{06F0}-\x{06F9}]+[.)]\s").expect("Invalid numbered item regex")
});

/// Kind of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Bullet,
    Numbered,
    Plain,
}

impl LineKind {
    /// Bullet and numbered lines get a hanging indent.
    #[inline]
    pub fn is_list_item(self) -> bool {
        matches!(self, Self::Bullet | Self::Numbered)
    }
}

/// Decides the [`LineKind`] of one line.
///
/// Implementations must be total: a line they cannot place is `Plain`.
pub trait LineClassifier {
    fn classify(&self, line: &str) -> LineKind;
}

/// The bullet-glyph and digit-prefix heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixClassifier;

impl LineClassifier for PrefixClassifier {
    fn classify(&self, line: &str) -> LineKind {
        classify(line)
    }
}

impl<F> LineClassifier for F
where
    F: Fn(&str) -> LineKind,
{
    fn classify(&self, line: &str) -> LineKind {
        self(line)
    }
}

/// The part of a line that classification inspects.
fn lookahead(line: &str) -> &str {
    line.strip_prefix(RTL_MARK).unwrap_or(line).trim_start()
}

/// Classify a line by its prefix.
///
/// ```
/// use rtlscribe::classify::{LineKind, classify};
///
/// assert_eq!(classify("\u{200F} • مورد"), LineKind::Bullet);
/// assert_eq!(classify("۱۲) مورد"), LineKind::Numbered);
/// assert_eq!(classify("متن • ساده"), LineKind::Plain);
/// ```
pub fn classify(line: &str) -> LineKind {
    let view = lookahead(line);
    let kind = if view.starts_with(BULLET_GLYPHS) {
        LineKind::Bullet
    } else if NUMBERED_ITEM.is_match(view) {
        LineKind::Numbered
    } else {
        LineKind::Plain
    };
    log::trace!("classified {:?} as {:?}", line, kind);
    kind
}
