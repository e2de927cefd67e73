//! Sanitization rules applied to raw model output before a summary is
//! accepted into the final document.
//!
//! Each rule is an independent transformation; `standard_rules` returns the
//! chain in its fixed execution order. Order matters: escaped backslashes
//! are collapsed before any pattern matching, and specials escaping runs
//! after punctuation normalization so it sees the final characters.

use once_cell::sync::Lazy;
use regex::Regex;

/// One step of the sanitization chain.
pub trait SanitizeRule {
    /// Human-readable name of this rule.
    fn name(&self) -> &str;

    /// Apply this rule to the text.
    fn apply(&self, text: &str) -> String;
}

/// Collapses doubled backslashes that chat models emit when they escape
/// LaTeX commands inside JSON strings.
pub struct CollapseEscapedBackslashes;

impl SanitizeRule for CollapseEscapedBackslashes {
    fn name(&self) -> &str {
        "CollapseEscapedBackslashes"
    }

    fn apply(&self, text: &str) -> String {
        text.replace("\\\\", "\\")
    }
}

/// Strips document-level commands that belong in a preamble, not in a body
/// fragment. Line-oriented commands are removed up to and including their
/// newline; `\maketitle` and the document environment markers are removed
/// wherever they appear.
pub struct StripPreamble;

static PREAMBLE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\(documentclass|usepackage|geometry|title|author|date)[^\n]*\n").unwrap()
});

static PREAMBLE_INLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\maketitle|\\begin\{document\}|\\end\{document\}").unwrap());

impl SanitizeRule for StripPreamble {
    fn name(&self) -> &str {
        "StripPreamble"
    }

    fn apply(&self, text: &str) -> String {
        let text = PREAMBLE_LINE.replace_all(text, "");
        PREAMBLE_INLINE.replace_all(&text, "").into_owned()
    }
}

/// Removes markdown code fences (```latex and bare ```).
pub struct StripMarkdownFences;

impl SanitizeRule for StripMarkdownFences {
    fn name(&self) -> &str {
        "StripMarkdownFences"
    }

    fn apply(&self, text: &str) -> String {
        text.replace("```latex", "").replace("```", "")
    }
}

/// Demotes `\section*` headers to `\subsubsection*` so chapter summaries
/// never outrank the per-chapter titles the assembler adds.
pub struct DemoteSections;

impl SanitizeRule for DemoteSections {
    fn name(&self) -> &str {
        "DemoteSections"
    }

    fn apply(&self, text: &str) -> String {
        text.replace("\\section*{", "\\subsubsection*{")
    }
}

/// Replaces typographic quotes and dashes with their ASCII/LaTeX forms.
pub struct NormalizePunctuation;

/// Character replacement pairs: (from, to).
const REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{2019}", "'"),   // right single quote
    ("\u{2018}", "'"),   // left single quote
    ("\u{201c}", "\""),  // left double quote
    ("\u{201d}", "\""),  // right double quote
    ("\u{2014}", "---"), // em-dash
    ("\u{2013}", "--"),  // en-dash
];

impl SanitizeRule for NormalizePunctuation {
    fn name(&self) -> &str {
        "NormalizePunctuation"
    }

    fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for &(from, to) in REPLACEMENTS {
            if out.contains(from) {
                out = out.replace(from, to);
            }
        }
        out
    }
}

/// Backslash-escapes the LaTeX specials `% $ & # _ ^ ~` wherever they are
/// not already preceded by a backslash. A manual scan rather than a regex:
/// the regex crate has no lookbehind.
pub struct EscapeSpecials;

impl SanitizeRule for EscapeSpecials {
    fn name(&self) -> &str {
        "EscapeSpecials"
    }

    fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 8);
        let mut prev = '\0';
        for c in text.chars() {
            if matches!(c, '%' | '$' | '&' | '#' | '_' | '^' | '~') && prev != '\\' {
                out.push('\\');
            }
            out.push(c);
            prev = c;
        }
        out
    }
}

/// Strips optional-argument brackets from `itemize`/`enumerate` openings;
/// the assembled document loads enumitem but summaries must not pass
/// options the model invented.
pub struct StripListOptions;

static LIST_OPTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\begin\{(itemize|enumerate)\}\[[^\]\n]*\]").unwrap());

impl SanitizeRule for StripListOptions {
    fn name(&self) -> &str {
        "StripListOptions"
    }

    fn apply(&self, text: &str) -> String {
        LIST_OPTS.replace_all(text, r"\begin{$1}").into_owned()
    }
}

/// Collapses runs of blank lines (including whitespace-only lines) to one
/// blank line.
pub struct CollapseBlankLines;

static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

impl SanitizeRule for CollapseBlankLines {
    fn name(&self) -> &str {
        "CollapseBlankLines"
    }

    fn apply(&self, text: &str) -> String {
        BLANK_RUN.replace_all(text, "\n\n").into_owned()
    }
}

/// The sanitization chain in its fixed execution order.
pub fn standard_rules() -> Vec<Box<dyn SanitizeRule>> {
    vec![
        Box::new(CollapseEscapedBackslashes),
        Box::new(StripPreamble),
        Box::new(StripMarkdownFences),
        Box::new(DemoteSections),
        Box::new(NormalizePunctuation),
        Box::new(EscapeSpecials),
        Box::new(StripListOptions),
        Box::new(CollapseBlankLines),
    ]
}

/// Run the full chain over raw model output and trim surrounding whitespace.
pub fn sanitize(raw: &str) -> String {
    let mut text = raw.to_string();
    for rule in standard_rules() {
        text = rule.apply(&text);
    }
    text.trim().to_string()
}
