//! Final document assembly.

use summary_core::error::Result;

use crate::validate::validate_braces;

/// Preamble of the assembled summary document.
pub const PREAMBLE: &str = r"\documentclass{article}
\usepackage[a4paper, margin=1in]{geometry}
\usepackage{hyperref}
\usepackage{amsmath}
\usepackage{enumitem}
\begin{document}
";

/// Turn a chapter file stem into a section title: underscores become
/// spaces, each word is capitalized.
pub fn title_case(name: &str) -> String {
    name.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wrap the ordered summaries in the fixed preamble and closing tag.
/// The whole document is brace-validated before being returned, so an
/// unbalanced result is never written to disk.
pub fn assemble(summaries: &[(String, String)]) -> Result<String> {
    let mut content = String::from(PREAMBLE);
    for (name, summary) in summaries {
        content.push_str(&format!("\\section*{{{}}}\n", title_case(name)));
        content.push_str(summary);
        content.push_str("\n\n");
    }
    content.push_str("\\end{document}");
    validate_braces(&content)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("01_intro"), "01 Intro");
        assert_eq!(title_case("linear_models"), "Linear Models");
        assert_eq!(title_case("ALL_CAPS"), "All Caps");
        assert_eq!(title_case("plain"), "Plain");
    }

    #[test]
    fn test_assemble_empty_is_valid() {
        let doc = assemble(&[]).unwrap();
        assert!(doc.starts_with("\\documentclass{article}"));
        assert!(doc.ends_with("\\end{document}"));
        assert_eq!(doc.matches('{').count(), doc.matches('}').count());
    }

    #[test]
    fn test_assemble_orders_sections() {
        let summaries = vec![
            ("01_intro".to_string(), "Intro body.".to_string()),
            ("02_methods".to_string(), "Methods body.".to_string()),
        ];
        let doc = assemble(&summaries).unwrap();
        let intro = doc.find("\\section*{01 Intro}").unwrap();
        let methods = doc.find("\\section*{02 Methods}").unwrap();
        assert!(intro < methods);
        assert!(doc.contains("Intro body."));
        assert!(doc.contains("Methods body."));
        assert!(doc.ends_with("\\end{document}"));
    }

    #[test]
    fn test_assemble_rejects_unbalanced_summary() {
        let summaries = vec![("01_intro".to_string(), "\\subsubsection*{Oops".to_string())];
        assert!(assemble(&summaries).is_err());
    }
}
