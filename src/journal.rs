//! Printed names for common astronomy journal macros.

/// Canonical printed names for the journal macros defined by the AAS macro
/// package, e.g. `\apj`.
const JOURNAL_NAMES: [(&str, &str); 14] = [
    ("aj", "AJ"),
    ("araa", "ARA&A"),
    ("apj", "ApJ"),
    ("apjl", "ApJ"),
    ("apjs", "ApJS"),
    ("apss", "Ap&SS"),
    ("aap", "A&A"),
    ("aapr", "A&A Rev."),
    ("aaps", "A&AS"),
    ("mnras", "MNRAS"),
    ("memras", "MmRAS"),
    ("nat", "Nature"),
    ("pasp", "PASP"),
    ("aplett", "Astrophys. Lett."),
];

/// Resolve a journal abbreviation macro to its printed name.
///
/// The leading backslash of a macro form such as `\apj` is stripped before
/// lookup. Unknown codes are returned as-is, and anything containing `arxiv`
/// (case-insensitively) is passed through untouched, since preprint
/// identifiers are not abbreviations.
///
/// # Example
/// ```
/// use bibcite::journal::resolve;
///
/// assert_eq!(resolve("\\apj"), "ApJ");
/// assert_eq!(resolve("mnras"), "MNRAS");
/// assert_eq!(resolve("arXiv e-prints"), "arXiv e-prints");
/// assert_eq!(resolve("Icarus"), "Icarus");
/// ```
pub fn resolve(journal: &str) -> &str {
    if journal.to_ascii_lowercase().contains("arxiv") {
        return journal;
    }
    let code = journal.trim_start_matches('\\');
    match JOURNAL_NAMES.iter().find(|(macro_name, _)| *macro_name == code) {
        Some((_, printed)) => printed,
        None => code,
    }
}
