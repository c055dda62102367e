//! Turning raw author and editor name lists into display text.

use itertools::Itertools;
use memchr::memchr;

use crate::markup::MarkupCodec;

/// The parenthetical marker for a single editor.
pub const SINGLE_EDITOR: &str = "(Ed.)";
/// The parenthetical marker for multiple editors.
pub const MULTIPLE_EDITORS: &str = "(Eds.)";

/// Truncation rules for rendering a list of names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// How many names to keep when the list is truncated.
    pub show: usize,
    /// The largest list rendered in full.
    pub max: usize,
    /// Render every name regardless of `max`.
    pub show_all: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            show: 3,
            max: 8,
            show_all: false,
        }
    }
}

/// Split a raw author or editor field on the literal `" and "` separator.
pub fn split_list(field: &str) -> Vec<&str> {
    field.split(" and ").collect()
}

/// Strip brace markers, replace ties with plain spaces, and trim.
pub fn clean(text: &str) -> String {
    text.replace(['{', '}'], "").replace('~', " ").trim().to_owned()
}

/// Clean one raw name for display, transliterating through `codec` first if
/// it carries markup.
fn clean_name<C: MarkupCodec>(raw: &str, codec: &C) -> String {
    if memchr(b'\\', raw.as_bytes()).is_some() {
        clean(&codec.to_plain(raw))
    } else {
        clean(raw)
    }
}

/// Join cleaned names according to the truncation rules.
///
/// One name is returned unchanged and two are joined with `" and "`. Longer
/// lists are semicolon-separated with the final name joined by `" and "`,
/// unless the list exceeds `max` (and `show_all` is off), in which case only
/// the first `show` names are kept, followed by `" et al."`.
fn join_names(names: &[String], options: &ListOptions) -> String {
    match names {
        [] => String::new(),
        [name] => name.clone(),
        [a, b] => format!("{a} and {b}"),
        _ if !options.show_all && names.len() > options.max => {
            let shown = names.iter().take(options.show).join("; ");
            format!("{shown} et al.")
        }
        [head @ .., tail] => format!("{} and {}", head.iter().join("; "), tail),
    }
}

/// Format a list of raw author names for display.
///
/// # Example
/// ```
/// use bibcite::list::{format_author_list, ListOptions};
/// use bibcite::markup::Identity;
///
/// let names = ["Smith, A.", "Jones, B.", "Brown, C."];
/// assert_eq!(
///     format_author_list(&names, &ListOptions::default(), &Identity),
///     "Smith, A.; Jones, B. and Brown, C."
/// );
/// ```
pub fn format_author_list<S, C>(raw_names: &[S], options: &ListOptions, codec: &C) -> String
where
    S: AsRef<str>,
    C: MarkupCodec,
{
    let names: Vec<String> = raw_names
        .iter()
        .map(|raw| clean_name(raw.as_ref(), codec))
        .collect();
    join_names(&names, options)
}

/// Format a list of raw editor names for display, returning the joined list
/// and the `(Ed.)`/`(Eds.)` marker.
///
/// Editor lists are never truncated.
pub fn format_editor_list<S, C>(raw_names: &[S], codec: &C) -> (String, &'static str)
where
    S: AsRef<str>,
    C: MarkupCodec,
{
    let marker = if raw_names.len() > 1 {
        MULTIPLE_EDITORS
    } else {
        SINGLE_EDITOR
    };
    let names: Vec<String> = raw_names
        .iter()
        .map(|raw| clean_name(raw.as_ref(), codec))
        .collect();
    let options = ListOptions {
        show_all: true,
        ..ListOptions::default()
    };
    (join_names(&names, &options), marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Identity;

    fn authors(names: &[&str]) -> String {
        format_author_list(names, &ListOptions::default(), &Identity)
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean("{van der Berg}, A.~B. "), "van der Berg, A. B.");
        assert_eq!(clean("plain"), "plain");
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("Smith, A. and Jones, B."),
            ["Smith, A.", "Jones, B."]
        );
        // "and" embedded in a name does not split.
        assert_eq!(split_list("Anderson, P."), ["Anderson, P."]);
    }

    #[test]
    fn test_join_counts() {
        assert_eq!(authors(&["A"]), "A");
        assert_eq!(authors(&["A", "B"]), "A and B");
        assert_eq!(authors(&["A", "B", "C"]), "A; B and C");
        assert_eq!(
            authors(&["A", "B", "C", "D", "E", "F", "G", "H"]),
            "A; B; C; D; E; F; G and H"
        );
    }

    #[test]
    fn test_truncation() {
        let nine: Vec<String> = (1..=9).map(|i| format!("N{i}")).collect();
        assert_eq!(
            format_author_list(&nine, &ListOptions::default(), &Identity),
            "N1; N2; N3 et al."
        );

        let all = ListOptions {
            show_all: true,
            ..ListOptions::default()
        };
        assert_eq!(
            format_author_list(&nine, &all, &Identity),
            "N1; N2; N3; N4; N5; N6; N7; N8 and N9"
        );
    }

    #[test]
    fn test_markup_names_are_transliterated() {
        struct Umlauts;
        impl MarkupCodec for Umlauts {
            fn to_plain(&self, markup: &str) -> String {
                markup.replace("{\\\"u}", "ü")
            }
            fn to_markup(&self, plain: &str) -> String {
                plain.replace('ü', "{\\\"u}")
            }
        }

        assert_eq!(
            format_author_list(&["M{\\\"u}ller, H."], &ListOptions::default(), &Umlauts),
            "Müller, H."
        );
        // Plain names skip the codec.
        assert_eq!(
            format_author_list(&["{Miller}, H."], &ListOptions::default(), &Umlauts),
            "Miller, H."
        );
    }

    #[test]
    fn test_editor_markers() {
        let (joined, marker) = format_editor_list(&["Smith, A."], &Identity);
        assert_eq!(joined, "Smith, A.");
        assert_eq!(marker, SINGLE_EDITOR);

        let (joined, marker) = format_editor_list(&["A", "B"], &Identity);
        assert_eq!(joined, "A and B");
        assert_eq!(marker, MULTIPLE_EDITORS);

        let (joined, marker) = format_editor_list(&["A", "B", "C"], &Identity);
        assert_eq!(joined, "A; B and C");
        assert_eq!(marker, MULTIPLE_EDITORS);
    }

    #[test]
    fn test_editor_list_never_truncates() {
        let many: Vec<String> = (1..=10).map(|i| format!("E{i}")).collect();
        let (joined, marker) = format_editor_list(&many, &Identity);
        assert!(joined.ends_with("E9 and E10"));
        assert_eq!(marker, MULTIPLE_EDITORS);
    }
}
