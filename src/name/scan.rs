//! Character-level scanner for BibTeX name strings.
//!
//! A name is scanned left to right into comma-separated sections of
//! whitespace-separated words, tracking brace depth and escape sequences so
//! that commas and whitespace inside a brace group are ordinary characters.
//! Each word carries the case of the first alphabetic character usable for
//! classification, which drives the section interpretation in
//! [`name`](crate::name).

use crate::error::{NameError, NameErrorKind};
use crate::name::Mode;

/// Case of a word, determined by its first classifiable alphabetic character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Case {
    Upper,
    Lower,
    /// No alphabetic character was available for classification.
    Caseless,
}

/// One whitespace-delimited word, with brace groups and escapes kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Word {
    pub text: String,
    pub case: Case,
}

/// Whitespace characters that separate words. The tie `~` is a non-breaking
/// space in BibTeX and separates words like any other whitespace.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '~' | '\r' | '\n' | '\t')
}

fn case_of(c: char) -> Case {
    if c.is_uppercase() { Case::Upper } else { Case::Lower }
}

/// Scanner state for a single pass over one name string.
struct Scanner {
    sections: Vec<Vec<Word>>,
    /// Characters of the word currently being assembled.
    word: String,
    /// Case of the current word, once determined.
    case: Option<Case>,
    /// Current brace nesting depth.
    depth: usize,
    /// The next character is the first inside a brace group.
    brace_start: bool,
    /// Currently inside a backslash-letter control sequence.
    control_seq: bool,
    /// Currently inside a special-character group, whose first classifiable
    /// letter determines the word case.
    special_char: bool,
}

impl Scanner {
    fn new() -> Self {
        Self {
            sections: vec![Vec::new()],
            word: String::new(),
            case: None,
            depth: 0,
            brace_start: false,
            control_seq: false,
            special_char: false,
        }
    }

    /// Terminate the current word, if any, and append it to the open section.
    fn finish_word(&mut self) {
        if !self.word.is_empty() {
            let word = Word {
                text: std::mem::take(&mut self.word),
                case: self.case.unwrap_or(Case::Caseless),
            };
            self.sections.last_mut().expect("at least one section").push(word);
            self.case = None;
            self.control_seq = false;
            self.special_char = false;
        }
    }

    /// Record a classifiable character if the current word has no case yet.
    fn classify(&mut self, c: char) {
        if self.case.is_none() && c.is_alphabetic() {
            self.case = Some(case_of(c));
        }
    }
}

/// Scan `input` into comma-separated sections of words.
///
/// In [`Mode::Strict`] the four documented syntax errors are returned; in
/// [`Mode::Lenient`] each is recovered from: a missing closing brace is
/// synthesized at the end, an unmatched closing brace gains a synthetic
/// opening brace at the start of its word, content after a third comma folds
/// into the final section, and an empty trailing section is dropped.
pub(crate) fn scan(input: &str, mode: Mode) -> Result<Vec<Vec<Word>>, NameError> {
    let mut st = Scanner::new();
    let mut chars = input.chars();

    while let Some(next) = chars.next() {
        let mut c = next;

        if c == '\\' {
            match chars.next() {
                // Whitespace cannot be escaped: keep the literal backslash
                // and let the whitespace terminate the word below.
                Some(escaped) if is_space(escaped) => {
                    st.word.push('\\');
                    c = escaped;
                }
                Some(escaped) => {
                    if st.brace_start {
                        st.brace_start = false;
                        st.control_seq = escaped.is_alphabetic();
                        st.special_char = true;
                    } else {
                        st.classify(escaped);
                    }
                    st.word.push('\\');
                    st.word.push(escaped);
                    continue;
                }
                // A lone backslash at end of input stays literal.
                None => {
                    st.word.push('\\');
                    continue;
                }
            }
        }

        if c == '{' {
            st.depth += 1;
            st.word.push(c);
            st.brace_start = true;
            st.control_seq = false;
            st.special_char = false;
            continue;
        }

        // Every case below implies the brace-start window has passed.
        st.brace_start = false;

        if c == '}' {
            if st.depth > 0 {
                st.depth -= 1;
            } else if mode == Mode::Strict {
                return Err(NameError::new(input, NameErrorKind::UnmatchedBrace));
            } else {
                st.word.insert(0, '{');
            }
            st.control_seq = false;
            st.special_char = false;
            st.word.push(c);
            continue;
        }

        if st.depth > 0 {
            if st.control_seq {
                if !c.is_alphabetic() {
                    st.control_seq = false;
                }
            } else if st.special_char {
                st.classify(c);
            }
            st.word.push(c);
            continue;
        }

        if c == ',' || is_space(c) {
            st.finish_word();
            if c == ',' {
                if st.sections.len() < 3 {
                    st.sections.push(Vec::new());
                } else if mode == Mode::Strict {
                    return Err(NameError::new(input, NameErrorKind::TooManyCommas));
                }
                // Lenient: excess content stays in the final section.
            }
            continue;
        }

        st.word.push(c);
        st.classify(c);
    }

    if st.depth > 0 {
        if mode == Mode::Strict {
            return Err(NameError::new(input, NameErrorKind::UnterminatedBrace));
        }
        for _ in 0..st.depth {
            st.word.push('}');
        }
    }
    st.finish_word();

    if st.sections.last().is_some_and(Vec::is_empty) {
        if st.sections.len() > 1 && mode == Mode::Strict {
            return Err(NameError::new(input, NameErrorKind::TrailingComma));
        }
        st.sections.pop();
    }

    Ok(st.sections)
}
