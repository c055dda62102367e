//! # Name splitting and citation formatting for BibTeX bibliographies.
//!
//! This crate turns the raw strings of a bibliography into display text: it
//! decomposes BibTeX name strings into their `first`, `von`, `last` and `jr`
//! parts, recomposes them, and renders whole entries into publication-style
//! citation strings.
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`name`]     | name splitting, recomposition, the [`Author`] wrapper   |
//! | [`list`]     | author/editor list cleaning, joining and truncation     |
//! | [`journal`]  | journal abbreviation macro resolution                   |
//! | [`citation`] | per-entry-type citation templates                       |
//! | [`entry`]    | the bibliographic entry model                           |
//! | [`markup`]   | the seam to an external markup transliterator           |
//! | [`error`]    | error types                                             |
//!
//! Parsing bibliography files themselves is out of scope; entries are
//! consumed as [`Entry`] records, which any BibTeX deserializer can produce.
//!
//! ## Example
//! ```
//! use bibcite::{Entry, Formatter, Mode, split_name};
//!
//! let parts = split_name("van Beethoven, Ludwig", Mode::Strict)?;
//! assert_eq!(parts.von, ["van"]);
//! assert_eq!(parts.to_bibtex(), "{van Beethoven}, Ludwig");
//!
//! let entry = Entry::new("phdthesis")
//!     .with_field("author", "Krogager, J.-K.")
//!     .with_field("year", "2015")
//!     .with_field("title", "High-redshift Absorbers")
//!     .with_field("school", "University of Copenhagen");
//! let reference = Formatter::new().reference(&entry).unwrap();
//! assert_eq!(reference.text, "Krogager, J.-K. 2015, PhD thesis, University of Copenhagen");
//! # Ok::<(), bibcite::NameError>(())
//! ```

pub mod citation;
pub mod entry;

/// Error types for name splitting and citation formatting.
pub mod error;

pub mod journal;
pub mod list;
pub mod markup;
pub mod name;

// re-exports
pub use citation::{FormatWarning, Formatter, Reference};
pub use entry::{Entry, EntryKind};
pub use error::{FormatError, NameError, NameErrorKind};
pub use name::{Author, Mode, NameParts, split_name};
