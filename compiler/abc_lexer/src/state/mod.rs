//! Document section the tokenizer is in.

use std::fmt;

/// Current section of an ABC document.
///
/// Flags that only make sense in one section live inside that variant, so a
/// stale `opened` or `seen_key` cannot leak into another state.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FileState {
    /// Before the first line has been dispatched.
    #[default]
    Initial,
    /// After the `%abc` declaration, before the first blank line.
    FileHeader {
        /// A `FileHeaderStart` marker has been emitted and needs its end.
        opened: bool,
    },
    /// Between sections; blank lines are skipped here.
    InterTune,
    /// Unstructured prose outside tunes.
    FreeText,
    /// A run of `%%text`, `%%center` or text block lines.
    TypesetText,
    /// From `X:` up to the first music line or blank line.
    TuneHeader {
        /// The `K:` field has been seen.
        seen_key: bool,
    },
    /// Music lines of a tune.
    TuneBody,
}

impl FileState {
    /// Whether unclassified lines are music rather than free text.
    pub fn is_in_tune(self) -> bool {
        matches!(self, FileState::TuneHeader { .. } | FileState::TuneBody)
    }

    pub fn name(self) -> &'static str {
        match self {
            FileState::Initial => "initial",
            FileState::FileHeader { .. } => "file header",
            FileState::InterTune => "between tunes",
            FileState::FreeText => "free text",
            FileState::TypesetText => "typeset text",
            FileState::TuneHeader { .. } => "tune header",
            FileState::TuneBody => "tune body",
        }
    }
}

impl fmt::Display for FileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
