//! Tokenizer configuration.

use abc_lexer_core::{LineTerminator, ScanConfig};

/// The ABC standard version accepted without a diagnostic.
pub const SUPPORTED_VERSION: &str = "2.1";

/// Configuration for [`FileTokenizer`](crate::FileTokenizer).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenizerConfig {
    /// Line scanner settings.
    pub scan: ScanConfig,
    /// Declaration version that passes without an "unsupported version"
    /// error.
    pub supported_version: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            scan: ScanConfig::default(),
            supported_version: SUPPORTED_VERSION.to_owned(),
        }
    }
}

impl TokenizerConfig {
    #[must_use]
    pub fn with_scan(mut self, scan: ScanConfig) -> Self {
        self.scan = scan;
        self
    }

    #[must_use]
    pub fn with_line_terminator(mut self, line_terminator: LineTerminator) -> Self {
        self.scan = self.scan.with_line_terminator(line_terminator);
        self
    }

    #[must_use]
    pub fn with_decode_text(mut self, decode_text: bool) -> Self {
        self.scan = self.scan.with_decode_text(decode_text);
        self
    }

    #[must_use]
    pub fn with_supported_version(mut self, version: impl Into<String>) -> Self {
        self.supported_version = version.into();
        self
    }
}
