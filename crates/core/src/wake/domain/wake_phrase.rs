use std::fmt;

/// A wake phrase the detector listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WakePhrase {
    /// Spoken "R Q", displayed as 阿Q.
    AQ,
    /// Spoken "R cute".
    RCute,
}

impl WakePhrase {
    /// Map a decoded transcript to a wake phrase.
    ///
    /// Exact string equality against the recognizer's token spelling,
    /// deliberately: a fuzzier match would silently drift if the
    /// vocabulary changed, and the grammar already constrains output.
    pub fn from_transcript(text: &str) -> Option<WakePhrase> {
        match text {
            "r q" => Some(WakePhrase::AQ),
            "r cute" => Some(WakePhrase::RCute),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WakePhrase::AQ => "阿Q",
            WakePhrase::RCute => "R-Cute",
        }
    }
}

impl fmt::Display for WakePhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
