/// Coarse asset category assigned by the content-type classifier.
///
/// This enum centralizes title identity in one place, replacing the
/// ad-hoc `"video"`/`"archive"` string matching the catalog exports carry.
/// The classifier itself only ever produces `Video` or `Archive` (or no
/// classification at all); `Document` and `Graphic` appear on rows tagged
/// by upstream systems and matter to the output-directory tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleType {
    Video,
    Archive,
    Document,
    Graphic,
}

impl TitleType {
    /// Canonical lowercase name used in the output table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Archive => "archive",
            Self::Document => "document",
            Self::Graphic => "graphic",
        }
    }

    /// Parse a title-type cell, case-insensitively. `NULL` and unknown
    /// values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "video" => Some(Self::Video),
            "archive" => Some(Self::Archive),
            "document" => Some(Self::Document),
            "graphic" => Some(Self::Graphic),
            _ => None,
        }
    }
}

impl std::fmt::Display for TitleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
