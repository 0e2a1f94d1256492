/// Case-insensitive substring matching for catalog lookups.
///
/// The query is folded once per lookup and then tested against every
/// title and subtitle. ASCII-only haystacks take a byte-level path;
/// anything else is lowercased before comparison.
#[derive(Debug, Clone)]
pub struct FoldedNeedle {
    folded: String,
    ascii: bool,
}

impl FoldedNeedle {
    pub fn new(needle: &str) -> Self {
        let ascii = needle.is_ascii();
        let folded = if ascii {
            needle.to_ascii_lowercase()
        } else {
            needle.to_lowercase()
        };
        Self { folded, ascii }
    }

    pub fn as_str(&self) -> &str {
        &self.folded
    }

    #[inline]
    pub fn is_found_in(&self, haystack: &str) -> bool {
        if self.folded.is_empty() {
            return true;
        }

        if self.ascii && haystack.is_ascii() {
            let needle = self.folded.as_bytes();
            let bytes = haystack.as_bytes();
            if bytes.len() < needle.len() {
                return false;
            }
            return bytes
                .windows(needle.len())
                .any(|window| window.eq_ignore_ascii_case(needle));
        }

        haystack.to_lowercase().contains(&self.folded)
    }
}
