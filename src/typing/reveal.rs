//! Target text and reveal state for the typing effect (pure).

/// The full text a typing effect is revealing.
///
/// Immutable once constructed. Length is counted in `char`s and every
/// prefix handed out ends on a char boundary, so multi-byte text such as
/// "café 💜" reveals one visible character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetText {
    text: String,
    /// Byte offset of the end of each char prefix. `ends[0] == 0`.
    ends: Vec<usize>,
}

impl TargetText {
    /// Create a target from any string-like value.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut ends = Vec::with_capacity(text.len() + 1);
        ends.push(0);
        ends.extend(text.char_indices().map(|(i, c)| i + c.len_utf8()));
        Self { text, ends }
    }

    /// Number of characters in the target.
    pub fn len(&self) -> usize {
        self.ends.len() - 1
    }

    /// Whether the target has no characters.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The full target text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The first `chars` characters. Saturates at the full text.
    pub fn prefix(&self, chars: usize) -> &str {
        let end = self.ends[chars.min(self.len())];
        &self.text[..end]
    }
}

impl Default for TargetText {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl From<&str> for TargetText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TargetText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A missing text reveals nothing.
impl From<Option<String>> for TargetText {
    fn from(text: Option<String>) -> Self {
        text.map(Self::new).unwrap_or_default()
    }
}

impl From<Option<&str>> for TargetText {
    fn from(text: Option<&str>) -> Self {
        text.map(Self::new).unwrap_or_default()
    }
}

/// Progress of a reveal: how many characters are shown and whether more
/// ticks are expected.
///
/// `is_active` is derived from the length comparison alone and is kept in
/// sync by every constructor and transition:
/// `is_active == (current_length < target_len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    current_length: usize,
    is_active: bool,
}

impl RevealState {
    /// Initial state for a freshly mounted effect.
    ///
    /// An empty target starts (and stays) settled.
    pub fn start(target_len: usize) -> Self {
        Self {
            current_length: 0,
            is_active: target_len > 0,
        }
    }

    /// Fully revealed state.
    pub fn settled(target_len: usize) -> Self {
        Self {
            current_length: target_len,
            is_active: false,
        }
    }

    /// Advance by one character. A settled state is returned unchanged.
    #[must_use]
    pub fn advance(self, target_len: usize) -> Self {
        let current_length = (self.current_length + 1).min(target_len);
        Self {
            current_length,
            is_active: current_length < target_len,
        }
    }

    /// Characters currently revealed.
    pub fn current_length(&self) -> usize {
        self.current_length
    }

    /// Whether further ticks are expected.
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}
