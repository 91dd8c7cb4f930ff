//! Page sections in display order.

/// One titled section of the page body.
///
/// The hero banner and footer are not sections: they have no anchor and
/// cannot be jumped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    /// Free-form introduction.
    About,
    /// Skill chips.
    Skills,
    /// Flip cards.
    Projects,
    /// Work history.
    Experience,
    /// Schools and degrees.
    Education,
}

impl Section {
    /// All sections, top to bottom.
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Education,
    ];

    /// Heading shown above the section.
    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About Me",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Education => "Education",
        }
    }

    /// Short anchor name, used in the status bar and logs.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Education => "education",
        }
    }

    /// Zero-based position in [`Section::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Section at a zero-based position.
    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }
}
