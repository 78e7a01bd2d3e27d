//! Static lexicons backing the keyword and clarity scorers.

/// A rubric concept detected by trigger-word presence
pub struct Concept {
    /// Report label for the concept
    pub label: &'static str,
    /// Trigger words in their published casing; any one occurring as a
    /// substring of the lowercased transcript counts as a hit. Capitalized
    /// entries ("My", "Muskan", "I") can therefore never match; they are
    /// dead entries in the published lexicon, and lowercasing them would
    /// change observable Keywords scores, so they stay as is.
    pub triggers: &'static [&'static str],
}

/// The five concepts a self-introduction must cover (4 points each)
pub const MUST_HAVE: &[Concept] = &[
    Concept {
        label: "Name",
        triggers: &["My", "name", "is", "Muskan", "myself", "am"],
    },
    Concept {
        label: "Age",
        triggers: &["I", "am", "years", "old", "age"],
    },
    Concept {
        label: "School/Class",
        triggers: &["studying", "in", "class", "school", "college", "university"],
    },
    Concept {
        label: "Family",
        triggers: &["live", "with", "my", "family", "father", "mother"],
    },
    Concept {
        label: "Hobbies",
        triggers: &["hobby", "interest", "enjoy", "playing", "like", "to"],
    },
];

/// The four concepts that are good to cover (2 points each)
pub const GOOD_TO_HAVE: &[Concept] = &[
    Concept {
        label: "Origin",
        triggers: &["I", "am", "from", "live", "in"],
    },
    Concept {
        label: "Ambition",
        triggers: &["goal", "dream", "ambition", "want", "to", "become"],
    },
    Concept {
        label: "Fun Fact",
        triggers: &["fun", "fact", "about", "me", "unique", "thing"],
    },
    Concept {
        label: "Strengths",
        triggers: &["strength", "achievement", "good", "at"],
    },
];

/// Filler tokens for the clarity scorer. Matching is single-token
/// whitespace-split membership, so the multi-word entries ("you know",
/// "i mean") can never match; they are part of the published lexicon and the
/// rubric's observable scores depend on keeping the matching policy as is.
pub const FILLERS: &[&str] = &[
    "um", "uh", "like", "you know", "so", "actually", "basically", "right", "i mean", "well",
    "hmm", "ah",
];
