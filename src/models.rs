// src/models.rs

/// Character categories that can feed a string-mode pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterCategory {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharacterCategory {
    /// Fixed order in which category alphabets are concatenated.
    pub const ORDER: [CharacterCategory; 4] = [
        CharacterCategory::Lower,
        CharacterCategory::Upper,
        CharacterCategory::Digit,
        CharacterCategory::Symbol,
    ];
}

// String generation options
#[derive(Debug, Clone)]
pub struct StringOptions {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub avoid_ambiguous: bool,
}

impl StringOptions {
    pub fn includes(&self, category: CharacterCategory) -> bool {
        match category {
            CharacterCategory::Lower => self.include_lowercase,
            CharacterCategory::Upper => self.include_uppercase,
            CharacterCategory::Digit => self.include_numbers,
            CharacterCategory::Symbol => self.include_symbols,
        }
    }
}

impl Default for StringOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            avoid_ambiguous: false,
        }
    }
}

// Passphrase generation options
#[derive(Debug, Clone)]
pub struct PassphraseOptions {
    pub word_count: usize,
    pub separator: String,
    pub capitalize: bool,
    pub append_number: bool,
    pub append_symbol: bool,
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
            capitalize: true,
            append_number: false,
            append_symbol: false,
        }
    }
}

/// Five-level strength scale shown next to the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    None,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Map a 0-4 score to its label. Empty candidates are labelled `None`
    /// by the caller before scoring.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => StrengthLabel::Weak,
            2 => StrengthLabel::Fair,
            3 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    /// Meter fill percentage for the label.
    pub fn meter_width(&self) -> u8 {
        match self {
            StrengthLabel::None => 0,
            StrengthLabel::Weak => 25,
            StrengthLabel::Fair => 50,
            StrengthLabel::Strong => 75,
            StrengthLabel::VeryStrong => 100,
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLabel::None => write!(f, "None"),
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Fair => write!(f, "Fair"),
            StrengthLabel::Strong => write!(f, "Strong"),
            StrengthLabel::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrengthResult {
    pub score: u8,
    pub entropy_bits: u32,
    pub label: StrengthLabel,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

impl StrengthResult {
    pub fn empty() -> Self {
        Self {
            score: 0,
            entropy_bits: 0,
            label: StrengthLabel::None,
            warning: None,
            suggestions: Vec::new(),
        }
    }
}

/// How a candidate was produced, which decides the entropy formula and
/// whether feedback is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimationMode {
    String,
    Passphrase { word_list_size: usize },
    Analyze,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_table_matches_scores() {
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(1), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(2), StrengthLabel::Fair);
        assert_eq!(StrengthLabel::from_score(3), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(4), StrengthLabel::VeryStrong);
    }

    #[test]
    fn meter_widths_step_by_quarter() {
        let widths: Vec<u8> = [
            StrengthLabel::None,
            StrengthLabel::Weak,
            StrengthLabel::Fair,
            StrengthLabel::Strong,
            StrengthLabel::VeryStrong,
        ]
        .iter()
        .map(StrengthLabel::meter_width)
        .collect();
        assert_eq!(widths, vec![0, 25, 50, 75, 100]);
    }

    #[test]
    fn very_strong_displays_with_space() {
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "Very Strong");
    }
}
