use serde::{Deserialize, Serialize};

/// One of the three constitutional dimensions of the scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// Canonical iteration order. Dominant-dosha ties resolve to the
    /// earliest entry here.
    pub const fn ordered() -> [Self; 3] {
        [Self::Vata, Self::Pitta, Self::Kapha]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Vata => "vata",
            Self::Pitta => "pitta",
            Self::Kapha => "kapha",
        }
    }
}

/// Weight triple contributed by a single answer. All components are
/// non-negative; the model assigns each answer's full weight to exactly one
/// dosha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoshaWeights {
    pub vata: f64,
    pub pitta: f64,
    pub kapha: f64,
}

impl DoshaWeights {
    pub const ZERO: Self = Self {
        vata: 0.0,
        pitta: 0.0,
        kapha: 0.0,
    };

    const fn favoring(dosha: Dosha, points: f64) -> Self {
        match dosha {
            Dosha::Vata => Self {
                vata: points,
                pitta: 0.0,
                kapha: 0.0,
            },
            Dosha::Pitta => Self {
                vata: 0.0,
                pitta: points,
                kapha: 0.0,
            },
            Dosha::Kapha => Self {
                vata: 0.0,
                pitta: 0.0,
                kapha: points,
            },
        }
    }

    pub fn sum(&self) -> f64 {
        self.vata + self.pitta + self.kapha
    }
}

/// One of the seven fixed questionnaire fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BodyFrame,
    SkinHair,
    Digestion,
    Energy,
    Sleep,
    Climate,
    Mind,
}

impl Category {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::BodyFrame,
            Self::SkinHair,
            Self::Digestion,
            Self::Energy,
            Self::Sleep,
            Self::Climate,
            Self::Mind,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::BodyFrame => "body_frame",
            Self::SkinHair => "skin_hair",
            Self::Digestion => "digestion",
            Self::Energy => "energy",
            Self::Sleep => "sleep",
            Self::Climate => "climate",
            Self::Mind => "mind",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BodyFrame => "Body Frame",
            Self::SkinHair => "Skin & Hair",
            Self::Digestion => "Digestion",
            Self::Energy => "Energy",
            Self::Sleep => "Sleep",
            Self::Climate => "Climate",
            Self::Mind => "Mind",
        }
    }

    /// Resolves a wire key to a category. Unknown keys yield `None` so that
    /// partial or evolving questionnaires never fail intake. The short keys
    /// used by the assessment frontend (`body`, `skin`) are accepted as
    /// aliases of their canonical forms.
    pub fn from_key(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "body_frame" | "body" => Some(Self::BodyFrame),
            "skin_hair" | "skin" => Some(Self::SkinHair),
            "digestion" => Some(Self::Digestion),
            "energy" => Some(Self::Energy),
            "sleep" => Some(Self::Sleep),
            "climate" => Some(Self::Climate),
            "mind" => Some(Self::Mind),
            _ => None,
        }
    }

    /// Questionnaire prompt shown to the person being assessed.
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::BodyFrame => "Which best describes your body frame?",
            Self::SkinHair => "How would you describe your skin and hair?",
            Self::Digestion => "How is your appetite and digestion?",
            Self::Energy => "How would you describe your energy and activity?",
            Self::Sleep => "How are your sleep patterns?",
            Self::Climate => "Which climate do you prefer?",
            Self::Mind => "What best describes your mind and emotions?",
        }
    }

    /// Accepted answer keys for this category, in presentation order.
    pub const fn choices(self) -> &'static [&'static str] {
        match self {
            Self::BodyFrame => &["light", "medium", "sturdy"],
            Self::SkinHair => &["dry", "normal", "oily"],
            Self::Digestion => &["irregular", "sharp", "slow"],
            Self::Energy => &["variable", "intense", "steady"],
            Self::Sleep => &["light", "moderate", "heavy"],
            Self::Climate => &["warm", "cold", "damp"],
            Self::Mind => &["anxious", "irritable", "calm"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFrame {
    Light,
    Medium,
    Sturdy,
}

impl BodyFrame {
    pub const fn weights(self) -> DoshaWeights {
        match self {
            Self::Light => DoshaWeights::favoring(Dosha::Vata, 3.0),
            Self::Medium => DoshaWeights::favoring(Dosha::Pitta, 3.0),
            Self::Sturdy => DoshaWeights::favoring(Dosha::Kapha, 3.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinHair {
    Dry,
    Normal,
    Oily,
}

impl SkinHair {
    pub const fn weights(self) -> DoshaWeights {
        match self {
            Self::Dry => DoshaWeights::favoring(Dosha::Vata, 2.0),
            Self::Normal => DoshaWeights::favoring(Dosha::Pitta, 2.0),
            Self::Oily => DoshaWeights::favoring(Dosha::Kapha, 2.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Digestion {
    Irregular,
    Sharp,
    Slow,
}

impl Digestion {
    pub const fn weights(self) -> DoshaWeights {
        match self {
            Self::Irregular => DoshaWeights::favoring(Dosha::Vata, 2.5),
            Self::Sharp => DoshaWeights::favoring(Dosha::Pitta, 2.5),
            Self::Slow => DoshaWeights::favoring(Dosha::Kapha, 2.5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Energy {
    Variable,
    Intense,
    Steady,
}

impl Energy {
    pub const fn weights(self) -> DoshaWeights {
        match self {
            Self::Variable => DoshaWeights::favoring(Dosha::Vata, 2.0),
            Self::Intense => DoshaWeights::favoring(Dosha::Pitta, 2.0),
            Self::Steady => DoshaWeights::favoring(Dosha::Kapha, 2.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sleep {
    Light,
    Moderate,
    Heavy,
}

impl Sleep {
    pub const fn weights(self) -> DoshaWeights {
        match self {
            Self::Light => DoshaWeights::favoring(Dosha::Vata, 1.5),
            Self::Moderate => DoshaWeights::favoring(Dosha::Pitta, 1.5),
            Self::Heavy => DoshaWeights::favoring(Dosha::Kapha, 1.5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Climate {
    Warm,
    Cold,
    Damp,
}

impl Climate {
    pub const fn weights(self) -> DoshaWeights {
        match self {
            Self::Warm => DoshaWeights::favoring(Dosha::Vata, 1.0),
            Self::Cold => DoshaWeights::favoring(Dosha::Pitta, 1.0),
            Self::Damp => DoshaWeights::favoring(Dosha::Kapha, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mind {
    Anxious,
    Irritable,
    Calm,
}

impl Mind {
    pub const fn weights(self) -> DoshaWeights {
        match self {
            Self::Anxious => DoshaWeights::favoring(Dosha::Vata, 2.0),
            Self::Irritable => DoshaWeights::favoring(Dosha::Pitta, 2.0),
            Self::Calm => DoshaWeights::favoring(Dosha::Kapha, 2.0),
        }
    }
}

/// A typed, validated questionnaire answer. Construction goes through
/// [`Answer::parse`], which is the only place raw strings cross into the
/// closed domain model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    BodyFrame(BodyFrame),
    SkinHair(SkinHair),
    Digestion(Digestion),
    Energy(Energy),
    Sleep(Sleep),
    Climate(Climate),
    Mind(Mind),
}

impl Answer {
    /// Parses a raw answer value for the given category. Unknown values
    /// yield `None`; they contribute nothing to scoring rather than failing.
    pub fn parse(category: Category, raw: &str) -> Option<Self> {
        let value = raw.trim().to_ascii_lowercase();
        match category {
            Category::BodyFrame => match value.as_str() {
                "light" => Some(Self::BodyFrame(BodyFrame::Light)),
                "medium" => Some(Self::BodyFrame(BodyFrame::Medium)),
                "sturdy" => Some(Self::BodyFrame(BodyFrame::Sturdy)),
                _ => None,
            },
            Category::SkinHair => match value.as_str() {
                "dry" => Some(Self::SkinHair(SkinHair::Dry)),
                "normal" => Some(Self::SkinHair(SkinHair::Normal)),
                "oily" => Some(Self::SkinHair(SkinHair::Oily)),
                _ => None,
            },
            Category::Digestion => match value.as_str() {
                "irregular" => Some(Self::Digestion(Digestion::Irregular)),
                "sharp" => Some(Self::Digestion(Digestion::Sharp)),
                "slow" => Some(Self::Digestion(Digestion::Slow)),
                _ => None,
            },
            Category::Energy => match value.as_str() {
                "variable" => Some(Self::Energy(Energy::Variable)),
                "intense" => Some(Self::Energy(Energy::Intense)),
                "steady" => Some(Self::Energy(Energy::Steady)),
                _ => None,
            },
            Category::Sleep => match value.as_str() {
                "light" => Some(Self::Sleep(Sleep::Light)),
                "moderate" => Some(Self::Sleep(Sleep::Moderate)),
                "heavy" => Some(Self::Sleep(Sleep::Heavy)),
                _ => None,
            },
            Category::Climate => match value.as_str() {
                "warm" => Some(Self::Climate(Climate::Warm)),
                "cold" => Some(Self::Climate(Climate::Cold)),
                "damp" => Some(Self::Climate(Climate::Damp)),
                _ => None,
            },
            Category::Mind => match value.as_str() {
                "anxious" => Some(Self::Mind(Mind::Anxious)),
                "irritable" => Some(Self::Mind(Mind::Irritable)),
                "calm" => Some(Self::Mind(Mind::Calm)),
                _ => None,
            },
        }
    }

    pub const fn category(self) -> Category {
        match self {
            Self::BodyFrame(_) => Category::BodyFrame,
            Self::SkinHair(_) => Category::SkinHair,
            Self::Digestion(_) => Category::Digestion,
            Self::Energy(_) => Category::Energy,
            Self::Sleep(_) => Category::Sleep,
            Self::Climate(_) => Category::Climate,
            Self::Mind(_) => Category::Mind,
        }
    }

    pub const fn weights(self) -> DoshaWeights {
        match self {
            Self::BodyFrame(answer) => answer.weights(),
            Self::SkinHair(answer) => answer.weights(),
            Self::Digestion(answer) => answer.weights(),
            Self::Energy(answer) => answer.weights(),
            Self::Sleep(answer) => answer.weights(),
            Self::Climate(answer) => answer.weights(),
            Self::Mind(answer) => answer.weights(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keys_round_trip() {
        for category in Category::ordered() {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
    }

    #[test]
    fn frontend_short_keys_resolve_to_canonical_categories() {
        assert_eq!(Category::from_key("body"), Some(Category::BodyFrame));
        assert_eq!(Category::from_key("skin"), Some(Category::SkinHair));
        assert_eq!(Category::from_key(" Skin_Hair "), Some(Category::SkinHair));
    }

    #[test]
    fn unknown_category_key_is_rejected_quietly() {
        assert_eq!(Category::from_key("constitution"), None);
        assert_eq!(Category::from_key(""), None);
    }

    #[test]
    fn every_choice_parses_for_its_category() {
        for category in Category::ordered() {
            for choice in category.choices() {
                let answer = Answer::parse(category, choice)
                    .unwrap_or_else(|| panic!("{choice} must parse for {category:?}"));
                assert_eq!(answer.category(), category);
            }
        }
    }

    #[test]
    fn unknown_answer_value_yields_none() {
        assert_eq!(Answer::parse(Category::BodyFrame, "gigantic"), None);
        assert_eq!(Answer::parse(Category::Mind, ""), None);
    }

    #[test]
    fn weights_are_one_hot_and_non_negative() {
        for category in Category::ordered() {
            for choice in category.choices() {
                let weights = Answer::parse(category, choice)
                    .expect("catalog choice parses")
                    .weights();
                assert!(weights.vata >= 0.0 && weights.pitta >= 0.0 && weights.kapha >= 0.0);
                let favored = [weights.vata, weights.pitta, weights.kapha]
                    .iter()
                    .filter(|component| **component > 0.0)
                    .count();
                assert_eq!(favored, 1, "each answer favors exactly one dosha");
            }
        }
    }

    #[test]
    fn answers_within_a_category_share_the_same_weight() {
        for category in Category::ordered() {
            let sums: Vec<f64> = category
                .choices()
                .iter()
                .map(|choice| {
                    Answer::parse(category, choice)
                        .expect("catalog choice parses")
                        .weights()
                        .sum()
                })
                .collect();
            assert!(sums.windows(2).all(|pair| pair[0] == pair[1]));
        }
    }
}
