use super::domain::Dosha;
use super::intake::AnswerSet;
use super::scoring::{accumulate, classify_balance, dominant, normalize, BalanceStatus, DoshaScores};
use serde::Serialize;

/// Fixed descriptive text for one dosha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Characteristics {
    pub elements: &'static str,
    pub qualities: &'static str,
    pub traits: &'static str,
    pub recommendations: &'static str,
}

pub const fn characteristics(dosha: Dosha) -> Characteristics {
    match dosha {
        Dosha::Vata => Characteristics {
            elements: "Air + Space",
            qualities: "Light, cold, dry, mobile, subtle",
            traits: "Creative, energetic, adaptable, prone to anxiety",
            recommendations: "Warm, grounding foods; regular routine; gentle exercise",
        },
        Dosha::Pitta => Characteristics {
            elements: "Fire + Water",
            qualities: "Hot, sharp, light, oily, liquid",
            traits: "Intelligent, focused, ambitious, prone to anger",
            recommendations: "Cooling foods; avoid spicy; moderate exercise",
        },
        Dosha::Kapha => Characteristics {
            elements: "Earth + Water",
            qualities: "Heavy, slow, cool, oily, smooth",
            traits: "Stable, patient, loving, prone to lethargy",
            recommendations: "Light, warm foods; vigorous exercise; variety in routine",
        },
    }
}

/// Lifestyle recommendations keyed purely by the dominant dosha, never by
/// score magnitude.
pub const fn recommendations(dosha: Dosha) -> [&'static str; 4] {
    match dosha {
        Dosha::Vata => [
            "Maintain regular meal times",
            "Include warm, cooked foods",
            "Practice grounding meditation",
            "Avoid excessive cold and dry foods",
        ],
        Dosha::Pitta => [
            "Eat cooling foods like cucumber and mint",
            "Avoid spicy and fried foods",
            "Practice cooling breathing exercises",
            "Maintain work-life balance",
        ],
        Dosha::Kapha => [
            "Include light, warm foods",
            "Engage in regular vigorous exercise",
            "Avoid heavy, oily foods",
            "Maintain variety in daily routine",
        ],
    }
}

/// Complete assessment result: percentages, dominant dosha, and the static
/// text attached to it.
#[derive(Debug, Clone, Serialize)]
pub struct DoshaAnalysis {
    pub scores: DoshaScores,
    pub dominant_dosha: Dosha,
    pub characteristics: Characteristics,
    pub balance_status: BalanceStatus,
    pub recommendations: [&'static str; 4],
}

impl DoshaAnalysis {
    /// Runs the full pipeline: accumulate, normalize, dominant selection,
    /// balance classification, then static-text lookup.
    pub fn from_answers(answers: &AnswerSet) -> Self {
        let totals = accumulate(answers);
        let scores = normalize(&totals);
        let dominant_dosha = dominant(&scores);
        let balance_status = classify_balance(&scores);

        Self {
            scores,
            dominant_dosha,
            characteristics: characteristics(dominant_dosha),
            balance_status,
            recommendations: recommendations(dominant_dosha),
        }
    }
}
