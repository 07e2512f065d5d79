use super::domain::Dosha;
use super::intake::AnswerSet;
use serde::{Deserialize, Serialize};

/// Running weight sums per dosha, before normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreTotals {
    pub vata: f64,
    pub pitta: f64,
    pub kapha: f64,
}

impl ScoreTotals {
    pub fn sum(&self) -> f64 {
        self.vata + self.pitta + self.kapha
    }
}

/// Sums the weight contributions of every resolved answer. Entries that did
/// not match a known category or answer value contribute nothing, so the
/// result may legitimately be all zeroes.
pub fn accumulate(answers: &AnswerSet) -> ScoreTotals {
    let mut totals = ScoreTotals::default();
    for answer in answers.resolved() {
        let weights = answer.weights();
        totals.vata += weights.vata;
        totals.pitta += weights.pitta;
        totals.kapha += weights.kapha;
    }
    totals
}

/// Percentages per dosha, rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoshaScores {
    pub vata: f64,
    pub pitta: f64,
    pub kapha: f64,
}

impl DoshaScores {
    /// Fallback when no answer scored. The reference model returns exactly
    /// 33.33 per dosha, which sums to 99.99 rather than 100; kept
    /// bit-for-bit for output compatibility.
    pub const EQUAL_SPLIT: Self = Self {
        vata: 33.33,
        pitta: 33.33,
        kapha: 33.33,
    };

    pub fn get(&self, dosha: Dosha) -> f64 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn max(&self) -> f64 {
        self.vata.max(self.pitta).max(self.kapha)
    }

    pub fn min(&self) -> f64 {
        self.vata.min(self.pitta).min(self.kapha)
    }

    /// Gap between the strongest and weakest dosha, the input to balance
    /// classification.
    pub fn spread(&self) -> f64 {
        self.max() - self.min()
    }
}

/// Converts totals into percentages. Zero totals short-circuit to
/// [`DoshaScores::EQUAL_SPLIT`]. The second normalization pass is a no-op
/// under exact arithmetic; the reference model rounds after it, so it stays
/// to keep displayed values identical.
pub fn normalize(totals: &ScoreTotals) -> DoshaScores {
    let total = totals.sum();
    if total == 0.0 {
        return DoshaScores::EQUAL_SPLIT;
    }

    let raw_vata = (totals.vata / total) * 100.0;
    let raw_pitta = (totals.pitta / total) * 100.0;
    let raw_kapha = (totals.kapha / total) * 100.0;

    let raw_total = raw_vata + raw_pitta + raw_kapha;
    let vata = (raw_vata / raw_total) * 100.0;
    let pitta = (raw_pitta / raw_total) * 100.0;
    let kapha = (raw_kapha / raw_total) * 100.0;

    DoshaScores {
        vata: round_percent(vata),
        pitta: round_percent(pitta),
        kapha: round_percent(kapha),
    }
}

// One decimal place, ties to even, matching the reference's rounding.
fn round_percent(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// The dosha with the highest percentage. Ties resolve to the first maximum
/// in [`Dosha::ordered`].
pub fn dominant(scores: &DoshaScores) -> Dosha {
    let mut best = Dosha::Vata;
    for dosha in Dosha::ordered() {
        if scores.get(dosha) > scores.get(best) {
            best = dosha;
        }
    }
    best
}

/// Qualitative skew of the three percentages relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceStatus {
    #[serde(rename = "Well Balanced")]
    WellBalanced,
    #[serde(rename = "Moderately Imbalanced")]
    ModeratelyImbalanced,
    #[serde(rename = "Significantly Imbalanced")]
    SignificantlyImbalanced,
}

impl BalanceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::WellBalanced => "Well Balanced",
            Self::ModeratelyImbalanced => "Moderately Imbalanced",
            Self::SignificantlyImbalanced => "Significantly Imbalanced",
        }
    }
}

/// Spreads of exactly 10 and 20 belong to the higher-imbalance bucket.
pub fn classify_balance(scores: &DoshaScores) -> BalanceStatus {
    let spread = scores.spread();
    if spread < 10.0 {
        BalanceStatus::WellBalanced
    } else if spread < 20.0 {
        BalanceStatus::ModeratelyImbalanced
    } else {
        BalanceStatus::SignificantlyImbalanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(vata: f64, pitta: f64, kapha: f64) -> DoshaScores {
        DoshaScores { vata, pitta, kapha }
    }

    #[test]
    fn empty_answer_set_accumulates_to_zero() {
        let totals = accumulate(&AnswerSet::new());
        assert_eq!(totals, ScoreTotals::default());
    }

    #[test]
    fn zero_totals_normalize_to_the_reference_equal_split() {
        let normalized = normalize(&ScoreTotals::default());
        assert_eq!(normalized, DoshaScores::EQUAL_SPLIT);
        // The reference default intentionally sums to 99.99, not 100.
        assert_eq!(
            normalized.vata + normalized.pitta + normalized.kapha,
            99.99
        );
    }

    #[test]
    fn single_dosha_totals_normalize_to_one_hundred() {
        let totals = ScoreTotals {
            vata: 14.0,
            pitta: 0.0,
            kapha: 0.0,
        };
        assert_eq!(normalize(&totals), scores(100.0, 0.0, 0.0));
    }

    #[test]
    fn percentages_stay_in_range_and_sum_near_one_hundred() {
        let totals = ScoreTotals {
            vata: 4.5,
            pitta: 4.0,
            kapha: 5.5,
        };
        let normalized = normalize(&totals);
        for dosha in Dosha::ordered() {
            let value = normalized.get(dosha);
            assert!((0.0..=100.0).contains(&value));
        }
        let sum = normalized.vata + normalized.pitta + normalized.kapha;
        assert!((sum - 100.0).abs() <= 0.1, "sum {sum} off by more than 0.1");
    }

    #[test]
    fn thirds_round_to_one_decimal() {
        let totals = ScoreTotals {
            vata: 2.0,
            pitta: 2.0,
            kapha: 2.0,
        };
        assert_eq!(normalize(&totals), scores(33.3, 33.3, 33.3));
    }

    #[test]
    fn dominant_picks_the_maximum() {
        assert_eq!(dominant(&scores(20.0, 50.0, 30.0)), Dosha::Pitta);
        assert_eq!(dominant(&scores(20.0, 30.0, 50.0)), Dosha::Kapha);
    }

    #[test]
    fn dominant_ties_resolve_in_canonical_order() {
        assert_eq!(dominant(&scores(50.0, 50.0, 0.0)), Dosha::Vata);
        assert_eq!(dominant(&scores(0.0, 50.0, 50.0)), Dosha::Pitta);
        assert_eq!(dominant(&DoshaScores::EQUAL_SPLIT), Dosha::Vata);
    }

    #[test]
    fn balance_boundaries_belong_to_the_higher_bucket() {
        assert_eq!(
            classify_balance(&scores(36.6, 33.3, 30.1)),
            BalanceStatus::WellBalanced
        );
        assert_eq!(
            classify_balance(&scores(40.0, 30.0, 30.0)),
            BalanceStatus::ModeratelyImbalanced
        );
        assert_eq!(
            classify_balance(&scores(45.0, 30.0, 25.0)),
            BalanceStatus::SignificantlyImbalanced
        );
        assert_eq!(
            classify_balance(&scores(100.0, 0.0, 0.0)),
            BalanceStatus::SignificantlyImbalanced
        );
    }

    #[test]
    fn accumulation_is_iteration_order_invariant() {
        let forward = AnswerSet::from_pairs([
            ("body_frame", "light"),
            ("digestion", "sharp"),
            ("mind", "calm"),
        ]);
        let backward = AnswerSet::from_pairs([
            ("mind", "calm"),
            ("digestion", "sharp"),
            ("body_frame", "light"),
        ]);
        assert_eq!(accumulate(&forward), accumulate(&backward));
    }

    #[test]
    fn balance_status_serializes_to_reference_strings() {
        assert_eq!(
            serde_json::to_value(BalanceStatus::WellBalanced).expect("serializes"),
            serde_json::json!("Well Balanced")
        );
        assert_eq!(
            serde_json::to_value(BalanceStatus::SignificantlyImbalanced).expect("serializes"),
            serde_json::json!("Significantly Imbalanced")
        );
    }
}
