//! Model Scores Module
//! Final evaluation metrics of the supervised models trained offline.

use serde::Serialize;

/// One row of the model comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelScore {
    pub model: &'static str,
    pub accuracy: f64,
    pub macro_f1: f64,
}

/// Scores reported by the modeling notebook. Not derived from the dataset.
pub const MODEL_SCORES: [ModelScore; 3] = [
    ModelScore {
        model: "Random Forest",
        accuracy: 0.99,
        macro_f1: 0.99,
    },
    ModelScore {
        model: "Gradient Boosting",
        accuracy: 1.00,
        macro_f1: 1.00,
    },
    ModelScore {
        model: "SVM",
        accuracy: 0.97,
        macro_f1: 0.96,
    },
];

pub fn model_scores() -> &'static [ModelScore] {
    &MODEL_SCORES
}

/// The model with the highest macro-F1 (first wins on ties).
pub fn best_model() -> &'static ModelScore {
    MODEL_SCORES
        .iter()
        .reduce(|best, row| if row.macro_f1 > best.macro_f1 { row } else { best })
        .unwrap_or(&MODEL_SCORES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_fixed() {
        let rows: Vec<(&str, f64, f64)> = model_scores()
            .iter()
            .map(|s| (s.model, s.accuracy, s.macro_f1))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Random Forest", 0.99, 0.99),
                ("Gradient Boosting", 1.00, 1.00),
                ("SVM", 0.97, 0.96),
            ]
        );
    }

    #[test]
    fn best_is_gradient_boosting() {
        assert_eq!(best_model().model, "Gradient Boosting");
    }
}
