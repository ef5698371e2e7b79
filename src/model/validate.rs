// src/model/validate.rs

/// Checks a set of named numeric inputs and reports every violation.
///
/// A field is invalid when its value is missing or not strictly positive.
/// All violations are collected (not fail-fast) so the caller can list them
/// verbatim, one message per offending field. An empty return means the
/// calculation may proceed.
pub fn collect_invalid(fields: &[(&str, Option<f64>)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, value)| value.map_or(true, |v| v <= 0.0))
        .map(|(name, _)| format!("field '{name}' must be a positive number"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_valid_inputs_produce_no_messages() {
        let errors = collect_invalid(&[
            ("stockout_probability_pct", Some(10.0)),
            ("lead_time_days", Some(3.0)),
            ("total_7_day_consumption", Some(140.0)),
        ]);
        assert!(errors.is_empty());
    }

    #[test]
    fn one_message_per_offending_field() {
        let errors = collect_invalid(&[
            ("stockout_probability_pct", Some(0.0)),
            ("lead_time_days", None),
            ("review_cycle_days", Some(-7.0)),
            ("current_inventory", Some(80.0)),
        ]);
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors[0],
            "field 'stockout_probability_pct' must be a positive number"
        );
        assert!(errors[1].contains("lead_time_days"));
        assert!(errors[2].contains("review_cycle_days"));
    }
}
