use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::paint::Color;

/// One data point: a project, the amount it earned and its display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsRecord {
    pub project: String,
    pub amount: f64,
    pub color: Color,
}

impl EarningsRecord {
    pub fn new(project: impl Into<String>, amount: f64, color: Color) -> Self {
        Self { project: project.into(), amount, color }
    }

    fn validate(&self, index: usize) -> Result<(), ValidationError> {
        if self.project.trim().is_empty() {
            return Err(ValidationError::EmptyProject { index });
        }
        if !self.amount.is_finite() {
            return Err(ValidationError::NonFiniteAmount {
                index,
                project: self.project.clone(),
            });
        }
        if self.amount < 0.0 {
            return Err(ValidationError::NegativeAmount {
                index,
                project: self.project.clone(),
                amount: self.amount,
            });
        }
        Ok(())
    }
}

/// Checks every record, failing on the first invalid one.
pub fn validate_records(records: &[EarningsRecord]) -> Result<(), ValidationError> {
    records
        .iter()
        .enumerate()
        .try_for_each(|(index, record)| record.validate(index))
}

/// Sum of all amounts. Callers validate first; this does not.
fn total_amount(records: &[EarningsRecord]) -> f64 {
    records.iter().map(|r| r.amount).sum()
}

/// Validates `records` and returns their sum, failing if the sum overflows.
pub fn checked_total(records: &[EarningsRecord]) -> Result<f64, ValidationError> {
    validate_records(records)?;
    let total = total_amount(records);
    if !total.is_finite() {
        return Err(ValidationError::TotalOverflow);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(project: &str, amount: f64) -> EarningsRecord {
        EarningsRecord::new(project, amount, Color::from_hex_u32(0xff6347))
    }

    #[test]
    fn accepts_zero_amount() {
        assert!(validate_records(&[rec("Earn Grid", 0.0)]).is_ok());
    }

    #[test]
    fn rejects_empty_project_with_index() {
        let err = validate_records(&[rec("A", 1.0), rec("  ", 1.0)]).unwrap_err();
        assert_eq!(err, ValidationError::EmptyProject { index: 1 });
    }

    #[test]
    fn rejects_negative_amount() {
        let err = validate_records(&[rec("A", -5.0)]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NegativeAmount { index: 0, amount, .. } if amount == -5.0
        ));
    }

    #[test]
    fn rejects_nan_and_infinity() {
        assert!(matches!(
            validate_records(&[rec("A", f64::NAN)]),
            Err(ValidationError::NonFiniteAmount { index: 0, .. })
        ));
        assert!(validate_records(&[rec("A", f64::INFINITY)]).is_err());
    }

    #[test]
    fn total_of_empty_is_zero() {
        assert_eq!(total_amount(&[]), 0.0);
        assert_eq!(total_amount(&[rec("A", 10.0), rec("B", 2.5)]), 12.5);
    }

    #[test]
    fn checked_total_rejects_overflow() {
        assert_eq!(checked_total(&[rec("A", 1.5), rec("B", 2.0)]), Ok(3.5));
        assert_eq!(
            checked_total(&[rec("A", 1e308), rec("B", 1e308)]),
            Err(ValidationError::TotalOverflow)
        );
        assert_eq!(
            checked_total(&[rec("", 1.0)]),
            Err(ValidationError::EmptyProject { index: 0 })
        );
    }

    #[test]
    fn deserializes_hex_color() {
        let json = r##"{ "project": "Earn Grid", "amount": 10, "color": "#ff6347" }"##;
        let r: EarningsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r, rec("Earn Grid", 10.0));
    }
}
