use crate::coords::Vec3;
use crate::error::ValidationError;

use super::object::{Geometry, Label, LabelStyle, Material, PlacedObject, Role};
use super::record::{validate_records, EarningsRecord};

/// Footprint of every bar along X and Z.
pub const BAR_WIDTH: f64 = 40.0;
pub const BAR_DEPTH: f64 = 40.0;
/// Distance between neighbouring bar centres.
pub const BAR_SPACING: f64 = 60.0;
/// Gap between a bar's top face and its label.
pub const LABEL_GAP: f64 = 10.0;

/// X coordinate of bar `index` in a row of `count` bars.
///
/// `index * 60 - count * 30 + 30`: bars are 60 apart and the row is centred
/// on `x = 0` for any `count`.
#[inline]
pub fn bar_center_x(index: usize, count: usize) -> f64 {
    let half = BAR_SPACING / 2.0;
    index as f64 * BAR_SPACING - count as f64 * half + half
}

/// Label text for a bar. The amount is printed in shortest form, so `10.0`
/// reads `10` and `10.5` reads `10.5`.
pub fn bar_label_text(record: &EarningsRecord) -> String {
    // Adding zero turns -0.0 into 0.0.
    format!("{}: £{}", record.project, record.amount + 0.0)
}

/// Places one cuboid per record.
///
/// Each bar is `40 × amount × 40`, rests on the ground (`y = amount / 2`)
/// and carries its label just above the top face. Positions depend on the
/// record's index only, never on other records' amounts.
pub fn compute_layout(records: &[EarningsRecord]) -> Result<Vec<PlacedObject>, ValidationError> {
    validate_records(records)?;

    let count = records.len();
    let placed = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let half_height = record.amount / 2.0;
            PlacedObject::new(
                Role::EarningsBar { index },
                Geometry::Cuboid {
                    width: BAR_WIDTH,
                    height: record.amount,
                    depth: BAR_DEPTH,
                },
                Vec3::new(bar_center_x(index, count), half_height, 0.0),
                Material::standard(record.color),
            )
            .with_label(Label {
                text: bar_label_text(record),
                offset: Vec3::new(0.0, half_height + LABEL_GAP, 0.0),
                style: LabelStyle::bar(),
            })
        })
        .collect();

    log::trace!("laid out {count} earnings bars");
    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn rec(project: &str, amount: f64) -> EarningsRecord {
        EarningsRecord::new(project, amount, Color::from_hex_u32(0x1e90ff))
    }

    fn xs(objects: &[PlacedObject]) -> Vec<f64> {
        objects.iter().map(|o| o.position.x).collect()
    }

    #[test]
    fn empty_input_yields_empty_layout() {
        assert!(compute_layout(&[]).unwrap().is_empty());
    }

    #[test]
    fn single_bar_is_centred() {
        let objects = compute_layout(&[rec("Earn Grid", 10.0)]).unwrap();
        assert_eq!(objects[0].position, Vec3::new(0.0, 5.0, 0.0));
    }

    #[test]
    fn four_bars_match_row_formula() {
        let records = [rec("A", 10.0), rec("B", 250.0), rec("C", 150.0), rec("D", 80.0)];
        let objects = compute_layout(&records).unwrap();
        assert_eq!(xs(&objects), vec![-90.0, -30.0, 30.0, 90.0]);
    }

    #[test]
    fn positions_are_symmetric_about_origin() {
        for n in 1..=9 {
            let records: Vec<_> = (0..n).map(|i| rec(&format!("P{i}"), 100.0)).collect();
            let x = xs(&compute_layout(&records).unwrap());
            for i in 0..n {
                assert_eq!(x[i] + x[n - 1 - i], 0.0, "n = {n}, i = {i}");
            }
        }
    }

    #[test]
    fn bar_geometry_and_label() {
        let objects = compute_layout(&[rec("Earn Grid", 10.0)]).unwrap();
        let bar = &objects[0];

        assert_eq!(bar.role, Role::EarningsBar { index: 0 });
        assert_eq!(bar.geometry, Geometry::Cuboid { width: 40.0, height: 10.0, depth: 40.0 });
        assert_eq!(bar.material.color, Color::from_hex_u32(0x1e90ff));

        let label = bar.label.as_ref().unwrap();
        assert_eq!(label.text, "Earn Grid: £10");
        assert_eq!(label.offset, Vec3::new(0.0, 15.0, 0.0));
        assert_eq!(bar.position.y + label.offset.y, 20.0);
    }

    #[test]
    fn zero_amount_is_a_flat_bar_with_label_at_ten() {
        let objects = compute_layout(&[rec("Nothing yet", 0.0)]).unwrap();
        let bar = &objects[0];
        assert!(matches!(bar.geometry, Geometry::Cuboid { height, .. } if height == 0.0));
        assert_eq!(bar.position.y, 0.0);
        assert_eq!(bar.position.y + bar.label.as_ref().unwrap().offset.y, 10.0);
    }

    #[test]
    fn negative_zero_amount_prints_as_zero() {
        assert_eq!(bar_label_text(&rec("Z", -0.0)), "Z: £0");
        let objects = compute_layout(&[rec("Z", -0.0)]).unwrap();
        assert_eq!(objects[0].label.as_ref().unwrap().text, "Z: £0");
    }

    #[test]
    fn fractional_amount_label() {
        assert_eq!(bar_label_text(&rec("Shop", 10.5)), "Shop: £10.5");
    }

    #[test]
    fn changing_one_amount_moves_nothing_else() {
        let before = compute_layout(&[rec("A", 10.0), rec("B", 20.0), rec("C", 30.0)]).unwrap();
        let after = compute_layout(&[rec("A", 10.0), rec("B", 999.0), rec("C", 30.0)]).unwrap();

        assert_eq!(before[0], after[0]);
        assert_eq!(before[2], after[2]);
        assert_eq!(before[1].position.x, after[1].position.x);
        assert_ne!(before[1].position.y, after[1].position.y);
        assert_ne!(before[1].label, after[1].label);
    }

    #[test]
    fn layout_is_deterministic() {
        let records = [rec("A", 1.0), rec("B", 2.0)];
        assert_eq!(compute_layout(&records).unwrap(), compute_layout(&records).unwrap());
    }

    #[test]
    fn invalid_record_rejects_whole_layout() {
        let err = compute_layout(&[rec("A", 1.0), rec("B", -1.0)]).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeAmount { index: 1, .. }));
    }
}
