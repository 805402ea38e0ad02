//! Built-in label set for the reference 7x7 expression atlas, used when no
//! label file is configured.

use crate::grid::GridShape;
use crate::labels::LabelTable;

const CORNER: &str = "Intensity";

const EMOTIONS: [&str; 7] = [
    "Neutral", "Happy", "Sad", "Angry", "Surprised", "Scared", "Sleepy",
];

const INTENSITIES: [&str; 7] = [
    "Faint", "Slight", "Mild", "Moderate", "Strong", "Intense", "Extreme",
];

impl LabelTable {
    /// Hardcoded reference labels: `"<intensity> <emotion>"` per cell.
    pub fn builtin() -> Self {
        let mut cells = Vec::with_capacity(INTENSITIES.len() + 1);

        let mut header = vec![CORNER.to_string()];
        header.extend(EMOTIONS.iter().map(|e| e.to_string()));
        cells.push(header);

        for intensity in INTENSITIES {
            let mut row = vec![intensity.to_string()];
            row.extend(
                EMOTIONS
                    .iter()
                    .map(|emotion| format!("{} {}", intensity, emotion)),
            );
            cells.push(row);
        }

        match LabelTable::from_rows(cells, GridShape::REFERENCE) {
            Ok(table) => table,
            Err(err) => unreachable!("built-in labels are 8x8: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_reference_grid() {
        let table = LabelTable::builtin();
        assert_eq!(table.shape(), GridShape::REFERENCE);
        assert_eq!(table.corner(), "Intensity");

        let entry = table.get(0, 1).unwrap();
        assert_eq!(entry.label, "Faint Happy");
        assert_eq!(entry.emotion, "Happy");
        assert_eq!(entry.intensity, "Faint");

        assert_eq!(table.get(6, 6).unwrap().label, "Extreme Sleepy");
    }
}
