use log::trace;

use crate::maze::cell::{Cell, SetLabel, UNASSIGNED};
use crate::maze::row::Row;

/// Construit la ligne `row_index` à partir de l'état de la ligne précédente.
///
/// * Sans ligne précédente, chaque cellule reçoit une nouvelle étiquette
///   (`next_label`, `next_label + 1`, ...).
/// * Sinon chaque cellule hérite de l'étiquette de la cellule du dessus, sauf
///   si celle-ci avait un mur en bas : la cellule repart alors sans ensemble.
///   Les cellules sans ensemble reçoivent ensuite une nouvelle étiquette, de
///   gauche à droite.
///
/// Les murs de la nouvelle ligne sont toujours vides. Retourne la ligne et le
/// prochain numéro d'étiquette libre.
pub fn build_row(
    previous: Option<&Row>,
    row_index: usize,
    columns: usize,
    next_label: SetLabel,
) -> (Row, SetLabel) {
    let mut label = next_label;

    let cells: Vec<Cell> = match previous {
        None => (0..columns)
            .map(|_| {
                let cell = Cell::new(label);
                label += 1;
                cell
            })
            .collect(),
        Some(previous) => {
            debug_assert_eq!(previous.len(), columns);
            let mut cells: Vec<Cell> = previous
                .iter()
                .map(|above| {
                    if above.bottom_wall {
                        Cell::new(UNASSIGNED)
                    } else {
                        Cell::new(above.label)
                    }
                })
                .collect();

            for cell in cells.iter_mut().filter(|cell| cell.is_unassigned()) {
                cell.label = label;
                label += 1;
            }
            cells
        }
    };

    trace!(
        "row {}: {} fresh labels ({}..{})",
        row_index,
        label - next_label,
        next_label,
        label
    );

    (Row::from(cells), label)
}
