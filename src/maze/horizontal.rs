use log::trace;

use crate::maze::coin::Coin;
use crate::maze::row::Row;

/// Pose les murs de droite d'une ligne et fusionne les ensembles voisins.
///
/// La passe va strictement de gauche à droite et relit l'étiquette courante
/// de chaque cellule à son tour : une fusion faite plus tôt dans la ligne
/// change ce que voient les cellules suivantes.
pub fn carve_right_walls<C: Coin + ?Sized>(row: &mut Row, coin: &mut C) {
    for index in 0..row.len() {
        let Some(neighbor) = row.right_neighbor(index).map(|cell| cell.label) else {
            continue;
        };
        let current = row[index].label;

        // Même ensemble : fusionner créerait un cycle.
        if neighbor == current {
            row[index].right_wall = true;
        } else if coin.add_wall() {
            row[index].right_wall = true;
        } else {
            let merged = row.union_sets(current, neighbor);
            trace!("merged set {} into {} ({} cells)", neighbor, current, merged);
        }
    }
}
