use crate::maze::coin::Coin;
use crate::maze::row::Row;

/// Pose les murs du bas d'une ligne.
///
/// Une cellule ne peut recevoir un mur en bas que si son ensemble compte
/// plusieurs cellules dans la ligne et qu'une autre cellule de cet ensemble
/// reste ouverte vers le bas. Chaque ensemble garde ainsi au moins un passage
/// vers la ligne suivante ; les singletons ne sont jamais fermés.
pub fn carve_bottom_walls<C: Coin + ?Sized>(row: &mut Row, coin: &mut C) {
    for index in 0..row.len() {
        let label = row[index].label;
        if row.count_in_set(label) < 2 {
            continue;
        }
        if row.any_other_open_bottom_in_set(index) && coin.add_wall() {
            row[index].bottom_wall = true;
        }
    }
}
