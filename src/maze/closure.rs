use crate::maze::row::Row;

/// Referme la dernière ligne : fusionne tous les ensembles encore distincts.
///
/// Tant que la ligne compte plusieurs étiquettes, on la balaie de gauche à
/// droite ; à chaque paire de voisines d'ensembles différents, le mur entre
/// elles est retiré et l'ensemble de la cellule de droite est absorbé par
/// celui de la cellule de gauche. L'union réécrit tout l'ensemble de droite :
/// deux cellules déjà reliées ne sont jamais rouvertes l'une sur l'autre.
/// Retourne le nombre de balayages effectués (0 si la ligne était
/// déjà d'un seul ensemble).
pub fn close_row(row: &mut Row) -> usize {
    let mut sweeps = 0;
    while !row.all_cells_in_same_set() {
        for index in 0..row.len().saturating_sub(1) {
            if row[index].label != row[index + 1].label {
                row[index].right_wall = false;
                let (left, right) = (row[index].label, row[index + 1].label);
                row.union_sets(left, right);
            }
        }
        sweeps += 1;
    }
    sweeps
}
