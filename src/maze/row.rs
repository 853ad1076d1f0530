use std::ops::{Index, IndexMut};

use serde::Serialize;

use crate::maze::cell::{Cell, SetLabel};

/// Une ligne du labyrinthe : une suite ordonnée de cellules, de gauche à droite.
///
/// Les ensembles ne sont pas matérialisés : deux cellules sont dans le même
/// ensemble si elles portent la même étiquette. Une union réécrit toujours
/// toutes les cellules de l'ensemble absorbé, la relation « même étiquette »
/// reste donc une vraie relation d'équivalence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Étiquettes de la ligne, dans l'ordre des colonnes.
    pub fn labels(&self) -> Vec<SetLabel> {
        self.cells.iter().map(|cell| cell.label).collect()
    }

    /// Retourne la voisine de droite de la cellule `index`, ou `None` en bout de ligne.
    pub fn right_neighbor(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index.checked_add(1)?)
    }

    /// Fusionne l'ensemble `to_change` dans l'ensemble `target`.
    ///
    /// Toutes les cellules portant `to_change` prennent l'étiquette `target`.
    /// Retourne le nombre de cellules réécrites.
    pub fn union_sets(&mut self, target: SetLabel, to_change: SetLabel) -> usize {
        let mut changed = 0;
        for cell in self.cells.iter_mut().filter(|cell| cell.label == to_change) {
            cell.label = target;
            changed += 1;
        }
        changed
    }

    /// Nombre de cellules de la ligne appartenant à l'ensemble `label`.
    pub fn count_in_set(&self, label: SetLabel) -> usize {
        self.cells.iter().filter(|cell| cell.label == label).count()
    }

    /// Vrai si une autre cellule que `index`, dans le même ensemble, n'a pas de mur en bas.
    pub fn any_other_open_bottom_in_set(&self, index: usize) -> bool {
        let Some(target) = self.cells.get(index) else {
            return false;
        };
        self.cells
            .iter()
            .enumerate()
            .any(|(i, cell)| i != index && cell.label == target.label && !cell.bottom_wall)
    }

    /// Vrai si toutes les cellules de la ligne portent la même étiquette.
    pub fn all_cells_in_same_set(&self) -> bool {
        self.cells.windows(2).all(|pair| pair[0].label == pair[1].label)
    }

    /// Nombre d'ensembles distincts présents dans la ligne.
    pub fn distinct_sets(&self) -> usize {
        let mut labels = self.labels();
        labels.sort_unstable();
        labels.dedup();
        labels.len()
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl Index<usize> for Row {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Row {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cells[index]
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
