use crate::maze::cell::Cell;
use crate::maze::row::Row;

/// Le labyrinthe complet : une suite ordonnée de lignes de même largeur.
///
/// Seul le générateur ajoute des lignes ; une fois retourné, le labyrinthe
/// n'est plus accessible qu'en lecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    columns: usize,
    rows: Vec<Row>,
}

impl Maze {
    pub(crate) fn with_capacity(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            rows: Vec::with_capacity(rows),
        }
    }

    pub(crate) fn push_row(&mut self, row: Row) {
        debug_assert_eq!(row.len(), self.columns);
        self.rows.push(row);
    }

    pub(crate) fn last_row(&self) -> Option<&Row> {
        self.rows.last()
    }

    /// Nombre de lignes.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Nombre de colonnes.
    pub fn width(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row)?.cells().get(column)
    }

    /// Nombre de passages ouverts entre deux cellules adjacentes.
    ///
    /// Les murs de droite de la dernière colonne et les murs du bas de la
    /// dernière ligne donnent sur l'extérieur et ne comptent pas.
    pub fn passage_count(&self) -> usize {
        let last_row = self.rows.len().saturating_sub(1);
        let last_column = self.columns.saturating_sub(1);
        let mut passages = 0;
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if c < last_column && !cell.right_wall {
                    passages += 1;
                }
                if r < last_row && !cell.bottom_wall {
                    passages += 1;
                }
            }
        }
        passages
    }
}
