use serde::Serialize;

/// Identifiant d'un ensemble (partition) de cellules connectées dans une ligne.
pub type SetLabel = u32;

/// Étiquette transitoire d'une cellule qui n'appartient encore à aucun ensemble.
pub const UNASSIGNED: SetLabel = 0;

/// Représente une cellule du labyrinthe.
///
/// Une cellule porte l'étiquette de son ensemble et deux murs indépendants :
/// celui de droite et celui du bas. Les murs du haut et de gauche sont ceux
/// des voisines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// L'ensemble auquel appartient la cellule.
    #[serde(rename = "set")]
    pub label: SetLabel,
    /// Mur entre cette cellule et sa voisine de droite.
    pub right_wall: bool,
    /// Mur entre cette cellule et celle de la ligne suivante.
    pub bottom_wall: bool,
}

impl Cell {
    /// Crée une nouvelle cellule dans l'ensemble `label`, sans aucun mur.
    pub fn new(label: SetLabel) -> Self {
        Self {
            label,
            right_wall: false,
            bottom_wall: false,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.label == UNASSIGNED
    }
}
