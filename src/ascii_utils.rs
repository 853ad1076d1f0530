/*!
 * # Aperçu texte du labyrinthe
 *
 * Conversion d'un `Maze` en représentation ASCII, pour la ligne de commande et
 * le débogage. Chaque cellule occupe deux caractères de large ; `+` marque les
 * intersections, `|` un mur de droite et `--` un mur du bas. Le pourtour est
 * toujours fermé.
 */

use crate::maze::Maze;

/// Génère une représentation ASCII du labyrinthe.
///
/// # Exemple
///
/// Un labyrinthe d'une seule cellule donne :
///
/// ```text
/// +--+
/// |  |
/// +--+
/// ```
pub fn visualize_maze_ascii(maze: &Maze) -> String {
    let width = maze.width();
    let last_row = maze.height().saturating_sub(1);
    let mut out = String::new();

    out.push('+');
    for _ in 0..width {
        out.push_str("--+");
    }
    out.push('\n');

    for (r, row) in maze.rows().iter().enumerate() {
        out.push('|');
        for (c, cell) in row.iter().enumerate() {
            out.push_str("  ");
            if cell.right_wall || c + 1 == width {
                out.push('|');
            } else {
                out.push(' ');
            }
        }
        out.push('\n');

        out.push('+');
        for cell in row {
            if cell.bottom_wall || r == last_row {
                out.push_str("--");
            } else {
                out.push_str("  ");
            }
            out.push('+');
        }
        out.push('\n');
    }
    out
}

/// Affiche les étiquettes d'ensemble, ligne par ligne.
pub fn visualize_sets(maze: &Maze) -> String {
    let mut s = String::new();
    for (r, row) in maze.rows().iter().enumerate() {
        let labels: Vec<String> = row.labels().iter().map(|l| l.to_string()).collect();
        s.push_str(&format!("Ligne {} => {}\n", r + 1, labels.join(", ")));
    }
    s
}
