use serde::{Deserialize, Serialize};

/// Fonction d'une case dans le labyrinthe.
///
/// `Empty` est la case neutre (praticable). Seules `Entrance` et `Exit` sont
/// contraintes par la validation du labyrinthe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Empty,
    Entrance,
    Exit,
    Wall,
    Exterior,
    Enemy,
    Reward,
}
