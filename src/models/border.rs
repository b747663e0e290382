use bitflags::bitflags;

use crate::models::direction::Direction;

bitflags! {
    /// Côtés ouverts d'une case.
    ///
    /// Un drapeau présent signifie que le côté est ouvert ; `Border::EMPTY`
    /// décrit donc une case entièrement murée.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct Border: u8 {
        const NORTH = 0b0001;
        const SOUTH = 0b0010;
        const EAST = 0b0100;
        const WEST = 0b1000;
    }
}

impl Border {
    pub const EMPTY: Border = Border::empty();
    pub const ALL: Border = Border::all();

    /// Le côté `direction` est-il ouvert ?
    pub fn is_open(self, direction: Direction) -> bool {
        self.contains(direction.border())
    }

    /// Itère sur les directions ouvertes, dans l'ordre N, E, S, O.
    pub fn sides(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.is_open(*direction))
    }

    pub fn open_sides(self) -> u32 {
        self.bits().count_ones()
    }

    /// Cul-de-sac : un seul côté ouvert.
    pub fn is_dead_end(self) -> bool {
        self.open_sides() == 1
    }

    /// Couloir droit : deux côtés opposés ouverts.
    pub fn is_corridor(self) -> bool {
        self == Border::NORTH | Border::SOUTH || self == Border::EAST | Border::WEST
    }

    /// Virage : deux côtés perpendiculaires ouverts.
    pub fn is_corner(self) -> bool {
        self.open_sides() == 2 && !self.is_corridor()
    }

    /// Carrefour : au moins trois côtés ouverts.
    pub fn is_intersection(self) -> bool {
        self.open_sides() >= 3
    }
}

impl Default for Border {
    fn default() -> Self {
        Border::EMPTY
    }
}

impl From<Direction> for Border {
    fn from(direction: Direction) -> Self {
        direction.border()
    }
}
