use std::fmt::{self, Display, Formatter};
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: usize, c: usize) -> Pos {
        Pos {
            r: r as i32,
            c: c as i32,
        }
    }

    pub fn dist(self, other: Pos) -> u32 {
        ((self.r - other.r).abs() + (self.c - other.c).abs()) as u32
    }

    /// Clockwise from north - the order matters for stuck detection
    pub(crate) fn neighbors(self) -> [Pos; 4] {
        [
            self + Dir::North,
            self + Dir::East,
            self + Dir::South,
            self + Dir::West,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    North,
    East,
    South,
    West,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::North, Dir::East, Dir::South, Dir::West];

impl Dir {
    fn offset(self) -> (i32, i32) {
        match self {
            Dir::North => (-1, 0),
            Dir::East => (0, 1),
            Dir::South => (1, 0),
            Dir::West => (0, -1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dir::North => "North",
            Dir::East => "East",
            Dir::South => "South",
            Dir::West => "West",
        }
    }
}

impl Display for Dir {
    // LURD notation
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::North => write!(f, "u"),
            Dir::East => write!(f, "r"),
            Dir::South => write!(f, "d"),
            Dir::West => write!(f, "l"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}

/// Identity of a box or storage.
///
/// Paired boxes go only on the storage with the same letter,
/// generic boxes go on any generic storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Paired(char),
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Agent,
    Wall,
    Box(Tag),
    Storage(Tag),
}

impl Kind {
    /// The character used for this kind in the native puzzle format
    pub fn symbol(self) -> char {
        match self {
            Kind::Agent => 'R',
            Kind::Wall => 'O',
            Kind::Box(Tag::Generic) => 'X',
            Kind::Storage(Tag::Generic) => 'S',
            Kind::Box(Tag::Paired(id)) => id.to_ascii_uppercase(),
            Kind::Storage(Tag::Paired(id)) => id.to_ascii_lowercase(),
        }
    }
}

/// Index into either the paired or the generic list of a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Paired(usize),
    Generic(usize),
}

/// What the grid holds on a tile. Boxes and storages point into the entity lists of the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupant {
    Agent,
    Wall,
    Box(Slot),
    Storage(Slot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    pub kind: Kind,
    pub pos: Pos,
    /// The storage under this entity, set only while it covers one
    pub standing_on: Option<Slot>,
}

impl Entity {
    pub fn new(kind: Kind, pos: Pos) -> Self {
        Entity {
            kind,
            pos,
            standing_on: None,
        }
    }

    pub fn is_agent(&self) -> bool {
        self.kind == Kind::Agent
    }

    pub fn is_wall(&self) -> bool {
        self.kind == Kind::Wall
    }

    pub fn is_box(&self) -> bool {
        match self.kind {
            Kind::Box(_) => true,
            _ => false,
        }
    }

    pub fn is_storage(&self) -> bool {
        match self.kind {
            Kind::Storage(_) => true,
            _ => false,
        }
    }
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Symbol: {} - at position ({}, {})",
            self.kind.symbol(),
            self.pos.r,
            self.pos.c
        )
    }
}
