use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The category of a single grid cell. The weight of a category is the cost of entering a
/// cell of that category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Terrain {
    DeepWater,
    Water,
    Sand,
    #[default]
    Flat,
    Forest,
    Mountain,
    MountainTop,
}

impl Terrain {
    pub const ALL: [Terrain; 7] = [
        Terrain::DeepWater,
        Terrain::Water,
        Terrain::Sand,
        Terrain::Flat,
        Terrain::Forest,
        Terrain::Mountain,
        Terrain::MountainTop,
    ];

    /// Traversal cost of entering a cell of this category.
    pub fn weight(self) -> f64 {
        match self {
            Terrain::DeepWater => 6.0,
            Terrain::Water => 3.0,
            Terrain::Sand => 1.5,
            Terrain::Flat => 1.0,
            Terrain::Forest => 2.5,
            Terrain::Mountain => 6.5,
            Terrain::MountainTop => 7.0,
        }
    }

    /// Character used for this category in the text grid format.
    pub fn symbol(self) -> char {
        match self {
            Terrain::DeepWater => 'D',
            Terrain::Water => 'w',
            Terrain::Sand => 's',
            Terrain::Flat => '.',
            Terrain::Forest => 'f',
            Terrain::Mountain => 'm',
            Terrain::MountainTop => '^',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Terrain> {
        Terrain::ALL.into_iter().find(|t| t.symbol() == symbol)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Terrain::DeepWater => "deep water",
            Terrain::Water => "water",
            Terrain::Sand => "sand",
            Terrain::Flat => "flat",
            Terrain::Forest => "forest",
            Terrain::Mountain => "mountain",
            Terrain::MountainTop => "mountain top",
        };
        f.write_str(name)
    }
}

/// The set of [Terrain] categories that may be entered during a search. Stored as a bitmask
/// with one bit per category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Accessibility {
    mask: u8,
}

impl Accessibility {
    pub fn none() -> Accessibility {
        Accessibility { mask: 0 }
    }

    pub fn all() -> Accessibility {
        Terrain::ALL.into_iter().collect()
    }

    pub fn with(mut self, terrain: Terrain) -> Accessibility {
        self.set(terrain, true);
        self
    }

    pub fn without(mut self, terrain: Terrain) -> Accessibility {
        self.set(terrain, false);
        self
    }

    pub fn set(&mut self, terrain: Terrain, accessible: bool) {
        if accessible {
            self.mask |= terrain.bit();
        } else {
            self.mask &= !terrain.bit();
        }
    }

    #[inline]
    pub fn is_accessible(&self, terrain: Terrain) -> bool {
        self.mask & terrain.bit() != 0
    }

    /// The accessible categories, in [Terrain::ALL] order.
    pub fn iter(&self) -> impl Iterator<Item = Terrain> + '_ {
        Terrain::ALL
            .into_iter()
            .filter(move |t| self.is_accessible(*t))
    }
}

/// Sand, flat land, forest and mountains are walkable; deep water, water and mountain tops
/// are not.
impl Default for Accessibility {
    fn default() -> Accessibility {
        [
            Terrain::Sand,
            Terrain::Flat,
            Terrain::Forest,
            Terrain::Mountain,
        ]
        .into_iter()
        .collect()
    }
}

impl FromIterator<Terrain> for Accessibility {
    fn from_iter<I: IntoIterator<Item = Terrain>>(iter: I) -> Self {
        let mut accessibility = Accessibility::none();
        for terrain in iter {
            accessibility.set(terrain, true);
        }
        accessibility
    }
}
