use serde::{Deserialize, Serialize};

/// North/south prefix of a quadrant bearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NorthSouth {
    North,
    South,
}

impl NorthSouth {
    /// Read a direction word or abbreviation by its first letter
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().chars().next()?.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            _ => None,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
        }
    }
}

/// East/west suffix of a quadrant bearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EastWest {
    East,
    West,
}

impl EastWest {
    /// Read a direction word or abbreviation by its first letter
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().chars().next()?.to_ascii_uppercase() {
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

/// One of the four bearing quadrants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    #[must_use]
    pub const fn new(north_south: NorthSouth, east_west: EastWest) -> Self {
        match (north_south, east_west) {
            (NorthSouth::North, EastWest::East) => Self::NorthEast,
            (NorthSouth::North, EastWest::West) => Self::NorthWest,
            (NorthSouth::South, EastWest::West) => Self::SouthWest,
            (NorthSouth::South, EastWest::East) => Self::SouthEast,
        }
    }

    #[must_use]
    pub const fn north_south(self) -> NorthSouth {
        match self {
            Self::NorthEast | Self::NorthWest => NorthSouth::North,
            Self::SouthWest | Self::SouthEast => NorthSouth::South,
        }
    }

    #[must_use]
    pub const fn east_west(self) -> EastWest {
        match self {
            Self::NorthEast | Self::SouthEast => EastWest::East,
            Self::NorthWest | Self::SouthWest => EastWest::West,
        }
    }

    /// Map a quadrant angle onto the raw (unnormalized) azimuth
    #[must_use]
    pub fn raw_azimuth(self, angle: f64) -> f64 {
        match self {
            Self::NorthEast => 90.0 - angle,
            Self::NorthWest => 90.0 + angle,
            Self::SouthWest => 270.0 - angle,
            Self::SouthEast => 270.0 + angle,
        }
    }

    /// Inverse of [`Quadrant::raw_azimuth`] for an azimuth already in `[0, 360)`
    #[must_use]
    pub fn from_azimuth(azimuth: f64) -> (Self, f64) {
        if azimuth <= 90.0 {
            (Self::NorthEast, 90.0 - azimuth)
        } else if azimuth <= 180.0 {
            (Self::NorthWest, azimuth - 90.0)
        } else if azimuth <= 270.0 {
            (Self::SouthWest, 270.0 - azimuth)
        } else {
            (Self::SouthEast, azimuth - 270.0)
        }
    }
}
