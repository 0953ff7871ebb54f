//! # Deed Bearing
//!
//! Quadrant bearing parsing and azimuth conversion for metes and bounds calls.
//!
//! ## Conventions
//!
//! Deed calls express direction as a quadrant bearing: a north/south prefix, an
//! angle, and an east/west suffix (`N45°30'E`, `South 28 degrees 50 minutes West`).
//! The traverse engine needs a single angle instead, so every bearing is mapped
//! into an azimuth in `[0, 360)` with the fixed quadrant table:
//!
//! ```text
//! NE -> 90 - angle      NW -> 90 + angle
//! SW -> 270 - angle     SE -> 270 + angle
//! ```
//!
//! The coordinate engine places points with `dx = d·sin(az)`, `dy = d·cos(az)`;
//! [`vector_azimuth`] and [`QuadrantBearing::from_azimuth`] are the exact inverse
//! of that pair, so a closure vector converts back into a bearing that
//! [`to_azimuth`] maps onto the same direction.
//!
//! ## Example
//!
//! ```rust
//! use deed_bearing::to_azimuth;
//!
//! assert_eq!(to_azimuth("N45°0'E"), Some(45.0));
//! assert_eq!(to_azimuth("S45°0'W"), Some(225.0));
//! assert_eq!(to_azimuth("not a bearing"), None);
//! ```

mod azimuth;
mod bearing;
mod error;
mod quadrant;

pub use azimuth::{normalize_azimuth, to_azimuth, vector_azimuth};
pub use bearing::QuadrantBearing;
pub use error::{BearingError, Result};
pub use quadrant::{EastWest, NorthSouth, Quadrant};
