//! Vector values handed to the host
//!
//! Positions, sizes and colors all travel to the host as one native
//! 3-component vector type. Callers may author them as 2- or 3-component
//! tuples/arrays; normalization happens here, before any host call.

use crate::error::{BuildError, Result};

/// Native 3-component vector representation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UiVec {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl UiVec {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from explicit components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Normalize a dynamically-shaped component slice.
    ///
    /// Accepts exactly 2 or 3 components; a 2-component slice maps to
    /// `(x, y, 0)`. Any other length is rejected at this boundary rather
    /// than silently coerced.
    pub fn from_components(components: &[f32]) -> Result<Self> {
        match *components {
            [x, y] => Ok(Self::new(x, y, 0.0)),
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(BuildError::MalformedVector {
                len: components.len(),
            }),
        }
    }
}

impl From<[f32; 2]> for UiVec {
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1], 0.0)
    }
}

impl From<[f32; 3]> for UiVec {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<(f32, f32)> for UiVec {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y, 0.0)
    }
}

impl From<(f32, f32, f32)> for UiVec {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}
