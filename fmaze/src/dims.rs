use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Position of a single location in the grid, or an offset between two of them.
///
/// `x` grows to the east and `y` grows to the north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    /// Iterates all positions in the `from..to` rectangle, x-major
    /// (`(0, 0), (0, 1), .., (1, 0), ..`).
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.0..to.0).flat_map(move |x| (from.1..to.1).map(move |y| Dims(x, y)))
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}
