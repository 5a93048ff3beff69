/*!
    Rational numbers for frame rates and time bases.
*/

use std::fmt;
use std::time::Duration;

/**
    A rational number, as used by containers for frame rates and time bases.

    A zero or negative component is allowed here since containers report
    `0/0` or `0/1` for unknown rates; consumers decide what that means.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rational {
    pub num: i32,
    pub den: i32,
}

impl Rational {
    pub const fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }

    /**
        Returns true if both numerator and denominator are strictly positive.
    */
    pub const fn is_positive(self) -> bool {
        self.num > 0 && self.den > 0
    }

    /**
        Interprets this rational as a frame rate and returns the duration of
        one frame (`den / num` seconds).

        Returns `None` for rates that are not strictly positive, which is how
        containers report an unknown average frame rate.
    */
    pub fn frame_interval(self) -> Option<Duration> {
        if !self.is_positive() {
            return None;
        }
        let nanos = self.den as u64 * 1_000_000_000 / self.num as u64;
        Some(Duration::from_nanos(nanos))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
