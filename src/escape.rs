//! The escape-time kernel.
//!
//! Both the Mandelbrot and Julia sets are drawn from the same
//! recurrence, z = z² + c; they differ only in which half of the
//! (z, c) pair the pixel supplies.  For the Mandelbrot set the orbit
//! starts at zero and the pixel is c; for a Julia set the pixel is
//! the starting z and c is a fixed constant that selects which Julia
//! set you get.

use num::Complex;

/// The bounding radius used when none is given.  An orbit of the
/// quadratic map that ever leaves |z| = 2 is guaranteed to diverge.
pub const DEFAULT_RADIUS: f64 = 2.0;

/// Which escape-time fractal to compute.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Model {
    /// Orbit starts at zero; the sampled point supplies c.
    Mandelbrot,
    /// Orbit starts at the sampled point; c is the fixed constant.
    Julia(Complex<f64>),
}

impl Model {
    /// Counts how many elements of the orbit, the starting value
    /// included, lie strictly inside `radius` before the first one
    /// escapes.  Returns `depth` if no element escapes within that
    /// many steps, and zero if the starting value is already at or
    /// beyond the radius.
    pub fn escape_count(&self, point: Complex<f64>, depth: usize, radius: f64) -> usize {
        let rr = radius * radius;
        let (mut z, c) = match *self {
            Model::Mandelbrot => (Complex::new(0.0, 0.0), point),
            Model::Julia(c) => (point, c),
        };
        let mut count = 0;
        while count < depth {
            if z.norm_sqr() >= rr {
                return count;
            }
            count += 1;
            z = z * z + c;
        }
        depth
    }
}
