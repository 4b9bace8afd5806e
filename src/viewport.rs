//! Contains the Viewport struct, which describes a relationship
//! between a rectangle on the integral pixel plane with an origin at
//! 0,0 and a square window on the complex plane picked out by a zoom
//! factor and a central point.
//!
//! With zoom 1 and the center at the origin, the longest side of the
//! image spans [-1, 1]; the shorter side is centered inside that
//! span, and raising the zoom narrows the window around the center.
//! The imaginary axis points up, so row zero is the top of the
//! window.

use num::Complex;

/// Maps pixel coordinates to points on the complex plane.
#[derive(Copy, Clone, Debug)]
pub struct Viewport {
    width: usize,
    height: usize,
    zoom: f64,
    center: Complex<f64>,
    // Precomputed: longest side minus one, and the half-gap that
    // centers the short side inside the square window.
    side_m1: f64,
    delta: (f64, f64),
}

impl Viewport {
    /// Constructor.  Takes the image size in pixels, the zoom factor,
    /// and the central point of the window.  Rejects windows the
    /// pixel-to-point mapping cannot handle: zero-sized images, a
    /// one-pixel longest side, and non-positive or non-finite zooms.
    pub fn new(
        width: usize,
        height: usize,
        zoom: f64,
        center: Complex<f64>,
    ) -> Result<Viewport, String> {
        if width == 0 || height == 0 {
            return Err("Image dimensions must both be non-zero.".to_string());
        }
        let side = width.max(height);
        if side < 2 {
            return Err("The longest side of the image must be at least two pixels.".to_string());
        }
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err("The zoom factor must be positive and finite.".to_string());
        }

        Ok(Viewport {
            width,
            height,
            zoom,
            center,
            side_m1: (side - 1) as f64,
            delta: (
                (side - width) as f64 / 2.0,
                (side - height) as f64 / 2.0,
            ),
        })
    }

    /// Width of the image in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the image in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of pixels.  Used to size the field buffer.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Describes that the viewport covers no pixels.  Never true for
    /// a constructed Viewport.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Given the column and row of a pixel, return the complex number
    /// at the equivalent location inside the window.
    pub fn point_at(&self, column: usize, row: usize) -> Complex<f64> {
        let re =
            (2.0 * (column as f64 + self.delta.0) / self.side_m1 - 1.0) / self.zoom
                + self.center.re;
        let im =
            (2.0 * ((self.height - row) as f64 + self.delta.1) / self.side_m1 - 1.0) / self.zoom
                + self.center.im;
        Complex::new(re, im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_fails_on_degenerate_sizes() {
        let origin = Complex::new(0.0, 0.0);
        assert!(Viewport::new(0, 100, 1.0, origin).is_err());
        assert!(Viewport::new(100, 0, 1.0, origin).is_err());
        assert!(Viewport::new(1, 1, 1.0, origin).is_err());
    }

    #[test]
    fn viewport_fails_on_bad_zoom() {
        let origin = Complex::new(0.0, 0.0);
        assert!(Viewport::new(16, 16, 0.0, origin).is_err());
        assert!(Viewport::new(16, 16, -1.0, origin).is_err());
        assert!(Viewport::new(16, 16, ::std::f64::NAN, origin).is_err());
        assert!(Viewport::new(16, 16, ::std::f64::INFINITY, origin).is_err());
    }

    #[test]
    fn square_window_spans_minus_one_to_one() {
        let vp = Viewport::new(3, 3, 1.0, Complex::new(0.0, 0.0)).unwrap();
        assert_eq!(vp.point_at(0, 1).re, -1.0);
        assert_eq!(vp.point_at(1, 1).re, 0.0);
        assert_eq!(vp.point_at(2, 1).re, 1.0);
        // Rows run top-down: the bottom row sits one pixel above -1.
        assert_eq!(vp.point_at(1, 2).im, 0.0);
        assert_eq!(vp.point_at(1, 1).im, 1.0);
    }

    #[test]
    fn zoom_narrows_the_window() {
        let wide = Viewport::new(5, 5, 1.0, Complex::new(0.0, 0.0)).unwrap();
        let tight = Viewport::new(5, 5, 2.0, Complex::new(0.0, 0.0)).unwrap();
        assert_eq!(wide.point_at(0, 0).re, -1.0);
        assert_eq!(tight.point_at(0, 0).re, -0.5);
    }

    #[test]
    fn center_displaces_the_window() {
        let vp = Viewport::new(5, 5, 1.0, Complex::new(0.25, -0.75)).unwrap();
        assert_eq!(vp.point_at(0, 0).re, -0.75);
        assert_eq!(vp.point_at(4, 0).re, 1.25);
    }

    #[test]
    fn short_side_is_centered_in_the_square() {
        // A 4x2 image: the two rows sit in the middle of the square
        // window, so their imaginary parts straddle the center.
        let vp = Viewport::new(4, 2, 1.0, Complex::new(0.0, 0.0)).unwrap();
        let top = vp.point_at(0, 0).im;
        let bottom = vp.point_at(0, 1).im;
        assert!(top > bottom);
        assert!(top < 1.0 + 1e-9);
        assert!(bottom > -1.0 - 1e-9);
    }

    #[test]
    fn len_counts_pixels() {
        let vp = Viewport::new(6, 4, 1.0, Complex::new(0.0, 0.0)).unwrap();
        assert_eq!(vp.len(), 24);
        assert!(!vp.is_empty());
    }
}
