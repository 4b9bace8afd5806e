//! Parametric point generation for the Zia sun symbol.
//!
//! The symbol is a circle of "sun" points with four groups of four
//! rays, one group at each compass point.  The ray feet sit on the
//! circle at four evenly spaced abscissae; the inner pair of rays in
//! each group runs the full ray length and the outer pair three
//! quarters of it.  Only the north group is computed directly; the
//! other three are 90° rotations of it, which on the complex plane
//! is just repeated multiplication by i.

use num::Complex;
use std::f64::consts::PI;

/// Stamp recursion stops once the copies shrink below this scale;
/// anything smaller is sub-pixel at any reasonable raster size.
const MIN_STAMP_SCALE: f64 = 0.001;

/// Each stamping level shrinks the copies by this factor.
const STAMP_SHRINK: f64 = 0.01;

/// A parametric Zia sun symbol, produced as a cloud of points on the
/// complex plane centered at the origin.
#[derive(Copy, Clone, Debug)]
pub struct Zia {
    radius: f64,
    ray_len: f64,
    scale: f64,
    ray_n: usize,
    sun_n: usize,
}

impl Zia {
    /// A symbol with the default point density: 500 points on the
    /// sun circle and 500 along each ray.
    pub fn new(radius: f64, ray_len: f64, scale: f64) -> Zia {
        Zia::with_density(radius, ray_len, scale, 500, 500)
    }

    /// A symbol with an explicit count of points per ray and on the
    /// sun circle.
    pub fn with_density(radius: f64, ray_len: f64, scale: f64, ray_n: usize, sun_n: usize) -> Zia {
        Zia {
            radius,
            ray_len,
            scale,
            ray_n,
            sun_n,
        }
    }

    /// A symbol sized to roughly `npts` total points, split between
    /// sun and rays in the proportion the symbol needs: a fifth of
    /// the budget on the circle, and a quarter of that per ray.
    pub fn with_points(radius: f64, ray_len: f64, scale: f64, npts: usize) -> Zia {
        let budget = npts as f64 * 0.2;
        Zia::with_density(radius, ray_len, scale, (budget * 0.25) as usize, budget as usize)
    }

    /// Generates the full symbol: sun circle plus all sixteen rays,
    /// scaled by the symbol's scale factor.
    pub fn points(&self) -> Vec<Complex<f64>> {
        let mut pts = self.sun();
        pts.extend(self.rays());
        for p in pts.iter_mut() {
            *p = *p * self.scale;
        }
        pts
    }

    /// The sun circle.  A density of exactly four is special-cased to
    /// the diagonal angles so the four points land between the ray
    /// groups rather than under them.
    fn sun(&self) -> Vec<Complex<f64>> {
        if self.sun_n == 4 {
            return [1.0, 3.0, 5.0, 7.0]
                .iter()
                .map(|k| {
                    let t = k * PI / 4.0;
                    Complex::new(self.radius * t.cos(), self.radius * t.sin())
                })
                .collect();
        }
        // Endpoints inclusive, so the seam point appears twice; the
        // raster doesn't care and the count stays exact.
        (0..self.sun_n)
            .map(|i| {
                let t = 2.0 * PI * i as f64 / (self.sun_n - 1).max(1) as f64;
                Complex::new(self.radius * t.cos(), self.radius * t.sin())
            })
            .collect()
    }

    /// The four north rays, sampled bottom-up with `ray_n` points
    /// each.  The feet divide the circle's diameter into six equal
    /// parts and sit on the circle itself.
    fn north_rays(&self) -> Vec<Complex<f64>> {
        let d = 2.0 * self.radius / 6.0;
        let mut pts = Vec::with_capacity(4 * self.ray_n);
        for n in 1..5 {
            let x = (n as f64) * d + 0.5 * d - self.radius;
            let y = self.radius * (x / self.radius).acos().sin();
            let len = if n == 2 || n == 3 {
                self.ray_len
            } else {
                0.75 * self.ray_len
            };
            let dy = len / self.ray_n as f64;
            for i in 0..self.ray_n {
                pts.push(Complex::new(x, y + dy * i as f64));
            }
        }
        pts
    }

    /// All four ray groups: north plus three successive quarter-turn
    /// rotations.
    fn rays(&self) -> Vec<Complex<f64>> {
        let quarter_turn = Complex::new(0.0, 1.0);
        let mut group = self.north_rays();
        let mut pts = group.clone();
        for _ in 0..3 {
            for p in group.iter_mut() {
                *p = *p * quarter_turn;
            }
            pts.extend_from_slice(&group);
        }
        pts
    }
}

/// Replaces every point of the cloud with a copy of the whole cloud
/// shrunk by `scale` and anchored at that point, then recurses on the
/// combined cloud with a hundredth of the scale until the copies are
/// sub-pixel.  The result is the self-similar "fractal Zia".  Point
/// count grows quadratically per level, so start from a sparse symbol.
pub fn stamp(points: &[Complex<f64>], scale: f64) -> Vec<Complex<f64>> {
    if scale <= MIN_STAMP_SCALE {
        return points.to_vec();
    }
    let mut out = Vec::with_capacity(points.len() * points.len());
    for &anchor in points {
        for &p in points {
            out.push(p * scale + anchor);
        }
    }
    stamp(&out, scale * STAMP_SHRINK)
}

/// Drops a point cloud onto a `width` x `height` hit grid.  Points
/// are taken to live in the unit square [-1, 1] on both axes; the
/// returned row-major buffer counts how many points landed on each
/// pixel, and points outside the square are skipped.
pub fn rasterize(points: &[Complex<f64>], width: usize, height: usize) -> Vec<u32> {
    let mut grid = vec![0 as u32; width * height];
    let half_w = width as f64 / 2.0;
    let half_h = height as f64 / 2.0;
    for p in points {
        let column = half_w * p.re + half_w;
        let row = half_h * -p.im + half_h;
        if column < 0.0 || column >= width as f64 || row < 0.0 || row >= height as f64 {
            continue;
        }
        grid[(row as usize) * width + (column as usize)] += 1;
    }
    grid
}

/// Rescales a cloud so its farthest coordinate touches the unit
/// square, ready for `rasterize`.  A cloud collapsed onto the origin
/// is returned unchanged.
pub fn normalize(points: &mut [Complex<f64>]) {
    let extent = points
        .iter()
        .fold(0.0_f64, |m, p| m.max(p.re.abs()).max(p.im.abs()));
    if extent > 0.0 {
        for p in points.iter_mut() {
            *p = *p / extent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_symbol_has_expected_count() {
        // 4 sun points + 4 rays x 5 points x 4 rotations.
        let zia = Zia::with_density(1.0, 2.0, 1.0, 5, 4);
        assert_eq!(zia.points().len(), 4 + 4 * 5 * 4);
    }

    #[test]
    fn npts_budget_splits_as_documented() {
        let zia = Zia::with_points(0.25, 0.5, 1.0, 500);
        // sun_n = 100, ray_n = 25.
        assert_eq!(zia.points().len(), 100 + 4 * 25 * 4);
    }

    #[test]
    fn sun_points_sit_on_the_circle() {
        let zia = Zia::with_density(0.25, 0.5, 2.0, 5, 40);
        for p in zia.sun() {
            assert!((p.norm() - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn ray_feet_touch_the_circle() {
        let zia = Zia::with_density(1.0, 2.0, 1.0, 3, 4);
        // The first sample of each ray is its foot on the circle.
        for chunk in zia.north_rays().chunks(3) {
            assert!((chunk[0].norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn ray_groups_are_quarter_turns_of_north() {
        let zia = Zia::with_density(1.0, 2.0, 1.0, 2, 4);
        let rays = zia.rays();
        let group = zia.north_rays().len();
        let i = Complex::new(0.0, 1.0);
        for k in 0..group {
            assert_eq!(rays[group + k], rays[k] * i);
            assert_eq!(rays[3 * group + k], rays[k] * i * i * i);
        }
    }

    #[test]
    fn scale_multiplies_every_point() {
        let unit = Zia::with_density(1.0, 2.0, 1.0, 2, 4).points();
        let tenth = Zia::with_density(1.0, 2.0, 0.1, 2, 4).points();
        for (a, b) in unit.iter().zip(tenth.iter()) {
            assert!((*a * 0.1 - *b).norm() < 1e-12);
        }
    }

    #[test]
    fn stamp_below_threshold_is_identity() {
        let pts = vec![Complex::new(0.5, 0.5)];
        assert_eq!(stamp(&pts, 0.001), pts);
    }

    #[test]
    fn stamp_squares_the_count_per_level() {
        let pts = vec![Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)];
        // scale 0.5: one level of 2² = 4, then one of 4² = 16, then
        // 0.00005 stops the recursion.
        let out = stamp(&pts, 0.5);
        assert_eq!(out.len(), 16);
    }

    #[test]
    fn stamp_anchors_copies_at_every_point() {
        // A single point keeps the arithmetic visible: each level
        // appends a shrunken offset from the anchor.
        let pts = vec![Complex::new(1.0, 0.0)];
        let out = stamp(&pts, 0.5);
        assert_eq!(out.len(), 1);
        // 1.0 * 0.5 + 1.0, then * 0.005 + that.
        assert!((out[0].re - 1.5075).abs() < 1e-12);
    }

    #[test]
    fn rasterize_hits_the_center() {
        let pts = vec![Complex::new(0.0, 0.0)];
        let grid = rasterize(&pts, 4, 4);
        assert_eq!(grid.iter().sum::<u32>(), 1);
        assert_eq!(grid[2 * 4 + 2], 1);
    }

    #[test]
    fn rasterize_skips_out_of_bounds() {
        let pts = vec![Complex::new(2.0, 0.0), Complex::new(0.0, -3.0)];
        let grid = rasterize(&pts, 4, 4);
        assert_eq!(grid.iter().sum::<u32>(), 0);
    }

    #[test]
    fn normalize_fits_the_unit_square() {
        let mut pts = vec![Complex::new(4.0, -2.0), Complex::new(-1.0, 0.5)];
        normalize(&mut pts);
        assert_eq!(pts[0], Complex::new(1.0, -0.5));
        let extent = pts
            .iter()
            .fold(0.0_f64, |m, p| m.max(p.re.abs()).max(p.im.abs()));
        assert!((extent - 1.0).abs() < 1e-12);
    }
}
