//! Colormaps for turning a field of escape counts into RGB pixels.
//!
//! Each map is a short run of evenly spaced color stops; a value in
//! [0, 1] is linearly interpolated between the two stops on either
//! side of it, and values outside the range clamp to the ends.  The
//! names are a small subset of the matplotlib palette names, so old
//! render commands keep working.

use itertools::Itertools;
use num::clamp;
use std::str::FromStr;

const GRAY: &[[f64; 3]] = &[[0.0, 0.0, 0.0], [255.0, 255.0, 255.0]];

const HOT: &[[f64; 3]] = &[
    [10.0, 0.0, 0.0],
    [230.0, 0.0, 0.0],
    [255.0, 210.0, 0.0],
    [255.0, 255.0, 255.0],
];

const COOLWARM: &[[f64; 3]] = &[
    [59.0, 76.0, 192.0],
    [221.0, 221.0, 221.0],
    [180.0, 4.0, 38.0],
];

const HSV: &[[f64; 3]] = &[
    [255.0, 0.0, 0.0],
    [255.0, 255.0, 0.0],
    [0.0, 255.0, 0.0],
    [0.0, 255.0, 255.0],
    [0.0, 0.0, 255.0],
    [255.0, 0.0, 255.0],
    [255.0, 0.0, 0.0],
];

/// A named mapping from normalized escape counts to RGB colors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Colormap {
    /// Black through white.
    Gray,
    /// Black body: dark red through yellow to white.
    Hot,
    /// Diverging blue to red through a neutral gray.
    Coolwarm,
    /// A full trip around the hue wheel.
    Hsv,
}

impl FromStr for Colormap {
    type Err = String;

    fn from_str(s: &str) -> Result<Colormap, String> {
        match s {
            "gray" | "grey" => Ok(Colormap::Gray),
            "hot" => Ok(Colormap::Hot),
            "coolwarm" => Ok(Colormap::Coolwarm),
            "hsv" => Ok(Colormap::Hsv),
            other => Err(format!(
                "Unknown colormap '{}'; expected one of gray, hot, coolwarm, hsv.",
                other
            )),
        }
    }
}

impl Colormap {
    fn stops(&self) -> &'static [[f64; 3]] {
        match *self {
            Colormap::Gray => GRAY,
            Colormap::Hot => HOT,
            Colormap::Coolwarm => COOLWARM,
            Colormap::Hsv => HSV,
        }
    }

    /// The RGB color for a normalized value, clamped into [0, 1].
    pub fn color(&self, t: f64) -> [u8; 3] {
        let stops = self.stops();
        let t = clamp(t, 0.0, 1.0);
        let span = 1.0 / (stops.len() - 1) as f64;
        for (i, (a, b)) in stops.iter().tuple_windows().enumerate() {
            let lo = i as f64 * span;
            if t <= lo + span {
                let f = (t - lo) / span;
                return [
                    (a[0] + (b[0] - a[0]) * f) as u8,
                    (a[1] + (b[1] - a[1]) * f) as u8,
                    (a[2] + (b[2] - a[2]) * f) as u8,
                ];
            }
        }
        let last = stops[stops.len() - 1];
        [last[0] as u8, last[1] as u8, last[2] as u8]
    }

    /// Maps a whole field of counts, each in `0..=depth`, to a
    /// row-major RGB byte buffer three times the field's length.
    pub fn apply(&self, field: &[u32], depth: usize) -> Vec<u8> {
        let depth = depth.max(1) as f64;
        let mut rgb = Vec::with_capacity(field.len() * 3);
        for &count in field {
            rgb.extend_from_slice(&self.color(count as f64 / depth));
        }
        rgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve() {
        assert_eq!(Colormap::from_str("gray").unwrap(), Colormap::Gray);
        assert_eq!(Colormap::from_str("grey").unwrap(), Colormap::Gray);
        assert_eq!(Colormap::from_str("hot").unwrap(), Colormap::Hot);
        assert_eq!(Colormap::from_str("coolwarm").unwrap(), Colormap::Coolwarm);
        assert_eq!(Colormap::from_str("hsv").unwrap(), Colormap::Hsv);
        assert!(Colormap::from_str("viridis").is_err());
    }

    #[test]
    fn gray_endpoints_and_midpoint() {
        let map = Colormap::Gray;
        assert_eq!(map.color(0.0), [0, 0, 0]);
        assert_eq!(map.color(1.0), [255, 255, 255]);
        assert_eq!(map.color(0.5), [127, 127, 127]);
    }

    #[test]
    fn out_of_range_values_clamp() {
        let map = Colormap::Hot;
        assert_eq!(map.color(-3.0), map.color(0.0));
        assert_eq!(map.color(7.0), map.color(1.0));
    }

    #[test]
    fn hsv_wraps_back_to_red() {
        let map = Colormap::Hsv;
        assert_eq!(map.color(0.0), map.color(1.0));
    }

    #[test]
    fn apply_produces_three_bytes_per_count() {
        let field = vec![0, 5, 10];
        let rgb = Colormap::Gray.apply(&field, 10);
        assert_eq!(rgb.len(), 9);
        assert_eq!(&rgb[0..3], &[0, 0, 0]);
        assert_eq!(&rgb[6..9], &[255, 255, 255]);
    }

    #[test]
    fn apply_guards_a_zero_depth() {
        assert_eq!(Colormap::Gray.apply(&[0], 0), vec![0, 0, 0]);
    }
}
