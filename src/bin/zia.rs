extern crate clap;
extern crate failure;
extern crate image;
extern crate ziafract;

use clap::{App, Arg, ArgMatches};
use failure::{err_msg, Error};
use image::ColorType;
use std::str::FromStr;
use ziafract::zia::{self, Zia};
use ziafract::Colormap;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_positive(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(()),
        _ => Err(err.to_string()),
    }
}

const SIZE: &str = "size";
const RADIUS: &str = "radius";
const RAYLEN: &str = "raylen";
const NPTS: &str = "npts";
const FRACTAL: &str = "fractal";
const CMAP: &str = "cmap";
const OUTPUT: &str = "output";

fn args<'a>() -> ArgMatches<'a> {
    App::new("zia")
        .version("0.1.0")
        .about("Zia sun-symbol raster generator")
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x800")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(RADIUS)
                .required(false)
                .long(RADIUS)
                .short("r")
                .takes_value(true)
                .default_value("0.25")
                .validator(|s| validate_positive(&s, "Could not parse sun radius"))
                .help("Radius of the sun circle"),
        )
        .arg(
            Arg::with_name(RAYLEN)
                .required(false)
                .long(RAYLEN)
                .short("l")
                .takes_value(true)
                .default_value("0.5")
                .validator(|s| validate_positive(&s, "Could not parse ray length"))
                .help("Length of the inner rays"),
        )
        .arg(
            Arg::with_name(NPTS)
                .required(false)
                .long(NPTS)
                .short("n")
                .takes_value(true)
                .default_value("2000")
                .validator(|s| match usize::from_str(&s) {
                    Ok(n) if n >= 25 => Ok(()),
                    _ => Err("Point budget must be a number of at least 25".to_string()),
                })
                .help("Approximate point budget for the symbol"),
        )
        .arg(
            Arg::with_name(FRACTAL)
                .required(false)
                .long(FRACTAL)
                .short("f")
                .takes_value(true)
                .validator(|s| validate_positive(&s, "Could not parse stamp scale"))
                .help("Render the self-similar stamped variant at this scale, e.g. 0.045"),
        )
        .arg(
            Arg::with_name(CMAP)
                .required(false)
                .long(CMAP)
                .short("m")
                .takes_value(true)
                .default_value("gray")
                .validator(|s| Colormap::from_str(&s).map(|_| ()))
                .help("Colormap name (gray, hot, coolwarm, hsv)"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; format follows the extension"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let (width, height) = parse_pair::<usize>(matches.value_of(SIZE).unwrap(), 'x')
        .ok_or_else(|| err_msg("Error parsing image dimensions"))?;
    if width == 0 || height == 0 {
        return Err(err_msg("Image dimensions must both be non-zero"));
    }
    let radius = f64::from_str(matches.value_of(RADIUS).unwrap())?;
    let ray_len = f64::from_str(matches.value_of(RAYLEN).unwrap())?;
    let npts = usize::from_str(matches.value_of(NPTS).unwrap())?;
    let cmap = Colormap::from_str(matches.value_of(CMAP).unwrap()).map_err(err_msg)?;

    // The stamped variant squares the point count per level, so it
    // starts from the sparsest symbol that still reads as a Zia.
    let mut points = match matches.value_of(FRACTAL) {
        Some(s) => {
            let scale = f64::from_str(s)?;
            let symbol = Zia::with_density(radius, ray_len, 1.0, 5, 4).points();
            zia::stamp(&symbol, scale)
        }
        None => Zia::with_points(radius, ray_len, 1.0, npts).points(),
    };
    zia::normalize(&mut points);

    let grid = zia::rasterize(&points, width, height);
    let peak = grid.iter().max().cloned().unwrap_or(0);
    let rgb = cmap.apply(&grid, peak as usize);
    image::save_buffer(
        matches.value_of(OUTPUT).unwrap(),
        &rgb,
        width as u32,
        height as u32,
        ColorType::RGB(8),
    )?;
    Ok(())
}

fn main() {
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("zia: {}", e);
        std::process::exit(1);
    }
}
