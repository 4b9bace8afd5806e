extern crate clap;
extern crate failure;
extern crate image;
extern crate num;
extern crate num_cpus;
extern crate ziafract;

use clap::{App, Arg, ArgMatches};
use failure::{err_msg, Error};
use image::ColorType;
use num::Complex;
use std::str::FromStr;
use ziafract::{Colormap, Model, Renderer, Viewport};

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

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_zoom(s: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(z) if z.is_finite() && z > 0.0 => Ok(()),
        Ok(_) => Err("Zoom must be positive and finite".to_string()),
        Err(_) => Err("Could not parse zoom factor".to_string()),
    }
}

const MODEL: &str = "model";
const CONSTANT: &str = "constant";
const SIZE: &str = "size";
const DEPTH: &str = "depth";
const ZOOM: &str = "zoom";
const CENTER: &str = "center";
const CMAP: &str = "cmap";
const THREADS: &str = "threads";
const OUTPUT: &str = "output";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("ziafract")
        .version("0.1.0")
        .about("Escape-time fractal renderer")
        .arg(
            Arg::with_name(MODEL)
                .required(true)
                .possible_values(&["mandelbrot", "julia"])
                .help("Fractal model to render"),
        )
        .arg(
            Arg::with_name(CONSTANT)
                .required_if(MODEL, "julia")
                .long(CONSTANT)
                .short("C")
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse Julia constant"))
                .help("Julia constant as re,im (julia only), e.g. -0.75472,-0.06592"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("512x512")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(DEPTH)
                .required(false)
                .long(DEPTH)
                .short("d")
                .takes_value(true)
                .default_value("256")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration depth",
                        "Iteration depth must be between 1 and 1000000",
                    )
                })
                .help("Iteration depth, the step count limit"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .required(false)
                .long(ZOOM)
                .short("z")
                .takes_value(true)
                .default_value("1")
                .validator(|s| validate_zoom(&s))
                .help("Zoom factor; data spans [-1/zoom, 1/zoom] around the center"),
        )
        .arg(
            Arg::with_name(CENTER)
                .required(false)
                .long(CENTER)
                .short("c")
                .takes_value(true)
                .default_value("0,0")
                .allow_hyphen_values(true)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse center point"))
                .help("Central point of the window"),
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
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of worker threads (default: one per CPU)"),
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
    let depth = usize::from_str(matches.value_of(DEPTH).unwrap())?;
    let zoom = f64::from_str(matches.value_of(ZOOM).unwrap())?;
    let center = parse_complex(matches.value_of(CENTER).unwrap())
        .ok_or_else(|| err_msg("Error parsing center point"))?;
    let cmap = Colormap::from_str(matches.value_of(CMAP).unwrap()).map_err(err_msg)?;

    let constant = match matches.value_of(CONSTANT) {
        Some(s) => Some(parse_complex(s).ok_or_else(|| err_msg("Error parsing Julia constant"))?),
        None => None,
    };
    let model = match matches.value_of(MODEL).unwrap() {
        "julia" => Model::Julia(constant.ok_or_else(|| err_msg("Missing Julia constant"))?),
        _ => {
            if constant.is_some() {
                return Err(err_msg("The mandelbrot model takes no --constant"));
            }
            Model::Mandelbrot
        }
    };

    let viewport = Viewport::new(width, height, zoom, center).map_err(err_msg)?;
    let renderer = Renderer::new(viewport, model, depth);
    let field = match matches.value_of(THREADS) {
        Some(s) => renderer.render(usize::from_str(s)?).map_err(err_msg)?,
        None => renderer.render_auto().map_err(err_msg)?,
    };

    let rgb = cmap.apply(&field, depth);
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
        eprintln!("ziafract: {}", e);
        std::process::exit(1);
    }
}
