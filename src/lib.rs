#![deny(missing_docs)]

//! Escape-time fractal fields and Zia sun-symbol geometry.
//!
//! The heart of this crate is the escape-time kernel: take a point on
//! the complex plane, iterate the quadratic map z = z² + c, and count
//! how many steps the orbit stays inside a bounding radius before it
//! leaves (or a depth cap if it never does).  Painting that count for
//! every pixel of a window on the plane gives the familiar Mandelbrot
//! and Julia images.
//!
//! Rows of the image are independent of one another, so the renderer
//! fans the work out across a fixed pool of threads, one row at a
//! time.  The rows land back in their natural order because each
//! worker writes only into its own row's slice of the buffer.
//!
//! The rest of the crate is geometry: a parametric generator for the
//! Zia sun symbol (a circle plus four rays at each compass point), a
//! self-similar "stamp" operator that replaces every point of a cloud
//! with a shrunken copy of the whole cloud, and a rasterizer that
//! drops the resulting points onto a pixel grid.

extern crate crossbeam;
extern crate itertools;
extern crate num;
extern crate num_cpus;

pub mod color;
pub mod escape;
pub mod render;
pub mod viewport;
pub mod zia;

pub use color::Colormap;
pub use escape::Model;
pub use render::Renderer;
pub use viewport::Viewport;
