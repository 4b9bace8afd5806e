//! Row-parallel generation of the escape-time field.
//!
//! Every pixel of the field is an independent computation, so the
//! image is partitioned by row: the output buffer is split into one
//! mutable slice per row, a shared iterator hands (row, slice) pairs
//! to a fixed pool of scoped threads, and each worker loops pulling
//! rows until the iterator runs dry.  No two workers ever hold the
//! same slice, so the field needs no reassembly pass; rows are in
//! their final position the moment they are computed.

extern crate crossbeam;
extern crate num_cpus;

use std::iter::Enumerate;
use std::slice::ChunksMut;
use std::sync::{Arc, Mutex};

use escape::{Model, DEFAULT_RADIUS};
use viewport::Viewport;

type RowQueue<'a> = Arc<Mutex<Enumerate<ChunksMut<'a, u32>>>>;

/// Computes the field of escape counts for a window on the complex
/// plane.  The field is a row-major `Vec<u32>` of `width * height`
/// counts, each in `0..=depth`.
pub struct Renderer {
    viewport: Viewport,
    model: Model,
    depth: usize,
    radius: f64,
}

impl Renderer {
    /// Requires the viewport describing the window, the fractal model
    /// to iterate, and the iteration depth cap.  The escape radius
    /// defaults to 2.
    pub fn new(viewport: Viewport, model: Model, depth: usize) -> Renderer {
        Renderer {
            viewport,
            model,
            depth,
            radius: DEFAULT_RADIUS,
        }
    }

    /// The depth cap this renderer saturates at.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The viewport being rendered.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn render_row(&self, row: usize, out: &mut [u32]) {
        for (column, cell) in out.iter_mut().enumerate() {
            let point = self.viewport.point_at(column, row);
            *cell = self.model.escape_count(point, self.depth, self.radius) as u32;
        }
    }

    /// The single-threaded version of the render function.  The
    /// threaded version must produce exactly this field.
    pub fn render_single(&self) -> Vec<u32> {
        let mut buffer = vec![0 as u32; self.viewport.len()];
        for (row, slice) in buffer.chunks_mut(self.viewport.width()).enumerate() {
            self.render_row(row, slice);
        }
        buffer
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count.  Rows are handed out through a shared iterator;
    /// a worker that finishes a short row simply pulls the next one.
    pub fn render(&self, threads: usize) -> Result<Vec<u32>, String> {
        if threads == 0 {
            return Err("Thread count must be at least one.".to_string());
        }
        let mut buffer = vec![0 as u32; self.viewport.len()];
        {
            let rows: RowQueue =
                Arc::new(Mutex::new(buffer.chunks_mut(self.viewport.width()).enumerate()));
            crossbeam::scope(|spawner| {
                for _ in 0..threads {
                    let rows = rows.clone();
                    spawner.spawn(move |_| loop {
                        let next = { rows.lock().unwrap().next() };
                        match next {
                            Some((row, slice)) => self.render_row(row, slice),
                            None => {
                                break;
                            }
                        }
                    });
                }
            })
            .unwrap();
        }
        Ok(buffer)
    }

    /// Renders with one worker per available CPU.
    pub fn render_auto(&self) -> Result<Vec<u32>, String> {
        self.render(num_cpus::get())
    }
}
