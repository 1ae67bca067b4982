//! Coordinate file I/O.
//!
//! Reads `lat,lon` / `lat lon` text files and writes optimized routes back
//! out. Malformed lines are skipped with a warning instead of failing the read.

mod reader;
mod writer;

pub use reader::{parse_coordinates, read_coordinates};
pub use writer::{format_route, route_summary, write_route};
