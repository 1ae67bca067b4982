//! Route writer and summary formatting.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::Solution;
use crate::Result;

/// Writes a solution as a commented `lat,lon` file.
pub fn write_route(path: &Path, solution: &Solution) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    format_route(&mut out, solution)?;
    out.flush()?;
    log::info!("route saved to {}", path.display());
    Ok(())
}

/// Writes the route file contents to `out`.
///
/// # Examples
///
/// ```
/// use u_georoute::io::format_route;
/// use u_georoute::models::{Coordinate, Solution};
/// use u_georoute::optimizer::Method;
///
/// let sol = Solution::new(vec![Coordinate::new(1.0, 2.0).unwrap()], 0.0, Method::Auto);
/// let mut buf = Vec::new();
/// format_route(&mut buf, &sol).unwrap();
/// let text = String::from_utf8(buf).unwrap();
/// assert!(text.ends_with("1.000000,2.000000\n"));
/// ```
pub fn format_route<W: Write>(out: &mut W, solution: &Solution) -> Result<()> {
    writeln!(out, "# Optimized GPS Route")?;
    writeln!(out, "# Total distance: {:.2} km", solution.distance())?;
    writeln!(out, "# Number of points: {}", solution.len())?;
    writeln!(out, "# Format: latitude,longitude")?;
    writeln!(out)?;
    for c in solution.route() {
        writeln!(out, "{:.6},{:.6}", c.lat(), c.lon())?;
    }
    Ok(())
}

/// Human-readable listing of a solution, ending with the return leg.
pub fn route_summary(solution: &Solution, method_label: &str) -> String {
    let mut s = format!(
        "Optimized route using {method_label} method:\n\
         Number of points: {}\n\
         Total distance: {:.2} km\n\
         \n\
         Route order:\n",
        solution.len(),
        solution.distance()
    );
    for (i, c) in solution.route().iter().enumerate() {
        s.push_str(&format!("  {:2}. ({:8.4}, {:9.4})\n", i + 1, c.lat(), c.lon()));
    }
    if let Some(first) = solution.route().first() {
        s.push_str(&format!(
            "  Return to start: ({:8.4}, {:9.4})\n",
            first.lat(),
            first.lon()
        ));
    }
    s
}
