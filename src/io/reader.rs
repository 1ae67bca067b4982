//! Coordinate reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::models::Coordinate;
use crate::Result;

/// Reads coordinates from a text file.
///
/// See [`parse_coordinates`] for the accepted format.
pub fn read_coordinates(path: &Path) -> Result<Vec<Coordinate>> {
    let file = File::open(path)?;
    let coords = parse_coordinates(BufReader::new(file))?;
    log::info!("read {} coordinates from {}", coords.len(), path.display());
    Ok(coords)
}

/// Parses one coordinate per line.
///
/// Accepts `lat,lon` or whitespace-separated `lat lon`. Blank lines and
/// lines starting with `#` are ignored. Lines with the wrong number of
/// fields, unparsable numbers, or out-of-range values are skipped with a
/// warning. Only read failures are errors.
///
/// # Examples
///
/// ```
/// use u_georoute::io::parse_coordinates;
///
/// let input = "# depots\n37.5,127.0\n35.1 129.0\n\nnot,a,point\n95.0,0.0\n";
/// let coords = parse_coordinates(input.as_bytes()).unwrap();
/// assert_eq!(coords.len(), 2);
/// assert_eq!(coords[1].lat(), 35.1);
/// ```
pub fn parse_coordinates<R: BufRead>(reader: R) -> Result<Vec<Coordinate>> {
    let mut coords = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_line(trimmed) {
            Ok(c) => coords.push(c),
            Err(reason) => log::warn!("line {line_num}: {reason}, skipping: {trimmed}"),
        }
    }

    Ok(coords)
}

fn parse_line(line: &str) -> std::result::Result<Coordinate, String> {
    let parts: Vec<&str> = if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    };
    let [lat, lon] = parts.as_slice() else {
        return Err(format!("expected 2 fields, found {}", parts.len()));
    };

    let lat: f64 = lat
        .parse()
        .map_err(|_| format!("invalid number '{lat}'"))?;
    let lon: f64 = lon
        .parse()
        .map_err(|_| format!("invalid number '{lon}'"))?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("invalid latitude {lat}"));
    }
    Coordinate::new(lat, lon).ok_or_else(|| format!("invalid longitude {lon}"))
}
