//! Temperature ranges and row formatting.

use anyhow::{Result, ensure};
use specrend_color::{Renderer, Rendering};
use std::io::Write;
use tracing::trace;

/// Most rows a single table may hold.
pub const MAX_ROWS: usize = 1_000_000;

/// Inclusive temperature range with a fixed step, in Kelvin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    from: f64,
    step: f64,
    len: usize,
}

impl Range {
    pub fn new(from: f64, to: f64, step: f64) -> Result<Self> {
        ensure!(from.is_finite() && from > 0.0, "--from must be above 0 K, got {from}");
        ensure!(to.is_finite() && to > 0.0, "--to must be above 0 K, got {to}");
        ensure!(step.is_finite() && step > 0.0, "--step must be positive, got {step}");
        ensure!(from <= to, "--from ({from}) is greater than --to ({to})");

        // Tolerate rounding in (to - from) / step for fractional steps.
        let steps = ((to - from) / step + 1e-9).floor();
        ensure!(
            steps.is_finite() && steps < MAX_ROWS as f64,
            "{from} K to {to} K by {step} K exceeds {MAX_ROWS} rows"
        );

        Ok(Self {
            from,
            step,
            len: steps as usize + 1,
        })
    }

    /// Number of temperatures, counting both ends when `to` lands on a step.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.from + i as f64 * self.step)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Table,
    Csv,
}

pub fn header(format: Format) -> &'static str {
    match format {
        Format::Table => "  Temp        x      y      z        R     G     B",
        Format::Csv => "temperature,x,y,z,r,g,b,approximated",
    }
}

pub fn row(format: Format, temperature: f64, out: &Rendering) -> String {
    let (xyz, rgb) = (out.xyz, out.rgb);
    match format {
        Format::Table => format!(
            "{:>6.0} K   {:.4} {:.4} {:.4}   {:.3} {:.3} {:.3}{}",
            temperature,
            xyz.x,
            xyz.y,
            xyz.z,
            rgb.x,
            rgb.y,
            rgb.z,
            if out.approximated { " (Approximation)" } else { "" }
        ),
        Format::Csv => format!(
            "{},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{}",
            temperature, xyz.x, xyz.y, xyz.z, rgb.x, rgb.y, rgb.z, out.approximated
        ),
    }
}

/// Writes the header and one row per temperature. Returns the row count.
pub fn write(out: &mut impl Write, renderer: &Renderer, range: Range, format: Format) -> Result<usize> {
    writeln!(out, "{}", header(format))?;
    let mut rows = 0;
    for t in range.iter() {
        let rendering = renderer.render_blackbody(t);
        trace!(t, "row");
        writeln!(out, "{}", row(format, t, &rendering))?;
        rows += 1;
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use specrend_color::primaries::SMPTE;

    #[test]
    fn test_default_range() {
        let r = Range::new(1000.0, 10000.0, 500.0).unwrap();
        assert_eq!(r.len(), 19);
        let temps: Vec<f64> = r.iter().collect();
        assert_eq!(temps.first(), Some(&1000.0));
        assert_eq!(temps.last(), Some(&10000.0));
    }

    #[test]
    fn test_range_partial_last_step() {
        let r = Range::new(1000.0, 1250.0, 100.0).unwrap();
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![1000.0, 1100.0, 1200.0]);
        assert_eq!(Range::new(500.0, 500.0, 1.0).unwrap().len(), 1);
    }

    #[test]
    fn test_range_rejects_bad_input() {
        assert!(Range::new(0.0, 1000.0, 100.0).is_err());
        assert!(Range::new(-10.0, 1000.0, 100.0).is_err());
        assert!(Range::new(1000.0, 2000.0, 0.0).is_err());
        assert!(Range::new(1000.0, 2000.0, -5.0).is_err());
        assert!(Range::new(2000.0, 1000.0, 100.0).is_err());
        assert!(Range::new(f64::NAN, 1000.0, 100.0).is_err());
    }

    #[test]
    fn test_range_rejects_too_many_rows() {
        let err = Range::new(1.0, 1e308, 1e-300).unwrap_err();
        assert!(err.to_string().contains("rows"), "{err}");
        assert!(Range::new(1000.0, 2000.0, 1e-6).is_err());

        let widest = Range::new(1.0, MAX_ROWS as f64, 1.0).unwrap();
        assert_eq!(widest.len(), MAX_ROWS);
    }

    #[test]
    fn test_table_row() {
        let renderer = Renderer::new(SMPTE);
        let line = row(Format::Table, 6500.0, &renderer.render_blackbody(6500.0));
        assert_eq!(line, "  6500 K   0.3135 0.3237 0.3628   1.000 0.937 0.988");

        let cold = row(Format::Table, 1000.0, &renderer.render_blackbody(1000.0));
        assert!(cold.ends_with("1.000 0.007 0.000 (Approximation)"), "{cold}");
    }

    #[test]
    fn test_csv_output() {
        let renderer = Renderer::new(SMPTE);
        let range = Range::new(1000.0, 2000.0, 500.0).unwrap();
        let mut buf = Vec::new();
        let rows = write(&mut buf, &renderer, range, Format::Csv).unwrap();
        assert_eq!(rows, 3);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], header(Format::Csv));
        assert!(lines[1].starts_with("1000,"));
        assert!(lines[1].ends_with(",true"));
        assert!(lines[3].starts_with("2000,"));
        assert!(lines[3].ends_with(",false"));
        assert_eq!(lines[3].split(',').count(), 8);
    }
}
