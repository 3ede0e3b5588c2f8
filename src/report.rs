//! Printed results: one line per metric, `<label> : <value>`.

use std::fmt;

use crate::harness::Samples;

/// Width the metric names are padded to so the values line up.
const NAME_WIDTH: usize = 44;

/// Result of one benchmark case.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Container and element, e.g. `vector<vec4_wide<8>>`.
    pub label: String,
    /// Fastest kernel pass, in seconds.
    pub seconds: f64,
    /// Bytes of backing storage.
    pub footprint: usize,
}

impl Measurement {
    pub fn new(label: impl Into<String>, samples: &Samples, footprint: usize) -> Self {
        Self {
            label: label.into(),
            seconds: samples.min().as_secs_f64(),
            footprint,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = format!("time spend ({})", self.label);
        let space = format!("total space used ({})", self.label);
        writeln!(f, "{:<width$} : {:e}", time, self.seconds, width = NAME_WIDTH)?;
        write!(f, "{:<width$} : {}", space, self.footprint, width = NAME_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_measurement_uses_min() {
        let samples: Samples = [5, 2, 9]
            .into_iter()
            .map(Duration::from_micros)
            .collect();
        let m = Measurement::new("array<vec3>", &samples, 12288);
        assert_eq!(m.seconds, 2e-6);
        assert_eq!(m.footprint, 12288);
    }

    #[test]
    fn test_display_lines() {
        let m = Measurement {
            label: "vector<vec4>".to_string(),
            seconds: 0.25,
            footprint: 16_777_216,
        };
        let text = m.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let (name, value) = lines[0].split_once(" : ").unwrap();
        assert_eq!(name.trim_end(), "time spend (vector<vec4>)");
        assert_eq!(value.parse::<f64>().unwrap(), 0.25);

        let (name, value) = lines[1].split_once(" : ").unwrap();
        assert_eq!(name.trim_end(), "total space used (vector<vec4>)");
        assert_eq!(value, "16777216");
    }
}
