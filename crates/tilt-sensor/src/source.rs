use crate::permission::{PermissionGate, PermissionState, StaticGate};
use anyhow::{anyhow, bail, Context, Result};
use std::io::BufRead;
use tilt_core::OrientationSample;

/// Producer of raw orientation samples.
pub trait OrientationSource: Send {
    /// Next sample, or `None` once the source is exhausted.
    fn next_sample(&mut self) -> Result<Option<OrientationSample>>;

    /// Permission interface, for sources that have one.
    fn permission(&mut self) -> Option<&mut dyn PermissionGate> {
        None
    }
}

impl<S: OrientationSource + ?Sized> OrientationSource for Box<S> {
    fn next_sample(&mut self) -> Result<Option<OrientationSample>> {
        (**self).next_sample()
    }

    fn permission(&mut self) -> Option<&mut dyn PermissionGate> {
        (**self).permission()
    }
}

/// Simulated device turning through alpha at a fixed tilt.
pub struct SweepSource {
    beta: f64,
    gamma: f64,
    step_deg: f64,
    samples: u32,
    emitted: u32,
    gate: Option<StaticGate>,
}

impl SweepSource {
    pub fn new(beta: f64, gamma: f64, step_deg: f64, samples: u32) -> Self {
        Self {
            beta,
            gamma,
            step_deg,
            samples,
            emitted: 0,
            gate: None,
        }
    }

    /// Require a permission grant before sampling; the grant is answered with `state`.
    pub fn with_permission(mut self, state: PermissionState) -> Self {
        self.gate = Some(StaticGate(state));
        self
    }
}

impl OrientationSource for SweepSource {
    fn next_sample(&mut self) -> Result<Option<OrientationSample>> {
        if self.emitted >= self.samples {
            return Ok(None);
        }
        let alpha = (self.emitted as f64 * self.step_deg).rem_euclid(360.0);
        self.emitted += 1;
        Ok(Some(OrientationSample::from_degrees(
            alpha, self.beta, self.gamma,
        )))
    }

    fn permission(&mut self) -> Option<&mut dyn PermissionGate> {
        self.gate.as_mut().map(|gate| gate as &mut dyn PermissionGate)
    }
}

/// Samples as text lines: `alpha beta gamma`, separated by whitespace or commas.
///
/// `-`, `null` or `nan` mark an axis the device did not report. Blank lines and
/// lines starting with `#` are skipped.
pub struct LineSource<R> {
    reader: R,
    line_number: usize,
    buf: String,
}

impl<R: BufRead + Send> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buf: String::new(),
        }
    }
}

impl<R: BufRead + Send> OrientationSource for LineSource<R> {
    fn next_sample(&mut self) -> Result<Option<OrientationSample>> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = self.buf.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let sample =
                parse_line(line).with_context(|| format!("line {}", self.line_number))?;
            return Ok(Some(sample));
        }
    }
}

/// Parse `alpha beta gamma`.
pub fn parse_line(line: &str) -> Result<OrientationSample> {
    let fields: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|field| !field.is_empty())
        .collect();
    let [alpha, beta, gamma] = fields.as_slice() else {
        bail!("expected 3 values, found {}", fields.len());
    };
    Ok(OrientationSample::new(
        parse_axis(alpha)?,
        parse_axis(beta)?,
        parse_axis(gamma)?,
    ))
}

fn parse_axis(field: &str) -> Result<Option<f64>> {
    if field == "-" || field.eq_ignore_ascii_case("null") || field.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    field
        .parse::<f64>()
        .map(Some)
        .map_err(|_| anyhow!("invalid angle {field:?}"))
}
