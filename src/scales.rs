//! Value and category scales derived from the current rows and viewport.

use crate::data_types::RowSet;
use crate::layout::{Margins, PlotArea, Viewport};

/// Tick density used when rounding the value domain outward.
const NICE_COUNT: usize = 10;

/// Inter-band padding fraction of the band step.
pub const BAND_PADDING: f64 = 0.45;

/// Linear scale whose domain is rounded outward to nice bounds.
#[derive(Clone, Debug)]
pub struct ValueScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl ValueScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut d_min = domain.0;
        let mut d_max = domain.1;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        Self {
            domain: nice_domain(d_min, d_max, NICE_COUNT),
            range,
        }
    }

    pub fn map(&self, value: f64) -> f32 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;
        let t = (value - d_min) / (d_max - d_min);
        let res = (r_min as f64 + t * (r_max as f64 - r_min as f64)) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;
        let span = (r_max - r_min) as f64;
        if span == 0.0 {
            return d_min;
        }
        d_min + ((pixel - r_min) as f64 / span) * (d_max - d_min)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    /// Round tick values across the domain. `count` is a density hint,
    /// not an exact tick total.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        ticks(min, max, count)
    }
}

/// Maps ordered category labels onto evenly spaced, padded intervals.
#[derive(Clone, Debug)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f32, f32),
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f32, f32), padding: f64) -> Self {
        let n = domain.len() as f64;
        let (r0, r1) = (range.0 as f64, range.1 as f64);
        let step = (r1 - r0) / f64::max(1.0, n - padding + padding * 2.0);
        let bandwidth = step * (1.0 - padding);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        Self {
            domain,
            range,
            step,
            bandwidth,
            start,
        }
    }

    /// Left edge of the band for `label`, or None for an unknown label.
    pub fn map(&self, label: &str) -> Option<f32> {
        self.domain
            .iter()
            .position(|l| l == label)
            .map(|i| (self.start + self.step * i as f64) as f32)
    }

    /// Center of the band for `label`.
    pub fn center(&self, label: &str) -> Option<f32> {
        self.map(label).map(|x| x + self.bandwidth() / 2.0)
    }

    pub fn bandwidth(&self) -> f32 {
        self.bandwidth.max(0.0) as f32
    }

    pub fn step(&self) -> f32 {
        self.step as f32
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }
}

/// Scales for one render pass.
#[derive(Clone, Debug)]
pub struct Scales {
    pub value: ValueScale,
    pub category: BandScale,
}

impl Scales {
    /// Pure derivation; callable with an empty row set, which yields a
    /// degenerate but non-crashing value domain.
    pub fn compute(rows: &RowSet, viewport: Viewport, margins: Margins) -> Self {
        let plot = PlotArea::new(viewport, margins);
        let domain = rows.value_extent().unwrap_or((0.0, 1.0));
        let value = ValueScale::new(domain, (plot.height, 0.0));
        let category = BandScale::new(rows.labels(), (margins.left, plot.width), BAND_PADDING);
        Self { value, category }
    }
}

/// Tick increment between round values: a positive step, or the
/// negative inverse of the step when the step is fractional, so that
/// fractional ticks stay exact under division.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if step <= 0.0 || !step.is_finite() {
        return f64::NAN;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Rounds the bounds outward to multiples of the tick increment.
fn nice_domain(min: f64, max: f64, count: usize) -> (f64, f64) {
    let (mut start, mut stop) = (min, max);
    let mut prestep = 0.0_f64;
    for _ in 0..2 {
        let step = tick_increment(start, stop, count);
        if !step.is_finite() || step == 0.0 || step == prestep {
            break;
        }
        if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else {
            let inc = -step;
            start = (start * inc).floor() / inc;
            stop = (stop * inc).ceil() / inc;
        }
        prestep = step;
    }
    (start, stop)
}

fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if start == stop {
        return vec![start];
    }
    let step = tick_increment(start, stop, count);
    if !step.is_finite() || step == 0.0 {
        return vec![start, stop];
    }
    if step > 0.0 {
        let i0 = (start / step).ceil() as i64;
        let i1 = (stop / step).floor() as i64;
        (i0..=i1).map(|i| i as f64 * step).collect()
    } else {
        let inc = -step;
        let i0 = (start * inc).ceil() as i64;
        let i1 = (stop * inc).floor() as i64;
        (i0..=i1).map(|i| i as f64 / inc).collect()
    }
}
