//! Batch grid scanning and CSV export.
//!
//! A scan fixes one temperature axis and sweeps the other temperature and
//! humidity over every integer point of their domains, running one
//! independent simulation per cell.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use itertools::iproduct;
use serde::Serialize;
use tracing::info;

use crate::thermostat::{ClimateReading, Thermostat};

/// Which input stays fixed while the other two are swept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepAxis {
    /// Sweep insideTemp 0..=40 x humidity 0..=100 at a fixed outside value.
    FixedOutside { temp_outside: f64 },
    /// Sweep outsideTemp -10..=40 x humidity 0..=100 at a fixed inside value.
    FixedInside { temp_inside: f64 },
}

/// One CSV row; field order and renames pin the exported header to
/// `tempInside,tempOutside,humidity,acPower,heaterPower`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridRow {
    #[serde(rename = "tempInside")]
    pub temp_inside: f64,
    #[serde(rename = "tempOutside")]
    pub temp_outside: f64,
    #[serde(rename = "humidity")]
    pub humidity: f64,
    #[serde(rename = "acPower")]
    pub ac_power: f64,
    #[serde(rename = "heaterPower")]
    pub heater_power: f64,
}

/// A batch caller over independent `run_once` invocations.
#[derive(Debug)]
pub struct GridScan<'a> {
    thermostat: &'a Thermostat,
    axis: SweepAxis,
}

impl<'a> GridScan<'a> {
    pub fn new(thermostat: &'a Thermostat, axis: SweepAxis) -> Self {
        Self { thermostat, axis }
    }

    pub fn axis(&self) -> SweepAxis {
        self.axis
    }

    /// Evaluates every cell of the sweep, in row-major order.
    pub fn rows(&self) -> Vec<GridRow> {
        match self.axis {
            SweepAxis::FixedOutside { temp_outside } => iproduct!(0..=40, 0..=100)
                .map(|(temp_inside, humidity)| {
                    self.cell(temp_inside as f64, temp_outside, humidity as f64)
                })
                .collect(),
            SweepAxis::FixedInside { temp_inside } => iproduct!(-10..=40, 0..=100)
                .map(|(temp_outside, humidity)| {
                    self.cell(temp_inside, temp_outside as f64, humidity as f64)
                })
                .collect(),
        }
    }

    fn cell(&self, temp_inside: f64, temp_outside: f64, humidity: f64) -> GridRow {
        let levels = self.thermostat.run_once(ClimateReading {
            temp_inside,
            temp_outside,
            humidity,
        });
        GridRow {
            temp_inside,
            temp_outside,
            humidity,
            ac_power: levels.ac_power,
            heater_power: levels.heater_power,
        }
    }

    /// Writes the scan as UTF-8 CSV, header first.
    pub fn write_csv<W: Write>(&self, writer: W) -> csv::Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let rows = self.rows();
        for row in &rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(rows.len())
    }

    /// Writes the scan to a file on disk.
    pub fn export(&self, path: &Path) -> anyhow::Result<usize> {
        let file = File::create(path)
            .with_context(|| format!("creating grid output file {}", path.display()))?;
        let rows = self
            .write_csv(file)
            .with_context(|| format!("writing grid CSV to {}", path.display()))?;
        info!(rows, path = %path.display(), "grid export complete");
        Ok(rows)
    }
}
