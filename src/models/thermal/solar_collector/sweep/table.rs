//! Efficiency results of a sweep.

use std::fmt;

use serde::Serialize;
use uom::si::{
    f64::{HeatFluxDensity, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    thermodynamic_temperature::degree_celsius,
};

/// Row and column of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridIndex {
    /// Irradiance index.
    pub row: usize,

    /// Ambient temperature index.
    pub col: usize,
}

/// Efficiency per irradiance (row) and ambient temperature (column).
///
/// `None` marks a missing value: a point where the collector loses more heat
/// than it absorbs. Missing points are never stored as zero or as a
/// negative number; their indices are listed in [`EfficiencyTable::clipped`].
#[derive(Debug, Clone, PartialEq)]
pub struct EfficiencyTable {
    irradiance: Vec<HeatFluxDensity>,
    ambient_temperatures: Vec<ThermodynamicTemperature>,
    rows: Vec<Vec<Option<f64>>>,
    clipped: Vec<GridIndex>,
}

impl EfficiencyTable {
    pub(in crate::models::thermal::solar_collector) fn new(
        irradiance: Vec<HeatFluxDensity>,
        ambient_temperatures: Vec<ThermodynamicTemperature>,
    ) -> Self {
        Self {
            rows: Vec::with_capacity(irradiance.len()),
            irradiance,
            ambient_temperatures,
            clipped: Vec::new(),
        }
    }

    pub(in crate::models::thermal::solar_collector) fn push_row(
        &mut self,
        row: Vec<Option<f64>>,
        clipped: impl IntoIterator<Item = usize>,
    ) {
        let index = self.rows.len();
        self.clipped
            .extend(clipped.into_iter().map(|col| GridIndex { row: index, col }));
        self.rows.push(row);
    }

    /// Row keys.
    #[must_use]
    pub fn irradiance(&self) -> &[HeatFluxDensity] {
        &self.irradiance
    }

    /// Column keys.
    #[must_use]
    pub fn ambient_temperatures(&self) -> &[ThermodynamicTemperature] {
        &self.ambient_temperatures
    }

    /// Number of rows and columns.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.ambient_temperatures.len())
    }

    /// Efficiency at a cell, or `None` if the cell is missing or out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row)?.get(col).copied().flatten()
    }

    /// One row of efficiencies, ordered like [`EfficiencyTable::ambient_temperatures`].
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Option<f64>]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Rows keyed by irradiance, in grid order.
    pub fn rows(&self) -> impl Iterator<Item = (HeatFluxDensity, &[Option<f64>])> {
        self.irradiance
            .iter()
            .copied()
            .zip(self.rows.iter().map(Vec::as_slice))
    }

    /// Cells replaced by missing values.
    #[must_use]
    pub fn clipped(&self) -> &[GridIndex] {
        &self.clipped
    }

    /// Serializes the table as JSON, keyed by irradiance then ambient temperature.
    ///
    /// Each row holds its irradiance and one cell per ambient temperature;
    /// every cell carries its own ambient temperature, so the output reads
    /// without the column order. Missing values are written as `null`.
    ///
    /// ```json
    /// {
    ///   "rows": [
    ///     {
    ///       "irradiance_w_per_m2": 100.0,
    ///       "cells": [{ "ambient_temperature_c": -10.0, "efficiency": null }]
    ///     }
    ///   ],
    ///   "clipped": [{ "row": 0, "col": 0 }]
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let record = TableRecord {
            rows: self
                .rows()
                .map(|(irradiance, row)| RowRecord {
                    irradiance_w_per_m2: irradiance.get::<watt_per_square_meter>(),
                    cells: self
                        .ambient_temperatures
                        .iter()
                        .zip(row)
                        .map(|(t, &efficiency)| CellRecord {
                            ambient_temperature_c: t.get::<degree_celsius>(),
                            efficiency,
                        })
                        .collect(),
                })
                .collect(),
            clipped: &self.clipped,
        };
        serde_json::to_string_pretty(&record)
    }
}

#[derive(Serialize)]
struct TableRecord<'a> {
    rows: Vec<RowRecord>,
    clipped: &'a [GridIndex],
}

#[derive(Serialize)]
struct RowRecord {
    irradiance_w_per_m2: f64,
    cells: Vec<CellRecord>,
}

#[derive(Serialize)]
struct CellRecord {
    ambient_temperature_c: f64,
    efficiency: Option<f64>,
}

impl fmt::Display for EfficiencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>10}", "E \\ Tamb")?;
        for t in &self.ambient_temperatures {
            write!(f, " {:>8.2}", t.get::<degree_celsius>())?;
        }
        writeln!(f)?;

        for (irradiance, row) in self.rows() {
            write!(f, "{:>10.1}", irradiance.get::<watt_per_square_meter>())?;
            for cell in row {
                match cell {
                    Some(eta) => write!(f, " {eta:>8.4}")?,
                    None => write!(f, " {:>8}", "NaN")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> EfficiencyTable {
        let mut table = EfficiencyTable::new(
            vec![
                HeatFluxDensity::new::<watt_per_square_meter>(100.0),
                HeatFluxDensity::new::<watt_per_square_meter>(200.0),
            ],
            vec![
                ThermodynamicTemperature::new::<degree_celsius>(-10.0),
                ThermodynamicTemperature::new::<degree_celsius>(30.0),
            ],
        );
        table.push_row(vec![None, Some(0.4)], [0]);
        table.push_row(vec![Some(0.6), Some(0.7)], []);
        table
    }

    #[test]
    fn lookup_and_clipping() {
        let table = table();

        assert_eq!(table.shape(), (2, 2));
        assert_eq!(table.get(0, 0), None);
        assert_eq!(table.get(0, 1), Some(0.4));
        assert_eq!(table.get(5, 0), None);
        assert_eq!(table.clipped(), &[GridIndex { row: 0, col: 0 }]);
        assert_eq!(table.row(1), Some(&[Some(0.6), Some(0.7)][..]));
    }

    #[test]
    fn json_writes_missing_values_as_null() {
        let json = table().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let cold = &value["rows"][0]["cells"][0];
        assert!(cold["efficiency"].is_null());
        assert_eq!(cold["ambient_temperature_c"].as_f64().map(f64::round), Some(-10.0));

        let row = &value["rows"][1];
        assert_eq!(row["irradiance_w_per_m2"], 200.0);
        assert_eq!(row["cells"][1]["efficiency"], 0.7);
        assert_eq!(value["clipped"][0]["col"], 0);
    }

    #[test]
    fn display_marks_missing_values() {
        let text = table().to_string();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().nth(1).unwrap().contains("NaN"));
        assert!(!text.lines().nth(2).unwrap().contains("NaN"));
    }
}
