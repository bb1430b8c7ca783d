use uom::si::{
    f64::{HeatFluxDensity, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use super::GridError;

/// Irradiance levels × ambient temperatures for an offdesign sweep.
///
/// Both axes are non-empty, finite and strictly ascending. Every irradiance
/// is positive so efficiency is defined at each point, and every ambient
/// temperature is above absolute zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGrid {
    irradiance: Vec<HeatFluxDensity>,
    ambient_temperatures: Vec<ThermodynamicTemperature>,
}

impl SweepGrid {
    /// Creates a grid from explicit axis values.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if an axis is empty, non-finite, or not
    /// strictly ascending, if an irradiance is not positive, or if an
    /// ambient temperature is at or below 0 K.
    pub fn new(
        irradiance: Vec<HeatFluxDensity>,
        ambient_temperatures: Vec<ThermodynamicTemperature>,
    ) -> Result<Self, GridError> {
        let e: Vec<f64> = irradiance
            .iter()
            .map(|e| e.get::<watt_per_square_meter>())
            .collect();
        check_axis("irradiance", &e)?;
        if e[0] <= 0.0 {
            return Err(GridError::NonPositiveIrradiance);
        }

        let t: Vec<f64> = ambient_temperatures
            .iter()
            .map(|t| t.get::<kelvin>())
            .collect();
        check_axis("ambient temperature", &t)?;
        if t[0] <= 0.0 {
            return Err(GridError::BelowAbsoluteZero);
        }

        Ok(Self {
            irradiance,
            ambient_temperatures,
        })
    }

    /// Creates a grid with evenly spaced axes, endpoints included.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] under the same conditions as [`SweepGrid::new`].
    pub fn linspace(
        irradiance: (HeatFluxDensity, HeatFluxDensity),
        irradiance_points: usize,
        ambient_temperature: (ThermodynamicTemperature, ThermodynamicTemperature),
        ambient_points: usize,
    ) -> Result<Self, GridError> {
        let e = linspace(
            irradiance.0.get::<watt_per_square_meter>(),
            irradiance.1.get::<watt_per_square_meter>(),
            irradiance_points,
        );
        let t = linspace(
            ambient_temperature.0.get::<kelvin>(),
            ambient_temperature.1.get::<kelvin>(),
            ambient_points,
        );

        Self::new(
            e.into_iter()
                .map(HeatFluxDensity::new::<watt_per_square_meter>)
                .collect(),
            t.into_iter()
                .map(ThermodynamicTemperature::new::<kelvin>)
                .collect(),
        )
    }

    /// The 10 × 10 grid of 100 to 1000 W/m² and −10 to 30 °C.
    #[must_use]
    pub fn reference() -> Self {
        let e: Vec<HeatFluxDensity> = (0..10_u32)
            .map(|i| HeatFluxDensity::new::<watt_per_square_meter>(100.0 + 100.0 * f64::from(i)))
            .collect();
        let t: Vec<ThermodynamicTemperature> = (0..10_u32)
            .map(|i| {
                ThermodynamicTemperature::new::<degree_celsius>(-10.0 + 40.0 * f64::from(i) / 9.0)
            })
            .collect();

        Self {
            irradiance: e,
            ambient_temperatures: t,
        }
    }

    /// Irradiance levels, one per table row.
    #[must_use]
    pub fn irradiance(&self) -> &[HeatFluxDensity] {
        &self.irradiance
    }

    /// Ambient temperatures, one per table column.
    #[must_use]
    pub fn ambient_temperatures(&self) -> &[ThermodynamicTemperature] {
        &self.ambient_temperatures
    }

    /// Number of rows and columns.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.irradiance.len(), self.ambient_temperatures.len())
    }
}

fn check_axis(axis: &'static str, values: &[f64]) -> Result<(), GridError> {
    if values.is_empty() {
        return Err(GridError::Empty { axis });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(GridError::NotFinite { axis, index });
    }
    if let Some(index) = values.windows(2).position(|pair| pair[1] <= pair[0]) {
        return Err(GridError::NotAscending {
            axis,
            index: index + 1,
        });
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            (0..points).map(|i| start + step * i as f64).collect()
        }
    }
}
