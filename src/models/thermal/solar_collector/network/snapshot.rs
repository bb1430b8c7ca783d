//! Persisted design solution.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use uom::si::{
    area::square_meter,
    f64::{
        Area, HeatFluxDensity, HeatTransfer, MassRate, Power, Pressure, ThermodynamicTemperature,
    },
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    mass_rate::kilogram_per_second,
    power::watt,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::{
    models::thermal::solar_collector::core::{Parametrization, Results},
    support::units::{QuadraticLossCoefficient, quadratic_loss_coefficient},
};

use super::{Collector, SnapshotError};

/// A design solution kept as the reference for offdesign solves.
///
/// Offdesign solves take the structural parameters (area, loss coefficients,
/// pressure ratio) from here and inherit any boundary value the network
/// leaves untouched. Values are stored in SI units; the unit is part of each
/// field name in the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSnapshot {
    parametrization: Parametrization,
    inlet_pressure_pa: f64,
    inlet_temperature_k: f64,
    outlet_pressure_pa: f64,
    outlet_temperature_k: f64,
    mass_flow_kg_per_s: f64,
    heat_flow_w: f64,
    pressure_ratio: f64,
    #[serde(default)]
    area_m2: Option<f64>,
    #[serde(default)]
    lkf_lin_w_per_m2_k: Option<f64>,
    #[serde(default)]
    lkf_quad_w_per_m2_k2: Option<f64>,
    #[serde(default)]
    ambient_temperature_k: Option<f64>,
    #[serde(default)]
    irradiance_w_per_m2: Option<f64>,
}

impl DesignSnapshot {
    /// Records a design solution and the collector attributes it was solved with.
    pub(super) fn new<Fluid>(results: &Results<Fluid>, collector: &Collector) -> Self {
        Self {
            parametrization: results.parametrization,
            inlet_pressure_pa: results.inlet_pressure.get::<pascal>(),
            inlet_temperature_k: results.inlet.temperature.get::<kelvin>(),
            outlet_pressure_pa: results.outlet_pressure.get::<pascal>(),
            outlet_temperature_k: results.outlet.temperature.get::<kelvin>(),
            mass_flow_kg_per_s: results.m_dot.get::<kilogram_per_second>(),
            heat_flow_w: results.q_dot.get::<watt>(),
            pressure_ratio: results.pressure_ratio,
            area_m2: collector.area.fixed().map(|a| a.get::<square_meter>()),
            lkf_lin_w_per_m2_k: collector
                .lkf_lin
                .fixed()
                .map(|k| k.get::<watt_per_square_meter_kelvin>()),
            lkf_quad_w_per_m2_k2: collector.lkf_quad.fixed().map(|k| k.value),
            ambient_temperature_k: collector.t_amb.fixed().map(|t| t.get::<kelvin>()),
            irradiance_w_per_m2: results
                .irradiance
                .map(|e| e.get::<watt_per_square_meter>()),
        }
    }

    /// Writes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if serialization or the write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reads a snapshot written by [`DesignSnapshot::save`].
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the file can't be read or parsed, or if a
    /// stored value is not physically meaningful.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let snapshot: Self = serde_json::from_str(&content)?;

        snapshot
            .validate()
            .map_err(|field| SnapshotError::Invalid {
                field,
                path: path.to_path_buf(),
            })?;

        Ok(snapshot)
    }

    fn validate(&self) -> Result<(), &'static str> {
        let positive = [
            ("inlet_pressure_pa", self.inlet_pressure_pa),
            ("inlet_temperature_k", self.inlet_temperature_k),
            ("outlet_pressure_pa", self.outlet_pressure_pa),
            ("outlet_temperature_k", self.outlet_temperature_k),
            ("mass_flow_kg_per_s", self.mass_flow_kg_per_s),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(field);
            }
        }

        if !self.heat_flow_w.is_finite() {
            return Err("heat_flow_w");
        }
        if !(self.pressure_ratio > 0.0 && self.pressure_ratio <= 1.0) {
            return Err("pressure_ratio");
        }

        let optional = [
            ("area_m2", self.area_m2),
            ("lkf_lin_w_per_m2_k", self.lkf_lin_w_per_m2_k),
            ("lkf_quad_w_per_m2_k2", self.lkf_quad_w_per_m2_k2),
            ("ambient_temperature_k", self.ambient_temperature_k),
            ("irradiance_w_per_m2", self.irradiance_w_per_m2),
        ];
        for (field, value) in optional {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(field);
            }
        }

        Ok(())
    }

    /// Parametrization the design was solved under.
    #[must_use]
    pub fn parametrization(&self) -> Parametrization {
        self.parametrization
    }

    #[must_use]
    pub fn inlet_pressure(&self) -> Pressure {
        Pressure::new::<pascal>(self.inlet_pressure_pa)
    }

    #[must_use]
    pub fn inlet_temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(self.inlet_temperature_k)
    }

    #[must_use]
    pub fn outlet_pressure(&self) -> Pressure {
        Pressure::new::<pascal>(self.outlet_pressure_pa)
    }

    #[must_use]
    pub fn outlet_temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(self.outlet_temperature_k)
    }

    #[must_use]
    pub fn m_dot(&self) -> MassRate {
        MassRate::new::<kilogram_per_second>(self.mass_flow_kg_per_s)
    }

    #[must_use]
    pub fn q_dot(&self) -> Power {
        Power::new::<watt>(self.heat_flow_w)
    }

    #[must_use]
    pub fn pressure_ratio(&self) -> f64 {
        self.pressure_ratio
    }

    #[must_use]
    pub fn area(&self) -> Option<Area> {
        self.area_m2.map(Area::new::<square_meter>)
    }

    #[must_use]
    pub fn lkf_lin(&self) -> Option<HeatTransfer> {
        self.lkf_lin_w_per_m2_k
            .map(HeatTransfer::new::<watt_per_square_meter_kelvin>)
    }

    #[must_use]
    pub fn lkf_quad(&self) -> Option<QuadraticLossCoefficient> {
        self.lkf_quad_w_per_m2_k2.map(quadratic_loss_coefficient)
    }

    #[must_use]
    pub fn ambient_temperature(&self) -> Option<ThermodynamicTemperature> {
        self.ambient_temperature_k
            .map(ThermodynamicTemperature::new::<kelvin>)
    }

    /// Irradiance of the design point, if it was absorption-driven.
    #[must_use]
    pub fn irradiance(&self) -> Option<HeatFluxDensity> {
        self.irradiance_w_per_m2
            .map(HeatFluxDensity::new::<watt_per_square_meter>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::{SystemTime, UNIX_EPOCH};

    fn snapshot() -> DesignSnapshot {
        DesignSnapshot {
            parametrization: Parametrization::FlowDriven,
            inlet_pressure_pa: 5e5,
            inlet_temperature_k: 293.15,
            outlet_pressure_pa: 4.95e5,
            outlet_temperature_k: 373.15,
            mass_flow_kg_per_s: 0.1,
            heat_flow_w: 33_472.0,
            pressure_ratio: 0.99,
            area_m2: Some(10.0),
            lkf_lin_w_per_m2_k: Some(1.0),
            lkf_quad_w_per_m2_k2: Some(0.005),
            ambient_temperature_k: Some(283.15),
            irradiance_w_per_m2: None,
        }
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("twine_collector_{name}_{nanos}.json"))
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("snapshot");
        let original = snapshot();

        original.save(&path).unwrap();
        let loaded = DesignSnapshot::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, original);
        assert_eq!(loaded.lkf_quad().map(|k| k.value), Some(0.005));
        assert!(loaded.irradiance().is_none());
    }

    #[test]
    fn rejects_non_physical_values() {
        let path = temp_path("bad_snapshot");
        let mut bad = snapshot();
        bad.pressure_ratio = 1.5;

        bad.save(&path).unwrap();
        let result = DesignSnapshot::load(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            result,
            Err(SnapshotError::Invalid {
                field: "pressure_ratio",
                ..
            })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = DesignSnapshot::load(temp_path("missing"));
        assert!(matches!(result, Err(SnapshotError::Io(_))));
    }
}
