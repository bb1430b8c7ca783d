//! Offdesign efficiency sweep over irradiance and ambient temperature.

mod error;
mod grid;
mod table;

pub use error::{GridError, SweepError};
pub use grid::SweepGrid;
pub use table::{EfficiencyTable, GridIndex};

use tracing::{debug, info};
use uom::si::{
    heat_flux_density::watt_per_square_meter, thermodynamic_temperature::degree_celsius,
};

use super::{
    core::{Attr, CollectorThermoModel},
    network::{DesignSnapshot, Network},
};

/// Solves `network` in offdesign mode at every point of `grid`.
///
/// The outlet temperature and enthalpy are freed once, then the collector
/// irradiance and ambient temperature are set in place for each point, with
/// ambient temperature varying fastest. The network keeps the attributes of
/// the last point attempted.
///
/// Efficiencies below zero (or undefined) are stored as missing values and
/// listed in [`EfficiencyTable::clipped`].
///
/// # Errors
///
/// Returns a [`SweepError`] for the first point whose solve fails; the
/// remaining points are not attempted.
pub fn sweep<Fluid, Thermo>(
    network: &mut Network<Fluid, Thermo>,
    snapshot: &DesignSnapshot,
    grid: &SweepGrid,
) -> Result<EfficiencyTable, SweepError>
where
    Fluid: Clone,
    Thermo: CollectorThermoModel<Fluid>,
{
    let outlet = network.outlet_mut();
    outlet.temperature = Attr::Unset;
    outlet.enthalpy = Attr::Unset;

    let mut table = EfficiencyTable::new(
        grid.irradiance().to_vec(),
        grid.ambient_temperatures().to_vec(),
    );

    for (row, &irradiance) in grid.irradiance().iter().enumerate() {
        network.collector_mut().irradiance = Attr::Fixed(irradiance);

        let mut efficiencies = Vec::with_capacity(grid.ambient_temperatures().len());
        let mut clipped = Vec::new();

        for (col, &ambient_temperature) in grid.ambient_temperatures().iter().enumerate() {
            network.collector_mut().t_amb = Attr::Fixed(ambient_temperature);

            let results = network
                .solve_offdesign(snapshot)
                .map_err(|source| SweepError::Point {
                    irradiance,
                    ambient_temperature,
                    source,
                })?;

            match results.efficiency() {
                Some(eta) if eta >= 0.0 => efficiencies.push(Some(eta)),
                eta => {
                    debug!(
                        row,
                        col,
                        irradiance_w_per_m2 = irradiance.get::<watt_per_square_meter>(),
                        ambient_temperature_c = ambient_temperature.get::<degree_celsius>(),
                        efficiency = ?eta,
                        "efficiency clipped to a missing value"
                    );
                    efficiencies.push(None);
                    clipped.push(col);
                }
            }
        }

        table.push_row(efficiencies, clipped);
    }

    let (rows, cols) = table.shape();
    info!(
        rows,
        cols,
        clipped = table.clipped().len(),
        "offdesign sweep complete"
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        area::square_meter,
        f64::{
            Area, HeatFluxDensity, HeatTransfer, MassRate, Power, Pressure, ThermodynamicTemperature,
        },
        heat_transfer::watt_per_square_meter_kelvin,
        mass_rate::kilogram_per_second,
        power::watt,
        pressure::bar,
    };

    use crate::{
        models::thermal::solar_collector::network::NetworkError,
        support::{
            thermo::{fluid::Water, model::Incompressible},
            units::quadratic_loss_coefficient,
        },
    };

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn irradiance(value: f64) -> HeatFluxDensity {
        HeatFluxDensity::new::<watt_per_square_meter>(value)
    }

    /// Flow-driven design with the given inlet temperature.
    fn designed(inlet_c: f64) -> (Network<Water, Incompressible<Water>>, DesignSnapshot) {
        let mut network = Network::new(Water, Incompressible::<Water>::new().unwrap());

        let collector = network.collector_mut();
        collector.pr = Attr::Fixed(0.99);
        collector.area = Attr::Fixed(Area::new::<square_meter>(10.0));
        collector.lkf_lin = Attr::Fixed(HeatTransfer::new::<watt_per_square_meter_kelvin>(1.0));
        collector.lkf_quad = Attr::Fixed(quadratic_loss_coefficient(0.005));
        collector.t_amb = Attr::Fixed(celsius(10.0));

        let inlet = network.inlet_mut();
        inlet.pressure = Attr::Fixed(Pressure::new::<bar>(5.0));
        inlet.temperature = Attr::Fixed(celsius(inlet_c));
        inlet.m_dot = Attr::Fixed(MassRate::new::<kilogram_per_second>(0.1));

        network.outlet_mut().temperature = Attr::Fixed(celsius(inlet_c + 10.0));

        network.solve_design().unwrap();
        let snapshot = network.design_snapshot().unwrap();
        (network, snapshot)
    }

    #[test]
    fn rows_follow_irradiance_and_columns_follow_ambient() {
        let (mut network, snapshot) = designed(20.0);
        let grid = SweepGrid::new(
            vec![irradiance(300.0), irradiance(900.0)],
            vec![celsius(-10.0), celsius(10.0), celsius(30.0)],
        )
        .unwrap();

        let table = sweep(&mut network, &snapshot, &grid).unwrap();

        assert_eq!(table.shape(), (2, 3));
        assert_eq!(table.irradiance(), grid.irradiance());
        assert_eq!(table.ambient_temperatures(), grid.ambient_temperatures());
        assert!(table.clipped().is_empty());

        // Network holds the last point.
        assert_eq!(network.collector().irradiance, Attr::Fixed(irradiance(900.0)));
        assert_eq!(network.collector().t_amb, Attr::Fixed(celsius(30.0)));
        assert!(network.results().is_some());
    }

    #[test]
    fn net_losses_become_missing_values() {
        let (mut network, snapshot) = designed(120.0);
        let grid = SweepGrid::new(vec![irradiance(100.0)], vec![celsius(30.0)]).unwrap();

        let table = sweep(&mut network, &snapshot, &grid).unwrap();

        assert_eq!(table.get(0, 0), None);
        assert_eq!(table.row(0), Some(&[None][..]));
        assert_eq!(table.clipped(), &[GridIndex { row: 0, col: 0 }]);
    }

    #[test]
    fn failing_point_aborts_with_coordinates() {
        let (mut network, snapshot) = designed(20.0);
        // Heat flow, irradiance and mass flow together overdetermine the collector.
        network.collector_mut().q_dot = Attr::Fixed(Power::new::<watt>(500.0));

        let grid = SweepGrid::new(vec![irradiance(500.0)], vec![celsius(0.0)]).unwrap();
        let err = sweep(&mut network, &snapshot, &grid).unwrap_err();

        let SweepError::Point {
            irradiance: e,
            ambient_temperature,
            source,
        } = err;
        assert_eq!(e, irradiance(500.0));
        assert_eq!(ambient_temperature, celsius(0.0));
        assert!(matches!(source, NetworkError::Parametrization { .. }));
        assert!(network.results().is_none());
    }
}
