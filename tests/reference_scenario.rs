use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use approx::assert_relative_eq;
use twine_collector::{
    models::thermal::solar_collector::{
        AnchorKind, Attr, DesignSnapshot, FluidUnknown, Network, OffdesignCollector,
        OperatingPoint, Parametrization, SnapshotError,
    },
    support::{
        thermo::{fluid::Water, model::Incompressible},
        units::quadratic_loss_coefficient,
    },
};
use twine_core::Model;
use uom::si::{
    area::square_meter,
    f64::{
        Area, HeatFluxDensity, HeatTransfer, MassRate, Power, Pressure, ThermodynamicTemperature,
    },
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    mass_rate::kilogram_per_second,
    power::watt,
    pressure::bar,
    thermodynamic_temperature::degree_celsius,
};

const CP_WATER: f64 = 4184.0;

fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}_{nanos}"))
}

/// Heat-driven design: 8 kW raising 20 °C water to 120 °C.
fn reference_network() -> Network<Water, Incompressible<Water>> {
    let mut network = Network::new(Water, Incompressible::<Water>::new().unwrap());

    let collector = network.collector_mut();
    collector.pr = Attr::Fixed(0.99);
    collector.q_dot = Attr::Fixed(Power::new::<watt>(8000.0));
    collector.lkf_lin = Attr::Fixed(HeatTransfer::new::<watt_per_square_meter_kelvin>(1.0));
    collector.lkf_quad = Attr::Fixed(quadratic_loss_coefficient(0.005));
    collector.area = Attr::Fixed(Area::new::<square_meter>(10.0));
    collector.t_amb = Attr::Fixed(celsius(10.0));

    let inlet = network.inlet_mut();
    inlet.pressure = Attr::Fixed(Pressure::new::<bar>(5.0));
    inlet.temperature = Attr::Fixed(celsius(20.0));

    network.outlet_mut().temperature = Attr::Fixed(celsius(120.0));
    network
}

#[test]
fn three_design_parametrizations() {
    let mut network = reference_network();

    // Heat-driven.
    let results = network.solve_design().unwrap();
    assert_eq!(
        results.parametrization,
        Parametrization::HeatDriven {
            unknown: FluidUnknown::MassFlow
        }
    );
    assert_relative_eq!(
        results.m_dot.get::<kilogram_per_second>(),
        8000.0 / (CP_WATER * 100.0),
        max_relative = 1e-9
    );
    assert!(results.irradiance.is_none());

    // Absorption-driven with the heat flow kept: 900 W/m² on 10 m² must lose
    // 1 kW, so the mean is 73.2 K above ambient.
    network.collector_mut().irradiance =
        Attr::Fixed(HeatFluxDensity::new::<watt_per_square_meter>(900.0));
    network.outlet_mut().temperature = Attr::Unset;

    let results = network.solve_design().unwrap();
    assert_eq!(
        results.parametrization,
        Parametrization::AbsorptionDriven {
            anchor: AnchorKind::HeatFlow
        }
    );
    let delta_t = (3.0_f64.sqrt() - 1.0) / 0.01;
    let t_out = 2.0 * (10.0 + delta_t) - 20.0;
    assert_relative_eq!(
        results.outlet.temperature.get::<degree_celsius>(),
        t_out,
        epsilon = 1e-4
    );
    assert_relative_eq!(
        results.m_dot.get::<kilogram_per_second>(),
        8000.0 / (CP_WATER * (t_out - 20.0)),
        max_relative = 1e-6
    );
    assert_relative_eq!(results.efficiency().unwrap(), 8000.0 / 9000.0, max_relative = 1e-6);

    // Flow-driven: heat flow and irradiance freed, outlet and mass flow fixed.
    let collector = network.collector_mut();
    collector.q_dot = Attr::Unset;
    collector.irradiance = Attr::Unset;
    network.outlet_mut().temperature = Attr::Fixed(celsius(100.0));
    network.inlet_mut().m_dot = Attr::Fixed(MassRate::new::<kilogram_per_second>(0.1));

    let results = network.solve_design().unwrap();
    assert_eq!(results.parametrization, Parametrization::FlowDriven);
    assert_relative_eq!(
        results.q_dot.get::<watt>(),
        0.1 * CP_WATER * 80.0,
        max_relative = 1e-9
    );
    assert!(results.radiation.is_none());
    assert!(results.efficiency().is_none());
}

#[test]
fn heat_flow_survives_the_switch_to_absorption() {
    let mut network = reference_network();
    network.solve_design().unwrap();
    let snapshot = network.design_snapshot().unwrap();

    // Irradiance that yields exactly the design heat flow at the design outlet.
    let delta_t = (20.0 + 120.0) / 2.0 - 10.0;
    let loss = 10.0 * (delta_t + 0.005 * delta_t * delta_t);
    let irradiance = (8000.0 + loss) / 10.0;

    let mut offdesign = Network::new(Water, Incompressible::<Water>::new().unwrap());
    offdesign.collector_mut().irradiance =
        Attr::Fixed(HeatFluxDensity::new::<watt_per_square_meter>(irradiance));
    offdesign.outlet_mut().temperature = Attr::Unset;

    let results = offdesign.solve_offdesign(&snapshot).unwrap();

    assert_relative_eq!(results.q_dot.get::<watt>(), 8000.0, max_relative = 1e-6);
    assert_relative_eq!(
        results.outlet.temperature.get::<degree_celsius>(),
        120.0,
        epsilon = 1e-4
    );
}

#[test]
fn snapshot_round_trip_through_disk() {
    let mut network = reference_network();
    network.solve_design().unwrap();
    let snapshot = network.design_snapshot().unwrap();

    let dir = unique_temp_dir("twine_collector_snapshot");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("design.json");

    snapshot.save(&path).unwrap();
    let loaded = DesignSnapshot::load(&path).unwrap();
    assert_eq!(loaded, snapshot);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"area_m2\""));

    fs::remove_dir_all(&dir).unwrap();

    assert!(matches!(
        DesignSnapshot::load(dir.join("design.json")),
        Err(SnapshotError::Io(_))
    ));
}

#[test]
fn model_adapter_agrees_with_the_network() {
    let mut network = reference_network();
    network.solve_design().unwrap();
    let snapshot = network.design_snapshot().unwrap();

    let model =
        OffdesignCollector::new(&snapshot, Water, Incompressible::<Water>::new().unwrap()).unwrap();
    let point = OperatingPoint {
        irradiance: HeatFluxDensity::new::<watt_per_square_meter>(600.0),
        ambient_temperature: celsius(0.0),
    };
    let from_model = model.call(&point).unwrap();

    network.outlet_mut().temperature = Attr::Unset;
    let collector = network.collector_mut();
    collector.q_dot = Attr::Unset;
    collector.irradiance = Attr::Fixed(point.irradiance);
    collector.t_amb = Attr::Fixed(point.ambient_temperature);
    let from_network = network.solve_offdesign(&snapshot).unwrap();

    assert_relative_eq!(
        from_model.q_dot.get::<watt>(),
        from_network.q_dot.get::<watt>(),
        max_relative = 1e-9
    );
    assert_relative_eq!(
        from_model.efficiency().unwrap(),
        from_network.efficiency().unwrap(),
        max_relative = 1e-9
    );
}
