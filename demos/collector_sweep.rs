//! Solar collector design and offdesign efficiency sweep.
//!
//! Solves the reference collector in its three design parametrizations,
//! saves the last design, sweeps irradiance × ambient temperature against it,
//! and prints the efficiency table.
//!
//! With `plot`, the efficiency surface is drawn as a family of 2D lines
//! instead of a 3D wireframe, since `twine_observers` plots only in 2D:
//! ambient temperature is the x axis, efficiency the y axis, and each
//! irradiance level becomes one legend entry. Missing values leave gaps.
//!
//! # Usage
//!
//! ```text
//! cargo run --example collector_sweep
//! cargo run --example collector_sweep -- plot
//! ```

use std::error::Error;

use twine_collector::{
    models::thermal::solar_collector::{
        Attr, DesignSnapshot, EfficiencyTable, Network, Surface, SweepGrid, sweep,
    },
    support::{
        thermo::{fluid::Water, model::Incompressible},
        units::quadratic_loss_coefficient,
    },
};
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

fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let mut network = Network::new(Water, Incompressible::<Water>::new()?);

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

    // Heat flow and outlet temperature fixed.
    network.outlet_mut().temperature = Attr::Fixed(celsius(120.0));
    println!("{}", network.solve_design()?);

    // Irradiance fixed instead of the outlet temperature.
    network.collector_mut().irradiance =
        Attr::Fixed(HeatFluxDensity::new::<watt_per_square_meter>(900.0));
    network.outlet_mut().temperature = Attr::Unset;
    println!("{}", network.solve_design()?);

    // Outlet temperature and mass flow fixed.
    let collector = network.collector_mut();
    collector.q_dot = Attr::Unset;
    collector.irradiance = Attr::Unset;
    network.outlet_mut().temperature = Attr::Fixed(celsius(100.0));
    network.inlet_mut().m_dot = Attr::Fixed(MassRate::new::<kilogram_per_second>(0.1));
    println!("{}", network.solve_design()?);

    let path = std::env::temp_dir().join("collector_design.json");
    network.design_snapshot()?.save(&path)?;
    println!("design saved to {}", path.display());

    let snapshot = DesignSnapshot::load(&path)?;
    let table = sweep(&mut network, &snapshot, &SweepGrid::reference())?;
    println!("efficiency η (E in W/m² by Tamb in °C)\n{table}");

    if std::env::args().nth(1).as_deref() == Some("plot") {
        plot(&table)?;
    }

    Ok(())
}

/// One efficiency line per irradiance level over ambient temperature.
#[cfg(not(target_arch = "wasm32"))]
fn plot(table: &EfficiencyTable) -> Result<(), Box<dyn Error>> {
    use twine_observers::{PlotObserver, ShowConfig};

    const LEVELS: usize = 10;

    let surface = Surface::from_table(table);
    if surface.z.len() != LEVELS {
        return Err(format!("expected {LEVELS} irradiance levels, got {}", surface.z.len()).into());
    }

    let names: [String; LEVELS] =
        std::array::from_fn(|i| format!("E = {:.0} W/m²", surface.y[i][0]));
    let mut obs = PlotObserver::<LEVELS>::new(names.each_ref().map(String::as_str));

    for (j, &t_amb) in surface.x[0].iter().enumerate() {
        obs.record(t_amb, std::array::from_fn(|i| surface.z[i][j]));
    }

    obs.show(
        ShowConfig::new()
            .title(format!("{} vs {}", surface.z_label, surface.x_label))
            .legend(),
    )?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn plot(_table: &EfficiencyTable) -> Result<(), Box<dyn Error>> {
    Err("plotting is not available on this target".into())
}
