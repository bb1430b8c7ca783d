//! Solar thermal collector.
//!
//! The collector heats a liquid flowing from a source to a sink. The
//! computational core closes its energy balance under one of three
//! [`Parametrization`]s. Around it:
//!
//! - [`Network`] holds the source-collector-sink attributes, selects the
//!   parametrization before every solve, and runs design and offdesign solves.
//! - [`DesignSnapshot`] persists a design solution for offdesign reference.
//! - [`sweep()`] drives offdesign solves over an irradiance × ambient
//!   temperature grid and collects an [`EfficiencyTable`].
//! - [`Surface`] turns the table into a plottable mesh.
//! - [`OffdesignCollector`] is a [`twine_core::Model`] for evaluating single
//!   offdesign operating points without shared state.
//!
//! # Example
//!
//! ```
//! use twine_collector::models::thermal::solar_collector::{Attr, Network};
//! use twine_collector::support::thermo::{fluid::Water, model::Incompressible};
//! use twine_collector::support::units::quadratic_loss_coefficient;
//! use uom::si::{
//!     area::square_meter, f64::*, heat_transfer::watt_per_square_meter_kelvin,
//!     mass_rate::kilogram_per_second, power::watt, pressure::bar,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let mut network = Network::new(Water, Incompressible::<Water>::new().unwrap());
//!
//! let collector = network.collector_mut();
//! collector.pr = Attr::Fixed(0.99);
//! collector.q_dot = Attr::Fixed(Power::new::<watt>(8000.0));
//! collector.area = Attr::Fixed(Area::new::<square_meter>(10.0));
//! collector.lkf_lin = Attr::Fixed(HeatTransfer::new::<watt_per_square_meter_kelvin>(1.0));
//! collector.lkf_quad = Attr::Fixed(quadratic_loss_coefficient(0.005));
//! collector.t_amb = Attr::Fixed(ThermodynamicTemperature::new::<degree_celsius>(10.0));
//!
//! let inlet = network.inlet_mut();
//! inlet.pressure = Attr::Fixed(Pressure::new::<bar>(5.0));
//! inlet.temperature = Attr::Fixed(ThermodynamicTemperature::new::<degree_celsius>(20.0));
//!
//! network.outlet_mut().temperature =
//!     Attr::Fixed(ThermodynamicTemperature::new::<degree_celsius>(120.0));
//!
//! let results = network.solve_design().unwrap();
//! assert!((results.m_dot.get::<kilogram_per_second>() - 0.01912).abs() < 1e-4);
//! ```

mod core;
mod model;
mod network;
mod surface;
mod sweep;

pub use self::core::{
    Absorber, Anchor, AnchorKind, Attr, CollectorThermoModel, FluidSide, FluidUnknown, Given,
    IterationConfig, IterationError, Known, LossCoefficients, Parametrization,
    ParametrizationError, Presence, RadiationBalance, Results, SolveError, efficiency, solve,
};
pub use model::{OffdesignCollector, OperatingPoint};
pub use network::{
    Collector, Connection, DesignSnapshot, Network, NetworkError, SnapshotError, SolveMode,
};
pub use surface::Surface;
pub use sweep::{EfficiencyTable, GridError, GridIndex, SweepError, SweepGrid, sweep};
