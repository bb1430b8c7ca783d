//! Source-collector-sink network.
//!
//! A [`Network`] owns the attribute state of the two connections and the
//! collector. Each solve classifies the attributes into a
//! [`Parametrization`], validates them, and stores the resolved values.
//! Changing any attribute through a `*_mut` accessor discards the stored
//! solution, so results never describe attributes that have since changed.

mod boundary;
mod connection;
mod error;
mod snapshot;

pub(super) use boundary::Scope;
pub use connection::{Collector, Connection};
pub use error::{NetworkError, SnapshotError, SolveMode};
pub use snapshot::DesignSnapshot;

use std::fmt::Debug;

use tracing::{debug, warn};
use uom::si::{
    mass_rate::kilogram_per_second, power::watt, thermodynamic_temperature::degree_celsius,
};

use super::core::{
    self, Attr, CollectorThermoModel, IterationConfig, Parametrization, ParametrizationError,
    Results,
};

/// A single collector between a fluid source and a sink.
#[derive(Debug, Clone)]
pub struct Network<Fluid, Thermo> {
    fluid: Fluid,
    thermo: Thermo,
    inlet: Connection,
    outlet: Connection,
    collector: Collector,
    config: IterationConfig,
    solution: Option<Solution<Fluid>>,
}

#[derive(Debug, Clone)]
struct Solution<Fluid> {
    results: Results<Fluid>,
    snapshot: Option<DesignSnapshot>,
}

impl<Fluid, Thermo> Network<Fluid, Thermo>
where
    Fluid: Clone,
    Thermo: CollectorThermoModel<Fluid>,
{
    /// Creates a network with every attribute untouched.
    pub fn new(fluid: Fluid, thermo: Thermo) -> Self {
        Self {
            fluid,
            thermo,
            inlet: Connection::default(),
            outlet: Connection::default(),
            collector: Collector::default(),
            config: IterationConfig::default(),
            solution: None,
        }
    }

    /// Replaces the outlet temperature iteration settings.
    #[must_use]
    pub fn with_config(mut self, config: IterationConfig) -> Self {
        self.config = config;
        self.solution = None;
        self
    }

    pub fn fluid(&self) -> &Fluid {
        &self.fluid
    }

    pub fn thermo(&self) -> &Thermo {
        &self.thermo
    }

    pub fn config(&self) -> &IterationConfig {
        &self.config
    }

    /// Connection from the source into the collector.
    pub fn inlet(&self) -> &Connection {
        &self.inlet
    }

    /// Connection from the collector to the sink.
    pub fn outlet(&self) -> &Connection {
        &self.outlet
    }

    pub fn collector(&self) -> &Collector {
        &self.collector
    }

    /// Mutable inlet attributes. Discards the stored solution.
    pub fn inlet_mut(&mut self) -> &mut Connection {
        self.solution = None;
        &mut self.inlet
    }

    /// Mutable outlet attributes. Discards the stored solution.
    pub fn outlet_mut(&mut self) -> &mut Connection {
        self.solution = None;
        &mut self.outlet
    }

    /// Mutable collector attributes. Discards the stored solution.
    pub fn collector_mut(&mut self) -> &mut Collector {
        self.solution = None;
        &mut self.collector
    }

    /// Classifies the current attributes for a design solve.
    ///
    /// # Errors
    ///
    /// Returns a [`ParametrizationError`] if the attributes are ill-posed.
    pub fn parametrization(&self) -> Result<Parametrization, ParametrizationError> {
        Parametrization::select(boundary::presence(
            &self.inlet,
            &self.outlet,
            &self.collector,
        ))
    }

    /// Results of the last successful solve, if no attribute changed since.
    pub fn results(&self) -> Option<&Results<Fluid>> {
        self.solution.as_ref().map(|solution| &solution.results)
    }

    /// Solves the network in design mode with the current attributes.
    ///
    /// On success the results can be recorded with [`Network::design_snapshot`].
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] if the attributes are ill-posed or invalid,
    /// or if the collector balance can't be solved. No solution is stored
    /// on failure.
    pub fn solve_design(&mut self) -> Result<&Results<Fluid>, NetworkError> {
        self.solution = None;

        let results = self.run(
            SolveMode::Design,
            &self.inlet,
            &self.outlet,
            &self.collector,
        )?;
        let snapshot = DesignSnapshot::new(&results, &self.collector);

        let solution = self.solution.insert(Solution {
            results,
            snapshot: Some(snapshot),
        });
        Ok(&solution.results)
    }

    /// Solves the network in offdesign mode against a design reference.
    ///
    /// The area, loss coefficients and pressure ratio come from `snapshot`.
    /// Inlet pressure, inlet temperature, mass flow and ambient temperature
    /// are inherited from it when they were never set on this network;
    /// explicitly unset values stay free.
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] if the attributes are ill-posed or invalid,
    /// or if the collector balance can't be solved.
    pub fn solve_offdesign(
        &mut self,
        snapshot: &DesignSnapshot,
    ) -> Result<&Results<Fluid>, NetworkError> {
        self.solution = None;

        let (inlet, outlet, collector) = offdesign_attributes(
            snapshot,
            self.inlet,
            self.outlet,
            self.collector,
        );
        let results = self.run(SolveMode::Offdesign, &inlet, &outlet, &collector)?;

        let solution = self.solution.insert(Solution {
            results,
            snapshot: None,
        });
        Ok(&solution.results)
    }

    /// Records the last design solution for later offdesign solves.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::NotDesigned`] unless the last solve was a
    /// successful design solve and no attribute has changed since.
    pub fn design_snapshot(&self) -> Result<DesignSnapshot, NetworkError> {
        self.solution
            .as_ref()
            .and_then(|solution| solution.snapshot.clone())
            .ok_or(NetworkError::NotDesigned)
    }

    fn run(
        &self,
        mode: SolveMode,
        inlet: &Connection,
        outlet: &Connection,
        collector: &Collector,
    ) -> Result<Results<Fluid>, NetworkError> {
        let problem =
            boundary::resolve(mode, &self.fluid, &self.thermo, inlet, outlet, collector)?;
        let parametrization = problem.given.parametrization();

        debug!(%mode, %parametrization, "solving collector");

        let results = core::solve(&problem.known, &problem.given, &self.config, &self.thermo)
            .map_err(|source| NetworkError::Solve {
                mode,
                parametrization,
                source,
            })?;

        debug!(
            %mode,
            q_dot_w = results.q_dot.get::<watt>(),
            outlet_temperature_c = results.outlet.temperature.get::<degree_celsius>(),
            m_dot_kg_per_s = results.m_dot.get::<kilogram_per_second>(),
            efficiency = ?results.efficiency(),
            "collector solved"
        );

        Ok(results)
    }
}

/// Applies the design reference to a copy of the network attributes.
fn offdesign_attributes(
    snapshot: &DesignSnapshot,
    mut inlet: Connection,
    outlet: Connection,
    mut collector: Collector,
) -> (Connection, Connection, Collector) {
    inlet.pressure = inlet.pressure.or_inherit(Some(snapshot.inlet_pressure()));
    if !inlet.enthalpy.is_fixed() {
        inlet.temperature = inlet
            .temperature
            .or_inherit(Some(snapshot.inlet_temperature()));
    }
    if inlet.m_dot == Attr::NotSet && outlet.m_dot == Attr::NotSet {
        inlet.m_dot = Attr::Fixed(snapshot.m_dot());
    }
    collector.t_amb = collector.t_amb.or_inherit(snapshot.ambient_temperature());

    collector.pr = structural("pressure ratio", collector.pr, Some(snapshot.pressure_ratio()));
    collector.area = structural("absorber area", collector.area, snapshot.area());
    collector.lkf_lin = structural("linear loss coefficient", collector.lkf_lin, snapshot.lkf_lin());
    collector.lkf_quad = structural(
        "quadratic loss coefficient",
        collector.lkf_quad,
        snapshot.lkf_quad(),
    );

    (inlet, outlet, collector)
}

/// Takes a structural parameter from the design, if the design recorded it.
fn structural<T>(attribute: &'static str, current: Attr<T>, design: Option<T>) -> Attr<T>
where
    T: Copy + PartialEq + Debug,
{
    match (current, design) {
        (Attr::Fixed(value), Some(design)) if value != design => {
            warn!(
                attribute,
                ?value,
                ?design,
                "offdesign solve uses the design value instead of the fixed one"
            );
            Attr::Fixed(design)
        }
        (_, Some(design)) => Attr::Fixed(design),
        (current, None) => current,
    }
}
