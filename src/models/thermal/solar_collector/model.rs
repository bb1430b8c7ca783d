//! [`twine_core::Model`] adapter for offdesign operating points.

use twine_core::Model;
use uom::si::f64::{Area, HeatFluxDensity, MassRate, ThermodynamicTemperature};

use crate::support::constraint::{
    AboveAbsoluteZero, ConstraintError, Finite, NonNegative, StrictlyPositive, UnitIntervalLowerOpen,
};

use super::{
    core::{
        self, Absorber, Anchor, AnchorKind, CollectorThermoModel, Given, IterationConfig, Known,
        LossCoefficients, Parametrization, Results, SolveError,
    },
    network::{DesignSnapshot, NetworkError, Scope, SolveMode},
};

/// Environmental conditions of one offdesign point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub irradiance: HeatFluxDensity,
    pub ambient_temperature: ThermodynamicTemperature,
}

/// A designed collector evaluated at independent operating points.
///
/// The inlet state, mass flow, absorber and pressure ratio are fixed by the
/// design snapshot; each call solves the absorption-driven balance for one
/// [`OperatingPoint`]. Calls share no mutable state, so points can be
/// evaluated in any order.
#[derive(Debug, Clone)]
pub struct OffdesignCollector<Fluid, Thermo> {
    known: Known<Fluid>,
    m_dot: MassRate,
    area: Area,
    loss: LossCoefficients,
    config: IterationConfig,
    thermo: Thermo,
}

impl<Fluid, Thermo> OffdesignCollector<Fluid, Thermo>
where
    Fluid: Clone,
    Thermo: CollectorThermoModel<Fluid>,
{
    /// Builds the collector from a design snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] if the snapshot lacks the absorber area or
    /// a loss coefficient, holds an invalid value, or if the inlet state
    /// can't be built.
    pub fn new(
        snapshot: &DesignSnapshot,
        fluid: Fluid,
        thermo: Thermo,
    ) -> Result<Self, NetworkError> {
        let scope = Scope {
            mode: SolveMode::Offdesign,
            parametrization: Parametrization::AbsorptionDriven {
                anchor: AnchorKind::MassFlow,
            },
        };

        let area = StrictlyPositive::new(
            snapshot
                .area()
                .ok_or_else(|| scope.missing("absorber area"))?,
        )
        .map_err(scope.invalid("absorber area"))?
        .into_inner();
        let linear = NonNegative::new(
            snapshot
                .lkf_lin()
                .ok_or_else(|| scope.missing("linear loss coefficient"))?,
        )
        .map_err(scope.invalid("linear loss coefficient"))?
        .into_inner();
        let quadratic = NonNegative::new(
            snapshot
                .lkf_quad()
                .ok_or_else(|| scope.missing("quadratic loss coefficient"))?,
        )
        .map_err(scope.invalid("quadratic loss coefficient"))?
        .into_inner();
        let m_dot = StrictlyPositive::new(snapshot.m_dot())
            .map_err(scope.invalid("mass flow"))?
            .into_inner();

        let inlet = thermo
            .state_from((fluid, snapshot.inlet_temperature()))
            .map_err(|err| NetworkError::ThermoModelFailed {
                context: "inlet state from temperature",
                source: Box::new(err),
            })?;

        let known = Known {
            inlet,
            inlet_pressure: StrictlyPositive::new(snapshot.inlet_pressure())
                .map_err(scope.invalid("inlet pressure"))?
                .into_inner(),
            pressure_ratio: UnitIntervalLowerOpen::new(snapshot.pressure_ratio())
                .map_err(scope.invalid("pressure ratio"))?,
        };

        Ok(Self {
            known,
            m_dot,
            area,
            loss: LossCoefficients { linear, quadratic },
            config: IterationConfig::default(),
            thermo,
        })
    }

    /// Replaces the outlet temperature iteration settings.
    #[must_use]
    pub fn with_config(mut self, config: IterationConfig) -> Self {
        self.config = config;
        self
    }

    /// Mass flow held fixed at every point.
    pub fn m_dot(&self) -> MassRate {
        self.m_dot
    }
}

impl<Fluid, Thermo> Model for OffdesignCollector<Fluid, Thermo>
where
    Fluid: Clone,
    Thermo: CollectorThermoModel<Fluid>,
{
    type Input = OperatingPoint;
    type Output = Results<Fluid>;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let irradiance = NonNegative::new(input.irradiance)
            .and_then(|e| Finite::new(e.into_inner()))
            .map_err(invalid_point("irradiance"))?
            .into_inner();
        let ambient_temperature = AboveAbsoluteZero::new(input.ambient_temperature)
            .map_err(invalid_point("ambient temperature"))?
            .into_inner();

        let given = Given::AbsorptionDriven {
            irradiance,
            absorber: Absorber {
                area: self.area,
                loss: self.loss,
                ambient_temperature,
            },
            anchor: Anchor::MassFlow(self.m_dot),
        };

        core::solve(&self.known, &given, &self.config, &self.thermo)
    }
}

fn invalid_point(attribute: &'static str) -> impl FnOnce(ConstraintError) -> SolveError {
    move |source| SolveError::Constraint { attribute, source }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{HeatTransfer, Pressure},
        heat_flux_density::watt_per_square_meter,
        heat_transfer::watt_per_square_meter_kelvin,
        mass_rate::kilogram_per_second,
        power::watt,
        pressure::bar,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::{
        models::thermal::solar_collector::{core::Attr, network::Network},
        support::{
            thermo::{fluid::Water, model::Incompressible},
            units::quadratic_loss_coefficient,
        },
    };

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn point(e: f64, t_amb: f64) -> OperatingPoint {
        OperatingPoint {
            irradiance: HeatFluxDensity::new::<watt_per_square_meter>(e),
            ambient_temperature: celsius(t_amb),
        }
    }

    fn designed() -> Network<Water, Incompressible<Water>> {
        let mut network = Network::new(Water, Incompressible::<Water>::new().unwrap());

        let collector = network.collector_mut();
        collector.pr = Attr::Fixed(0.99);
        collector.area = Attr::Fixed(Area::new::<square_meter>(10.0));
        collector.lkf_lin = Attr::Fixed(HeatTransfer::new::<watt_per_square_meter_kelvin>(1.0));
        collector.lkf_quad = Attr::Fixed(quadratic_loss_coefficient(0.005));
        collector.t_amb = Attr::Fixed(celsius(10.0));

        let inlet = network.inlet_mut();
        inlet.pressure = Attr::Fixed(Pressure::new::<bar>(5.0));
        inlet.temperature = Attr::Fixed(celsius(20.0));
        inlet.m_dot = Attr::Fixed(MassRate::new::<kilogram_per_second>(0.1));

        network.outlet_mut().temperature = Attr::Fixed(celsius(100.0));
        network.solve_design().unwrap();
        network
    }

    #[test]
    fn matches_network_offdesign_solve() {
        let mut network = designed();
        let snapshot = network.design_snapshot().unwrap();

        let model = OffdesignCollector::new(
            &snapshot,
            Water,
            Incompressible::<Water>::new().unwrap(),
        )
        .unwrap();
        let from_model = model.call(&point(700.0, 5.0)).unwrap();

        network.outlet_mut().temperature = Attr::Unset;
        let collector = network.collector_mut();
        collector.irradiance = Attr::Fixed(HeatFluxDensity::new::<watt_per_square_meter>(700.0));
        collector.t_amb = Attr::Fixed(celsius(5.0));
        let from_network = network.solve_offdesign(&snapshot).unwrap();

        assert_eq!(from_model.parametrization, from_network.parametrization);
        assert!(matches!(
            from_model.parametrization,
            Parametrization::AbsorptionDriven { .. }
        ));
        assert_relative_eq!(
            from_model.q_dot.get::<watt>(),
            from_network.q_dot.get::<watt>(),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            from_model.outlet.temperature.get::<degree_celsius>(),
            from_network.outlet.temperature.get::<degree_celsius>(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn calls_are_independent() {
        let snapshot = designed().design_snapshot().unwrap();
        let model = OffdesignCollector::new(
            &snapshot,
            Water,
            Incompressible::<Water>::new().unwrap(),
        )
        .unwrap();

        let first = model.call(&point(400.0, 0.0)).unwrap();
        model.call(&point(1000.0, 30.0)).unwrap();
        let again = model.call(&point(400.0, 0.0)).unwrap();

        assert_eq!(first.q_dot, again.q_dot);
        assert_relative_eq!(
            first.m_dot.get::<kilogram_per_second>(),
            0.1,
            epsilon = 1e-12
        );
    }

    #[test]
    fn requires_a_loss_curve() {
        let mut network = designed();
        network.collector_mut().lkf_quad = Attr::NotSet;
        network.solve_design().unwrap();
        let snapshot = network.design_snapshot().unwrap();

        let err = OffdesignCollector::new(
            &snapshot,
            Water,
            Incompressible::<Water>::new().unwrap(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            NetworkError::MissingBoundary {
                what: "quadratic loss coefficient",
                ..
            }
        ));
    }

    #[test]
    fn rejects_unphysical_operating_points() {
        let snapshot = designed().design_snapshot().unwrap();
        let model = OffdesignCollector::new(
            &snapshot,
            Water,
            Incompressible::<Water>::new().unwrap(),
        )
        .unwrap();

        for t_amb in [f64::NAN, -500.0] {
            assert!(matches!(
                model.call(&point(500.0, t_amb)),
                Err(SolveError::Constraint {
                    attribute: "ambient temperature",
                    ..
                })
            ));
        }
        assert!(matches!(
            model.call(&point(f64::INFINITY, 10.0)),
            Err(SolveError::Constraint {
                attribute: "irradiance",
                ..
            })
        ));
    }
}
