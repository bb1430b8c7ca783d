use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for arithmetic on absolute temperatures.
///
/// [`uom`] deliberately restricts arithmetic on [`ThermodynamicTemperature`]
/// (see [#380](https://github.com/iliekturtles/uom/issues/380)), so the two
/// operations the collector balance needs live here.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;

    /// Returns the arithmetic mean of `self` and `other`.
    fn midpoint(self, other: Self) -> Self;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }

    fn midpoint(self, other: Self) -> Self {
        ThermodynamicTemperature::new::<abs_kelvin>(
            0.5 * (self.get::<abs_kelvin>() + other.get::<abs_kelvin>()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::{degree_celsius as delta_celsius, kelvin as delta_kelvin},
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn collector_to_ambient_difference() {
        let t_mean = ThermodynamicTemperature::new::<degree_celsius>(70.0);
        let t_amb = ThermodynamicTemperature::new::<degree_celsius>(10.0);

        assert_relative_eq!(t_mean.minus(t_amb).get::<delta_kelvin>(), 60.0, epsilon = 1e-9);

        // Ambient above the collector gives a negative difference.
        assert_relative_eq!(t_amb.minus(t_mean).get::<delta_celsius>(), -60.0, epsilon = 1e-9);
    }

    #[test]
    fn midpoint_is_symmetric() {
        let a = ThermodynamicTemperature::new::<abs_kelvin>(293.15);
        let b = ThermodynamicTemperature::new::<abs_kelvin>(393.15);

        assert_relative_eq!(a.midpoint(b).get::<abs_kelvin>(), 343.15);
        assert_relative_eq!(b.midpoint(a).get::<abs_kelvin>(), 343.15);
    }
}
