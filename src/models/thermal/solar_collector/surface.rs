//! Plottable efficiency surface.

use uom::si::{heat_flux_density::watt_per_square_meter, thermodynamic_temperature::degree_celsius};

use super::sweep::EfficiencyTable;

/// Efficiency over an ambient temperature × irradiance mesh.
///
/// The mesh is laid out like `meshgrid(ambient, irradiance)`: row `i` holds
/// irradiance `i`, column `j` holds ambient temperature `j`, and all three
/// matrices share the shape of the source table. Efficiency does not account
/// for optical losses.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// Ambient temperature in °C, `x[i][j] = T[j]`.
    pub x: Vec<Vec<f64>>,

    /// Irradiance in W/m², `y[i][j] = E[i]`.
    pub y: Vec<Vec<f64>>,

    /// Efficiency, `None` where the table has a missing value.
    pub z: Vec<Vec<Option<f64>>>,

    pub x_label: &'static str,
    pub y_label: &'static str,
    pub z_label: &'static str,
}

impl Surface {
    /// Builds the mesh for `table`.
    #[must_use]
    pub fn from_table(table: &EfficiencyTable) -> Self {
        let ambient: Vec<f64> = table
            .ambient_temperatures()
            .iter()
            .map(|t| t.get::<degree_celsius>())
            .collect();

        let (rows, _) = table.shape();

        Self {
            x: vec![ambient.clone(); rows],
            y: table
                .irradiance()
                .iter()
                .map(|e| vec![e.get::<watt_per_square_meter>(); ambient.len()])
                .collect(),
            z: table.rows().map(|(_, efficiency)| efficiency.to_vec()).collect(),
            x_label: "ambient temperature in °C",
            y_label: "irradiance in W/m²",
            z_label: "efficiency",
        }
    }

    /// Mesh points with a defined efficiency, as `(x, y, z)`.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.z.iter().enumerate().flat_map(move |(i, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(j, z)| z.map(|z| (self.x[i][j], self.y[i][j], z)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::f64::{HeatFluxDensity, ThermodynamicTemperature};

    fn table() -> EfficiencyTable {
        let mut table = EfficiencyTable::new(
            vec![
                HeatFluxDensity::new::<watt_per_square_meter>(100.0),
                HeatFluxDensity::new::<watt_per_square_meter>(500.0),
            ],
            vec![
                ThermodynamicTemperature::new::<degree_celsius>(-10.0),
                ThermodynamicTemperature::new::<degree_celsius>(10.0),
                ThermodynamicTemperature::new::<degree_celsius>(30.0),
            ],
        );
        table.push_row(vec![Some(0.1), Some(0.2), None], [2]);
        table.push_row(vec![Some(0.5), Some(0.6), Some(0.7)], []);
        table
    }

    #[test]
    fn mesh_axes() {
        let surface = Surface::from_table(&table());

        assert_eq!(surface.x.len(), 2);
        for row in &surface.x {
            for (x, expected) in row.iter().zip([-10.0, 10.0, 30.0]) {
                assert_relative_eq!(*x, expected, epsilon = 1e-9);
            }
        }
        assert_eq!(surface.y, vec![vec![100.0; 3], vec![500.0; 3]]);
        assert_eq!(surface.z[0][2], None);
        assert_eq!(surface.z[1], vec![Some(0.5), Some(0.6), Some(0.7)]);
        assert_eq!(surface.x_label, "ambient temperature in °C");
    }

    #[test]
    fn points_skip_missing_values() {
        let surface = Surface::from_table(&table());
        let points: Vec<_> = surface.points().collect();

        assert_eq!(points.len(), 5);
        assert_relative_eq!(points[0].0, -10.0, epsilon = 1e-9);
        assert_eq!((points[0].1, points[0].2), (100.0, 0.1));
        assert_eq!((points[2].1, points[2].2), (500.0, 0.5));
    }
}
