use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for working with temperature differences.
///
/// [`uom`] deliberately distinguishes absolute temperatures from
/// temperature differences and does not allow subtracting two
/// [`ThermodynamicTemperature`] values or multiplying an absolute
/// temperature by another quantity. Cycle analysis needs both, so this
/// trait provides:
///
/// - [`minus`](Self::minus): the difference between two absolute
///   temperatures as a [`TemperatureInterval`].
/// - [`above_absolute_zero`](Self::above_absolute_zero): an absolute
///   temperature reinterpreted as the interval above 0 K, which restores
///   ordinary quantity arithmetic (e.g. `T·Δs` heat terms).
///
/// See uom issues
/// [#380](https://github.com/iliekturtles/uom/issues/380) and
/// [#289](https://github.com/iliekturtles/uom/issues/289) for background.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;

    /// Returns this absolute temperature as an interval above 0 K.
    fn above_absolute_zero(self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }

    fn above_absolute_zero(self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(self.get::<abs_kelvin>())
    }
}
