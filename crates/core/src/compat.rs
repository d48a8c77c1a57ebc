//! Deprecated accessor names
//!
//! Older property names kept as extension traits so callers can migrate at
//! their own pace. Each method logs a warning and forwards to the current
//! accessor. Bring the trait into scope to use them:
//!
//! ```ignore
//! use osmodel_core::compat::BoilerHotWaterDeprecated;
//!
//! boiler.set_parasitic_electric_load(50.0); // warns, forwards
//! ```

use tracing::warn;

use crate::objects::BoilerHotWater;

fn deprecated(old: &str, new: &str) {
    warn!("{} is deprecated, use {} instead", old, new);
}

pub trait BoilerHotWaterDeprecated {
    #[deprecated(note = "Use on_cycle_parasitic_electric_load instead")]
    fn parasitic_electric_load(&self) -> f64;
    #[deprecated(note = "Use set_on_cycle_parasitic_electric_load instead")]
    fn set_parasitic_electric_load(&self, value: f64) -> bool;
    #[deprecated(note = "Use is_on_cycle_parasitic_electric_load_defaulted instead")]
    fn is_parasitic_electric_load_defaulted(&self) -> bool;
    #[deprecated(note = "Use reset_on_cycle_parasitic_electric_load instead")]
    fn reset_parasitic_electric_load(&self) -> bool;
}

impl BoilerHotWaterDeprecated for BoilerHotWater {
    fn parasitic_electric_load(&self) -> f64 {
        deprecated(
            "BoilerHotWater::parasitic_electric_load",
            "on_cycle_parasitic_electric_load",
        );
        self.on_cycle_parasitic_electric_load()
    }

    fn set_parasitic_electric_load(&self, value: f64) -> bool {
        deprecated(
            "BoilerHotWater::set_parasitic_electric_load",
            "set_on_cycle_parasitic_electric_load",
        );
        self.set_on_cycle_parasitic_electric_load(value)
    }

    fn is_parasitic_electric_load_defaulted(&self) -> bool {
        deprecated(
            "BoilerHotWater::is_parasitic_electric_load_defaulted",
            "is_on_cycle_parasitic_electric_load_defaulted",
        );
        self.is_on_cycle_parasitic_electric_load_defaulted()
    }

    fn reset_parasitic_electric_load(&self) -> bool {
        deprecated(
            "BoilerHotWater::reset_parasitic_electric_load",
            "reset_on_cycle_parasitic_electric_load",
        );
        self.reset_on_cycle_parasitic_electric_load()
    }
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;
    use crate::model::Model;

    #[test]
    fn test_forwards_to_current_accessors() {
        let model = Model::new();
        let boiler = BoilerHotWater::new(&model);
        assert!(boiler.is_parasitic_electric_load_defaulted());
        assert_eq!(boiler.parasitic_electric_load(), 0.0);

        assert!(boiler.set_parasitic_electric_load(50.0));
        assert_eq!(boiler.on_cycle_parasitic_electric_load(), 50.0);
        assert!(!boiler.set_parasitic_electric_load(-1.0));

        assert!(boiler.reset_parasitic_electric_load());
        assert!(boiler.is_on_cycle_parasitic_electric_load_defaulted());
    }
}
