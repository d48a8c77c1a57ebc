use std::marker::PhantomData;

use osmodel_macros::ModelObject;

use super::{init_value, SimulationControl};
use crate::idf::FieldStore;
use crate::model::ModelObject;

/// `OS:ConvergenceLimits`
#[derive(Clone, ModelObject)]
#[model_object(
    idd = "OsConvergenceLimits",
    unique,
    parent = "SimulationControl",
    init = "init"
)]
pub struct ConvergenceLimits {
    obj: ModelObject,

    #[field(name = "Minimum System Timestep", optional)]
    _minimum_system_timestep: PhantomData<i32>,

    #[field(name = "Maximum HVAC Iterations", defaulted)]
    _maximum_hvac_iterations: PhantomData<i32>,

    #[field(name = "Minimum Plant Iterations", defaulted)]
    _minimum_plant_iterations: PhantomData<i32>,

    #[field(name = "Maximum Plant Iterations", defaulted)]
    _maximum_plant_iterations: PhantomData<i32>,
}

fn init(store: &mut FieldStore) {
    init_value(store, ConvergenceLimits::MINIMUM_SYSTEM_TIMESTEP_FIELD, 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;

    #[test]
    fn test_constructor_values() {
        let model = Model::new();
        let limits = model.unique_model_object::<ConvergenceLimits>();
        assert_eq!(limits.minimum_system_timestep(), Some(1));
        assert!(limits.is_maximum_hvac_iterations_defaulted());
        assert_eq!(limits.maximum_hvac_iterations(), 20);
        assert_eq!(limits.minimum_plant_iterations(), 2);
        assert_eq!(limits.maximum_plant_iterations(), 8);
    }

    #[test]
    fn test_optional_field() {
        let model = Model::new();
        let limits = model.unique_model_object::<ConvergenceLimits>();
        assert!(limits.reset_minimum_system_timestep());
        assert_eq!(limits.minimum_system_timestep(), None);
        assert!(!limits.set_minimum_system_timestep(61));
        assert!(limits.set_minimum_system_timestep(0));
        assert_eq!(limits.minimum_system_timestep(), Some(0));
    }

    #[test]
    fn test_set_get_round_trip() {
        let model = Model::new();
        let limits = model.unique_model_object::<ConvergenceLimits>();
        assert!(limits.set_maximum_hvac_iterations(30));
        assert_eq!(limits.maximum_hvac_iterations(), 30);
        assert!(!limits.is_maximum_hvac_iterations_defaulted());
        assert!(!limits.set_maximum_plant_iterations(1));
        assert_eq!(limits.maximum_plant_iterations(), 8);
    }

    #[test]
    fn test_parent_resolution() {
        let model = Model::new();
        let limits = model.unique_model_object::<ConvergenceLimits>();
        let parent = limits.parent().unwrap();
        assert_eq!(
            parent.handle(),
            model.unique_model_object::<SimulationControl>().handle()
        );
        assert!(limits.set_parent(&parent));

        let other = Model::new();
        assert!(!limits.set_parent(&other.unique_model_object::<SimulationControl>()));
    }
}
