use std::marker::PhantomData;

use osmodel_macros::ModelObject;

use super::{init_value, SimulationControl};
use crate::idf::FieldStore;
use crate::model::ModelObject;

/// `OS:Timestep`
#[derive(Clone, ModelObject)]
#[model_object(idd = "OsTimestep", unique, parent = "SimulationControl", init = "init")]
pub struct Timestep {
    obj: ModelObject,

    #[field(name = "Number of Timesteps per Hour", defaulted)]
    _number_of_timesteps_per_hour: PhantomData<i32>,
}

fn init(store: &mut FieldStore) {
    init_value(store, Timestep::NUMBER_OF_TIMESTEPS_PER_HOUR_FIELD, 6);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;

    #[test]
    fn test_timesteps() {
        let model = Model::new();
        let timestep = model.unique_model_object::<Timestep>();
        assert_eq!(timestep.number_of_timesteps_per_hour(), 6);
        assert!(!timestep.is_number_of_timesteps_per_hour_defaulted());
        assert!(timestep.set_number_of_timesteps_per_hour(4));
        assert!(!timestep.set_number_of_timesteps_per_hour(0));
        assert_eq!(timestep.number_of_timesteps_per_hour(), 4);
        assert!(timestep.reset_number_of_timesteps_per_hour());
        assert!(timestep.is_number_of_timesteps_per_hour_defaulted());
        assert_eq!(timestep.number_of_timesteps_per_hour(), 6);
    }
}
