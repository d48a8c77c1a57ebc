use std::marker::PhantomData;

use osmodel_macros::ModelObject;

use super::SimulationControl;
use crate::model::ModelObject;

/// `OS:Sizing:Parameters`
///
/// Global oversizing factors applied to zone and system loads.
#[derive(Clone, ModelObject)]
#[model_object(idd = "OsSizingParameters", unique, parent = "SimulationControl")]
pub struct SizingParameters {
    obj: ModelObject,

    #[field(name = "Heating Sizing Factor", defaulted)]
    _heating_sizing_factor: PhantomData<f64>,

    #[field(name = "Cooling Sizing Factor", defaulted)]
    _cooling_sizing_factor: PhantomData<f64>,

    #[field(name = "Timesteps in Averaging Window", optional)]
    _timesteps_in_averaging_window: PhantomData<i32>,
}
