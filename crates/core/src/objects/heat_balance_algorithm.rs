use std::marker::PhantomData;

use osmodel_macros::ModelObject;

use super::SimulationControl;
use crate::model::ModelObject;

/// `OS:HeatBalanceAlgorithm`
#[derive(Clone, ModelObject)]
#[model_object(idd = "OsHeatBalanceAlgorithm", unique, parent = "SimulationControl")]
pub struct HeatBalanceAlgorithm {
    obj: ModelObject,

    #[field(name = "Algorithm", defaulted, choice)]
    _algorithm: PhantomData<String>,

    #[field(name = "Surface Temperature Upper Limit", defaulted)]
    _surface_temperature_upper_limit: PhantomData<f64>,

    #[field(name = "Minimum Surface Convection Heat Transfer Coefficient Value", defaulted)]
    _minimum_surface_convection_heat_transfer_coefficient_value: PhantomData<f64>,

    #[field(name = "Maximum Surface Convection Heat Transfer Coefficient Value", defaulted)]
    _maximum_surface_convection_heat_transfer_coefficient_value: PhantomData<f64>,
}
