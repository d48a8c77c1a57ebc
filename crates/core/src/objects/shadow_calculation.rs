use std::marker::PhantomData;

use osmodel_macros::ModelObject;

use super::{init_value, SimulationControl};
use crate::idf::FieldStore;
use crate::model::ModelObject;

/// `OS:ShadowCalculation`
#[derive(Clone, ModelObject)]
#[model_object(
    idd = "OsShadowCalculation",
    unique,
    parent = "SimulationControl",
    init = "init"
)]
pub struct ShadowCalculation {
    obj: ModelObject,

    #[field(name = "Calculation Frequency", required)]
    _calculation_frequency: PhantomData<i32>,

    #[field(name = "Maximum Figures in Shadow Overlap Calculations", defaulted)]
    _maximum_figures_in_shadow_overlap_calculations: PhantomData<i32>,

    #[field(name = "Polygon Clipping Algorithm", optional, choice)]
    _polygon_clipping_algorithm: PhantomData<String>,

    #[field(name = "Sky Diffuse Modeling Algorithm", optional, choice)]
    _sky_diffuse_modeling_algorithm: PhantomData<String>,
}

fn init(store: &mut FieldStore) {
    init_value(store, ShadowCalculation::CALCULATION_FREQUENCY_FIELD, 20);
    init_value(
        store,
        ShadowCalculation::MAXIMUM_FIGURES_IN_SHADOW_OVERLAP_CALCULATIONS_FIELD,
        15000,
    );
    init_value(
        store,
        ShadowCalculation::POLYGON_CLIPPING_ALGORITHM_FIELD,
        "SutherlandHodgman".to_string(),
    );
    init_value(
        store,
        ShadowCalculation::SKY_DIFFUSE_MODELING_ALGORITHM_FIELD,
        "SimpleSkyDiffuseModeling".to_string(),
    );
}
