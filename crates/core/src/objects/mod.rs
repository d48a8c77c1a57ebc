//! Concrete model object types
//!
//! Each wrapper is declared with `#[derive(ModelObject)]`; the field
//! attributes name schema fields and pick the accessor shape.
//!
//! ```ignore
//! use osmodel_core::model::Model;
//! use osmodel_core::objects::{BoilerHotWater, CurveCubic};
//!
//! let model = Model::new();
//! let boiler = BoilerHotWater::new(&model);
//! assert!(boiler.is_nominal_capacity_autosized());
//!
//! let curve = CurveCubic::new(&model);
//! boiler.set_normalized_boiler_efficiency_curve(&curve.into());
//! ```
//!
//! Hierarchy:
//!
//! ```text
//! SimulationControl ─┬─ ConvergenceLimits
//!                    ├─ HeatBalanceAlgorithm
//!                    ├─ ShadowCalculation
//!                    ├─ SizingParameters
//!                    └─ Timestep
//! Site
//! BoilerHotWater ──▶ Curve (CurveQuadratic | CurveCubic)
//! ```

mod boiler_hot_water;
mod convergence_limits;
mod curve;
mod heat_balance_algorithm;
mod shadow_calculation;
mod simulation_control;
mod site;
mod sizing_parameters;
mod timestep;

pub use boiler_hot_water::BoilerHotWater;
pub use convergence_limits::ConvergenceLimits;
pub use curve::{Curve, CurveCubic, CurveQuadratic};
pub use heat_balance_algorithm::HeatBalanceAlgorithm;
pub use shadow_calculation::ShadowCalculation;
pub use simulation_control::SimulationControl;
pub use site::Site;
pub use sizing_parameters::SizingParameters;
pub use timestep::Timestep;

use crate::idf::{FieldStore, SizingValue};
use crate::model::{FieldValue, ModelObjectType, TypeInfo};
use crate::schema::field_index;

/// Construction and hierarchy facts for every wrapper type
pub(crate) fn type_infos() -> Vec<TypeInfo> {
    vec![
        SimulationControl::type_info(),
        ConvergenceLimits::type_info(),
        HeatBalanceAlgorithm::type_info(),
        SizingParameters::type_info(),
        ShadowCalculation::type_info(),
        Timestep::type_info(),
        Site::type_info(),
        BoilerHotWater::type_info(),
        CurveQuadratic::type_info(),
        CurveCubic::type_info(),
    ]
}

/// Hard-set a constructor value
fn init_value<T: FieldValue>(store: &mut FieldStore, field: &str, value: T) {
    let written = field_index(store.object_type(), field)
        .is_ok_and(|index| T::write(store, index, value));
    debug_assert!(written, "constructor value for '{}' was rejected", field);
}

fn init_sizing(store: &mut FieldStore, field: &str, value: SizingValue) {
    let written = field_index(store.object_type(), field)
        .is_ok_and(|index| store.set_sizing(index, value));
    debug_assert!(written, "constructor value for '{}' was rejected", field);
}
