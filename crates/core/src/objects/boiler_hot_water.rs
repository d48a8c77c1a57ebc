//! Hot water boiler
//!
//! Nominal capacity and design water flow rate are autosizable. After a
//! sizing run the computed values can be frozen into the fields:
//!
//! ```ignore
//! use osmodel_core::model::Autosize;
//!
//! let boiler = BoilerHotWater::new(&model);   // capacity: autosize
//! model.set_sizing_results(ComponentSizes::from_path("sizes.toml")?);
//! boiler.autosized_nominal_capacity();        // Some(12000.0), field unchanged
//! boiler.apply_sizing_values();               // capacity: 12000
//! boiler.autosize();                          // capacity: autosize again
//! ```

use std::marker::PhantomData;

use osmodel_macros::ModelObject;

use super::{init_sizing, init_value, Curve};
use crate::idf::{FieldStore, SizingValue};
use crate::model::ModelObject;

/// `OS:Boiler:HotWater`
#[derive(Clone, ModelObject)]
#[model_object(idd = "OsBoilerHotWater", init = "init")]
pub struct BoilerHotWater {
    obj: ModelObject,

    #[field(name = "Fuel Type", required, choice)]
    _fuel_type: PhantomData<String>,

    #[field(
        name = "Nominal Capacity",
        autosizable,
        sizing = "Design Size Nominal Capacity",
        units = "W"
    )]
    _nominal_capacity: PhantomData<f64>,

    #[field(name = "Nominal Thermal Efficiency", required)]
    _nominal_thermal_efficiency: PhantomData<f64>,

    #[field(name = "Efficiency Curve Temperature Evaluation Variable", optional, choice)]
    _efficiency_curve_temperature_evaluation_variable: PhantomData<String>,

    #[field(name = "Normalized Boiler Efficiency Curve Name", pointer)]
    _normalized_boiler_efficiency_curve: PhantomData<Curve>,

    #[field(
        name = "Design Water Flow Rate",
        autosizable,
        sizing = "Design Size Design Water Flow Rate",
        units = "m3/s"
    )]
    _design_water_flow_rate: PhantomData<f64>,

    #[field(name = "Minimum Part Load Ratio", defaulted)]
    _minimum_part_load_ratio: PhantomData<f64>,

    #[field(name = "Maximum Part Load Ratio", defaulted)]
    _maximum_part_load_ratio: PhantomData<f64>,

    #[field(name = "Optimum Part Load Ratio", defaulted)]
    _optimum_part_load_ratio: PhantomData<f64>,

    #[field(name = "Water Outlet Upper Temperature Limit", defaulted)]
    _water_outlet_upper_temperature_limit: PhantomData<f64>,

    #[field(name = "Boiler Flow Mode", defaulted, choice)]
    _boiler_flow_mode: PhantomData<String>,

    #[field(name = "On Cycle Parasitic Electric Load", defaulted)]
    _on_cycle_parasitic_electric_load: PhantomData<f64>,

    #[field(name = "Sizing Factor", defaulted)]
    _sizing_factor: PhantomData<f64>,

    #[field(name = "End-Use Subcategory", defaulted)]
    _end_use_subcategory: PhantomData<String>,
}

fn init(store: &mut FieldStore) {
    init_value(store, BoilerHotWater::FUEL_TYPE_FIELD, "NaturalGas".to_string());
    init_sizing(store, BoilerHotWater::NOMINAL_CAPACITY_FIELD, SizingValue::Autosized);
    init_value(store, BoilerHotWater::NOMINAL_THERMAL_EFFICIENCY_FIELD, 0.8);
    init_sizing(store, BoilerHotWater::DESIGN_WATER_FLOW_RATE_FIELD, SizingValue::Autosized);
}
