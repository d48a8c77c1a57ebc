//! Simulation control

use std::marker::PhantomData;

use osmodel_macros::ModelObject;

use super::{ConvergenceLimits, HeatBalanceAlgorithm, ShadowCalculation, SizingParameters, Timestep};
use crate::model::ModelObject;

/// `OS:SimulationControl`
///
/// Which sizing and simulation runs to perform. Parent of the other
/// simulation settings objects.
#[derive(Clone, ModelObject)]
#[model_object(
    idd = "OsSimulationControl",
    unique,
    child = "ConvergenceLimits",
    child = "HeatBalanceAlgorithm",
    child = "ShadowCalculation",
    child = "SizingParameters",
    child = "Timestep"
)]
pub struct SimulationControl {
    obj: ModelObject,

    #[field(name = "Do Zone Sizing Calculation", defaulted)]
    _do_zone_sizing_calculation: PhantomData<bool>,

    #[field(name = "Do System Sizing Calculation", defaulted)]
    _do_system_sizing_calculation: PhantomData<bool>,

    #[field(name = "Do Plant Sizing Calculation", defaulted)]
    _do_plant_sizing_calculation: PhantomData<bool>,

    #[field(name = "Run Simulation for Sizing Periods", defaulted)]
    _run_simulation_for_sizing_periods: PhantomData<bool>,

    #[field(name = "Run Simulation for Weather File Run Periods", defaulted)]
    _run_simulation_for_weather_file_run_periods: PhantomData<bool>,

    #[field(name = "Loads Convergence Tolerance Value", defaulted)]
    _loads_convergence_tolerance_value: PhantomData<f64>,

    #[field(name = "Temperature Convergence Tolerance Value", defaulted)]
    _temperature_convergence_tolerance_value: PhantomData<f64>,

    #[field(name = "Solar Distribution", defaulted, choice)]
    _solar_distribution: PhantomData<String>,

    #[field(name = "Maximum Number of Warmup Days", defaulted)]
    _maximum_number_of_warmup_days: PhantomData<i32>,

    #[field(name = "Minimum Number of Warmup Days", defaulted)]
    _minimum_number_of_warmup_days: PhantomData<i32>,
}

impl SimulationControl {
    pub fn convergence_limits(&self) -> Option<ConvergenceLimits> {
        self.model().optional_unique_model_object()
    }

    pub fn heat_balance_algorithm(&self) -> Option<HeatBalanceAlgorithm> {
        self.model().optional_unique_model_object()
    }

    pub fn shadow_calculation(&self) -> Option<ShadowCalculation> {
        self.model().optional_unique_model_object()
    }

    pub fn sizing_parameters(&self) -> Option<SizingParameters> {
        self.model().optional_unique_model_object()
    }

    pub fn timestep(&self) -> Option<Timestep> {
        self.model().optional_unique_model_object()
    }
}
