//! The closed set of object types known to the schema tables

use std::fmt;

/// Known object types.
///
/// `Os*` variants are modeling types whose first field is a handle. The
/// remaining variants are their plain simulation-input counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IddObjectType {
    OsSimulationControl,
    OsConvergenceLimits,
    OsHeatBalanceAlgorithm,
    OsSizingParameters,
    OsShadowCalculation,
    OsTimestep,
    OsSite,
    OsBoilerHotWater,
    OsCurveQuadratic,
    OsCurveCubic,
    SimulationControl,
    ConvergenceLimits,
}

impl IddObjectType {
    pub const ALL: &'static [IddObjectType] = &[
        Self::OsSimulationControl,
        Self::OsConvergenceLimits,
        Self::OsHeatBalanceAlgorithm,
        Self::OsSizingParameters,
        Self::OsShadowCalculation,
        Self::OsTimestep,
        Self::OsSite,
        Self::OsBoilerHotWater,
        Self::OsCurveQuadratic,
        Self::OsCurveCubic,
        Self::SimulationControl,
        Self::ConvergenceLimits,
    ];

    /// Schema name, e.g. `OS:ConvergenceLimits`.
    pub fn name(self) -> &'static str {
        crate::idd_object(self).name
    }
}

impl fmt::Display for IddObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
