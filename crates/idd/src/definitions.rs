//! Schema tables
//!
//! Field order, names, defaults and bounds follow the OpenStudio and
//! EnergyPlus dictionaries for the supported types.

use crate::field::IddField;
use crate::object::IddObject;
use crate::object_type::IddObjectType;

const YES_NO: &[&str] = &["Yes", "No"];

const SOLAR_DISTRIBUTION: &[&str] = &[
    "MinimalShadowing",
    "FullExterior",
    "FullInteriorAndExterior",
    "FullExteriorWithReflections",
    "FullInteriorAndExteriorWithReflections",
];

const HEAT_BALANCE_ALGORITHMS: &[&str] = &[
    "ConductionTransferFunction",
    "MoisturePenetrationDepthConductionTransferFunction",
    "ConductionFiniteDifference",
    "CombinedHeatAndMoistureFiniteElement",
];

const FUEL_TYPES: &[&str] = &[
    "NaturalGas",
    "Electricity",
    "PropaneGas",
    "FuelOilNo1",
    "FuelOilNo2",
    "Coal",
    "Diesel",
    "Gasoline",
    "OtherFuel1",
    "OtherFuel2",
];

const CURVE_LISTS: &[&str] = &["UniVariateCurves", "UnivariateFunctions"];

static OS_SIMULATION_CONTROL: IddObject = IddObject {
    object_type: IddObjectType::OsSimulationControl,
    name: "OS:SimulationControl",
    fields: &[
        IddField::handle(),
        IddField::choice("Do Zone Sizing Calculation", YES_NO).default("No"),
        IddField::choice("Do System Sizing Calculation", YES_NO).default("No"),
        IddField::choice("Do Plant Sizing Calculation", YES_NO).default("No"),
        IddField::choice("Run Simulation for Sizing Periods", YES_NO).default("Yes"),
        IddField::choice("Run Simulation for Weather File Run Periods", YES_NO).default("Yes"),
        IddField::real("Loads Convergence Tolerance Value")
            .default("0.04")
            .min_exclusive(0.0)
            .max(0.5)
            .units("W"),
        IddField::real("Temperature Convergence Tolerance Value")
            .default("0.4")
            .min_exclusive(0.0)
            .max(0.5)
            .units("deltaC"),
        IddField::choice("Solar Distribution", SOLAR_DISTRIBUTION).default("FullExterior"),
        IddField::integer("Maximum Number of Warmup Days")
            .default("25")
            .min_exclusive(0.0),
        IddField::integer("Minimum Number of Warmup Days")
            .default("6")
            .min_exclusive(0.0),
    ],
    unique: true,
    has_handle_field: true,
    name_field: None,
    references: &[],
};

static OS_CONVERGENCE_LIMITS: IddObject = IddObject {
    object_type: IddObjectType::OsConvergenceLimits,
    name: "OS:ConvergenceLimits",
    fields: &[
        IddField::handle(),
        IddField::integer("Minimum System Timestep")
            .min(0.0)
            .max(60.0)
            .units("minutes"),
        IddField::integer("Maximum HVAC Iterations").default("20").min(1.0),
        IddField::integer("Minimum Plant Iterations").default("2").min(1.0),
        IddField::integer("Maximum Plant Iterations").default("8").min(2.0),
    ],
    unique: true,
    has_handle_field: true,
    name_field: None,
    references: &[],
};

static OS_HEAT_BALANCE_ALGORITHM: IddObject = IddObject {
    object_type: IddObjectType::OsHeatBalanceAlgorithm,
    name: "OS:HeatBalanceAlgorithm",
    fields: &[
        IddField::handle(),
        IddField::choice("Algorithm", HEAT_BALANCE_ALGORITHMS)
            .default("ConductionTransferFunction"),
        IddField::real("Surface Temperature Upper Limit")
            .default("200")
            .min(200.0)
            .units("C"),
        IddField::real("Minimum Surface Convection Heat Transfer Coefficient Value")
            .default("0.1")
            .min_exclusive(0.0)
            .units("W/m2-K"),
        IddField::real("Maximum Surface Convection Heat Transfer Coefficient Value")
            .default("1000")
            .min(1.0)
            .units("W/m2-K"),
    ],
    unique: true,
    has_handle_field: true,
    name_field: None,
    references: &[],
};

static OS_SIZING_PARAMETERS: IddObject = IddObject {
    object_type: IddObjectType::OsSizingParameters,
    name: "OS:Sizing:Parameters",
    fields: &[
        IddField::handle(),
        IddField::real("Heating Sizing Factor")
            .default("1.0")
            .min_exclusive(0.0),
        IddField::real("Cooling Sizing Factor")
            .default("1.0")
            .min_exclusive(0.0),
        IddField::integer("Timesteps in Averaging Window").min(1.0),
    ],
    unique: true,
    has_handle_field: true,
    name_field: None,
    references: &[],
};

static OS_SHADOW_CALCULATION: IddObject = IddObject {
    object_type: IddObjectType::OsShadowCalculation,
    name: "OS:ShadowCalculation",
    fields: &[
        IddField::handle(),
        IddField::integer("Calculation Frequency")
            .required()
            .default("20")
            .min(1.0),
        IddField::integer("Maximum Figures in Shadow Overlap Calculations")
            .default("15000")
            .min(200.0),
        IddField::choice(
            "Polygon Clipping Algorithm",
            &["ConvexWeilerAtherton", "SutherlandHodgman"],
        ),
        IddField::choice(
            "Sky Diffuse Modeling Algorithm",
            &["SimpleSkyDiffuseModeling", "DetailedSkyDiffuseModeling"],
        ),
    ],
    unique: true,
    has_handle_field: true,
    name_field: None,
    references: &[],
};

static OS_TIMESTEP: IddObject = IddObject {
    object_type: IddObjectType::OsTimestep,
    name: "OS:Timestep",
    fields: &[
        IddField::handle(),
        IddField::integer("Number of Timesteps per Hour")
            .default("6")
            .min(1.0)
            .max(60.0),
    ],
    unique: true,
    has_handle_field: true,
    name_field: None,
    references: &[],
};

static OS_SITE: IddObject = IddObject {
    object_type: IddObjectType::OsSite,
    name: "OS:Site",
    fields: &[
        IddField::handle(),
        IddField::alpha("Name").required(),
        IddField::real("Latitude")
            .default("0")
            .min(-90.0)
            .max(90.0)
            .units("deg"),
        IddField::real("Longitude")
            .default("0")
            .min(-180.0)
            .max(180.0)
            .units("deg"),
        IddField::real("Time Zone")
            .default("0")
            .min(-12.0)
            .max(14.0)
            .units("hr"),
        IddField::real("Elevation")
            .default("0")
            .min(-300.0)
            .max_exclusive(8900.0)
            .units("m"),
        IddField::choice(
            "Terrain",
            &["Country", "Suburbs", "City", "Ocean", "Urban"],
        )
        .default("Suburbs"),
    ],
    unique: true,
    has_handle_field: true,
    name_field: Some(1),
    references: &[],
};

static OS_BOILER_HOT_WATER: IddObject = IddObject {
    object_type: IddObjectType::OsBoilerHotWater,
    name: "OS:Boiler:HotWater",
    fields: &[
        IddField::handle(),
        IddField::alpha("Name").required(),
        IddField::choice("Fuel Type", FUEL_TYPES).required(),
        IddField::real("Nominal Capacity")
            .autosizable()
            .min(0.0)
            .units("W"),
        IddField::real("Nominal Thermal Efficiency")
            .required()
            .min_exclusive(0.0)
            .max(1.0),
        IddField::choice(
            "Efficiency Curve Temperature Evaluation Variable",
            &["EnteringBoiler", "LeavingBoiler"],
        ),
        IddField::object_list("Normalized Boiler Efficiency Curve Name", CURVE_LISTS),
        IddField::real("Design Water Flow Rate")
            .autosizable()
            .min(0.0)
            .units("m3/s"),
        IddField::real("Minimum Part Load Ratio").default("0.0").min(0.0),
        IddField::real("Maximum Part Load Ratio").default("1.0").min(0.0),
        IddField::real("Optimum Part Load Ratio").default("1.0").min(0.0),
        IddField::alpha("Boiler Water Inlet Node Name"),
        IddField::alpha("Boiler Water Outlet Node Name"),
        IddField::real("Water Outlet Upper Temperature Limit")
            .default("99.0")
            .units("C"),
        IddField::choice(
            "Boiler Flow Mode",
            &["ConstantFlow", "LeavingSetpointModulated", "NotModulated"],
        )
        .default("NotModulated"),
        IddField::real("On Cycle Parasitic Electric Load")
            .default("0.0")
            .min(0.0)
            .units("W"),
        IddField::real("Sizing Factor").default("1.0").min_exclusive(0.0),
        IddField::alpha("End-Use Subcategory").default("General"),
    ],
    unique: false,
    has_handle_field: true,
    name_field: Some(1),
    references: &[],
};

static OS_CURVE_QUADRATIC: IddObject = IddObject {
    object_type: IddObjectType::OsCurveQuadratic,
    name: "OS:Curve:Quadratic",
    fields: &[
        IddField::handle(),
        IddField::alpha("Name").required(),
        IddField::real("Coefficient1 Constant").required(),
        IddField::real("Coefficient2 x").required(),
        IddField::real("Coefficient3 x**2").required(),
        IddField::real("Minimum Value of x").required(),
        IddField::real("Maximum Value of x").required(),
        IddField::real("Minimum Curve Output"),
        IddField::real("Maximum Curve Output"),
    ],
    unique: false,
    has_handle_field: true,
    name_field: Some(1),
    references: CURVE_LISTS,
};

static OS_CURVE_CUBIC: IddObject = IddObject {
    object_type: IddObjectType::OsCurveCubic,
    name: "OS:Curve:Cubic",
    fields: &[
        IddField::handle(),
        IddField::alpha("Name").required(),
        IddField::real("Coefficient1 Constant").required(),
        IddField::real("Coefficient2 x").required(),
        IddField::real("Coefficient3 x**2").required(),
        IddField::real("Coefficient4 x**3").required(),
        IddField::real("Minimum Value of x").required(),
        IddField::real("Maximum Value of x").required(),
        IddField::real("Minimum Curve Output"),
        IddField::real("Maximum Curve Output"),
    ],
    unique: false,
    has_handle_field: true,
    name_field: Some(1),
    references: CURVE_LISTS,
};

static SIMULATION_CONTROL: IddObject = IddObject {
    object_type: IddObjectType::SimulationControl,
    name: "SimulationControl",
    fields: &[
        IddField::choice("Do Zone Sizing Calculation", YES_NO).default("No"),
        IddField::choice("Do System Sizing Calculation", YES_NO).default("No"),
        IddField::choice("Do Plant Sizing Calculation", YES_NO).default("No"),
        IddField::choice("Run Simulation for Sizing Periods", YES_NO).default("Yes"),
        IddField::choice("Run Simulation for Weather File Run Periods", YES_NO).default("Yes"),
    ],
    unique: true,
    has_handle_field: false,
    name_field: None,
    references: &[],
};

static CONVERGENCE_LIMITS: IddObject = IddObject {
    object_type: IddObjectType::ConvergenceLimits,
    name: "ConvergenceLimits",
    fields: &[
        IddField::integer("Minimum System Timestep")
            .min(0.0)
            .max(60.0)
            .units("minutes"),
        IddField::integer("Maximum HVAC Iterations").default("20").min(1.0),
        IddField::integer("Minimum Plant Iterations").default("2").min(1.0),
        IddField::integer("Maximum Plant Iterations").default("8").min(2.0),
    ],
    unique: true,
    has_handle_field: false,
    name_field: None,
    references: &[],
};

pub(crate) fn lookup(object_type: IddObjectType) -> &'static IddObject {
    match object_type {
        IddObjectType::OsSimulationControl => &OS_SIMULATION_CONTROL,
        IddObjectType::OsConvergenceLimits => &OS_CONVERGENCE_LIMITS,
        IddObjectType::OsHeatBalanceAlgorithm => &OS_HEAT_BALANCE_ALGORITHM,
        IddObjectType::OsSizingParameters => &OS_SIZING_PARAMETERS,
        IddObjectType::OsShadowCalculation => &OS_SHADOW_CALCULATION,
        IddObjectType::OsTimestep => &OS_TIMESTEP,
        IddObjectType::OsSite => &OS_SITE,
        IddObjectType::OsBoilerHotWater => &OS_BOILER_HOT_WATER,
        IddObjectType::OsCurveQuadratic => &OS_CURVE_QUADRATIC,
        IddObjectType::OsCurveCubic => &OS_CURVE_CUBIC,
        IddObjectType::SimulationControl => &SIMULATION_CONTROL,
        IddObjectType::ConvergenceLimits => &CONVERGENCE_LIMITS,
    }
}
