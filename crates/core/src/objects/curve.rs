//! Performance curves
//!
//! Curves are resources: other objects point at them through object-list
//! fields accepting `UniVariateCurves`.

use std::marker::PhantomData;
use std::ops::Deref;

use osmodel_idd::IddObjectType;
use osmodel_macros::ModelObject;

use super::init_value;
use crate::idf::FieldStore;
use crate::model::{ModelObject, ModelObjectCast};

/// `OS:Curve:Quadratic`, `c1 + c2·x + c3·x²`
#[derive(Clone, ModelObject)]
#[model_object(idd = "OsCurveQuadratic", init = "init_quadratic")]
pub struct CurveQuadratic {
    obj: ModelObject,

    #[field(name = "Coefficient1 Constant", required)]
    _coefficient1_constant: PhantomData<f64>,

    #[field(name = "Coefficient2 x", required)]
    _coefficient2_x: PhantomData<f64>,

    #[field(name = "Coefficient3 x**2", required)]
    _coefficient3_x_power_2: PhantomData<f64>,

    #[field(name = "Minimum Value of x", required)]
    _minimum_value_of_x: PhantomData<f64>,

    #[field(name = "Maximum Value of x", required)]
    _maximum_value_of_x: PhantomData<f64>,

    #[field(name = "Minimum Curve Output", optional)]
    _minimum_curve_output: PhantomData<f64>,

    #[field(name = "Maximum Curve Output", optional)]
    _maximum_curve_output: PhantomData<f64>,
}

/// `OS:Curve:Cubic`, `c1 + c2·x + c3·x² + c4·x³`
#[derive(Clone, ModelObject)]
#[model_object(idd = "OsCurveCubic", init = "init_cubic")]
pub struct CurveCubic {
    obj: ModelObject,

    #[field(name = "Coefficient1 Constant", required)]
    _coefficient1_constant: PhantomData<f64>,

    #[field(name = "Coefficient2 x", required)]
    _coefficient2_x: PhantomData<f64>,

    #[field(name = "Coefficient3 x**2", required)]
    _coefficient3_x_power_2: PhantomData<f64>,

    #[field(name = "Coefficient4 x**3", required)]
    _coefficient4_x_power_3: PhantomData<f64>,

    #[field(name = "Minimum Value of x", required)]
    _minimum_value_of_x: PhantomData<f64>,

    #[field(name = "Maximum Value of x", required)]
    _maximum_value_of_x: PhantomData<f64>,

    #[field(name = "Minimum Curve Output", optional)]
    _minimum_curve_output: PhantomData<f64>,

    #[field(name = "Maximum Curve Output", optional)]
    _maximum_curve_output: PhantomData<f64>,
}

// A flat curve at 1.0 over [0, 1]
fn init_quadratic(store: &mut FieldStore) {
    init_value(store, CurveQuadratic::COEFFICIENT1_CONSTANT_FIELD, 1.0);
    init_value(store, CurveQuadratic::COEFFICIENT2_X_FIELD, 0.0);
    init_value(store, CurveQuadratic::COEFFICIENT3_X_POWER_2_FIELD, 0.0);
    init_value(store, CurveQuadratic::MINIMUM_VALUE_OF_X_FIELD, 0.0);
    init_value(store, CurveQuadratic::MAXIMUM_VALUE_OF_X_FIELD, 1.0);
}

fn init_cubic(store: &mut FieldStore) {
    init_value(store, CurveCubic::COEFFICIENT1_CONSTANT_FIELD, 1.0);
    init_value(store, CurveCubic::COEFFICIENT2_X_FIELD, 0.0);
    init_value(store, CurveCubic::COEFFICIENT3_X_POWER_2_FIELD, 0.0);
    init_value(store, CurveCubic::COEFFICIENT4_X_POWER_3_FIELD, 0.0);
    init_value(store, CurveCubic::MINIMUM_VALUE_OF_X_FIELD, 0.0);
    init_value(store, CurveCubic::MAXIMUM_VALUE_OF_X_FIELD, 1.0);
}

fn clamp_output(value: f64, minimum: Option<f64>, maximum: Option<f64>) -> f64 {
    let value = minimum.map_or(value, |min| value.max(min));
    maximum.map_or(value, |max| value.min(max))
}

impl CurveQuadratic {
    /// Curve output at `x`, with `x` and the output held to their limits
    pub fn evaluate(&self, x: f64) -> f64 {
        let x = x.max(self.minimum_value_of_x()).min(self.maximum_value_of_x());
        let value = self.coefficient1_constant()
            + self.coefficient2_x() * x
            + self.coefficient3_x_power_2() * x * x;
        clamp_output(value, self.minimum_curve_output(), self.maximum_curve_output())
    }
}

impl CurveCubic {
    /// Curve output at `x`, with `x` and the output held to their limits
    pub fn evaluate(&self, x: f64) -> f64 {
        let x = x.max(self.minimum_value_of_x()).min(self.maximum_value_of_x());
        let value = self.coefficient1_constant()
            + self.coefficient2_x() * x
            + self.coefficient3_x_power_2() * x * x
            + self.coefficient4_x_power_3() * x * x * x;
        clamp_output(value, self.minimum_curve_output(), self.maximum_curve_output())
    }
}

/// Any univariate curve
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Curve {
    Quadratic(CurveQuadratic),
    Cubic(CurveCubic),
}

impl Curve {
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Curve::Quadratic(curve) => curve.evaluate(x),
            Curve::Cubic(curve) => curve.evaluate(x),
        }
    }
}

impl ModelObjectCast for Curve {
    fn from_object(object: ModelObject) -> Option<Self> {
        match object.object_type() {
            IddObjectType::OsCurveQuadratic => CurveQuadratic::from_object(object).map(Curve::Quadratic),
            IddObjectType::OsCurveCubic => CurveCubic::from_object(object).map(Curve::Cubic),
            _ => None,
        }
    }

    fn as_object(&self) -> &ModelObject {
        match self {
            Curve::Quadratic(curve) => curve.as_object(),
            Curve::Cubic(curve) => curve.as_object(),
        }
    }
}

impl Deref for Curve {
    type Target = ModelObject;

    fn deref(&self) -> &ModelObject {
        self.as_object()
    }
}

impl From<CurveQuadratic> for Curve {
    fn from(curve: CurveQuadratic) -> Self {
        Curve::Quadratic(curve)
    }
}

impl From<CurveCubic> for Curve {
    fn from(curve: CurveCubic) -> Self {
        Curve::Cubic(curve)
    }
}

impl From<Curve> for ModelObject {
    fn from(curve: Curve) -> Self {
        match curve {
            Curve::Quadratic(curve) => curve.into(),
            Curve::Cubic(curve) => curve.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;

    #[test]
    fn test_flat_unit_curve() {
        let model = Model::new();
        let curve = CurveQuadratic::new(&model);
        assert_eq!(curve.coefficient1_constant(), 1.0);
        assert_eq!(curve.evaluate(0.5), 1.0);
        let cubic = CurveCubic::new(&model);
        assert_eq!(cubic.coefficient4_x_power_3(), 0.0);
        assert_eq!(cubic.evaluate(2.0), 1.0);
    }

    #[test]
    fn test_evaluate_clamps_input_and_output() {
        let model = Model::new();
        let curve = CurveQuadratic::new(&model);
        curve.set_coefficient2_x(1.0);
        curve.set_coefficient3_x_power_2(1.0);
        // x held to 1.0
        assert_eq!(curve.evaluate(5.0), 3.0);
        assert!(curve.set_maximum_curve_output(2.5));
        assert_eq!(curve.evaluate(5.0), 2.5);
        assert!(curve.set_minimum_curve_output(1.5));
        assert_eq!(curve.evaluate(0.0), 1.5);
    }

    #[test]
    fn test_cubic_evaluate() {
        let model = Model::new();
        let curve = CurveCubic::new(&model);
        curve.set_maximum_value_of_x(2.0);
        curve.set_coefficient4_x_power_3(0.5);
        assert_eq!(curve.evaluate(2.0), 5.0);
        assert_eq!(Curve::from(curve).evaluate(1.0), 1.5);
    }

    #[test]
    fn test_curve_cast() {
        let model = Model::new();
        let quadratic = CurveQuadratic::new(&model);
        let object: ModelObject = quadratic.clone().into();
        assert_eq!(Curve::from_object(object), Some(Curve::Quadratic(quadratic.clone())));

        let site = model.create_object(IddObjectType::OsSite);
        assert_eq!(Curve::from_object(site), None);

        let curve = Curve::from(quadratic.clone());
        assert_eq!(curve.handle(), quadratic.handle());
        assert_eq!(ModelObject::from(curve), quadratic.as_object().clone());
    }

    #[test]
    fn test_curves_have_unique_names() {
        let model = Model::new();
        let a = CurveQuadratic::new(&model);
        let b = CurveQuadratic::new(&model);
        assert_eq!(a.name().as_deref(), Some("Curve Quadratic 1"));
        assert_eq!(b.name().as_deref(), Some("Curve Quadratic 2"));
    }
}
