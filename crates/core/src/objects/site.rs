use std::marker::PhantomData;

use osmodel_macros::ModelObject;

use crate::model::ModelObject;

/// `OS:Site`
///
/// Location of the building. Unique, with no parent.
#[derive(Clone, ModelObject)]
#[model_object(idd = "OsSite", unique)]
pub struct Site {
    obj: ModelObject,

    #[field(name = "Latitude", defaulted)]
    _latitude: PhantomData<f64>,

    #[field(name = "Longitude", defaulted)]
    _longitude: PhantomData<f64>,

    #[field(name = "Time Zone", defaulted)]
    _time_zone: PhantomData<f64>,

    #[field(name = "Elevation", defaulted)]
    _elevation: PhantomData<f64>,

    #[field(name = "Terrain", defaulted, choice)]
    _terrain: PhantomData<String>,
}
