use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::float::Float;
use crate::jet::Jet;
use crate::series::Series;

impl<F: Float + Serialize, const K: usize> Serialize for Jet<F, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Jet", 1)?;
        s.serialize_field("derivatives", self.derivs.as_slice())?;
        s.end()
    }
}

impl<'de, F: Float + Deserialize<'de>, const K: usize> Deserialize<'de> for Jet<F, K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct JetData<F> {
            derivatives: Vec<F>,
        }

        let data = JetData::<F>::deserialize(deserializer)?;
        let derivs: [F; K] = data.derivatives.try_into().map_err(|v: Vec<F>| {
            serde::de::Error::invalid_length(v.len(), &&*format!("array of length {K}"))
        })?;
        Ok(Jet::new(derivs))
    }
}

// Only the canonical entries carry information, but the raw buffer is
// written whole so the offsets stay meaningful to other readers.
impl<F: Float + Serialize, const N: usize, const K: usize> Serialize for Series<F, N, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Series", 3)?;
        s.serialize_field("dims", &N)?;
        s.serialize_field("order", &K)?;
        s.serialize_field("derivatives", &self.derivs)?;
        s.end()
    }
}

impl<'de, F: Float + Deserialize<'de>, const N: usize, const K: usize> Deserialize<'de>
    for Series<F, N, K>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct SeriesData<F> {
            dims: usize,
            order: usize,
            derivatives: Vec<F>,
        }

        let data = SeriesData::<F>::deserialize(deserializer)?;
        if data.dims != N || data.order != K {
            return Err(serde::de::Error::custom(format!(
                "series shape ({}, {}) does not match the target ({}, {})",
                data.dims, data.order, N, K
            )));
        }
        Series::try_from_vec(data.derivatives).map_err(serde::de::Error::custom)
    }
}
