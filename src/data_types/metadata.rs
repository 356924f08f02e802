use serde::{Deserialize, Serialize};

use crate::engine::ObjectLayout;
use crate::error::{ChartError, ChartResult};

/// Display titles derived from the remote object's field metadata,
/// independent of row content.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub dimension_title: String,
    pub measure_title: String,
}

impl ChartMetadata {
    /// Reads the first dimension and measure titles from a cube layout.
    pub fn from_layout(layout: &ObjectLayout) -> ChartResult<Self> {
        let cube = &layout.cube;
        let (Some(dimension), Some(measure)) = (cube.dimensions.first(), cube.measures.first())
        else {
            return Err(ChartError::EmptyData);
        };
        Ok(Self {
            dimension_title: dimension.title.clone(),
            measure_title: measure.title.clone(),
        })
    }
}
