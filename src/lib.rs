//! cubechart: keeps a bar chart scene synchronized with a live data cube.

pub mod data_types;
pub mod engine;
pub mod error;
pub mod feed;
pub mod layout;
pub mod scales;
pub mod scene;
pub mod theme;

pub use data_types::{Cell, ChartMetadata, RowSet, RowTuple};
pub use error::{ChartError, ChartResult};
pub use feed::{DataFeed, FeedHandle};
pub use layout::{Margins, PlotArea, Viewport};
pub use scales::{BandScale, Scales, ValueScale};
pub use scene::{RenderReason, Scene, SceneReconciler};
pub use theme::ChartTheme;
