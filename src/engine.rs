//! Remote analytics engine capability.
//!
//! The engine is consumed as an opaque RPC surface: a connected document
//! hands out objects, objects expose a hypercube layout and paginated
//! data, and session-scoped clones isolate each subscriber from the
//! shared base definition.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::data_types::Cell;
use crate::error::ChartResult;

/// Path of the hypercube definition inside an object's property tree.
pub const CUBE_PATH: &str = "/cubeDef";

/// Full row/column extent of a cube's result matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeSize {
    pub columns: usize,
    pub rows: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub title: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CubeLayout {
    pub size: CubeSize,
    pub dimensions: Vec<FieldInfo>,
    pub measures: Vec<FieldInfo>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectLayout {
    pub cube: CubeLayout,
}

/// One bounded window into the cube matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

/// A fetched window: rows of cells in wire order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DataPage {
    pub area: PageRequest,
    pub matrix: Vec<Vec<Cell>>,
}

/// One object inside a connected document.
#[async_trait]
pub trait RemoteObject: Send + Sync {
    /// Clears any selection state under `path`.
    async fn clear_selections(&self, path: &str) -> ChartResult<()>;

    async fn get_layout(&self) -> ChartResult<ObjectLayout>;

    /// The object's full query definition, returned verbatim.
    async fn get_properties(&self) -> ChartResult<serde_json::Value>;

    async fn get_hypercube_data(
        &self,
        path: &str,
        pages: &[PageRequest],
    ) -> ChartResult<Vec<DataPage>>;

    /// Change notifications. Fires zero or more times, with no delivery
    /// order guarantee relative to other objects.
    fn subscribe_changed(&self) -> broadcast::Receiver<()>;
}

/// A connected document, the root capability handed to the feed.
#[async_trait]
pub trait Document: Send + Sync {
    async fn get_object(&self, object_id: &str) -> ChartResult<Arc<dyn RemoteObject>>;

    /// Creates an ephemeral session-scoped object from a copied query
    /// definition. Each call yields an independent clone.
    async fn create_session_object(
        &self,
        properties: serde_json::Value,
    ) -> ChartResult<Arc<dyn RemoteObject>>;
}
