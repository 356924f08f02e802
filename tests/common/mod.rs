//! In-memory stand-in for the remote analytics engine.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::broadcast;

use cubechart::data_types::Cell;
use cubechart::engine::{
    CubeLayout, CubeSize, DataPage, Document, FieldInfo, ObjectLayout, PageRequest, RemoteObject,
};
use cubechart::error::{ChartError, ChartResult};

pub struct MockObject {
    id: String,
    layout: Mutex<ObjectLayout>,
    matrix: Mutex<Vec<Vec<Cell>>>,
    changed: broadcast::Sender<()>,
    pub clear_calls: AtomicUsize,
    pub layout_reads: AtomicUsize,
    pub data_fetches: AtomicUsize,
    pub last_page: Mutex<Option<PageRequest>>,
}

impl MockObject {
    pub fn new(id: &str, layout: ObjectLayout, matrix: Vec<Vec<Cell>>) -> Arc<Self> {
        let (changed, _) = broadcast::channel(16);
        Arc::new(Self {
            id: id.to_string(),
            layout: Mutex::new(layout),
            matrix: Mutex::new(matrix),
            changed,
            clear_calls: AtomicUsize::new(0),
            layout_reads: AtomicUsize::new(0),
            data_fetches: AtomicUsize::new(0),
            last_page: Mutex::new(None),
        })
    }

    pub fn set_measure_title(&self, title: &str) {
        let mut layout = self.layout.lock();
        if let Some(measure) = layout.cube.measures.first_mut() {
            measure.title = title.to_string();
        }
    }

    pub fn notify_changed(&self) {
        let _ = self.changed.send(());
    }
}

#[async_trait]
impl RemoteObject for MockObject {
    async fn clear_selections(&self, _path: &str) -> ChartResult<()> {
        self.clear_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn get_layout(&self) -> ChartResult<ObjectLayout> {
        self.layout_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.layout.lock().clone())
    }

    async fn get_properties(&self) -> ChartResult<serde_json::Value> {
        Ok(serde_json::json!({ "source": self.id }))
    }

    async fn get_hypercube_data(
        &self,
        _path: &str,
        pages: &[PageRequest],
    ) -> ChartResult<Vec<DataPage>> {
        self.data_fetches.fetch_add(1, Ordering::SeqCst);
        let matrix = self.matrix.lock().clone();
        let page = pages.first().copied().unwrap_or_default();
        *self.last_page.lock() = Some(page);
        let window: Vec<Vec<Cell>> = matrix
            .into_iter()
            .skip(page.top)
            .take(page.height)
            .map(|row| row.into_iter().skip(page.left).take(page.width).collect())
            .collect();
        Ok(vec![DataPage {
            area: page,
            matrix: window,
        }])
    }

    fn subscribe_changed(&self) -> broadcast::Receiver<()> {
        self.changed.subscribe()
    }
}

pub struct MockDocument {
    objects: Mutex<HashMap<String, Arc<MockObject>>>,
    sessions: Mutex<Vec<Arc<MockObject>>>,
}

impl MockDocument {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            objects: Mutex::new(HashMap::new()),
            sessions: Mutex::new(Vec::new()),
        })
    }

    pub fn insert(&self, id: &str, object: Arc<MockObject>) {
        self.objects.lock().insert(id.to_string(), object);
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn last_session(&self) -> Option<Arc<MockObject>> {
        self.sessions.lock().last().cloned()
    }

    pub fn base(&self, id: &str) -> Option<Arc<MockObject>> {
        self.objects.lock().get(id).cloned()
    }
}

#[async_trait]
impl Document for MockDocument {
    async fn get_object(&self, object_id: &str) -> ChartResult<Arc<dyn RemoteObject>> {
        self.objects
            .lock()
            .get(object_id)
            .cloned()
            .map(|o| o as Arc<dyn RemoteObject>)
            .ok_or_else(|| ChartError::ObjectNotFound(object_id.to_string()))
    }

    async fn create_session_object(
        &self,
        properties: serde_json::Value,
    ) -> ChartResult<Arc<dyn RemoteObject>> {
        let source = properties["source"]
            .as_str()
            .ok_or_else(|| ChartError::Connection("properties lack a source".into()))?;
        let base = self
            .objects
            .lock()
            .get(source)
            .cloned()
            .ok_or_else(|| ChartError::ObjectNotFound(source.to_string()))?;
        let session = MockObject::new(
            source,
            base.layout.lock().clone(),
            base.matrix.lock().clone(),
        );
        self.sessions.lock().push(session.clone());
        Ok(session)
    }
}

/// A document whose transport is down.
pub struct FailingDocument;

#[async_trait]
impl Document for FailingDocument {
    async fn get_object(&self, _object_id: &str) -> ChartResult<Arc<dyn RemoteObject>> {
        Err(ChartError::Connection("socket closed".into()))
    }

    async fn create_session_object(
        &self,
        _properties: serde_json::Value,
    ) -> ChartResult<Arc<dyn RemoteObject>> {
        Err(ChartError::Connection("socket closed".into()))
    }
}

pub fn wire_row(label: &str, avg: f64, low: f64, high: f64, rolling: f64) -> Vec<Cell> {
    vec![
        Cell::new(label, f64::NAN),
        Cell::new(avg.to_string(), avg),
        Cell::new(low.to_string(), low),
        Cell::new(high.to_string(), high),
        Cell::new(rolling.to_string(), rolling),
    ]
}

pub fn cube_layout(dimension: &str, measure: &str, rows: usize) -> ObjectLayout {
    ObjectLayout {
        cube: CubeLayout {
            size: CubeSize { columns: 5, rows },
            dimensions: vec![FieldInfo {
                title: dimension.to_string(),
            }],
            measures: vec![
                FieldInfo {
                    title: measure.to_string(),
                },
                FieldInfo {
                    title: "Min".to_string(),
                },
                FieldInfo {
                    title: "Max".to_string(),
                },
                FieldInfo {
                    title: "Rolling".to_string(),
                },
            ],
        },
    }
}

/// Three months of balances: the Jan/Feb/Mar fixture.
pub fn quarterly_matrix() -> Vec<Vec<Cell>> {
    vec![
        wire_row("Jan", 100.0, 80.0, 120.0, 90.0),
        wire_row("Feb", 150.0, 100.0, 180.0, 120.0),
        wire_row("Mar", 140.0, 90.0, 170.0, 130.0),
    ]
}
