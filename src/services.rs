//! Ready-made gRPC implementations for the cross-cutting services.
//!
//! Every platform binary mounts the same health and metrics plumbing; the
//! implementations live here next to the generated definitions so service
//! crates only implement their own business RPCs.

use crate::health::v1::health_check_response::ServingStatus;
use crate::health::v1::{health_service_server::HealthService, HealthCheckRequest, HealthCheckResponse};
use crate::metrics::v1::{
    metrics_service_server::MetricsService, MetricPoint, RecordRequest, RecordResponse,
    SnapshotRequest, SnapshotResponse,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::{mpsc, watch, Mutex};
use tokio_stream::wrappers::UnboundedReceiverStream;
use tonic::{Request, Response, Status};
use tracing::debug;

/// Health service implementation with a settable serving status.
///
/// `Watch` streams the current status immediately and then every change.
#[derive(Debug, Clone)]
pub struct HealthReporter {
    status: Arc<watch::Sender<ServingStatus>>,
}

impl Default for HealthReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthReporter {
    /// Create a reporter that starts out serving.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ServingStatus::Serving);
        Self {
            status: Arc::new(tx),
        }
    }

    /// Update the serving status; active watchers are notified.
    pub fn set_serving_status(&self, status: ServingStatus) {
        self.status.send_replace(status);
    }

    fn current(&self) -> ServingStatus {
        *self.status.borrow()
    }
}

#[tonic::async_trait]
impl HealthService for HealthReporter {
    type WatchStream = UnboundedReceiverStream<Result<HealthCheckResponse, Status>>;

    async fn check(
        &self,
        request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        let req = request.into_inner();
        debug!(service = %req.service, "CHECK");

        Ok(Response::new(HealthCheckResponse {
            status: self.current() as i32,
        }))
    }

    async fn watch(
        &self,
        request: Request<HealthCheckRequest>,
    ) -> Result<Response<Self::WatchStream>, Status> {
        let req = request.into_inner();
        debug!(service = %req.service, "WATCH");

        let mut rx = self.status.subscribe();
        let (out_tx, out_rx) = mpsc::unbounded_channel();

        let initial = HealthCheckResponse {
            status: *rx.borrow_and_update() as i32,
        };
        if out_tx.send(Ok(initial)).is_err() {
            return Err(Status::internal("failed to send initial health status"));
        }

        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let response = HealthCheckResponse {
                    status: *rx.borrow_and_update() as i32,
                };
                if out_tx.send(Ok(response)).is_err() {
                    break;
                }
            }
        });

        Ok(Response::new(UnboundedReceiverStream::new(out_rx)))
    }
}

/// Retained points per reporting service.
const RETAINED_POINTS: usize = 1024;

/// In-memory metrics sink keeping the most recent points per service.
#[derive(Debug, Clone, Default)]
pub struct MetricsRecorder {
    points: Arc<Mutex<HashMap<String, VecDeque<MetricPoint>>>>,
}

impl MetricsRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[tonic::async_trait]
impl MetricsService for MetricsRecorder {
    async fn record(
        &self,
        request: Request<RecordRequest>,
    ) -> Result<Response<RecordResponse>, Status> {
        let req = request.into_inner();
        if req.service.is_empty() {
            return Err(Status::invalid_argument("service is required"));
        }
        debug!(service = %req.service, points = req.points.len(), "RECORD");

        let mut map = self.points.lock().await;
        let retained = map.entry(req.service).or_default();
        let mut accepted = 0_i32;
        for point in req.points {
            // Unnamed points are unreadable downstream; drop them.
            if point.name.is_empty() {
                continue;
            }
            if retained.len() == RETAINED_POINTS {
                retained.pop_front();
            }
            retained.push_back(point);
            accepted += 1;
        }

        Ok(Response::new(RecordResponse { accepted }))
    }

    async fn snapshot(
        &self,
        request: Request<SnapshotRequest>,
    ) -> Result<Response<SnapshotResponse>, Status> {
        let req = request.into_inner();
        debug!(service = %req.service, "SNAPSHOT");

        let map = self.points.lock().await;
        let points = map
            .get(&req.service)
            .map(|retained| retained.iter().cloned().collect())
            .unwrap_or_default();

        Ok(Response::new(SnapshotResponse { points }))
    }
}
