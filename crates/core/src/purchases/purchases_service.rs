use log::{debug, info};
use std::sync::Arc;

use super::purchases_model::{NewPurchaseRequest, PurchaseRequest, RequestStatus};
use super::purchases_traits::{PurchaseRepositoryTrait, PurchaseServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};

/// Service for submitting and reviewing hen purchase requests.
pub struct PurchaseService {
    repository: Arc<dyn PurchaseRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl PurchaseService {
    pub fn new(
        repository: Arc<dyn PurchaseRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            event_sink,
        }
    }
}

#[async_trait::async_trait]
impl PurchaseServiceTrait for PurchaseService {
    async fn submit_purchase(&self, request: NewPurchaseRequest) -> Result<()> {
        request.validate()?;
        debug!(
            "Submitting purchase of package {} for {} via {}",
            request.package_id,
            request.amount,
            request.method.as_str()
        );

        let package_id = request.package_id.clone();
        let amount = request.amount;
        self.repository.submit(request).await?;

        info!("Purchase request submitted for package {}", package_id);
        self.event_sink
            .emit(DomainEvent::purchase_submitted(package_id, amount));
        Ok(())
    }

    async fn list_requests(&self, status: RequestStatus) -> Result<Vec<PurchaseRequest>> {
        self.repository.list_by_status(status).await
    }

    async fn approve(&self, request_id: &str) -> Result<()> {
        self.repository
            .set_status(request_id, RequestStatus::Approved)
            .await?;
        self.event_sink.emit(DomainEvent::request_resolved(
            request_id.to_string(),
            RequestStatus::Approved,
        ));
        Ok(())
    }

    async fn reject(&self, request_id: &str) -> Result<()> {
        self.repository
            .set_status(request_id, RequestStatus::Rejected)
            .await?;
        self.event_sink.emit(DomainEvent::request_resolved(
            request_id.to_string(),
            RequestStatus::Rejected,
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RecordingEventSink;
    use crate::market::PaymentMethod;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubRepo {
        submitted: Mutex<Vec<NewPurchaseRequest>>,
        status_changes: Mutex<Vec<(String, RequestStatus)>>,
    }

    #[async_trait::async_trait]
    impl PurchaseRepositoryTrait for StubRepo {
        async fn submit(&self, request: NewPurchaseRequest) -> Result<()> {
            self.submitted.lock().unwrap().push(request);
            Ok(())
        }

        async fn list_by_status(&self, _status: RequestStatus) -> Result<Vec<PurchaseRequest>> {
            Ok(Vec::new())
        }

        async fn set_status(&self, request_id: &str, status: RequestStatus) -> Result<()> {
            self.status_changes
                .lock()
                .unwrap()
                .push((request_id.to_string(), status));
            Ok(())
        }
    }

    fn request() -> NewPurchaseRequest {
        NewPurchaseRequest {
            package_id: "pkg-1".to_string(),
            amount: dec!(500),
            method: PaymentMethod::Ubank,
            trx_id: "TRX-1".to_string(),
        }
    }

    #[tokio::test]
    async fn submit_validates_then_emits_event() {
        let repo = Arc::new(StubRepo::default());
        let sink = Arc::new(RecordingEventSink::new());
        let service = PurchaseService::new(repo.clone(), sink.clone());

        service.submit_purchase(request()).await.unwrap();

        assert_eq!(repo.submitted.lock().unwrap().len(), 1);
        assert!(matches!(
            sink.events()[0],
            DomainEvent::PurchaseSubmitted { .. }
        ));
    }

    #[tokio::test]
    async fn invalid_submission_never_reaches_repository() {
        let repo = Arc::new(StubRepo::default());
        let sink = Arc::new(RecordingEventSink::new());
        let service = PurchaseService::new(repo.clone(), sink.clone());

        let mut bad = request();
        bad.trx_id = String::new();
        assert!(service.submit_purchase(bad).await.is_err());

        assert!(repo.submitted.lock().unwrap().is_empty());
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn approve_and_reject_record_resolution() {
        let repo = Arc::new(StubRepo::default());
        let sink = Arc::new(RecordingEventSink::new());
        let service = PurchaseService::new(repo.clone(), sink.clone());

        service.approve("req-1").await.unwrap();
        service.reject("req-2").await.unwrap();

        let changes = repo.status_changes.lock().unwrap();
        assert_eq!(changes[0], ("req-1".to_string(), RequestStatus::Approved));
        assert_eq!(changes[1], ("req-2".to_string(), RequestStatus::Rejected));
        assert_eq!(sink.len(), 2);
    }
}
