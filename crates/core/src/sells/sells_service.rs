use log::{debug, info, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::sells_model::{NewSellRequest, SellRequest, SellScreen};
use super::sells_traits::{SellRepositoryTrait, SellServiceTrait};
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink};
use crate::purchases::RequestStatus;
use crate::wallet::PendingLedger;

/// Service for the sell (cashout) flow.
///
/// Submitted sells are debited into the shared [`PendingLedger`] so
/// wallet and sell screens reflect them immediately, without treating
/// the local debit as authoritative.
pub struct SellService {
    repository: Arc<dyn SellRepositoryTrait>,
    pending: Arc<PendingLedger>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl SellService {
    pub fn new(
        repository: Arc<dyn SellRepositoryTrait>,
        pending: Arc<PendingLedger>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            pending,
            event_sink,
        }
    }
}

#[async_trait::async_trait]
impl SellServiceTrait for SellService {
    async fn load_sell_screen(&self) -> Result<SellScreen> {
        let mut screen = self.repository.fetch_sell_screen().await?;
        screen.my_eggs = self.pending.apply(screen.my_eggs);
        Ok(screen)
    }

    async fn submit_sell(&self, request: NewSellRequest) -> Result<Uuid> {
        request.validate()?;

        let screen = self.repository.fetch_sell_screen().await?;
        let available = self.pending.apply(screen.my_eggs);
        if request.quantity > available {
            warn!(
                "Sell of {} eggs refused, only {} available",
                request.quantity, available
            );
            return Err(Error::InsufficientBalance {
                requested: request.quantity,
                available,
            });
        }

        debug!(
            "Submitting sell of {} eggs to {} for {}",
            request.quantity, request.buyer_name, request.total_amount
        );
        let quantity = request.quantity;
        let total_amount = request.total_amount;
        self.repository.submit_sell(request).await?;

        let submission_id = self.pending.record_debit(quantity);
        info!("Sell request submitted, {} eggs pending", quantity);
        self.event_sink
            .emit(DomainEvent::sell_submitted(quantity, total_amount));
        Ok(submission_id)
    }

    async fn list_requests(&self, status: RequestStatus) -> Result<Vec<SellRequest>> {
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
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    struct StubRepo {
        my_eggs: u64,
        submitted: Mutex<Vec<NewSellRequest>>,
    }

    impl StubRepo {
        fn with_balance(my_eggs: u64) -> Self {
            Self {
                my_eggs,
                submitted: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl SellRepositoryTrait for StubRepo {
        async fn fetch_sell_screen(&self) -> Result<SellScreen> {
            Ok(SellScreen {
                buyers: Vec::new(),
                my_eggs: self.my_eggs,
            })
        }

        async fn submit_sell(&self, request: NewSellRequest) -> Result<()> {
            self.submitted.lock().unwrap().push(request);
            Ok(())
        }

        async fn list_by_status(&self, _status: RequestStatus) -> Result<Vec<SellRequest>> {
            Ok(Vec::new())
        }

        async fn set_status(&self, _request_id: &str, _status: RequestStatus) -> Result<()> {
            Ok(())
        }
    }

    fn request(quantity: u64) -> NewSellRequest {
        NewSellRequest {
            quantity,
            buyer_name: "Ali Traders".to_string(),
            rate: dec!(25),
            total_amount: Decimal::from(quantity) * dec!(25),
            wallet_name: "Hamza K.".to_string(),
            wallet_number: "03001234567".to_string(),
            method: PaymentMethod::EasyPaisa,
        }
    }

    fn service(repo: StubRepo) -> (SellService, Arc<PendingLedger>, Arc<RecordingEventSink>) {
        let pending = Arc::new(PendingLedger::new());
        let sink = Arc::new(RecordingEventSink::new());
        let service = SellService::new(Arc::new(repo), pending.clone(), sink.clone());
        (service, pending, sink)
    }

    #[tokio::test]
    async fn submit_records_pending_debit_and_event() {
        let (service, pending, sink) = service(StubRepo::with_balance(100));

        service.submit_sell(request(30)).await.unwrap();

        assert_eq!(pending.total_debited(), 30);
        assert!(matches!(sink.events()[0], DomainEvent::SellSubmitted { .. }));
    }

    #[tokio::test]
    async fn oversell_refused_with_balances() {
        let (service, pending, sink) = service(StubRepo::with_balance(10));

        let err = service.submit_sell(request(15)).await.unwrap_err();
        match err {
            Error::InsufficientBalance {
                requested,
                available,
            } => {
                assert_eq!(requested, 15);
                assert_eq!(available, 10);
            }
            other => panic!("Unexpected error: {other}"),
        }
        assert!(pending.is_empty());
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn pending_debits_count_against_available_balance() {
        let (service, _pending, _sink) = service(StubRepo::with_balance(50));

        service.submit_sell(request(40)).await.unwrap();
        // Authoritative balance is still 50; only 10 remain sellable.
        assert!(service.submit_sell(request(20)).await.is_err());
        assert!(service.submit_sell(request(10)).await.is_ok());
    }

    #[tokio::test]
    async fn sell_screen_applies_overlay() {
        let (service, pending, _sink) = service(StubRepo::with_balance(80));
        pending.record_debit(30);

        let screen = service.load_sell_screen().await.unwrap();
        assert_eq!(screen.my_eggs, 50);
    }
}
