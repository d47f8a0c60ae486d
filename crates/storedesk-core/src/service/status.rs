//! Inquiry status transitions.
//!
//! This is the only path by which an inquiry's status changes. Each call makes
//! exactly one remote write and, only if it succeeds, one local mutation.
//! Nothing is retried, queued or deduplicated.

use tracing::{info, warn};

use crate::gateway::Gateway;
use crate::inquiry::{InquiryId, InquiryStatus, InquiryStore};
use crate::seller::SellerId;
use crate::{Error, Result};

/// Move an inquiry to `target`, first in the backend and then in the store.
///
/// Transitioning to the current status still writes to the backend and
/// leaves the store unchanged.
///
/// # Errors
///
/// Returns [`Error::Update`] if the remote write fails. The store is not
/// touched in that case.
pub async fn transition_status<G>(
    gateway: &G,
    store: &mut InquiryStore,
    seller_id: &SellerId,
    inquiry_id: &InquiryId,
    target: InquiryStatus,
) -> Result<()>
where
    G: Gateway + ?Sized,
{
    if let Err(e) = gateway
        .update_inquiry_status(seller_id, inquiry_id, target)
        .await
    {
        warn!("Failed to set inquiry {inquiry_id} to {target}: {e}");
        return Err(Error::Update {
            id: inquiry_id.clone(),
            source: e,
        });
    }

    if !store.apply_status(inquiry_id, target) {
        warn!("Inquiry {inquiry_id} updated remotely but not present in the local store");
    }
    info!("Inquiry {inquiry_id} marked as {target}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::{MockGateway, inquiry};

    fn store_with(status: InquiryStatus) -> InquiryStore {
        let mut store = InquiryStore::new();
        store.replace(vec![
            inquiry("1", "Ada", status, 2),
            inquiry("2", "Bo", InquiryStatus::Closed, 1),
        ]);
        store
    }

    fn seller_id() -> SellerId {
        SellerId::new("seller-1")
    }

    #[tokio::test]
    async fn test_transition_updates_remote_then_local() {
        let gateway = MockGateway::default();
        let mut store = store_with(InquiryStatus::New);
        let id = InquiryId::new("1");

        transition_status(&gateway, &mut store, &seller_id(), &id, InquiryStatus::Replied)
            .await
            .unwrap();

        assert_eq!(gateway.updates(), [(id.clone(), InquiryStatus::Replied)]);
        assert_eq!(store.get(&id).unwrap().status, InquiryStatus::Replied);
    }

    #[tokio::test]
    async fn test_repeated_transition_is_idempotent() {
        let gateway = MockGateway::default();
        let mut store = store_with(InquiryStatus::New);
        let id = InquiryId::new("1");

        transition_status(&gateway, &mut store, &seller_id(), &id, InquiryStatus::Replied)
            .await
            .unwrap();
        let after_first = store.clone();
        transition_status(&gateway, &mut store, &seller_id(), &id, InquiryStatus::Replied)
            .await
            .unwrap();

        assert_eq!(store.as_slice(), after_first.as_slice());
        assert_eq!(store.get(&id).unwrap().status, InquiryStatus::Replied);
        // One write per call, even when nothing changes.
        assert_eq!(gateway.updates().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_write_leaves_store_unchanged() {
        let gateway = MockGateway {
            fail_writes: true,
            ..MockGateway::default()
        };
        let mut store = store_with(InquiryStatus::New);
        let before = store.clone();

        let err = transition_status(
            &gateway,
            &mut store,
            &seller_id(),
            &InquiryId::new("1"),
            InquiryStatus::Closed,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::Update { ref id, .. } if id.as_str() == "1"));
        assert_eq!(store.as_slice(), before.as_slice());
    }

    #[tokio::test]
    async fn test_every_status_pair_is_allowed() {
        for from in InquiryStatus::ALL {
            for to in from.transitions() {
                let gateway = MockGateway::default();
                let mut store = store_with(from);
                let id = InquiryId::new("1");

                transition_status(&gateway, &mut store, &seller_id(), &id, to)
                    .await
                    .unwrap();

                assert_eq!(store.get(&id).unwrap().status, to);
            }
        }
    }

    #[tokio::test]
    async fn test_unknown_id_still_writes_remote() {
        let gateway = MockGateway::default();
        let mut store = store_with(InquiryStatus::New);
        let before = store.clone();

        transition_status(
            &gateway,
            &mut store,
            &seller_id(),
            &InquiryId::new("elsewhere"),
            InquiryStatus::Closed,
        )
        .await
        .unwrap();

        assert_eq!(gateway.updates().len(), 1);
        assert_eq!(store.as_slice(), before.as_slice());
    }

    fn arb_status() -> impl Strategy<Value = InquiryStatus> {
        prop_oneof![
            Just(InquiryStatus::New),
            Just(InquiryStatus::Replied),
            Just(InquiryStatus::Closed),
        ]
    }

    proptest! {
        #[test]
        fn prop_transition_twice_equals_once(start in arb_status(), target in arb_status()) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let gateway = MockGateway::default();
            let id = InquiryId::new("1");

            let mut once = store_with(start);
            let mut twice = store_with(start);
            runtime.block_on(async {
                transition_status(&gateway, &mut once, &seller_id(), &id, target).await?;
                transition_status(&gateway, &mut twice, &seller_id(), &id, target).await?;
                transition_status(&gateway, &mut twice, &seller_id(), &id, target).await
            }).unwrap();

            prop_assert_eq!(once.as_slice(), twice.as_slice());
        }
    }
}
