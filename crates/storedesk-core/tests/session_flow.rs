//! End-to-end tests for a seller session.
//!
//! These tests drive the public API against an in-memory gateway that keeps
//! its own copy of the backend rows, so status writes are visible on reload.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use storedesk_core::{
    CatalogItem, CatalogKind, ChannelKind, ChannelLauncher, DashboardStats, Error, Gateway,
    GatewayError, GatewayResult, GuideNavigator, Inquiry, InquiryId, InquiryItem, InquiryStatus,
    LaunchError, OutboundMessage, Seller, SellerId, SellerSession, SessionStart, StatusFilter,
    UserId, onboarding_steps,
};

/// Backend double holding rows for a single seller.
struct Backend {
    seller: Seller,
    inquiries: Mutex<Vec<Inquiry>>,
    products: Vec<CatalogItem>,
    services: Vec<CatalogItem>,
    reject_writes: bool,
}

impl Backend {
    fn new() -> Self {
        let base = Utc.with_ymd_and_hms(2026, 5, 4, 9, 0, 0).unwrap();
        let inquiry = |id: &str,
                       name: &str,
                       status: InquiryStatus,
                       minutes: i64,
                       item: Option<InquiryItem>| Inquiry {
            id: InquiryId::new(id),
            customer_name: name.to_string(),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            phone: None,
            message: format!("{name} is asking about availability"),
            created_at: base + Duration::minutes(minutes),
            status,
            item,
        };

        Self {
            seller: Seller {
                id: SellerId::new("seller-42"),
                user_id: UserId::new("user-42"),
                business_name: "Ada's Bakery".to_string(),
                slug: Some("ada-bakery".to_string()),
                phone: None,
                email: None,
            },
            inquiries: Mutex::new(vec![
                inquiry(
                    "a",
                    "Ada",
                    InquiryStatus::New,
                    30,
                    Some(InquiryItem::Product("Rye Loaf".to_string())),
                ),
                inquiry("b", "Bo", InquiryStatus::Closed, 20, None),
                inquiry(
                    "c",
                    "Cy",
                    InquiryStatus::New,
                    10,
                    Some(InquiryItem::Service("Wedding Cakes".to_string())),
                ),
            ]),
            products: vec![
                CatalogItem {
                    id: "p1".to_string(),
                    name: "Rye Loaf".to_string(),
                    view_count: Some(12),
                },
                CatalogItem {
                    id: "p2".to_string(),
                    name: "Spelt Loaf".to_string(),
                    view_count: None,
                },
            ],
            services: vec![CatalogItem {
                id: "s1".to_string(),
                name: "Wedding Cakes".to_string(),
                view_count: Some(5),
            }],
            reject_writes: false,
        }
    }

    fn status_of(&self, id: &str) -> Option<InquiryStatus> {
        self.inquiries
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id.as_str() == id)
            .map(|i| i.status)
    }
}

#[async_trait]
impl Gateway for Backend {
    async fn find_seller(&self, user_id: &UserId) -> GatewayResult<Option<Seller>> {
        Ok((&self.seller.user_id == user_id).then(|| self.seller.clone()))
    }

    async fn list_inquiries(&self, seller_id: &SellerId) -> GatewayResult<Vec<Inquiry>> {
        assert_eq!(seller_id, &self.seller.id);
        Ok(self.inquiries.lock().unwrap().clone())
    }

    async fn update_inquiry_status(
        &self,
        _seller_id: &SellerId,
        inquiry_id: &InquiryId,
        status: InquiryStatus,
    ) -> GatewayResult<()> {
        if self.reject_writes {
            return Err(GatewayError::new("new row violates row-level security policy")
                .with_code("42501")
                .with_status(403));
        }
        let mut rows = self.inquiries.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|i| &i.id == inquiry_id) {
            row.status = status;
        }
        Ok(())
    }

    async fn list_catalog(
        &self,
        _seller_id: &SellerId,
        kind: CatalogKind,
    ) -> GatewayResult<Vec<CatalogItem>> {
        Ok(match kind {
            CatalogKind::Product => self.products.clone(),
            CatalogKind::Service => self.services.clone(),
        })
    }

    async fn count_inquiries(
        &self,
        _seller_id: &SellerId,
        status: InquiryStatus,
    ) -> GatewayResult<u64> {
        let rows = self.inquiries.lock().unwrap();
        Ok(rows.iter().filter(|i| i.status == status).count() as u64)
    }
}

#[derive(Default)]
struct Launcher {
    opened: Mutex<Vec<String>>,
}

impl ChannelLauncher for Launcher {
    fn launch(&self, message: &OutboundMessage) -> Result<(), LaunchError> {
        self.opened.lock().unwrap().push(message.deep_link());
        Ok(())
    }
}

async fn open(backend: Backend) -> SellerSession<Backend> {
    match SellerSession::open(backend, &UserId::new("user-42")).await.unwrap() {
        SessionStart::Ready(session) => session,
        SessionStart::NotOnboarded => panic!("seller should exist"),
    }
}

fn visible_ids(session: &SellerSession<Backend>) -> Vec<String> {
    session
        .visible_inquiries()
        .iter()
        .map(|i| i.id.to_string())
        .collect()
}

#[tokio::test]
async fn test_unknown_user_is_routed_to_onboarding() {
    let start = SellerSession::open(Backend::new(), &UserId::new("someone-else"))
        .await
        .unwrap();
    assert!(matches!(start, SessionStart::NotOnboarded));
}

#[tokio::test]
async fn test_inbox_filters_and_searches() {
    let mut session = open(Backend::new()).await;
    assert_eq!(session.refresh_inquiries().await.unwrap(), 3);

    assert_eq!(visible_ids(&session), ["a", "b", "c"]);

    session.set_filter(StatusFilter::Only(InquiryStatus::New));
    assert_eq!(visible_ids(&session), ["a", "c"]);

    session.set_search("wedding");
    assert_eq!(visible_ids(&session), ["c"]);

    session.set_filter(StatusFilter::All);
    session.set_search("ADA");
    assert_eq!(visible_ids(&session), ["a"]);
}

#[tokio::test]
async fn test_reply_then_close_round_trips_through_backend() {
    let mut session = open(Backend::new()).await;
    session.refresh_inquiries().await.unwrap();
    let launcher = Launcher::default();
    let id = InquiryId::new("a");

    let message = session
        .reply(&launcher, &id, "We bake it fresh every Saturday.")
        .await
        .unwrap();

    assert_eq!(message.kind(), ChannelKind::Email);
    let opened = launcher.opened.lock().unwrap().clone();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].starts_with("mailto:ada@example.com?subject=Re%3A%20Your%20inquiry%20about%20Rye%20Loaf"));
    assert_eq!(session.gateway().status_of("a"), Some(InquiryStatus::Replied));

    session.transition(&id, InquiryStatus::Closed).await.unwrap();
    session.refresh_inquiries().await.unwrap();
    assert_eq!(
        session.inquiries().get(&id).map(|i| i.status),
        Some(InquiryStatus::Closed)
    );
}

#[tokio::test]
async fn test_rejected_write_keeps_local_state() {
    let backend = Backend {
        reject_writes: true,
        ..Backend::new()
    };
    let mut session = open(backend).await;
    session.refresh_inquiries().await.unwrap();

    let err = session
        .transition(&InquiryId::new("c"), InquiryStatus::Closed)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Update { .. }));
    assert_eq!(
        session.inquiries().get(&InquiryId::new("c")).map(|i| i.status),
        Some(InquiryStatus::New)
    );
}

#[tokio::test]
async fn test_dashboard_reflects_backend() {
    let mut session = open(Backend::new()).await;

    let stats = session.refresh_dashboard().await.unwrap();

    assert_eq!(
        stats,
        DashboardStats {
            total_products: 2,
            total_services: 1,
            total_views: 17,
            new_inquiries: 2,
        }
    );
    assert_eq!(session.stats(), stats);
}

#[tokio::test]
async fn test_guide_uses_seller_storefront() {
    let session = open(Backend::new()).await;
    let url = session.seller().storefront_url("https://market.example");
    let mut guide = GuideNavigator::new(onboarding_steps(&url));

    while guide.current().and_then(|s| s.action.as_ref()).is_none() {
        assert!(guide.next(), "guide should offer an action");
    }

    assert_eq!(guide.current().unwrap().title, "Share your store link");
}
