//! In-memory gateway used by unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::catalog::{CatalogItem, CatalogKind};
use crate::gateway::{Gateway, GatewayError, GatewayResult};
use crate::inquiry::{Inquiry, InquiryId, InquiryItem, InquiryStatus};
use crate::seller::{Seller, SellerId, UserId};

/// Builds an inquiry created `minute` minutes past a fixed hour.
pub fn inquiry(id: &str, name: &str, status: InquiryStatus, minute: u32) -> Inquiry {
    Inquiry {
        id: InquiryId::new(id),
        customer_name: name.to_string(),
        email: None,
        phone: None,
        message: format!("Message from {name}"),
        created_at: Utc
            .with_ymd_and_hms(2026, 3, 1, 10, minute, 0)
            .single()
            .unwrap_or_default(),
        status,
        item: None,
    }
}

/// Builds an inquiry about a product.
pub fn product_inquiry(id: &str, name: &str, product: &str) -> Inquiry {
    Inquiry {
        item: Some(InquiryItem::Product(product.to_string())),
        ..inquiry(id, name, InquiryStatus::New, 0)
    }
}

pub fn seller() -> Seller {
    Seller {
        id: SellerId::new("seller-1"),
        user_id: UserId::new("user-1"),
        business_name: "Ada's Bakery".to_string(),
        slug: Some("ada-bakery".to_string()),
        phone: None,
        email: None,
    }
}

#[derive(Debug, Default)]
pub struct MockGateway {
    pub seller: Option<Seller>,
    pub inquiries: Vec<Inquiry>,
    pub products: Vec<CatalogItem>,
    pub services: Vec<CatalogItem>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub fail_catalog: Option<CatalogKind>,
    pub seller_error: Option<GatewayError>,
    pub updates: Mutex<Vec<(InquiryId, InquiryStatus)>>,
}

impl MockGateway {
    pub fn with_inquiries(inquiries: Vec<Inquiry>) -> Self {
        Self {
            seller: Some(seller()),
            inquiries,
            ..Self::default()
        }
    }

    pub fn updates(&self) -> Vec<(InquiryId, InquiryStatus)> {
        self.updates.lock().map(|u| u.clone()).unwrap_or_default()
    }

    fn read_guard(&self) -> GatewayResult<()> {
        if self.fail_reads {
            Err(GatewayError::new("connection reset").with_status(503))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn find_seller(&self, _user_id: &UserId) -> GatewayResult<Option<Seller>> {
        self.read_guard()?;
        if let Some(e) = &self.seller_error {
            return Err(e.clone());
        }
        Ok(self.seller.clone())
    }

    async fn list_inquiries(&self, _seller_id: &SellerId) -> GatewayResult<Vec<Inquiry>> {
        self.read_guard()?;
        Ok(self.inquiries.clone())
    }

    async fn update_inquiry_status(
        &self,
        _seller_id: &SellerId,
        inquiry_id: &InquiryId,
        status: InquiryStatus,
    ) -> GatewayResult<()> {
        if self.fail_writes {
            return Err(GatewayError::new("permission denied").with_code("42501"));
        }
        if let Ok(mut updates) = self.updates.lock() {
            updates.push((inquiry_id.clone(), status));
        }
        Ok(())
    }

    async fn list_catalog(
        &self,
        _seller_id: &SellerId,
        kind: CatalogKind,
    ) -> GatewayResult<Vec<CatalogItem>> {
        self.read_guard()?;
        if self.fail_catalog == Some(kind) {
            return Err(GatewayError::new("relation does not exist").with_code("42P01"));
        }
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
        self.read_guard()?;
        Ok(self.inquiries.iter().filter(|i| i.status == status).count() as u64)
    }
}
