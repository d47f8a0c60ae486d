//! Seller dashboard summary counters.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{CatalogItem, CatalogKind};
use crate::gateway::Gateway;
use crate::inquiry::InquiryStatus;
use crate::seller::SellerId;
use crate::{Error, Result};

/// Summary counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Number of listed products.
    pub total_products: usize,
    /// Number of listed services.
    pub total_services: usize,
    /// Storefront views across all products and services.
    pub total_views: u64,
    /// Inquiries still waiting for a reply.
    pub new_inquiries: u64,
}

impl DashboardStats {
    /// Compute stats from fetched collections.
    ///
    /// Missing view counts count as zero.
    #[must_use]
    pub fn aggregate(products: &[CatalogItem], services: &[CatalogItem], new_inquiries: u64) -> Self {
        let total_views = products
            .iter()
            .chain(services)
            .map(CatalogItem::views)
            .fold(0u64, u64::saturating_add);

        Self {
            total_products: products.len(),
            total_services: services.len(),
            total_views,
            new_inquiries,
        }
    }
}

/// Fetch products, services and the new-inquiry count concurrently and
/// aggregate them.
///
/// The three reads always run to completion; if any one fails the whole
/// load fails.
///
/// # Errors
///
/// Returns [`Error::Fetch`] naming the failed read, checked in the order
/// products, services, inquiry count.
pub async fn load_dashboard<G>(gateway: &G, seller_id: &SellerId) -> Result<DashboardStats>
where
    G: Gateway + ?Sized,
{
    let products = async {
        gateway
            .list_catalog(seller_id, CatalogKind::Product)
            .await
            .map_err(|e| Error::fetch("products", e))
    };
    let services = async {
        gateway
            .list_catalog(seller_id, CatalogKind::Service)
            .await
            .map_err(|e| Error::fetch("services", e))
    };
    let new_inquiries = async {
        gateway
            .count_inquiries(seller_id, InquiryStatus::New)
            .await
            .map_err(|e| Error::fetch("inquiry count", e))
    };

    // All three reads settle before any failure is reported.
    let (products, services, new_inquiries) = tokio::join!(products, services, new_inquiries);
    let stats = match (products, services, new_inquiries) {
        (Ok(products), Ok(services), Ok(new_inquiries)) => {
            DashboardStats::aggregate(&products, &services, new_inquiries)
        }
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            warn!("Dashboard load failed for seller {seller_id}: {e}");
            return Err(e);
        }
    };
    debug!("Dashboard stats for seller {seller_id}: {stats:?}");
    Ok(stats)
}
