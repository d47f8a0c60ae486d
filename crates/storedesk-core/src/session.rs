//! Seller session context.
//!
//! Everything the dashboard and inbox screens need for one authenticated
//! seller, passed explicitly instead of living in global state. A session is
//! discarded when the seller navigates away; nothing in it outlives that.

use tracing::{info, warn};

use crate::gateway::Gateway;
use crate::inquiry::{
    FilterCriteria, Inquiry, InquiryId, InquiryStatus, InquiryStore, StatusFilter, filter_inquiries,
};
use crate::seller::{Seller, UserId};
use crate::service::{
    ChannelLauncher, DashboardStats, OutboundMessage, load_dashboard, send_reply,
    transition_status,
};
use crate::{Error, Result};

/// Outcome of opening a session.
#[derive(Debug)]
pub enum SessionStart<G> {
    /// The user has a seller record.
    Ready(SellerSession<G>),
    /// The user has not onboarded as a seller yet.
    NotOnboarded,
}

/// State for one authenticated seller.
#[derive(Debug)]
pub struct SellerSession<G> {
    gateway: G,
    seller: Seller,
    inquiries: InquiryStore,
    criteria: FilterCriteria,
    stats: DashboardStats,
}

impl<G: Gateway> SellerSession<G> {
    /// Look up the user's seller record and start a session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a blank user id and [`Error::Fetch`] if
    /// the lookup fails. A missing seller record is not an error; it yields
    /// [`SessionStart::NotOnboarded`], whether the gateway reports it as no
    /// seller or as the backend's "no rows" code.
    pub async fn open(gateway: G, user_id: &UserId) -> Result<SessionStart<G>> {
        if user_id.as_str().trim().is_empty() {
            return Err(Error::Config("no user id configured".to_string()));
        }

        match gateway.find_seller(user_id).await {
            Ok(Some(seller)) => {
                info!("Opened session for seller {} ({})", seller.business_name, seller.id);
                Ok(SessionStart::Ready(Self::new(gateway, seller)))
            }
            Ok(None) => {
                info!("User {user_id} has no seller record yet");
                Ok(SessionStart::NotOnboarded)
            }
            Err(e) if e.is_no_rows() => {
                info!("User {user_id} has no seller record yet ({e})");
                Ok(SessionStart::NotOnboarded)
            }
            Err(e) => {
                warn!("Failed to look up seller for user {user_id}: {e}");
                Err(Error::fetch("seller", e))
            }
        }
    }

    /// Start a session for an already-known seller.
    #[must_use]
    pub fn new(gateway: G, seller: Seller) -> Self {
        Self {
            gateway,
            seller,
            inquiries: InquiryStore::new(),
            criteria: FilterCriteria::default(),
            stats: DashboardStats::default(),
        }
    }

    /// The seller this session belongs to.
    #[must_use]
    pub const fn seller(&self) -> &Seller {
        &self.seller
    }

    /// The gateway used by this session.
    #[must_use]
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// The loaded inquiries.
    #[must_use]
    pub const fn inquiries(&self) -> &InquiryStore {
        &self.inquiries
    }

    /// Current filter criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Last computed dashboard stats.
    #[must_use]
    pub const fn stats(&self) -> DashboardStats {
        self.stats
    }

    /// Reload all inquiries. On failure the inbox is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if the gateway call fails.
    pub async fn refresh_inquiries(&mut self) -> Result<usize> {
        self.inquiries.load(&self.gateway, &self.seller.id).await
    }

    /// Set the status selector.
    pub fn set_filter(&mut self, status: StatusFilter) {
        self.criteria.status = status;
    }

    /// Set the free-text search term.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
    }

    /// Inquiries matching the current criteria, newest first.
    #[must_use]
    pub fn visible_inquiries(&self) -> Vec<&Inquiry> {
        filter_inquiries(self.inquiries.as_slice(), &self.criteria)
    }

    /// Change one inquiry's status.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Update`] if the remote write fails.
    pub async fn transition(&mut self, inquiry_id: &InquiryId, target: InquiryStatus) -> Result<()> {
        transition_status(
            &self.gateway,
            &mut self.inquiries,
            &self.seller.id,
            inquiry_id,
            target,
        )
        .await
    }

    /// Reply to an inquiry through the given launcher and mark it replied.
    ///
    /// # Errors
    ///
    /// See [`send_reply`].
    pub async fn reply<L>(
        &mut self,
        launcher: &L,
        inquiry_id: &InquiryId,
        body: &str,
    ) -> Result<OutboundMessage>
    where
        L: ChannelLauncher + ?Sized,
    {
        send_reply(
            &self.gateway,
            launcher,
            &mut self.inquiries,
            &self.seller.id,
            inquiry_id,
            body,
        )
        .await
    }

    /// Recompute the dashboard stats. On failure the stats reset to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if any of the underlying reads fails.
    pub async fn refresh_dashboard(&mut self) -> Result<DashboardStats> {
        match load_dashboard(&self.gateway, &self.seller.id).await {
            Ok(stats) => {
                self.stats = stats;
                Ok(stats)
            }
            Err(e) => {
                self.stats = DashboardStats::default();
                Err(e)
            }
        }
    }
}
