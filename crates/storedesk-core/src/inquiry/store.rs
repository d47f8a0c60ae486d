//! Session-scoped copy of a seller's inquiries.

use tracing::{debug, warn};

use super::model::{Inquiry, InquiryId, InquiryStatus};
use crate::gateway::Gateway;
use crate::seller::SellerId;
use crate::{Error, Result};

/// The client-side copy of a seller's inquiries, newest first.
///
/// Loaded once per session and only mutated through [`InquiryStore::apply_status`].
#[derive(Debug, Clone, Default)]
pub struct InquiryStore {
    inquiries: Vec<Inquiry>,
}

impl InquiryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch all inquiries for a seller, replacing the current contents.
    ///
    /// On failure the store is left empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if the gateway call fails.
    pub async fn load<G>(&mut self, gateway: &G, seller_id: &SellerId) -> Result<usize>
    where
        G: Gateway + ?Sized,
    {
        self.inquiries.clear();
        match gateway.list_inquiries(seller_id).await {
            Ok(inquiries) => {
                self.replace(inquiries);
                debug!("Loaded {} inquiries for seller {seller_id}", self.len());
                Ok(self.len())
            }
            Err(e) => {
                warn!("Failed to load inquiries for seller {seller_id}: {e}");
                Err(Error::fetch("inquiries", e))
            }
        }
    }

    /// Replace the contents, keeping newest-first order.
    pub fn replace(&mut self, mut inquiries: Vec<Inquiry>) {
        inquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.inquiries = inquiries;
    }

    /// Set the status of one inquiry in place.
    ///
    /// Returns `false` if no inquiry has that ID.
    pub fn apply_status(&mut self, id: &InquiryId, status: InquiryStatus) -> bool {
        match self.inquiries.iter_mut().find(|i| &i.id == id) {
            Some(inquiry) => {
                inquiry.status = status;
                true
            }
            None => false,
        }
    }

    /// Look up an inquiry by ID.
    #[must_use]
    pub fn get(&self, id: &InquiryId) -> Option<&Inquiry> {
        self.inquiries.iter().find(|i| &i.id == id)
    }

    /// All inquiries, newest first.
    #[must_use]
    pub fn as_slice(&self) -> &[Inquiry] {
        &self.inquiries
    }

    /// Number of loaded inquiries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inquiries.len()
    }

    /// Check whether nothing is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inquiries.is_empty()
    }

    /// Number of inquiries in the given status.
    #[must_use]
    pub fn count_with_status(&self, status: InquiryStatus) -> usize {
        self.inquiries.iter().filter(|i| i.status == status).count()
    }

    /// Drop everything, e.g. when the session ends.
    pub fn clear(&mut self) {
        self.inquiries.clear();
    }
}
