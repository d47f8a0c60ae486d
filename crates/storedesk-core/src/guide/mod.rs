//! Onboarding guide shown to sellers after they open their store.
//!
//! A fixed list of instructional steps, paged one at a time. Some steps offer
//! a copy or download action. Nothing here touches business data.

mod model;
mod navigator;

pub use model::{GuideAction, GuideStep, STORE_URL_PLACEHOLDER, onboarding_steps};
pub use navigator::GuideNavigator;
