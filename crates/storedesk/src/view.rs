//! Plain-text rendering of dashboard and inbox data.

use std::fmt::Write;

use storedesk_core::{DashboardStats, GuideNavigator, Inquiry, Seller};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
const PREVIEW_CHARS: usize = 60;

/// Dashboard summary block.
pub fn dashboard(seller: &Seller, stats: &DashboardStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", seller.business_name);
    let _ = writeln!(out, "  Products       {}", stats.total_products);
    let _ = writeln!(out, "  Services       {}", stats.total_services);
    let _ = writeln!(out, "  Total views    {}", stats.total_views);
    let _ = write!(out, "  New inquiries  {}", stats.new_inquiries);
    out
}

/// Shown instead of the dashboard before the seller has onboarded.
pub fn onboarding_prompt() -> &'static str {
    "Your store is not set up yet.\n\
     Finish onboarding on the marketplace, then run `storedesk guide` for next steps."
}

/// One-line inbox entry.
pub fn inquiry_line(inquiry: &Inquiry) -> String {
    let about = inquiry
        .item_name()
        .map(|name| format!(" [{name}]"))
        .unwrap_or_default();
    format!(
        "{:<8} {:<8} {}  {}{about}: {}",
        inquiry.id.as_str(),
        inquiry.status.display_name(),
        inquiry.created_at.format(TIMESTAMP_FORMAT),
        inquiry.customer_name,
        preview(&inquiry.message)
    )
}

/// Full view of one inquiry.
pub fn inquiry_detail(inquiry: &Inquiry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Inquiry {} ({})", inquiry.id, inquiry.status.display_name());
    let _ = writeln!(out, "From:     {}", inquiry.customer_name);
    if let Some(email) = inquiry.contact_email() {
        let _ = writeln!(out, "Email:    {email}");
    }
    if let Some(phone) = &inquiry.phone {
        let _ = writeln!(out, "Phone:    {phone}");
    }
    if let Some(item) = inquiry.item_name() {
        let _ = writeln!(out, "About:    {item}");
    }
    let _ = writeln!(out, "Received: {}", inquiry.created_at.format(TIMESTAMP_FORMAT));
    let _ = write!(out, "\n{}", inquiry.message);
    out
}

/// Inbox listing with a header and a count.
pub fn inbox(inquiries: &[&Inquiry], total: usize) -> String {
    if inquiries.is_empty() {
        return format!("No inquiries to show ({total} loaded).");
    }
    let mut out = String::new();
    for inquiry in inquiries {
        let _ = writeln!(out, "{}", inquiry_line(inquiry));
    }
    let _ = write!(out, "Showing {} of {total}", inquiries.len());
    out
}

/// The current guide step.
pub fn guide_step(guide: &GuideNavigator) -> String {
    let Some(step) = guide.current() else {
        return "The guide is empty.".to_string();
    };
    let (position, total) = guide.progress();
    let mut out = format!("Step {position} of {total}: {}\n\n{}", step.title, step.body);
    if let Some(action) = &step.action {
        let _ = write!(out, "\n\n[{}]", action.label());
    }
    out
}

/// Single-line preview, truncated on a character boundary.
fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PREVIEW_CHARS {
        flat
    } else {
        let cut: String = flat.chars().take(PREVIEW_CHARS - 1).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use storedesk_core::{InquiryId, InquiryItem, InquiryStatus, SellerId, UserId, onboarding_steps};

    use super::*;

    fn sample() -> Inquiry {
        Inquiry {
            id: InquiryId::new("42"),
            customer_name: "Ada".to_string(),
            email: Some("ada@example.com".to_string()),
            phone: None,
            message: "Do you\ndeliver?".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 10, 15, 0).unwrap(),
            status: InquiryStatus::New,
            item: Some(InquiryItem::Product("Rye Loaf".to_string())),
        }
    }

    #[test]
    fn test_inquiry_line() {
        assert_eq!(
            inquiry_line(&sample()),
            "42       New      2026-03-01 10:15  Ada [Rye Loaf]: Do you deliver?"
        );
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long = "é".repeat(100);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), PREVIEW_CHARS);
        assert!(shown.ends_with('…'));
    }

    #[test]
    fn test_inbox_empty_and_counts() {
        assert_eq!(inbox(&[], 3), "No inquiries to show (3 loaded).");
        let inquiry = sample();
        assert!(inbox(&[&inquiry], 3).ends_with("Showing 1 of 3"));
    }

    #[test]
    fn test_detail_lists_contacts() {
        let detail = inquiry_detail(&sample());
        assert!(detail.contains("Email:    ada@example.com"));
        assert!(!detail.contains("Phone:"));
        assert!(detail.contains("About:    Rye Loaf"));
    }

    #[test]
    fn test_dashboard_block() {
        let seller = Seller {
            id: SellerId::new("s-1"),
            user_id: UserId::new("u-1"),
            business_name: "Ada's Bakery".to_string(),
            slug: None,
            phone: None,
            email: None,
        };
        let stats = DashboardStats {
            total_products: 1,
            total_services: 1,
            total_views: 3,
            new_inquiries: 2,
        };
        let text = dashboard(&seller, &stats);
        assert!(text.starts_with("Ada's Bakery\n"));
        assert!(text.contains("Total views    3"));
        assert!(text.ends_with("New inquiries  2"));
    }

    #[test]
    fn test_guide_step_shows_action() {
        let mut guide = GuideNavigator::new(onboarding_steps("https://market.example/store/ada"));
        guide.go_to(3);
        let text = guide_step(&guide);
        assert!(text.starts_with("Step 4 of 6: Share your store link"));
        assert!(text.ends_with("[Copy store link]"));
    }
}
