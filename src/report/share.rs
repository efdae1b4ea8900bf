//! Share surfaces — templated share text and social share URLs.

use super::Report;

/// Share copy with the score interpolated.
pub fn share_text(report: &Report) -> String {
    format!(
        "I just checked my interview readiness – scored {}! 🚀",
        report.percent_text()
    )
}

/// WhatsApp share intent URL carrying the share text.
pub fn whatsapp_share_url(report: &Report) -> String {
    format!("https://wa.me/?text={}", urlencoding::encode(&share_text(report)))
}

/// LinkedIn offsite-share URL pointing back at `page_url`.
pub fn linkedin_share_url(page_url: &str) -> String {
    format!(
        "https://www.linkedin.com/sharing/share-offsite/?url={}",
        urlencoding::encode(page_url)
    )
}
