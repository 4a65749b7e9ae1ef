//! Promo grid entries shown on the home page.

#[cfg(test)]
#[path = "promo_test.rs"]
mod promo_test;

/// One image/caption pair in the promo grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PromoImageEntry {
    pub image_url: &'static str,
    /// Multi-word caption, laid out on two lines.
    pub top_text: &'static str,
    /// Short label shown in the badge under the caption.
    pub bottom_text: &'static str,
}

pub const PROMO_ENTRIES: [PromoImageEntry; 6] = [
    PromoImageEntry {
        image_url: "/promo/traffic-control.svg",
        top_text: "TRAFIC\u{3000}CONTROL",
        bottom_text: "交通誘導警備",
    },
    PromoImageEntry {
        image_url: "/promo/facility-security.svg",
        top_text: "FACILITY\u{3000}SECURITY",
        bottom_text: "施設警備",
    },
    PromoImageEntry {
        image_url: "/promo/transport-security.svg",
        top_text: "TRANSPORT\u{3000}SECURITY",
        bottom_text: "輸送警備",
    },
    PromoImageEntry {
        image_url: "/promo/executive-protection.svg",
        top_text: "EXECUTIVE\u{3000}PROTECTION",
        bottom_text: "要人警護",
    },
    PromoImageEntry {
        image_url: "/promo/risk-management.svg",
        top_text: "RISK\u{3000}MANAGEMENT",
        bottom_text: "リスクマネジメント",
    },
    PromoImageEntry {
        image_url: "/promo/other-service.svg",
        top_text: "OTHER\u{3000}SERVICE",
        bottom_text: "その他のサービス",
    },
];
