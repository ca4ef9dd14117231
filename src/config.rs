use log::Level;

pub const BRAND: &str = "CELAIR";
pub const COPYRIGHT_YEAR: u16 = 2025;
pub const CITY: &str = "г. Алматы, Казахстан";

// Distance from the viewport top, in CSS pixels, that decides which section is "in view".
pub const REFERENCE_LINE_PX: f64 = 100.0;

pub const WHATSAPP_NUMBER: &str = "77007492395";

pub fn whatsapp_url() -> String {
    format!("https://wa.me/{}", WHATSAPP_NUMBER)
}

pub fn whatsapp_label() -> String {
    format!("WhatsApp: {}", WHATSAPP_NUMBER)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose listener/navigation logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_points_at_the_contact_number() {
        assert_eq!(whatsapp_url(), "https://wa.me/77007492395");
        assert_eq!(whatsapp_label(), "WhatsApp: 77007492395");
    }
}
