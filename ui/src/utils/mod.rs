pub mod time;

use rust_decimal::Decimal;

/// Returns true if the application is running in development mode.
/// Checks if BACKEND_URL contains "localhost" or "127.0.0.1".
pub fn is_dev_mode() -> bool {
    option_env!("BACKEND_URL")
        .map(|url| url.contains("localhost") || url.contains("127.0.0.1"))
        .unwrap_or(false)
}

/// Price in whole crowns when possible, e.g. "1200 Kč".
pub fn format_price(price: Decimal) -> String {
    format!("{} Kč", price.normalize())
}

/// Parse a price typed into an admin form. Accepts a decimal comma.
pub fn parse_price(input: &str) -> Option<Decimal> {
    input.trim().replace(',', ".").parse().ok()
}

/// Ask the browser to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
