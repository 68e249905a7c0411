pub mod dto;
pub mod handlers;
mod journal;
mod logfile;
mod reconcile;
mod services;
pub mod store;
pub mod targets;

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    handlers::read_routes()
}

/// Zero-pads an extracted `H:MM` clock string to the fixed-width `HH:MM`
/// form that serves as sort and dedup key.
pub(crate) fn normalize_time(raw: &str) -> String {
    format!("{:0>5}", raw.trim())
}

#[cfg(test)]
mod tests {
    use super::normalize_time;

    #[test]
    fn pads_single_digit_hours() {
        assert_eq!(normalize_time("8:35"), "08:35");
        assert_eq!(normalize_time("08:35"), "08:35");
        assert_eq!(normalize_time(" 9:05 "), "09:05");
    }
}
