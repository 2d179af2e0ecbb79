use serde::Serialize;

/// Headline numbers of the dashboard.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct DashboardStats {
    pub total_clients: usize,
    /// Registered within the configured window.
    pub new_clients: usize,
    pub registered_clients: usize,
    /// Registered over total, as a percentage rounded to one decimal.
    pub conversion_rate: f64,
    pub interested: usize,
    pub not_interested: usize,
    pub no_answer: usize,
    /// No interest outcome recorded yet.
    pub no_response: usize,
    pub contacted: usize,
    pub not_contacted: usize,
    pub follow_up: usize,
}
