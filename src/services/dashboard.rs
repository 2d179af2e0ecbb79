use chrono::{Days, NaiveDate};

use crate::domain::client::{CallStatus, InterestStatus};
use crate::dto::dashboard::DashboardStats;
use crate::repository::ClientReader;
use crate::services::ServiceResult;

/// Counts over the committed roster. Clients registered within
/// `window_days` before `today` (inclusive) count as new.
pub fn dashboard_stats<R>(repo: &R, today: NaiveDate, window_days: u64) -> ServiceResult<DashboardStats>
where
    R: ClientReader + ?Sized,
{
    let records = repo.roster()?;
    let since = today.checked_sub_days(Days::new(window_days)).unwrap_or(NaiveDate::MIN);

    let mut stats = DashboardStats {
        total_clients: records.len(),
        ..DashboardStats::default()
    };

    for record in records.iter() {
        if record.registered_on >= since && record.registered_on <= today {
            stats.new_clients += 1;
        }
        if record.is_registered() {
            stats.registered_clients += 1;
        }
        match record.interest_status {
            Some(InterestStatus::Interested) => stats.interested += 1,
            Some(InterestStatus::NotInterested) => stats.not_interested += 1,
            Some(InterestStatus::NoAnswer) => stats.no_answer += 1,
            None => stats.no_response += 1,
        }
        match record.call_status {
            CallStatus::Contacted => stats.contacted += 1,
            CallStatus::NotContacted => stats.not_contacted += 1,
        }
        if record.follow_up {
            stats.follow_up += 1;
        }
    }

    if stats.total_clients > 0 {
        let rate = stats.registered_clients as f64 * 100.0 / stats.total_clients as f64;
        stats.conversion_rate = (rate * 10.0).round() / 10.0;
    }

    Ok(stats)
}
