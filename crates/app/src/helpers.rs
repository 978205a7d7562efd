//! Pure helpers for the dashboard and intake form.

use shared_types::{RequestStatus, ServiceRequest};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an RFC 3339 timestamp as "Jan 20, 2026 at 9:35 PM".
///
/// Falls back to the raw string when the timestamp is too short or
/// malformed; the gateway does not guarantee well-formed values.
pub fn format_requested_at(date_str: &str) -> String {
    let (Some(year), Some(month_str), Some(day_str)) =
        (date_str.get(..4), date_str.get(5..7), date_str.get(8..10))
    else {
        return date_str.to_string();
    };
    let month: usize = match month_str.parse() {
        Ok(m) if (1..=12).contains(&m) => m,
        _ => return date_str.to_string(),
    };
    let day: u32 = match day_str.parse() {
        Ok(d) => d,
        Err(_) => return date_str.to_string(),
    };
    let date_part = format!("{} {}, {}", MONTH_NAMES[month - 1], day, year);

    // Time portion needs at least "YYYY-MM-DDTHH:MM"
    let (Some(hour_str), Some(minutes)) = (date_str.get(11..13), date_str.get(14..16)) else {
        return date_part;
    };
    let hour: u32 = match hour_str.parse() {
        Ok(h) if h < 24 => h,
        _ => return date_part,
    };
    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{date_part} at {display_hour}:{minutes} {ampm}")
}

/// Reformat a phone field to `(XXX) XXX-XXXX` as the user types.
///
/// Non-digits are stripped, digits are capped at ten, and the mask grows
/// with the input so deleting characters works naturally.
pub fn format_phone_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(10).collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// Conjunctive filter predicate for the dashboard list.
///
/// `service_filter` and `status_filter` use `None` for "All"; the search
/// term matches case-insensitively against customer name, service type,
/// and description, with the empty string matching everything.
pub fn request_matches(
    request: &ServiceRequest,
    service_filter: Option<&str>,
    status_filter: Option<RequestStatus>,
    search: &str,
) -> bool {
    let matches_service = service_filter.is_none_or(|s| request.service_type == s);
    let matches_status = status_filter.is_none_or(|s| request.status == s);
    let needle = search.trim().to_lowercase();
    let matches_search = needle.is_empty()
        || request.customer_name.to_lowercase().contains(&needle)
        || request.service_type.to_lowercase().contains(&needle)
        || request.description.to_lowercase().contains(&needle);
    matches_service && matches_status && matches_search
}

/// Distinct service types observed in the list, sorted for the filter menu.
pub fn distinct_service_types(requests: &[ServiceRequest]) -> Vec<String> {
    let mut types: Vec<String> = requests.iter().map(|r| r.service_type.clone()).collect();
    types.sort();
    types.dedup();
    types
}

/// Count of requests per status, zero-filled across every status.
pub fn status_counts(requests: &[ServiceRequest]) -> Vec<(RequestStatus, usize)> {
    RequestStatus::ALL
        .into_iter()
        .map(|status| {
            let count = requests.iter().filter(|r| r.status == status).count();
            (status, count)
        })
        .collect()
}

/// Build the pre-filled `mailto:` URI for the Send Quote action.
///
/// Subject and body are percent-encoded; the recipient address is used
/// verbatim since encoding `@` breaks some mail clients.
pub fn quote_mailto_url(request: &ServiceRequest) -> String {
    let subject = format!("Quote for {}", request.service_type);
    let body = format!(
        "Hello {},\n\nHere is the quote for your requested service: {}.\n\nThanks,\nOne Way Electric",
        request.customer_name, request.service_type
    );
    format!(
        "mailto:{}?subject={}&body={}",
        request.customer_email,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}
