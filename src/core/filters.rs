use crate::models::{LaunchRecord, PayloadRange, SiteSelection};

/// Check if a record belongs to the selected site
///
/// `ALL` keeps every record; a concrete site is an exact, case sensitive match.
#[inline]
pub fn matches_site(record: &LaunchRecord, selection: &SiteSelection) -> bool {
    selection.matches(&record.site)
}

/// Check if a record's payload lies inside the inclusive range
#[inline]
pub fn matches_payload(record: &LaunchRecord, range: &PayloadRange) -> bool {
    range.contains(record.payload_mass_kg)
}

#[inline]
pub fn is_success(record: &LaunchRecord) -> bool {
    record.outcome.is_success()
}
