//! Topic name shape checks.
//!
//! A topic names both a routing key and the schema bound to it. The
//! required shape is `service.domain.event`: exactly two `.` separators,
//! three non-empty segments.

/// Number of dot-separated segments a well-formed topic carries.
pub const SEGMENT_COUNT: usize = 3;

/// Check whether a topic name matches `service.domain.event`.
pub fn is_well_formed(name: &str) -> bool {
    let mut segments = 0usize;
    for segment in name.split('.') {
        if segment.is_empty() {
            return false;
        }
        segments += 1;
        if segments > SEGMENT_COUNT {
            return false;
        }
    }
    segments == SEGMENT_COUNT
}
