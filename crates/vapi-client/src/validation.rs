//! Identifier validation.

/// Check for the canonical 8-4-4-4-12 hex UUID form, case-insensitive.
///
/// Braces, URNs and the simple (hyphenless) form are rejected.
pub fn is_uuid(value: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    let mut parts = value.split('-');
    for expected in GROUPS {
        match parts.next() {
            Some(part) if part.len() == expected && part.bytes().all(|b| b.is_ascii_hexdigit()) => {}
            _ => return false,
        }
    }
    parts.next().is_none()
}
