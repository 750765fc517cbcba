//! Checks on filesystem metadata: byte length and name/path ceilings.

use crate::walker::FileDescriptor;

pub fn is_empty(desc: &FileDescriptor) -> bool {
    desc.len == 0
}

/// Strictly greater than the ceiling; a file exactly at the maximum passes.
pub fn exceeds_max_size(desc: &FileDescriptor, max_bytes: u64) -> bool {
    desc.len > max_bytes
}

pub fn name_exceeds(desc: &FileDescriptor, max_chars: usize) -> bool {
    desc.name.chars().count() > max_chars
}

/// The full path shares the numeric ceiling with the bare name but is
/// reported at a lower severity upstream.
pub fn path_exceeds(desc: &FileDescriptor, max_chars: usize) -> bool {
    desc.path.chars().count() > max_chars
}
