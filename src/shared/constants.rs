/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// CATALOG CONSTANTS
// =============================================================================

/// Parent id stored by legacy rows to mean "no parent"
pub const ROOT_PARENT_ID: i64 = 0;

/// Longest breadcrumb separator accepted from a request
pub const MAX_BREADCRUMB_SEPARATOR_LEN: u64 = 16;

/// Longest name filter accepted from a request
pub const MAX_NAME_FILTER_LEN: u64 = 100;
