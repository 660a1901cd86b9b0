//! Canonical field keys and event names for structured logging

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_CONTENT_ITEM_ID: &str = "content_item_id";
pub const FIELD_EDITION_ID: &str = "edition_id";
pub const FIELD_VERSION_NUMBER: &str = "version_number";
pub const FIELD_LGSL_CODE: &str = "lgsl_code";

// Collection sizes
pub const FIELD_PART_COUNT: &str = "part_count";
pub const FIELD_ACTION_COUNT: &str = "action_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
