/// Prefix of generated field ids (`field-1`, `field-2`, ...)
pub const FIELD_ID_PREFIX: &str = "field-";
/// Highest serialized form schema version this build reads and the one it writes
pub const FORM_SCHEMA_VERSION: u32 = 1;

/// Shown on an empty design surface
pub const EMPTY_CANVAS_TEXT: &str = "Drag fields here or click on field buttons to add them";
/// Shown in the builder when a field's type is not registered
pub const PREVIEW_NOT_AVAILABLE: &str = "Preview not available";
/// Shown in the rendered form when a field's type is not registered
pub const FIELD_TYPE_NOT_SUPPORTED: &str = "Field type not supported";

pub const CONFIRM_DELETE_FIELD: &str = "Delete this field?";
pub const CONFIRM_CLEAR_ALL: &str = "Clear all fields?";

pub const DEFAULT_SUBMIT_TEXT: &str = "Submit";
/// Empty first entry of every select control
pub const SELECT_PROMPT: &str = "-- Select --";
/// Appended to labels of required fields
pub const REQUIRED_MARKER: &str = " *";

/// Data URL prefix of captured scanner images
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";
