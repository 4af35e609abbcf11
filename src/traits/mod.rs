pub mod confirm;
pub mod field_type;
pub mod media;

pub use confirm::{AcceptAll, Confirm};
pub use field_type::{FieldType, InputConstraint, ValueKind};
pub use media::{FacingMode, MediaAccessError, MediaDevices, MediaStream, VideoConstraints};
