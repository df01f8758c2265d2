//! Form domain layer
//!
//! The prospect record, its field metadata, the presence checks that gate
//! submission and the state machine around a submit attempt.

mod field;
mod form_state;
mod options;
mod record;
mod validation;

pub use field::{FieldId, FieldKind};
pub use form_state::{FormState, SubmissionStatus};
pub use options::{next_option, prev_option, PROGRAMME_OPTIONS, SOURCE_OPTIONS, SPECIALITE_OPTIONS};
pub use record::FormRecord;
pub use validation::{is_valid, missing_required};
