//! Presence rules.
//!
//! Decides, before any shape check runs, whether a field's value is absent,
//! missing in violation of `required`, or present and due for further checks.
//!
//! | required | dirty | unset            | null             |
//! |----------|-------|------------------|------------------|
//! | no       | any   | skip             | skip             |
//! | yes      | no    | `FIELD_REQUIRED` | `FIELD_REQUIRED` |
//! | yes      | yes   | `FIELD_REQUIRED` | skip             |

use modelcheck_core::{FieldSpec, FieldValue, Value};

/// Outcome of the presence check for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presence<'a> {
    /// Absent and allowed to be; no further checks
    Absent,
    /// Absent in violation of `required`
    Missing,
    /// Holds a value that must pass the shape checks
    Present(&'a Value),
}

/// Applies the required/dirty rules to a field value.
///
/// `dirty` waives `required` for an explicit null only: a caller that cleared
/// the field passes, a caller that never touched it does not.
pub fn check_presence<'a>(spec: &FieldSpec, value: &'a FieldValue) -> Presence<'a> {
    match value {
        FieldValue::Unset if spec.required() => Presence::Missing,
        FieldValue::Null if spec.required() && !spec.dirty() => Presence::Missing,
        FieldValue::Unset | FieldValue::Null => Presence::Absent,
        FieldValue::Present(v) => Presence::Present(v),
    }
}
