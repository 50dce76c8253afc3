//! Constant names that every generated class already defines.

/// Project name (`String`).
pub const PROJECT_NAME: &str = "PROJECT_NAME";
/// Project version (`String`).
pub const PROJECT_VERSION: &str = "PROJECT_VERSION";
/// Project group (`String`).
pub const PROJECT_GROUP: &str = "PROJECT_GROUP";
/// Build time in milliseconds since the Unix epoch (`long`).
pub const BUILD_TIME: &str = "BUILD_TIME";
/// Build time as an ISO-8601 UTC timestamp (`String`).
pub const BUILD_DATE: &str = "BUILD_DATE";

/// The standard constants, in the order they are emitted.
pub const RESERVED_CONSTANT_NAMES: &[&str] = &[PROJECT_NAME, PROJECT_VERSION, PROJECT_GROUP, BUILD_TIME, BUILD_DATE];

/// Check whether a name collides with one of the standard constants.
///
/// ## Notes
/// - Comparison is exact; `project_name` is not reserved.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_CONSTANT_NAMES.contains(&name)
}
