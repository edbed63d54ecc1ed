//! Binding/native enum parity checking
//!
//! Every safe enum that mirrors a native enum contributes an [`EnumBinding`]
//! to a static registry. [`verify_bindings`] walks the registry and checks,
//! by member name and by value, that the safe side still agrees with the
//! constants transcribed from the engine headers. Mismatches are aggregated
//! into one error so a header bump reports every drifted member at once.

use crate::enums;
use crate::error::{Result, SupersonicError};
use std::fmt;

/// Declares that a safe enum mirrors a native one, member for member.
#[derive(Debug)]
pub struct EnumBinding {
    pub enum_name: &'static str,
    pub native_name: &'static str,
    /// `(member, discriminant)` pairs of the safe enum.
    pub members: &'static [(&'static str, i64)],
    /// `(member, value)` pairs from the native headers in [`crate::ffi`].
    pub native_members: &'static [(&'static str, i64)],
}

/// One native member whose safe counterpart is missing or has drifted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMismatch {
    pub enum_name: &'static str,
    pub member: &'static str,
    pub expected: i64,
    pub actual: Option<i64>,
}

impl fmt::Display for EnumMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.actual {
            Some(actual) => write!(
                f,
                "{}::{} is {} but the native value is {}",
                self.enum_name, self.member, actual, self.expected
            ),
            None => write!(
                f,
                "{} has no member for native {} (= {})",
                self.enum_name, self.member, self.expected
            ),
        }
    }
}

/// All enums carrying a native equivalence declaration. New mirrored enums
/// must be added here or the parity check will not see them.
pub fn registry() -> &'static [&'static EnumBinding] {
    &[
        &enums::BankLoadingFlags::BINDING,
        &enums::LoadingState::BINDING,
        &enums::TimeUnit::BINDING,
        &enums::OpenState::BINDING,
    ]
}

fn check_binding(binding: &EnumBinding, out: &mut Vec<EnumMismatch>) {
    for &(member, expected) in binding.native_members {
        let actual = binding
            .members
            .iter()
            .find(|(name, _)| *name == member)
            .map(|&(_, value)| value);

        if actual != Some(expected) {
            out.push(EnumMismatch {
                enum_name: binding.enum_name,
                member,
                expected,
                actual,
            });
        }
    }
}

/// Verify every registered enum against the native headers, aggregating all
/// mismatches. Invoked from the gate after a successful load in debug builds,
/// and directly by tests.
pub fn verify_bindings() -> Result<()> {
    let mut mismatches = Vec::new();
    for binding in registry() {
        check_binding(binding, &mut mismatches);
    }

    if mismatches.is_empty() {
        log::debug!(
            "enum compatibility check passed for {} binding(s)",
            registry().len()
        );
        Ok(())
    } else {
        Err(SupersonicError::CompatibilityMismatch(mismatches))
    }
}
