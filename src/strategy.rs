//! The ways of checking the concrete type behind a `dyn Abstraction`.

use crate::identity::{simple_name, Abstraction, TypeDescriptor};
use std::fmt::{Display, Formatter};

/// An identity-check strategy.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Compares the cached type name against the simple name of the target type.
    NameComparison,
    /// Asks whether the instance is of the target type without binding it.
    TypeTest,
    /// Attempts a checked downcast to the target type and tests for `Some`.
    SafeCast,
    /// Compares the instance's runtime [`TypeDescriptor`] to the target's.
    ReflectedType,
}

impl Strategy {
    /// All strategies, in measurement order.
    pub const ALL: [Strategy; 4] = [
        Strategy::NameComparison,
        Strategy::TypeTest,
        Strategy::SafeCast,
        Strategy::ReflectedType,
    ];

    /// A human-readable label.
    pub fn label(&self) -> &'static str {
        use Strategy::*;
        match self {
            NameComparison => "Name comparison",
            TypeTest => "Type test",
            SafeCast => "Safe cast",
            ReflectedType => "Reflected type",
        }
    }

    /// Performs this check once: is `instance` a `T`?
    pub fn matches<T: Abstraction>(&self, instance: &dyn Abstraction) -> bool {
        use Strategy::*;
        match self {
            NameComparison => name_comparison(instance, simple_name::<T>()),
            TypeTest => type_test::<T>(instance),
            SafeCast => safe_cast::<T>(instance),
            ReflectedType => reflected_type(instance, &TypeDescriptor::of::<T>()),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the cached name of `instance` equals `name`.
#[inline]
pub fn name_comparison(instance: &dyn Abstraction, name: &str) -> bool {
    instance.type_name() == name
}

/// Whether `instance` is a `T`.
#[inline]
pub fn type_test<T: Abstraction>(instance: &dyn Abstraction) -> bool {
    instance.is::<T>()
}

/// Whether `instance` can be downcast to a `T`.
#[inline]
pub fn safe_cast<T: Abstraction>(instance: &dyn Abstraction) -> bool {
    instance.downcast_ref::<T>().is_some()
}

/// Whether the runtime descriptor of `instance` equals `descriptor`.
///
/// Materialising the descriptor does the work of [`type_test`] plus a name lookup.
#[inline]
pub fn reflected_type(instance: &dyn Abstraction, descriptor: &TypeDescriptor) -> bool {
    instance.descriptor() == *descriptor
}
