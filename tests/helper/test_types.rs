#![allow(unused)]
//! Extra `Abstraction` implementors for use in tests.

use type_identity_bench::{Abstraction, Base};

/// Another variant, distinct from `ConcreteType`.
#[derive(Abstraction, Clone, Debug)]
pub struct OtherType {
    base: Base,
}
impl OtherType {
    pub fn new() -> Self {
        OtherType {
            base: Base::of::<Self>(),
        }
    }
}

/// A variant declared in a nested module, to check that the module path is stripped.
pub mod nested {
    use type_identity_bench::{Abstraction, Base};

    #[derive(Abstraction, Clone, Debug)]
    pub struct NestedType {
        base: Base,
        pub payload: u32,
    }
    impl NestedType {
        pub fn new(payload: u32) -> Self {
            NestedType {
                base: Base::of::<Self>(),
                payload,
            }
        }
    }
}

/// A generic variant, to check that generic arguments are stripped.
#[derive(Abstraction, Clone, Debug)]
pub struct GenericType<T: Clone + 'static> {
    base: Base,
    pub value: T,
}
impl<T: Clone + 'static> GenericType<T> {
    pub fn new(value: T) -> Self {
        GenericType {
            base: Base::of::<Self>(),
            value,
        }
    }
}

/// A type whose constructor caches another type's name.
///
/// Name comparison can only see the cached name, so it is fooled by this.
#[derive(Abstraction, Clone, Debug)]
pub struct Impostor {
    base: Base,
}
impl Impostor {
    pub fn new() -> Self {
        Impostor {
            base: Base::of::<type_identity_bench::ConcreteType>(),
        }
    }
}
