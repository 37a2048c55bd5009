//! The types whose concrete kind gets identified.
//!
//! [`Abstraction`] is the base every measured type implements. Its implementors embed a
//! [`Base`], which caches the simple name of the most-derived type when the value is
//! constructed.

use downcast_rs::{impl_downcast, Downcast};
use std::any::{type_name, Any, TypeId};
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

pub use type_identity_bench_derive::Abstraction;

/// A polymorphic object whose concrete kind must be identified.
///
/// Implement this with `#[derive(Abstraction)]` on a struct that has a `base: Base` field.
/// `dyn Abstraction` gets `is`, `downcast_ref` and friends from [`downcast_rs`].
pub trait Abstraction: Downcast + 'static {
    /// The [`Base`] holding the cached identity of this value.
    fn base(&self) -> &Base;

    /// The simple name of the concrete type, captured at construction.
    #[inline]
    fn type_name(&self) -> &str {
        self.base().type_name()
    }

    /// The fully qualified name of the concrete type.
    fn qualified_type_name(&self) -> &'static str {
        type_name::<Self>()
    }
}
impl_downcast!(Abstraction);

impl dyn Abstraction {
    /// Builds the runtime [`TypeDescriptor`] of the concrete type.
    ///
    /// The id is read through the same `as_any` / `Any::type_id` dispatch that `is` uses,
    /// and the name through one more dynamic call, so this always costs at least a type test.
    pub fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            id: self.as_any().type_id(),
            name: self.qualified_type_name(),
        }
    }
}

/// The state shared by every [`Abstraction`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Base {
    /// The simple name of the most-derived type.
    type_name: &'static str,
}

impl Base {
    /// Creates a [`Base`] for the concrete type `T`.
    ///
    /// Call this from the constructor of `T` with `Self` so the cached name
    /// always belongs to the most-derived type.
    pub fn of<T: ?Sized>() -> Self {
        Base {
            type_name: simple_name::<T>(),
        }
    }

    /// The cached simple type name.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// A runtime-queryable description of a concrete type.
///
/// Two descriptors are equal iff they describe the same [`TypeId`]. The name is
/// carried for display only.
#[derive(Copy, Clone)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    /// Gets the [`TypeDescriptor`] of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeDescriptor {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The [`TypeId`] of the described type.
    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The fully qualified name of the described type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The unqualified name of the described type.
    pub fn simple_name(&self) -> &'static str {
        strip_path(self.name)
    }
}

impl PartialEq for TypeDescriptor {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Debug for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TypeDescriptor").field(&self.name).finish()
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Gets the simple (unqualified) name of `T`.
///
/// The module path and any generic arguments are removed, so
/// `my_crate::shapes::Square<f32>` becomes `Square`.
pub fn simple_name<T: ?Sized>() -> &'static str {
    strip_path(type_name::<T>())
}

/// Removes the module path and generic arguments from a full type name.
fn strip_path(full: &'static str) -> &'static str {
    let without_generics = match full.find('<') {
        Some(idx) => &full[..idx],
        None => full,
    };
    match without_generics.rfind("::") {
        Some(idx) => &without_generics[idx + 2..],
        None => without_generics,
    }
}

/// The concrete type the benchmarks identify.
#[derive(Abstraction, Clone, Debug)]
pub struct ConcreteType {
    base: Base,
}

impl ConcreteType {
    /// Creates a new [`ConcreteType`].
    pub fn new() -> Self {
        ConcreteType {
            base: Base::of::<Self>(),
        }
    }
}

impl Default for ConcreteType {
    fn default() -> Self {
        Self::new()
    }
}
