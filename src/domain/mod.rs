//! Static composition model
//!
//! Tree shapes are types: a composite's children are a type-level list fixed
//! at declaration, so which children exist, their order and their types are
//! all checked before the program runs. Only leaf values change at runtime.

pub mod hlist;
pub mod name;
pub mod node;
pub mod scalar;

pub use hlist::{At, ChildList, HCons, HNil, Lens, I0, I1, I2, I3, I4, I5, I6, I7, I8, I9, S, Z};
pub use name::Name;
pub use node::{Children, CompositeNode, Node, ValueNode};
pub use scalar::Scalar;
