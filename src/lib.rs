//! Compile-time scans over statically composed trees.
//!
//! A tree is declared once as a type. [`domain::CompositeNode`] owns a
//! type-level list of children, [`domain::ValueNode`] owns one scalar, and
//! both carry a name tag type. [`scan::scan`] applies an operation to every
//! direct child of a node in declaration order; because the child list is a
//! type, the scan is resolved entirely at compile time and there is no
//! dynamic dispatch.
//!
//! ```
//! use treescan::children;
//! use treescan::domain::{CompositeNode, Node, ValueNode, I0};
//!
//! treescan::name! {
//!     pub Point = "point";
//!     pub X = "x";
//!     pub Y = "y";
//! }
//!
//! type P = CompositeNode<Point, children![ValueNode<X, i32>, ValueNode<Y, i32>]>;
//!
//! let mut a = P::new();
//! let mut b = P::new();
//! a.child_mut::<I0>().set(2);
//! b.child_mut::<I0>().set(3);
//! a += &b;
//!
//! let mut out = Vec::new();
//! a.print("a", &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "a point x == 5\na point y == 0\n");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod exitcode;
pub mod ops;
pub mod random;
pub mod sample;
pub mod scan;
pub mod tree_traits;
pub mod util;

pub use domain::{CompositeNode, Name, Node, Scalar, ValueNode};
pub use errors::{TreeError, TreeResult};
pub use random::RandomSource;
pub use scan::{scan, scan_mut, Visitor, VisitorMut};
