//! Composite and value nodes
//!
//! Trees are declared as nested types:
//!
//! ```
//! use treescan::children;
//! use treescan::domain::{CompositeNode, Node, ValueNode};
//!
//! treescan::name! {
//!     pub Root = "root";
//!     pub Inner = "inner";
//!     pub A = "A";
//!     pub B = "B";
//! }
//!
//! type Tree = CompositeNode<Root, children![
//!     ValueNode<A, i32>,
//!     CompositeNode<Inner, children![ValueNode<B, f64>]>,
//! ]>;
//!
//! assert_eq!(Tree::LEAVES, 2);
//! assert_eq!(Tree::DEPTH, 3);
//! ```
//!
//! Combining trees whose child lists differ does not compile:
//!
//! ```compile_fail,E0308
//! use treescan::children;
//! use treescan::domain::{CompositeNode, ValueNode};
//!
//! treescan::name! { Root = "root"; A = "A"; B = "B"; }
//!
//! let mut lhs = CompositeNode::<Root, children![ValueNode<A, i32>]>::default();
//! let rhs = CompositeNode::<Root, children![ValueNode<B, i32>]>::default();
//! lhs += &rhs;
//! ```

use std::convert::Infallible;
use std::fmt;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::ops::AddAssign;

use rand::Rng;
use tracing::{instrument, trace};

use super::hlist::{At, ChildList, Lens, Z};
use super::name::Name;
use super::scalar::Scalar;
use crate::ops::{AddEq, CollectLeaves, LeafCollector, LeafEntry, PrintF, Printer, RandGen};
use crate::random::RandomSource;
use crate::scan::{scan, scan_mut, Scan, Visitor, VisitorMut};
use crate::tree_traits::TreeNodeConvert;

/// Capabilities every node in a statically composed tree provides.
pub trait Node: Default + TreeNodeConvert + 'static {
    /// Compile-time name tag.
    const NAME: &'static str;
    /// Number of value nodes in this subtree.
    const LEAVES: usize;
    /// Nesting depth: 1 for a value node.
    const DEPTH: usize;

    /// Elementwise combine with a node of the same type.
    fn combine(&mut self, other: &Self);

    /// Assign every leaf a fresh sample from `source`.
    fn randomize<R: Rng>(&mut self, source: &mut RandomSource<R>);

    /// Write one `<prefix> <name> == <value>` line per leaf.
    fn print<W: Write + ?Sized>(&self, prefix: &str, out: &mut W) -> io::Result<()>;

    /// Append one entry per leaf in pre-order.
    fn collect_leaves(&self, prefix: &str, leaves: &mut Vec<LeafEntry>);

    /// All leaves of this subtree, in declaration order.
    fn leaf_paths(&self) -> Vec<LeafEntry> {
        let mut leaves = Vec::with_capacity(Self::LEAVES);
        self.collect_leaves("", &mut leaves);
        leaves
    }
}

/// Extends a space-joined path prefix with one more segment.
pub(crate) fn join_prefix(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{} {}", prefix, name)
    }
}

// ============================================================
// ValueNode
// ============================================================

/// Leaf holding one scalar value of type `T`, tagged with name `N`.
pub struct ValueNode<N, T> {
    val: T,
    _name: PhantomData<N>,
}

impl<N: Name, T: Scalar> ValueNode<N, T> {
    pub fn new(val: T) -> Self {
        Self {
            val,
            _name: PhantomData,
        }
    }

    pub fn value(&self) -> &T {
        &self.val
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.val
    }

    pub fn set(&mut self, val: T) {
        self.val = val;
    }
}

impl<N, T: Default> Default for ValueNode<N, T> {
    fn default() -> Self {
        Self {
            val: T::default(),
            _name: PhantomData,
        }
    }
}

impl<N, T: Clone> Clone for ValueNode<N, T> {
    fn clone(&self) -> Self {
        Self {
            val: self.val.clone(),
            _name: PhantomData,
        }
    }
}

impl<N, T: PartialEq> PartialEq for ValueNode<N, T> {
    fn eq(&self, other: &Self) -> bool {
        self.val == other.val
    }
}

impl<N: Name, T: fmt::Debug> fmt::Debug for ValueNode<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(N::NAME).field(&self.val).finish()
    }
}

impl<N: Name, T: Scalar> AddAssign<&ValueNode<N, T>> for ValueNode<N, T> {
    fn add_assign(&mut self, rhs: &ValueNode<N, T>) {
        self.val = self.val.add(rhs.val);
    }
}

impl<N: Name, T: Scalar> Node for ValueNode<N, T> {
    const NAME: &'static str = N::NAME;
    const LEAVES: usize = 1;
    const DEPTH: usize = 1;

    fn combine(&mut self, other: &Self) {
        *self += other;
    }

    fn randomize<R: Rng>(&mut self, source: &mut RandomSource<R>) {
        self.val = T::from_f64(source.draw());
    }

    /// Values use `Display`: floats print the shortest form that round-trips, not a fixed precision.
    fn print<W: Write + ?Sized>(&self, prefix: &str, out: &mut W) -> io::Result<()> {
        writeln!(out, "{} == {}", join_prefix(prefix, N::NAME), self.val)
    }

    fn collect_leaves(&self, prefix: &str, leaves: &mut Vec<LeafEntry>) {
        leaves.push(LeafEntry {
            prefix: prefix.to_string(),
            name: N::NAME,
            value: self.val.to_string(),
        });
    }
}

// ============================================================
// CompositeNode
// ============================================================

/// Child lists the traversal engine can walk from the first position.
pub trait Children: ChildList + Sized + Scan<Self, Z> + 'static {}

impl<C: ChildList + Scan<C, Z> + 'static> Children for C {}

/// Internal node named `N` owning the fixed child list `C`.
pub struct CompositeNode<N, C> {
    children: C,
    _name: PhantomData<N>,
}

impl<N: Name, C: Children> CompositeNode<N, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_children(children: C) -> Self {
        Self {
            children,
            _name: PhantomData,
        }
    }

    pub fn children(&self) -> &C {
        &self.children
    }

    /// Child at compile-time position `I`.
    pub fn child<I>(&self) -> &<At<I> as Lens<C>>::Target
    where
        At<I>: Lens<C>,
    {
        <At<I> as Lens<C>>::get(&self.children)
    }

    pub fn child_mut<I>(&mut self) -> &mut <At<I> as Lens<C>>::Target
    where
        At<I>: Lens<C>,
    {
        <At<I> as Lens<C>>::get_mut(&mut self.children)
    }

    /// Apply `F` once per direct child, in declaration order.
    pub fn scan<F, P>(&self, params: &mut P) -> Result<(), F::Error>
    where
        F: Visitor<C, P>,
        P: ?Sized,
    {
        scan::<F, C, P>(&self.children, params)
    }

    pub fn scan_mut<F, P>(&mut self, params: &mut P) -> Result<(), F::Error>
    where
        F: VisitorMut<C, P>,
        P: ?Sized,
    {
        scan_mut::<F, C, P>(&mut self.children, params)
    }
}

impl<N, C: Default> Default for CompositeNode<N, C> {
    fn default() -> Self {
        Self {
            children: C::default(),
            _name: PhantomData,
        }
    }
}

impl<N, C: Clone> Clone for CompositeNode<N, C> {
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
            _name: PhantomData,
        }
    }
}

impl<N, C: PartialEq> PartialEq for CompositeNode<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.children == other.children
    }
}

impl<N: Name, C: fmt::Debug> fmt::Debug for CompositeNode<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(N::NAME).field(&self.children).finish()
    }
}

/// Names are cosmetic: only the child lists have to match.
impl<N: Name, M: Name, C: Children> AddAssign<&CompositeNode<M, C>> for CompositeNode<N, C> {
    #[instrument(level = "trace", skip_all, fields(lhs = N::NAME, rhs = M::NAME))]
    fn add_assign(&mut self, rhs: &CompositeNode<M, C>) {
        let result = scan_mut::<AddEq, C, &C>(&mut self.children, &mut &rhs.children);
        result.unwrap_or_else(|never: Infallible| match never {})
    }
}

impl<N: Name, C: Children> Node for CompositeNode<N, C> {
    const NAME: &'static str = N::NAME;
    const LEAVES: usize = C::LEAVES;
    const DEPTH: usize = 1 + C::DEPTH;

    fn combine(&mut self, other: &Self) {
        *self += other;
    }

    #[instrument(level = "trace", skip_all, fields(node = N::NAME))]
    fn randomize<R: Rng>(&mut self, source: &mut RandomSource<R>) {
        let result = scan_mut::<RandGen, C, RandomSource<R>>(&mut self.children, source);
        result.unwrap_or_else(|never: Infallible| match never {})
    }

    fn print<W: Write + ?Sized>(&self, prefix: &str, out: &mut W) -> io::Result<()> {
        let prefix = join_prefix(prefix, N::NAME);
        trace!(prefix = %prefix, "print");
        let mut printer = Printer {
            prefix: &prefix,
            out,
        };
        scan::<PrintF, C, Printer<'_, W>>(&self.children, &mut printer)
    }

    fn collect_leaves(&self, prefix: &str, leaves: &mut Vec<LeafEntry>) {
        let prefix = join_prefix(prefix, N::NAME);
        let mut collector = LeafCollector {
            prefix: &prefix,
            leaves,
        };
        scan::<CollectLeaves, C, LeafCollector<'_>>(&self.children, &mut collector)
            .unwrap_or_else(|never: Infallible| match never {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children;
    use crate::domain::{HCons, HNil, I0, I1};
    use crate::name;

    name! {
        Root = "root";
        Inner = "inner";
        A = "A";
        B = "B";
    }

    type Inside = CompositeNode<Inner, children![ValueNode<B, f64>]>;
    type Sample = CompositeNode<Root, children![ValueNode<A, i32>, Inside]>;

    /// Works for any composite, so the `Node` impl must hold for a generic child list.
    fn leaf_count<N: Name, C: Children>(node: &CompositeNode<N, C>) -> usize {
        node.leaf_paths().len()
    }

    /// Sums the leaf counts of the visited children.
    struct CountLeaves;

    impl<P> Visitor<P, usize> for CountLeaves {
        type Error = Infallible;

        fn apply<L: Lens<P>>(_parent: &P, total: &mut usize) -> Result<(), Infallible> {
            *total += <L::Target as Node>::LEAVES;
            Ok(())
        }
    }

    #[test]
    fn given_generic_child_list_when_used_as_node_then_reports_leaves() {
        assert_eq!(leaf_count(&Sample::new()), 2);
        assert_eq!(leaf_count(&Inside::new()), 1);
    }

    #[test]
    fn given_built_children_when_wrapping_then_values_are_kept() {
        let inner = Inside::from_children(HCons {
            head: ValueNode::new(0.25),
            tail: HNil,
        });
        let node = Sample::from_children(HCons {
            head: ValueNode::new(9),
            tail: HCons {
                head: inner,
                tail: HNil,
            },
        });

        assert_eq!(*node.child::<I0>().value(), 9);
        assert_eq!(*node.child::<I1>().child::<I0>().value(), 0.25);
    }

    #[test]
    fn given_value_node_when_mutating_in_place_then_value_changes() {
        let mut node = Sample::new();

        *node.child_mut::<I0>().value_mut() += 5;
        *node.child_mut::<I0>().value_mut() *= 3;

        assert_eq!(*node.child::<I0>().value(), 15);
    }

    #[test]
    fn given_read_only_visitor_when_scanning_composite_then_sees_every_child() {
        let node = Sample::new();
        let mut total = 0_usize;

        node.scan::<CountLeaves, _>(&mut total)
            .unwrap_or_else(|never: Infallible| match never {});

        assert_eq!(total, Sample::LEAVES);
    }

    #[test]
    fn given_float_leaf_when_printing_then_uses_shortest_display() {
        let mut node = Sample::new();
        node.child_mut::<I1>().child_mut::<I0>().set(0.1);
        let mut out = Vec::new();

        node.print("", &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "root A == 0\nroot inner B == 0.1\n");
    }
}
