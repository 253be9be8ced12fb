//! Heterogeneous child lists and type-level positions
//!
//! A composite node's children are stored as a cons list whose shape is part
//! of the composite's type. Positions into the list are Peano numbers, and
//! [`At`] projects a list onto the child at a position without any runtime
//! lookup.

use std::fmt;
use std::marker::PhantomData;

use super::node::Node;

/// Empty child list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HNil;

/// Child list with a head node and the remaining children.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

/// Ordered, fixed-shape list of child nodes.
pub trait ChildList: Default {
    /// Number of direct children.
    const LEN: usize;
    /// Leaves reachable through all children.
    const LEAVES: usize;
    /// Deepest child depth, 0 for an empty list.
    const DEPTH: usize;
}

impl ChildList for HNil {
    const LEN: usize = 0;
    const LEAVES: usize = 0;
    const DEPTH: usize = 0;
}

impl<H: Node, T: ChildList> ChildList for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
    const LEAVES: usize = H::LEAVES + T::LEAVES;
    const DEPTH: usize = if H::DEPTH > T::DEPTH { H::DEPTH } else { T::DEPTH };
}

/// Builds a child list type: `children![A, B]` is `HCons<A, HCons<B, HNil>>`.
#[macro_export]
macro_rules! children {
    () => { $crate::domain::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::domain::HCons<$head, $crate::children![$($tail),*]>
    };
}

/// Position zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct Z;

/// Successor of position `I`.
#[derive(Debug, Default, Clone, Copy)]
pub struct S<I>(PhantomData<I>);

pub type I0 = Z;
pub type I1 = S<I0>;
pub type I2 = S<I1>;
pub type I3 = S<I2>;
pub type I4 = S<I3>;
pub type I5 = S<I4>;
pub type I6 = S<I5>;
pub type I7 = S<I6>;
pub type I8 = S<I7>;
pub type I9 = S<I8>;

/// Type-level accessor from a root type to one of its children.
pub trait Lens<Root> {
    type Target: Node;

    fn get(root: &Root) -> &Self::Target;
    fn get_mut(root: &mut Root) -> &mut Self::Target;
}

/// Lens selecting the child at position `I` of a child list.
pub struct At<I>(PhantomData<I>);

impl<I> fmt::Debug for At<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "At<{}>", std::any::type_name::<I>())
    }
}

impl<H: Node, T> Lens<HCons<H, T>> for At<Z> {
    type Target = H;

    #[inline(always)]
    fn get(root: &HCons<H, T>) -> &H {
        &root.head
    }

    #[inline(always)]
    fn get_mut(root: &mut HCons<H, T>) -> &mut H {
        &mut root.head
    }
}

impl<H, T, I> Lens<HCons<H, T>> for At<S<I>>
where
    At<I>: Lens<T>,
{
    type Target = <At<I> as Lens<T>>::Target;

    #[inline(always)]
    fn get(root: &HCons<H, T>) -> &Self::Target {
        <At<I> as Lens<T>>::get(&root.tail)
    }

    #[inline(always)]
    fn get_mut(root: &mut HCons<H, T>) -> &mut Self::Target {
        <At<I> as Lens<T>>::get_mut(&mut root.tail)
    }
}
