//! Compile-time scan over a node's child list
//!
//! The child list type is treated as a stack: take the head, apply the
//! operation for it, continue with the tail at the next position. The
//! recursion happens while the compiler resolves [`Scan`] impls; after
//! monomorphization a scan is a flat sequence of direct calls, one per child.
//!
//! The engine does not descend into composite children on its own. An
//! operation that needs full depth calls the child's own method, which starts
//! a new scan over the grandchildren.

use crate::domain::{At, HCons, HNil, Lens, Node, S, Z};

/// Read-only operation applied once per `(parent, child)` edge.
///
/// `P` is the parent's child list; the child is selected by the lens `L`,
/// which also fixes the child type (`L::Target`) at compile time.
pub trait Visitor<P, Params: ?Sized> {
    type Error;

    fn apply<L: Lens<P>>(parent: &P, params: &mut Params) -> Result<(), Self::Error>;
}

/// Mutating operation applied once per `(parent, child)` edge.
pub trait VisitorMut<P, Params: ?Sized> {
    type Error;

    fn apply<L: Lens<P>>(parent: &mut P, params: &mut Params) -> Result<(), Self::Error>;
}

/// Walks the positions from `I` to the end of `Root`'s child list.
///
/// Implemented by the remaining sub-list, while the operation always receives
/// the full `Root`.
pub trait Scan<Root, I> {
    fn scan_from<F, Params>(root: &Root, params: &mut Params) -> Result<(), F::Error>
    where
        F: Visitor<Root, Params>,
        Params: ?Sized;

    fn scan_from_mut<F, Params>(root: &mut Root, params: &mut Params) -> Result<(), F::Error>
    where
        F: VisitorMut<Root, Params>,
        Params: ?Sized;
}

impl<Root, I> Scan<Root, I> for HNil {
    #[inline(always)]
    fn scan_from<F, Params>(_root: &Root, _params: &mut Params) -> Result<(), F::Error>
    where
        F: Visitor<Root, Params>,
        Params: ?Sized,
    {
        Ok(())
    }

    #[inline(always)]
    fn scan_from_mut<F, Params>(_root: &mut Root, _params: &mut Params) -> Result<(), F::Error>
    where
        F: VisitorMut<Root, Params>,
        Params: ?Sized,
    {
        Ok(())
    }
}

impl<Root, I, H, T> Scan<Root, I> for HCons<H, T>
where
    H: Node,
    At<I>: Lens<Root, Target = H>,
    T: Scan<Root, S<I>>,
{
    #[inline(always)]
    fn scan_from<F, Params>(root: &Root, params: &mut Params) -> Result<(), F::Error>
    where
        F: Visitor<Root, Params>,
        Params: ?Sized,
    {
        F::apply::<At<I>>(root, params)?;
        T::scan_from::<F, Params>(root, params)
    }

    #[inline(always)]
    fn scan_from_mut<F, Params>(root: &mut Root, params: &mut Params) -> Result<(), F::Error>
    where
        F: VisitorMut<Root, Params>,
        Params: ?Sized,
    {
        F::apply::<At<I>>(root, params)?;
        T::scan_from_mut::<F, Params>(root, params)
    }
}

/// Apply `F` to every direct child of `children`, in declaration order.
#[inline]
pub fn scan<F, C, Params>(children: &C, params: &mut Params) -> Result<(), F::Error>
where
    F: Visitor<C, Params>,
    C: Scan<C, Z>,
    Params: ?Sized,
{
    C::scan_from::<F, Params>(children, params)
}

/// Mutating counterpart of [`scan`].
#[inline]
pub fn scan_mut<F, C, Params>(children: &mut C, params: &mut Params) -> Result<(), F::Error>
where
    F: VisitorMut<C, Params>,
    C: Scan<C, Z>,
    Params: ?Sized,
{
    C::scan_from_mut::<F, Params>(children, params)
}
