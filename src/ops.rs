//! Generic operations for the scan engine
//!
//! Each operation is a unit type; the child it works on is only known through
//! the lens type parameter of `apply`.

use std::convert::Infallible;
use std::fmt;
use std::io::{self, Write};

use rand::Rng;

use crate::domain::{Lens, Node};
use crate::random::RandomSource;
use crate::scan::{Visitor, VisitorMut};

/// Elementwise combine: `a.child += b.child`.
///
/// Both parents have the same child list type, so the lens that selects a
/// child of `a` selects the matching child of `b`.
#[derive(Debug)]
pub struct AddEq;

impl<'b, P> VisitorMut<P, &'b P> for AddEq {
    type Error = Infallible;

    #[inline]
    fn apply<L: Lens<P>>(a: &mut P, b: &mut &'b P) -> Result<(), Infallible> {
        L::get_mut(a).combine(L::get(*b));
        Ok(())
    }
}

/// Random initialization from a shared source.
#[derive(Debug)]
pub struct RandGen;

impl<P, R: Rng> VisitorMut<P, RandomSource<R>> for RandGen {
    type Error = Infallible;

    #[inline]
    fn apply<L: Lens<P>>(parent: &mut P, source: &mut RandomSource<R>) -> Result<(), Infallible> {
        L::get_mut(parent).randomize(source);
        Ok(())
    }
}

/// Output target and accumulated path prefix for [`PrintF`].
pub struct Printer<'a, W: ?Sized> {
    pub prefix: &'a str,
    pub out: &'a mut W,
}

/// Prints every leaf below the visited child.
#[derive(Debug)]
pub struct PrintF;

impl<'a, P, W: Write + ?Sized> Visitor<P, Printer<'a, W>> for PrintF {
    type Error = io::Error;

    fn apply<L: Lens<P>>(parent: &P, printer: &mut Printer<'a, W>) -> io::Result<()> {
        L::get(parent).print(printer.prefix, &mut *printer.out)
    }
}

/// One leaf as seen from the root of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafEntry {
    /// Space-joined names of the enclosing composites.
    pub prefix: String,
    pub name: &'static str,
    pub value: String,
}

impl LeafEntry {
    /// Full path including the leaf name.
    pub fn path(&self) -> String {
        crate::domain::node::join_prefix(&self.prefix, self.name)
    }
}

impl fmt::Display for LeafEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} == {}", self.path(), self.value)
    }
}

/// Accumulator for [`CollectLeaves`].
pub struct LeafCollector<'a> {
    pub prefix: &'a str,
    pub leaves: &'a mut Vec<LeafEntry>,
}

/// Gathers every leaf below the visited child in pre-order.
#[derive(Debug)]
pub struct CollectLeaves;

impl<'a, P> Visitor<P, LeafCollector<'a>> for CollectLeaves {
    type Error = Infallible;

    fn apply<L: Lens<P>>(parent: &P, collector: &mut LeafCollector<'a>) -> Result<(), Infallible> {
        L::get(parent).collect_leaves(collector.prefix, collector.leaves);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children;
    use crate::domain::{CompositeNode, ValueNode, I0, I1};
    use crate::name;
    use crate::scan::{scan, scan_mut};

    name! {
        Top = "top";
        Sub = "sub";
        A = "A";
        B = "B";
    }

    type List = children![ValueNode<A, i64>, CompositeNode<Sub, children![ValueNode<B, f64>]>];

    fn list(a: i64, b: f64) -> List {
        let mut node = CompositeNode::<Top, List>::new();
        node.child_mut::<I0>().set(a);
        node.child_mut::<I1>().child_mut::<I0>().set(b);
        node.children().clone()
    }

    #[test]
    fn given_two_lists_when_add_eq_scanned_then_adds_at_every_depth() {
        let mut lhs = list(2, 0.5);
        let rhs = list(3, 1.25);

        scan_mut::<AddEq, _, _>(&mut lhs, &mut &rhs).unwrap();

        assert_eq!(lhs, list(5, 1.75));
    }

    #[test]
    fn given_list_when_print_scanned_then_writes_prefixed_lines() {
        let children = list(4, 2.5);
        let mut out = Vec::new();
        let mut printer = Printer {
            prefix: "top",
            out: &mut out,
        };

        scan::<PrintF, _, _>(&children, &mut printer).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "top A == 4\ntop sub B == 2.5\n");
    }

    #[test]
    fn given_list_when_collecting_then_entries_carry_prefix_and_value() {
        let children = list(1, 8.0);
        let mut leaves = Vec::new();
        let mut collector = LeafCollector {
            prefix: "",
            leaves: &mut leaves,
        };

        scan::<CollectLeaves, _, _>(&children, &mut collector).unwrap();

        let paths: Vec<String> = leaves.iter().map(LeafEntry::path).collect();
        assert_eq!(paths, vec!["A", "sub B"]);
        assert_eq!(leaves[1].to_string(), "sub B == 8");
    }
}
