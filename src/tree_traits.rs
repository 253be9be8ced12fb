/*
Rendering of statically composed trees as `termtree::Tree<String>`.

Composite nodes become branches labelled with their name, value nodes become
leaves labelled `<name> == <value>`.
 */
use std::convert::Infallible;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{Children, CompositeNode, Lens, Name, Scalar, ValueNode};
use crate::scan::{scan, Visitor};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<N: Name, T: Scalar> TreeNodeConvert for ValueNode<N, T> {
    fn to_tree_string(&self) -> Tree<String> {
        Tree::new(format!("{} == {}", N::NAME, self.value()))
    }
}

impl<N: Name, C: Children> TreeNodeConvert for CompositeNode<N, C> {
    #[instrument(level = "trace", skip_all, fields(node = N::NAME))]
    fn to_tree_string(&self) -> Tree<String> {
        let mut leaves = Vec::with_capacity(C::LEN);
        scan::<ToTree, C, Vec<Tree<String>>>(self.children(), &mut leaves)
            .unwrap_or_else(|never: Infallible| match never {});

        Tree::new(N::NAME.to_string()).with_leaves(leaves)
    }
}

/// Collects the rendered subtree of every visited child.
#[derive(Debug)]
pub struct ToTree;

impl<P> Visitor<P, Vec<Tree<String>>> for ToTree {
    type Error = Infallible;

    fn apply<L: Lens<P>>(parent: &P, leaves: &mut Vec<Tree<String>>) -> Result<(), Infallible> {
        // Node requires TreeNodeConvert, so every child can render itself
        leaves.push(L::get(parent).to_tree_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children;
    use crate::domain::{I0, I1};
    use crate::name;

    name! {
        Root = "root";
        Branch = "branch";
        A = "A";
        B = "B";
    }

    type Sample = CompositeNode<
        Root,
        children![ValueNode<A, i32>, CompositeNode<Branch, children![ValueNode<B, f32>]>],
    >;

    #[test]
    fn given_nested_tree_when_converting_then_mirrors_structure() {
        let mut tree = Sample::new();
        tree.child_mut::<I0>().set(3);
        tree.child_mut::<I1>().child_mut::<I0>().set(0.5);

        let rendered = tree.to_tree_string();

        assert_eq!(rendered.root, "root");
        assert_eq!(rendered.leaves.len(), 2);
        assert_eq!(rendered.leaves[0].root, "A == 3");
        assert_eq!(rendered.leaves[1].root, "branch");
        assert_eq!(rendered.leaves[1].leaves[0].root, "B == 0.5");
    }

    #[test]
    fn given_nested_tree_when_displayed_then_draws_branches() {
        let tree = Sample::new();

        let text = tree.to_tree_string().to_string();

        assert!(text.starts_with("root\n"), "{}", text);
        assert!(text.contains("A == 0"), "{}", text);
        assert!(text.contains("B == 0"), "{}", text);
    }
}
