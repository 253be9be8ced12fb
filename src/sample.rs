//! The demonstration tree and the run that exercises it
//!
//! ```text
//! one
//!  |--> A (i32)
//!  |--> B (f32)
//!  |--> two
//!  |     |--> D (f64)
//!  |     |--> three
//!  |            |--> E (i64)
//!  |--> F (f64)
//!  |--> G (i32)
//! ```

use std::io::Write;

use rand::Rng;
use termtree::Tree;
use tracing::{debug, info, instrument};

use crate::children;
use crate::config::OutputFormat;
use crate::domain::{CompositeNode, Node, ValueNode};
use crate::errors::TreeResult;
use crate::name;
use crate::random::RandomSource;

name! {
    pub One = "one";
    pub Two = "two";
    pub Three = "three";
    pub A = "A";
    pub B = "B";
    pub D = "D";
    pub E = "E";
    pub F = "F";
    pub G = "G";
}

pub type ThreeNode = CompositeNode<Three, children![ValueNode<E, i64>]>;
pub type TwoNode = CompositeNode<Two, children![ValueNode<D, f64>, ThreeNode]>;
pub type BarChildren = children![
    ValueNode<A, i32>,
    ValueNode<B, f32>,
    TwoNode,
    ValueNode<F, f64>,
    ValueNode<G, i32>,
];
pub type Bar = CompositeNode<One, BarChildren>;

/// Labels used as the outermost print prefix of the two instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub lhs: String,
    pub rhs: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            lhs: "bar".into(),
            rhs: "foo".into(),
        }
    }
}

/// Writes `node` in the requested format, followed by a blank line.
pub fn emit<T, W>(node: &T, label: &str, format: OutputFormat, out: &mut W) -> TreeResult<()>
where
    T: Node,
    W: Write + ?Sized,
{
    match format {
        OutputFormat::Lines => node.print(label, out)?,
        OutputFormat::Tree => {
            let tree = Tree::new(label.to_string()).with_leaves([node.to_tree_string()]);
            write!(out, "{}", tree)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Randomizes two instances, prints them, merges the second into the first
/// and prints both again.
#[instrument(level = "debug", skip(source, out))]
pub fn run<R, W>(
    source: &mut RandomSource<R>,
    labels: &Labels,
    format: OutputFormat,
    out: &mut W,
) -> TreeResult<()>
where
    R: Rng,
    W: Write + ?Sized,
{
    let mut bar = Bar::default();
    let mut foo = Bar::default();

    bar.randomize(source);
    foo.randomize(source);
    debug!(leaves = Bar::LEAVES, depth = Bar::DEPTH, "randomized");

    emit(&bar, &labels.lhs, format, out)?;
    emit(&foo, &labels.rhs, format, out)?;

    bar += &foo;
    info!("{} += {}", labels.lhs, labels.rhs);
    writeln!(out, "{} += {}\n", labels.lhs, labels.rhs)?;

    emit(&bar, &labels.lhs, format, out)?;
    emit(&foo, &labels.rhs, format, out)?;
    Ok(())
}
