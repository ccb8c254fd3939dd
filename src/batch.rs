//! Laying out many independent trees with one configuration.
//!
//! Each tree is an independent, pure layout pass, so the batch parallelizes
//! trivially. With the `rayon-executor` feature the work runs on rayon's
//! global pool; otherwise it runs sequentially on the calling thread.

use trellis_layout::{Command, LayoutConfig, LayoutEngine, LayoutError, LayoutResult, Measurable};

/// Lays out every tree, returning results in input order.
///
/// An invalid configuration fails every entry with the same error.
pub fn layout_batch<E>(
    trees: &[Command<E>],
    config: &LayoutConfig,
) -> Vec<Result<LayoutResult<E>, LayoutError>>
where
    E: Measurable + Clone + Send + Sync,
{
    let engine = match LayoutEngine::new(*config) {
        Ok(engine) => engine,
        Err(e) => {
            log::warn!("Rejecting batch of {} trees: {}", trees.len(), e);
            return trees.iter().map(|_| Err(e.clone())).collect();
        }
    };

    log::debug!("Laying out batch of {} trees", trees.len());
    run(&engine, trees)
}

#[cfg(feature = "rayon-executor")]
fn run<E>(engine: &LayoutEngine, trees: &[Command<E>]) -> Vec<Result<LayoutResult<E>, LayoutError>>
where
    E: Measurable + Clone + Send + Sync,
{
    use rayon::prelude::*;
    trees.par_iter().map(|tree| engine.layout(tree)).collect()
}

#[cfg(not(feature = "rayon-executor"))]
fn run<E>(engine: &LayoutEngine, trees: &[Command<E>]) -> Vec<Result<LayoutResult<E>, LayoutError>>
where
    E: Measurable + Clone + Send + Sync,
{
    trees.iter().map(|tree| engine.layout(tree)).collect()
}
