//! Invariant checks for the drill-down controller.

use anyhow::{Context, Result};
use geovote_engine::DrillDownController;

/// The breadcrumb has one entry per level below the root and matches the
/// path recomputed from parent links.
pub fn assert_view_invariants(controller: &DrillDownController) -> Result<()> {
    let Some(current) = controller.current() else {
        if !controller.breadcrumb().is_empty() {
            anyhow::bail!("breadcrumb {:?} without a current node", controller.breadcrumb());
        }
        return Ok(());
    };
    let tree = controller.tree().context("current node without a tree")?;
    let depth = tree.node(current).depth;

    if controller.breadcrumb().len() != depth {
        anyhow::bail!(
            "breadcrumb {:?} has {} entries but current node is at depth {}",
            controller.breadcrumb(),
            controller.breadcrumb().len(),
            depth
        );
    }

    let recomputed = controller.compute_breadcrumb();
    if recomputed != controller.breadcrumb() {
        anyhow::bail!(
            "stored breadcrumb {:?} differs from recomputed {:?}",
            controller.breadcrumb(),
            recomputed
        );
    }

    Ok(())
}
