use sprite_assign::core::models::error::ShapeError;
use sprite_assign::core::models::regions::RegionLayout;
use sprite_assign::engine::config::AssignConfig;
use std::path::PathBuf;

/// Region layout as configured, before the bead count of the input is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSpec {
    Contiguous(Vec<usize>),
    CopyIndex(Vec<Vec<usize>>),
}

impl LayoutSpec {
    pub fn resolve(&self, n_bead: usize) -> Result<RegionLayout, ShapeError> {
        match self {
            LayoutSpec::Contiguous(copies) => RegionLayout::contiguous(copies, n_bead),
            LayoutSpec::CopyIndex(regions) => RegionLayout::from_copy_index(regions),
        }
    }
}

#[derive(Debug)]
pub struct AppConfig {
    pub coords_path: PathBuf,
    pub output_path: PathBuf,
    pub layout: LayoutSpec,
    pub core_config: AssignConfig,
}
