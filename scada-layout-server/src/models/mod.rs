mod image_cut;
mod tv_config;

pub use image_cut::{ImageCut, ImageCutMap};
pub use tv_config::{
    CellConfig, HeaderConfig, PageConfig, PageStyleConfig, TableConfig, TableSizeConfig, TvConfig,
};
