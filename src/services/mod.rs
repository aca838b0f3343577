pub mod color_math;
pub mod grid_view;
pub mod history;
pub mod hydration;
pub mod input_parser;
pub mod matrix;
pub mod state_codec;
pub mod template_service;

pub use color_math::{ColorMath, CssColorMath};
pub use grid_view::GridView;
pub use history::{Navigator, RedirectNavigator, SessionHistory};
pub use hydration::FormValues;
pub use matrix::{build_grid, meets_contrast, Grid, GridCell};
pub use state_codec::QueryParams;
pub use template_service::{PageView, TemplateError, TemplateService};
