pub mod axis;
pub mod geometry;

pub use axis::Dimension;
pub use geometry::{BoxFloat, BoxState, Dim, DimFloat, DimSize};
