//! Image processing: identify, resize, encode.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize** | `resize_exact` with Lanczos3 |
//! | **Encode** | `JpegEncoder` (JPEG), `webp::Encoder` (lossy WebP) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::proportional_height;
pub use operations::{GeneratedVariant, VariantSpec, create_variant, get_dimensions, plan_resize};
pub use params::{OutputFormat, Quality, ResizeParams};
pub use rust_backend::RustBackend;
