//! # respimg
//!
//! Batch-generates resized image variants for responsive web breakpoints from
//! JSON config files. Each config names an asset, an output directory and a set
//! of breakpoints; each breakpoint becomes one file at an exact width, with the
//! height following the source aspect ratio.
//!
//! ```text
//! sources/home/hero.jpg ─┐
//! configs/hero.json ─────┼─▶ images/home/hero/hero-default.jpg
//!                        ├─▶ images/home/hero/hero-lg.webp
//!                        └─▶ images/home/hero/hero-sm.webp
//! ```
//!
//! # Pipeline
//!
//! ```text
//! 1. Clear     images/            (optional, once per run)
//! 2. Locate    configs/**/*.json  (glob)
//! 3. Parse     each file          (JSON → AssetConfig → AssetPlan)
//! 4. Build     each breakpoint    (identify → resize → encode)
//! ```
//!
//! Failures are contained at the narrowest level: a broken config file, an
//! invalid asset or a missing source image is reported and skipped, and the
//! run carries on. See [`pipeline`] for the driver.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`settings`] | Run settings: roots, config glob, clearing, legacy quality |
//! | [`locate`] | Expands the config glob into config file paths |
//! | [`asset`] | Parses config JSON and plans each breakpoint's source, output, format, quality |
//! | [`naming`] | `<name>-<breakpoint>.<ext>` file names and the breakpoint → format table |
//! | [`output_root`] | Ensures output directories exist and clears the output root |
//! | [`imaging`] | Dimension math, backend trait, `image`/`webp` backed implementation |
//! | [`builder`] | Builds every breakpoint of one asset, collecting outcomes |
//! | [`pipeline`] | Driver: clear → locate → parse → build, with progress events |
//! | [`output`] | CLI output formatting |
//!
//! # Formats
//!
//! Only two encoders are written. The `default` breakpoint is the `<img>`
//! fallback and is encoded as JPEG; all other breakpoints are WebP `<source>`
//! candidates. A config can override this per breakpoint with `format`.

pub mod asset;
pub mod builder;
pub mod imaging;
pub mod locate;
pub mod naming;
pub mod output;
pub mod output_root;
pub mod pipeline;
pub mod settings;

#[cfg(test)]
pub(crate) mod test_helpers;
