//! Search source implementations with conditional compilation support.
//!
//! Individual sources sit behind feature flags so builds can include only
//! the sites they need.
//!
//! # Feature Flags
//!
//! - `source-touchgal` - Enables the TouchGal source
//! - `source-shionlib` - Enables the ShionLib source
//! - `all-sources` - Enables all sources (default)
//!
//! Build with only TouchGal support:
//! ```bash
//! cargo build --no-default-features --features source-touchgal
//! ```
//!
//! # Available Sources
//!
//! - [`TouchGalSource`] - TouchGal JSON search API (requires `source-touchgal`)
//! - [`ShionLibSource`] - ShionLib search-page scrape (requires `source-shionlib`)

#[cfg(feature = "source-touchgal")]
pub mod touchgal;

#[cfg(feature = "source-shionlib")]
pub mod shionlib;

#[cfg(feature = "source-touchgal")]
pub use touchgal::TouchGalSource;

#[cfg(feature = "source-shionlib")]
pub use shionlib::ShionLibSource;
