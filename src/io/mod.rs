//! Configuration loading utilities.
//!
//! Picker components supply `from`/`to`/`step` as plain strings; this module
//! loads that shape from JSON or TOML files with error context suitable for
//! per-field messages.
//!
//! # Example
//!
//! ```no_run
//! use timegrid::io::loaders::RangeConfigLoader;
//! use std::path::Path;
//!
//! let config = RangeConfigLoader::load_from_file(Path::new("picker.toml"))
//!     .expect("Failed to load");
//! let options = config.generate().expect("Invalid range");
//! ```

pub mod loaders;


pub use loaders::{ConfigSourceType, RangeConfig, RangeConfigLoader};
