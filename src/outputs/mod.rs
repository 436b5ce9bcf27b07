//! Output generation for the persisted timeline.
//!
//! # Submodules
//!
//! - [`csv`]: Writes the sorted timeline to a single CSV file
//!
//! # Output Structure
//!
//! ```text
//! output/
//! └── master_timeline.csv    # date,type,source,content_snippet,asset_path
//! ```
//!
//! The CSV is the pipeline's only persisted state. Reruns overwrite it, so
//! building twice from an unchanged tree produces byte-identical output.

pub mod csv;
