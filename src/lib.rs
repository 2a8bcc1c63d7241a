//! jwsimilarity - Jaro and Jaro-Winkler string similarity
//!
//! Scores two strings in [0, 1] and exposes the score as the SQL scalar
//! function `JARO_WINKLER_SIMILARITY(str1, str2)`. Python bindings via PyO3
//! are available behind the `python` feature.
//!
//! ```
//! use jwsimilarity::{similarity, JaroWinkler};
//!
//! let score = similarity("MARTHA", "MARHTA", 0.1, 4).unwrap();
//! assert!((score - 0.961).abs() < 0.001);
//! assert_eq!(JaroWinkler::default().similarity("abc", "xyz"), 0.0);
//! ```

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod config;
pub mod distance;
pub mod error;
pub mod sql;

pub use config::JaroWinklerConfig;
pub use distance::jaro::{jaro_distance, jaro_similarity, match_window};
pub use distance::jaro_winkler::{similarity, JaroWinkler};
pub use distance::prefix::common_prefix_length;
pub use error::{Result, SimilarityError};
pub use sql::{render_call, JaroWinklerSqlFunction, SqlValue};

/// jwsimilarity Python module
#[cfg(feature = "python")]
#[pymodule]
fn _jwsimilarity(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let distance_module = PyModule::new(m.py(), "distance")?;
    distance::register_module(&distance_module)?;
    m.add_submodule(&distance_module)?;

    Ok(())
}
