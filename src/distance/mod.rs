//! Distance algorithms module
//!
//! Jaro, common prefix and Jaro-Winkler scoring.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod jaro;
pub mod jaro_winkler;
pub mod prefix;

#[cfg(feature = "python")]
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Jaro
    m.add_function(wrap_pyfunction!(jaro::jaro_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(jaro::jaro_distance, m)?)?;
    m.add_function(wrap_pyfunction!(jaro::jaro_similarity_batch, m)?)?;
    m.add_function(wrap_pyfunction!(jaro::jaro_distance_batch, m)?)?;

    // Jaro-Winkler
    m.add_function(wrap_pyfunction!(jaro_winkler::jaro_winkler_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(jaro_winkler::jaro_winkler_distance, m)?)?;
    m.add_function(wrap_pyfunction!(jaro_winkler::jaro_winkler_similarity_batch, m)?)?;
    m.add_function(wrap_pyfunction!(jaro_winkler::jaro_winkler_distance_batch, m)?)?;

    Ok(())
}
