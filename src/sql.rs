//! `JARO_WINKLER_SIMILARITY(str1, str2)` as a SQL scalar function.
//!
//! Query layers that evaluate the function themselves call
//! [`JaroWinklerSqlFunction::invoke`] once per row. Layers that push the call
//! down to a database only need [`render_call`] to splice both argument
//! expressions into the generated SQL.

use std::borrow::Cow;

use crate::distance::jaro_winkler::JaroWinkler;
use crate::error::{Result, SimilarityError};

pub const FUNCTION_NAME: &str = "JARO_WINKLER_SIMILARITY";
pub const NUM_ARGS: usize = 2;

/// A SQL value as seen by a scalar function.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Text form used for comparison. `None` for NULL.
    fn as_text(&self, index: usize) -> Result<Option<Cow<'_, str>>> {
        match self {
            SqlValue::Null => Ok(None),
            SqlValue::Text(s) => Ok(Some(Cow::Borrowed(s.as_str()))),
            SqlValue::Integer(i) => Ok(Some(Cow::Owned(i.to_string()))),
            SqlValue::Real(r) => Ok(Some(Cow::Owned(format!("{r:?}")))),
            SqlValue::Blob(bytes) => std::str::from_utf8(bytes)
                .map(|s| Some(Cow::Borrowed(s)))
                .map_err(|_| SimilarityError::ArgumentType {
                    function: FUNCTION_NAME,
                    index,
                }),
        }
    }
}

/// Scalar function wrapper around a [`JaroWinkler`] engine.
///
/// Stateless across rows, so it can be shared between query executors.
#[derive(Debug, Clone, Default)]
pub struct JaroWinklerSqlFunction {
    engine: JaroWinkler,
}

impl JaroWinklerSqlFunction {
    pub fn new(engine: JaroWinkler) -> Self {
        Self { engine }
    }

    pub fn name(&self) -> &'static str {
        FUNCTION_NAME
    }

    pub fn num_args(&self) -> usize {
        NUM_ARGS
    }

    pub fn is_deterministic(&self) -> bool {
        true
    }

    /// Evaluate for one row. Any NULL argument yields NULL.
    pub fn invoke(&self, args: &[SqlValue]) -> Result<SqlValue> {
        if args.len() != NUM_ARGS {
            return Err(SimilarityError::Arity {
                function: FUNCTION_NAME,
                expected: NUM_ARGS,
                actual: args.len(),
            });
        }

        let (Some(first), Some(second)) = (args[0].as_text(0)?, args[1].as_text(1)?) else {
            return Ok(SqlValue::Null);
        };
        Ok(SqlValue::Real(self.engine.similarity(&first, &second)))
    }
}

/// Emit `JARO_WINKLER_SIMILARITY(first, second)`, re-emitting both argument
/// expressions verbatim.
pub fn render_call(first: &str, second: &str) -> String {
    format!("{FUNCTION_NAME}({first}, {second})")
}
