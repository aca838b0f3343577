//! Grid state <-> URL query string.
//!
//! Each axis is stored as a JSON array of entries, percent-encoded the way
//! `encodeURIComponent` does it, in its own query parameter. The Y axis is
//! left out whenever it equals the X axis, which keeps the common
//! "compare a palette against itself" link short.
//!
//! Everything here is a pure string transform. Pushing the new URL onto the
//! navigation history is up to the caller (see [`crate::services::history`]).

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;
use url::form_urlencoded;

use crate::error::StateError;
use crate::models::{axes_equal, AxisState, GridState};
use crate::services::ColorMath;

pub const X_AXIS_PARAM: &str = "xAxisData";
pub const Y_AXIS_PARAM: &str = "yAxisData";

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Ordered query parameters with `URLSearchParams`-style editing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without the leading `?`.
    ///
    /// Lenient like a browser: malformed escapes are kept literally and
    /// invalid UTF-8 is replaced.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the first value for `key` and drop any others, or append
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(idx) => {
                self.pairs[idx].1 = value;
                let mut seen = 0;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize without the leading `?`
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Strict inverse of `encodeURIComponent`: a stray `%` or bad UTF-8 fails
fn decode_component(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let well_formed = raw.match_indices('%').all(|(idx, _)| {
        bytes
            .get(idx + 1..idx + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    });
    if !well_formed {
        return None;
    }

    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

fn encode_axis(axis: &AxisState, param: &'static str) -> Result<String, StateError> {
    let json = serde_json::to_string(axis).map_err(|source| StateError::Json { param, source })?;
    Ok(utf8_percent_encode(&json, URI_COMPONENT).to_string())
}

fn decode_axis(params: &QueryParams, param: &'static str) -> Result<Option<AxisState>, StateError> {
    let Some(raw) = params.get(param) else {
        return Ok(None);
    };
    let json = decode_component(raw).ok_or(StateError::Encoding { param })?;
    let axis = serde_json::from_str(&json).map_err(|source| StateError::Json { param, source })?;
    Ok(Some(axis))
}

/// Write both axes into `params`.
///
/// An empty X axis leaves `params` untouched. Returns whether anything
/// changed, i.e. whether the caller should navigate to the new URL.
pub fn encode(params: &mut QueryParams, x: &AxisState, y: &AxisState) -> Result<bool, StateError> {
    if x.is_empty() {
        tracing::debug!("Empty X axis, leaving query untouched");
        return Ok(false);
    }

    params.set(X_AXIS_PARAM, encode_axis(x, X_AXIS_PARAM)?);

    if axes_equal(x, y) {
        params.delete(Y_AXIS_PARAM);
    } else {
        params.set(Y_AXIS_PARAM, encode_axis(y, Y_AXIS_PARAM)?);
    }

    tracing::debug!(x = x.len(), y = y.len(), "Encoded grid state");
    Ok(true)
}

/// Read grid state from already parsed query parameters.
///
/// `Ok(None)` when there is no X axis. A missing Y axis means Y equals X.
pub fn decode_params(params: &QueryParams) -> Result<Option<GridState>, StateError> {
    let Some(x) = decode_axis(params, X_AXIS_PARAM)? else {
        return Ok(None);
    };

    let state = match decode_axis(params, Y_AXIS_PARAM)? {
        Some(y) => GridState::new(x, y),
        None => GridState::symmetric(x),
    };
    Ok(Some(state))
}

/// Read grid state from a raw query string
pub fn decode(query: &str) -> Result<Option<GridState>, StateError> {
    decode_params(&QueryParams::parse(query))
}

/// Reject decoded state containing a color `math` doesn't accept or a
/// blank name.
///
/// The whole state is refused; a partly valid axis is not salvaged.
pub fn validate(state: &GridState, math: &dyn ColorMath) -> Result<(), StateError> {
    for (axis, param) in [(&state.x, X_AXIS_PARAM), (&state.y, Y_AXIS_PARAM)] {
        for entry in axis.iter() {
            if !math.is_valid(&entry.color) {
                return Err(StateError::InvalidColor {
                    param,
                    color: entry.color.clone(),
                });
            }
            if entry.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
                return Err(StateError::InvalidName { param });
            }
        }
    }
    Ok(())
}

/// [`decode_params`] followed by [`validate`]
pub fn decode_checked(
    params: &QueryParams,
    math: &dyn ColorMath,
) -> Result<Option<GridState>, StateError> {
    let state = decode_params(params)?;
    if let Some(state) = &state {
        validate(state, math)?;
    }
    Ok(state)
}
