//! Monitor topology from the window manager

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::collaborator::{CollaboratorError, CommandRunner};
use crate::constants::monitor_query;

/// One active display as reported by the monitor query
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorDescriptor {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub refresh_rate_hz: f64,
    pub scale: f64,
    pub active: bool,
}

impl MonitorDescriptor {
    /// Decode one record field by field.
    ///
    /// Absent fields and fields of the wrong type fall back to the zero
    /// value; mismatches are logged but never reject the record.
    pub fn from_record(index: usize, record: &Map<String, Value>) -> Self {
        Self {
            name: field(index, record, "name", |v| v.as_str().map(str::to_string)),
            width: field(index, record, "width", as_dimension),
            height: field(index, record, "height", as_dimension),
            refresh_rate_hz: field(index, record, "refreshRate", Value::as_f64),
            scale: field(index, record, "scale", Value::as_f64),
            active: true,
        }
    }
}

/// Whole-number JSON values, truncating floats the way the query sometimes reports them
fn as_dimension(value: &Value) -> Option<u32> {
    value
        .as_u64()
        .map(|v| v.min(u32::MAX as u64) as u32)
        .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f as u32))
}

fn field<T: Default>(
    index: usize,
    record: &Map<String, Value>,
    key: &str,
    decode: impl Fn(&Value) -> Option<T>,
) -> T {
    match record.get(key) {
        None => {
            debug!(monitor = index, field = key, "Monitor field missing, using default");
            T::default()
        }
        Some(value) => decode(value).unwrap_or_else(|| {
            warn!(monitor = index, field = key, found = json_type(value), "Unexpected monitor field type, using default");
            T::default()
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse the monitor query's JSON array.
///
/// The outer shape must be an array of objects (`null` reads as no monitors);
/// anything else is a parse failure.
pub fn parse_monitors(program: &str, json: &str) -> Result<Vec<MonitorDescriptor>, CollaboratorError> {
    let parse_err = |reason: String| CollaboratorError::Parse {
        program: program.to_string(),
        reason,
    };

    let value: Value = serde_json::from_str(json).map_err(|e| parse_err(e.to_string()))?;
    let records = match value {
        Value::Array(records) => records,
        Value::Null => Vec::new(),
        other => {
            return Err(parse_err(format!("expected a JSON array, found {}", json_type(&other))));
        }
    };

    records
        .iter()
        .enumerate()
        .map(|(i, record)| match record {
            Value::Object(map) => Ok(MonitorDescriptor::from_record(i, map)),
            other => Err(parse_err(format!(
                "expected monitor {i} to be an object, found {}",
                json_type(other)
            ))),
        })
        .collect()
}

/// Run the monitor query and decode its output
pub fn query_monitors(
    runner: &dyn CommandRunner,
    program: &str,
) -> Result<Vec<MonitorDescriptor>, CollaboratorError> {
    let stdout = runner.output(program, monitor_query::ARGS)?;
    let monitors = parse_monitors(program, &stdout)?;
    debug!(count = monitors.len(), "Queried monitors");
    Ok(monitors)
}
