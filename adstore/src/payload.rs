use serde_json::Value;

use crate::error::LoadError;
use crate::models::AdPackage;

/// Checks the `{ success: true, data: [...] }` envelope and decodes its records.
pub fn parse_plans(payload: Value) -> Result<Vec<AdPackage>, LoadError> {
    let Value::Object(mut envelope) = payload else {
        return Err(LoadError::InvalidFormat("payload is not an object".into()));
    };

    if envelope.get("success") != Some(&Value::Bool(true)) {
        return Err(LoadError::InvalidFormat("success flag not set".into()));
    }

    let Some(Value::Array(records)) = envelope.remove("data") else {
        return Err(LoadError::InvalidFormat("data is not an array".into()));
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| decode_record(index, record))
        .collect()
}

fn decode_record(index: usize, record: Value) -> Result<AdPackage, LoadError> {
    if !record.is_object() {
        return Err(LoadError::InvalidFormat(format!(
            "record {} is not an object",
            index
        )));
    }

    let package: AdPackage = serde_json::from_value(record)
        .map_err(|e| LoadError::InvalidFormat(format!("record {}: {}", index, e)))?;

    if package.name.trim().is_empty() {
        return Err(LoadError::InvalidFormat(format!(
            "record {} has an empty name",
            index
        )));
    }
    if !package.price.is_finite() || package.price < 0.0 {
        return Err(LoadError::InvalidFormat(format!(
            "record {} has an invalid price",
            index
        )));
    }

    Ok(package)
}
