use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An advertisement package as served by `GET /plans`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdPackage {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Zero means the package is free (contact for pricing).
    pub price: f64,
    /// Days the advertisement stays live.
    #[serde(default)]
    pub duration: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    /// Not rendered; any shape other than a list of strings reads as empty.
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub features_html: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub premium: bool,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub package_type: PackageType,
    #[serde(default, deserialize_with = "lenient_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: for<'a> Deserialize<'a> + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// RFC 3339 or `YYYY-MM-DD HH:MM:SS` (read as UTC). Anything else is `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::String(raw) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }
    Ok(["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&raw, format).ok())
        .map(|naive| naive.and_utc()))
}

impl AdPackage {
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    #[default]
    Basic,
    Featured,
    Premium,
    Custom,
    #[serde(untagged)]
    Other(String),
}

/// Envelope of the plan listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlansResponse {
    pub success: bool,
    pub data: Vec<AdPackage>,
}

/// Query for the plan listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanQuery {
    pub active_only: bool,
}

impl PlanQuery {
    pub fn active() -> Self {
        Self { active_only: true }
    }

    /// Path relative to the API base, e.g. `/plans?isActive=true`.
    pub fn path(&self) -> String {
        if self.active_only {
            "/plans?isActive=true".to_string()
        } else {
            "/plans".to_string()
        }
    }
}

impl Default for PlanQuery {
    fn default() -> Self {
        Self::active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_package_record() {
        let record = json!({
            "_id": "plan-123",
            "name": "Featured Listing",
            "description": "Top of search results",
            "price": 499,
            "duration": 30,
            "features": ["Top placement", "Highlighted card"],
            "featuresHtml": ["<b>Top</b> placement"],
            "premium": true,
            "type": "featured",
            "createdAt": "2024-03-01T10:00:00.000Z",
            "updatedAt": "2024-03-02T10:00:00.000Z"
        });

        let package: AdPackage = serde_json::from_value(record).unwrap();
        assert_eq!(package.id.as_deref(), Some("plan-123"));
        assert_eq!(package.price, 499.0);
        assert_eq!(package.duration, 30);
        assert_eq!(package.features.len(), 2);
        assert!(package.premium);
        assert_eq!(package.package_type, PackageType::Featured);
        assert!(package.created_at.is_some());
    }

    #[test]
    fn test_decode_minimal_record() {
        let package: AdPackage =
            serde_json::from_value(json!({ "name": "Basic", "price": 0 })).unwrap();
        assert_eq!(package.id, None);
        assert!(package.features.is_empty());
        assert!(!package.premium);
        assert_eq!(package.package_type, PackageType::Basic);
        assert!(package.is_free());
    }

    #[test]
    fn test_unknown_type_tag_is_kept() {
        let package: AdPackage =
            serde_json::from_value(json!({ "name": "Odd", "price": 10, "type": "seasonal" }))
                .unwrap();
        assert_eq!(package.package_type, PackageType::Other("seasonal".to_string()));
    }

    #[test]
    fn test_timestamp_formats() {
        let package: AdPackage = serde_json::from_value(json!({
            "name": "Basic",
            "price": 99,
            "createdAt": "2024-03-01 10:00:00",
            "updatedAt": "yesterday"
        }))
        .unwrap();
        assert_eq!(
            package.created_at.map(|t| t.to_rfc3339()),
            Some("2024-03-01T10:00:00+00:00".to_string())
        );
        assert_eq!(package.updated_at, None);
    }

    #[test]
    fn test_plan_query_path() {
        assert_eq!(PlanQuery::active().path(), "/plans?isActive=true");
        assert_eq!(PlanQuery { active_only: false }.path(), "/plans");
    }
}
