use chrono::{DateTime, Utc};

use crate::models::{AdPackage, PackageType};

pub const CONSULTATION_ID: &str = "personal-consultation";
pub const CONSULTATION_NAME: &str = "Personal Consultation";

const CONSULTATION_DESCRIPTION: &str = "One-on-one personal consultation for listing strategy, pricing and visibility. Contact 9896095599 (10:00 AM - 6:00 PM).";

const CONSULTATION_FEATURES: [&str; 4] = [
    "Direct phone consultation",
    "Listing review and optimization",
    "Pricing strategy",
    "Priority support (10:00 AM - 6:00 PM)",
];

/// The free "Personal Consultation" offering shown after the fetched plans.
///
/// It is never sent to the backend. Price 0 routes the buyer to the free
/// checkout path where they are advised to call.
pub fn consultation_package(now: DateTime<Utc>) -> AdPackage {
    AdPackage {
        id: Some(CONSULTATION_ID.to_string()),
        name: CONSULTATION_NAME.to_string(),
        description: CONSULTATION_DESCRIPTION.to_string(),
        price: 0.0,
        duration: 1,
        features: CONSULTATION_FEATURES.iter().map(|f| f.to_string()).collect(),
        features_html: Vec::new(),
        premium: false,
        package_type: PackageType::Custom,
        created_at: Some(now),
        updated_at: Some(now),
    }
}

/// Appends the consultation entry after the fetched plans.
pub fn with_consultation(mut fetched: Vec<AdPackage>, now: DateTime<Utc>) -> Vec<AdPackage> {
    fetched.push(consultation_package(now));
    fetched
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_consultation_content() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let package = consultation_package(now);

        assert_eq!(package.id.as_deref(), Some("personal-consultation"));
        assert_eq!(package.name, "Personal Consultation");
        assert!(package.is_free());
        assert_eq!(package.duration, 1);
        assert!(!package.premium);
        assert_eq!(package.package_type, PackageType::Custom);
        assert_eq!(package.features.len(), 4);
        assert_eq!(package.features[0], "Direct phone consultation");
        assert!(package.description.contains("9896095599"));
        assert_eq!(package.created_at, Some(now));
        assert_eq!(package.updated_at, Some(now));
    }

    #[test]
    fn test_consultation_is_appended_last() {
        let now = Utc::now();
        let fetched = vec![
            AdPackage {
                name: "Basic".to_string(),
                price: 99.0,
                ..consultation_package(now)
            },
            AdPackage {
                name: "Premium".to_string(),
                price: 999.0,
                ..consultation_package(now)
            },
        ];

        let packages = with_consultation(fetched, now);
        assert_eq!(packages.len(), 3);
        assert_eq!(packages[0].name, "Basic");
        assert_eq!(packages[1].name, "Premium");
        assert_eq!(packages[2].name, CONSULTATION_NAME);
    }

    #[test]
    fn test_consultation_on_empty_set() {
        let packages = with_consultation(Vec::new(), Utc::now());
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, CONSULTATION_NAME);
    }
}
