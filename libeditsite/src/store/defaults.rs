//! Initial value of the preferences slice

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use super::state::{Features, Preferences};

/// Feature flags every editing session starts with
pub const PREFERENCES_DEFAULTS: &[(&str, bool)] = &[
    ("fixedToolbar", false),
    ("focusMode", false),
    ("welcomeGuide", true),
    ("welcomeGuideStyles", true),
];

/// The default preferences table
///
/// Built once; every call hands out the same `Arc`.
pub fn preferences_defaults() -> Preferences {
    static DEFAULTS: OnceLock<Arc<Features>> = OnceLock::new();

    let features = DEFAULTS.get_or_init(|| {
        Arc::new(
            PREFERENCES_DEFAULTS
                .iter()
                .map(|(name, enabled)| (name.to_string(), *enabled))
                .collect(),
        )
    });

    Preferences {
        features: Arc::clone(features),
    }
}

/// Default table with `overrides` laid on top
///
/// Used by configuration to change initial values. Keys absent from the
/// default table are accepted as-is.
pub fn preferences_with_overrides(overrides: &BTreeMap<String, bool>) -> Preferences {
    if overrides.is_empty() {
        return preferences_defaults();
    }

    let mut features = (*preferences_defaults().features).clone();
    features.extend(overrides.iter().map(|(name, enabled)| (name.clone(), *enabled)));
    Preferences {
        features: Arc::new(features),
    }
}
