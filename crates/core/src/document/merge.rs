use std::fmt::Display;

use serde_json::Value;

use super::model::{ContentDocument, StoredDocument};

/// Reconcile a stored document with the defaults.
///
/// Shallow, one level deep: every top-level key present in `stored` replaces
/// the default section wholesale, every absent key falls back to the default.
/// A stored `about` is used verbatim even when it is `{}`; a missing one is
/// backfilled from `defaults.about`.
pub fn merge(stored: &StoredDocument, defaults: &ContentDocument) -> ContentDocument {
    let mut extra = defaults.extra.clone();
    extra.extend(stored.extra.iter().map(|(k, v)| (k.clone(), v.clone())));

    ContentDocument {
        hero: stored.hero.clone().unwrap_or_else(|| defaults.hero.clone()),
        about: stored
            .about
            .clone()
            .unwrap_or_else(|| defaults.about.clone()),
        services: stored
            .services
            .clone()
            .unwrap_or_else(|| defaults.services.clone()),
        stats: stored
            .stats
            .clone()
            .unwrap_or_else(|| defaults.stats.clone()),
        contact_email: stored
            .contact_email
            .clone()
            .unwrap_or_else(|| defaults.contact_email.clone()),
        contact_phone: stored
            .contact_phone
            .clone()
            .unwrap_or_else(|| defaults.contact_phone.clone()),
        extra,
    }
}

/// The public read path: never fails, degrades to `defaults`.
///
/// A non-object payload renders the full defaults. A malformed section only
/// falls back for that key.
pub fn render_document<E: Display>(
    fetched: Result<Value, E>,
    defaults: &ContentDocument,
) -> ContentDocument {
    let value = match fetched {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "content backend unavailable, using default content");
            return defaults.clone();
        }
    };

    match StoredDocument::from_value(value) {
        Ok(stored) => {
            if stored.is_legacy() {
                tracing::debug!("stored content has no about section, backfilling from defaults");
            }
            merge(&stored, defaults)
        }
        Err(err) => {
            tracing::warn!(error = %err, "stored content rejected, using default content");
            defaults.clone()
        }
    }
}
