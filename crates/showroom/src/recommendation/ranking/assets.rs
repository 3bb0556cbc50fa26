use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Storefront identifiers joined onto catalog rows by model name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleAsset {
    pub id: String,
    pub image: String,
}

/// Static model-name to asset lookup. Keys are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetDirectory {
    entries: BTreeMap<String, VehicleAsset>,
}

impl AssetDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asset table for the models the storefront sells.
    pub fn storefront() -> Self {
        [
            ("Model S", "model-s", "/images/model-s.jpg"),
            ("Model 3", "model-3", "/images/model-3.jpg"),
            ("Model X", "model-x", "/images/model-x.jpg"),
            ("Model Y", "model-y", "/images/model-y.jpg"),
            ("Cybertruck", "cybertruck", "/images/cybertruck.jpg"),
        ]
        .into_iter()
        .fold(Self::new(), |directory, (model, id, image)| {
            directory.with_entry(model, id, image)
        })
    }

    pub fn with_entry(mut self, model: &str, id: &str, image: &str) -> Self {
        self.entries.insert(
            key(model),
            VehicleAsset {
                id: id.to_string(),
                image: image.to_string(),
            },
        );
        self
    }

    pub fn lookup(&self, model: &str) -> Option<&VehicleAsset> {
        self.entries.get(&key(model))
    }

    /// Storefront id for a model, falling back to a slug of the model name.
    pub fn id_for(&self, model: &str) -> String {
        self.lookup(model)
            .map(|asset| asset.id.clone())
            .unwrap_or_else(|| slugify(model))
    }

    pub fn image_for(&self, model: &str) -> Option<String> {
        self.lookup(model).map(|asset| asset.image.clone())
    }
}

fn key(model: &str) -> String {
    model.split_whitespace().collect::<Vec<_>>().join(" ").to_ascii_lowercase()
}

fn slugify(value: &str) -> String {
    value
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storefront_lookup_ignores_case_and_spacing() {
        let directory = AssetDirectory::storefront();
        assert_eq!(directory.id_for("model  y"), "model-y");
        assert_eq!(
            directory.image_for("CYBERTRUCK").as_deref(),
            Some("/images/cybertruck.jpg")
        );
    }

    #[test]
    fn unknown_models_fall_back_to_slug() {
        let directory = AssetDirectory::storefront();
        assert_eq!(directory.id_for("Roadster (2nd Gen)"), "roadster-2nd-gen");
        assert!(directory.image_for("Roadster").is_none());
    }
}
