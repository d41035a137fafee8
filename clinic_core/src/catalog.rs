//! Default treatment catalog and menu filtering.
//!
//! The catalog is read-only reference data: the booking core looks
//! treatments up in it but never changes it.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Tab id that shows every category
pub const ALL_TAB: &str = "all";

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds a fresh copy of the default catalog
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference. This function is retained for testing and custom catalogs.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

/// The treatment new drafts start with, and that `reset` restores
pub fn default_treatment() -> Treatment {
    Treatment::new(
        "General Consultation",
        "$30",
        "Full facial analysis & treatment plan.",
    )
}

fn category(id: &str, name: &str, items: &[(&str, &str, &str)]) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        items: items
            .iter()
            .map(|(name, price, desc)| Treatment::new(*name, *price, *desc))
            .collect(),
    }
}

fn build_default_catalog_internal() -> Catalog {
    let categories = vec![
        category(
            "consult",
            "Consultation",
            &[
                ("General Consultation", "$30", "Full facial analysis & treatment plan."),
                ("Skin Analysis", "$40", "In-depth diagnostic of skin health."),
                ("Injectables Planning", "$30", "Mapping for volume & contour."),
            ],
        ),
        category(
            "contour",
            "Contour & Volume",
            &[
                ("Lip Augmentation", "$150+", "Subtle volume using premium hyaluronic acid."),
                ("Cheekbone Definition", "$150+", "Lift and define the mid-face."),
                ("Chin Correction", "$150+", "Profile balancing and projection."),
                ("Nasolabial Folds", "$150+", "Softening deep lines."),
                ("Juvederm Smile (0.55ml)", "$150", "Natural lip enhancement."),
                ("Stylage L (1ml)", "$220", "Volumizing filler for deep folds."),
            ],
        ),
        category(
            "tox",
            "Botulinum Therapy",
            &[
                ("Upper Face (3 Zones)", "$170", "Forehead, frown, and crow's feet."),
                ("Forehead + Frown", "$115", "Targeted wrinkle reduction."),
                ("Brow Lift", "$50", "Subtle lift to open the eyes."),
                ("Hyperhidrosis", "$220", "Treatment for excessive sweating."),
            ],
        ),
        category(
            "bio",
            "Biorevitalization",
            &[
                ("Biogel (1ml)", "$65", "Deep hydration and skin quality."),
                ("Jalupro (2.5ml)", "$225", "Amino acid replacement therapy."),
                ("Novacutan (2ml)", "$190", "Advanced skin protection."),
                ("Plinest Fast (2ml)", "$215", "Polynucleotides for regeneration."),
            ],
        ),
        category(
            "facials",
            "Clinical Facials",
            &[
                ("Glass Skin Facial", "$120", "Deep cleansing & hydration."),
                ("BioRePeel", "$60", "Biphasic peel, no downtime."),
                ("PRX-T33", "$60", "Needle-free biorevitalization."),
                ("Retinol Yellow Peel", "$50", "Intensive resurfacing."),
            ],
        ),
        category(
            "laser",
            "Laser Hair Removal",
            &[
                ("Full Face", "$25", "Gentle removal for face."),
                ("Underarms", "$20", "Quick & effective."),
                ("Bikini (Total)", "$50", "Complete clearance."),
                ("Full Legs", "$55", "Silky smooth results."),
            ],
        ),
    ];

    Catalog { categories }
}

/// Categories visible under the given menu tab
///
/// `"all"` yields every category; any other id yields the matching
/// category, or nothing if no category has that id.
pub fn filter_catalog<'a>(categories: &'a [Category], active_tab_id: &str) -> Vec<&'a Category> {
    if active_tab_id == ALL_TAB {
        return categories.iter().collect();
    }

    categories
        .iter()
        .filter(|c| c.id == active_tab_id)
        .collect()
}

impl Catalog {
    /// Find a treatment by name (case-insensitive), first match in menu order
    pub fn find_treatment(&self, name: &str) -> Option<&Treatment> {
        let wanted = name.trim();
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|t| t.name.eq_ignore_ascii_case(wanted))
    }

    /// All treatments in menu order
    pub fn treatments(&self) -> impl Iterator<Item = &Treatment> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen_ids = HashSet::new();

        if self.categories.is_empty() {
            errors.push("Catalog has no categories".to_string());
        }

        for cat in &self.categories {
            if cat.id.is_empty() {
                errors.push(format!("Category '{}' has empty ID", cat.name));
            } else if cat.id == ALL_TAB {
                errors.push(format!("Category ID '{}' is reserved", ALL_TAB));
            } else if !seen_ids.insert(cat.id.as_str()) {
                errors.push(format!("Duplicate category ID '{}'", cat.id));
            }

            if cat.name.is_empty() {
                errors.push(format!("Category '{}' has empty name", cat.id));
            }
            if cat.items.is_empty() {
                errors.push(format!("Category '{}' has no treatments", cat.id));
            }

            for item in &cat.items {
                if item.name.is_empty() {
                    errors.push(format!("Category '{}' has a treatment with empty name", cat.id));
                }
                if item.price.is_empty() {
                    errors.push(format!(
                        "Treatment '{}' in '{}' has empty price",
                        item.name, cat.id
                    ));
                }
            }
        }

        errors
    }
}
