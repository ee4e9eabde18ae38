//! Category types for product organization.

use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Category description.
    pub description: String,
    /// Short display token, typically an emoji.
    pub icon: String,
    /// Parent category. Weak reference: no cycle check, no traversal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryId>,
    /// Whether the category is shown on the storefront.
    pub is_active: bool,
    /// Denormalized product counter, set once at creation or seed time and
    /// never recomputed on product mutations. Use
    /// [`crate::search::live_product_count`] when an accurate number
    /// matters.
    pub products_count: i64,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Category {
    /// Check if this is a top-level category.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Input for [`super::CatalogStore::add_category`]: a category minus the
/// fields the store assigns (id, creation date, and the stored counter,
/// which starts at zero regardless of actual membership).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl NewCategory {
    /// Create a new category draft.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            parent_id: None,
            is_active: true,
        }
    }

    /// Set the parent category.
    pub fn with_parent(mut self, parent_id: CategoryId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Mark the category as hidden from the storefront.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Partial update for [`super::CatalogStore::update_category`].
///
/// `None` fields are retained. The stored counter is not patchable; it only
/// changes at creation or seed time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub parent_id: Option<CategoryId>,
    pub is_active: Option<bool>,
}

impl CategoryPatch {
    /// Merge the patch into an existing category.
    pub(crate) fn apply(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(description) = self.description {
            category.description = description;
        }
        if let Some(icon) = self.icon {
            category.icon = icon;
        }
        if let Some(parent_id) = self.parent_id {
            category.parent_id = Some(parent_id);
        }
        if let Some(is_active) = self.is_active {
            category.is_active = is_active;
        }
    }
}
