use serde::{Deserialize, Serialize};
use terrace_map::{CatalogError, Category, TileCatalog};

/// The tile types a terrain brush paints with: one per [`Category`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TerrainFamily {
    pub top: String,
    pub wall: String,
    pub foot: String,
}

impl TerrainFamily {
    pub fn new(top: impl Into<String>, wall: impl Into<String>, foot: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            wall: wall.into(),
            foot: foot.into(),
        }
    }

    pub fn name(&self, category: Category) -> &str {
        match category {
            Category::Top => &self.top,
            Category::Wall => &self.wall,
            Category::Foot => &self.foot,
        }
    }

    /// Checks that every member exists, has the category of its slot, and names partners for the other two categories.
    ///
    /// Shaping will look all of these up, so checking first means a bad family fails before the scene is touched.
    pub fn validate(&self, catalog: &TileCatalog) -> Result<(), CatalogError> {
        for category in Category::ALL {
            let info = catalog.info(self.name(category))?;
            if info.category != category {
                return Err(CatalogError::CategoryMismatch {
                    name: info.name.clone(),
                    expected: category,
                    actual: info.category,
                });
            }
            for partner in Category::ALL {
                if partner != category {
                    info.compatible_name(partner)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for TerrainFamily {
    fn default() -> Self {
        Self::new("grass top", "grass wall", "grass foot")
    }
}
