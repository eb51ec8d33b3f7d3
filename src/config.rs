use crate::{LoadError, TerrainFamily};

use serde::{Deserialize, Serialize};
use std::path::Path;
use terrace_map::{TileCatalog, TileSetDesc};

/// Editing settings, usually read from a RON file.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Floor of every column. Placements below this height are ignored.
    pub lowest_height: i32,
    /// What the editor paints with when the caller doesn't pick a family.
    pub family: TerrainFamily,
}

impl Config {
    pub fn read_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let reader = std::fs::File::open(path)?;

        Ok(ron::de::from_reader(reader)?)
    }
}

/// Reads a RON [`TileSetDesc`] and builds the catalog it describes.
pub fn read_catalog_file(path: impl AsRef<Path>) -> Result<TileCatalog, LoadError> {
    let path = path.as_ref();
    let reader = std::fs::File::open(path)?;
    let desc: TileSetDesc = ron::de::from_reader(reader)?;
    log::debug!("Read {} tile descriptions from {}", desc.tiles.len(), path.display());

    Ok(TileCatalog::from_desc(&desc)?)
}

pub fn parse_catalog(source: &str) -> Result<TileCatalog, LoadError> {
    let desc: TileSetDesc = ron::from_str(source)?;

    Ok(TileCatalog::from_desc(&desc)?)
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;

    use terrace_map::{CatalogError, Category, Pattern};

    #[test]
    fn shipped_config_parses() {
        let config: Config = ron::from_str(include_str!("../assets/config.ron")).unwrap();

        assert_eq!(config.lowest_height, 0);
        assert_eq!(config.family, TerrainFamily::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = ron::from_str("(lowest_height: -4)").unwrap();

        assert_eq!(
            config,
            Config {
                lowest_height: -4,
                family: TerrainFamily::default()
            }
        );
    }

    #[test]
    fn shipped_catalog_builds() {
        let catalog = parse_catalog(include_str!("../assets/grasslands.ron")).unwrap();

        assert_eq!(catalog.num_tile_types(), 3);
        assert_eq!(catalog.category("grass foot"), Ok(Category::Foot));
        assert!(TerrainFamily::default().validate(&catalog).is_ok());
        let wall = catalog.info("grass wall").unwrap();
        assert_eq!(wall.num_variants(Pattern::Edges, terrace_map::SubPosition::BottomLeft), 2);
    }

    #[test]
    fn catalog_errors_pass_through() {
        let source = r#"(
            tiles: {
                "bare top": (
                    category: Top,
                    patterns: { Center: [(0, 0)] },
                ),
            },
        )"#;

        match parse_catalog(source) {
            Err(LoadError::Catalog(CatalogError::MissingPattern { name, pattern })) => {
                assert_eq!(name, "bare top");
                assert_eq!(pattern, Pattern::Patch);
            }
            other => panic!("unexpected result {:?}", other.map(|c| c.num_tile_types())),
        }
    }

    #[test]
    fn syntax_errors_are_reported() {
        assert!(matches!(parse_catalog("(tiles: {"), Err(LoadError::Ron(_))));
    }
}
