//! Placement table loading and caching
//!
//! Two tables exist per grid mode: the *default* table of generic
//! adjustments and the *special* table of per-symbol exceptions. The core
//! does not define persistence; a [`TableSource`] supplies the TOML form of
//! each table from whatever storage the host provides. [`EmbeddedTables`]
//! serves the bundled reference data; [`FileTables`] reads a directory.
//!
//! Tables are loaded once per process and cached. The first caller performs
//! the load; concurrent callers during an in-flight load block on the same
//! load and share its result. A failed load is returned to the caller that
//! triggered it and retried on the next call, never cached as permanent.

pub mod default;
pub mod special;

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::debug;

use crate::motion::GridMode;

pub use default::DefaultTable;
pub use special::SpecialTable;

/// Errors that can occur while loading placement table data.
///
/// These are initialization failures: placement cannot proceed without
/// tables. Key misses during lookup are not errors (they fall back to zero
/// adjustments) and never surface here.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read placement table data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse placement table TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Source of placement table data, injected by the host application.
pub trait TableSource: Send + Sync {
    /// TOML form of the default table for a grid mode.
    fn default_table(&self, mode: GridMode) -> Result<String, TableError>;

    /// TOML form of the special table for a grid mode.
    fn special_table(&self, mode: GridMode) -> Result<String, TableError>;
}

/// The two tables consulted for one grid mode.
#[derive(Debug, Clone, Default)]
pub struct ModeTables {
    pub default: DefaultTable,
    pub special: SpecialTable,
}

/// All placement tables, both grid modes. Immutable after load.
#[derive(Debug, Clone, Default)]
pub struct PlacementTables {
    diamond: ModeTables,
    box_mode: ModeTables,
}

impl PlacementTables {
    /// Load both grid modes from a source.
    pub fn load(source: &dyn TableSource) -> Result<Self, TableError> {
        let tables = Self {
            diamond: Self::load_mode(source, GridMode::Diamond)?,
            box_mode: Self::load_mode(source, GridMode::Box)?,
        };
        debug!("placement tables loaded");
        Ok(tables)
    }

    fn load_mode(source: &dyn TableSource, mode: GridMode) -> Result<ModeTables, TableError> {
        Ok(ModeTables {
            default: DefaultTable::from_toml(&source.default_table(mode)?)?,
            special: SpecialTable::from_toml(&source.special_table(mode)?)?,
        })
    }

    /// Build directly from per-mode tables (hosts supplying in-memory data).
    pub fn from_modes(diamond: ModeTables, box_mode: ModeTables) -> Self {
        Self { diamond, box_mode }
    }

    /// The tables consulted for a grid mode.
    pub fn for_mode(&self, mode: GridMode) -> &ModeTables {
        match mode {
            GridMode::Diamond => &self.diamond,
            GridMode::Box => &self.box_mode,
        }
    }
}

/// The bundled reference tables, compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTables;

const DIAMOND_DEFAULT: &str = include_str!("../../data/diamond_default.toml");
const BOX_DEFAULT: &str = include_str!("../../data/box_default.toml");
const DIAMOND_SPECIAL: &str = include_str!("../../data/diamond_special.toml");
const BOX_SPECIAL: &str = include_str!("../../data/box_special.toml");

impl TableSource for EmbeddedTables {
    fn default_table(&self, mode: GridMode) -> Result<String, TableError> {
        Ok(match mode {
            GridMode::Diamond => DIAMOND_DEFAULT.to_string(),
            GridMode::Box => BOX_DEFAULT.to_string(),
        })
    }

    fn special_table(&self, mode: GridMode) -> Result<String, TableError> {
        Ok(match mode {
            GridMode::Diamond => DIAMOND_SPECIAL.to_string(),
            GridMode::Box => BOX_SPECIAL.to_string(),
        })
    }
}

/// Tables read from a directory of `<mode>_default.toml` /
/// `<mode>_special.toml` files.
#[derive(Debug, Clone)]
pub struct FileTables {
    dir: PathBuf,
}

impl FileTables {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read(&self, mode: GridMode, kind: &str) -> Result<String, TableError> {
        let path = self.dir.join(format!("{mode}_{kind}.toml"));
        Ok(std::fs::read_to_string(path)?)
    }
}

impl TableSource for FileTables {
    fn default_table(&self, mode: GridMode) -> Result<String, TableError> {
        self.read(mode, "default")
    }

    fn special_table(&self, mode: GridMode) -> Result<String, TableError> {
        self.read(mode, "special")
    }
}

/// Memoized, load-once table cache.
///
/// `get_or_load` has single-flight semantics: concurrent first callers block
/// on the in-flight load and observe the same result. Errors are returned,
/// not cached, so the next call retries the load.
#[derive(Debug, Default)]
pub struct TableCache {
    cell: OnceCell<Arc<PlacementTables>>,
}

impl TableCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// The cached tables, loading them from `source` on first use.
    pub fn get_or_load(&self, source: &dyn TableSource) -> Result<Arc<PlacementTables>, TableError> {
        self.cell
            .get_or_try_init(|| PlacementTables::load(source).map(Arc::new))
            .cloned()
    }

    /// Whether a load has completed successfully.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}
