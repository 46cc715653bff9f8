//! Extraction settings.

use crate::error::ContourError;

/// Default number of decimals kept when exporting coordinates
pub const DEFAULT_PRECISION: u32 = 5;

/// Settings shared by the config-driven extraction entry points
///
/// # Example
///
/// ```
/// use field_marching_squares::ContourConfig;
///
/// let config = ContourConfig::new(0.25).unwrap().with_interpolation(false);
/// assert_eq!(config.cell_size, 0.25);
/// assert!(!config.use_interpolation);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContourConfig {
    /// Grid spacing in field coordinates
    pub cell_size: f64,

    /// Place crossings by linear interpolation (`true`) or at edge midpoints
    pub use_interpolation: bool,

    /// Decimal places kept by the GeoJSON export
    pub precision: u32,
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            use_interpolation: true,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl ContourConfig {
    /// Create a config with the given cell size and default settings
    pub fn new(cell_size: f64) -> Result<Self, ContourError> {
        let config = Self {
            cell_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the interpolation mode (builder pattern)
    pub fn with_interpolation(mut self, use_interpolation: bool) -> Self {
        self.use_interpolation = use_interpolation;
        self
    }

    /// Set the export precision (builder pattern)
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Check the cell size is usable
    pub fn validate(&self) -> Result<(), ContourError> {
        validate_cell_size(self.cell_size)
    }
}

pub(crate) fn validate_cell_size(cell_size: f64) -> Result<(), ContourError> {
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return Err(ContourError::InvalidCellSize(cell_size));
    }
    Ok(())
}
