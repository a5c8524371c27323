//! Common test fixtures for land/sea weighting tests.
//!
//! This module provides pre-defined shapes and fx sources that represent
//! common scenarios in weighting gridded model output.

/// Common field shapes.
pub mod shapes {
    /// Small 2-D target grid.
    pub const GRID_2X3: [usize; 2] = [2, 3];

    /// Single grid cell, broadcastable against any 2-D grid.
    pub const SINGLE_CELL: [usize; 2] = [1, 1];

    /// 1-D shape that matches neither 3 nor 1 in the trailing dimension.
    pub const INCOMPATIBLE_4: [usize; 1] = [4];

    /// Static (lat, lon) grid, as carried by fx variables.
    pub const STATIC_4X8: [usize; 2] = [4, 8];

    /// Monthly (time, lat, lon) field on the static grid.
    pub const MONTHLY_12X4X8: [usize; 3] = [12, 4, 8];
}

/// Common fx source names used with in-memory loaders.
pub mod fx_sources {
    /// Land area fraction file
    pub const SFTLF: &str = "fx/sftlf_fx_historical_r0i0p0.nc";

    /// Sea area fraction file
    pub const SFTOF: &str = "fx/sftof_fx_historical_r0i0p0.nc";

    /// Grid cell area file (not usable for land fraction)
    pub const AREACELLA: &str = "fx/areacella_fx_historical_r0i0p0.nc";
}

/// Common target variable names.
pub mod variables {
    /// Gross primary production (land carbon flux)
    pub const GPP: &str = "gpp";

    /// Net biome production
    pub const NBP: &str = "nbp";

    /// Surface downward CO2 flux into the ocean
    pub const FGCO2: &str = "fgco2";
}
