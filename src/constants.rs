//! Application constants for the METAR decoder
//!
//! Conversion factors, physical constants, flight category thresholds and
//! display sentinels used throughout the crate.

// =============================================================================
// Unit Conversion Factors
// =============================================================================

/// Inches of mercury per hectopascal
pub const INHG_PER_HPA: f64 = 0.02953;

/// Feet per meter
pub const FEET_PER_METER: f64 = 3.281;

/// Pascals per inch of mercury
pub const PA_PER_INHG: f64 = 3386.39;

// =============================================================================
// Altimeter Reconciliation
// =============================================================================

/// Maximum disagreement (inHg) between the coded `A####` group and the
/// service-reported hPa value before the altimeter is considered ambiguous
pub const DEFAULT_ALTIMETER_TOLERANCE_INHG: f64 = 0.05;

/// The coded altimeter group is expressed in hundredths of inHg
pub const ALTIMETER_GROUP_SCALE: f64 = 100.0;

// =============================================================================
// Atmosphere
// =============================================================================

pub mod atmosphere {
    /// Standard sea-level pressure in inHg
    pub const STANDARD_PRESSURE_INHG: f64 = 29.92;

    /// Feet of pressure altitude per inHg below standard
    pub const FEET_PER_INHG: f64 = 1000.0;

    /// ISA sea-level temperature in degrees Celsius
    pub const ISA_SEA_LEVEL_TEMP_C: f64 = 15.0;

    /// ISA lapse rate in degrees Celsius per 1000 ft
    pub const ISA_LAPSE_RATE_C_PER_1000FT: f64 = 2.0;

    /// Density altitude change in feet per degree Celsius off ISA
    pub const DENSITY_ALTITUDE_FT_PER_C: f64 = 120.0;

    /// Specific gas constant for dry air, J/(kg·K)
    pub const DRY_AIR_GAS_CONSTANT: f64 = 287.05;

    /// Offset from Celsius to Kelvin
    pub const KELVIN_OFFSET: f64 = 273.15;

    /// Magnus formula coefficients for saturation vapor pressure (hPa)
    pub const MAGNUS_BASE_HPA: f64 = 6.11;
    pub const MAGNUS_A: f64 = 7.5;
    pub const MAGNUS_B_C: f64 = 237.3;
}

// =============================================================================
// Flight Category Thresholds
// =============================================================================

/// Ceiling (ft) and visibility (SM) floors, most severe first
pub mod flight_category {
    pub const LIFR_CEILING_FT: f64 = 500.0;
    pub const LIFR_VISIBILITY_SM: f64 = 1.0;

    pub const IFR_CEILING_FT: f64 = 1000.0;
    pub const IFR_VISIBILITY_SM: f64 = 3.0;

    pub const MVFR_CEILING_FT: f64 = 3000.0;
    pub const MVFR_VISIBILITY_SM: f64 = 5.0;
}

// =============================================================================
// Display Sentinels
// =============================================================================

pub mod sentinels {
    /// Missing numeric value
    pub const MISSING: &str = "---";

    /// Missing time, name or station identifier
    pub const UNKNOWN: &str = "Unknown";

    /// No ceiling layer reported (unlimited)
    pub const NO_CEILING: &str = "None";

    /// Undefined humidity or air density
    pub const NOT_AVAILABLE: &str = "Not available";

    /// Pressure or density altitude without a trusted altimeter
    pub const UNAVAILABLE: &str = "unavailable";
}

/// Wind direction sentinel used by the upstream service for variable winds
pub const VARIABLE_WIND_CODE: &str = "VRB";
