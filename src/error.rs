//! Error types for arm-motion.
//!
//! Kinematic edge cases (unreachable or degenerate targets) are not errors:
//! the solver clamps them to a reachable posture. Errors cover bad
//! configuration, rejected target edits and controller misuse.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all arm-motion operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Target admission error
    Target(TargetError),
    /// Controller state error
    Motion(MotionError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Link length must be finite and > 0
    InvalidLinkLength {
        /// Link index (1, 2 or 3)
        link: u8,
        /// Offending length
        value: f32,
    },
    /// Joint max velocity must be finite and > 0
    InvalidMaxVelocity {
        /// Joint name
        joint: &'static str,
        /// Offending value
        value: f32,
    },
    /// Joint max acceleration must be finite and > 0
    InvalidMaxAcceleration {
        /// Joint name
        joint: &'static str,
        /// Offending value
        value: f32,
    },
    /// Base height must lie in [0, l1)
    InvalidBaseHeight {
        /// Offending base height
        base_height: f32,
        /// Floor-to-shoulder link length
        l1: f32,
    },
    /// Ramp fraction must lie in (0, 0.5)
    InvalidRampFraction(f32),
    /// Creep velocity must be finite, > 0 and no greater than any joint's max velocity
    InvalidCreepVelocity(f32),
    /// Workspace bounds: min must be < max
    InvalidBounds {
        /// Minimum bound
        min: f32,
        /// Maximum bound
        max: f32,
    },
    /// Animated step delay must be > 0 ms
    InvalidStepDelay(u32),
    /// Named target not found in configuration
    TargetNotFound(heapless::String<32>),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Target admission errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TargetError {
    /// A coordinate is NaN or infinite
    NonFinite,
    /// A coordinate lies outside the workspace bounds under the reject policy
    OutOfBounds {
        /// Axis name ("x", "y" or "z")
        axis: &'static str,
        /// Requested coordinate
        value: f32,
        /// Lower bound
        min: f32,
        /// Upper bound
        max: f32,
    },
    /// Target name too long or otherwise unusable
    InvalidName(heapless::String<64>),
    /// Registry has no room left
    RegistryFull,
}

/// Controller state errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionError {
    /// A motion is already running; the new target was ignored
    Busy,
    /// Operation requires a running motion
    NotRunning,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Target(e) => write!(f, "Target error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidLinkLength { link, value } => {
                write!(f, "Invalid length for link {}: {}. Must be > 0", link, value)
            }
            ConfigError::InvalidMaxVelocity { joint, value } => {
                write!(f, "Invalid max velocity for joint '{}': {}. Must be > 0", joint, value)
            }
            ConfigError::InvalidMaxAcceleration { joint, value } => {
                write!(f, "Invalid max acceleration for joint '{}': {}. Must be > 0", joint, value)
            }
            ConfigError::InvalidBaseHeight { base_height, l1 } => {
                write!(f, "Invalid base height: {}. Must be in [0, l1 = {})", base_height, l1)
            }
            ConfigError::InvalidRampFraction(v) => {
                write!(f, "Invalid ramp fraction: {}. Must be in (0, 0.5)", v)
            }
            ConfigError::InvalidCreepVelocity(v) => {
                write!(f, "Invalid creep velocity: {}. Must be > 0 and <= joint max velocity", v)
            }
            ConfigError::InvalidBounds { min, max } => {
                write!(f, "Invalid workspace bounds: min ({}) must be < max ({})", min, max)
            }
            ConfigError::InvalidStepDelay(v) => {
                write!(f, "Invalid step delay: {} ms. Must be > 0", v)
            }
            ConfigError::TargetNotFound(name) => write!(f, "Target '{}' not found", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetError::NonFinite => write!(f, "Target coordinates must be finite"),
            TargetError::OutOfBounds { axis, value, min, max } => {
                write!(f, "Target {} = {} outside workspace [{}, {}]", axis, value, min, max)
            }
            TargetError::InvalidName(name) => write!(f, "Invalid target name: {}", name),
            TargetError::RegistryFull => write!(f, "Target registry is full"),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::Busy => write!(f, "Motion in progress, target ignored"),
            MotionError::NotRunning => write!(f, "No motion in progress"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<TargetError> for Error {
    fn from(e: TargetError) -> Self {
        Error::Target(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for TargetError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}
