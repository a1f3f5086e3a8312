//! Standard spectral lines used to characterise optical glass.
//!
//! Wavelengths are the Fraunhofer / mercury / cadmium lines quoted in
//! manufacturer datasheets, in nanometres.
//!
//! | Token | Source | λ (nm) |
//! |-------|--------|--------|
//! | `t` | Hg IR | 1013.98 |
//! | `s` | Cs IR | 852.11 |
//! | `r` | He red | 706.5188 |
//! | `C` | H red | 656.2725 |
//! | `C_` | Cd red | 643.8469 |
//! | `D` | Na yellow | 589.2938 |
//! | `d` | He yellow | 587.5618 |
//! | `e` | Hg green | 546.074 |
//! | `F` | H blue | 486.1327 |
//! | `F_` | Cd blue | 479.9914 |
//! | `g` | Hg violet | 435.8343 |
//! | `h` | Hg violet | 404.6561 |
//! | `i` | Hg UV | 365.0146 |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GlassError;

/// A named reference wavelength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralLine {
    T,
    S,
    R,
    C,
    CPrime,
    DSodium,
    D,
    E,
    F,
    FPrime,
    G,
    H,
    I,
}

impl SpectralLine {
    /// All lines, longest wavelength first.
    pub const ALL: [SpectralLine; 13] = [
        SpectralLine::T,
        SpectralLine::S,
        SpectralLine::R,
        SpectralLine::C,
        SpectralLine::CPrime,
        SpectralLine::DSodium,
        SpectralLine::D,
        SpectralLine::E,
        SpectralLine::F,
        SpectralLine::FPrime,
        SpectralLine::G,
        SpectralLine::H,
        SpectralLine::I,
    ];

    /// Token used in catalogs and on the command line (`"d"`, `"F_"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            SpectralLine::T => "t",
            SpectralLine::S => "s",
            SpectralLine::R => "r",
            SpectralLine::C => "C",
            SpectralLine::CPrime => "C_",
            SpectralLine::DSodium => "D",
            SpectralLine::D => "d",
            SpectralLine::E => "e",
            SpectralLine::F => "F",
            SpectralLine::FPrime => "F_",
            SpectralLine::G => "g",
            SpectralLine::H => "h",
            SpectralLine::I => "i",
        }
    }

    /// Wavelength in nanometres.
    pub const fn wavelength_nm(self) -> f64 {
        match self {
            SpectralLine::T => 1013.98,
            SpectralLine::S => 852.11,
            SpectralLine::R => 706.5188,
            SpectralLine::C => 656.2725,
            SpectralLine::CPrime => 643.8469,
            SpectralLine::DSodium => 589.2938,
            SpectralLine::D => 587.5618,
            SpectralLine::E => 546.074,
            SpectralLine::F => 486.1327,
            SpectralLine::FPrime => 479.9914,
            SpectralLine::G => 435.8343,
            SpectralLine::H => 404.6561,
            SpectralLine::I => 365.0146,
        }
    }

    /// Wavelength in micrometres, the unit every dispersion formula expects.
    pub fn wavelength_micron(self) -> f64 {
        self.wavelength_nm() / 1000.0
    }
}

impl fmt::Display for SpectralLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpectralLine {
    type Err = GlassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C'" => return Ok(SpectralLine::CPrime),
            "F'" => return Ok(SpectralLine::FPrime),
            _ => {}
        }
        SpectralLine::ALL
            .into_iter()
            .find(|line| line.name() == s)
            .ok_or_else(|| GlassError::UnknownSpectralLine(s.to_string()))
    }
}

/// Look up a line wavelength (nm) by token.
pub fn wavelength_nm(name: &str) -> Option<f64> {
    name.parse::<SpectralLine>().ok().map(SpectralLine::wavelength_nm)
}
