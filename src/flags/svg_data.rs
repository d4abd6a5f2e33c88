//! Flag SVG markup embedded at compile time.
//!
//! The artwork under `assets/flags/` is pre-generated per size from the
//! flagpack source drawings; each size ships its own file.

use crate::flags::size::FlagSize;

// =============================================================================
// Americas
// =============================================================================
const FLAG_US_S: &str = include_str!("../../assets/flags/s/US.svg");
const FLAG_US_M: &str = include_str!("../../assets/flags/m/US.svg");
const FLAG_US_L: &str = include_str!("../../assets/flags/l/US.svg");

// =============================================================================
// Europe - Western
// =============================================================================
const FLAG_AT_S: &str = include_str!("../../assets/flags/s/AT.svg");
const FLAG_AT_M: &str = include_str!("../../assets/flags/m/AT.svg");
const FLAG_AT_L: &str = include_str!("../../assets/flags/l/AT.svg");
const FLAG_BE_S: &str = include_str!("../../assets/flags/s/BE.svg");
const FLAG_BE_M: &str = include_str!("../../assets/flags/m/BE.svg");
const FLAG_BE_L: &str = include_str!("../../assets/flags/l/BE.svg");
const FLAG_DE_S: &str = include_str!("../../assets/flags/s/DE.svg");
const FLAG_DE_M: &str = include_str!("../../assets/flags/m/DE.svg");
const FLAG_DE_L: &str = include_str!("../../assets/flags/l/DE.svg");
const FLAG_FR_S: &str = include_str!("../../assets/flags/s/FR.svg");
const FLAG_FR_M: &str = include_str!("../../assets/flags/m/FR.svg");
const FLAG_FR_L: &str = include_str!("../../assets/flags/l/FR.svg");
const FLAG_GB_S: &str = include_str!("../../assets/flags/s/GB.svg");
const FLAG_GB_M: &str = include_str!("../../assets/flags/m/GB.svg");
const FLAG_GB_L: &str = include_str!("../../assets/flags/l/GB.svg");
const FLAG_IE_S: &str = include_str!("../../assets/flags/s/IE.svg");
const FLAG_IE_M: &str = include_str!("../../assets/flags/m/IE.svg");
const FLAG_IE_L: &str = include_str!("../../assets/flags/l/IE.svg");
const FLAG_LU_S: &str = include_str!("../../assets/flags/s/LU.svg");
const FLAG_LU_M: &str = include_str!("../../assets/flags/m/LU.svg");
const FLAG_LU_L: &str = include_str!("../../assets/flags/l/LU.svg");
const FLAG_MC_S: &str = include_str!("../../assets/flags/s/MC.svg");
const FLAG_MC_M: &str = include_str!("../../assets/flags/m/MC.svg");
const FLAG_MC_L: &str = include_str!("../../assets/flags/l/MC.svg");
const FLAG_NL_S: &str = include_str!("../../assets/flags/s/NL.svg");
const FLAG_NL_M: &str = include_str!("../../assets/flags/m/NL.svg");
const FLAG_NL_L: &str = include_str!("../../assets/flags/l/NL.svg");

// =============================================================================
// Europe - Southern
// =============================================================================
const FLAG_IT_S: &str = include_str!("../../assets/flags/s/IT.svg");
const FLAG_IT_M: &str = include_str!("../../assets/flags/m/IT.svg");
const FLAG_IT_L: &str = include_str!("../../assets/flags/l/IT.svg");

// =============================================================================
// Europe - Central & Eastern
// =============================================================================
const FLAG_BG_S: &str = include_str!("../../assets/flags/s/BG.svg");
const FLAG_BG_M: &str = include_str!("../../assets/flags/m/BG.svg");
const FLAG_BG_L: &str = include_str!("../../assets/flags/l/BG.svg");
const FLAG_HU_S: &str = include_str!("../../assets/flags/s/HU.svg");
const FLAG_HU_M: &str = include_str!("../../assets/flags/m/HU.svg");
const FLAG_HU_L: &str = include_str!("../../assets/flags/l/HU.svg");
const FLAG_PL_S: &str = include_str!("../../assets/flags/s/PL.svg");
const FLAG_PL_M: &str = include_str!("../../assets/flags/m/PL.svg");
const FLAG_PL_L: &str = include_str!("../../assets/flags/l/PL.svg");
const FLAG_RO_S: &str = include_str!("../../assets/flags/s/RO.svg");
const FLAG_RO_M: &str = include_str!("../../assets/flags/m/RO.svg");
const FLAG_RO_L: &str = include_str!("../../assets/flags/l/RO.svg");
const FLAG_RU_S: &str = include_str!("../../assets/flags/s/RU.svg");
const FLAG_RU_M: &str = include_str!("../../assets/flags/m/RU.svg");
const FLAG_RU_L: &str = include_str!("../../assets/flags/l/RU.svg");
const FLAG_UA_S: &str = include_str!("../../assets/flags/s/UA.svg");
const FLAG_UA_M: &str = include_str!("../../assets/flags/m/UA.svg");
const FLAG_UA_L: &str = include_str!("../../assets/flags/l/UA.svg");

// =============================================================================
// Europe - Nordic & Baltic
// =============================================================================
const FLAG_DK_S: &str = include_str!("../../assets/flags/s/DK.svg");
const FLAG_DK_M: &str = include_str!("../../assets/flags/m/DK.svg");
const FLAG_DK_L: &str = include_str!("../../assets/flags/l/DK.svg");
const FLAG_EE_S: &str = include_str!("../../assets/flags/s/EE.svg");
const FLAG_EE_M: &str = include_str!("../../assets/flags/m/EE.svg");
const FLAG_EE_L: &str = include_str!("../../assets/flags/l/EE.svg");
const FLAG_FI_S: &str = include_str!("../../assets/flags/s/FI.svg");
const FLAG_FI_M: &str = include_str!("../../assets/flags/m/FI.svg");
const FLAG_FI_L: &str = include_str!("../../assets/flags/l/FI.svg");
const FLAG_LT_S: &str = include_str!("../../assets/flags/s/LT.svg");
const FLAG_LT_M: &str = include_str!("../../assets/flags/m/LT.svg");
const FLAG_LT_L: &str = include_str!("../../assets/flags/l/LT.svg");
const FLAG_NO_S: &str = include_str!("../../assets/flags/s/NO.svg");
const FLAG_NO_M: &str = include_str!("../../assets/flags/m/NO.svg");
const FLAG_NO_L: &str = include_str!("../../assets/flags/l/NO.svg");
const FLAG_SE_S: &str = include_str!("../../assets/flags/s/SE.svg");
const FLAG_SE_M: &str = include_str!("../../assets/flags/m/SE.svg");
const FLAG_SE_L: &str = include_str!("../../assets/flags/l/SE.svg");

// =============================================================================
// Asia
// =============================================================================
const FLAG_BD_S: &str = include_str!("../../assets/flags/s/BD.svg");
const FLAG_BD_M: &str = include_str!("../../assets/flags/m/BD.svg");
const FLAG_BD_L: &str = include_str!("../../assets/flags/l/BD.svg");
const FLAG_ID_S: &str = include_str!("../../assets/flags/s/ID.svg");
const FLAG_ID_M: &str = include_str!("../../assets/flags/m/ID.svg");
const FLAG_ID_L: &str = include_str!("../../assets/flags/l/ID.svg");
const FLAG_JP_S: &str = include_str!("../../assets/flags/s/JP.svg");
const FLAG_JP_M: &str = include_str!("../../assets/flags/m/JP.svg");
const FLAG_JP_L: &str = include_str!("../../assets/flags/l/JP.svg");

// =============================================================================
// Africa
// =============================================================================
const FLAG_CI_S: &str = include_str!("../../assets/flags/s/CI.svg");
const FLAG_CI_M: &str = include_str!("../../assets/flags/m/CI.svg");
const FLAG_CI_L: &str = include_str!("../../assets/flags/l/CI.svg");
const FLAG_ML_S: &str = include_str!("../../assets/flags/s/ML.svg");
const FLAG_ML_M: &str = include_str!("../../assets/flags/m/ML.svg");
const FLAG_ML_L: &str = include_str!("../../assets/flags/l/ML.svg");
const FLAG_NG_S: &str = include_str!("../../assets/flags/s/NG.svg");
const FLAG_NG_M: &str = include_str!("../../assets/flags/m/NG.svg");
const FLAG_NG_L: &str = include_str!("../../assets/flags/l/NG.svg");
const FLAG_TD_S: &str = include_str!("../../assets/flags/s/TD.svg");
const FLAG_TD_M: &str = include_str!("../../assets/flags/m/TD.svg");
const FLAG_TD_L: &str = include_str!("../../assets/flags/l/TD.svg");

// =============================================================================
// Fallback
// =============================================================================
const FLAG_001_S: &str = include_str!("../../assets/flags/s/001.svg");
const FLAG_001_M: &str = include_str!("../../assets/flags/m/001.svg");
const FLAG_001_L: &str = include_str!("../../assets/flags/l/001.svg");

/// Canonical codes with packaged artwork; every code carries all three sizes.
pub const EMBEDDED_CODES: &[&str] = &[
    "US", "AT", "BE", "DE", "FR", "GB", "IE", "LU", "MC",
    "NL", "IT", "BG", "HU", "PL", "RO", "RU", "UA", "DK",
    "EE", "FI", "LT", "NO", "SE", "BD", "ID", "JP", "CI",
    "ML", "NG", "TD", "001",
];

/// Embedded SVG markup for a flag code at the given size.
///
/// Codes outside the packaged set return `None`.
pub fn embedded_flag(code: &str, size: FlagSize) -> Option<&'static str> {
    let (s, m, l) = match code.to_uppercase().as_str() {
        // Americas
        "US" => (FLAG_US_S, FLAG_US_M, FLAG_US_L),

        // Europe - Western
        "AT" => (FLAG_AT_S, FLAG_AT_M, FLAG_AT_L),
        "BE" => (FLAG_BE_S, FLAG_BE_M, FLAG_BE_L),
        "DE" => (FLAG_DE_S, FLAG_DE_M, FLAG_DE_L),
        "FR" => (FLAG_FR_S, FLAG_FR_M, FLAG_FR_L),
        "GB" => (FLAG_GB_S, FLAG_GB_M, FLAG_GB_L),
        "IE" => (FLAG_IE_S, FLAG_IE_M, FLAG_IE_L),
        "LU" => (FLAG_LU_S, FLAG_LU_M, FLAG_LU_L),
        "MC" => (FLAG_MC_S, FLAG_MC_M, FLAG_MC_L),
        "NL" => (FLAG_NL_S, FLAG_NL_M, FLAG_NL_L),

        // Europe - Southern
        "IT" => (FLAG_IT_S, FLAG_IT_M, FLAG_IT_L),

        // Europe - Central & Eastern
        "BG" => (FLAG_BG_S, FLAG_BG_M, FLAG_BG_L),
        "HU" => (FLAG_HU_S, FLAG_HU_M, FLAG_HU_L),
        "PL" => (FLAG_PL_S, FLAG_PL_M, FLAG_PL_L),
        "RO" => (FLAG_RO_S, FLAG_RO_M, FLAG_RO_L),
        "RU" => (FLAG_RU_S, FLAG_RU_M, FLAG_RU_L),
        "UA" => (FLAG_UA_S, FLAG_UA_M, FLAG_UA_L),

        // Europe - Nordic & Baltic
        "DK" => (FLAG_DK_S, FLAG_DK_M, FLAG_DK_L),
        "EE" => (FLAG_EE_S, FLAG_EE_M, FLAG_EE_L),
        "FI" => (FLAG_FI_S, FLAG_FI_M, FLAG_FI_L),
        "LT" => (FLAG_LT_S, FLAG_LT_M, FLAG_LT_L),
        "NO" => (FLAG_NO_S, FLAG_NO_M, FLAG_NO_L),
        "SE" => (FLAG_SE_S, FLAG_SE_M, FLAG_SE_L),

        // Asia
        "BD" => (FLAG_BD_S, FLAG_BD_M, FLAG_BD_L),
        "ID" => (FLAG_ID_S, FLAG_ID_M, FLAG_ID_L),
        "JP" => (FLAG_JP_S, FLAG_JP_M, FLAG_JP_L),

        // Africa
        "CI" => (FLAG_CI_S, FLAG_CI_M, FLAG_CI_L),
        "ML" => (FLAG_ML_S, FLAG_ML_M, FLAG_ML_L),
        "NG" => (FLAG_NG_S, FLAG_NG_M, FLAG_NG_L),
        "TD" => (FLAG_TD_S, FLAG_TD_M, FLAG_TD_L),

        // Fallback
        "001" => (FLAG_001_S, FLAG_001_M, FLAG_001_L),
        _ => return None,
    };

    Some(match size {
        FlagSize::Small => s,
        FlagSize::Medium => m,
        FlagSize::Large => l,
    })
}
