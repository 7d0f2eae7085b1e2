// ============================================================
// Layer 3 — Samas Types
// ============================================================
// The fixed table mapping a label code to the full Gujarati name
// of the compound-word type.
//
//   D  → દ્વંદ્વ સમાસ
//   T  → તત્પુરૂષ સમાસ
//   M  → માધ્યમપદલોપી સમાસ
//   U  → ઉપપદ સમાસ
//   K  → કર્મધારય સમાસ
//   B  → બહુવ્રિહી સમાસ
//   DV → દ્વીગુ સમાસ
//
// Codes outside this table are not an error: the raw code is
// shown as the display name instead.

use serde::{Deserialize, Serialize};

/// The seven recognised grammatical types of compound word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SamasType {
    Dvandva,
    Tatpurush,
    Madhyampadlopi,
    Upapad,
    Karmadharay,
    Bahuvrihi,
    Dvigu,
}

impl SamasType {
    /// Every type, in the order the label table lists them
    pub const ALL: [SamasType; 7] = [
        SamasType::Dvandva,
        SamasType::Tatpurush,
        SamasType::Madhyampadlopi,
        SamasType::Upapad,
        SamasType::Karmadharay,
        SamasType::Bahuvrihi,
        SamasType::Dvigu,
    ];

    /// Parse a label code. Exact match only — "t" or " T" are unknown.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "D"  => Some(SamasType::Dvandva),
            "T"  => Some(SamasType::Tatpurush),
            "M"  => Some(SamasType::Madhyampadlopi),
            "U"  => Some(SamasType::Upapad),
            "K"  => Some(SamasType::Karmadharay),
            "B"  => Some(SamasType::Bahuvrihi),
            "DV" => Some(SamasType::Dvigu),
            _    => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            SamasType::Dvandva        => "D",
            SamasType::Tatpurush      => "T",
            SamasType::Madhyampadlopi => "M",
            SamasType::Upapad         => "U",
            SamasType::Karmadharay    => "K",
            SamasType::Bahuvrihi      => "B",
            SamasType::Dvigu          => "DV",
        }
    }

    /// Full Gujarati display name
    pub fn display_name(self) -> &'static str {
        match self {
            SamasType::Dvandva        => "દ્વંદ્વ સમાસ",
            SamasType::Tatpurush      => "તત્પુરૂષ સમાસ",
            SamasType::Madhyampadlopi => "માધ્યમપદલોપી સમાસ",
            SamasType::Upapad         => "ઉપપદ સમાસ",
            SamasType::Karmadharay    => "કર્મધારય સમાસ",
            SamasType::Bahuvrihi      => "બહુવ્રિહી સમાસ",
            SamasType::Dvigu          => "દ્વીગુ સમાસ",
        }
    }
}

/// Map a raw label code to its display name, passing unknown codes through.
pub fn display_name_for(label: &str) -> &str {
    match SamasType::from_code(label) {
        Some(t) => t.display_name(),
        None => {
            tracing::debug!("Unknown label code '{}' — showing it verbatim", label);
            label
        }
    }
}
