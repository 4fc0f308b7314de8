//! Content store — the fixed set of citable thesis sections.
//!
//! Stands in for a search index over the thesis. The sections are compiled
//! into the binary and the store only ever hands out shared references.

use cryochat_core::Section;
use std::collections::HashSet;

/// The thesis excerpts the assistant can answer from, in store order.
pub static THESIS_SECTIONS: [Section; 5] = [
    Section {
        id: "intro-mb-breakdown",
        title: "Maxwell-Boltzmann Approximation Breakdown",
        page_start: 15,
        keywords: &["maxwell-boltzmann", "fermi-dirac", "statistics", "4k", "breakdown", "physics"],
        content: "At cryogenic temperatures, the Maxwell-Boltzmann (MB) approximation is not valid anymore; the intrinsic carrier concentration ni becomes extremely small (e.g., 10^-678 cm^-3 at 4.2K), resulting in enormous arithmetic underflows. Physically, if the Fermi level crosses the conduction band edge (Ef >= 0), MB leads to a huge overestimation of carrier densities. The electron distribution must be described by Fermi-Dirac statistics to account for degeneracy.",
    },
    Section {
        id: "model-comparison",
        title: "State-of-the-art Compact Models",
        page_start: 6,
        keywords: &["bsim", "l-utsoi", "ekv", "psp", "comparison", "difference"],
        content: "Standard models (BSIM, L-UTSOI, PSP) are originally built for room temperature. Adapting them to cryogenic operation often involves empirical formulas (fitting parameters) rather than physics-based core changes. For example, BSIM uses an effective temperature to emulate Fermi-Dirac statistics. L-UTSOI crashes below 173K without modification. My approach builds a fully-physics based model from scratch using Fermi-Dirac statistics intrinsically, ensuring validity in weak, moderate, and strong inversion without artificial clamping.",
    },
    Section {
        id: "numerical-stability",
        title: "Numerical Pathology and Quantum Shift",
        page_start: 64,
        keywords: &["numerical", "stability", "pathology", "convergence", "airy", "quantum shift"],
        content: "A numerical pathology manifests around the zero-gate-charge point when using the standard Airy function solution (2/3 power law) for the quantum shift. This causes singularities in the gate-to-channel capacitance (Cgc). To fix this, I developed an \"extended quantum shift function\" that connects a linear behavior in weak inversion to the 2/3 power behavior in strong inversion using a smoothing function, ensuring C-infinity continuity and numerical robustness.",
    },
    Section {
        id: "ps-procedure",
        title: "Poisson-Schrödinger Simulation Procedure",
        page_start: 37,
        keywords: &["poisson", "schrodinger", "simulation", "methodology", "self-consistent"],
        content: "The solver iterates between Poisson's equation (electrostatics) and Schrödinger's equation (quantum mechanics). 1) Poisson is solved with an initial guess. 2) The potential is fed to Schrödinger to find wave functions and energy levels. 3) Electron concentration is calculated using Fermi-Dirac statistics (or Heaviside at 0K). 4) This new concentration goes back into Poisson. 5) This loops until convergence. I specifically replaced the Fermi-Dirac integral with a Heaviside function for T -> 0K simulations to emulate fully degenerate metallic statistics.",
    },
    Section {
        id: "mobility",
        title: "Mobility at Cryogenic Temperatures",
        page_start: 31,
        keywords: &["mobility", "scattering", "coulomb", "roughness", "phonon"],
        content: "At low temperatures, phonon scattering is negligible. Transport is governed by Coulomb scattering (impurities) and Surface Roughness. This leads to a specific \"bell-shaped\" mobility law. In back-biased FDSOI, I also identified \"inter-subband scattering\" when the second subband begins to populate, causing a degradation in transconductance.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Duplicate section id in content store: {0}")]
    DuplicateId(String),
}

/// Read-only view over an ordered slice of sections.
///
/// Store order matters: it is the tie-break when two sections rank equally.
#[derive(Debug, Clone, Copy)]
pub struct ContentStore {
    sections: &'static [Section],
}

impl ContentStore {
    /// Build a store over `sections`, rejecting duplicate ids.
    pub fn new(sections: &'static [Section]) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(sections.len());
        for section in sections {
            if !seen.insert(section.id) {
                return Err(StoreError::DuplicateId(section.id.to_string()));
            }
        }
        Ok(Self { sections })
    }

    /// The built-in thesis store.
    pub fn thesis() -> Self {
        Self {
            sections: &THESIS_SECTIONS,
        }
    }

    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    pub fn get(&self, id: &str) -> Option<&'static Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::thesis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DUPLICATED: [Section; 2] = [
        Section {
            id: "twin",
            title: "First",
            content: "",
            page_start: 1,
            keywords: &[],
        },
        Section {
            id: "twin",
            title: "Second",
            content: "",
            page_start: 2,
            keywords: &[],
        },
    ];

    #[test]
    fn thesis_store_has_five_unique_sections() {
        let store = ContentStore::new(&THESIS_SECTIONS).unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(store.sections()[0].id, "intro-mb-breakdown");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = ContentStore::new(&DUPLICATED).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("twin".into()));
    }

    #[test]
    fn lookup_by_id() {
        let store = ContentStore::thesis();
        let section = store.get("ps-procedure").unwrap();
        assert_eq!(section.page_start, 37);
        assert_eq!(section.chapter(), "Chapter 3");
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn keywords_are_lowercase() {
        for section in ContentStore::thesis().sections() {
            for keyword in section.keywords {
                assert_eq!(*keyword, keyword.to_lowercase(), "{}", section.id);
            }
        }
    }
}
