//! Impact formulas: derived metrics as a pure function of the parameter set.

use super::params::ParameterSet;

/// Share of biofertilizer output that substitutes synthetic agrochemicals.
pub const AGROCHEMICAL_SUBSTITUTION: f64 = 0.1;
/// People trained by the project (fixed by the project sheet).
pub const TRAINED_PEOPLE: u32 = 30;
/// Collaborative alliances formed (fixed by the project sheet).
pub const COLLABORATIVE_ALLIANCES: u32 = 4;

/// Reference scenario the projections are compared against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub waste_valorized: f64,
    pub energy_generated: f64,
    pub biofertilizer_produced: f64,
    pub total_revenue: f64,
}

pub const BASELINE: Baseline = Baseline {
    waste_valorized: 90.0,
    energy_generated: 20_000.0,
    biofertilizer_produced: 35.0,
    total_revenue: 9_000_000.0,
};

impl Baseline {
    pub fn avoided_agrochemicals(&self) -> f64 {
        self.biofertilizer_produced * AGROCHEMICAL_SUBSTITUTION
    }
}

/// Annual results projected from the current parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    /// ton/yr
    pub waste_valorized: f64,
    /// ton/yr
    pub avoided_agrochemicals: f64,
    /// kWh/yr, carried through from the input so charts read from one place.
    pub energy_generated: f64,
    pub energy_revenue: f64,
    pub biofertilizer_revenue: f64,
    pub total_revenue: f64,
    pub trained_people: u32,
    pub collaborative_alliances: u32,
}

/// Evaluate every formula. Total for finite input; no clamping happens here.
pub fn compute(params: &ParameterSet) -> DerivedMetrics {
    let energy_revenue = params.energy_generated * params.energy_price;
    let biofertilizer_revenue = params.biofertilizer_produced * params.biofertilizer_price;

    DerivedMetrics {
        waste_valorized: params.waste_treated * params.valorization_rate,
        avoided_agrochemicals: params.biofertilizer_produced * AGROCHEMICAL_SUBSTITUTION,
        energy_generated: params.energy_generated,
        energy_revenue,
        biofertilizer_revenue,
        total_revenue: energy_revenue + biofertilizer_revenue,
        trained_people: TRAINED_PEOPLE,
        collaborative_alliances: COLLABORATIVE_ALLIANCES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::ParamId;

    #[test]
    fn defaults_match_project_sheet() {
        let m = compute(&ParameterSet::defaults());
        assert!((m.waste_valorized - 81.0).abs() < 1e-9);
        assert!((m.avoided_agrochemicals - 3.5).abs() < 1e-12);
        assert_eq!(m.energy_revenue, 3_000_000.0);
        assert_eq!(m.biofertilizer_revenue, 7_000_000.0);
        assert_eq!(m.total_revenue, 10_000_000.0);
        assert_eq!(m.trained_people, 30);
        assert_eq!(m.collaborative_alliances, 4);
    }

    #[test]
    fn baseline_avoided_agrochemicals() {
        assert!((BASELINE.avoided_agrochemicals() - 3.5).abs() < 1e-12);
    }

    #[test]
    fn recycled_materials_is_inert() {
        let base = ParameterSet::defaults();
        let low = compute(&base.with(ParamId::RecycledMaterialsPct, 0.1));
        let high = compute(&base.with(ParamId::RecycledMaterialsPct, 0.5));
        assert_eq!(low, high);
    }

    #[test]
    fn out_of_range_input_is_computed_not_clamped() {
        let params = ParameterSet::defaults().with(ParamId::WasteTreated, 1_000.0);
        let m = compute(&params);
        assert!((m.waste_valorized - 900.0).abs() < 1e-9);
    }
}
