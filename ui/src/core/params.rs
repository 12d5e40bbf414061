//! Scenario input parameters: the seven slider-backed values and their descriptors.

use std::fmt;

/// Identifies one adjustable input of the scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    WasteTreated,
    ValorizationRate,
    EnergyGenerated,
    BiofertilizerProduced,
    RecycledMaterialsPct,
    EnergyPrice,
    BiofertilizerPrice,
}

impl ParamId {
    /// Slider order in the sidebar.
    pub const ALL: [ParamId; 7] = [
        ParamId::WasteTreated,
        ParamId::ValorizationRate,
        ParamId::EnergyGenerated,
        ParamId::BiofertilizerProduced,
        ParamId::RecycledMaterialsPct,
        ParamId::EnergyPrice,
        ParamId::BiofertilizerPrice,
    ];

    pub fn spec(self) -> &'static ParamSpec {
        match self {
            ParamId::WasteTreated => &WASTE_TREATED,
            ParamId::ValorizationRate => &VALORIZATION_RATE,
            ParamId::EnergyGenerated => &ENERGY_GENERATED,
            ParamId::BiofertilizerProduced => &BIOFERTILIZER_PRODUCED,
            ParamId::RecycledMaterialsPct => &RECYCLED_MATERIALS_PCT,
            ParamId::EnergyPrice => &ENERGY_PRICE,
            ParamId::BiofertilizerPrice => &BIOFERTILIZER_PRICE,
        }
    }

    /// Stable identifier used for DOM ids and logging.
    pub fn key(self) -> &'static str {
        self.spec().key
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How a parameter value is shown next to its slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDisplay {
    /// Whole number with thousands separators.
    Integer,
    /// A fraction shown as a percentage.
    Percent,
}

/// Range, step and default for one parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub id: ParamId,
    pub key: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    pub display: ValueDisplay,
}

impl ParamSpec {
    /// Clamp into `[min, max]` and round to the nearest step counted from `min`.
    ///
    /// Non-finite input falls back to the default.
    pub fn snap(&self, raw: f64) -> f64 {
        if !raw.is_finite() {
            return self.default;
        }
        let clamped = raw.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        // Re-round to the step's decimal precision so 0.7 + 20 * 0.01 reads 0.9, not 0.8999…
        let scale = 10f64.powi(self.decimals() as i32);
        ((snapped * scale).round() / scale).min(self.max)
    }

    /// Parse the raw string a range input reports and snap it.
    pub fn parse_input(&self, raw: &str) -> Option<f64> {
        raw.trim().parse::<f64>().ok().map(|value| self.snap(value))
    }

    /// Decimal places needed to represent one step exactly.
    pub fn decimals(&self) -> usize {
        let mut step = self.step;
        let mut places = 0;
        while (step - step.round()).abs() > 1e-9 && places < 6 {
            step *= 10.0;
            places += 1;
        }
        places
    }
}

pub static WASTE_TREATED: ParamSpec = ParamSpec {
    id: ParamId::WasteTreated,
    key: "waste-treated",
    unit: "ton/año",
    min: 80.0,
    max: 200.0,
    step: 5.0,
    default: 90.0,
    display: ValueDisplay::Integer,
};

pub static VALORIZATION_RATE: ParamSpec = ParamSpec {
    id: ParamId::ValorizationRate,
    key: "valorization-rate",
    unit: "%",
    min: 0.70,
    max: 1.00,
    step: 0.01,
    default: 0.90,
    display: ValueDisplay::Percent,
};

pub static ENERGY_GENERATED: ParamSpec = ParamSpec {
    id: ParamId::EnergyGenerated,
    key: "energy-generated",
    unit: "kWh/año",
    min: 15_000.0,
    max: 50_000.0,
    step: 1_000.0,
    default: 20_000.0,
    display: ValueDisplay::Integer,
};

pub static BIOFERTILIZER_PRODUCED: ParamSpec = ParamSpec {
    id: ParamId::BiofertilizerProduced,
    key: "biofertilizer-produced",
    unit: "ton/año",
    min: 30.0,
    max: 80.0,
    step: 1.0,
    default: 35.0,
    display: ValueDisplay::Integer,
};

pub static RECYCLED_MATERIALS_PCT: ParamSpec = ParamSpec {
    id: ParamId::RecycledMaterialsPct,
    key: "recycled-materials",
    unit: "%",
    min: 0.1,
    max: 0.5,
    step: 0.01,
    default: 0.3,
    display: ValueDisplay::Percent,
};

pub static ENERGY_PRICE: ParamSpec = ParamSpec {
    id: ParamId::EnergyPrice,
    key: "energy-price",
    unit: "CLP/kWh",
    min: 100.0,
    max: 300.0,
    step: 10.0,
    default: 150.0,
    display: ValueDisplay::Integer,
};

pub static BIOFERTILIZER_PRICE: ParamSpec = ParamSpec {
    id: ParamId::BiofertilizerPrice,
    key: "biofertilizer-price",
    unit: "CLP/ton",
    min: 100_000.0,
    max: 500_000.0,
    step: 10_000.0,
    default: 200_000.0,
    display: ValueDisplay::Integer,
};

/// The current scenario input. Every field is independent of the others.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    pub waste_treated: f64,
    pub valorization_rate: f64,
    pub energy_generated: f64,
    pub biofertilizer_produced: f64,
    /// Captured from the sidebar but not used by any formula yet.
    pub recycled_materials_pct: f64,
    pub energy_price: f64,
    pub biofertilizer_price: f64,
}

impl ParameterSet {
    pub fn defaults() -> Self {
        Self {
            waste_treated: WASTE_TREATED.default,
            valorization_rate: VALORIZATION_RATE.default,
            energy_generated: ENERGY_GENERATED.default,
            biofertilizer_produced: BIOFERTILIZER_PRODUCED.default,
            recycled_materials_pct: RECYCLED_MATERIALS_PCT.default,
            energy_price: ENERGY_PRICE.default,
            biofertilizer_price: BIOFERTILIZER_PRICE.default,
        }
    }

    pub fn get(&self, id: ParamId) -> f64 {
        match id {
            ParamId::WasteTreated => self.waste_treated,
            ParamId::ValorizationRate => self.valorization_rate,
            ParamId::EnergyGenerated => self.energy_generated,
            ParamId::BiofertilizerProduced => self.biofertilizer_produced,
            ParamId::RecycledMaterialsPct => self.recycled_materials_pct,
            ParamId::EnergyPrice => self.energy_price,
            ParamId::BiofertilizerPrice => self.biofertilizer_price,
        }
    }

    pub fn set(&mut self, id: ParamId, value: f64) {
        let slot = match id {
            ParamId::WasteTreated => &mut self.waste_treated,
            ParamId::ValorizationRate => &mut self.valorization_rate,
            ParamId::EnergyGenerated => &mut self.energy_generated,
            ParamId::BiofertilizerProduced => &mut self.biofertilizer_produced,
            ParamId::RecycledMaterialsPct => &mut self.recycled_materials_pct,
            ParamId::EnergyPrice => &mut self.energy_price,
            ParamId::BiofertilizerPrice => &mut self.biofertilizer_price,
        };
        *slot = value;
    }

    /// Copy with one field replaced.
    pub fn with(mut self, id: ParamId, value: f64) -> Self {
        self.set(id, value);
        self
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_already_snapped_and_in_range() {
        let params = ParameterSet::defaults();
        for id in ParamId::ALL {
            let spec = id.spec();
            let value = params.get(id);
            assert!((spec.min..=spec.max).contains(&value), "{id} default out of range");
            assert_eq!(spec.snap(value), value, "{id} default not on a step");
        }
    }

    #[test]
    fn snap_clamps_to_bounds() {
        assert_eq!(WASTE_TREATED.snap(10.0), 80.0);
        assert_eq!(WASTE_TREATED.snap(1_000.0), 200.0);
        assert_eq!(BIOFERTILIZER_PRICE.snap(-5.0), 100_000.0);
    }

    #[test]
    fn snap_rounds_to_nearest_step() {
        assert_eq!(WASTE_TREATED.snap(92.4), 90.0);
        assert_eq!(WASTE_TREATED.snap(92.6), 95.0);
        assert_eq!(ENERGY_GENERATED.snap(20_499.0), 20_000.0);
        assert_eq!(VALORIZATION_RATE.snap(0.8349), 0.83);
        assert_eq!(VALORIZATION_RATE.snap(0.9), 0.9);
    }

    #[test]
    fn snap_replaces_non_finite_with_default() {
        assert_eq!(ENERGY_PRICE.snap(f64::NAN), 150.0);
        assert_eq!(ENERGY_PRICE.snap(f64::INFINITY), 150.0);
    }

    #[test]
    fn parse_input_trims_and_snaps() {
        assert_eq!(ENERGY_PRICE.parse_input(" 173 "), Some(170.0));
        assert_eq!(ENERGY_PRICE.parse_input("abc"), None);
    }

    #[test]
    fn range_ends_sit_on_the_step_grid() {
        for id in ParamId::ALL {
            let spec = id.spec();
            assert_eq!(spec.snap(spec.min), spec.min, "{id} min");
            assert_eq!(spec.snap(spec.max), spec.max, "{id} max");
        }
    }

    #[test]
    fn set_touches_only_the_named_field() {
        let base = ParameterSet::defaults();
        let edited = base.with(ParamId::EnergyPrice, 300.0);
        for id in ParamId::ALL {
            if id == ParamId::EnergyPrice {
                assert_eq!(edited.get(id), 300.0);
            } else {
                assert_eq!(edited.get(id), base.get(id));
            }
        }
    }
}
