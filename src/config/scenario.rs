// src/config/scenario.rs

use serde::Deserialize;

use crate::config::parameters::{ensure_positive, InitialConditions, ModelParameters};
use crate::error::Result;

/// 1回の計算に必要な設定一式
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub step_size: f64, // 時間刻み h
    pub initial: InitialConditions,
    pub parameters: ModelParameters,
}

impl Default for Scenario {
    /// 10日間、1日100ステップで流行初期から計算する標準シナリオ
    fn default() -> Self {
        Self {
            step_size: 0.01,
            initial: InitialConditions::new(0.999, 0.001, 0.0),
            parameters: ModelParameters {
                beta: 1.0,
                gamma: 1.0 / 14.0,
                num_steps: 1000,
            },
        }
    }
}

impl Scenario {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("step_size", self.step_size)?;
        self.initial.validate()?;
        self.parameters.validate()?;
        Ok(())
    }
}
