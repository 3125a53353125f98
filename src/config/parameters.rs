// src/config/parameters.rs

use serde::Deserialize;

use crate::error::{Result, SimError};

/// SIRモデルのパラメータ
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    pub beta: f64,        // 感染率 β
    pub gamma: f64,       // 回復率 γ
    pub num_steps: usize, // ステップ数 N
}

/// 各区画の初期値
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct InitialConditions {
    pub s0: f64, // 感受性者
    pub i0: f64, // 感染者
    pub r0: f64, // 回復者
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            beta: 1.0,
            gamma: 1.0 / 14.0,
            num_steps: 100,
        }
    }
}

impl ModelParameters {
    /// 範囲を検査してパラメータを生成する
    ///
    /// # 引数
    /// - `beta`: 感染率（0以上の有限値）
    /// - `gamma`: 回復率（0以上の有限値）
    /// - `num_steps`: ステップ数
    ///
    /// # 戻り値
    /// - 検査済みのパラメータ、または `SimError::InvalidParameter`
    pub fn new(beta: f64, gamma: f64, num_steps: usize) -> Result<Self> {
        let params = Self {
            beta,
            gamma,
            num_steps,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("beta", self.beta)?;
        ensure_non_negative("gamma", self.gamma)?;
        Ok(())
    }
}

impl InitialConditions {
    pub fn new(s0: f64, i0: f64, r0: f64) -> Self {
        Self { s0, i0, r0 }
    }

    /// 合計値は検査しない（呼び出し側の責任）
    pub fn validate(&self) -> Result<()> {
        ensure_finite("s0", self.s0)?;
        ensure_finite("i0", self.i0)?;
        ensure_finite("r0", self.r0)?;
        Ok(())
    }
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidParameter {
            name,
            value,
            reason: "有限値である必要があります",
        })
    }
}

pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(SimError::InvalidParameter {
            name,
            value,
            reason: "負の値は使用できません",
        });
    }
    Ok(())
}

pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value <= 0.0 {
        return Err(SimError::InvalidParameter {
            name,
            value,
            reason: "正の値である必要があります",
        });
    }
    Ok(())
}
