// src/models/sir.rs

use crate::config::ModelParameters;

/// SIRモデルの状態
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SirState {
    pub s: f64, // 感受性者 (Susceptible)
    pub i: f64, // 感染者 (Infected)
    pub r: f64, // 回復者 (Recovered)
}

/// 位置指定アクセスで使う区画（列番号）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compartment {
    Susceptible = 0,
    Infected = 1,
    Recovered = 2,
}

impl Compartment {
    /// 列番号から区画を得る。時刻列(3)を含む範囲外は `None`
    pub fn from_index(col: usize) -> Option<Self> {
        match col {
            0 => Some(Compartment::Susceptible),
            1 => Some(Compartment::Infected),
            2 => Some(Compartment::Recovered),
            _ => None,
        }
    }
}

impl SirState {
    pub fn new(s: f64, i: f64, r: f64) -> Self {
        Self { s, i, r }
    }

    /// 総人口 S + I + R
    pub fn total(&self) -> f64 {
        self.s + self.i + self.r
    }

    pub fn get(&self, compartment: Compartment) -> f64 {
        match compartment {
            Compartment::Susceptible => self.s,
            Compartment::Infected => self.i,
            Compartment::Recovered => self.r,
        }
    }
}

impl From<[f64; 3]> for SirState {
    fn from(y: [f64; 3]) -> Self {
        Self::new(y[0], y[1], y[2])
    }
}

impl From<SirState> for [f64; 3] {
    fn from(state: SirState) -> Self {
        [state.s, state.i, state.r]
    }
}

/// SIRモデルの時間微分を計算する純粋関数
///
/// dS/dt = -βSI
/// dI/dt =  βSI - γI
/// dR/dt =  γI
///
/// # 引数
/// - `state`: 現在の状態
/// - `params`: モデルパラメータ（β, γ）
///
/// # 戻り値
/// - 各区画の時間微分 [dS, dI, dR]
pub fn derivative(state: &SirState, params: &ModelParameters) -> [f64; 3] {
    let infection = params.beta * state.s * state.i; // 新規感染
    let recovery = params.gamma * state.i; // 回復
    [-infection, infection - recovery, recovery]
}
