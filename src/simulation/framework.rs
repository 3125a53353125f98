// src/simulation/framework.rs

use tracing::debug;

use crate::config::{InitialConditions, ModelParameters, Scenario};
use crate::error::{Result, SimError};
use crate::math::forward_euler;
use crate::models::{derivative, Compartment, SirState};
use crate::simulation::{Record, Trajectory};

/// 前進Euler法によるSIRモデルの積分器
///
/// セッターは値を検査せずにそのまま保持する。検査が必要な場合は
/// [`EulerSir::from_scenario`] を使う。
#[derive(Debug, Clone)]
pub struct EulerSir {
    step_size: f64,
    initial: InitialConditions,
    params: ModelParameters,
    trajectory: Trajectory,
}

impl EulerSir {
    pub fn new(step_size: f64) -> Self {
        Self {
            step_size,
            initial: InitialConditions::default(),
            params: ModelParameters::default(),
            trajectory: Trajectory::default(),
        }
    }

    /// シナリオを検査してから積分器を生成する
    pub fn from_scenario(scenario: &Scenario) -> Result<Self> {
        scenario.validate()?;
        let mut sim = Self::new(scenario.step_size);
        sim.initial = scenario.initial;
        sim.params = scenario.parameters;
        Ok(sim)
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn set_step_size(&mut self, step_size: f64) {
        self.step_size = step_size;
    }

    pub fn initial_conditions(&self) -> InitialConditions {
        self.initial
    }

    pub fn parameters(&self) -> ModelParameters {
        self.params
    }

    /// 初期値の設定（検査なし）
    pub fn set_initial_conditions(&mut self, s0: f64, i0: f64, r0: f64) {
        self.initial = InitialConditions::new(s0, i0, r0);
    }

    /// β, γ, ステップ数の設定（検査なし）
    pub fn set_parameters(&mut self, beta: f64, gamma: f64, num_steps: usize) {
        self.params = ModelParameters {
            beta,
            gamma,
            num_steps,
        };
    }

    /// 現在の設定で積分を行い、時系列を置き換える
    ///
    /// 各ステップの S', I', R' はすべて更新前の同じ状態から計算する。
    /// 安定性の検査や値のクリップは行わない。
    pub fn solve(&mut self) -> &Trajectory {
        let h = self.step_size;
        let steps = self.params.num_steps;
        debug!(
            steps,
            step_size = h,
            beta = self.params.beta,
            gamma = self.params.gamma,
            "SIRモデルの積分を開始します"
        );

        let mut state = SirState::new(self.initial.s0, self.initial.i0, self.initial.r0);
        let mut t = 0.0;
        let mut trajectory = Trajectory::with_capacity(steps);

        for _ in 0..steps {
            let rates = derivative(&state, &self.params);
            let y: [f64; 3] = state.into();
            state = forward_euler(&y, &rates, h).into();
            t += h;
            trajectory.push(Record::new(state, t));
        }

        if let Some(last) = trajectory.last() {
            debug!(s = last.s, i = last.i, r = last.r, t = last.t, "積分が完了しました");
        }
        self.trajectory = trajectory;
        &self.trajectory
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// 位置指定の読み出し。範囲外（時刻列を含む）は 0.0 を返す
    pub fn read(&self, row: usize, col: usize) -> f64 {
        self.get(row, col).unwrap_or(0.0)
    }

    /// 位置指定の書き込み。範囲外（時刻列を含む）は何もしない
    pub fn write(&mut self, row: usize, col: usize, value: f64) {
        let _ = self.set(row, col, value);
    }

    /// 範囲検査付きの読み出し
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let compartment = self.locate(row, col)?;
        Ok(self.trajectory.records()[row].state().get(compartment))
    }

    /// 範囲検査付きの書き込み
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let compartment = self.locate(row, col)?;
        if let Some(record) = self.trajectory.get_mut(row) {
            record.set(compartment, value);
        }
        Ok(())
    }

    /// 時刻列は状態ではないため列 0..3 のみを対象とする
    fn locate(&self, row: usize, col: usize) -> Result<Compartment> {
        match Compartment::from_index(col) {
            Some(compartment) if row < self.trajectory.len() => Ok(compartment),
            _ => Err(SimError::OutOfRange {
                row,
                col,
                rows: self.trajectory.len(),
            }),
        }
    }
}
