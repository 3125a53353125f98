// src/simulation/mod.rs

pub mod console;
pub mod csv;
pub mod framework;
pub mod load_parameters;

pub use framework::EulerSir;

use crate::models::{Compartment, SirState};

/// 1ステップ後の状態と経過時間
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub s: f64,
    pub i: f64,
    pub r: f64,
    pub t: f64, // 経過時間 j·h
}

impl Record {
    pub fn new(state: SirState, t: f64) -> Self {
        Self {
            s: state.s,
            i: state.i,
            r: state.r,
            t,
        }
    }

    pub fn state(&self) -> SirState {
        SirState::new(self.s, self.i, self.r)
    }

    pub fn set(&mut self, compartment: Compartment, value: f64) {
        match compartment {
            Compartment::Susceptible => self.s = value,
            Compartment::Infected => self.i = value,
            Compartment::Recovered => self.r = value,
        }
    }
}

/// 計算結果の時系列。初期条件は含まず、先頭は1ステップ目の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    records: Vec<Record>,
}

impl Trajectory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&Record> {
        self.records.get(row)
    }

    pub(crate) fn get_mut(&mut self, row: usize) -> Option<&mut Record> {
        self.records.get_mut(row)
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
