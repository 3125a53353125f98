// src/simulation/console.rs

use std::io::{self, Write};

use crate::error::{Result, SimError};
use crate::simulation::csv::CSV_HEADER;
use crate::simulation::Trajectory;

/// 時系列を (S, I, R, Time) 形式で標準出力に表示する
pub fn show_trajectory(trajectory: &Trajectory) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    show_to(&mut handle, trajectory)
}

/// 書き込み失敗は `SimError::Output` として返す
pub fn show_to<W: Write>(writer: &mut W, trajectory: &Trajectory) -> Result<()> {
    write_trajectory(writer, trajectory).map_err(SimError::Output)
}

pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for record in trajectory {
        writeln!(writer, "({}, {}, {}, {})", record.s, record.i, record.r, record.t)?;
    }
    Ok(())
}
