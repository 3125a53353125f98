// src/simulation/csv.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Result, SimError};
use crate::simulation::{Record, Trajectory};

pub const CSV_HEADER: &str = "Susceptible, Infected, Recovered, Time";

/// CSVファイルへの書き出し（既存ファイルは上書き）
///
/// # 引数
/// - `path`: 出力先のパス
/// - `trajectory`: 書き出す時系列
pub fn export_csv(path: impl AsRef<Path>, trajectory: &Trajectory) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| SimError::Io {
        path: path.to_path_buf(),
        source,
    };

    let output_file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(output_file);
    write_csv(&mut writer, trajectory).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    info!("{} 行を {} に書き出しました", trajectory.len(), path.display());
    Ok(())
}

/// ヘッダーと全行の書き込み
pub fn write_csv<W: Write>(writer: &mut W, trajectory: &Trajectory) -> std::io::Result<()> {
    write_csv_header(writer)?;
    for record in trajectory {
        writer.write_all(create_csv_row(record).as_bytes())?;
    }
    Ok(())
}

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)
}

/// CSV行の作成
pub fn create_csv_row(record: &Record) -> String {
    format!("{},{},{},{}\n", record.s, record.i, record.r, record.t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SirState;

    fn sample() -> Trajectory {
        let mut trajectory = Trajectory::default();
        trajectory.push(Record::new(SirState::new(0.5, 0.25, 0.25), 0.1));
        trajectory.push(Record::new(SirState::new(0.4, 0.3, 0.3), 0.2));
        trajectory
    }

    #[test]
    fn test_create_csv_row() {
        let record = Record::new(SirState::new(0.99899001, 0.001, 0.0), 0.01);
        assert_eq!(create_csv_row(&record), "0.99899001,0.001,0,0.01\n");
    }

    #[test]
    fn test_write_csv() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &sample()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "Susceptible, Infected, Recovered, Time\n0.5,0.25,0.25,0.1\n0.4,0.3,0.3,0.2\n"
        );
    }

    #[test]
    fn test_empty_trajectory_writes_header_only() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &Trajectory::default()).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_export_csv_truncates_existing_file() {
        let path = std::env::temp_dir()
            .join(format!("sirsim_{}_truncate.csv", std::process::id()));
        let stale = "stale content that is much longer than the new file\n".repeat(10);
        std::fs::write(&path, stale).unwrap();

        export_csv(&path, &Trajectory::default()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(text, format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_export_csv_invalid_path() {
        let path = std::env::temp_dir()
            .join(format!("sirsim_{}_no_such_dir", std::process::id()))
            .join("out.csv");

        match export_csv(&path, &sample()) {
            Err(SimError::Io { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("Expected SimError::Io, got {:?}", other),
        }
    }
}
