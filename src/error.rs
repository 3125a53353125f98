// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// シミュレーション全体で使用するエラー
#[derive(Error, Debug)]
pub enum SimError {
    #[error("ファイル '{path}' の入出力に失敗しました: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("標準出力への書き込みに失敗しました: {0}")]
    Output(#[source] std::io::Error),

    #[error("YAMLファイル '{path}' の解析に失敗しました: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("パラメータ `{name}` の値 {value} は不正です ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("位置 ({row}, {col}) は範囲外です (行数 {rows}, 列数 3)")]
    OutOfRange { row: usize, col: usize, rows: usize },
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message_names_the_field() {
        let err = SimError::InvalidParameter {
            name: "beta",
            value: -1.0,
            reason: "負の値は使用できません",
        };
        let message = err.to_string();

        assert!(message.contains("beta"));
        assert!(message.contains("-1"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = SimError::Io {
            path: PathBuf::from("missing/out.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        assert!(err.to_string().contains("missing/out.csv"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_output_error_has_no_path() {
        let err = SimError::Output(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));

        assert!(err.to_string().contains("標準出力"));
        assert!(!err.to_string().contains("<stdout>"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
