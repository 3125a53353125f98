// src/main.rs

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use sirsim::simulation::console::show_trajectory;
use sirsim::simulation::csv::export_csv;
use sirsim::simulation::load_parameters::load_scenario;
use sirsim::{EulerSir, Scenario, SimError};

#[derive(Parser, Debug)]
#[command(name = "sirsim")]
#[command(about = "前進Euler法でSIR感染症モデルを数値積分する")]
struct Args {
    /// シナリオのYAMLファイル（省略時は標準シナリオ）
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// 出力先のCSVファイル（既存ファイルは上書き）
    #[arg(long, default_value = "sir_results.csv")]
    output: PathBuf,

    /// 時系列を標準出力にも表示する
    #[arg(long)]
    show: bool,

    /// ステップ数 N の上書き
    #[arg(long)]
    steps: Option<usize>,

    /// 感染率 β の上書き
    #[arg(long)]
    beta: Option<f64>,

    /// 回復率 γ の上書き
    #[arg(long)]
    gamma: Option<f64>,

    /// 時間刻み h の上書き
    #[arg(long)]
    step_size: Option<f64>,
}

/// RUST_LOG が未設定なら info、本クレートは debug
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sirsim=debug"));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() {
    init_logging();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("エラーが発生しました: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), SimError> {
    // 設定の読み込み
    let mut scenario = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => Scenario::default(),
    };
    apply_overrides(&mut scenario, args);

    // 積分器の初期化と計算
    let mut sim = EulerSir::from_scenario(&scenario)?;
    let trajectory = sim.solve();

    if let Some(last) = trajectory.last() {
        info!(
            "t = {}: S = {}, I = {}, R = {}",
            last.t, last.s, last.i, last.r
        );
    }

    if args.show {
        show_trajectory(trajectory)?;
    }

    // CSV出力
    export_csv(&args.output, trajectory)
}

fn apply_overrides(scenario: &mut Scenario, args: &Args) {
    if let Some(steps) = args.steps {
        scenario.parameters.num_steps = steps;
    }
    if let Some(beta) = args.beta {
        scenario.parameters.beta = beta;
    }
    if let Some(gamma) = args.gamma {
        scenario.parameters.gamma = gamma;
    }
    if let Some(step_size) = args.step_size {
        scenario.step_size = step_size;
    }
}
