// src/math/integrator.rs

/// 前進Euler法による1ステップの積分
///
/// y_{n+1} = y_n + h * f(t_n, y_n)
///
/// # 引数
/// - `y`: 現在の状態ベクトル
/// - `dydt`: 現在の状態で評価した導関数
/// - `dt`: 時間ステップ
///
/// # 戻り値
/// - 次の状態ベクトル
pub fn forward_euler<const N: usize>(y: &[f64; N], dydt: &[f64; N], dt: f64) -> [f64; N] {
    let mut next = *y;
    for (value, rate) in next.iter_mut().zip(dydt.iter()) {
        *value += dt * rate;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// test_forward_euler_single_step
    /// y = [1.0, 2.0], f = [0.5, -4.0], dt = 0.1 のとき
    /// 期待される次の状態は [1.05, 1.6] です。
    #[test]
    fn test_forward_euler_single_step() {
        let next = forward_euler(&[1.0, 2.0], &[0.5, -4.0], 0.1);

        assert_relative_eq!(next[0], 1.05, epsilon = 1e-12);
        assert_relative_eq!(next[1], 1.6, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_euler_zero_step_keeps_state() {
        let y = [0.3, 0.2, 0.5];
        let next = forward_euler(&y, &[10.0, -3.0, 7.0], 0.0);

        assert_eq!(next, y);
    }

    /// dy/dt = -y を繰り返し積分すると y_n = (1 - h)^n になる
    #[test]
    fn test_forward_euler_exponential_decay() {
        let h = 0.05;
        let mut y = [1.0];
        for _ in 0..20 {
            let dydt = [-y[0]];
            y = forward_euler(&y, &dydt, h);
        }

        assert_relative_eq!(y[0], (1.0_f64 - h).powi(20), max_relative = 1e-12);
    }
}
