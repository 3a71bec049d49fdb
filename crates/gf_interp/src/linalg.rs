// crates/gf_interp/src/linalg.rs

//! 小规模稠密线性求解
//!
//! 部分主元高斯消元 + 回代。系统规模为已知点数 N（或 N+1），通常不超过几十，
//! 每次调用重新消元，不缓存分解结果。
//!
//! 主元绝对值小于 [`PIVOT_EPSILON`] 时替换为 ±ε 以避免除零，
//! 奇异系统不会被检测出来，只有非有限解才会报错。

use gf_foundation::GfError;
use nalgebra::{DMatrix, DVector};
use thiserror::Error;

/// 主元下限
pub const PIVOT_EPSILON: f64 = 1e-12;

/// 线性求解错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// 矩阵不是方阵
    #[error("矩阵不是方阵: {rows}x{cols}")]
    NotSquare {
        /// 行数
        rows: usize,
        /// 列数
        cols: usize,
    },

    /// 右端向量长度与矩阵不匹配
    #[error("右端向量长度不匹配: 期望 {expected}, 实际 {actual}")]
    DimensionMismatch {
        /// 期望长度
        expected: usize,
        /// 实际长度
        actual: usize,
    },

    /// 空系统
    #[error("空线性系统")]
    Empty,

    /// 解分量非有限
    #[error("解的第 {index} 个分量非有限: {value}")]
    NonFinite {
        /// 分量索引
        index: usize,
        /// 分量值
        value: f64,
    },
}

impl From<LinalgError> for GfError {
    fn from(err: LinalgError) -> Self {
        GfError::numerical("dense_solve", err.to_string())
    }
}

/// 求解 A·x = b
///
/// # Errors
/// - 矩阵非方阵、右端长度不匹配或系统为空
/// - 解中出现 NaN/Inf
pub fn solve_dense(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>, LinalgError> {
    let (rows, cols) = a.shape();
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    if b.len() != rows {
        return Err(LinalgError::DimensionMismatch {
            expected: rows,
            actual: b.len(),
        });
    }
    let n = rows;
    if n == 0 {
        return Err(LinalgError::Empty);
    }

    let mut m = a.clone();
    let mut rhs = b.clone();

    // 前向消元
    for col in 0..n {
        // 选主元：绝对值最大，并列时取第一个
        let mut pivot_row = col;
        let mut pivot_abs = m[(col, col)].abs();
        for row in (col + 1)..n {
            let v = m[(row, col)].abs();
            if v > pivot_abs {
                pivot_abs = v;
                pivot_row = row;
            }
        }
        if pivot_row != col {
            m.swap_rows(col, pivot_row);
            rhs.swap_rows(col, pivot_row);
        }

        let pivot = guard_pivot(m[(col, col)]);
        for row in (col + 1)..n {
            let factor = m[(row, col)] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                let upper = m[(col, k)];
                m[(row, k)] -= factor * upper;
            }
            let upper = rhs[col];
            rhs[row] -= factor * upper;
        }
    }

    // 回代
    let mut x = DVector::zeros(n);
    for row in (0..n).rev() {
        let mut sum = rhs[row];
        for k in (row + 1)..n {
            sum -= m[(row, k)] * x[k];
        }
        x[row] = sum / guard_pivot(m[(row, row)]);
    }

    if let Some((index, &value)) = x.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(LinalgError::NonFinite { index, value });
    }
    Ok(x)
}

/// 过小的主元替换为同号的 ε（0 视为正）
#[inline]
fn guard_pivot(p: f64) -> f64 {
    if p.abs() < PIVOT_EPSILON {
        if p < 0.0 {
            -PIVOT_EPSILON
        } else {
            PIVOT_EPSILON
        }
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_2x2() {
        let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let b = DVector::from_vec(vec![3.0, 5.0]);
        let x = solve_dense(&a, &b).unwrap();
        assert!((x[0] - 0.8).abs() < 1e-12);
        assert!((x[1] - 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_solve_needs_pivoting() {
        // 首个主元为 0
        let a = DMatrix::from_row_slice(3, 3, &[0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0]);
        let expected = DVector::from_vec(vec![1.0, -2.0, 3.0]);
        let b = &a * &expected;
        let x = solve_dense(&a, &b).unwrap();
        for i in 0..3 {
            assert!((x[i] - expected[i]).abs() < 1e-10);
        }
    }

    #[test]
    fn test_solve_matches_nalgebra_lu() {
        let a = DMatrix::from_row_slice(
            4,
            4,
            &[
                4.0, -1.0, 0.5, 2.0, //
                1.0, 5.0, -2.0, 0.0, //
                0.3, 0.2, 3.0, -1.0, //
                2.0, 0.0, 1.0, 6.0,
            ],
        );
        let b = DVector::from_vec(vec![1.0, -2.0, 0.5, 3.0]);
        let x = solve_dense(&a, &b).unwrap();
        let reference = a.clone().lu().solve(&b).unwrap();
        assert!((x - reference).amax() < 1e-10);
    }

    #[test]
    fn test_singular_is_not_detected() {
        // 奇异矩阵：主元被替换为 ε，结果巨大但仍然有限
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);
        let x = solve_dense(&a, &b).unwrap();
        assert!(x.iter().all(|v| v.is_finite()));
        assert!(x[1].abs() > 1e6);
    }

    #[test]
    fn test_shape_errors() {
        let a = DMatrix::<f64>::zeros(2, 3);
        let b = DVector::zeros(2);
        assert_eq!(
            solve_dense(&a, &b),
            Err(LinalgError::NotSquare { rows: 2, cols: 3 })
        );

        let a = DMatrix::<f64>::identity(2, 2);
        let b = DVector::zeros(3);
        assert_eq!(
            solve_dense(&a, &b),
            Err(LinalgError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );

        let a = DMatrix::<f64>::zeros(0, 0);
        let b = DVector::zeros(0);
        assert_eq!(solve_dense(&a, &b), Err(LinalgError::Empty));
    }

    #[test]
    fn test_non_finite_rejected() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        let b = DVector::from_vec(vec![f64::NAN, 1.0]);
        assert!(matches!(
            solve_dense(&a, &b),
            Err(LinalgError::NonFinite { index: 0, .. })
        ));
    }

    #[test]
    fn test_guard_pivot_sign() {
        assert_eq!(guard_pivot(1e-20), PIVOT_EPSILON);
        assert_eq!(guard_pivot(-1e-20), -PIVOT_EPSILON);
        assert_eq!(guard_pivot(0.0), PIVOT_EPSILON);
        assert_eq!(guard_pivot(0.5), 0.5);
    }
}
