//! Row kernel shared by the backends.

use shared_types::Matrix;
use tokio_util::sync::CancellationToken;

/// Fills `out` with row `row` of `a × b`.
///
/// The token is checked before each column; on cancellation the remaining
/// cells are left untouched and `false` is returned. Sums wrap at 64 bits.
pub fn multiply_row(
    a: &Matrix,
    b: &Matrix,
    row: usize,
    out: &mut [i64],
    cancel: &CancellationToken,
) -> bool {
    let n = a.size();
    let lhs = a.row(row);
    let rhs = b.as_slice();

    for (col, cell) in out.iter_mut().enumerate().take(n) {
        if cancel.is_cancelled() {
            return false;
        }
        let mut acc: i64 = 0;
        for (k, &left) in lhs.iter().enumerate() {
            acc = acc.wrapping_add(left.wrapping_mul(rhs[k * n + col]));
        }
        *cell = acc;
    }
    true
}
