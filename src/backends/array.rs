use ndarray::ArrayView1;

use crate::backends::HitSummary;

pub(super) fn summarize(npe: &[i64], hittime: &[f64]) -> HitSummary {
    let npe = ArrayView1::from(npe);
    let hittime = ArrayView1::from(hittime);

    HitSummary {
        total_pe: npe.sum(),
        mean_hit_time: hittime.mean().unwrap_or(f64::NAN),
    }
}
