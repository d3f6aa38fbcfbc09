use crate::backends::HitSummary;

pub(super) fn summarize(npe: &[i64], hittime: &[f64]) -> HitSummary {
    let total_pe = npe.iter().sum();
    let mean_hit_time = if hittime.is_empty() {
        f64::NAN
    } else {
        hittime.iter().sum::<f64>() / hittime.len() as f64
    };

    HitSummary {
        total_pe,
        mean_hit_time,
    }
}
