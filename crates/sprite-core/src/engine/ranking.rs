use std::cmp::Ordering;

#[inline]
fn by_score(rg2s: &[f64]) -> impl Fn(&usize, &usize) -> Ordering + '_ {
    move |&a, &b| rg2s[a].total_cmp(&rg2s[b]).then(a.cmp(&b))
}

/// Indices of the `keep_best` lowest scores, ascending; equal scores keep the
/// lower structure index first.
pub fn rank_structures(rg2s: &[f64], keep_best: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rg2s.len()).collect();
    let keep = keep_best.min(order.len());
    if keep == 0 {
        return Vec::new();
    }

    let cmp = by_score(rg2s);
    if keep < order.len() {
        order.select_nth_unstable_by(keep - 1, &cmp);
        order.truncate(keep);
    }
    order.sort_unstable_by(&cmp);
    order
}
