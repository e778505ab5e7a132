// Scans keeping the first optimum: an element replaces the current pick
// only when `better` says so, so equal elements never displace earlier ones.
fn optimum_select<I, B, F, Better>(mut it: I, mut f: F, mut better: Better)
        -> Option<(I::Item, B)>
        where
            I: Iterator,
            F: FnMut(&I::Item) -> B,
            Better: FnMut(&B, &B) -> bool {
    it.next().map(|mut best| {
        let mut best_val = f(&best);
        for x in it {
            let x_val = f(&x);
            if better(&x_val, &best_val) {
                best_val = x_val;
                best = x;
            }
        }
        (best, best_val)
    })
}

/// Like `Iterator::min_by_key`, but for `PartialOrd` keys, and the first
/// minimal element wins ties. Also returns the minimal key.
pub fn min_by_key_partial<I, B, F>(it: I, f: F) -> Option<(I::Item, B)>
        where I: Iterator, B: PartialOrd, F: FnMut(&I::Item) -> B {
    optimum_select(it, f, |x, m| x < m)
}
