use dsperf::search::binary_search;

#[quickcheck]
fn agrees_with_linear_search(xs: Vec<i8>, target: i8) -> bool {
    let mut xs = xs;
    xs.sort();

    match binary_search(&xs, &target) {
        Some(i) => xs[i] == target,
        None => !xs.contains(&target),
    }
}
