use dsperf::heap::{is_min_heap, MinHeap};

#[quickcheck]
fn heapify_gives_a_heap(xs: Vec<i16>) -> bool {
    let mut heap = MinHeap::new();
    heap.heapify(&xs);

    is_min_heap(heap.as_slice()) && heap.len() == xs.len()
}

#[quickcheck]
fn heapify_then_dequeue_sorts(xs: Vec<i16>) -> bool {
    let mut heap = MinHeap::new();
    heap.heapify(&xs);
    let mut drained = Vec::new();
    while let Some(x) = heap.dequeue() {
        if !is_min_heap(heap.as_slice()) {
            return false;
        }
        drained.push(x);
    }

    let mut sorted = xs;
    sorted.sort();
    drained == sorted
}

#[quickcheck]
fn enqueue_keeps_minimum_at_front(xs: Vec<i16>) -> bool {
    let mut heap = MinHeap::new();
    let mut min = None::<i16>;
    for x in xs {
        heap.enqueue(x);
        min = Some(min.map_or(x, |m| m.min(x)));
        if heap.peek() != min.as_ref() || !is_min_heap(heap.as_slice()) {
            return false;
        }
    }
    true
}

#[quickcheck]
fn from_vec_matches_heapify(xs: Vec<i16>) -> bool {
    let mut heapified = MinHeap::new();
    heapified.heapify(&xs);
    let owned = MinHeap::from(xs);

    heapified.as_slice() == owned.as_slice()
}
