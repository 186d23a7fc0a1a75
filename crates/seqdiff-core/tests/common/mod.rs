use seqdiff_core::{Block, Span, Tag};

/// Split text into whitespace-separated tokens
#[allow(dead_code)]
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Check the structural invariants every span list must satisfy
///
/// - spans are contiguous on both axes and cover `[0, a_len) × [0, b_len)`
/// - each tag has the range shape it promises
#[allow(dead_code)]
pub fn assert_partition(spans: &[Span], a_len: usize, b_len: usize) {
    let (mut i, mut j) = (0, 0);
    for span in spans {
        let q = span.quad;
        assert_eq!(q.a_start, i, "gap or overlap on A before {span}");
        assert_eq!(q.b_start, j, "gap or overlap on B before {span}");
        match span.tag {
            Tag::Equal => {
                assert!(q.a_len() > 0, "empty equal span {span}");
                assert_eq!(q.a_len(), q.b_len(), "unbalanced equal span {span}");
            }
            Tag::Insert => {
                assert_eq!(q.a_len(), 0, "insert span consumes A: {span}");
                assert!(q.b_len() > 0, "empty insert span {span}");
            }
            Tag::Delete => {
                assert!(q.a_len() > 0, "empty delete span {span}");
                assert_eq!(q.b_len(), 0, "delete span consumes B: {span}");
            }
            Tag::Replace => {
                assert!(q.a_len() > 0 && q.b_len() > 0, "one-sided replace {span}");
            }
        }
        i = q.a_end;
        j = q.b_end;
    }
    assert_eq!(i, a_len, "spans stop short of the end of A");
    assert_eq!(j, b_len, "spans stop short of the end of B");
}

/// Concatenate the A and B items of all blocks
#[allow(dead_code)]
pub fn reconstruct<T: Clone>(blocks: &[Block<'_, T>]) -> (Vec<T>, Vec<T>) {
    let a = blocks.iter().flat_map(|b| b.a_items.iter().cloned()).collect();
    let b = blocks.iter().flat_map(|b| b.b_items.iter().cloned()).collect();
    (a, b)
}
