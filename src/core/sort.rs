//! Hand-rolled quadratic sorts. All three are stable.
use std::cmp::Ordering;

pub fn bubble_sort_by<T>(items: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    let n = items.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if cmp(&items[j], &items[j + 1]) == Ordering::Greater {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Picks the first minimum and rotates it into place instead of swapping,
/// so equal elements keep their relative order.
pub fn selection_sort_by<T>(items: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    let n = items.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if cmp(&items[j], &items[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            items[i..=min].rotate_right(1);
        }
    }
}

pub fn insertion_sort_by<T>(items: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // (key, original index)
    fn sample() -> Vec<(u8, usize)> {
        [3u8, 1, 3, 0, 1, 2, 0].iter().copied().enumerate().map(|(i, k)| (k, i)).collect()
    }

    fn check(sorted: &[(u8, usize)]) {
        let mut expected = sample();
        expected.sort_by_key(|e| e.0); // std sort is stable
        assert_eq!(sorted, expected.as_slice());
    }

    #[test]
    fn bubble_is_stable() {
        let mut v = sample();
        bubble_sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        check(&v);
    }

    #[test]
    fn selection_is_stable() {
        let mut v = sample();
        selection_sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        check(&v);
    }

    #[test]
    fn insertion_is_stable() {
        let mut v = sample();
        insertion_sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        check(&v);
    }

    #[test]
    fn empty_and_single() {
        let mut e: Vec<u8> = vec![];
        bubble_sort_by(&mut e, |a, b| a.cmp(b));
        selection_sort_by(&mut e, |a, b| a.cmp(b));
        insertion_sort_by(&mut e, |a, b| a.cmp(b));
        let mut one = vec![7];
        bubble_sort_by(&mut one, |a, b| a.cmp(b));
        assert_eq!(one, vec![7]);
    }
}
