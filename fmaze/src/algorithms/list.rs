use super::RandomSource;

/// Returns a uniformly chosen one of the first `n` elements of `list`, `None` if `n` is 0.
///
/// `n` must not exceed the length of `list`.
pub fn choose_randomly_from<'a, T>(
    list: &'a [T],
    n: usize,
    rng: &mut impl RandomSource,
) -> Option<&'a T> {
    if n == 0 {
        return None;
    }

    list[..n].get(rng.uniform(n))
}

/// Index of the first occurrence of `item` among the first `n` elements.
pub fn find_in_prefix<T: PartialEq>(item: &T, list: &[T], n: usize) -> Option<usize> {
    list[..n.min(list.len())].iter().position(|x| x == item)
}

/// Overwrites every occurrence of `item` among the first `n` elements with the element at
/// `n - 1`, so the caller can shrink the prefix by one. Returns whether anything was replaced.
pub fn remove_from_prefix<T: PartialEq + Clone>(item: &T, list: &mut [T], n: usize) -> bool {
    let n = n.min(list.len());
    if n == 0 {
        return false;
    }

    let last = list[n - 1].clone();
    let mut found = false;
    for slot in list[..n].iter_mut().filter(|x| **x == *item) {
        slot.clone_from(&last);
        found = true;
    }
    found
}

#[cfg(test)]
mod tests {
    use super::{choose_randomly_from, find_in_prefix, remove_from_prefix};
    use crate::{
        algorithms::{random::tests::Scripted, seeded},
        dims::Dims,
    };

    const LIST: [Dims; 4] = [Dims(1, 2), Dims(3, 4), Dims(4, 3), Dims(5, 8)];

    fn sample_prefix(n: usize, draws: usize) -> [usize; 4] {
        let (mut rng, _) = seeded(Some(7));
        let mut counters = [0; 4];
        for _ in 0..draws {
            let chosen = choose_randomly_from(&LIST, n, &mut rng).unwrap();
            let idx = LIST.iter().position(|item| item == chosen).unwrap();
            counters[idx] += 1;
        }
        counters
    }

    #[test]
    fn choice_is_uniform() {
        let counters = sample_prefix(3, 600);
        for count in &counters[..3] {
            assert!(*count > 150, "{counters:?}");
            assert!(*count < 250, "{counters:?}");
        }
    }

    #[test]
    fn choice_stays_in_prefix() {
        let counters = sample_prefix(3, 600);
        assert_eq!(counters[3], 0);
        assert_eq!(counters.iter().sum::<usize>(), 600);
    }

    #[test]
    fn empty_prefix_chooses_nothing() {
        let mut rng = Scripted::new(&[0]);
        assert_eq!(choose_randomly_from(&LIST, 0, &mut rng), None);
        assert_eq!(choose_randomly_from::<Dims>(&[], 0, &mut rng), None);
    }

    #[test]
    fn choice_follows_the_source() {
        let mut rng = Scripted::new(&[2, 0]);
        assert_eq!(choose_randomly_from(&LIST, 3, &mut rng), Some(&Dims(4, 3)));
        assert_eq!(choose_randomly_from(&LIST, 3, &mut rng), Some(&Dims(1, 2)));
    }

    #[test]
    fn search_is_scoped_to_prefix() {
        assert_eq!(find_in_prefix(&Dims(4, 3), &LIST, 3), Some(2));
        assert_eq!(find_in_prefix(&Dims(5, 8), &LIST, 3), None);
        assert_eq!(find_in_prefix(&Dims(5, 8), &LIST, 4), Some(3));
        assert_eq!(find_in_prefix(&Dims(1, 2), &LIST, 0), None);
    }

    #[test]
    fn removal_takes_last_of_prefix() {
        let mut list = LIST;
        assert!(remove_from_prefix(&Dims(1, 2), &mut list, 3));
        assert_eq!(list, [Dims(4, 3), Dims(3, 4), Dims(4, 3), Dims(5, 8)]);

        let mut list = LIST;
        assert!(!remove_from_prefix(&Dims(5, 8), &mut list, 3));
        assert_eq!(list, LIST);
    }
}
