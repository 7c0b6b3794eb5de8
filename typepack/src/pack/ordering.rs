use crate::compare::{Comparator, Not};
use crate::partial::partial_apply_last;
use crate::TypeToken;

use super::pack_core::TypePack;

// a pending step of the quicksort
enum Task {
    Sort(TypePack),
    Emit(TypeToken),
}

impl TypePack {
    /// Lexicographic "less than" of two packs under `less`.
    ///
    /// A proper prefix is less than the longer pack; two equivalent packs
    /// are not less than each other.
    pub fn lexicographical_compare(&self, other: &TypePack, less: impl Comparator) -> bool {
        for (a, b) in self.iter().zip(other.iter()) {
            if less.less(&a, &b) {
                return true;
            }
            if less.less(&b, &a) {
                return false;
            }
        }
        self.len() < other.len()
    }

    /// True if no adjacent pair is out of order under `less`.
    pub fn is_sorted(&self, less: impl Comparator) -> bool {
        self.as_slice()
            .windows(2)
            .all(|pair| !less.less(&pair[1], &pair[0]))
    }

    /// The greatest token under `less`, or `None` for the empty pack.
    ///
    /// Among equivalent tokens the first one wins.
    pub fn max(&self, less: impl Comparator) -> Option<TypeToken> {
        self.iter()
            .reduce(|current, token| if less.less(&current, &token) { token } else { current })
    }

    /// The least token under `less`, or `None` for the empty pack.
    ///
    /// Among equivalent tokens the first one wins.
    pub fn min(&self, less: impl Comparator) -> Option<TypeToken> {
        self.iter()
            .reduce(|current, token| if less.less(&token, &current) { token } else { current })
    }

    /// Quicksort under `less`.
    ///
    /// The first token is the pivot. The remaining tokens are partitioned
    /// into those less than the pivot and the rest, both partitions are
    /// sorted, and the result is the sorted lesser part, the pivot and the
    /// sorted rest. The sort is not stable.
    ///
    /// Pending partitions are kept on an explicit work list, so long packs
    /// don't grow the call stack.
    pub fn sort(&self, less: impl Comparator) -> TypePack {
        if self.len() < 2 {
            return self.clone();
        }
        let by_less = |a: &TypeToken, b: &TypeToken| less.less(a, b);
        let mut sorted = Vec::with_capacity(self.len());
        let mut tasks = vec![Task::Sort(self.clone())];
        while let Some(task) = tasks.pop() {
            let pack = match task {
                Task::Emit(token) => {
                    sorted.push(token);
                    continue;
                }
                Task::Sort(pack) => pack,
            };
            let (pivot, rest) = match pack.as_slice() {
                [] => continue,
                [single] => {
                    sorted.push(*single);
                    continue;
                }
                [pivot, ..] => (*pivot, pack.pop_front()),
            };
            let lt_pivot = partial_apply_last(by_less, pivot);
            let lesser = rest.copy_if(lt_pivot);
            let greater_or_equal = rest.copy_if(Not(lt_pivot));
            tracing::trace!(
                %pivot,
                lesser = lesser.len(),
                greater_or_equal = greater_or_equal.len(),
                "partitioned"
            );
            // the work list is a stack: push in reverse order
            tasks.push(Task::Sort(greater_or_equal));
            tasks.push(Task::Emit(pivot));
            tasks.push(Task::Sort(lesser));
        }
        TypePack::new(sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{NameOrderLess, SizeOrderLess, SizeOrderMore};
    use crate::pack;

    #[test]
    fn test_lexicographical_compare() {
        let less = SizeOrderLess;
        assert!(pack![u8].lexicographical_compare(&pack![u8, u16], less));
        assert!(!pack![u8, u16].lexicographical_compare(&pack![u8], less));
        assert!(pack![u8, u64].lexicographical_compare(&pack![u16], less));
        assert!(!pack![u16].lexicographical_compare(&pack![u8, u64], less));
        assert!(!TypePack::empty().lexicographical_compare(&TypePack::empty(), less));
        assert!(TypePack::empty().lexicographical_compare(&pack![u8], less));
    }

    #[test]
    fn test_lexicographical_compare_equivalent() {
        // i32 and f32 are equivalent by weight
        let less = SizeOrderLess;
        assert!(!pack![i32, u8].lexicographical_compare(&pack![f32, u8], less));
        assert!(!pack![f32, u8].lexicographical_compare(&pack![i32, u8], less));
    }

    #[test]
    fn test_is_sorted() {
        assert!(TypePack::empty().is_sorted(SizeOrderLess));
        assert!(pack![u64].is_sorted(SizeOrderLess));
        assert!(pack![u8, u16, u16, u32].is_sorted(SizeOrderLess));
        assert!(!pack![u8, u32, u16].is_sorted(SizeOrderLess));
        assert!(pack![u32, u16, u8].is_sorted(SizeOrderMore));
    }

    #[test]
    fn test_max_min() {
        let pack = pack![u16, u64, u8, i64, i8];
        assert_eq!(pack.max(SizeOrderLess), Some(TypeToken::of::<u64>()));
        assert_eq!(pack.min(SizeOrderLess), Some(TypeToken::of::<u8>()));
        assert_eq!(TypePack::empty().max(SizeOrderLess), None);
        assert_eq!(TypePack::empty().min(SizeOrderLess), None);
    }

    #[test]
    fn test_sort_by_size() {
        let sorted = pack![u64, u8, u32, u16].sort(SizeOrderLess);
        assert_eq!(sorted, pack![u8, u16, u32, u64]);
        let sorted = pack![u64, u8, u32, u16].sort(SizeOrderMore);
        assert_eq!(sorted, pack![u64, u32, u16, u8]);
    }

    #[test]
    fn test_sort_base_cases() {
        assert_eq!(TypePack::empty().sort(SizeOrderLess), TypePack::empty());
        assert_eq!(pack![char].sort(SizeOrderLess), pack![char]);
    }

    #[test]
    fn test_sort_keeps_duplicates() {
        let sorted = pack![u32, u8, u32, u8].sort(SizeOrderLess);
        assert_eq!(sorted, pack![u8, u8, u32, u32]);
    }

    #[test]
    fn test_sort_by_name() {
        let sorted = pack![u8, char, i64, bool].sort(NameOrderLess);
        assert_eq!(sorted, pack![bool, char, i64, u8]);
    }

    #[test]
    fn test_sort_equivalent_follow_pivot() {
        // equivalent tokens end up after the pivot in their original order
        let sorted = pack![i32, u8, f32, u32].sort(SizeOrderLess);
        assert_eq!(sorted, pack![u8, i32, f32, u32]);
    }

    #[test]
    fn test_sort_long_pack() {
        let tokens = [TypeToken::of::<u64>(), TypeToken::of::<u8>()];
        let pack: TypePack = (0..2000).map(|i| tokens[i % 2]).collect();
        let sorted = pack.sort(SizeOrderLess);
        assert!(sorted.is_sorted(SizeOrderLess));
        assert_eq!(sorted.count(TypeToken::of::<u8>()), 1000);
    }
}
