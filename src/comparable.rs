/// A type whose values can be ordered against other values of the same type.
///
/// `less` must describe a strict weak ordering: `a.less(b)` and `b.less(a)`
/// are never both true. Every `Ord` type is `Comparable` through `<`.
pub trait Comparable {
    /// Reports whether `self` must sort before `other`.
    fn less(&self, other: &Self) -> bool;
}

impl<T: Ord + ?Sized> Comparable for T {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        self < other
    }
}

#[cfg(test)]
mod test {
    use super::Comparable;
    use std::cmp::Reverse;

    struct Deadline(f64);

    impl Comparable for Deadline {
        fn less(&self, other: &Self) -> bool {
            self.0 < other.0
        }
    }

    #[test]
    fn ord_types_compare_with_lt() {
        assert!(1_i32.less(&2));
        assert!(!2_i32.less(&2));
        assert!(String::from("abc").less(&String::from("abd")));
        assert!(Reverse(5_i32).less(&Reverse(3)));
    }
    #[test]
    fn custom_types_compare_with_their_own_less() {
        assert!(Deadline(0.5).less(&Deadline(1.5)));
        assert!(!Deadline(1.5).less(&Deadline(1.5)));
    }
}
