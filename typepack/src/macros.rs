/// Build a [`TypePack`](crate::TypePack) from a list of types.
///
/// ```
/// use typepack::{pack, TypeToken};
///
/// let pack = pack![f32, i32, char];
/// assert_eq!(pack.len(), 3);
/// assert_eq!(pack.at(1), Ok(TypeToken::of::<i32>()));
/// ```
#[macro_export]
macro_rules! pack {
    () => {
        $crate::TypePack::empty()
    };
    ($($t:ty),+ $(,)?) => {
        $crate::TypePack::new(::std::vec![$($crate::TypeToken::of::<$t>()),+])
    };
}

/// Concatenate any number of packs and singletons.
///
/// ```
/// use typepack::{concat_packs, pack, Just};
///
/// let joined = concat_packs![pack![u8, u16], Just::of::<char>(), pack![]];
/// assert_eq!(joined, pack![u8, u16, char]);
/// ```
///
/// A bare token is not an operand:
///
/// ```compile_fail
/// use typepack::{concat_packs, pack, TypeToken};
///
/// let _ = concat_packs![pack![u8], TypeToken::of::<char>()];
/// ```
#[macro_export]
macro_rules! concat_packs {
    () => {
        $crate::TypePack::empty()
    };
    ($($piece:expr),+ $(,)?) => {
        $crate::concatenate([$($crate::Piece::from($piece)),*])
    };
}

/// A type-level list of the given types.
#[macro_export]
macro_rules! tlist {
    () => {
        $crate::list::Nil
    };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::list::Cons<$head, $crate::tlist![$($tail),*]>
    };
}

/// Type-level concatenation of lists and [`Only`](crate::list::Only)
/// singletons, associating to the right.
#[macro_export]
macro_rules! concat_types {
    () => {
        $crate::list::Nil
    };
    ($only:ty $(,)?) => {
        <$only as $crate::list::Concat<$crate::list::Nil>>::Output
    };
    ($head:ty, $($rest:ty),+ $(,)?) => {
        <$head as $crate::list::Concat<$crate::concat_types![$($rest),+]>>::Output
    };
}
