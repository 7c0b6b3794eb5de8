use static_assertions::assert_type_eq_all;
use typepack::list::{
    Concat, HeadOf, MapType, Only, PopBackOf, Reify, TransformOf, TypeList,
};
use typepack::{concat_types, pack, tlist, SizeOrderLess, Token};

#[derive(Token)]
struct Meters;
#[derive(Token)]
struct Seconds;

struct Boxed;

impl<T> MapType<T> for Boxed {
    type Output = Box<T>;
}

type Units = tlist![Meters, Seconds];

assert_type_eq_all!(HeadOf<Units>, Meters);
assert_type_eq_all!(PopBackOf<Units>, tlist![Meters]);
assert_type_eq_all!(TransformOf<Boxed, Units>, tlist![Box<Meters>, Box<Seconds>]);
assert_type_eq_all!(
    concat_types![Units, Only<u8>, tlist![]],
    tlist![Meters, Seconds, u8]
);
assert_type_eq_all!(<Only<u8> as Concat<Only<u16>>>::Output, tlist![u8, u16]);

#[test]
fn test_size_at_compile_time() {
    const SIZE: usize = <concat_types![Units, Units] as TypeList>::SIZE;
    assert_eq!(SIZE, 4);
}

#[test]
fn test_reify_then_sort() {
    type Mixed = tlist![u64, Meters, u8, u32];
    let pack = <Mixed as Reify>::pack();
    assert_eq!(pack, pack![u64, Meters, u8, u32]);
    assert_eq!(pack.sort(SizeOrderLess), pack![Meters, u8, u32, u64]);
}
