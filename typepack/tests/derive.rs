use typepack::{
    pack, BaseIsLess, Comparator, DerivedIsLess, IsBaseOf, Token, TypePack, TypeToken,
};

#[derive(Token)]
struct Animal;

#[derive(Token)]
#[token(base = Animal)]
struct Dog;

#[derive(Token)]
#[token(base = Dog)]
struct Puppy;

#[derive(Token)]
struct Pet;

// a diamond: two bases, both reaching Animal
#[derive(Token)]
#[token(base = Dog, base = Pet)]
struct Lapdog;

#[derive(Token)]
#[token(base = Animal)]
#[allow(dead_code)]
enum Bird {
    Sparrow,
    Robin,
}

#[test]
fn test_declared_bases() {
    assert_eq!(
        TypeToken::of::<Lapdog>().bases(),
        vec![TypeToken::of::<Dog>(), TypeToken::of::<Pet>()]
    );
    assert!(TypeToken::of::<Animal>().bases().is_empty());
}

#[test]
fn test_derives_from_transitively() {
    let puppy = TypeToken::of::<Puppy>();
    assert!(puppy.derives_from(TypeToken::of::<Dog>()));
    assert!(puppy.derives_from(TypeToken::of::<Animal>()));
    assert!(!puppy.derives_from(TypeToken::of::<Pet>()));
    assert!(TypeToken::of::<Lapdog>().derives_from(TypeToken::of::<Animal>()));
    assert!(TypeToken::of::<Lapdog>().derives_from(TypeToken::of::<Pet>()));
    assert!(TypeToken::of::<Bird>().derives_from(TypeToken::of::<Animal>()));
}

#[test]
fn test_is_base_of_is_reflexive() {
    let dog = TypeToken::of::<Dog>();
    assert!(IsBaseOf.less(&dog, &dog));
    assert!(!BaseIsLess::default().less(&dog, &dog));
}

#[test]
fn test_sort_bases_first() {
    let pack = pack![Dog, Animal, Puppy];
    assert_eq!(pack.sort(BaseIsLess::default()), pack![Animal, Dog, Puppy]);
}

#[test]
fn test_sort_derived_first() {
    let pack = pack![Dog, Animal, Puppy];
    assert_eq!(pack.sort(DerivedIsLess), pack![Puppy, Dog, Animal]);
}

#[test]
fn test_find_first_derived() {
    let pack: TypePack = pack![Pet, Bird, Puppy];
    let animal = TypeToken::of::<Animal>();
    assert_eq!(pack.find_if(|t: &TypeToken| t.derives_from(animal)), 1);
    assert_eq!(
        pack.count_if(|t: &TypeToken| t.derives_from(TypeToken::of::<Dog>())),
        1
    );
}

#[test]
fn test_equal_packs_sort_alike() {
    let dog = TypeToken::of::<Dog>();
    let animal = TypeToken::of::<Animal>();
    let deduped = TypePack::from(vec![dog, dog, animal]).unique();
    assert_eq!(deduped, pack![Dog, Animal]);
    assert!(BaseIsLess::default().less(&animal, &deduped.as_slice()[0]));
    assert_eq!(
        deduped.sort(BaseIsLess::default()),
        pack![Dog, Animal].sort(BaseIsLess::default())
    );
    assert_eq!(deduped.sort(BaseIsLess::default()), pack![Animal, Dog]);
}
