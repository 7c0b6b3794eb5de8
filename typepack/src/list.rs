//! Type-level lists.
//!
//! These are resolved entirely by the trait solver. Structural operations
//! that are misused don't produce an error value: they fail to compile.
//!
//! ```
//! use typepack::list::{HeadOf, TypeList};
//! use typepack::tlist;
//!
//! type Numbers = tlist![f32, i32, char];
//! assert_eq!(<Numbers as TypeList>::SIZE, 3);
//! let _: HeadOf<Numbers> = 1.5f32;
//! ```
//!
//! The empty list has no head:
//!
//! ```compile_fail
//! use typepack::list::{HeadOf, Nil};
//! let _: HeadOf<Nil> = 1.5f32;
//! ```
//!
//! nor a tail:
//!
//! ```compile_fail
//! use typepack::list::{Nil, TailOf};
//! let _: Option<TailOf<Nil>> = None;
//! ```
//!
//! and popping its back doesn't resolve either, although popping its front
//! gives the empty list:
//!
//! ```compile_fail
//! use typepack::list::{Nil, PopBackOf};
//! let _: Option<PopBackOf<Nil>> = None;
//! ```
//!
//! ```
//! use typepack::list::{Nil, PopFrontOf};
//! let _: PopFrontOf<Nil> = Nil;
//! ```
//!
//! A bare type is not a concatenation operand; it has to be wrapped in
//! [`Only`]:
//!
//! ```compile_fail
//! use typepack::concat_types;
//! type Broken = concat_types![i32, u8];
//! let _: Option<Broken> = None;
//! ```
//!
//! Identity-dependent algorithms (find, remove, unique, sort) need to compare
//! arbitrary types, which the trait solver can't do for generic types on
//! stable Rust. [`Reify`] turns a list into a [`TypePack`] for those.

use std::marker::PhantomData;

use crate::{Token, TypePack, TypeToken};

/// The empty list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Nil;

/// A list with head `H` and tail `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cons<H, T>(PhantomData<(H, T)>);

/// A single type, wrapped so it can be a concatenation operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Only<T>(PhantomData<T>);

pub trait TypeList {
    const SIZE: usize;
    const EMPTY: bool = Self::SIZE == 0;
}

impl TypeList for Nil {
    const SIZE: usize = 0;
}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    const SIZE: usize = 1 + T::SIZE;
}

/// Turn a list into its descriptor.
pub trait Reify: TypeList {
    fn pack() -> TypePack {
        let mut tokens = Vec::with_capacity(Self::SIZE);
        Self::collect(&mut tokens);
        TypePack::new(tokens)
    }

    #[doc(hidden)]
    fn collect(tokens: &mut Vec<TypeToken>);
}

impl Reify for Nil {
    fn collect(_tokens: &mut Vec<TypeToken>) {}
}

impl<H: Token, T: Reify> Reify for Cons<H, T> {
    fn collect(tokens: &mut Vec<TypeToken>) {
        tokens.push(TypeToken::of::<H>());
        T::collect(tokens);
    }
}

pub trait Head {
    type Output;
}

impl<H, T> Head for Cons<H, T> {
    type Output = H;
}

pub trait Tail {
    type Output;
}

impl<H, T> Tail for Cons<H, T> {
    type Output = T;
}

pub trait PushFront<X> {
    type Output;
}

impl<X> PushFront<X> for Nil {
    type Output = Cons<X, Nil>;
}

impl<X, H, T> PushFront<X> for Cons<H, T> {
    type Output = Cons<X, Cons<H, T>>;
}

pub trait PushBack<X> {
    type Output;
}

impl<X> PushBack<X> for Nil {
    type Output = Cons<X, Nil>;
}

impl<X, H, T: PushBack<X>> PushBack<X> for Cons<H, T> {
    type Output = Cons<H, T::Output>;
}

/// Drop the first type; the empty list stays empty.
pub trait PopFront {
    type Output;
}

impl PopFront for Nil {
    type Output = Nil;
}

impl<H, T> PopFront for Cons<H, T> {
    type Output = T;
}

/// Drop the last type; not defined for the empty list.
pub trait PopBack {
    type Output;
}

impl<H> PopBack for Cons<H, Nil> {
    type Output = Nil;
}

impl<H, H2, T> PopBack for Cons<H, Cons<H2, T>>
where
    Cons<H2, T>: PopBack,
{
    type Output = Cons<H, <Cons<H2, T> as PopBack>::Output>;
}

/// Concatenation of lists and [`Only`] singletons.
pub trait Concat<R> {
    type Output;
}

impl Concat<Nil> for Nil {
    type Output = Nil;
}

impl<X, Y> Concat<Cons<X, Y>> for Nil {
    type Output = Cons<X, Y>;
}

impl<B> Concat<Only<B>> for Nil {
    type Output = Cons<B, Nil>;
}

impl<H, T: Concat<R>, R> Concat<R> for Cons<H, T> {
    type Output = Cons<H, T::Output>;
}

impl<A> Concat<Nil> for Only<A> {
    type Output = Cons<A, Nil>;
}

impl<A, X, Y> Concat<Cons<X, Y>> for Only<A> {
    type Output = Cons<A, Cons<X, Y>>;
}

impl<A, B> Concat<Only<B>> for Only<A> {
    type Output = Cons<A, Cons<B, Nil>>;
}

/// A type-level function from one type to another.
pub trait MapType<T> {
    type Output;
}

pub trait Transform<M> {
    type Output;
}

impl<M> Transform<M> for Nil {
    type Output = Nil;
}

impl<M: MapType<H>, H, T: Transform<M>> Transform<M> for Cons<H, T> {
    type Output = Cons<M::Output, T::Output>;
}

pub type HeadOf<L> = <L as Head>::Output;
pub type TailOf<L> = <L as Tail>::Output;
pub type PushFrontOf<X, L> = <L as PushFront<X>>::Output;
pub type PushBackOf<X, L> = <L as PushBack<X>>::Output;
pub type PopFrontOf<L> = <L as PopFront>::Output;
pub type PopBackOf<L> = <L as PopBack>::Output;
pub type ConcatOf<A, B> = <A as Concat<B>>::Output;
pub type TransformOf<M, L> = <L as Transform<M>>::Output;
