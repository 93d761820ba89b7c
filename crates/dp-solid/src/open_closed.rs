//! Open/closed principle: filtering through composable specifications.
//!
//! A [`Filter`] is closed for modification: it only knows how to ask a
//! [`Specification`] whether an item is acceptable. New criteria are added
//! by writing new specifications (or combining existing ones with `&`),
//! never by touching the filter.
//!
//! # Example
//! ```
//! use dp_solid::open_closed::{
//!     BetterFilter, Color, ColorSpecification, Filter, Product, Size, SizeSpecification,
//! };
//!
//! let products = vec![
//!     Product::new("Apple", Color::Green, Size::Small),
//!     Product::new("Tree", Color::Green, Size::Large),
//!     Product::new("House", Color::Blue, Size::Large),
//! ];
//!
//! let large_blue = SizeSpecification::new(Size::Large) & ColorSpecification::new(Color::Blue);
//! let names: Vec<_> = BetterFilter
//!     .filter(&products, &large_blue)
//!     .map(|p| p.name.as_str())
//!     .collect();
//! assert_eq!(names, ["House"]);
//! ```

use std::fmt;
use std::ops::BitAnd;

/// Product color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Green => write!(f, "green"),
            Color::Blue => write!(f, "blue"),
        }
    }
}

/// Product size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    /// Small.
    Small,
    /// Medium.
    Medium,
    /// Large.
    Large,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Small => write!(f, "small"),
            Size::Medium => write!(f, "medium"),
            Size::Large => write!(f, "large"),
        }
    }
}

/// A named product with a color and a size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Display name.
    pub name: String,
    /// Color of the product.
    pub color: Color,
    /// Size of the product.
    pub size: Size,
}

impl Product {
    /// Create a product.
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

/// A predicate over items of type `T`.
pub trait Specification<T> {
    /// Return `true` if `item` meets this specification.
    fn is_satisfied(&self, item: &T) -> bool;
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// Accepts products of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    /// Accept products whose color is `color`.
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

/// Accepts products of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    /// Accept products whose size is `size`.
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}

/// Accepts items satisfying both of its parts.
///
/// Usually built with the `&` operator rather than directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    /// Combine two specifications.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A: Specification<T>, B: Specification<T>> Specification<T> for AndSpecification<A, B> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

/// Accepts items satisfying every specification in a runtime-built list.
///
/// An empty list accepts everything.
pub struct AllOf<T> {
    specs: Vec<Box<dyn Specification<T>>>,
}

impl<T> AllOf<T> {
    /// Create an empty conjunction.
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Add a specification (builder style).
    pub fn with(mut self, spec: impl Specification<T> + 'static) -> Self {
        self.push(spec);
        self
    }

    /// Add a specification.
    pub fn push(&mut self, spec: impl Specification<T> + 'static) {
        self.specs.push(Box::new(spec));
    }

    /// Number of specifications combined.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Return `true` if no specification has been added.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T> Default for AllOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Specification<T> for AllOf<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(item))
    }
}

macro_rules! impl_bitand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<R> BitAnd<R> for $ty {
                type Output = AndSpecification<Self, R>;

                fn bitand(self, rhs: R) -> Self::Output {
                    AndSpecification::new(self, rhs)
                }
            }
        )*
    };
}

impl_bitand!(ColorSpecification, SizeSpecification);

impl<A, B, R> BitAnd<R> for AndSpecification<A, B> {
    type Output = AndSpecification<Self, R>;

    fn bitand(self, rhs: R) -> Self::Output {
        AndSpecification::new(self, rhs)
    }
}

/// Selects the items of a slice that meet a specification.
pub trait Filter<T> {
    /// Lazily yield the items of `items` satisfying `spec`, in order.
    fn filter<'a, S>(&self, items: &'a [T], spec: &'a S) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        S: Specification<T> + ?Sized;
}

/// The filter that delegates every decision to the specification.
#[derive(Debug, Clone, Copy, Default)]
pub struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn filter<'a, S>(&self, items: &'a [T], spec: &'a S) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        S: Specification<T> + ?Sized,
    {
        Box::new(items.iter().filter(move |item| {
            let matched = spec.is_satisfied(item);
            tracing::trace!(matched, "specification evaluated");
            matched
        }))
    }
}
