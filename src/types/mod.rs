pub mod span;
pub mod triple;

pub use span::TreeSpan;
pub use triple::TreeTriple;
