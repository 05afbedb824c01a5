//! [`Serialize`](crate::Serialize) and [`Deserialize`](crate::Deserialize)
//! implementations for standard library types.

mod collections;
mod primitive;
mod tuple;
mod wrapper;
