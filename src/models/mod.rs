pub mod product;

pub use product::{NewProduct, Pagination, Product, ProductPage, ProductPayload};
