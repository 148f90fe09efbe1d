pub mod brand;
pub mod category;
pub mod image;
pub mod product;

pub use brand::{Brand, BrandInput, BrandKey};
pub use category::{Category, CategoryInput, CategoryKey};
pub use image::{Image, ImageInput, ImageKey};
pub use product::{Product, ProductInput, ProductKey};
