mod image;

pub use self::image::ImageStorage;
