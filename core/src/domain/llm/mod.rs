pub mod ports;
pub mod value_objects;

pub use ports::LLMClient;
pub use value_objects::ImageInput;
