pub mod txt;

pub use txt::HickoryTxtResolver;
