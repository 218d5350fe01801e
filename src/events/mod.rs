mod pointer;

pub use pointer::WindowPointerSource;
