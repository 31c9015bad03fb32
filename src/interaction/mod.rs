pub mod pointer;
pub mod resize;
pub mod session;
