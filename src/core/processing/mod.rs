pub mod composite;
pub mod mask;
pub mod pipeline;
pub mod resize;
