mod builder;
mod error;
mod nominal;
mod simulator;

pub use builder::MdpBuilder;
pub use error::MdpError;
pub use nominal::NominalMdp;
pub use simulator::MdpSimulator;
