pub mod a2p;
pub mod act;
