pub mod packet_decoder;

pub use packet_decoder::HickoryPacketDecoder;
