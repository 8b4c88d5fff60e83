mod cell_writer;
mod ingest_counters;
mod observation_repository;
mod packet_decoder;

pub use cell_writer::CellWriter;
pub use ingest_counters::{IngestCounters, IngestReport};
pub use observation_repository::ObservationRepository;
pub use packet_decoder::PacketDecoder;
