mod get_rdata_history;
mod get_rrset_history;

pub use get_rdata_history::GetRdataHistoryUseCase;
pub use get_rrset_history::GetRrsetHistoryUseCase;
