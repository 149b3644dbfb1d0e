/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (CLI, HTTP service)
/// use to query the application core.
pub mod ledger_query_port;

pub use ledger_query_port::LedgerQueryPort;
