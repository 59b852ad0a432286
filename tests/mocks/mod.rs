pub mod mock_lead_sink;

pub use mock_lead_sink::MockLeadSink;
