pub mod queue_client;
